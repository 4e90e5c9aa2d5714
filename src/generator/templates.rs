use minijinja::{AutoEscape, Environment};
use serde::Serialize;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{GenError, Result};

/// Sub-directory of the template home that holds this generator's overrides.
pub const TEMPLATE_CATEGORY: &str = "api";

/// File name of the route-registration template.
pub const ROUTES_TEMPLATE_FILE: &str = "routes.tpl";
/// File name of the per-group / per-route fragment template.
pub const ROUTE_ADDITION_TEMPLATE_FILE: &str = "route-addition.tpl";
/// File name of the middleware scaffold template.
pub const MIDDLEWARE_TEMPLATE_FILE: &str = "middleware.tpl";

pub const ROUTES_TEMPLATE: &str = include_str!("../../templates/routes.tpl");
pub const ROUTE_ADDITION_TEMPLATE: &str = include_str!("../../templates/route-addition.tpl");
pub const MIDDLEWARE_TEMPLATE: &str = include_str!("../../templates/middleware.tpl");

/// How a generated file treats an existing file at its target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Remove whatever is there, then write. Used for fully regenerated output.
    ForceOverwrite,
    /// Leave an existing file untouched. Used for user-owned scaffolds.
    CreateIfAbsent,
}

/// What [`gen_file`] did with the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Written(PathBuf),
    Skipped(PathBuf),
}

impl WriteOutcome {
    pub fn path(&self) -> &Path {
        match self {
            WriteOutcome::Written(p) | WriteOutcome::Skipped(p) => p,
        }
    }

    pub fn was_written(&self) -> bool {
        matches!(self, WriteOutcome::Written(_))
    }
}

/// Resolves template sources: a user override under `<home>/<category>/`
/// when present, the built-in body otherwise.
#[derive(Debug, Clone, Default)]
pub struct TemplateStore {
    home: Option<PathBuf>,
    category: String,
}

impl TemplateStore {
    pub fn new(home: Option<PathBuf>) -> Self {
        Self {
            home,
            category: TEMPLATE_CATEGORY.to_string(),
        }
    }

    /// A store that only ever returns built-in templates.
    pub fn builtin() -> Self {
        Self::new(None)
    }

    fn override_path(&self, template_file: &str) -> Option<PathBuf> {
        self.home
            .as_ref()
            .map(|home| home.join(&self.category).join(template_file))
    }

    /// Source text for `template_file`, falling back to `builtin`.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::TemplateLoad`] when an override exists but cannot be read.
    pub fn load(&self, template_file: &str, builtin: &'static str) -> Result<Cow<'static, str>> {
        match self.override_path(template_file) {
            Some(path) if path.is_file() => {
                let source = fs::read_to_string(&path).map_err(|e| GenError::TemplateLoad {
                    name: path.display().to_string(),
                    reason: e.to_string(),
                })?;
                Ok(Cow::Owned(source))
            }
            _ => Ok(Cow::Borrowed(builtin)),
        }
    }
}

/// A compiled template, ready to be rendered repeatedly.
pub struct Template<'s> {
    env: Environment<'s>,
    name: &'s str,
}

impl<'s> Template<'s> {
    /// Compile `source` under `name`.
    ///
    /// Output is plain source code: auto-escaping is off and the trailing
    /// newline is kept. Block tags on their own line do not leave blank lines.
    pub fn compile(name: &'s str, source: &'s str) -> Result<Self> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.add_template(name, source)
            .map_err(|e| GenError::TemplateLoad {
                name: name.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self { env, name })
    }

    pub fn render<S: Serialize>(&self, ctx: S) -> Result<String> {
        let render_err = |source| GenError::Render {
            name: self.name.to_string(),
            source,
        };
        self.env
            .get_template(self.name)
            .map_err(render_err)?
            .render(ctx)
            .map_err(render_err)
    }
}

/// Target and template selection for one generated file.
#[derive(Debug, Clone)]
pub struct FileGenConfig<'a> {
    pub dir: &'a Path,
    pub subdir: &'a str,
    pub filename: String,
    pub template_name: &'a str,
    pub template_file: &'a str,
    pub builtin: &'static str,
    pub mode: WriteMode,
}

impl FileGenConfig<'_> {
    pub fn target(&self) -> PathBuf {
        self.dir.join(self.subdir).join(&self.filename)
    }
}

/// Render a template with `data` and persist it according to `cfg.mode`.
///
/// In [`WriteMode::ForceOverwrite`] the text is rendered before the old file
/// is removed, so a failed render leaves the previous output in place. The
/// removal and the write are not atomic.
pub fn gen_file<S: Serialize>(
    store: &TemplateStore,
    cfg: &FileGenConfig<'_>,
    data: S,
) -> Result<WriteOutcome> {
    let path = cfg.target();
    if cfg.mode == WriteMode::CreateIfAbsent && path.exists() {
        info!(path = %path.display(), "Skipping existing file");
        return Ok(WriteOutcome::Skipped(path));
    }

    let source = store.load(cfg.template_file, cfg.builtin)?;
    let rendered = Template::compile(cfg.template_name, &source)?.render(data)?;
    emit_file(&path, &rendered, cfg.mode)
}

/// Write `content` to `path` according to `mode`, creating parent directories.
pub fn emit_file(path: &Path, content: &str, mode: WriteMode) -> Result<WriteOutcome> {
    match mode {
        WriteMode::ForceOverwrite => match fs::remove_file(path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(GenError::io(path, e)),
        },
        WriteMode::CreateIfAbsent => {
            if path.exists() {
                info!(path = %path.display(), "Skipping existing file");
                return Ok(WriteOutcome::Skipped(path.to_path_buf()));
            }
        }
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| GenError::io(parent, e))?;
    }
    fs::write(path, content).map_err(|e| GenError::io(path, e))?;
    info!(path = %path.display(), "Generated file");
    Ok(WriteOutcome::Written(path.to_path_buf()))
}
