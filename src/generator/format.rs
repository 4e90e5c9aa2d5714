//! File naming styles and package-path joining.
//!
//! A style is written as the two words `go` and `zero` in the casing and with
//! the separator the output should use: `gozero`, `go_zero`, `go-zero`,
//! `goZero`, `GoZero`, `GO_ZERO`. The first word of a converted name takes the
//! casing of `go`, every following word the casing of `zero`.

use crate::error::{GenError, Result};
use heck::ToSnakeCase;
use once_cell::sync::Lazy;
use regex::Regex;

pub const DEFAULT_NAMING_FORMAT: &str = "gozero";

static STYLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(go|Go|GO)([_-]?)(zero|Zero|ZERO)$").expect("naming style regex should be valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WordCase {
    Lower,
    Title,
    Upper,
}

impl WordCase {
    fn of(token: &str) -> Self {
        if token.chars().all(|c| c.is_ascii_uppercase()) {
            WordCase::Upper
        } else if token.starts_with(|c: char| c.is_ascii_uppercase()) {
            WordCase::Title
        } else {
            WordCase::Lower
        }
    }

    fn apply(self, word: &str) -> String {
        match self {
            WordCase::Lower => word.to_lowercase(),
            WordCase::Upper => word.to_uppercase(),
            WordCase::Title => capitalize_first(&word.to_lowercase()),
        }
    }
}

/// A parsed naming style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamingFormat {
    first: WordCase,
    rest: WordCase,
    separator: &'static str,
}

impl NamingFormat {
    pub fn parse(style: &str) -> Result<Self> {
        let style = if style.trim().is_empty() {
            DEFAULT_NAMING_FORMAT
        } else {
            style.trim()
        };
        let caps = STYLE_RE.captures(style).ok_or_else(|| GenError::Format {
            style: style.to_string(),
            name: String::new(),
            reason: "expected a style such as gozero, go_zero, goZero or GoZero".to_string(),
        })?;
        let separator = match &caps[2] {
            "_" => "_",
            "-" => "-",
            _ => "",
        };
        Ok(NamingFormat {
            first: WordCase::of(&caps[1]),
            rest: WordCase::of(&caps[3]),
            separator,
        })
    }

    /// Convert `name` (any mix of snake, kebab or camel case) to this style.
    pub fn apply(&self, name: &str) -> Result<String> {
        let snake = name.to_snake_case();
        let words: Vec<&str> = snake.split('_').filter(|w| !w.is_empty()).collect();
        if words.is_empty() {
            return Err(GenError::Format {
                style: self.to_string(),
                name: name.to_string(),
                reason: "name has no alphanumeric words".to_string(),
            });
        }
        let converted: Vec<String> = words
            .iter()
            .enumerate()
            .map(|(i, w)| {
                if i == 0 {
                    self.first.apply(w)
                } else {
                    self.rest.apply(w)
                }
            })
            .collect();
        Ok(converted.join(self.separator))
    }
}

impl std::fmt::Display for NamingFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let first = match self.first {
            WordCase::Lower => "go",
            WordCase::Title => "Go",
            WordCase::Upper => "GO",
        };
        let rest = match self.rest {
            WordCase::Lower => "zero",
            WordCase::Title => "Zero",
            WordCase::Upper => "ZERO",
        };
        write!(f, "{first}{}{rest}", self.separator)
    }
}

/// Convert `name` with the naming style `style`.
pub fn file_naming_format(style: &str, name: &str) -> Result<String> {
    NamingFormat::parse(style)?.apply(name)
}

/// Upper-case the first character of `s`, leaving the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Join package path segments with `/`, skipping empty segments.
pub fn join_packages(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim_matches('/'))
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles() {
        let name = "user_middleware";
        assert_eq!(file_naming_format("gozero", name).unwrap(), "usermiddleware");
        assert_eq!(file_naming_format("go_zero", name).unwrap(), "user_middleware");
        assert_eq!(file_naming_format("go-zero", name).unwrap(), "user-middleware");
        assert_eq!(file_naming_format("goZero", name).unwrap(), "userMiddleware");
        assert_eq!(file_naming_format("GoZero", name).unwrap(), "UserMiddleware");
        assert_eq!(file_naming_format("GO_ZERO", name).unwrap(), "USER_MIDDLEWARE");
    }

    #[test]
    fn test_camel_input_is_split_into_words() {
        assert_eq!(
            file_naming_format("go_zero", "orderAudit_middleware").unwrap(),
            "order_audit_middleware"
        );
        assert_eq!(file_naming_format("gozero", "routes").unwrap(), "routes");
    }

    #[test]
    fn test_empty_style_uses_default() {
        assert_eq!(file_naming_format("", "user_middleware").unwrap(), "usermiddleware");
    }

    #[test]
    fn test_rejects_unknown_style() {
        let err = file_naming_format("snake", "routes").unwrap_err();
        assert!(matches!(err, GenError::Format { .. }));
        assert!(file_naming_format("go__zero", "routes").is_err());
    }

    #[test]
    fn test_rejects_wordless_name() {
        let err = file_naming_format("gozero", "__").unwrap_err();
        assert!(err.to_string().contains("no alphanumeric words"));
    }

    #[test]
    fn test_display_round_trips_style() {
        for style in ["gozero", "go_zero", "goZero", "GoZero", "GO-ZERO"] {
            assert_eq!(NamingFormat::parse(style).unwrap().to_string(), style);
        }
    }

    #[test]
    fn test_join_packages() {
        assert_eq!(
            join_packages(&["github.com/acme/shop", "internal/handler", "order"]),
            "github.com/acme/shop/internal/handler/order"
        );
        assert_eq!(join_packages(&["root/", "", "/svc"]), "root/svc");
    }
}
