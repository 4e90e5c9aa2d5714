#![allow(dead_code)]

pub mod temp_files {
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// Creates an empty directory that is removed when the guard drops
    pub fn unique_dir(label: &str) -> TempDir {
        tempfile::Builder::new()
            .prefix(&format!("routewire_{label}_"))
            .tempdir()
            .unwrap()
    }

    /// Writes `content` as a spec file inside a fresh directory
    pub fn write_spec(content: &str, file_name: &str) -> (TempDir, PathBuf) {
        let dir = unique_dir("spec");
        let path = dir.path().join(file_name);
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }
}

pub mod fixtures {
    use std::path::PathBuf;

    pub fn path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join(name)
    }

    pub fn shop_spec() -> PathBuf {
        path("shop.yaml")
    }
}
