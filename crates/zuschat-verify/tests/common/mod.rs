#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use zuschat_verify::checks::{REQUIRED_FEATURES, REQUIRED_FILES};

pub const MANIFEST: &str = r#"
[workspace]
members = [
    "crates/zuschat-types",
    "crates/zuschat-store",
    "crates/zuschat-chat",
    "crates/zuschat-app",
]

[workspace.dependencies]
tokio = { version = "1", features = ["full"] }
reqwest = { version = "0.12", features = ["json"] }
serde = { version = "1", features = ["derive"] }
"#;

pub fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// A checkout that passes every check
pub fn scaffold() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    for (subdir, files) in REQUIRED_FILES {
        for file in *files {
            let relative = if *subdir == "root" {
                file.to_string()
            } else {
                format!("{}/{}", subdir, file)
            };
            write(root, &relative, "");
        }
    }

    for (file, keywords) in REQUIRED_FEATURES {
        write(root, file, &keywords.join("\n"));
    }

    write(root, "Cargo.toml", MANIFEST);
    write(root, ".env", "# backend\nZUSCHAT_BACKEND_URL=http://localhost:8000\n");
    dir
}
