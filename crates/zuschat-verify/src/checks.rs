use std::path::Path;

use reqwest::Url;
use zuschat_types::{BACKEND_URL_ENV, DEFAULT_BACKEND_URL};

use crate::error::CheckError;
use crate::report::Step;

/// Files that must exist, grouped by directory relative to the workspace root
pub const REQUIRED_FILES: &[(&str, &[&str])] = &[
    ("root", &["Cargo.toml", ".env", ".gitignore", "README.md"]),
    ("crates/zuschat-types/src", &["lib.rs"]),
    ("crates/zuschat-api/src", &["lib.rs", "http.rs", "deadline.rs", "error.rs"]),
    ("crates/zuschat-store/src", &["lib.rs", "session.rs", "storage.rs"]),
    ("crates/zuschat-chat/src", &["lib.rs", "state.rs", "controller.rs", "render.rs"]),
    ("crates/zuschat-app/src", &["main.rs", "cli.rs", "config.rs"]),
];

/// Keywords each core source must mention
pub const REQUIRED_FEATURES: &[(&str, &[&str])] = &[
    (
        "crates/zuschat-chat/src/controller.rs",
        &[
            "SessionStore",
            "session_id",
            "fn submit",
            "fn reset",
            "with_deadline",
            "ChatBackend",
            "tool_used",
        ],
    ),
    (
        "crates/zuschat-chat/src/render.rs",
        &[
            "ToolBadge",
            "Calculator",
            "Product RAG",
            "Outlet Text2SQL",
            "avatar",
            "timestamp",
        ],
    ),
    (
        "crates/zuschat-store/src/session.rs",
        &[
            "HISTORY_KEY",
            "SESSION_KEY",
            "load_history",
            "append_and_persist",
            "fn reset",
        ],
    ),
];

pub const REQUIRED_DEPENDENCIES: &[&str] = &["tokio", "reqwest", "serde"];

pub const REQUIRED_MEMBERS: &[&str] = &["crates/zuschat-app", "crates/zuschat-chat", "crates/zuschat-store"];

/// Smaller flat list checked by `quick-verify`
pub const QUICK_FILES: &[&str] = &[
    "Cargo.toml",
    "crates/zuschat-app/src/main.rs",
    "crates/zuschat-chat/src/controller.rs",
    "crates/zuschat-chat/src/render.rs",
    "crates/zuschat-store/src/session.rs",
    ".env",
];

pub fn check_required_files(root: &Path) -> Step {
    let mut step = Step::new("Checking directory structure");

    for (dir, files) in REQUIRED_FILES {
        let dir_path = if *dir == "root" { root.to_path_buf() } else { root.join(dir) };

        if *dir != "root" && !dir_path.is_dir() {
            step.fail(format!("Missing directory: {}", dir));
            continue;
        }

        for file in *files {
            if dir_path.join(file).exists() {
                step.pass(format!("{}/{}", dir, file));
            } else {
                step.fail(format!("Missing: {}/{}", dir, file));
            }
        }
    }

    step
}

pub fn check_quick_files(root: &Path) -> Step {
    let mut step = Step::new("Checking Project Structure");

    for file in QUICK_FILES {
        if !root.join(file).exists() {
            step.fail(format!("Missing: {}", file));
        }
    }

    if step.passed() {
        step.pass("All required files present");
    }
    step
}

pub fn check_required_features(root: &Path) -> Step {
    let mut step = Step::new("Checking required features in files");

    for (file, keywords) in REQUIRED_FEATURES {
        let path = root.join(file);
        if !path.exists() {
            step.fail(format!("File not found: {}", file));
            continue;
        }

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(source) => {
                step.fail(CheckError::Read { path, source }.to_string());
                continue;
            }
        };

        let missing: Vec<String> = keywords
            .iter()
            .filter(|k| !content.contains(*k))
            .map(|k| k.to_string())
            .collect();

        if missing.is_empty() {
            step.pass(format!("{} has all required features", file));
        } else {
            step.fail_with(format!("{} missing features:", file), missing);
        }
    }

    step
}

pub fn load_manifest(path: &Path) -> Result<toml::Table, CheckError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CheckError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    raw.parse::<toml::Table>().map_err(|source| CheckError::Manifest {
        path: path.to_path_buf(),
        source,
    })
}

pub fn check_manifest(root: &Path) -> Step {
    let mut step = Step::new("Checking Cargo.toml");

    let manifest = match load_manifest(&root.join("Cargo.toml")) {
        Ok(manifest) => manifest,
        Err(e) => {
            step.fail(e.to_string());
            return step;
        }
    };

    let workspace = manifest.get("workspace").and_then(|w| w.as_table());

    let dependencies = workspace
        .and_then(|w| w.get("dependencies"))
        .and_then(|d| d.as_table());
    let missing_deps: Vec<String> = REQUIRED_DEPENDENCIES
        .iter()
        .filter(|dep| !dependencies.is_some_and(|d| d.contains_key(**dep)))
        .map(|dep| dep.to_string())
        .collect();

    if missing_deps.is_empty() {
        step.pass("All required dependencies present");
    } else {
        step.fail_with("Missing dependencies:", missing_deps);
    }

    let members: Vec<&str> = workspace
        .and_then(|w| w.get("members"))
        .and_then(|m| m.as_array())
        .map(|m| m.iter().filter_map(|v| v.as_str()).collect())
        .unwrap_or_default();
    let missing_members: Vec<String> = REQUIRED_MEMBERS
        .iter()
        .filter(|member| !members.contains(*member))
        .map(|member| member.to_string())
        .collect();

    if missing_members.is_empty() {
        step.pass("All required workspace members present");
    } else {
        step.fail_with("Missing workspace members:", missing_members);
    }

    step
}

/// Variables defined in a dotenv file, in file order
pub fn load_env(path: &Path) -> Result<Vec<(String, String)>, CheckError> {
    let to_error = |source| CheckError::Env {
        path: path.to_path_buf(),
        source,
    };

    dotenvy::from_path_iter(path)
        .map_err(to_error)?
        .map(|item| item.map_err(to_error))
        .collect()
}

pub fn check_env(root: &Path) -> Step {
    let mut step = Step::new("Checking .env configuration");
    let path = root.join(".env");

    if !path.exists() {
        step.fail(".env file not found");
        return step;
    }

    match load_env(&path) {
        Ok(vars) if vars.iter().any(|(key, _)| key == BACKEND_URL_ENV) => {
            step.pass(format!("{} configured", BACKEND_URL_ENV));
        }
        Ok(_) => step.fail(format!("{} not found in .env", BACKEND_URL_ENV)),
        Err(e) => step.fail(e.to_string()),
    }

    step
}

/// Backend URL as the client would resolve it: `.env`, then environment, then default
pub fn configured_backend_url(root: &Path) -> String {
    load_env(&root.join(".env"))
        .ok()
        .and_then(|vars| vars.into_iter().find(|(key, _)| key == BACKEND_URL_ENV))
        .map(|(_, value)| value)
        .or_else(|| std::env::var(BACKEND_URL_ENV).ok())
        .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string())
}

pub fn check_backend_url(root: &Path) -> Step {
    let mut step = Step::new("Checking Backend URL");
    let url = configured_backend_url(root);

    match Url::parse(url.trim()) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {
            step.pass(format!("Backend URL looks valid: {}", url));
        }
        Ok(parsed) => step.warn(format!(
            "WARNING: backend URL uses unsupported scheme '{}': {}",
            parsed.scheme(),
            url
        )),
        Err(e) => step.warn(format!("WARNING: backend URL does not parse ({}): {}", e, url)),
    }

    step
}

pub fn check_lockfile(root: &Path) -> Step {
    let mut step = Step::new("Checking Dependencies");

    if root.join("Cargo.lock").exists() {
        step.pass("Cargo.lock found (dependencies resolved)");
    } else {
        step.warn("Cargo.lock not found. You need to run:");
        step.info("cargo build");
    }

    step
}
