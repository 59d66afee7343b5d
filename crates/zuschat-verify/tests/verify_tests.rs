mod common;

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;

use common::{scaffold, write};
use zuschat_verify::checks::{check_backend_url, check_lockfile, check_required_features};
use zuschat_verify::{quick_verify, verify_structure, Status};

fn failures(report: &zuschat_verify::Report) -> Vec<String> {
    report
        .steps
        .iter()
        .flat_map(|s| s.lines.iter())
        .filter(|l| l.status == Status::Fail)
        .map(|l| l.text.clone())
        .collect()
}

#[test]
fn test_complete_checkout_passes() {
    let dir = scaffold();
    let report = verify_structure(dir.path());

    assert_eq!(failures(&report), Vec::<String>::new());
    assert_eq!(report.exit_code(), 0);
    assert_eq!(report.steps.len(), 4);
}

#[test]
fn test_missing_file_fails() {
    let dir = scaffold();
    fs::remove_file(dir.path().join("README.md")).unwrap();

    let report = verify_structure(dir.path());

    assert_eq!(failures(&report), vec!["Missing: root/README.md".to_string()]);
    assert_eq!(report.exit_code(), 1);
}

#[test]
fn test_missing_directory_fails_its_group() {
    let dir = scaffold();
    fs::remove_dir_all(dir.path().join("crates/zuschat-app")).unwrap();

    let report = verify_structure(dir.path());

    assert!(failures(&report).contains(&"Missing directory: crates/zuschat-app/src".to_string()));
    assert!(!report.passed());
}

#[test]
fn test_missing_keyword_is_listed() {
    let dir = scaffold();
    write(dir.path(), "crates/zuschat-chat/src/render.rs", "ToolBadge Calculator avatar timestamp");

    let step = check_required_features(dir.path());
    let failed: Vec<_> = step.lines.iter().filter(|l| l.status == Status::Fail).collect();

    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].text, "crates/zuschat-chat/src/render.rs missing features:");
    assert_eq!(failed[0].details, vec!["Product RAG".to_string(), "Outlet Text2SQL".to_string()]);
}

#[test]
fn test_manifest_must_parse() {
    let dir = scaffold();
    write(dir.path(), "Cargo.toml", "[workspace\nmembers = ");

    let report = verify_structure(dir.path());
    let failed = failures(&report);

    assert_eq!(failed.len(), 1);
    assert!(failed[0].starts_with("Error parsing"));
}

#[test]
fn test_manifest_requires_dependencies_and_members() {
    let dir = scaffold();
    write(
        dir.path(),
        "Cargo.toml",
        "[workspace]\nmembers = [\"crates/zuschat-app\"]\n\n[workspace.dependencies]\ntokio = \"1\"\n",
    );

    let report = verify_structure(dir.path());
    let manifest = &report.steps[2];
    let details: Vec<Vec<String>> = manifest.lines.iter().map(|l| l.details.clone()).collect();

    assert!(!manifest.passed());
    assert_eq!(
        details,
        vec![
            vec!["reqwest".to_string(), "serde".to_string()],
            vec!["crates/zuschat-chat".to_string(), "crates/zuschat-store".to_string()],
        ]
    );
}

#[test]
fn test_env_must_define_backend_url() {
    let dir = scaffold();
    write(dir.path(), ".env", "OTHER=1\n");

    let report = verify_structure(dir.path());

    assert_eq!(failures(&report), vec!["ZUSCHAT_BACKEND_URL not found in .env".to_string()]);
}

#[test]
fn test_quick_verify_warns_without_lockfile() {
    let dir = scaffold();
    let report = quick_verify(dir.path());

    assert!(report.passed());
    assert!(report.has_warnings());
    assert_eq!(report.exit_code(), 0);

    write(dir.path(), "Cargo.lock", "# resolved\n");
    assert!(!check_lockfile(dir.path()).has_warnings());
}

#[test]
fn test_quick_verify_fails_on_missing_env() {
    let dir = scaffold();
    fs::remove_file(dir.path().join(".env")).unwrap();

    let report = quick_verify(dir.path());

    assert_eq!(report.exit_code(), 1);
    assert!(failures(&report).contains(&"Missing: .env".to_string()));
}

#[test]
fn test_bad_backend_url_only_warns() {
    let dir = scaffold();
    write(dir.path(), ".env", "ZUSCHAT_BACKEND_URL=ftp://example.com\n");
    let step = check_backend_url(dir.path());
    assert!(step.passed());
    assert!(step.has_warnings());

    write(dir.path(), ".env", "ZUSCHAT_BACKEND_URL=not-a-url\n");
    let step = check_backend_url(dir.path());
    assert!(step.passed());
    assert!(step.has_warnings());
}

#[test]
fn test_workspace_sources_have_required_features() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
    let step = check_required_features(&root);

    assert!(step.passed(), "{:#?}", step.lines);
}
