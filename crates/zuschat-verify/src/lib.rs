//! Pre-launch checks for a zuschat checkout
//!
//! Two front ends share these checks: `verify-structure` prints a full
//! `[OK]`/`[FAIL]` checklist, `quick-verify` a shorter banner-framed summary.

pub mod checks;
mod error;
pub mod report;

use std::path::Path;

pub use error::CheckError;
pub use report::{format_banner, format_checklist, CheckLine, Report, Status, Step};

/// Files, source keywords, manifest and `.env`
pub fn verify_structure(root: &Path) -> Report {
    Report {
        steps: vec![
            checks::check_required_files(root),
            checks::check_required_features(root),
            checks::check_manifest(root),
            checks::check_env(root),
        ],
    }
}

/// Quick variant; the backend URL and lockfile checks only ever warn
pub fn quick_verify(root: &Path) -> Report {
    Report {
        steps: vec![
            checks::check_quick_files(root),
            checks::check_manifest(root),
            checks::check_env(root),
            checks::check_backend_url(root),
            checks::check_lockfile(root),
        ],
    }
}
