use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Pass,
    Fail,
    /// Worth fixing, but never fails the run
    Warn,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckLine {
    pub status: Status,
    pub text: String,
    pub details: Vec<String>,
}

/// One numbered section of a verification run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub title: String,
    pub lines: Vec<CheckLine>,
}

impl Step {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    pub fn pass(&mut self, text: impl Into<String>) {
        self.push(Status::Pass, text.into(), Vec::new());
    }

    pub fn fail(&mut self, text: impl Into<String>) {
        self.push(Status::Fail, text.into(), Vec::new());
    }

    pub fn fail_with(&mut self, text: impl Into<String>, details: Vec<String>) {
        self.push(Status::Fail, text.into(), details);
    }

    pub fn warn(&mut self, text: impl Into<String>) {
        self.push(Status::Warn, text.into(), Vec::new());
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.push(Status::Info, text.into(), Vec::new());
    }

    pub fn passed(&self) -> bool {
        self.lines.iter().all(|l| l.status != Status::Fail)
    }

    pub fn has_warnings(&self) -> bool {
        self.lines.iter().any(|l| l.status == Status::Warn)
    }

    fn push(&mut self, status: Status, text: String, details: Vec<String>) {
        self.lines.push(CheckLine { status, text, details });
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub steps: Vec<Step>,
}

impl Report {
    pub fn passed(&self) -> bool {
        self.steps.iter().all(Step::passed)
    }

    pub fn has_warnings(&self) -> bool {
        self.steps.iter().any(Step::has_warnings)
    }

    pub fn exit_code(&self) -> u8 {
        if self.passed() {
            0
        } else {
            1
        }
    }
}

// ============================================================================
// Output
// ============================================================================

const RULE: &str = "========================================";

/// `[OK]`/`[FAIL]` checklist printed by `verify-structure`
pub fn format_checklist(report: &Report) -> String {
    let mut out = format!("{}\n{}\n{}\n", RULE, "zuschat Structure Verification".bold(), RULE);

    for (index, step) in report.steps.iter().enumerate() {
        out.push_str(&format!("\n{}. {}...\n", index + 1, step.title));
        for line in &step.lines {
            let tag = match line.status {
                Status::Pass => "[OK]".green(),
                Status::Fail => "[FAIL]".red(),
                Status::Warn => "[WARN]".yellow(),
                Status::Info => "[INFO]".blue(),
            };
            out.push_str(&format!("   {} {}\n", tag, line.text));
            for detail in &line.details {
                out.push_str(&format!("        - {}\n", detail));
            }
        }
    }

    out.push_str(&format!("\n{}\n", RULE));
    if report.passed() {
        out.push_str(&format!("{}\n", "✓ All verification checks PASSED!".green().bold()));
        out.push_str("\nNext steps:\n");
        out.push_str("  1. cargo build --release\n");
        out.push_str("  2. cargo run --bin zuschat\n");
        out.push_str("  3. Ask something, or type /reset to start over\n");
    } else {
        out.push_str(&format!("{}\n", "✗ Some verification checks FAILED!".red().bold()));
        out.push_str("Please fix the issues above before running cargo run.\n");
    }
    out.push_str(&format!("{}\n", RULE));
    out
}

const BANNER_TOP: &str = "╔════════════════════════════════════════════════╗";
const BANNER_BOTTOM: &str = "╚════════════════════════════════════════════════╝";

fn banner_line(text: &str) -> String {
    format!("║  {:<46}║", text)
}

/// Banner-framed summary printed by `quick-verify`
pub fn format_banner(report: &Report) -> String {
    let mut out = format!(
        "\n{}\n{}\n{}\n\n",
        BANNER_TOP,
        banner_line("zuschat - Pre-Launch Verify"),
        BANNER_BOTTOM
    );

    for (index, step) in report.steps.iter().enumerate() {
        out.push_str(&format!("{} Step {}: {}\n", "✓".green(), index + 1, step.title));
        for line in &step.lines {
            let mark = match line.status {
                Status::Pass => "✓".green(),
                Status::Fail => "✗".red(),
                Status::Warn => "⚠".yellow(),
                Status::Info => "ℹ".blue(),
            };
            out.push_str(&format!("  {} {}\n", mark, line.text));
            for detail in &line.details {
                out.push_str(&format!("     {}\n", detail));
            }
        }
        out.push('\n');
    }

    out.push_str(&format!("{}\n", BANNER_TOP));
    match (report.passed(), report.has_warnings()) {
        (true, false) => {
            out.push_str(&format!("{}\n{}\n\n", banner_line("✓ All checks PASSED - Ready to launch!"), BANNER_BOTTOM));
            out.push_str("📋 NEXT STEPS:\n\n");
            out.push_str("1. Make sure the backend is running and reachable\n\n");
            out.push_str("2. Start the client:\n");
            out.push_str("   - cargo run --bin zuschat\n\n");
            out.push_str("3. Try a one-shot message:\n");
            out.push_str("   - cargo run --bin zuschat -- --message \"What is 150 times 12?\"\n\n");
        }
        (true, true) => {
            out.push_str(&format!("{}\n{}\n\n", banner_line("⚠ Minor issues found - see above"), BANNER_BOTTOM));
            out.push_str("💡 TIP: Run \"cargo build\" to resolve dependencies\n\n");
        }
        (false, _) => {
            out.push_str(&format!("{}\n{}\n\n", banner_line("✗ Some issues need to be fixed"), BANNER_BOTTOM));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_with(lines: &[Status]) -> Report {
        let mut step = Step::new("Checking things");
        for status in lines {
            match status {
                Status::Pass => step.pass("fine"),
                Status::Fail => step.fail("broken"),
                Status::Warn => step.warn("hmm"),
                Status::Info => step.info("fyi"),
            }
        }
        Report { steps: vec![step] }
    }

    #[test]
    fn test_warnings_never_fail() {
        let report = report_with(&[Status::Pass, Status::Warn, Status::Info]);
        assert!(report.passed());
        assert!(report.has_warnings());
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn test_any_failure_fails() {
        let report = report_with(&[Status::Pass, Status::Fail]);
        assert!(!report.passed());
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn test_checklist_tags() {
        colored::control::set_override(false);
        let mut step = Step::new("Checking required features");
        step.pass("a.rs has all required features");
        step.fail_with("b.rs missing features:", vec!["fn reset".to_string()]);
        let out = format_checklist(&Report { steps: vec![step] });

        assert!(out.contains("1. Checking required features...\n"));
        assert!(out.contains("   [OK] a.rs has all required features\n"));
        assert!(out.contains("   [FAIL] b.rs missing features:\n        - fn reset\n"));
        assert!(out.contains("✗ Some verification checks FAILED!"));
    }

    #[test]
    fn test_banner_summary_variants() {
        colored::control::set_override(false);
        assert!(format_banner(&report_with(&[Status::Pass])).contains("Ready to launch!"));
        assert!(format_banner(&report_with(&[Status::Warn])).contains("Minor issues found"));
        assert!(format_banner(&report_with(&[Status::Fail])).contains("Some issues need to be fixed"));
    }
}
