// ABOUTME: Centralized CLI output utilities for consistent user-facing messages
// ABOUTME: Formats errors and hints on stderr, colored only when stderr is a terminal

use owo_colors::OwoColorize;
use pdc_sdk::PdcError;
use std::io::{self, IsTerminal, Write};

use crate::constants::EXIT_FAILURE;
use crate::image::ImageError;

/// Writes diagnostics to stderr; command results go to stdout elsewhere.
pub struct CliOutput {
    use_color: bool,
}

impl CliOutput {
    /// Create new CLI output utility with TTY detection
    pub fn new() -> Self {
        Self {
            use_color: std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
        }
    }

    /// Create CLI output utility with explicit color setting
    pub fn with_color(use_color: bool) -> Self {
        Self { use_color }
    }

    pub fn error<W: Write>(&self, stderr: &mut W, message: &str) -> io::Result<()> {
        writeln!(stderr, "{}", self.format_error(message))
    }

    pub fn hint<W: Write>(&self, stderr: &mut W, message: &str) -> io::Result<()> {
        writeln!(stderr, "{}", self.format_hint(message))
    }

    /// Print `err` and return the process exit code for it. Image lookup
    /// failures are command output and go to `stdout`; everything else is a
    /// diagnostic on `stderr`.
    pub fn report_error<O: Write, E: Write>(
        &self,
        err: &anyhow::Error,
        stdout: &mut O,
        stderr: &mut E,
    ) -> i32 {
        if let Some(image_err) = err.downcast_ref::<ImageError>() {
            if let Err(write_err) = image_err.report(stdout) {
                log::warn!("Failed to write to stdout: {:#}", write_err);
            }
            if let Err(flush_err) = stdout.flush() {
                log::warn!("Failed to flush stdout: {}", flush_err);
            }
            return image_err.exit_code();
        }

        let mut result = self.error(stderr, &format!("{:#}", err));
        if let Some(help) = err.downcast_ref::<PdcError>().and_then(PdcError::help_text) {
            result = result.and_then(|()| self.hint(stderr, help));
        }
        if let Err(write_err) = result {
            log::warn!("Failed to write to stderr: {}", write_err);
        }
        EXIT_FAILURE
    }

    fn format_error(&self, message: &str) -> String {
        if self.use_color {
            format!("{} {}", "error:".red().bold(), message)
        } else {
            format!("error: {}", message)
        }
    }

    fn format_hint(&self, message: &str) -> String {
        if self.use_color {
            format!("{} {}", "hint:".blue().bold(), message)
        } else {
            format!("hint: {}", message)
        }
    }
}

impl Default for CliOutput {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_formatting() {
        let cli = CliOutput::with_color(false);
        assert_eq!(cli.format_error("boom"), "error: boom");
        assert_eq!(cli.format_hint("try again"), "hint: try again");
    }

    #[test]
    fn test_colored_formatting_keeps_message() {
        let cli = CliOutput::with_color(true);
        let formatted = cli.format_error("boom");
        assert!(formatted.contains("\x1b["));
        assert!(formatted.ends_with(" boom"));
    }

    fn report(err: anyhow::Error) -> (i32, String, String) {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let code = CliOutput::with_color(false).report_error(&err, &mut stdout, &mut stderr);
        (
            code,
            String::from_utf8(stdout).unwrap(),
            String::from_utf8(stderr).unwrap(),
        )
    }

    #[test]
    fn test_image_not_found_goes_to_stdout() {
        let (code, stdout, stderr) = report(ImageError::NotFound.into());
        assert_eq!(code, 1);
        assert_eq!(stdout, "Not found\n");
        assert!(stderr.is_empty());
    }

    #[test]
    fn test_ambiguous_image_lists_candidates_on_stdout() {
        let err = ImageError::Ambiguous {
            candidates: vec![
                serde_json::json!({"file_name": "boot.iso", "sha256": "aaa"}),
                serde_json::json!({"file_name": "boot.iso", "sha256": "bbb"}),
            ],
        };
        let (code, stdout, stderr) = report(err.into());

        assert_eq!(code, 1);
        let lines: Vec<&str> = stdout.lines().collect();
        assert_eq!(
            lines[0],
            "More than one image with that name, use --sha256 to specify."
        );
        assert!(lines[1].starts_with("File-Name"));
        assert!(lines[3].ends_with("aaa"));
        assert!(lines[4].ends_with("bbb"));
        assert!(stderr.is_empty());
    }

    #[test]
    fn test_other_errors_go_to_stderr_with_hint() {
        let err = anyhow::Error::new(PdcError::Auth).context("Failed to list images");
        let (code, stdout, stderr) = report(err);

        assert_eq!(code, 1);
        assert!(stdout.is_empty());
        assert!(stderr.starts_with("error: Failed to list images: "));
        assert!(stderr.contains("\nhint: "));
    }
}
