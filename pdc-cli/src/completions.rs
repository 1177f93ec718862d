// ABOUTME: Shell completion generation using clap_complete for all supported shells
// ABOUTME: Provides static completions for bash, zsh, fish, and powershell

use clap::{Command, ValueEnum};
use clap_complete::{generate, shells};
use std::fmt;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell", alias = "pwsh")]
    PowerShell,
}

impl fmt::Display for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shell_str = match self {
            Shell::Bash => "bash",
            Shell::Zsh => "zsh",
            Shell::Fish => "fish",
            Shell::PowerShell => "powershell",
        };
        write!(f, "{}", shell_str)
    }
}

/// Write the completion script for `shell` under the command's own name.
pub fn generate_completions<W: Write>(shell: Shell, cmd: &mut Command, writer: &mut W) {
    let bin_name = cmd.get_name().to_string();
    match shell {
        Shell::Bash => generate(shells::Bash, cmd, bin_name, writer),
        Shell::Zsh => generate(shells::Zsh, cmd, bin_name, writer),
        Shell::Fish => generate(shells::Fish, cmd, bin_name, writer),
        Shell::PowerShell => generate(shells::PowerShell, cmd, bin_name, writer),
    }
}
