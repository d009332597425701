//! Shell completion generation.

use clap::CommandFactory;
use clap_complete::{generate, shells};

use crate::cli::{Cli, Shell};

pub fn execute(shell: Shell) -> crate::error::CliResult<()> {
    let mut cmd = Cli::command();

    match shell {
        Shell::Bash => generate(shells::Bash, &mut cmd, "tresgen", &mut std::io::stdout()),
        Shell::Zsh => generate(shells::Zsh, &mut cmd, "tresgen", &mut std::io::stdout()),
        Shell::Fish => generate(shells::Fish, &mut cmd, "tresgen", &mut std::io::stdout()),
        Shell::PowerShell => generate(
            shells::PowerShell,
            &mut cmd,
            "tresgen",
            &mut std::io::stdout(),
        ),
        Shell::Elvish => generate(shells::Elvish, &mut cmd, "tresgen", &mut std::io::stdout()),
    };

    Ok(())
}
