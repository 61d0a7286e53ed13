// crates/zk-image-cli/src/commands/completions.rs - Shell Completion Scripts

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;
use std::io;

use crate::cli::Cli;

/// Write a completion script for `shell` to stdout
///
/// ```bash
/// zk-image completions bash > ~/.local/share/bash-completion/completions/zk-image
/// ```
pub fn handle(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
