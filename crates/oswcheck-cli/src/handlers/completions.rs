//! Shell completions command handler

use crate::cli::{Cli, CompletionsArgs, Shell};
use crate::error::Result;
use clap::CommandFactory;
use std::io::{self, Write};
use tracing::debug;

/// Handle the completions command
pub fn handle_completions(args: CompletionsArgs) -> Result<()> {
    let mut stdout = io::stdout().lock();
    write_completions(args.shell, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}

/// Generate the completion script for `shell` into `out`
fn write_completions(shell: Shell, out: &mut dyn Write) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    debug!(?shell, %name, "Generating shell completions");

    clap_complete::generate(shell.to_clap_shell(), &mut cmd, name, out);
    Ok(())
}
