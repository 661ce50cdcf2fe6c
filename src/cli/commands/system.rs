use std::process::Command;

use crate::cli::{help, output, registry::CommandEntry, shell_context::ShellContext};
use crate::errors::{CommandError, CommandResult};

const PAGER: &str = "less";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("log", "Page through the audit log", "log", cmd_log),
        CommandEntry::new(
            "help",
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
        CommandEntry::new("version", "Show the program version", "version", cmd_version),
    ]
}

fn cmd_log(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let path = &context.paths.log_file;
    if !path.exists() {
        output::info("Log is empty.");
        return Ok(());
    }
    let status = Command::new(PAGER)
        .arg(path)
        .status()
        .map_err(|source| CommandError::Pager {
            pager: PAGER,
            source,
        })?;
    if !status.success() {
        tracing::debug!(%status, "pager exited unsuccessfully");
    }
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first() {
        if let Some(entry) = context.registry.get(name) {
            help::print_command(entry);
            return Ok(());
        }
        context.suggest_command(name);
    }
    help::print_overview(&context.registry);
    Ok(())
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    println!("tabkeep {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
