use std::env;

use tabkeep_storage_json::StoragePaths;

use crate::cli::{help, shell_context::ShellContext};
use crate::errors::{CommandError, CommandResult};

/// Runs one command taken from the process arguments against `~/.tabkeep`.
pub fn run_cli() -> CommandResult {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut context = ShellContext::new(StoragePaths::resolve());
    run_with_args(&mut context, &args)
}

/// Dispatches `args` (program name already removed). No arguments, an unknown
/// command, or unusable arguments print the usage text.
pub fn run_with_args(context: &mut ShellContext, args: &[String]) -> CommandResult {
    let Some((name, rest)) = args.split_first() else {
        help::print_overview(&context.registry);
        return Ok(());
    };

    let Some(handler) = context.registry.get(name).map(|entry| entry.handler) else {
        context.suggest_command(name);
        help::print_overview(&context.registry);
        return Ok(());
    };

    let rest: Vec<&str> = rest.iter().map(String::as_str).collect();
    tracing::debug!(command = %name, args = rest.len(), "dispatching command");
    match handler(context, &rest) {
        Err(CommandError::InvalidArguments(reason)) => {
            tracing::debug!(command = %name, %reason, "invalid arguments");
            help::print_overview(&context.registry);
            Ok(())
        }
        other => other,
    }
}
