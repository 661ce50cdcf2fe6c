use tabkeep_core::Authorization;

use crate::cli::{io, output, registry::CommandEntry, shell_context::ShellContext};
use crate::errors::CommandResult;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "wipe",
            "Delete all stored data (asks for the password)",
            "wipe",
            cmd_wipe,
        ),
        CommandEntry::new(
            "passwd",
            "Set the password that guards wipe",
            "passwd",
            cmd_passwd,
        ),
    ]
}

fn cmd_passwd(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let password = io::prompt_secret("New password")?;
    context.book.set_password(&password)?;
    output::success("Password set.");
    Ok(())
}

fn cmd_wipe(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if !context.book.has_password()? {
        output::warning("No password set.");
        return Ok(());
    }
    let password = io::prompt_secret("Password")?;
    match context.book.wipe(&password)? {
        Authorization::Granted => output::success("Wiped."),
        Authorization::WrongPassword => output::error("Wrong password."),
        Authorization::NoPassword => output::warning("No password set."),
    }
    Ok(())
}
