pub mod access;
pub mod system;
pub mod tab;

use crate::cli::registry::{CommandEntry, CommandRegistry};

const ROOT_COMMAND_ORDER: &[&str] = &[
    "add",
    "listunpaid",
    "balance",
    "pay",
    "log",
    "wipe",
    "passwd",
    "help",
    "version",
];

pub(crate) fn all_entries() -> Vec<CommandEntry> {
    let mut commands = Vec::new();
    commands.extend(tab::definitions());
    commands.extend(access::definitions());
    commands.extend(system::definitions());
    commands
}

/// Every command, ordered as `ROOT_COMMAND_ORDER` lists them.
pub(crate) fn registry() -> CommandRegistry {
    let mut entries = all_entries();
    entries.sort_by_key(|entry| {
        ROOT_COMMAND_ORDER
            .iter()
            .position(|name| entry.name == *name)
            .unwrap_or(ROOT_COMMAND_ORDER.len())
    });
    CommandRegistry::from_entries(entries)
}
