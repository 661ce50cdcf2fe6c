use crate::cli::shell_context::ShellContext;
use crate::errors::CommandResult;

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

/// One top-level command: its name, help text and handler.
pub struct CommandEntry {
    pub name: &'static str,
    pub description: &'static str,
    /// Invocation forms, separated by ` | ` when a command has several.
    pub usage: &'static str,
    pub handler: CommandHandler,
}

impl CommandEntry {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            handler,
        }
    }

    /// Usage lines for this command, one per invocation form.
    pub fn usage_forms(&self) -> impl Iterator<Item = &'static str> {
        self.usage.split(" | ")
    }
}

/// The fixed command set, kept in the order the usage text lists it.
pub struct CommandRegistry {
    entries: Vec<CommandEntry>,
}

impl CommandRegistry {
    /// Builds the registry from `entries`, already in display order. A later entry
    /// with a name seen before is ignored.
    pub fn from_entries(entries: impl IntoIterator<Item = CommandEntry>) -> Self {
        let mut registry = Self {
            entries: Vec::new(),
        };
        for entry in entries {
            if registry.get(entry.name).is_none() {
                registry.entries.push(entry);
            }
        }
        registry
    }

    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn entries(&self) -> &[CommandEntry] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
        Ok(())
    }

    #[test]
    fn keeps_insertion_order_and_first_duplicate() {
        let registry = CommandRegistry::from_entries([
            CommandEntry::new("pay", "first", "pay <id>", noop),
            CommandEntry::new("add", "add", "add", noop),
            CommandEntry::new("pay", "second", "pay", noop),
        ]);

        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["pay", "add"]);
        assert_eq!(registry.get("pay").map(|entry| entry.description), Some("first"));
        assert!(registry.get("PAY").is_none());
    }

    #[test]
    fn usage_forms_split_alternatives() {
        let entry = CommandEntry::new("pay", "", "pay <id> | pay -p <amount>", noop);
        assert_eq!(
            entry.usage_forms().collect::<Vec<_>>(),
            vec!["pay <id>", "pay -p <amount>"]
        );
    }
}
