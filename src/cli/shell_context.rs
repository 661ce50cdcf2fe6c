use strsim::levenshtein;
use tabkeep_storage_json::StoragePaths;

use crate::app::TabBook;
use crate::cli::{commands, output, registry::CommandRegistry};

const SUGGESTION_DISTANCE: usize = 3;

/// Everything a command handler needs: the registry, where the data lives, and the
/// book that operates on it.
pub struct ShellContext {
    pub registry: CommandRegistry,
    pub paths: StoragePaths,
    pub book: TabBook,
}

impl ShellContext {
    pub fn new(paths: StoragePaths) -> Self {
        let book = TabBook::open(&paths);
        Self::with_book(paths, book)
    }

    pub fn with_book(paths: StoragePaths, book: TabBook) -> Self {
        Self {
            registry: commands::registry(),
            paths,
            book,
        }
    }

    /// Closest registered command name, if any is near enough to be a typo.
    pub fn closest_command(&self, input: &str) -> Option<&'static str> {
        self.registry
            .names()
            .map(|name| (levenshtein(name, input), name))
            .min_by_key(|(distance, _)| *distance)
            .filter(|(distance, _)| *distance <= SUGGESTION_DISTANCE)
            .map(|(_, name)| name)
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!("Unknown command `{}`.", input));
        if let Some(best) = self.closest_command(input) {
            output::info(format!("Did you mean `{}`?", best));
        }
    }
}
