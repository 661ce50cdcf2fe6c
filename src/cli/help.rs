use crate::cli::registry::{CommandEntry, CommandRegistry};

const PROGRAM: &str = "tabkeep";
const USAGE_WIDTH: usize = 28;

/// Usage text listing every registered command.
pub fn overview(registry: &CommandRegistry) -> String {
    let mut text = String::from("Usage:\n");
    for entry in registry.entries() {
        for usage in entry.usage_forms() {
            text.push_str(&format!(
                "  {} {:<width$} {}\n",
                PROGRAM,
                usage,
                entry.description,
                width = USAGE_WIDTH
            ));
        }
    }
    text.push_str(&format!(
        "\nUse `{} help <command>` for details.",
        PROGRAM
    ));
    text
}

pub fn print_overview(registry: &CommandRegistry) {
    println!("{}", overview(registry));
}

pub fn print_command(entry: &CommandEntry) {
    println!("{}: {}", entry.name, entry.description);
    for usage in entry.usage_forms() {
        println!("  {} {}", PROGRAM, usage);
    }
}
