use tabkeep_domain::{Entry, EntryId};

use crate::cli::{output, registry::CommandEntry, shell_context::ShellContext};
use crate::errors::{CommandError, CommandResult};

const ITEM_WIDTH: usize = 20;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "add",
            "Record an unpaid entry",
            "add \"<item>\" <price>",
            cmd_add,
        ),
        CommandEntry::new(
            "listunpaid",
            "List unpaid entries",
            "listunpaid",
            cmd_list_unpaid,
        ),
        CommandEntry::new("balance", "Show the credit balance", "balance", cmd_balance),
        CommandEntry::new(
            "pay",
            "Pay an entry by id, or apply a partial payment",
            "pay <id> | pay -p <amount>",
            cmd_pay,
        ),
    ]
}

/// `id | item | price`, with the item padded to a fixed width.
pub fn format_unpaid_row(entry: &Entry) -> String {
    format!(
        "{} | {:<width$} | {}",
        entry.id,
        entry.item,
        entry.price,
        width = ITEM_WIDTH
    )
}

pub fn format_paid_ids(ids: &[EntryId]) -> String {
    if ids.is_empty() {
        return "none".into();
    }
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [item, price, ..] = args else {
        return Err(CommandError::usage("add needs an item and a price"));
    };
    let id = context.book.add(item, price)?;
    println!("ID: {}", id);
    Ok(())
}

fn cmd_list_unpaid(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    for entry in context.book.unpaid()? {
        println!("{}", format_unpaid_row(&entry));
    }
    Ok(())
}

fn cmd_balance(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    println!("Balance: {}", context.book.balance()?);
    Ok(())
}

fn cmd_pay(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        ["-p", amount] => pay_partial(context, amount),
        ["-p", ..] => Err(CommandError::usage("pay -p needs exactly one amount")),
        [id, ..] => {
            let id: EntryId = id
                .parse()
                .map_err(|_| CommandError::usage(format!("`{}` is not an entry id", id)))?;
            pay_by_id(context, id)
        }
        [] => Err(CommandError::usage("pay needs an id or -p <amount>")),
    }
}

fn pay_by_id(context: &mut ShellContext, id: EntryId) -> CommandResult {
    let removed = context.book.pay_by_id(id)?;
    if removed.is_empty() {
        output::warning(format!("No unpaid entry with id {}.", id));
    } else {
        output::success(format!("Paid entry {}.", id));
    }
    Ok(())
}

fn pay_partial(context: &mut ShellContext, amount: &str) -> CommandResult {
    let outcome = context.book.pay_partial(amount)?;
    println!("Paid IDs: {}", format_paid_ids(&outcome.paid));
    println!("Remaining Balance: {}", outcome.balance);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabkeep_domain::MinorUnits;

    #[test]
    fn unpaid_row_pads_item_to_twenty_columns() {
        let entry = Entry::new(1, "coffee", MinorUnits(250), 0);
        assert_eq!(
            format_unpaid_row(&entry),
            "1 | coffee               | 2.50"
        );
    }

    #[test]
    fn long_items_are_not_truncated() {
        let entry = Entry::new(12, "a very long item label here", MinorUnits(5), 0);
        assert_eq!(
            format_unpaid_row(&entry),
            "12 | a very long item label here | 0.05"
        );
    }

    #[test]
    fn paid_ids_are_comma_separated() {
        assert_eq!(format_paid_ids(&[]), "none");
        assert_eq!(format_paid_ids(&[1]), "1");
        assert_eq!(format_paid_ids(&[1, 3, 4]), "1, 3, 4");
    }
}
