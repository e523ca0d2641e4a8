use crate::db::log::{LogEntry, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::strip_ansi;
use ansi_term::Colour;

const MAX_OP_WIDTH: usize = 60;

/// ANSI colour of an audit operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" | "palette_add" => Colour::Green,
        "palette_del" => Colour::Red,
        "edit" | "palette_set" => Colour::Yellow,
        "flag" => Colour::Cyan,
        "import" | "export" => Colour::Blue,
        "profile" => Colour::RGB(255, 153, 51),
        "migration_applied" | "init" => Colour::Purple,
        _ => Colour::White,
    }
}

/// `op (target)` with only the operation word coloured, cut to
/// `MAX_OP_WIDTH` visible characters.
fn format_op_target(entry: &LogEntry) -> String {
    let color = color_for_operation(&entry.operation);

    let visible = if entry.target.is_empty() {
        entry.operation.clone()
    } else {
        format!("{} ({})", entry.operation, entry.target)
    };

    let visible = if visible.chars().count() > MAX_OP_WIDTH {
        let mut s: String = visible.chars().take(MAX_OP_WIDTH - 3).collect();
        s.push_str("...");
        s
    } else {
        visible
    };

    match visible.split_once(' ') {
        Some((op, rest)) => format!("{} {}", color.paint(op), rest),
        None => color.paint(visible.as_str()).to_string(),
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = load_log(pool)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let dates: Vec<String> = entries
            .iter()
            .map(|e| {
                chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or_else(|_| e.date.clone())
            })
            .collect();

        let id_w = entries.iter().map(|e| e.id.to_string().len()).max().unwrap_or(1);
        let date_w = dates.iter().map(|d| d.len()).max().unwrap_or(10);

        let op_targets: Vec<String> = entries.iter().map(format_op_target).collect();
        let op_w = op_targets
            .iter()
            .map(|s| strip_ansi(s).chars().count())
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);

        println!("📜 Internal log:\n");

        for ((entry, date), op_target) in entries.iter().zip(&dates).zip(&op_targets) {
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(op_target).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                entry.id,
                date,
                op_target,
                padding,
                entry.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
