use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::{BLUE, GREEN, MAGENTA, RED, RESET, WHITE, YELLOW};

/// ANSI color for an operation name.
fn color_for_operation(op: &str) -> &'static str {
    match op {
        "add" => GREEN,
        "del" => RED,
        "edit" => YELLOW,
        "hours" | "schedule" | "exception" | "employee" | "service" => BLUE,
        "migration_applied" | "init" => MAGENTA,
        _ => WHITE,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_log(pool)?;
        if entries.is_empty() {
            info("The log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let op_w = entries
            .iter()
            .map(|e| e.operation.len() + e.target.len() + 3)
            .max()
            .unwrap_or(10)
            .min(40);

        println!("📜 Internal log:\n");

        for e in entries {
            let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                .map(|dt| dt.format("%F %T").to_string())
                .unwrap_or(e.date);

            let op_target = if e.target.is_empty() {
                e.operation.clone()
            } else {
                format!("{} ({})", e.operation, e.target)
            };
            let padding = " ".repeat(op_w.saturating_sub(op_target.chars().count()));
            let color = if e.target == "rejected" {
                RED
            } else {
                color_for_operation(&e.operation)
            };

            println!(
                "{:>id_w$}: {} | {}{}{}{} => {}",
                e.id,
                date,
                color,
                op_target,
                RESET,
                padding,
                e.message,
                id_w = id_w
            );
        }

        Ok(())
    }
}
