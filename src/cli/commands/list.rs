use super::Session;
use super::day::{service_cell, stylist_cell};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::Stylist;
use crate::ui::messages;
use crate::utils::date;
use crate::utils::mins2readable;
use crate::utils::table::Table;
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, stylist } = cmd {
        let session = Session::open(cfg)?;

        let mut appts = match period.as_deref() {
            Some(p) if p.eq_ignore_ascii_case("all") => {
                let mut all = session.book.items().to_vec();
                all.sort_by_key(|a| (a.date, a.time, a.id.clone()));
                all
            }
            other => session.book.for_dates(&resolve_period(other)?),
        };

        if let Some(s) = stylist {
            let wanted = Stylist::parse(s);
            appts.retain(|a| a.stylist == wanted);
        }

        if appts.is_empty() {
            messages::info("No appointments found.");
            return Ok(());
        }

        let mut table = Table::new(&[
            "Id", "Date", "Time", "Length", "Title", "Stylist", "Service", "Walk-in",
        ]);
        for a in &appts {
            table.add_row(vec![
                a.id.clone(),
                a.date.to_string(),
                format!("{}-{}", a.time_str(), a.end_str()),
                mins2readable(a.duration),
                a.title.clone(),
                stylist_cell(&a.stylist, &session.ctx),
                service_cell(a, &session.ctx),
                if a.is_walk_in { "yes" } else { "" }.to_string(),
            ]);
        }
        println!("{}", table.render());
        println!("\n{} appointment(s)", appts.len());
    }
    Ok(())
}

/// Current month when no period is given.
fn resolve_period(period: Option<&str>) -> AppResult<Vec<NaiveDate>> {
    match period {
        Some(p) => date::resolve_period(p).map_err(AppError::InvalidDate),
        None => Ok(date::current_month_dates()),
    }
}
