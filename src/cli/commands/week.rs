use super::day::{opening_label, stylist_cell};
use super::{Session, date_or_today};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::layout::{DayLayout, ViewMode};
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::date::{week_dates, weekday_key};
use crate::utils::formatting::{pct, px};
use crate::utils::table::Table;
use chrono::Datelike;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Week { date } = cmd {
        let dates = week_dates(date_or_today(date.as_ref())?);
        let session = Session::open(cfg)?;

        if let (Some(first), Some(last)) = (dates.first(), dates.last()) {
            messages::header(format!("Week {first} → {last}"));
        }

        for d in &dates {
            println!("{:<10} {}  {}", weekday_key(d.weekday()), d, opening_label(&session.ctx, *d));
        }
        println!();

        let appts = session.book.for_dates(&dates);
        if appts.is_empty() {
            messages::info("No appointments this week.");
            return Ok(());
        }

        let layout = DayLayout::build(&appts, &cfg.view(ViewMode::Week));
        let mut table = Table::new(&[
            "Day", "Time", "Title", "Stylist", "Top", "Height", "Left", "Width",
        ]);
        let mut placed: Vec<_> = layout.placed.iter().collect();
        placed.sort_by_key(|(a, _)| (a.date, a.time));
        for (appt, pos) in placed {
            table.add_row(vec![
                weekday_key(appt.date.weekday()).to_string(),
                format!("{}-{}", appt.time_str(), appt.end_str()),
                appt.title.clone(),
                stylist_cell(&appt.stylist, &session.ctx),
                px(pos.top),
                px(pos.height),
                pct(pos.left),
                pct(pos.width),
            ]);
        }
        println!("{}", table.render());
    }
    Ok(())
}
