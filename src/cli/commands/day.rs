use super::{Session, date_or_today};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::context::BusinessContext;
use crate::core::layout::{DayLayout, Position, ViewMode};
use crate::errors::AppResult;
use crate::models::exception::find_for_date;
use crate::models::{Appointment, Stylist};
use crate::ui::messages;
use crate::utils::colors::{RESET, colorize_optional, for_lane, paint_hex};
use crate::utils::date::weekday_key;
use crate::utils::formatting::{pct, px};
use crate::utils::table::Table;
use chrono::{Datelike, NaiveDate};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Day { date } = cmd {
        let date = date_or_today(date.as_ref())?;
        let session = Session::open(cfg)?;

        messages::header(format!(
            "{} {} · {}",
            weekday_key(date.weekday()),
            date,
            opening_label(&session.ctx, date)
        ));

        let appts = session.book.for_date(date);
        if appts.is_empty() {
            messages::info(format!("No appointments for {date}."));
            return Ok(());
        }

        let layout = DayLayout::build(&appts, &cfg.view(ViewMode::Day));

        let mut table = Table::new(&[
            "Lane", "Time", "Title", "Stylist", "Service", "Top", "Height", "Left", "Width", "Id",
        ]);
        for (appt, pos) in &layout.placed {
            let lane = layout.info.column_of(&appt.id);
            table.add_row(row(appt, pos, lane, &session.ctx));
        }
        println!("{}", table.render());

        let lanes: Vec<String> = layout
            .info
            .max_columns
            .iter()
            .map(|(hour, max)| format!("{hour:02}h:{}", max + 1))
            .collect();
        println!("\nLanes per hour: {}", lanes.join(" "));
    }
    Ok(())
}

fn row(appt: &Appointment, pos: &Position, lane: usize, ctx: &BusinessContext) -> Vec<String> {
    let title = if appt.is_walk_in {
        format!("🚶 {}", appt.title)
    } else {
        appt.title.clone()
    };
    vec![
        format!("{}{}{}", for_lane(lane), lane, RESET),
        format!("{}-{}", appt.time_str(), appt.end_str()),
        title,
        stylist_cell(&appt.stylist, ctx),
        service_cell(appt, ctx),
        px(pos.top),
        px(pos.height),
        pct(pos.left),
        pct(pos.width),
        appt.id.clone(),
    ]
}

/// Employee name in their color; unassigned and unknown ids stay plain.
pub(crate) fn stylist_cell(stylist: &Stylist, ctx: &BusinessContext) -> String {
    match stylist {
        Stylist::Specific(id) => match ctx.employee(id) {
            Some(e) => paint_hex(&e.name, &e.color),
            None => id.clone(),
        },
        Stylist::Unassigned => colorize_optional("anyone"),
    }
}

pub(crate) fn service_cell(appt: &Appointment, ctx: &BusinessContext) -> String {
    match appt.service_id.as_deref().and_then(|id| ctx.service(id)) {
        Some(s) => format!("{} {}", s.icon.glyph(), s.name),
        None => colorize_optional("--"),
    }
}

/// Effective opening of `date`: exception first, then the weekly hours.
pub(crate) fn opening_label(ctx: &BusinessContext, date: NaiveDate) -> String {
    if let Some(exception) = find_for_date(&ctx.exceptions, date) {
        if exception.is_all_day_off {
            return "closed (exception)".to_string();
        }
        if let Some(hours) = exception.hours {
            return format!("special hours {}", hours.label());
        }
    }
    let day = ctx.week.get(date.weekday());
    if day.is_open {
        format!("open {}", day.hours().label())
    } else {
        "closed".to_string()
    }
}
