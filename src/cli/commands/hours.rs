use super::{Session, weekday_arg};
use crate::cli::parser::{Commands, HoursAction};
use crate::config::Config;
use crate::core::business::BusinessLogic;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::colors::colorize_optional;
use crate::utils::date::{WEEK, weekday_key};
use crate::utils::table::Table;
use crate::utils::time::{format_time, parse_hhmm};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Hours { action } = cmd else {
        return Ok(());
    };
    let mut session = Session::open(cfg)?;

    match action {
        HoursAction::Show => {
            messages::header("Business hours");
            let mut table = Table::new(&["Day", "Open", "Close"]);
            for day in WEEK {
                let hours = session.ctx.week.get(day);
                let (open, close) = if hours.is_open {
                    (format_time(hours.open_time), format_time(hours.close_time))
                } else {
                    (colorize_optional("--"), colorize_optional("--"))
                };
                table.add_row(vec![weekday_key(day).to_string(), open, close]);
            }
            println!("{}", table.render());
            return Ok(());
        }
        HoursAction::Set {
            weekday,
            open,
            close,
        } => {
            let day = weekday_arg(weekday)?;
            BusinessLogic::set_day_hours(
                &mut session.ctx,
                day,
                parse_hhmm(open)?,
                parse_hhmm(close)?,
                &session.sink,
            )?;
        }
        HoursAction::Close { weekday } => {
            let day = weekday_arg(weekday)?;
            BusinessLogic::close_day(&mut session.ctx, day, &session.sink);
        }
    }

    session.save_context()
}
