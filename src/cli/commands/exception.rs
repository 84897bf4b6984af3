use super::{Session, date_arg};
use crate::cli::parser::{Commands, ExceptionAction};
use crate::config::Config;
use crate::core::business::BusinessLogic;
use crate::errors::AppResult;
use crate::models::{ExceptionDate, OpeningHours};
use crate::ui::messages;
use crate::utils::table::Table;
use crate::utils::time::parse_optional_time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Exception { action } = cmd else {
        return Ok(());
    };
    let mut session = Session::open(cfg)?;

    match action {
        ExceptionAction::Add {
            date,
            off,
            open,
            close,
        } => {
            let date = date_arg(date)?;
            let hours = match (
                parse_optional_time(open.as_ref())?,
                parse_optional_time(close.as_ref())?,
            ) {
                (Some(open), Some(close)) => Some(OpeningHours::new(open, close)),
                _ => None,
            };
            let exception = ExceptionDate {
                date,
                is_all_day_off: *off,
                hours: if *off { None } else { hours },
            };
            BusinessLogic::set_exception(&mut session.ctx, exception, &session.sink)?;
        }
        ExceptionAction::List => {
            if session.ctx.exceptions.is_empty() {
                messages::info("No exception dates.");
                return Ok(());
            }
            let mut table = Table::new(&["Date", "Status"]);
            for e in &session.ctx.exceptions {
                let status = match (e.is_all_day_off, e.hours) {
                    (true, _) => "closed".to_string(),
                    (false, Some(h)) => format!("open {}", h.label()),
                    (false, None) => "regular hours".to_string(),
                };
                table.add_row(vec![e.date.to_string(), status]);
            }
            println!("{}", table.render());
            return Ok(());
        }
        ExceptionAction::Del { date } => {
            BusinessLogic::remove_exception(&mut session.ctx, date_arg(date)?, &session.sink)?;
        }
    }

    session.save_context()
}
