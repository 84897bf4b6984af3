use super::{Session, date_arg};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{AppointmentLogic, AppointmentPatch};
use crate::errors::AppResult;
use crate::models::Stylist;
use crate::ui::messages;
use crate::utils::time::{parse_duration, parse_optional_time};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        date,
        time,
        title,
        stylist,
        duration,
        service,
        walk_in,
    } = cmd
    {
        let patch = AppointmentPatch {
            title: title.clone(),
            stylist: stylist.as_deref().map(Stylist::parse),
            date: date.as_deref().map(date_arg).transpose()?,
            time: parse_optional_time(time.as_ref())?,
            duration: duration.as_deref().map(parse_duration).transpose()?,
            is_walk_in: *walk_in,
            service_id: service.as_ref().map(|s| {
                if s.eq_ignore_ascii_case("none") {
                    None
                } else {
                    Some(s.clone())
                }
            }),
        };

        if patch.is_empty() {
            messages::warning("Nothing to change.");
            return Ok(());
        }

        let mut session = Session::open(cfg)?;
        AppointmentLogic::edit(&mut session.book, &session.ctx, id, patch, &session.sink)?;
        session.save_book()?;
    }
    Ok(())
}
