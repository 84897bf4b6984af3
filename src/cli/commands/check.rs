use super::add::resolve_duration;
use super::date_arg;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::validator::validate_appointment;
use crate::db::pool::DbPool;
use crate::db::repository::Repository;
use crate::errors::AppResult;
use crate::models::{Appointment, Stylist};
use crate::ui::messages;
use crate::utils::time::parse_hhmm;

/// Dry run of the availability rules. Existing bookings are not consulted.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Check {
        date,
        time,
        stylist,
        duration,
        service,
    } = cmd
    {
        let repo = Repository::new(DbPool::new(&cfg.database)?);
        let ctx = repo.context()?;

        let minutes = resolve_duration(duration.as_ref(), service.as_ref(), &ctx, cfg)?;
        let appt = Appointment::new(
            "check",
            "check",
            Stylist::parse(stylist),
            date_arg(date)?,
            parse_hhmm(time)?,
            minutes,
        );
        appt.ensure_within_day()?;

        let result = validate_appointment(&appt, &ctx);
        match result.message {
            None => messages::success(format!(
                "{} {}-{} is available.",
                appt.date,
                appt.time_str(),
                appt.end_str()
            )),
            Some(msg) => messages::warning(msg),
        }
    }
    Ok(())
}
