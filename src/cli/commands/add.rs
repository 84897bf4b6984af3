use super::{Session, date_arg};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AppointmentLogic;
use crate::core::context::BusinessContext;
use crate::errors::{AppError, AppResult};
use crate::models::{Appointment, Stylist};
use crate::utils::id::new_id;
use crate::utils::time::{parse_duration, parse_hhmm};

/// Explicit `--duration`, else the service's length, else the configured default.
pub(crate) fn resolve_duration(
    duration: Option<&String>,
    service: Option<&String>,
    ctx: &BusinessContext,
    cfg: &Config,
) -> AppResult<u32> {
    if let Some(d) = duration {
        return parse_duration(d);
    }
    match service {
        Some(id) => ctx
            .service(id)
            .map(|s| s.duration_minutes)
            .ok_or_else(|| AppError::ServiceNotFound(id.clone())),
        None => Ok(cfg.default_duration),
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        time,
        title,
        stylist,
        duration,
        service,
        walk_in,
        id,
    } = cmd
    {
        let mut session = Session::open(cfg)?;

        let date = date_arg(date)?;
        let time = parse_hhmm(time)?;
        let minutes = resolve_duration(duration.as_ref(), service.as_ref(), &session.ctx, cfg)?;

        let title = match (title, service) {
            (Some(t), _) => t.clone(),
            (None, Some(sid)) => session
                .ctx
                .service(sid)
                .map(|s| s.name.clone())
                .ok_or_else(|| AppError::ServiceNotFound(sid.clone()))?,
            (None, None) => {
                return Err(AppError::InvalidInput(
                    "--title is required when no --service is given".into(),
                ));
            }
        };

        let mut appt = Appointment::new(
            id.clone().unwrap_or_else(new_id),
            title,
            Stylist::parse(stylist),
            date,
            time,
            minutes,
        );
        appt.is_walk_in = *walk_in;
        appt.service_id = service.clone();

        AppointmentLogic::add(&mut session.book, &session.ctx, appt, &session.sink)?;
        session.save_book()?;
    }
    Ok(())
}
