use super::Session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id } = cmd {
        let mut session = Session::open(cfg)?;

        let appt = session
            .book
            .get(id)
            .ok_or_else(|| AppError::AppointmentNotFound(id.clone()))?;
        let prompt = format!(
            "Delete '{}' on {} at {}?",
            appt.title,
            appt.date,
            appt.time_str()
        );

        if !messages::confirm(&prompt) {
            messages::info("Operation cancelled.");
            return Ok(());
        }

        DeleteLogic::apply(&mut session.book, id, &session.sink)?;
        session.save_book()?;
    }
    Ok(())
}
