use super::Session;
use crate::cli::parser::{Commands, ServiceAction};
use crate::config::Config;
use crate::core::business::BusinessLogic;
use crate::errors::AppResult;
use crate::models::Service;
use crate::ui::messages;
use crate::utils::id::new_id;
use crate::utils::mins2readable;
use crate::utils::table::Table;
use crate::utils::time::parse_duration;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Service { action } = cmd else {
        return Ok(());
    };
    let mut session = Session::open(cfg)?;

    match action {
        ServiceAction::Add {
            name,
            icon,
            duration,
            price,
            category,
            id,
        } => {
            let service = Service {
                id: id.clone().unwrap_or_else(new_id),
                name: name.clone(),
                icon: *icon,
                duration_minutes: parse_duration(duration)?,
                price_eur: *price,
                category: *category,
            };
            BusinessLogic::add_service(&mut session.ctx, service, &session.sink)?;
        }
        ServiceAction::List => {
            if session.ctx.services.is_empty() {
                messages::info("No services yet.");
                return Ok(());
            }
            let mut table = Table::new(&["Id", "", "Name", "Category", "Duration", "Price"]);
            for s in &session.ctx.services {
                table.add_row(vec![
                    s.id.clone(),
                    s.icon.glyph().to_string(),
                    s.name.clone(),
                    s.category.as_str().to_string(),
                    mins2readable(s.duration_minutes),
                    format!("{:.2} €", s.price_eur),
                ]);
            }
            println!("{}", table.render());
            return Ok(());
        }
        ServiceAction::Del { id } => {
            BusinessLogic::remove_service(&mut session.ctx, id, &session.sink)?;
        }
    }

    session.save_context()
}
