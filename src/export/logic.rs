use crate::core::book::AppointmentBook;
use crate::core::context::BusinessContext;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::model::AppointmentExport;
use crate::export::writers::{write_csv, write_json};
use crate::ui::messages::{success, warning};
use crate::utils::date::resolve_period;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Write the appointments of `range` (all when `None` or "all") to
    /// `file`. Returns the number of exported rows.
    ///
    /// `range` accepts `YYYY`, `YYYY-MM`, `YYYY-MM-DD` or `from:to`.
    pub fn export(
        book: &AppointmentBook,
        ctx: &BusinessContext,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        let selected = match range.filter(|r| !r.eq_ignore_ascii_case("all")) {
            None => {
                let mut all = book.items().to_vec();
                all.sort_by_key(|a| (a.date, a.time, a.id.clone()));
                all
            }
            Some(r) => {
                let dates = resolve_period(r).map_err(AppError::InvalidDate)?;
                book.for_dates(&dates)
            }
        };

        if selected.is_empty() {
            warning("No appointments in the selected range.");
        }

        let rows: Vec<AppointmentExport> = selected
            .iter()
            .map(|a| AppointmentExport::from_appointment(a, ctx))
            .collect();

        match format {
            ExportFormat::Csv => write_csv(path, &rows)?,
            ExportFormat::Json => write_json(path, &rows)?,
        }

        success(format!(
            "{} export completed: {} ({} appointments)",
            format.as_str().to_uppercase(),
            path.display(),
            rows.len()
        ));
        Ok(rows.len())
    }
}
