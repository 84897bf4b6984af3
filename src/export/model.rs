use crate::core::context::BusinessContext;
use crate::models::{Appointment, Stylist};
use serde::Serialize;

/// Flat appointment row for CSV / JSON.
#[derive(Serialize, Clone, Debug)]
pub struct AppointmentExport {
    pub id: String,
    pub date: String,
    pub time: String,
    pub end: String,
    pub duration: u32,
    pub title: String,
    pub stylist: String,
    pub stylist_name: String,
    pub service: String,
    pub price_eur: Option<f64>,
    pub walk_in: bool,
}

impl AppointmentExport {
    pub fn from_appointment(a: &Appointment, ctx: &BusinessContext) -> Self {
        let service = a.service_id.as_deref().and_then(|id| ctx.service(id));
        let stylist_name = match &a.stylist {
            Stylist::Specific(id) => ctx.employee_name(id),
            Stylist::Unassigned => String::new(),
        };

        Self {
            id: a.id.clone(),
            date: a.date.format("%Y-%m-%d").to_string(),
            time: a.time_str(),
            end: a.end_str(),
            duration: a.duration,
            title: a.title.clone(),
            stylist: a.stylist.to_string(),
            stylist_name,
            service: service.map(|s| s.name.clone()).unwrap_or_default(),
            price_eur: service.map(|s| s.price_eur),
            walk_in: a.is_walk_in,
        }
    }
}
