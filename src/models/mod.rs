pub mod appointment;
pub mod business;
pub mod employee;
pub mod exception;
pub mod serde_fmt;
pub mod service;
pub mod week;

pub use appointment::{Appointment, Stylist};
pub use business::{DayHours, OpeningHours, WeekSchedule};
pub use employee::{DaySchedule, Employee};
pub use exception::ExceptionDate;
pub use service::{Service, ServiceCategory, ServiceIcon};
pub use week::Week;
