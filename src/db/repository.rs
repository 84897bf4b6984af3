//! Typed access to the stored collections.

use crate::core::context::BusinessContext;
use crate::db::kv::KeyValueStore;
use crate::errors::AppResult;
use crate::models::{Appointment, Employee, ExceptionDate, Service, WeekSchedule};
use serde::Serialize;
use serde::de::DeserializeOwned;

pub const KEY_APPOINTMENTS: &str = "appointments";
pub const KEY_BUSINESS_HOURS: &str = "business_hours";
pub const KEY_EMPLOYEES: &str = "employees";
pub const KEY_SERVICES: &str = "services";
pub const KEY_EXCEPTIONS: &str = "exceptions";

pub struct Repository<S> {
    store: S,
}

impl<S: KeyValueStore> Repository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Missing keys decode to `T::default()`.
    fn load<T: DeserializeOwned + Default>(&self, key: &str) -> AppResult<T> {
        match self.store.get(key)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(T::default()),
        }
    }

    fn save<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> AppResult<()> {
        let raw = serde_json::to_string(value)?;
        self.store.set(key, &raw)
    }

    pub fn appointments(&self) -> AppResult<Vec<Appointment>> {
        self.load(KEY_APPOINTMENTS)
    }

    pub fn save_appointments(&mut self, appointments: &[Appointment]) -> AppResult<()> {
        self.save(KEY_APPOINTMENTS, appointments)
    }

    pub fn week_schedule(&self) -> AppResult<WeekSchedule> {
        self.load(KEY_BUSINESS_HOURS)
    }

    pub fn employees(&self) -> AppResult<Vec<Employee>> {
        self.load(KEY_EMPLOYEES)
    }

    pub fn services(&self) -> AppResult<Vec<Service>> {
        self.load(KEY_SERVICES)
    }

    pub fn exceptions(&self) -> AppResult<Vec<ExceptionDate>> {
        self.load(KEY_EXCEPTIONS)
    }

    /// Snapshot of the whole business configuration.
    pub fn context(&self) -> AppResult<BusinessContext> {
        Ok(BusinessContext {
            week: self.week_schedule()?,
            exceptions: self.exceptions()?,
            employees: self.employees()?,
            services: self.services()?,
        })
    }

    pub fn save_context(&mut self, ctx: &BusinessContext) -> AppResult<()> {
        self.save(KEY_BUSINESS_HOURS, &ctx.week)?;
        self.save(KEY_EXCEPTIONS, &ctx.exceptions)?;
        self.save(KEY_EMPLOYEES, &ctx.employees)?;
        self.save(KEY_SERVICES, &ctx.services)
    }
}
