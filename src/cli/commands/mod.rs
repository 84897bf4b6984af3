//! One handler per subcommand, each with the shape
//! `handle(cmd, cfg) -> AppResult<()>`.

pub mod add;
pub mod check;
pub mod config;
pub mod day;
pub mod del;
pub mod edit;
pub mod employee;
pub mod exception;
pub mod export;
pub mod hours;
pub mod init;
pub mod list;
pub mod log;
pub mod service;
pub mod week;

use crate::config::Config;
use crate::core::book::AppointmentBook;
use crate::core::context::BusinessContext;
use crate::core::notify::ConsoleSink;
use crate::db::pool::DbPool;
use crate::db::repository::Repository;
use crate::errors::{AppError, AppResult};
use crate::utils::date::{parse_date, today};
use chrono::NaiveDate;

/// Everything a mutating command needs: the stored state loaded once,
/// and a sink writing to the terminal and the log table.
pub(crate) struct Session {
    pub repo: Repository<DbPool>,
    pub ctx: BusinessContext,
    pub book: AppointmentBook,
    pub sink: ConsoleSink,
}

impl Session {
    pub fn open(cfg: &Config) -> AppResult<Self> {
        let repo = Repository::new(DbPool::new(&cfg.database)?);
        let ctx = repo.context()?;
        let book = AppointmentBook::new(repo.appointments()?);
        Ok(Self {
            repo,
            ctx,
            book,
            sink: ConsoleSink::with_log(&cfg.database),
        })
    }

    pub fn save_book(&mut self) -> AppResult<()> {
        self.repo.save_appointments(self.book.items())
    }

    pub fn save_context(&mut self) -> AppResult<()> {
        self.repo.save_context(&self.ctx)
    }
}

pub(crate) fn date_arg(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// Optional date argument, defaulting to today.
pub(crate) fn date_or_today(s: Option<&String>) -> AppResult<NaiveDate> {
    s.map(|d| date_arg(d)).transpose().map(|d| d.unwrap_or_else(today))
}

pub(crate) fn weekday_arg(s: &str) -> AppResult<chrono::Weekday> {
    crate::utils::date::parse_weekday(s).ok_or_else(|| AppError::InvalidWeekday(s.to_string()))
}
