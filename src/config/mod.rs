use crate::core::layout::{ViewConfig, ViewMode};
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Minutes used when neither `--duration` nor a service is given.
    #[serde(default = "default_duration")]
    pub default_duration: u32,
    #[serde(default = "default_view_start_hour")]
    pub view_start_hour: u32,
    #[serde(default = "default_view_end_hour")]
    pub view_end_hour: u32,
    /// Pixels per hour row of the time grid.
    #[serde(default = "default_hour_height")]
    pub hour_height: f64,
    /// Left/right page margin of the grid, in percent.
    #[serde(default = "default_page_margin")]
    pub page_margin: f64,
}

fn default_duration() -> u32 {
    30
}
fn default_view_start_hour() -> u32 {
    8
}
fn default_view_end_hour() -> u32 {
    20
}
fn default_hour_height() -> f64 {
    60.0
}
fn default_page_margin() -> f64 {
    2.0
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file())
    }
}

impl Config {
    fn with_database(db_path: PathBuf) -> Self {
        Self {
            database: db_path.to_string_lossy().to_string(),
            default_duration: default_duration(),
            view_start_hour: default_view_start_hour(),
            view_end_hour: default_view_end_hour(),
            hour_height: default_hour_height(),
            page_margin: default_page_margin(),
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("salonbook")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".salonbook")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("salonbook.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("salonbook.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let mut cfg: Config = serde_yaml::from_str(&content)?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        cfg.check()?;
        Ok(cfg)
    }

    /// Reject values the layout engine cannot work with.
    pub fn check(&self) -> AppResult<()> {
        if self.default_duration == 0 {
            return Err(AppError::Config("default_duration must be positive".into()));
        }
        if self.view_start_hour >= self.view_end_hour || self.view_end_hour > 24 {
            return Err(AppError::Config(format!(
                "invalid view hours {}..{}",
                self.view_start_hour, self.view_end_hour
            )));
        }
        if self.hour_height <= 0.0 {
            return Err(AppError::Config("hour_height must be positive".into()));
        }
        if !(0.0..50.0).contains(&self.page_margin) {
            return Err(AppError::Config(
                "page_margin must be between 0 and 50 percent".into(),
            ));
        }
        Ok(())
    }

    pub fn view(&self, mode: ViewMode) -> ViewConfig {
        ViewConfig {
            start_hour: self.view_start_hour,
            hour_height: self.hour_height,
            page_margin: self.page_margin,
            mode,
        }
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        // DB name: user provided or default
        let db_path = match custom_name {
            Some(name) => {
                let p = expand_tilde(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => dir.join("salonbook.sqlite"),
        };

        // Write config file
        if !is_test {
            fs::create_dir_all(&dir)?;
            let config = Self::with_database(db_path.clone());
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| {
                io::Error::new(e.kind(), format!("cannot create {}: {e}", parent.display()))
            })?;
        }

        Ok(db_path)
    }
}
