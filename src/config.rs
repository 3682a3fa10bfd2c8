use crate::components::calendar::{HourWindow, ViewMode};
use crate::error::{config_error, env_error, CalendarResult};
use crate::utils::time::today_in;
use chrono::NaiveDate;
use chrono_tz::Tz;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default timezone used to decide what "today" is
pub const DEFAULT_TIMEZONE: &str = "Asia/Kolkata";

/// Optional settings file merged over the environment
pub const CONFIG_FILE: &str = "config/calendar.toml";

/// Main configuration structure for the calendar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// IANA timezone name
    pub timezone: String,
    /// Locale for rendered text
    pub locale: String,
    /// View shown when none is requested
    pub default_view: ViewMode,
    /// TOML file of events to load instead of the demo data
    pub seed_file: Option<PathBuf>,
    /// Hours shown in day and week grids
    pub hour_window: HourWindow,
}

/// Values that may be set in the settings file
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    timezone: Option<String>,
    locale: Option<String>,
    default_view: Option<ViewMode>,
    seed_file: Option<PathBuf>,
    grid_start_hour: Option<u32>,
    grid_end_hour: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE.to_string(),
            locale: "en".to_string(),
            default_view: ViewMode::Week,
            seed_file: None,
            hour_window: HourWindow::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment and config file
    pub fn load() -> CalendarResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let mut config = Config::default();

        if Path::new(CONFIG_FILE).exists() {
            let content = fs::read_to_string(CONFIG_FILE)?;
            config.apply_file(&content)?;
        }

        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Merge settings from the contents of a TOML settings file
    pub fn apply_file(&mut self, content: &str) -> CalendarResult<()> {
        let file: FileConfig = toml::from_str(content)?;

        if let Some(timezone) = file.timezone {
            self.timezone = timezone;
        }
        if let Some(locale) = file.locale {
            self.locale = locale;
        }
        if let Some(view) = file.default_view {
            self.default_view = view;
        }
        if file.seed_file.is_some() {
            self.seed_file = file.seed_file;
        }
        self.hour_window = HourWindow::new(
            file.grid_start_hour.unwrap_or(self.hour_window.start),
            file.grid_end_hour.unwrap_or(self.hour_window.end),
        )?;

        Ok(())
    }

    /// Override settings from `YUGALITY_*` environment variables
    fn apply_env(&mut self) -> CalendarResult<()> {
        if let Ok(timezone) = env::var("YUGALITY_TIMEZONE") {
            self.timezone = timezone;
        }
        if let Ok(locale) = env::var("YUGALITY_LOCALE") {
            self.locale = locale;
        }
        if let Ok(view) = env::var("YUGALITY_DEFAULT_VIEW") {
            self.default_view = view
                .parse()
                .map_err(|_| env_error("YUGALITY_DEFAULT_VIEW", &view))?;
        }
        if let Ok(path) = env::var("YUGALITY_SEED_FILE") {
            self.seed_file = Some(PathBuf::from(path));
        }

        let start = parse_hour_var("YUGALITY_GRID_START_HOUR")?.unwrap_or(self.hour_window.start);
        let end = parse_hour_var("YUGALITY_GRID_END_HOUR")?.unwrap_or(self.hour_window.end);
        self.hour_window = HourWindow::new(start, end)?;

        Ok(())
    }

    /// Check values that cannot be checked while parsing
    pub fn validate(&self) -> CalendarResult<()> {
        self.tz()?;
        Ok(())
    }

    /// Parsed timezone
    pub fn tz(&self) -> CalendarResult<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| config_error(&format!("Unknown timezone: {}", self.timezone)))
    }

    /// Today's date in the configured timezone
    pub fn today(&self) -> CalendarResult<NaiveDate> {
        Ok(today_in(&self.tz()?))
    }
}

fn parse_hour_var(var: &str) -> CalendarResult<Option<u32>> {
    match env::var(var) {
        Ok(value) => value
            .parse::<u32>()
            .map(Some)
            .map_err(|_| env_error(var, &value)),
        Err(_) => Ok(None),
    }
}
