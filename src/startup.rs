use crate::components::calendar::seed::{load_store, DemoSource, EventSource, TomlFileSource};
use crate::components::CalendarHandle;
use crate::config::Config;
use crate::error::other_error;
use crate::utils::i18n;
use chrono::NaiveDate;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging with environment-based configuration
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| other_error(&format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load the configuration and apply its locale
pub fn load_config() -> miette::Result<Config> {
    match Config::load() {
        Ok(config) => {
            let locale = i18n::set_locale(&config.locale);
            info!("Using locale {} and timezone {}", locale, config.timezone);
            Ok(config)
        }
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Seed sources for a configuration: the seed file when one is set,
/// otherwise the demo calendar around `reference`
pub fn seed_sources(config: &Config, reference: NaiveDate) -> Vec<Box<dyn EventSource>> {
    match &config.seed_file {
        Some(path) => vec![Box::new(TomlFileSource::new(path.clone()))],
        None => vec![Box::new(DemoSource::new(reference))],
    }
}

/// Load the seed events and spawn the calendar actor
pub async fn start_calendar(config: &Config, reference: NaiveDate) -> miette::Result<CalendarHandle> {
    let store = load_store(&seed_sources(config, reference)).await?;
    info!("Calendar loaded with {} events", store.len());
    Ok(CalendarHandle::new(store))
}
