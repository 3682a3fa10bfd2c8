use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use yugality_calendar::commands::{show_view, CommandContext, OutputFormat};
use yugality_calendar::components::calendar::ViewMode;
use yugality_calendar::startup;

#[derive(Parser, Debug)]
#[command(
    name = "yugality-calendar",
    version,
    about = "Print the Yugality practice calendar for a day, week, month or quarter"
)]
struct Cli {
    /// View to show. Defaults to the configured view.
    #[arg(short, long, value_enum)]
    view: Option<ViewMode>,

    /// Reference date (YYYY-MM-DD). Defaults to today in the configured timezone.
    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// Move forward (or backward, if negative) by this many views.
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    offset: i32,

    /// TOML file of events to load instead of the demo calendar.
    #[arg(long)]
    seed: Option<PathBuf>,

    /// Emit JSON output instead of human-readable text.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    startup::init_logging()?;

    info!("Starting Yugality calendar");

    // Load configuration
    let mut config = startup::load_config()?;
    if let Some(seed) = cli.seed {
        config.seed_file = Some(seed);
    }

    let view = cli.view.unwrap_or(config.default_view);
    let reference = match cli.date {
        Some(date) => date,
        None => config.today()?,
    };

    let handle = startup::start_calendar(&config, reference).await?;

    let ctx = CommandContext::new(config, reference)
        .with_view(view)
        .navigate(cli.offset);
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let output = show_view(&ctx, &handle, format).await?;
    println!("{}", output);

    handle.shutdown().await?;
    Ok(())
}
