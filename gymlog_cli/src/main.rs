use clap::Parser;
use gymlog_core::{
    collect_profile, get_default_catalog, run_session_loop, Config, Console, DailyLogStore, Error,
    FileExtension, Result, SessionContext, Style,
};
use std::path::PathBuf;

mod term;

use term::AnsiConsole;

#[derive(Parser)]
#[command(name = "gymlog")]
#[command(about = "Personal workout logging CLI", long_about = None)]
struct Cli {
    /// Override the directory holding daily log files
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Override the log file extension (csv or xls)
    #[arg(long)]
    file_extension: Option<String>,
}

fn main() -> Result<()> {
    // Initialize logging
    gymlog_core::logging::init();

    let cli = Cli::parse();

    // Resolve settings: flags win over the config file, which wins over defaults
    let config = Config::load()?;
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());
    let extension: FileExtension = match cli.file_extension.as_deref() {
        Some(text) => text.parse()?,
        None => config.data.file_extension,
    };

    let catalog = get_default_catalog();
    let errors = catalog.validate();
    if !errors.is_empty() {
        eprintln!("Catalog validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::CatalogValidation("Invalid catalog".into()));
    }

    let mut console = AnsiConsole::new();

    if !data_dir.exists() {
        std::fs::create_dir_all(&data_dir)?;
        console.say(
            Style::Success,
            &format!("Successfully created directory: {}", data_dir.display()),
        );
        tracing::info!(dir = %data_dir.display(), "Created log directory");
    }

    console.say(Style::Heading, "--- Welcome to the Gym Log! ---");

    let profile = collect_profile(&mut console)?;
    let ctx = SessionContext {
        profile,
        catalog: catalog.clone(),
    };
    let store = DailyLogStore::new(data_dir, extension);

    run_session_loop(&mut console, &ctx, &store)
}
