use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

mod commands;
mod wizard;

use voicemark_core::generate::ContentGenerator;
use voicemark_core::settings::{build_gateway, SettingsManager};
use voicemark_core::store::FileProfileStore;

use crate::commands::GenerateArgs;

#[derive(Parser, Debug)]
#[command(name = "voicemark")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Voicemark CLI - social content generated in your own writing style")]
struct Args {
    /// Directory for settings, profiles, and logs (default: ~/.voicemark)
    #[arg(long, value_name = "DIR", global = true)]
    data_dir: Option<PathBuf>,

    /// Client id that owns the stored profile (default: taken from settings)
    #[arg(long, value_name = "NAME", global = true)]
    client: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create, inspect, or clear the writing style profile
    Profile {
        #[command(subcommand)]
        action: Option<ProfileAction>,
    },

    /// Generate a post in the saved writing style
    Generate(GenerateArgs),
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum ProfileAction {
    /// Walk through the style questionnaire (the default action)
    Edit,

    /// Print the stored profile as JSON
    Show,

    /// Delete the stored profile
    Clear,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let data_dir = resolve_data_dir(args.data_dir.clone())?;
    setup_tracing(&data_dir)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run(args, data_dir))
}

async fn run(args: Args, data_dir: PathBuf) -> Result<()> {
    let settings_manager = SettingsManager::from_path(data_dir.join("settings.toml"))?;
    let settings = settings_manager.settings();
    let client = args.client.unwrap_or_else(|| settings.client.clone());

    info!(
        "CLI startup: client={client}, data_dir={}",
        data_dir.display()
    );

    let store = FileProfileStore::new(data_dir.join("profiles"), &client)?;

    match args.command {
        Command::Profile { action } => match action.unwrap_or(ProfileAction::Edit) {
            ProfileAction::Edit => wizard::run(&store),
            ProfileAction::Show => commands::show_profile(&store),
            ProfileAction::Clear => commands::clear_profile(&store),
        },
        Command::Generate(generate_args) => {
            let request = commands::build_request(&generate_args)?;
            let gateway = build_gateway(settings)?;
            let generator =
                ContentGenerator::new(Box::new(store), gateway, settings.model.clone());
            commands::generate(&generator, &request).await;
            Ok(())
        }
    }
}

fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    let home = dirs::home_dir().context("Failed to get home directory")?;
    Ok(home.join(".voicemark"))
}

fn setup_tracing(data_dir: &Path) -> Result<()> {
    use std::fs;
    use tracing_subscriber::fmt;

    let trace_dir = data_dir.join("trace");
    fs::create_dir_all(&trace_dir)?;

    let log_file = trace_dir.join("voicemark.log");
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)?;

    // Logs go to a file so they never interleave with questionnaire prompts
    // or generated content on stdout.
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Tracing initialized to {:?}", log_file);
    Ok(())
}
