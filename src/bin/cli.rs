//! EcoBloom CLI
//!
//! Terminal front end for the plant backend:
//! - Browse and search the catalog
//! - Manage the garden and tick off waterings
//! - Add plants
//! - Run the watering reminder loop

use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use ecobloom::actions::ActionError;
use ecobloom::api::HttpPlantApi;
use ecobloom::config::{generate_default_config, Config};
use ecobloom::form::AddPlantForm;
use ecobloom::logging::init_logging;
use ecobloom::model::{PlantId, WateringTime};
use ecobloom::notice::Notice;
use ecobloom::reminder::prompt::{AutoPrompter, Prompter, StdinPrompter};
use ecobloom::reminder::runner::{ReminderRunner, RunnerSettings};
use ecobloom::session::Session;
use ecobloom::view::{
    identify, modal::NOT_IDENTIFIED_MESSAGE, render_catalog, render_detail, render_garden,
    CatalogCard, DetailView, GardenView, Identification,
};

#[derive(Parser)]
#[command(name = "ecobloom")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Plant catalog, garden and watering reminders")]
#[command(long_about = "EcoBloom keeps track of the plants in your garden.\nBrowse the catalog, save plants, tick off morning and evening waterings and get reminded when one is due.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend URL (overrides the config file)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List catalog plants
    Catalog {
        /// Case-insensitive filter on name or scientific name
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show one plant in detail
    Show {
        id: PlantId,
    },

    /// List saved plants with today's watering status
    Garden,

    /// Save a plant to the garden, or remove it if already saved
    Toggle {
        id: PlantId,
    },

    /// Mark a watering as done
    Water {
        id: PlantId,
        /// morning or evening
        time: WateringTime,
    },

    /// Add a new plant to the catalog
    Add {
        name: String,
        #[arg(long, default_value = "")]
        scientific_name: String,
        #[arg(long, default_value = "")]
        image: String,
        /// Free text, e.g. "Twice a week"
        #[arg(long, default_value = "")]
        frequency: String,
        /// Watering times, comma-separated (morning,evening)
        #[arg(long, value_delimiter = ',')]
        times: Vec<WateringTime>,
        #[arg(long, default_value = "")]
        sunlight: String,
        #[arg(long, default_value = "")]
        soil: String,
        #[arg(long, default_value = "")]
        fertilizer: String,
        #[arg(long, default_value = "")]
        growth_type: String,
        #[arg(long, default_value = "")]
        care_tips: String,
    },

    /// Look up a photographed plant by name
    Identify {
        name: String,
    },

    /// Clear today's watering status for every plant
    ResetWatering,

    /// Run the reminder loop until interrupted
    Watch {
        /// Mark every reminded watering as done without asking
        #[arg(long)]
        yes: bool,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        return write_default_config(output.as_ref());
    }

    let mut config = Config::resolve(cli.config.as_deref())?;
    if let Some(url) = &cli.api_url {
        config.backend.url = url.clone();
    }
    init_logging(&config.logging)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start runtime")?;
    let local = tokio::task::LocalSet::new();
    local.block_on(&runtime, run(cli, config))
}

async fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    tracing::debug!("Backend: {}", config.backend.url);
    let api = HttpPlantApi::new(config.client_config())?;
    let session = Rc::new(Session::new(api));
    let format = cli.format;

    if needs_catalog(&cli.command) {
        report(session.load_catalog().await)?;
    }

    match cli.command {
        Commands::Catalog { search } => {
            let cards = render_catalog(&session.store(), search.as_deref().unwrap_or(""));
            match format {
                OutputFormat::Json => print_json(&cards)?,
                OutputFormat::Table => print_catalog(&cards),
            }
        }

        Commands::Show { id } => {
            let Some(plant) = session.snapshot(id) else {
                bail!("No plant with id {}", id);
            };
            show_detail(&render_detail(&plant), format)?;
        }

        Commands::Garden => {
            let view = render_garden(&session.store());
            match format {
                OutputFormat::Json => print_json(&view)?,
                OutputFormat::Table => print_garden(&view),
            }
        }

        Commands::Toggle { id } => {
            report(session.toggle_save(id).await)?;
        }

        Commands::Water { id, time } => {
            report(session.mark_watering(id, time).await)?;
        }

        Commands::Add {
            name,
            scientific_name,
            image,
            frequency,
            times,
            sunlight,
            soil,
            fertilizer,
            growth_type,
            care_tips,
        } => {
            let mut form = AddPlantForm {
                name,
                scientific_name,
                image_url: image,
                watering_frequency: frequency,
                sunlight,
                soil,
                fertilizer,
                growth_type,
                care_tips,
                ..AddPlantForm::default()
            };
            for time in times {
                form.set_watering_time(time, true);
            }
            let plant = form.validate()?;
            report(session.add_plant(&plant).await)?;
        }

        Commands::Identify { name } => {
            let found = identify(&session.store(), &name);
            match found {
                Some(Identification::Found(id)) => {
                    if let Some(plant) = session.snapshot(id) {
                        show_detail(&render_detail(&plant), format)?;
                    }
                }
                Some(Identification::NotFound) => {
                    println!("{}", NOT_IDENTIFIED_MESSAGE);
                    println!("Use `ecobloom add \"{}\" --times morning` to add it.", name.trim());
                }
                None => bail!("Please enter the plant name."),
            }
        }

        Commands::ResetWatering => {
            report(session.reset_watering().await)?;
        }

        Commands::Watch { yes } => {
            let settings = config.runner_settings();
            if yes {
                watch(session, AutoPrompter(true), settings).await;
            } else {
                watch(session, StdinPrompter::new(), settings).await;
            }
        }

        Commands::Config { output } => write_default_config(output.as_ref())?,
    }

    Ok(())
}

fn needs_catalog(command: &Commands) -> bool {
    !matches!(
        command,
        Commands::Add { .. } | Commands::ResetWatering | Commands::Config { .. }
    )
}

/// Print the action's notice; failures go to stderr and end the command
fn report(result: Result<Option<Notice>, ActionError>) -> anyhow::Result<()> {
    match result {
        Ok(Some(notice)) => {
            println!("{}", notice);
            Ok(())
        }
        Ok(None) => Ok(()),
        Err(e) => {
            eprintln!("{}", e.notice());
            Err(e.into())
        }
    }
}

async fn watch<P: Prompter + 'static>(
    session: Rc<Session<HttpPlantApi>>,
    prompter: P,
    settings: RunnerSettings,
) {
    let runner = ReminderRunner::new(session, Rc::new(prompter), settings);
    println!("Watching for watering reminders. Press Ctrl+C to stop.");

    tokio::select! {
        _ = runner.run() => {}
        _ = tokio::signal::ctrl_c() => {
            runner.stop();
            tracing::info!("Interrupted");
        }
    }
}

fn write_default_config(output: Option<&PathBuf>) -> anyhow::Result<()> {
    let config = generate_default_config();

    match output {
        Some(path) => {
            // Create parent directory if needed
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &config)?;
            println!("Config written to {:?}", path);
        }
        None => {
            print!("{}", config);
        }
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_catalog(cards: &[CatalogCard]) {
    if cards.is_empty() {
        println!("No plants found");
        return;
    }

    println!("{:<5} {:<24} {:<30} {:<20} {}", "ID", "Name", "Scientific name", "Sunlight", "Saved");
    println!("{}", "-".repeat(86));

    for card in cards {
        println!(
            "{:<5} {:<24} {:<30} {:<20} {}",
            card.id,
            card.name,
            card.scientific_name,
            card.sunlight_badge,
            if card.saved { "✓" } else { "" }
        );
    }
}

fn show_detail(view: &DetailView, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => print_json(view),
        OutputFormat::Table => {
            println!("{} ({})", view.name, view.scientific_name);
            println!("{}", view.image.src);
            println!();
            for item in &view.info {
                println!("{:<16} {}", item.label, item.value);
            }
            for section in &view.sections {
                println!();
                println!("{}", section.title);
                println!("  {}", section.body);
            }
            println!();
            println!("[{}]", view.toggle.label);
            Ok(())
        }
    }
}

fn print_garden(view: &GardenView) {
    let cards = match view {
        GardenView::Empty { message } => {
            println!("{}", message);
            return;
        }
        GardenView::Grid { cards } => cards,
    };

    println!("{:<5} {:<24} {:<20} {}", "ID", "Name", "Frequency", "Today");
    println!("{}", "-".repeat(72));

    for card in cards {
        let buttons: Vec<String> = card
            .buttons
            .iter()
            .map(|b| format!("{} {}", b.icon, b.label))
            .collect();
        println!(
            "{:<5} {:<24} {:<20} {}",
            card.id,
            card.name,
            card.watering_frequency,
            buttons.join("  ")
        );
    }
}
