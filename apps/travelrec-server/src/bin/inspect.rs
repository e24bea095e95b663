use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use travelrec_core::config::{Config, Settings};
use travelrec_core::dataset::Dataset;
use travelrec_core::types::RecommendationQuery;
use travelrec_recommend::TravelRecommender;

#[derive(Parser, Debug)]
#[command(name = "travelrec-inspect", version, about = "Inspect the travel dataset and model artifacts")]
struct Cli {
    /// Directory holding config.toml (defaults to the current directory)
    #[arg(short = 'c', long, global = true)]
    config_dir: Option<PathBuf>,

    /// Environment overlay to apply (dev, test, prod)
    #[arg(long, global = true, env = "RUST_ENV", default_value = "dev")]
    env: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Row and vocabulary counts, plus the loaded model shape
    Stats,
    /// Zones in dataset order
    Zones,
    /// States seen in a zone
    States { zone: String },
    /// Cities seen in a state
    Cities { state: String },
    /// Run one recommendation and show the matched rows
    Recommend {
        zone: String,
        state: String,
        city: String,
        age_group: String,
        gender: String,
        ideal_months: String,
        budget: String,
        /// Override the neighbor count
        #[arg(short = 'k', long)]
        neighbors: Option<usize>,
    },
}

fn load_settings(cli: &Cli) -> anyhow::Result<Settings> {
    let base_dir = match &cli.config_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };
    let config = Config::load_from(&base_dir, &cli.env).context("loading configuration")?;
    Ok(config.settings()?)
}

fn print_list(items: &[String]) {
    if items.is_empty() {
        println!("(none)");
    }
    for item in items {
        println!("{item}");
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut settings = load_settings(&cli)?;

    match cli.command {
        Commands::Stats => {
            let recommender = TravelRecommender::load(&settings)?;
            let stats = recommender.dataset().stats();
            let index = recommender.index();
            println!("destinations: {}", stats.destinations);
            println!("zones:        {}", stats.zones);
            println!("states:       {}", stats.states);
            println!("cities:       {}", stats.cities);
            println!("index:        {} rows x {} features, {:?}", index.rows(), index.dim(), index.metric());
            println!("neighbors:    {}", recommender.k());
            for enc in recommender.encoder().encoders() {
                println!("  {:<20} {} classes", enc.column(), enc.len());
            }
        }
        Commands::Zones => print_list(Dataset::load(&settings.dataset_path())?.zones()),
        Commands::States { zone } => {
            print_list(Dataset::load(&settings.dataset_path())?.states_for_zone(&zone));
        }
        Commands::Cities { state } => {
            print_list(Dataset::load(&settings.dataset_path())?.cities_for_state(&state));
        }
        Commands::Recommend { zone, state, city, age_group, gender, ideal_months, budget, neighbors } => {
            if neighbors.is_some() {
                settings.model.neighbors = neighbors;
            }
            let recommender = TravelRecommender::load(&settings)?;
            let query = RecommendationQuery { zone, state, city, age_group, gender, ideal_months, budget };
            let hits = recommender.neighbors(&query)?;
            for (rank, hit) in hits.iter().enumerate() {
                let row = recommender
                    .dataset()
                    .get(hit.index)
                    .with_context(|| format!("neighbor row {} missing from dataset", hit.index))?;
                let fitted = recommender
                    .index()
                    .row(hit.index)
                    .with_context(|| format!("neighbor row {} missing from index", hit.index))?;
                let decoded = recommender.encoder().decode(fitted)?;
                println!(
                    "{:>2}. {} ({}) distance={:.4}",
                    rank + 1,
                    row.destination,
                    row.category,
                    hit.distance
                );
                println!("    row {}: {}", hit.index, decoded.join(" | "));
            }
        }
    }
    Ok(())
}
