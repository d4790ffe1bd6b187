//! Mawaqit CLI
//!
//! Command-line interface for looking up today's prayer times:
//! - List countries and cities
//! - Fetch timings for a city
//! - Walk through the form interactively

use clap::{Parser, Subcommand, ValueEnum};
use mawaqit::view::components;
use mawaqit::{countries, find_country, logging, AladhanClient, Config, FetchState, Session};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mawaqit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Today's prayer times for a country and city")]
#[command(long_about = "Mawaqit looks up today's prayer times for a city using the Aladhan API.\nPrayer names are shown in Arabic, times in 12-hour format.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: ~/.config/mawaqit/config.toml, then ./mawaqit.toml)
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
    /// List selectable countries
    Countries,

    /// List the cities of a country
    Cities {
        /// Country name
        country: String,
    },

    /// Fetch today's prayer times
    Times {
        /// Country name
        country: String,
        /// City name
        city: String,
    },

    /// Fill in the form interactively
    Interactive,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = tracing::subscriber::with_default(logging::bootstrap(), || {
        Config::resolve(cli.config.as_deref())
    })?;
    logging::init(&config.logging);

    let json = cli.format == OutputFormat::Json;

    match cli.command {
        Commands::Countries => {
            if json {
                let list: Vec<_> = countries().collect();
                println!("{}", serde_json::to_string_pretty(&list)?);
            } else {
                println!("{:<22} {:<5} {}", "Country", "Code", "Cities");
                println!("{}", "-".repeat(36));
                for country in countries() {
                    println!(
                        "{:<22} {:<5} {}",
                        country.name,
                        country.code,
                        country.cities.len()
                    );
                }
            }
        }

        Commands::Cities { country } => {
            let Some(entry) = find_country(&country) else {
                eprintln!("Unknown country: {}", country);
                eprintln!("Run `mawaqit countries` to see the available ones.");
                std::process::exit(1);
            };

            if json {
                println!("{}", serde_json::to_string_pretty(entry.cities)?);
            } else {
                for city in entry.cities {
                    println!("{}", city);
                }
            }
        }

        Commands::Times { country, city } => {
            let client = AladhanClient::new(config.api.clone())?;

            let mut session = Session::new();
            session.select_country(&country)?;
            session.select_city(&city)?;
            session.submit(&client).await;

            match session.fetch_state() {
                FetchState::Success(timings) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(timings)?);
                    } else {
                        if let Some(panel) = components::location_panel(session.selection()) {
                            println!("{}", panel);
                        }
                        print!("{}", components::timings_panel(timings));
                    }
                }
                FetchState::Error(e) => {
                    tracing::debug!("Fetch failed: {}", e);
                    eprintln!("{}", e.user_message());
                    std::process::exit(1);
                }
                FetchState::Idle | FetchState::Loading => {
                    anyhow::bail!("No result for {}, {}", city, country);
                }
            }
        }

        Commands::Interactive => {
            let client = AladhanClient::new(config.api.clone())?;
            let mut session = Session::new();
            let input = tokio::io::BufReader::new(tokio::io::stdin());
            let mut stdout = std::io::stdout();

            mawaqit::shell::run(&mut session, &client, input, &mut stdout).await?;
        }

        Commands::Config { output } => {
            let content = mawaqit::config::generate_default_config();

            match output {
                Some(path) => {
                    // Create parent directory if needed
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &content)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", content);
                }
            }
        }
    }

    Ok(())
}
