//! Songbook CLI
//!
//! Command-line interface for the singer roster:
//! - List singers and their songs
//! - Add singers or songs (merging into existing singers)
//! - Delete singers or single songs, with confirmation
//! - Check API status and seed an empty roster

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use songbook::config::{generate_default_config, Config};
use songbook::logging::init_logging;
use songbook::views::home;
use songbook::{
    seed_if_empty, AddSingerForm, HttpSingerApi, PendingDeletion, SeedOutcome, SingerApi,
    SingerId, SingerListView,
};

#[derive(Parser)]
#[command(name = "songbook")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Manage singers and their songs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: ~/.config/songbook/config.toml or ./songbook.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// API base URL, overrides the config file
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the welcome screen
    Home,

    /// List all singers and their songs
    List {
        /// Print raw JSON
        #[arg(long)]
        json: bool,
        /// Show delete actions
        #[arg(short, long)]
        edit: bool,
    },

    /// Show one singer
    Show {
        /// Singer id
        id: String,
    },

    /// Add a singer, or add songs to an existing singer with the same name
    Add {
        /// Singer name (matched case-insensitively)
        name: String,
        /// Comma-separated song titles
        songs: String,
    },

    /// Delete a singer and all their songs
    DeleteSinger {
        /// Singer id
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Delete one song from a singer
    DeleteSong {
        /// Singer id
        id: String,
        /// Song title (exact match)
        song: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Rename a singer
    Rename {
        /// Singer id
        id: String,
        /// New name
        name: String,
    },

    /// Check that the API is reachable
    Status,

    /// Create the default roster if the API has no singers
    Seed,

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

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }

    init_logging(&config.logging);
    tracing::debug!("Using API at {}", config.api.base_url);

    let api = HttpSingerApi::new(config.api.client_config())?;

    match cli.command {
        Commands::Home => {
            print!("{}", home::render());
        }

        Commands::List { json, edit } => {
            let mut view = SingerListView::load(&api).await;
            if let Some(error) = view.error() {
                bail!("{}", error);
            }

            if json {
                println!("{}", serde_json::to_string_pretty(view.singers())?);
            } else {
                if edit {
                    view.toggle_edit_mode();
                }
                print!("{}", view.render());
            }
        }

        Commands::Show { id } => {
            let singer = api.get_singer(&SingerId::new(id)).await?;
            println!("{}  [{}]", singer.name, singer.id);
            for song in &singer.songs {
                println!("  - {}", song);
            }
        }

        Commands::Add { name, songs } => {
            let mut form = AddSingerForm::load(&api).await;
            if let Some(error) = form.error() {
                bail!("{}", error);
            }

            form.name = name;
            form.songs = songs;
            let outcome = form.submit(&api).await?;
            println!("{}", outcome.message());
        }

        Commands::DeleteSinger { id, yes } => {
            let id = SingerId::new(id);
            let mut view = editable_list(&api).await?;
            if !view.request_delete_singer(&id) {
                bail!("Singer {} not found", id);
            }
            confirm_and_delete(&api, &mut view, yes).await?;
        }

        Commands::DeleteSong { id, song, yes } => {
            let id = SingerId::new(id);
            let mut view = editable_list(&api).await?;
            if !view.request_delete_song(&id, &song) {
                bail!("Song \"{}\" not found for singer {}", song, id);
            }
            confirm_and_delete(&api, &mut view, yes).await?;
        }

        Commands::Rename { id, name } => {
            let name = songbook::SingerName::parse(&name)?;
            api.rename_singer(&SingerId::new(id), name.as_str()).await?;
            println!("Singer renamed to {}", name);
        }

        Commands::Status => match api.health().await {
            Ok(health) => {
                println!("Songbook v{}", env!("CARGO_PKG_VERSION"));
                println!("API: {}", api.endpoints().base());
                println!("Status: {}", health.status);
            }
            Err(e) => {
                eprintln!("Cannot reach the singer API at {}", api.endpoints().base());
                return Err(e.into());
            }
        },

        Commands::Seed => match seed_if_empty(&api).await? {
            SeedOutcome::AlreadySeeded { existing } => {
                println!("Roster already initialized ({} singers).", existing);
            }
            SeedOutcome::Seeded { created } => {
                println!("Roster initialized with {} singers.", created.len());
            }
        },

        Commands::Config { output } => {
            let config = generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)
                        .with_context(|| format!("writing {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

/// Load the list view with delete actions enabled
async fn editable_list(api: &HttpSingerApi) -> anyhow::Result<SingerListView> {
    let mut view = SingerListView::load(api).await;
    if let Some(error) = view.error() {
        bail!("{}", error);
    }
    view.toggle_edit_mode();
    Ok(view)
}

/// Show the pending deletion, ask for confirmation, and execute it
async fn confirm_and_delete(
    api: &HttpSingerApi,
    view: &mut SingerListView,
    assume_yes: bool,
) -> anyhow::Result<()> {
    let Some(pending) = view.modal().pending().cloned() else {
        return Ok(());
    };

    if !assume_yes && !ask(&pending)? {
        view.cancel();
        println!("Cancelled.");
        return Ok(());
    }

    view.confirm(api).await?;
    if let Some(notice) = view.notice() {
        println!("{}", notice);
    }
    Ok(())
}

fn ask(pending: &PendingDeletion) -> anyhow::Result<bool> {
    let mut stdout = std::io::stdout();
    writeln!(stdout, "{}", pending.title())?;
    write!(stdout, "{} [y/N] ", pending.prompt())?;
    stdout.flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
