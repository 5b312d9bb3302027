use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use notemark_config::Config;
use notemark_engine::{NoteStore, render, render_raw};

#[derive(Parser)]
#[command(name = "notemark")]
#[command(about = "Render the notemark markdown dialect and manage shared notes")]
struct Cli {
    /// Config file to use instead of ~/.config/notemark/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Notes directory, overriding the config file
    #[arg(long, global = true)]
    notes_path: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a markdown file (or stdin) to HTML
    Render {
        file: Option<PathBuf>,
        /// Skip paragraph break normalization
        #[arg(long)]
        raw: bool,
    },
    /// Store a new note from a file (or stdin)
    New { file: Option<PathBuf> },
    /// Print a note's content
    Show {
        id: String,
        /// Print rendered HTML instead of markdown
        #[arg(long)]
        html: bool,
    },
    /// Replace a note's content
    Edit {
        id: String,
        #[arg(long)]
        code: String,
        file: Option<PathBuf>,
    },
    /// Delete a note
    Delete {
        id: String,
        #[arg(long)]
        code: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Command::Render { file, raw } => {
            let source = read_input(file.as_deref())?;
            let html = if *raw {
                render_raw(&source)
            } else {
                render(&source)
            };
            println!("{html}");
        }
        Command::New { file } => {
            let source = read_input(file.as_deref())?;
            let note = open_store(&cli)?.create(&source)?;
            println!("id: {}", note.id);
            println!("edit code: {}", note.edit_code);
        }
        Command::Show { id, html } => {
            let note = open_store(&cli)?.get(id)?;
            if *html {
                println!("{}", note.html());
            } else {
                print!("{}", note.content);
            }
        }
        Command::Edit { id, code, file } => {
            let source = read_input(file.as_deref())?;
            open_store(&cli)?.update(id, code, &source)?;
            println!("updated {id}");
        }
        Command::Delete { id, code } => {
            open_store(&cli)?.delete(id, code)?;
            println!("deleted {id}");
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(log::LevelFilter::Info);
        }
        2 => {
            builder.filter_level(log::LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(log::LevelFilter::Trace);
        }
    }
    builder.init();
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read stdin")?;
            Ok(source)
        }
    }
}

/// Config file settings with the `--notes-path` override applied.
fn load_config(cli: &Cli) -> Result<Config> {
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    log::debug!("Config path: {}", config_path.display());

    let config = Config::load_from_path(&config_path)
        .with_context(|| format!("Failed to load config file {}", config_path.display()))?;
    let config = match config {
        Some(config) => config,
        None if cli.config.is_some() => {
            anyhow::bail!("Config file {} does not exist", config_path.display())
        }
        None => Config::default(),
    };

    Ok(match &cli.notes_path {
        Some(notes_path) => config.with_notes_path(notes_path),
        None => config,
    })
}

fn open_store(cli: &Cli) -> Result<NoteStore> {
    let config = load_config(cli)?;
    log::info!("Using notes path {}", config.notes_path.display());
    let store = NoteStore::open(&config.notes_path).with_context(|| {
        format!(
            "Failed to open notes directory {}",
            config.notes_path.display()
        )
    })?;
    Ok(store.with_lengths(config.id_length, config.edit_code_length))
}
