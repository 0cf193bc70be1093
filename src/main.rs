mod config;
mod fruit;
mod tui;

use anyhow::{Context, Result};
use clap::{Command, CommandFactory, Parser, Subcommand, ValueHint};
use clap_complete::{Generator, Shell, generate};
use config::{Config, ConfigError};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use fruit::{dataset, store::SelectionStore};
use log::info;
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::fs::OpenOptions;
use std::io;
use tui::{app::App, ui};

#[derive(Parser)]
#[command(name = "fruit-select")]
#[command(about = "A terminal checklist for picking fruits")]
struct Cli {
    #[arg(long, global = true, help = "Dataset file (JSON)", value_hint = ValueHint::FilePath)]
    data: Option<String>,

    #[arg(short, long, global = true, help = "Enable debug logging")]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Load the dataset and report whether it is valid")]
    Validate,
    #[command(about = "Inspect configuration")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    #[command(about = "Generate shell completion scripts")]
    Completion {
        #[arg(help = "Shell to generate completions for")]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    #[command(about = "Get a configuration value")]
    Get {
        #[arg(help = "Configuration key (data_path or log_file)")]
        key: String,
    },
    #[command(about = "List all configuration values")]
    List,
    #[command(about = "Print the configuration file location")]
    Path,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Config { action }) => {
            handle_config_command(action).map_err(anyhow::Error::from)
        }
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            print_completions(shell, &mut cmd);
            Ok(())
        }
        Some(Commands::Validate) => run_validate(cli.data, cli.verbose),
        None => run_main_app(cli.data, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn handle_config_command(action: ConfigAction) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            println!("{}", config.get(&key)?);
        }
        ConfigAction::List => {
            let config = Config::load()?;
            for (key, value) in config.entries() {
                println!("{} = {}", key, value);
            }
        }
        ConfigAction::Path => {
            println!("{}", config::get_config_file_path()?.display());
        }
    }
    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum LogDestination {
    Stderr,
    File(String),
    Discard,
}

/// Stderr is only safe when the terminal UI does not own the screen.
fn log_destination(config: &Config, interactive: bool) -> LogDestination {
    match &config.log_file {
        Some(log_file) => LogDestination::File(log_file.clone()),
        None if interactive => LogDestination::Discard,
        None => LogDestination::Stderr,
    }
}

fn init_logging(config: &Config, verbose: bool, interactive: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "warn" };
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level));

    match log_destination(config, interactive) {
        LogDestination::File(log_file) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_file)
                .with_context(|| format!("Failed to open log file: {}", log_file))?;
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        LogDestination::Discard => {
            builder.target(env_logger::Target::Pipe(Box::new(io::sink())));
        }
        LogDestination::Stderr => {}
    }

    builder.init();
    Ok(())
}

fn load_store(config: &Config, data: Option<String>) -> Result<SelectionStore> {
    let data_path = data.or_else(|| config.data_path.clone());
    let items = dataset::load_items(data_path.as_deref())?;
    Ok(SelectionStore::new(items))
}

fn run_validate(data: Option<String>, verbose: bool) -> Result<()> {
    let config = Config::load().map_err(|e| anyhow::anyhow!("Configuration error: {}", e))?;
    init_logging(&config, verbose, false)?;

    let store = load_store(&config, data)?;
    println!("{} items OK", store.len());
    Ok(())
}

fn run_main_app(data: Option<String>, verbose: bool) -> Result<()> {
    let config = Config::load().map_err(|e| anyhow::anyhow!("Configuration error: {}", e))?;
    init_logging(&config, verbose, true)?;

    let store = load_store(&config, data)?;
    let mut app = App::new(store);

    run_tui(&mut app)?;

    info!("exiting with {} selected", app.store.selected().len());
    Ok(())
}

fn run_tui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        app.handle_event(event::read()?)?;
        if app.should_quit {
            break;
        }
    }
    Ok(())
}

fn print_completions<G: Generator>(generator: G, cmd: &mut Command) {
    generate(generator, cmd, cmd.get_name().to_string(), &mut io::stdout());
}
