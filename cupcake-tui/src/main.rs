//! cupcake-tui - order cupcakes from the terminal
//!
//! Walks through quantity, flavor and pickup date, then shows a summary
//! that can be sent to another program or canceled.

use std::path::PathBuf;

use clap::Parser;
use cupcake_tui::{
    app::{event::EventHandler, event::TuiEvent},
    error::{Result, TuiError},
    map_key, reduce,
    services::ServiceHandle,
    terminal::{with_terminal, Tui},
    ui, Action, AppState,
};
use libcupcake::{
    config::{resolve_data_path, Config},
    logging::{parse_format, LoggingConfig},
};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "cupcake-tui")]
#[command(about = "Order cupcakes in four steps", long_about = None)]
struct Cli {
    /// Config file (defaults to $CUPCAKE_CONFIG, then the XDG config location)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log format: text, json, or pretty
    #[arg(long, default_value = "text", env = "CUPCAKE_LOG_FORMAT")]
    log_format: String,

    /// Minimum log level
    #[arg(long, default_value = "info", env = "CUPCAKE_LOG_LEVEL")]
    log_level: String,

    /// Log file (defaults to cupcake.log in the data directory)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    let log_format = parse_format(&cli.log_format)?;
    let log_file = match cli.log_file {
        Some(path) => path,
        None => resolve_data_path()?.join("cupcake.log"),
    };
    LoggingConfig::new(log_format, cli.log_level, cli.verbose)
        .with_file(&log_file)
        .init()
        .map_err(|e| {
            TuiError::Application(format!("Failed to open log file {}: {}", log_file.display(), e))
        })?;

    let config = match cli.config {
        Some(ref path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    let services = ServiceHandle::new(&config)?;

    info!(log_file = %log_file.display(), "Starting cupcake-tui");
    with_terminal(|terminal| run_app(terminal, services))
}

fn run_app(terminal: &mut Tui, mut services: ServiceHandle) -> Result<()> {
    let mut state = AppState::new();
    for action in services.initial_actions() {
        state = reduce(state, action);
    }

    let event_handler = EventHandler::new(state.config.tick_rate_ms);

    loop {
        terminal.draw(|frame| ui::render(frame, &state))?;

        let action = match event_handler.next()? {
            TuiEvent::Key(key) => map_key(&state, key),
            other => other.into(),
        };

        // Perform side effects for intents, then feed the results back
        let follow_ups = match action {
            Action::Intent(ref intent) => services.dispatch(intent.clone()),
            _ => Vec::new(),
        };

        state = reduce(state, action);
        for follow_up in follow_ups {
            state = reduce(state, follow_up);
        }

        if state.should_quit {
            info!("Quitting");
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_config_env_left_to_library() {
        std::env::set_var("CUPCAKE_CONFIG", "/nonexistent/cupcake/config.toml");
        let cli = Cli::try_parse_from(["cupcake-tui"]).unwrap();
        std::env::remove_var("CUPCAKE_CONFIG");

        assert!(cli.config.is_none());
    }

    #[test]
    #[serial]
    fn test_unknown_log_format_exits_with_invalid_input() {
        std::env::remove_var("CUPCAKE_LOG_FORMAT");
        let cli = Cli::try_parse_from(["cupcake-tui", "--log-format", "yaml"]).unwrap();

        let error = run(cli).unwrap_err();

        assert_eq!(error.exit_code(), 3);
    }
}
