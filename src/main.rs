// algotty: step-through data structure and algorithm visualizer

use std::fs::File;
use std::io;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use algotty::config::Cli;
use algotty::session::Session;
use algotty::ui::App;

/// Install the fmt subscriber
///
/// Logs go to `--log-file` when given, otherwise to stderr in headless mode.
/// The TUI owns the terminal, so without a log file it logs nowhere.
fn init_logging(log_file: Option<&Path>, headless: bool) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match (log_file, headless) {
        (Some(path), _) => {
            let file = File::create(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|err| err as Box<dyn std::error::Error>)?;
        }
        (None, true) => {
            builder
                .with_writer(io::stderr)
                .try_init()
                .map_err(|err| err as Box<dyn std::error::Error>)?;
        }
        (None, false) => {}
    }
    Ok(())
}

/// Execute one command and print the result instead of starting the TUI
fn run_headless(session: &mut Session, input: &str) -> ExitCode {
    match session.execute_headless(input) {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref(), cli.run.is_some())?;

    let structure = match cli.initial_structure() {
        Ok(structure) => structure,
        Err(e) => {
            eprintln!("Error: invalid initial {}: {}", cli.structure, e);
            return Ok(ExitCode::from(2));
        }
    };
    tracing::info!(kind = %structure.kind(), len = structure.len(), "session started");
    let mut session = Session::new(structure, cli.settings());

    if let Some(command) = &cli.run {
        return Ok(run_headless(&mut session, command));
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(session);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(ExitCode::SUCCESS)
}
