use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{io, path::PathBuf};

mod app;
mod chart;
mod emi;
mod format;
mod logging;
mod state;
mod ui;
mod validate;

use app::App;
use emi::RateBasis;

#[derive(Parser, Debug)]
#[command(name = "loancalc")]
#[command(about = "A terminal loan EMI calculator")]
struct Args {
    /// Path to the data directory (default: ~/.loancalc/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Start with the interest rate interpreted as a monthly rate
    #[arg(short, long)]
    monthly: bool,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".loancalc")
}

fn main() -> Result<()> {
    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);
    logging::init_logging(&data_dir, &args.log_level)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let basis = if args.monthly {
        RateBasis::Monthly
    } else {
        RateBasis::Annual
    };
    let app = App::new(basis);
    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    tracing::info!("shutting down");

    if let Err(err) = res {
        println!("{:?}", err)
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            if app.handle_key(key)? {
                return Ok(());
            }
        }
    }
}
