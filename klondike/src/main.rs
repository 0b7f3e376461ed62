mod app;
mod config;
mod effects;
mod error;
mod logger;

use std::io;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use klondike_core::{GameState, Layout};
use log::info;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use app::App;
use config::Cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        logger::init(path, cli.log_level)?;
    }

    let layout = Layout::TERMINAL;
    let (width, height) = terminal::size()?;
    app::ensure_fits(width, height, &layout)?;

    let game = match cli.seed {
        Some(seed) => GameState::with_seed(layout, seed),
        None => GameState::new(layout),
    };
    info!("starting at {} fps on a {}x{} terminal", cli.fps, width, height);
    let app = App::new(game, cli.fps, cli.flash_ticks());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, app, cli.frame_duration());

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

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
    frame: Duration,
) -> color_eyre::Result<()> {
    loop {
        let started = Instant::now();

        // Drain everything that arrived since the last frame
        while event::poll(Duration::ZERO)? {
            app.handle_event(&event::read()?);
            if app.should_quit() {
                return Ok(());
            }
        }

        app.tick();
        terminal.draw(|f| app.render(f))?;

        if let Some(rest) = frame.checked_sub(started.elapsed()) {
            thread::sleep(rest);
        }
    }
}
