use crate::config::Config;
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::logger::{self, LogBuffer};
use crate::state::State;
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::{self, stdout};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: Arc<Mutex<State>>,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub async fn start(config: Config, log_level: LevelFilter) -> Result<()> {
        let log_buffer = LogBuffer::default();
        logger::init(log_buffer.clone(), log_level)?;

        info!("Starting application...");
        if let Some(path) = config.file_path() {
            debug!("Configuration path: {}", path.display());
        }
        let state = State::new(&config, log_buffer, Instant::now())?;
        let app = App {
            state: Arc::new(Mutex::new(state)),
        };
        let result = app.start_ui().await;

        app.state.lock().await.teardown();
        info!("Exiting application...");
        result
    }

    /// Take over the terminal, run the render loop and restore the terminal
    /// whether or not the loop failed.
    ///
    async fn start_ui(&self) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        let result = self.run(&mut terminal).await;
        if let Err(e) = &result {
            error!("User interface failed: {}", e);
        }

        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
        terminal.show_cursor()?;
        result
    }

    /// Draw, then block for the next terminal event, until exit is requested.
    ///
    async fn run<B: Backend>(&self, terminal: &mut Terminal<B>) -> Result<()> {
        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            let mut state = self.state.lock().await;
            terminal.draw(|frame| crate::ui::render(frame, &mut state))?;
            if !terminal_event_handler.handle_next(&mut state)? {
                debug!("Received application exit request.");
                break;
            }
        }
        Ok(())
    }
}
