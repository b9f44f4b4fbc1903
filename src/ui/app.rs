//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::{KEY_POLL_INTERVAL_MS, SPLASH_DURATION_MS};
use crate::dataset::ClinicalTable;
use crate::environment::Environment;
use crate::ui::explorer::{ExplorerState, render_explorer};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Explorer screen displaying the dataset views.
    Explorer(Box<ExplorerState>),
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The environment the dataset was loaded from.
    environment: Environment,

    /// The loaded table, handed to the explorer when the splash ends.
    table: Option<ClinicalTable>,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Whether to enable background colors.
    with_background_color: bool,
}

impl App {
    /// Creates a new instance of the application, starting on the splash
    /// screen.
    pub fn new(
        table: ClinicalTable,
        environment: Environment,
        with_background_color: bool,
    ) -> Self {
        Self {
            environment,
            table: Some(table),
            current_screen: Screen::Splash,
            with_background_color,
        }
    }

    /// Moves from the splash screen to the explorer. The table is handed
    /// over exactly once; later calls are no-ops.
    fn enter_explorer(&mut self) {
        if let Some(table) = self.table.take() {
            let state =
                ExplorerState::new(table, self.environment.clone(), self.with_background_color);
            self.current_screen = Screen::Explorer(Box::new(state));
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the
/// appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_millis(SPLASH_DURATION_MS);

    // UI event loop
    loop {
        terminal.draw(|f| render(f, &app.current_screen))?;

        // Handle splash-to-explorer transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration {
                app.enter_explorer();
                continue;
            }
        }

        // Poll for key events
        if event::poll(Duration::from_millis(KEY_POLL_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                // Handle exit events
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    return Ok(());
                }

                let mut skip_splash = false;
                match &mut app.current_screen {
                    // Any key press will skip the splash screen
                    Screen::Splash => skip_splash = true,
                    Screen::Explorer(state) => state.handle_key(key.code),
                }
                if skip_splash {
                    app.enter_explorer();
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Explorer(state) => render_explorer(f, state),
    }
}
