pub mod app;
pub mod components;
pub mod events;
pub mod layout;
pub mod pages;
pub mod router;
pub mod state;
pub mod view;

use anyhow::Result;
use crossterm::{
    event::{KeyCode, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::info;

use crate::models::Config;

pub use app::HarvestApp;
pub use events::{EventManager, TuiEvent};
pub use router::ViewRouter;
pub use view::{View, ViewAction};

/// Run the terminal front-end until the user quits
pub async fn run_app(config: &Config) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = HarvestApp::new(config);
    let result = event_loop(&mut terminal, &mut app, config).await;

    // Cleanup
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut HarvestApp,
    config: &Config,
) -> Result<()> {
    let mut events = EventManager::new();
    events.start(config.tick_rate);
    info!("🚀 HarvestFlow started on {}", app.router().current());

    loop {
        terminal.draw(|f| app.draw(f))?;

        match events.receive().await {
            Some(TuiEvent::Key(key)) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                    app.quit();
                } else {
                    app.handle_key(key.code);
                }
            }
            Some(TuiEvent::Tick) => app.tick(),
            Some(TuiEvent::Resize(_, _)) => {}
            None => break,
        }

        if app.should_quit() {
            info!("👋 Quitting HarvestFlow");
            break;
        }
    }

    Ok(())
}
