//! Interactive dashboard.
//!
//! Raw-mode crossterm loop on the alternate screen; input adjustments
//! recompute the projection in full before the next draw. Ctrl-C restores
//! the terminal before exiting.

mod app;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use canopy_model::{PlantingSite, ProjectionParams};

use app::AppState;

pub fn run(params: ProjectionParams, site: PlantingSite) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    ctrlc::set_handler(move || {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        std::process::exit(0);
    })?;

    let mut app_state = AppState::new(params, site);
    let mut should_quit = false;

    let tick_rate = Duration::from_millis(250);

    while !should_quit {
        terminal.draw(|f| {
            ui::draw(f, &app_state);
        })?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        should_quit = true;
                    }
                    KeyCode::Char('t') => app_state.increase_trees(),
                    KeyCode::Char('T') => app_state.decrease_trees(),
                    KeyCode::Char('r') => app_state.increase_rate(),
                    KeyCode::Char('R') => app_state.decrease_rate(),
                    KeyCode::Char('y') | KeyCode::Right => app_state.increase_years(),
                    KeyCode::Char('Y') | KeyCode::Left => app_state.decrease_years(),
                    _ => {}
                }
            }
        }
    }

    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
