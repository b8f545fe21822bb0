// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks)
// - Routing keys to section navigation, scrolling, and copy actions

pub mod app;
pub mod clipboard;
pub mod copy;
pub mod scroll;
pub mod ui;

use crate::config::Config;
use crate::content::Section;
use anyhow::{Context, Result};
use app::App;
use clipboard::SystemClipboard;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and cleans up when done.
pub async fn run_tui(config: Config) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::with_config(&config);

    let result = run_event_loop(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Two event sources: keyboard/mouse input and a periodic tick. The tick
/// exists so the display catches the copy confirmation expiring even when
/// no input arrives.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));
    let mut clipboard = SystemClipboard;

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard or mouse input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => {
                            handle_key_event(app, &mut clipboard, key_event)
                        }
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
            } => {}

            // Periodic tick for redrawing
            _ = tick_interval.tick() => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
fn handle_key_event(app: &mut App, clipboard: &mut SystemClipboard, key_event: KeyEvent) {
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    match key_event.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.should_quit = true;
        }

        // Section navigation
        KeyCode::Tab | KeyCode::Right => app.next_section(),
        KeyCode::BackTab | KeyCode::Left => app.prev_section(),
        KeyCode::Char(c @ '1'..='7') => {
            // Map '1' -> first section, matching the tab bar numbering
            let idx = (c as usize) - ('1' as usize);
            app.select(Section::ALL[idx]);
        }

        // Cross-link: the Overview and Code pages link to the deployment
        // guide; Enter follows it
        KeyCode::Enter => {
            if !app.should_debounce_action() {
                app.follow_cross_link();
            }
        }

        // Content scrolling
        KeyCode::Up => app.scroll().scroll_up(),
        KeyCode::Down => app.scroll().scroll_down(),
        KeyCode::PageUp => app.scroll().page_up(),
        KeyCode::PageDown => app.scroll().page_down(),
        KeyCode::Home => app.scroll().scroll_to_top(),

        // Code block focus
        KeyCode::Char('n') => app.focus_next_block(),
        KeyCode::Char('N') => app.focus_prev_block(),

        // Copy: y = focused listing (timed confirmation),
        //       c = whole section (log-only)
        KeyCode::Char('y') => {
            if !app.should_debounce_action() {
                app.copy_focused(clipboard);
            }
        }
        KeyCode::Char('c') => {
            if !app.should_debounce_action() {
                app.copy_section(clipboard);
            }
        }

        // Theme cycling
        KeyCode::Char('t') => app.next_theme(),

        _ => {}
    }
}

/// Handle mouse input - wheel scrolls the content area
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    match mouse_event.kind {
        MouseEventKind::ScrollUp => app.scroll().scroll_up(),
        MouseEventKind::ScrollDown => app.scroll().scroll_down(),
        _ => {}
    }
}
