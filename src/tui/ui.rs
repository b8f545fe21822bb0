// UI rendering logic
//
// This module contains all the rendering code for the TUI. The layout
// mirrors the original documentation page: title header, section tab bar,
// one scrollable content area, and a status bar with key hints.

use super::app::App;
use super::copy::CopyState;
use crate::content::{self, Block, Section};
use crate::theme::Theme;
use crate::util::truncate_to_width;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Tabs},
    Frame,
};

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    // Split the terminal into four vertical sections:
    // - Title bar (2 lines: name + subtitle)
    // - Tab bar (1 line)
    // - Content area (fills remaining space)
    // - Status bar (1 line)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title bar
            Constraint::Length(1), // Tab bar
            Constraint::Min(3),    // Content - takes remaining space
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_title(f, chunks[0], app);
    render_tabs(f, chunks[1], app);
    render_content(f, chunks[2], app);
    render_status(f, chunks[3], app);
}

fn render_title(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let title = Line::from(vec![
        Span::styled(
            content::PAGE_TITLE,
            Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  v{}", crate::config::VERSION),
            Style::default().fg(theme.muted),
        ),
    ]);
    let subtitle = Line::from(Span::styled(
        truncate_to_width(content::PAGE_SUBTITLE, area.width.saturating_sub(1) as usize),
        Style::default().fg(theme.muted),
    ));

    f.render_widget(Paragraph::new(vec![title, subtitle]), area);
}

fn render_tabs(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let titles: Vec<Line> = Section::ALL
        .iter()
        .enumerate()
        .map(|(i, section)| {
            Line::from(vec![
                Span::styled(format!("{} ", i + 1), Style::default().fg(theme.muted)),
                Span::raw(section.title()),
            ])
        })
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.current().index())
        .style(Style::default().fg(theme.tab_inactive))
        .highlight_style(
            Style::default()
                .fg(theme.tab_active)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::styled("|", Style::default().fg(theme.border)));

    f.render_widget(tabs, area);
}

fn render_content(f: &mut Frame, area: Rect, app: &mut App) {
    let lines = content_lines(app, area.width);
    let total = lines.len();

    let scroll = app.scroll();
    scroll.update_dimensions(total, area.height as usize);
    let offset = scroll.offset();

    let paragraph = Paragraph::new(lines).scroll((offset as u16, 0));
    f.render_widget(paragraph, area);
}

/// Compose the current section's blocks into styled lines.
///
/// Code blocks get a light frame and a copy hint in the header; the hint
/// shows the widget's confirmation state, and the focused block is the one
/// `y` copies.
fn content_lines(app: &App, width: u16) -> Vec<Line<'static>> {
    let theme = app.theme.clone();
    let section = app.current();
    let focused = app.focused_block();

    let mut lines: Vec<Line<'static>> = vec![Line::default()];
    let mut code_index = 0;

    for block in content::blocks(section).iter().copied() {
        match block {
            Block::Prose(text) => {
                for raw in text.lines() {
                    lines.push(Line::from(Span::styled(
                        raw,
                        Style::default().fg(theme.text),
                    )));
                }
                lines.push(Line::default());
            }
            Block::Code {
                title,
                language,
                source,
            } => {
                let state = app
                    .widget(section, code_index)
                    .map(|w| w.state())
                    .unwrap_or(CopyState::Idle);
                let is_focused = focused == Some(code_index);

                lines.push(code_header(
                    &theme, title, language, state, is_focused, width,
                ));
                for raw in source.lines() {
                    lines.push(Line::from(vec![
                        Span::styled("│ ", Style::default().fg(theme.border)),
                        Span::styled(raw, Style::default().fg(theme.code)),
                    ]));
                }
                lines.push(Line::from(Span::styled(
                    "└─",
                    Style::default().fg(theme.border),
                )));
                lines.push(Line::default());

                code_index += 1;
            }
        }
    }

    lines
}

fn code_header(
    theme: &Theme,
    title: &'static str,
    language: &'static str,
    state: CopyState,
    is_focused: bool,
    width: u16,
) -> Line<'static> {
    let header_style = if is_focused {
        Style::default()
            .fg(theme.code_header)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.code_header)
    };

    let hint = match (is_focused, state) {
        // The confirmation belongs to the widget, focused or not
        (_, CopyState::Copied) => Span::styled(
            " ✓ copied",
            Style::default().fg(theme.highlight),
        ),
        (true, CopyState::Idle) => Span::styled(
            " [y] copy",
            Style::default().fg(theme.highlight),
        ),
        (false, CopyState::Idle) => Span::raw(""),
    };

    let label = truncate_to_width(
        &format!("┌─ {} ({})", title, language),
        (width as usize).saturating_sub(12),
    );

    Line::from(vec![Span::styled(label, header_style), hint])
}

fn render_status(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = app.theme.clone();
    let section = app.current();

    let mut hints = vec![
        format!("{}/{}", section.index() + 1, Section::ALL.len()),
        "Tab next".to_string(),
        "n block".to_string(),
        "y copy".to_string(),
        "c copy section".to_string(),
    ];
    if section.cross_link().is_some() {
        hints.push("Enter deployment".to_string());
    }
    if app.scroll().needs_scrollbar() {
        hints.push("↑↓ scroll".to_string());
    }
    hints.push("t theme".to_string());
    hints.push("q quit".to_string());

    let text = truncate_to_width(&hints.join("  |  "), area.width as usize);
    let status = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(theme.status_bar),
    )))
    .alignment(Alignment::Left);

    f.render_widget(status, area);
}
