//! UI rendering
//!
//! Pure rendering functions that transform state into terminal frames.
//! The layout is a title bar, exactly one wizard screen, and a status bar,
//! with help and error overlays drawn on top when open.

pub mod screens;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::AppState;
use libcupcake::Screen;

/// Render the application UI
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(5),    // Current screen
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    render_title_bar(frame, chunks[0], state);

    match state.current_screen {
        Screen::Start => screens::render_start(frame, chunks[1], state),
        Screen::Flavor | Screen::Pickup => screens::render_options(frame, chunks[1], state),
        Screen::Summary => screens::render_summary(frame, chunks[1], state),
    }

    render_status_bar(frame, chunks[2], state);

    if state.help_visible {
        render_help_overlay(frame, area);
    }

    if let Some(ref error) = state.error {
        render_error_overlay(frame, area, error);
    }
}

/// Foreground color, or the terminal default when colors are off
pub(crate) fn fg(state: &AppState, color: Color) -> Style {
    if state.config.colors_enabled {
        Style::default().fg(color)
    } else {
        Style::default()
    }
}

/// Title bar: back affordance (only when back is possible) and screen title
fn render_title_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = Vec::new();
    if state.can_navigate_back {
        let arrow = if state.config.unicode_enabled { "←" } else { "<" };
        spans.push(Span::styled(format!("{} Back (Esc)", arrow), fg(state, Color::Cyan)));
        spans.push(Span::raw("  "));
    }
    spans.push(Span::styled(
        state.current_screen.title(),
        Style::default().add_modifier(Modifier::BOLD),
    ));

    let title = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).border_style(fg(state, Color::Magenta)));

    frame.render_widget(title, area);
}

/// Status bar: last status message, or key hints for the current screen
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let line = match state.status.message {
        Some(ref message) => Line::from(Span::styled(message.as_str(), fg(state, Color::Green))),
        None => Line::from(Span::styled(hints(state), fg(state, Color::Gray))),
    };

    let status = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn hints(state: &AppState) -> String {
    let screen_hints = match state.current_screen {
        Screen::Start => "↑/↓: Choose | Enter: Order",
        Screen::Flavor | Screen::Pickup if state.can_go_next() => {
            "↑/↓: Choose | Enter: Select | n: Next | c: Cancel"
        }
        Screen::Flavor | Screen::Pickup => "↑/↓: Choose | Enter: Select | c: Cancel",
        Screen::Summary => "s: Send | c: Cancel",
    };
    format!("{} | F1: Help | q: Quit", screen_hints)
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = vec![
        Line::from(Span::styled("Keyboard Shortcuts", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from("Global:"),
        Line::from("  q        - Quit"),
        Line::from("  F1       - Toggle help"),
        Line::from("  Esc      - Back / dismiss overlays"),
        Line::from(""),
        Line::from("Choosing:"),
        Line::from("  Up/Down  - Move highlight (also k/j)"),
        Line::from("  Enter    - Select highlighted option"),
        Line::from("  n        - Next step (after selecting)"),
        Line::from("  c        - Cancel order and start over"),
        Line::from(""),
        Line::from("Summary:"),
        Line::from("  s        - Send order"),
        Line::from(""),
        Line::from("Press Esc or F1 to close"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}

/// Render error overlay
fn render_error_overlay(frame: &mut Frame, area: Rect, error: &str) {
    let popup_area = centered_rect(70, 30, area);

    let error_text = vec![
        Line::from(Span::styled("Error", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(error),
        Line::from(""),
        Line::from("Press Esc to dismiss"),
    ];

    let error_widget = Paragraph::new(error_text)
        .block(
            Block::default()
                .title(" Error ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Center);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(error_widget, popup_area);
}

/// Helper to create centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
