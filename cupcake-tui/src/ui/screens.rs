//! The four wizard screens
//!
//! Each renderer only reads `AppState`; choosing, moving on and canceling
//! happen through the keymap.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::fg;
use crate::app::AppState;
use libcupcake::Screen;

/// Start: pick a quantity, which also moves on to Flavor
pub fn render_start(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Order Cupcakes",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for (index, label) in state.option_labels(Screen::Start).into_iter().enumerate() {
        lines.push(option_line(state, index, label, None));
    }

    let body = Paragraph::new(lines)
        .block(Block::default().title(" Quantity ").borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    frame.render_widget(body, area);
}

/// Flavor and Pickup: radio list plus the running subtotal
pub fn render_options(frame: &mut Frame, area: Rect, state: &AppState) {
    let screen = state.current_screen;
    let selected = state.selected_index(screen);

    let mut lines = Vec::new();
    for (index, label) in state.option_labels(screen).into_iter().enumerate() {
        lines.push(option_line(state, index, label, Some(selected == Some(index))));
    }
    lines.push(Line::from(""));
    lines.push(subtotal_line(state));

    let block_title = if screen == Screen::Flavor { " Flavor " } else { " Pickup Date " };
    let body = Paragraph::new(lines)
        .block(Block::default().title(block_title).borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    frame.render_widget(body, area);
}

/// Summary: what was ordered, the subtotal, and the send/cancel choices
pub fn render_summary(frame: &mut Frame, area: Rect, state: &AppState) {
    let body = Paragraph::new(summary_lines(state))
        .block(Block::default().title(" Your Order ").borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    frame.render_widget(body, area);
}

/// Lines of the Summary screen
pub fn summary_lines(state: &AppState) -> Vec<Line<'static>> {
    let order = &state.order;
    let field = |name: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<13}", name), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(value),
        ])
    };

    vec![
        field("Quantity", format!("{} cupcakes", order.quantity)),
        field("Flavor", order.flavor.clone().unwrap_or_default()),
        field("Pickup date", order.date.clone().unwrap_or_default()),
        Line::from(""),
        subtotal_line(state),
        Line::from(""),
        Line::from(vec![
            Span::styled("[s] Send Order to Another App", fg(state, Color::Green)),
            Span::raw("    "),
            Span::styled("[c] Cancel", fg(state, Color::Red)),
        ]),
    ]
}

fn subtotal_line(state: &AppState) -> Line<'static> {
    Line::from(Span::styled(
        format!("Subtotal {}", state.order.price),
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

/// One option row; `chosen` adds a radio marker
fn option_line(state: &AppState, index: usize, label: String, chosen: Option<bool>) -> Line<'static> {
    let highlighted = index == state.cursor;
    let pointer = if highlighted { "> " } else { "  " };

    let marker = match chosen {
        Some(true) if state.config.unicode_enabled => "(•) ",
        Some(true) => "(*) ",
        Some(false) => "( ) ",
        None => "",
    };

    let style = if highlighted {
        fg(state, Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    Line::from(vec![
        Span::raw(pointer),
        Span::raw(marker),
        Span::styled(label, style),
    ])
}
