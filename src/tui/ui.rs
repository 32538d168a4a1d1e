//! TUI layout and rendering with ratatui.
//!
//! # Overview
//!
//! The game screen is a single column:
//! - Header with the title and current phase
//! - The digest to crack ("Generating hash..." until published)
//! - Attempt counter
//! - Guess field (dimmed while disabled)
//! - Feedback line, hidden until the first message
//! - Footer with the available keys
//!
//! Store errors are drawn as a modal dialog on top.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::app::App;
use crate::game::{FeedbackKind, Phase};
use crate::session::PIN_LENGTH;

/// Placeholder shown while the digest is being generated.
pub const GENERATING_TEXT: &str = "Generating hash...";

/// ASCII borders for accessible mode (screen readers, limited fonts).
const ASCII_BORDER_SET: border::Set = border::Set {
    top_left: "+",
    top_right: "+",
    bottom_left: "+",
    bottom_right: "+",
    vertical_left: "|",
    vertical_right: "|",
    horizontal_top: "-",
    horizontal_bottom: "-",
};

fn create_block<'a>(app: &App, title: &'a str) -> Block<'a> {
    let set = if app.is_accessible() {
        ASCII_BORDER_SET
    } else {
        border::ROUNDED
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(set)
        .border_style(Style::default().fg(app.theme().primary));
    if title.is_empty() {
        block
    } else {
        block.title(format!(" {title} "))
    }
}

/// Render the game screen.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(4), // Digest
            Constraint::Length(3), // Attempts
            Constraint::Length(3), // Guess
            Constraint::Length(3), // Feedback
            Constraint::Min(0),    // Spacer
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_header(frame, app, chunks[0]);
    render_digest(frame, app, chunks[1]);
    render_attempts(frame, app, chunks[2]);
    render_guess(frame, app, chunks[3]);
    render_feedback(frame, app, chunks[4]);
    render_footer(frame, app, chunks[6]);

    if app.error_message().is_some() {
        render_error_dialog(frame, app, area);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let status = match app.game().phase() {
        Phase::AwaitingDigest => " [Generating...]",
        Phase::Ready => "",
        Phase::Solved => " [Solved]",
    };
    let header = Paragraph::new(format!("pinhash - Crack the 3-digit PIN{status}"))
        .style(
            Style::default()
                .fg(app.theme().primary)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(create_block(app, ""));
    frame.render_widget(header, area);
}

fn render_digest(frame: &mut Frame, app: &App, area: Rect) {
    let title = format!("{} digest", app.game().algorithm());
    let (text, style) = match app.game().displayed_digest() {
        Some(digest) => (digest.to_string(), Style::default().fg(app.theme().normal)),
        None => (
            GENERATING_TEXT.to_string(),
            Style::default()
                .fg(app.theme().dim)
                .add_modifier(Modifier::ITALIC),
        ),
    };
    let digest = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(create_block(app, &title));
    frame.render_widget(digest, area);
}

fn render_attempts(frame: &mut Frame, app: &App, area: Rect) {
    let attempts = Paragraph::new(app.game().attempts().to_string())
        .style(Style::default().fg(app.theme().normal))
        .alignment(Alignment::Center)
        .block(create_block(app, "Attempts"));
    frame.render_widget(attempts, area);
}

fn render_guess(frame: &mut Frame, app: &App, area: Rect) {
    let game = app.game();
    let style = if game.is_input_enabled() {
        Style::default()
            .fg(app.theme().secondary)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme().dim)
    };

    let placeholder = "_".repeat(PIN_LENGTH.saturating_sub(game.input().len()));
    let guess = Paragraph::new(Line::from(vec![
        Span::styled(game.input().to_string(), style),
        Span::styled(placeholder, Style::default().fg(app.theme().dim)),
    ]))
    .alignment(Alignment::Center)
    .block(create_block(app, "Your guess"));
    frame.render_widget(guess, area);
}

fn render_feedback(frame: &mut Frame, app: &App, area: Rect) {
    let Some(feedback) = app.game().feedback() else {
        return;
    };
    let color = match feedback.kind {
        FeedbackKind::Success => app.theme().success,
        FeedbackKind::Error => app.theme().danger,
    };
    let paragraph = Paragraph::new(feedback.message.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(create_block(app, "").border_style(Style::default().fg(color)));
    frame.render_widget(paragraph, area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let mut commands = vec![("0-9", "Type"), ("Bksp", "Erase")];
    if app.game().is_input_enabled() {
        commands.push(("Enter", "Check"));
    }
    commands.extend([("Ctrl+R/F5", "Reset"), ("Esc", "Quit")]);

    let spans: Vec<Span> = commands
        .iter()
        .flat_map(|(key, desc)| {
            [
                Span::styled(
                    format!("[{key}]"),
                    Style::default()
                        .fg(app.theme().secondary)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("{desc} "), Style::default().fg(app.theme().normal)),
            ]
        })
        .collect();

    let footer = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(create_block(app, ""));
    frame.render_widget(footer, area);
}

fn render_error_dialog(frame: &mut Frame, app: &App, area: Rect) {
    let dialog_area = centered_rect(60, 30, area);
    frame.render_widget(Clear, dialog_area);

    let message = app.error_message().unwrap_or("Unknown error");
    let error = Paragraph::new(vec![
        Line::from(Span::styled(
            "Error",
            Style::default()
                .fg(app.theme().danger)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(message),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to dismiss",
            Style::default().fg(app.theme().dim),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(create_block(app, "").border_style(Style::default().fg(app.theme().danger)));

    frame.render_widget(error, dialog_area);
}

/// A rect of `percent_x` by `percent_y` centered in `area`.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_inside() {
        let area = Rect::new(0, 0, 100, 50);
        let rect = centered_rect(60, 30, area);
        assert_eq!(rect.width, 60);
        assert!((14..=16).contains(&rect.height));
        assert!(rect.right() <= area.right() && rect.bottom() <= area.bottom());
    }
}
