pub mod asset_view;
pub mod journey_board;
pub mod status_row;
pub mod task_list;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::app::App;

const SIDEBAR_WIDTH: u16 = 28;

/// Main render function — layout plus dispatch to the pane renderers
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    let board_height = if app.board_collapsed { 1 } else { 3 };

    // Layout: title bar | content | journey board | status row
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(board_height),
            Constraint::Length(1),
        ])
        .split(area);

    render_title_bar(frame, app, rows[0]);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)])
        .split(rows[1]);

    task_list::render_task_list(frame, app, cols[0]);
    asset_view::render_asset_view(frame, app, cols[1]);
    journey_board::render_journey_board(frame, app, rows[2]);
    status_row::render_status_row(frame, app, rows[3]);
}

/// Project name on top, separator underneath
fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let lines = vec![
        Line::from(Span::styled(
            pad_to(&format!(" {}", app.project.name), width),
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "─".repeat(width),
            Style::default().fg(app.theme.dim).bg(bg),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}

/// Truncate to `width` display columns, then pad with spaces to fill it
pub(super) fn pad_to(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = UnicodeWidthStr::width(c.to_string().as_str());
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

/// Greedy word wrap to `width` display columns. Overlong words are
/// split rather than overflowing the line.
pub(super) fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_w = 0;

    for word in text.split_whitespace() {
        let mut word = word;
        let sep = if current.is_empty() { 0 } else { 1 };
        let mut word_w = UnicodeWidthStr::width(word);

        if current_w + sep + word_w <= width {
            if sep == 1 {
                current.push(' ');
            }
            current.push_str(word);
            current_w += sep + word_w;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_w = 0;
        }

        // Split words longer than a full line
        while word_w > width {
            let mut take = String::new();
            let mut taken_w = 0;
            for c in word.chars() {
                let w = UnicodeWidthStr::width(c.to_string().as_str());
                if taken_w + w > width {
                    break;
                }
                take.push(c);
                taken_w += w;
            }
            if take.is_empty() {
                // A single glyph wider than the line still has to go somewhere
                if let Some(c) = word.chars().next() {
                    take.push(c);
                    taken_w = UnicodeWidthStr::width(take.as_str());
                }
            }
            word = &word[take.len()..];
            word_w -= taken_w;
            lines.push(take);
        }

        current.push_str(word);
        current_w = word_w;
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
