use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::model::Task;
use crate::tui::app::{App, Pane};

use super::pad_to;

/// Render the task-list sidebar: one row per task, in display order.
/// Exactly the selected row carries the selection highlight.
pub fn render_task_list(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;

    if app.project.tasks.is_empty() {
        let empty =
            Paragraph::new(" No tasks").style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let width = area.width as usize;
    let lines: Vec<Line> = app
        .project
        .tasks
        .iter()
        .enumerate()
        .map(|(i, task)| task_row(app, task, i, width))
        .collect();

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}

/// One sidebar row: cursor marker, icon cell, display name
pub fn task_row<'a>(app: &App, task: &Task, index: usize, width: usize) -> Line<'a> {
    let selected = index == app.selected_task;
    let bg = if selected {
        app.theme.selection_bg
    } else {
        app.theme.background
    };

    let marker = if selected && app.pane == Pane::Tasks {
        "▸ "
    } else {
        "  "
    };
    let icon = format!("({}) ", task.icon_char());
    let name = task.display_name(index);

    let name_style = if selected {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.text).bg(bg)
    };

    let used = UnicodeWidthStr::width(marker) + UnicodeWidthStr::width(icon.as_str());
    Line::from(vec![
        Span::styled(
            marker.to_string(),
            Style::default().fg(app.theme.highlight).bg(bg),
        ),
        Span::styled(icon, Style::default().fg(app.theme.dim).bg(bg)),
        Span::styled(pad_to(&name, width.saturating_sub(used)), name_style),
    ])
}
