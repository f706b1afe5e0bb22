use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Render the journey board: a collapsible strip laying the project's
/// tasks out as stages. Its toggle is independent of task selection.
pub fn render_journey_board(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let dim = Style::default().fg(app.theme.dim).bg(bg);

    let mut lines = Vec::new();
    if app.board_collapsed {
        lines.push(Line::from(Span::styled(" ▸ Journey Board", dim)));
    } else {
        lines.push(Line::from(Span::styled(" ▾ Journey Board", dim)));
        lines.push(stages_line(app));
        lines.push(Line::from(Span::styled(String::new(), dim)));
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}

fn stages_line(app: &App) -> Line<'static> {
    let bg = app.theme.background;
    let mut spans = vec![Span::styled("   ".to_string(), Style::default().bg(bg))];

    for (i, task) in app.project.tasks.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(
                " → ".to_string(),
                Style::default().fg(app.theme.dim).bg(bg),
            ));
        }
        let style = if i == app.selected_task {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text).bg(bg)
        };
        spans.push(Span::styled(format!(" {} ", task.display_name(i)), style));
    }

    Line::from(spans)
}
