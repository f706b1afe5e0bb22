use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::media::{self, Media};
use crate::model::Asset;
use crate::tui::app::{App, Pane};

use super::wrap_text;

const CARD_INDENT: &str = "    ";

/// Render the detail pane: task header, then one card per asset in
/// task order, or the empty-state line for a task with no assets.
pub fn render_asset_view(frame: &mut Frame, app: &App, area: Rect) {
    let lines = build_asset_lines(app, area.width as usize);
    let paragraph = Paragraph::new(lines).style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}

/// Pure line builder so tests can assert on content without a terminal
pub fn build_asset_lines(app: &App, width: usize) -> Vec<Line<'static>> {
    let bg = app.theme.background;
    let mut lines = Vec::new();

    let task = match app.current_task() {
        Some(t) => t,
        None => return lines,
    };

    // Header: title, meta, separator
    lines.push(Line::from(Span::styled(
        format!(" {}", task.header_title()),
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )));
    if !task.meta.is_empty() {
        lines.push(Line::from(Span::styled(
            format!(" {}", task.meta),
            Style::default().fg(app.theme.dim).bg(bg),
        )));
    }
    lines.push(Line::from(Span::styled(
        " ".to_string(),
        Style::default().bg(bg),
    )));

    if task.assets.is_empty() {
        lines.push(Line::from(Span::styled(
            " No assets found for this task.".to_string(),
            Style::default().fg(app.theme.dim).bg(bg),
        )));
        return lines;
    }

    for (index, asset) in task.assets.iter().enumerate() {
        card_lines(app, asset, index, width, &mut lines);
        lines.push(Line::from(Span::styled(
            String::new(),
            Style::default().bg(bg),
        )));
    }

    lines
}

/// One asset card: top row always, description and media line when
/// expanded. The arrow is the expand affordance (`▸` → `▾`).
fn card_lines(app: &App, asset: &Asset, index: usize, width: usize, lines: &mut Vec<Line<'static>>) {
    let bg = app.theme.background;
    let cursored = app.pane == Pane::Assets && index == app.card_cursor;
    let expanded = app.is_expanded(&asset.id);

    let arrow = if expanded { "▾" } else { "▸" };
    let arrow_style = if cursored {
        Style::default()
            .fg(app.theme.highlight)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.dim).bg(bg)
    };

    let title_style = if cursored {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.text).bg(bg)
    };

    let sub = if asset.resource_url().is_some() {
        format!("{} · resource available", asset.kind.label())
    } else {
        asset.kind.label().to_string()
    };

    lines.push(Line::from(vec![
        Span::styled(format!(" {arrow} "), arrow_style),
        Span::styled(
            format!("{} ", asset.kind.icon()),
            Style::default().fg(app.theme.kind_color(asset.kind)).bg(bg),
        ),
        Span::styled(asset.title.clone(), title_style),
        Span::styled(
            format!("  {sub}"),
            Style::default().fg(app.theme.dim).bg(bg),
        ),
    ]));

    if !expanded {
        return;
    }

    let body_width = width.saturating_sub(CARD_INDENT.len() + 1);
    for row in wrap_text(&asset.description, body_width) {
        lines.push(Line::from(Span::styled(
            format!("{CARD_INDENT}{row}"),
            Style::default().fg(app.theme.text).bg(bg),
        )));
    }

    let media_line = match media::resolve(asset.kind, asset.url.as_deref()) {
        Media::Video(url) => format!("▶ inline video · {url}"),
        Media::Audio(url) => format!("♪ inline audio · {url}"),
        Media::Embed(url) => format!("⧉ embedded player · {url}"),
        Media::Link(Some(url)) => format!("↗ Open resource · {url}"),
        Media::Link(None) => "↗ Open resource".to_string(),
    };
    lines.push(Line::from(Span::styled(
        format!("{CARD_INDENT}{media_line}"),
        Style::default().fg(app.theme.green).bg(bg),
    )));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::{TERM_H, TERM_W, app_from_json, render_to_string, sample_app};
    use serde_json::json;

    fn render_assets(app: &App) -> String {
        render_to_string(TERM_W, TERM_H, |frame, area| {
            render_asset_view(frame, app, area)
        })
    }

    #[test]
    fn test_header_shows_title_and_meta() {
        let app = sample_app();
        let text = render_assets(&app);
        assert!(text.contains("Introduction & Reading"));
        assert!(text.contains("Contains articles and podcasts"));
    }

    #[test]
    fn test_empty_task_renders_exactly_one_placeholder() {
        let app = app_from_json(json!({
            "tasks": [ { "taskName": "Bare", "assets": [] } ]
        }));
        let text = render_assets(&app);
        assert_eq!(text.matches("No assets found for this task.").count(), 1);
        // No card arrows at all
        assert!(!text.contains('▸'));
        assert!(!text.contains('▾'));
    }

    #[test]
    fn test_collapsed_cards_hide_description() {
        let app = sample_app();
        let text = render_assets(&app);
        assert!(text.contains("Intro Article: Understanding DTthon"));
        assert!(!text.contains("assessment philosophy"));
        assert_eq!(text.matches('▸').count(), 3);
    }

    #[test]
    fn test_expanding_one_card_leaves_others_collapsed() {
        let mut app = sample_app();
        app.toggle_cursored_card(); // expands a1
        let text = render_assets(&app);
        assert!(text.contains("assessment philosophy"));
        // The other two cards stay collapsed
        assert!(!text.contains("selection process works"));
        assert_eq!(text.matches('▾').count(), 1);
        assert_eq!(text.matches('▸').count(), 2);
    }

    #[test]
    fn test_expanded_video_card_shows_inline_player_line() {
        let mut app = sample_app();
        app.card_cursor = 1; // Orientation Video, direct .mp4
        app.toggle_cursored_card();
        let text = render_assets(&app);
        assert!(text.contains("▶ inline video"));
    }

    #[test]
    fn test_expanded_hosted_video_shows_embed_url() {
        let mut app = app_from_json(json!({
            "tasks": [ {
                "taskName": "Watch",
                "assets": [ {
                    "assetId": "v1",
                    "title": "Lecture",
                    "type": "video",
                    "url": "https://www.youtube.com/watch?v=abc123&t=5s",
                    "description": "A lecture."
                } ]
            } ]
        }));
        app.toggle_cursored_card();
        let text = render_assets(&app);
        assert!(text.contains("⧉ embedded player"));
        assert!(text.contains("https://www.youtube.com/embed/abc123"));
    }

    #[test]
    fn test_expanded_article_shows_open_resource_link() {
        let mut app = sample_app();
        app.toggle_cursored_card(); // a1 is an article with a url
        let text = render_assets(&app);
        assert!(text.contains("↗ Open resource"));
    }

    #[test]
    fn test_sub_line_marks_resource_availability() {
        let app = app_from_json(json!({
            "tasks": [ {
                "taskName": "Mixed",
                "assets": [
                    { "assetId": "a", "title": "Linked", "type": "file",
                      "url": "https://example.com/x.pdf" },
                    { "assetId": "b", "title": "Bare", "type": "article" }
                ]
            } ]
        }));
        let text = render_assets(&app);
        assert!(text.contains("FILE · resource available"));
        assert!(text.contains("ARTICLE"));
        assert_eq!(text.matches("resource available").count(), 1);
    }
}
