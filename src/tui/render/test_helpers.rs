use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::style::Color;

use crate::load::{normalize, sample_project};
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    buffer_to_string(terminal.backend().buffer())
}

/// Render and return both the text and the rows whose first cell
/// carries `bg` (used to count selection-highlighted rows).
pub fn render_with_bg_rows<F>(w: u16, h: u16, bg: Color, f: F) -> (String, Vec<u16>)
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer();
    let mut rows = Vec::new();
    for y in 0..buf.area.height {
        if buf.cell((0, y)).is_some_and(|cell| cell.bg == bg) {
            rows.push(y);
        }
    }
    (buffer_to_string(buf), rows)
}

fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// App over the embedded sample project
pub fn sample_app() -> App {
    App::new(sample_project())
}

/// App over a normalized raw document
pub fn app_from_json(raw: serde_json::Value) -> App {
    App::new(normalize(&raw))
}
