use std::collections::HashSet;
use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::load;
use crate::model::{Asset, Project, Task};

use super::input;
use super::render;
use super::theme::Theme;

/// Which pane has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Tasks,
    Assets,
}

/// Main application state: the loaded project plus all view state.
///
/// The project is read-only after construction. Everything the user
/// can change lives here as explicit fields, so selection and
/// expansion logic is testable without a terminal.
pub struct App {
    pub project: Project,
    /// Index of the selected task; callers keep it in bounds
    pub selected_task: usize,
    /// Cursor into the selected task's asset list
    pub card_cursor: usize,
    /// Ids of assets whose cards are expanded; cleared on task switch
    pub expanded: HashSet<String>,
    pub pane: Pane,
    /// Journey-board strip state, independent of any selection
    pub board_collapsed: bool,
    pub should_quit: bool,
    pub theme: Theme,
}

impl App {
    pub fn new(project: Project) -> Self {
        App {
            project,
            selected_task: 0,
            card_cursor: 0,
            expanded: HashSet::new(),
            pane: Pane::Tasks,
            board_collapsed: false,
            should_quit: false,
            theme: Theme::default(),
        }
    }

    pub fn task_count(&self) -> usize {
        self.project.tasks.len()
    }

    pub fn current_task(&self) -> Option<&Task> {
        self.project.task(self.selected_task)
    }

    pub fn current_assets(&self) -> &[Asset] {
        self.current_task().map_or(&[], |t| t.assets.as_slice())
    }

    pub fn cursored_asset(&self) -> Option<&Asset> {
        self.current_assets().get(self.card_cursor)
    }

    /// Select the task at `index` and re-render its asset list from a
    /// clean slate: all cards collapse and the card cursor resets.
    /// Re-selecting the current index is idempotent for the highlight
    /// (exactly one sidebar entry stays selected) but still resets
    /// card state, matching a full pane rebuild.
    ///
    /// `index` must be in bounds; callers clamp against `task_count`.
    pub fn select_task(&mut self, index: usize) {
        debug_assert!(index < self.task_count());
        self.selected_task = index;
        self.expanded.clear();
        self.card_cursor = 0;
    }

    pub fn is_expanded(&self, asset_id: &str) -> bool {
        self.expanded.contains(asset_id)
    }

    /// Flip the cursored card's expanded flag. Purely local per-card
    /// state: no other card is affected.
    pub fn toggle_cursored_card(&mut self) {
        let id = match self.cursored_asset() {
            Some(asset) => asset.id.clone(),
            None => return,
        };
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
    }

    pub fn toggle_board(&mut self) {
        self.board_collapsed = !self.board_collapsed;
    }
}

/// Run the viewer: fetch (or fall back), then hand the terminal over
/// to the event loop until quit.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    // The one blocking operation happens before the terminal is touched
    let project = load::load();
    let mut app = App::new(project);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
