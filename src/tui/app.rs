use std::cell::Cell;
use std::error::Error;
use std::io;
use std::path::Path;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::config_io::{config_path, load_config};
use crate::model::TaskId;
use crate::store::TaskStore;

use super::input;
use super::render;
use super::theme::Theme;

/// The text being typed into the add-task dialog. Local to the dialog's
/// lifetime: created when it opens, dropped on submit or cancel, never
/// stored in the TaskStore.
#[derive(Debug, Clone, Default)]
pub struct DialogState {
    /// Draft text
    pub input: String,
    /// Byte offset of the edit cursor, always on a grapheme boundary
    pub cursor: usize,
}

/// View-local state. Task data and the dialog flag live in the store;
/// everything here is presentation bookkeeping.
pub struct App {
    pub store: TaskStore,
    /// Cursor index into the task list
    pub cursor: usize,
    /// First visible row of the list
    pub scroll_offset: usize,
    /// Draft for the add-task dialog, present only while it is open
    pub dialog: Option<DialogState>,
    pub should_quit: bool,
    pub theme: Theme,
    /// Help overlay visible
    pub show_help: bool,
    /// Transient feedback line, cleared on the next keypress
    pub status_message: Option<String>,
    needs_redraw: Rc<Cell<bool>>,
}

impl App {
    /// Wrap a store, subscribing to it so every published snapshot
    /// schedules a redraw.
    pub fn new(mut store: TaskStore, theme: Theme) -> Self {
        let needs_redraw = Rc::new(Cell::new(true));
        let flag = Rc::clone(&needs_redraw);
        store.subscribe(move |_| flag.set(true));

        App {
            store,
            cursor: 0,
            scroll_offset: 0,
            dialog: None,
            should_quit: false,
            theme,
            show_help: false,
            status_message: None,
            needs_redraw,
        }
    }

    /// Ask for a redraw on the next loop turn (for view-local changes the
    /// store does not know about, like cursor movement).
    pub fn request_redraw(&self) {
        self.needs_redraw.set(true);
    }

    /// Consume the redraw flag.
    pub fn take_redraw(&self) -> bool {
        self.needs_redraw.replace(false)
    }

    /// Id of the task under the cursor, read fresh from the store.
    pub fn cursor_task_id(&self) -> Option<TaskId> {
        self.store.tasks().get(self.cursor).map(|t| t.id)
    }

    /// Keep the cursor inside the list after a removal.
    pub fn clamp_cursor(&mut self) {
        let len = self.store.tasks().len();
        if len == 0 {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(len - 1);
        }
    }
}

/// Run the TUI application
pub fn run(seed_tasks: &[String], config_override: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let path = config_override
        .map(Path::to_path_buf)
        .unwrap_or_else(config_path);
    let config = load_config(&path)?;
    let theme = Theme::from_config(&config.ui);

    let mut store = TaskStore::new();
    for text in seed_tasks {
        store.add_task(text.clone());
    }
    let mut app = App::new(store, theme);

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
) -> Result<(), Box<dyn Error>> {
    loop {
        // Redraw only when the store published a change or a handler
        // asked for one.
        if app.take_redraw() {
            terminal.draw(|frame| render::render(frame, app))?;
        }

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Resize(_, _) => app.request_redraw(),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
