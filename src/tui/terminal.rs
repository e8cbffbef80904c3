//! Terminal setup, teardown and the editor loop
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::{self, Stdout};
use std::panic;

use crate::config::settings::Settings;
use crate::error::{VpnUsersError, VpnUsersResult};
use crate::models::SystemClock;
use crate::services::RecordTable;

use super::app::App;
use super::event::{InputSource, TerminalInput};
use super::handler::handle_key;
use super::snapshot::Snapshot;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Something that can draw a frame
pub trait Renderer {
    fn render(&mut self, snapshot: &Snapshot) -> VpnUsersResult<()>;
}

/// Draws frames through ratatui
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
}

impl<B: Backend> TerminalRenderer<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        Self { terminal }
    }

    /// The wrapped terminal
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

impl<B: Backend> Renderer for TerminalRenderer<B> {
    fn render(&mut self, snapshot: &Snapshot) -> VpnUsersResult<()> {
        self.terminal
            .draw(|frame| super::views::render(frame, snapshot))
            .map_err(|e| VpnUsersError::Tui(format!("Failed to draw: {}", e)))?;
        Ok(())
    }
}

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Set up panic hook to restore terminal on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Drive the editor until it quits or input runs out
pub fn run(
    app: &mut App,
    input: &mut dyn InputSource,
    renderer: &mut dyn Renderer,
) -> VpnUsersResult<()> {
    loop {
        renderer.render(&app.snapshot())?;

        let Some(key) = input.next_key()? else {
            break;
        };
        handle_key(app, key);

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Run the interactive editor on the real terminal
///
/// The table is loaded before the terminal is touched, so a file that
/// cannot be read is reported on a normal screen.
pub fn run_tui(settings: &Settings) -> Result<()> {
    let table = RecordTable::load(settings.secrets(), settings.capacity, Box::new(SystemClock))?;
    let mut app = App::new(table, settings);

    let terminal = init_terminal()?;
    let mut renderer = TerminalRenderer::new(terminal);
    let mut input = TerminalInput;

    let result = run(&mut app, &mut input, &mut renderer);
    let restored = restore_terminal();
    first_error(result, restored)
}

/// A failure inside the loop is reported ahead of a failed restore
fn first_error(result: VpnUsersResult<()>, restored: Result<()>) -> Result<()> {
    result?;
    restored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FixedClock;
    use crate::tui::event::{Key, ScriptedInput};
    use crate::tui::snapshot::DialogView;
    use chrono::NaiveDate;
    use ratatui::backend::TestBackend;
    use tempfile::TempDir;

    const SAMPLE: &str = "# Secrets for authentication using CHAP\n\
# client\tserver\tsecret\t\t\t\tIP addresses\n\
alice\tl2tpd\t\"pw1\"\t*\t#01/15/2024\t6\n\
bob\tl2tpd\t\"pw2\"\t10.0.0.2\t#03/01/2024\t~\n";

    /// Keeps every frame for inspection
    #[derive(Default)]
    struct RecordingRenderer {
        frames: Vec<Snapshot>,
    }

    impl Renderer for RecordingRenderer {
        fn render(&mut self, snapshot: &Snapshot) -> VpnUsersResult<()> {
            self.frames.push(snapshot.clone());
            Ok(())
        }
    }

    fn load_app(dir: &TempDir) -> App {
        let path = dir.path().join("chap-secrets");
        std::fs::write(&path, SAMPLE).unwrap();
        let settings = Settings::for_file(&path);
        let now = NaiveDate::from_ymd_opt(2024, 8, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let table = RecordTable::load(
            settings.secrets(),
            settings.capacity,
            Box::new(FixedClock(now)),
        )
        .unwrap();
        App::new(table, &settings)
    }

    #[test]
    fn test_loop_error_wins_over_restore_error() {
        let err = first_error(
            Err(VpnUsersError::Tui("Failed to draw: gone".into())),
            Err(anyhow::anyhow!("Failed to leave alternate screen")),
        )
        .unwrap_err();
        assert!(err.to_string().contains("Failed to draw"));

        let err = first_error(Ok(()), Err(anyhow::anyhow!("Failed to leave alternate screen")))
            .unwrap_err();
        assert!(err.to_string().contains("alternate screen"));

        assert!(first_error(Ok(()), Ok(())).is_ok());
    }

    #[test]
    fn test_run_until_input_exhausted() {
        let dir = TempDir::new().unwrap();
        let mut app = load_app(&dir);
        let mut input = ScriptedInput::new([Key::Down, Key::Right]);
        let mut renderer = RecordingRenderer::default();

        run(&mut app, &mut input, &mut renderer).unwrap();

        assert_eq!(renderer.frames.len(), 3);
        let last = renderer.frames.last().unwrap();
        assert_eq!(last.cursor.row, 1);
        assert_eq!(last.cursor.col, 1);
        assert!(last.rows[0].expired);
        assert!(!last.rows[1].expired);
        assert_eq!(last.rows[1].cells[6], "Never");
    }

    #[test]
    fn test_run_stops_on_quit() {
        let dir = TempDir::new().unwrap();
        let mut app = load_app(&dir);
        let mut input = ScriptedInput::new([Key::Char('q'), Key::Down]);
        let mut renderer = RecordingRenderer::default();

        run(&mut app, &mut input, &mut renderer).unwrap();

        assert!(app.should_quit);
        assert_eq!(input.remaining(), 1);
    }

    #[test]
    fn test_add_flow_frames_never_show_secret() {
        let dir = TempDir::new().unwrap();
        let mut app = load_app(&dir);
        let mut input = ScriptedInput::default()
            .key(Key::Char('a'))
            .line("carol")
            .line("")
            .line("topsecret")
            .line("topsecret")
            .line("")
            .line("07/01/2024")
            .line("1");
        let mut renderer = RecordingRenderer::default();

        run(&mut app, &mut input, &mut renderer).unwrap();

        assert_eq!(app.table.len(), 3);
        for frame in &renderer.frames {
            if let Some(DialogView::Prompt(view)) = &frame.dialog {
                assert!(!view.text.contains("topsecret"));
                assert!(view.answered.iter().all(|(_, text)| text != "topsecret"));
            }
            assert!(frame
                .rows
                .iter()
                .all(|row| row.cells.iter().all(|cell| cell != "topsecret")));
        }

        let last = renderer.frames.last().unwrap();
        assert_eq!(last.rows[2].cells[0], "carol");
        // Expires at midnight on the clock's own date: not yet past
        assert_eq!(last.rows[2].cells[6], "08/01/2024");
        assert!(!last.rows[2].expired);
    }

    #[test]
    fn test_terminal_renderer_draws_grid() {
        let dir = TempDir::new().unwrap();
        let mut app = load_app(&dir);
        let terminal = Terminal::new(TestBackend::new(120, 20)).unwrap();
        let mut renderer = TerminalRenderer::new(terminal);
        let mut input = ScriptedInput::new([Key::Char('d')]);

        run(&mut app, &mut input, &mut renderer).unwrap();

        let buffer = renderer.terminal().backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("CLIENT"));
        assert!(text.contains("alice"));
        assert!(text.contains("DELETE ROW: alice | l2tpd | * | 01/15/2024"));
        assert!(text.contains("y: Delete"));
    }
}
