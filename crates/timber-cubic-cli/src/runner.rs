//! Interactive terminal session

use std::io;

use crossterm::{
    cursor::Show,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, backend::CrosstermBackend, layout::Rect, Terminal};
use timber_cubic::tui::{render, InputHandler, TimberApp};
use tracing::{debug, info};

use crate::error::{CliError, CliResult};

/// Runs the keypad TUI until the user quits
#[derive(Debug)]
pub struct TuiRunner {
    mouse: bool,
    handler: InputHandler,
}

impl TuiRunner {
    /// Creates a runner; `mouse` enables click input
    #[must_use]
    pub fn new(mouse: bool) -> Self {
        Self {
            mouse,
            handler: InputHandler::new(),
        }
    }

    /// Takes over the terminal, runs the event loop and restores the terminal
    ///
    /// The terminal is restored on every exit once raw mode is on, including
    /// when setup fails part way.
    pub fn run(&self) -> CliResult<TimberApp> {
        enable_raw_mode()
            .map_err(|e| CliError::terminal(format!("cannot enable raw mode: {e}")))?;

        let session = self.session();
        let restored = restore_terminal(self.mouse);

        let app = session?;
        restored?;
        info!(volume = %app.volume_display(), "terminal session ended");
        Ok(app)
    }

    fn session(&self) -> CliResult<TimberApp> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        if self.mouse {
            execute!(stdout, EnableMouseCapture)?;
        }

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        info!(mouse = self.mouse, "terminal session started");
        self.event_loop(&mut terminal)
    }

    fn event_loop<B: Backend>(&self, terminal: &mut Terminal<B>) -> CliResult<TimberApp> {
        let mut app = TimberApp::new();
        loop {
            let frame = terminal.draw(|f| render(&app, f))?;
            let area = frame.area;

            let event = event::read()?;
            self.handle_event(&mut app, &event, area);

            if app.should_quit() {
                return Ok(app);
            }
        }
    }

    /// Applies one terminal event to the app
    ///
    /// `area` is the frame area of the last draw, used for mouse hit testing.
    pub fn handle_event(&self, app: &mut TimberApp, event: &Event, area: Rect) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.dispatch(self.handler.handle_key(*key));
            }
            Event::Mouse(mouse)
                if self.mouse && mouse.kind == MouseEventKind::Down(MouseButton::Left) =>
            {
                debug!(x = mouse.column, y = mouse.row, "click");
                app.click(area, mouse.column, mouse.row);
            }
            _ => {}
        }
    }
}

/// Undoes raw mode, mouse capture and the alternate screen
///
/// Every step is attempted; the first failure is reported.
fn restore_terminal(mouse: bool) -> CliResult<()> {
    let mut stdout = io::stdout();
    let mouse_step = if mouse {
        execute!(stdout, DisableMouseCapture)
    } else {
        Ok(())
    };
    first_error([
        disable_raw_mode(),
        mouse_step,
        execute!(stdout, LeaveAlternateScreen, Show),
    ])
    .map_err(|e| CliError::terminal(format!("cannot restore terminal: {e}")))
}

fn first_error<const N: usize>(steps: [io::Result<()>; N]) -> io::Result<()> {
    steps.into_iter().find(Result::is_err).unwrap_or(Ok(()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
    use timber_cubic::core::{Field, KeyCommand};
    use timber_cubic::tui::ScreenLayout;

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 60,
        height: 24,
    };

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn left_click(x: u16, y: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_keyboard_session() {
        let runner = TuiRunner::new(true);
        let mut app = TimberApp::new();
        for code in [
            KeyCode::Char('1'),
            KeyCode::Char('2'),
            KeyCode::Enter,
            KeyCode::Char('3'),
            KeyCode::Char('6'),
        ] {
            runner.handle_event(&mut app, &key(code), AREA);
        }
        assert_eq!(app.volume_display(), "6′ 9″");

        runner.handle_event(&mut app, &key(KeyCode::Char('q')), AREA);
        assert!(app.should_quit());
    }

    #[test]
    fn test_key_release_ignored() {
        let runner = TuiRunner::new(true);
        let mut app = TimberApp::new();
        let mut release = KeyEvent::new(KeyCode::Char('5'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        runner.handle_event(&mut app, &Event::Key(release), AREA);
        assert_eq!(app.field_display(Field::Length), "0");
    }

    #[test]
    fn test_mouse_click_presses_key() {
        let runner = TuiRunner::new(true);
        let mut app = TimberApp::new();
        let keypad = ScreenLayout::new(AREA).keypad;
        runner.handle_event(&mut app, &left_click(keypad.x + 2, keypad.y + 1), AREA);
        assert_eq!(app.last_pressed(), Some(KeyCommand::Digit(1)));
    }

    #[test]
    fn test_mouse_click_selects_field() {
        let runner = TuiRunner::new(true);
        let mut app = TimberApp::new();
        let circ = ScreenLayout::new(AREA).circumference;
        runner.handle_event(&mut app, &left_click(circ.x + 2, circ.y + 1), AREA);
        assert_eq!(app.active_field(), Field::Circumference);
    }

    #[test]
    fn test_mouse_disabled() {
        let runner = TuiRunner::new(false);
        let mut app = TimberApp::new();
        let keypad = ScreenLayout::new(AREA).keypad;
        runner.handle_event(&mut app, &left_click(keypad.x + 2, keypad.y + 1), AREA);
        assert!(app.last_pressed().is_none());
    }

    #[test]
    fn test_first_error_all_ok() {
        assert!(first_error([Ok(()), Ok(()), Ok(())]).is_ok());
    }

    #[test]
    fn test_first_error_keeps_earliest_failure() {
        let err = first_error([
            Ok(()),
            Err(io::Error::other("raw mode")),
            Err(io::Error::other("alternate screen")),
        ])
        .unwrap_err();
        assert_eq!(err.to_string(), "raw mode");
    }

    #[test]
    fn test_first_error_runs_steps_after_failure() {
        let mut ran = Vec::new();
        let mut step = |name: &'static str, ok: bool| {
            ran.push(name);
            if ok {
                Ok(())
            } else {
                Err(io::Error::other(name))
            }
        };
        let result = first_error([
            step("raw", false),
            step("mouse", true),
            step("screen", true),
        ]);
        assert!(result.is_err());
        assert_eq!(ran, ["raw", "mouse", "screen"]);
    }

    #[test]
    fn test_resize_ignored() {
        let runner = TuiRunner::new(true);
        let mut app = TimberApp::new();
        runner.handle_event(&mut app, &Event::Resize(80, 30), AREA);
        assert!(app.controller().is_initial());
    }
}
