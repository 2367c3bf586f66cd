//! On-screen keypad for the TUI
//!
//! The keypad holds no input state of its own: every button resolves to a
//! [`KeyCommand`] which the app routes to the input controller. Buttons can be
//! clicked with the mouse (via [`Keypad::hit_test`]) and the most recent press
//! is highlighted.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::KeyCommand;

/// Digit key color
pub const DIGIT_COLOR: Color = Color::Rgb(0x37, 0x41, 0x51);
/// Backspace key color (teal)
pub const BACKSPACE_COLOR: Color = Color::Rgb(0x10, 0xb9, 0x81);
/// Reset key color (orange)
pub const RESET_COLOR: Color = Color::Rgb(0xf5, 0x9e, 0x0b);
/// Advance key color (blue)
pub const ADVANCE_COLOR: Color = Color::Rgb(0x3b, 0x82, 0xf6);

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The glyph on the button
    pub label: char,
    /// Whether the button is currently highlighted
    pub pressed: bool,
    /// The command this button issues
    pub command: KeyCommand,
    /// Grid row
    pub row: usize,
    /// First grid column
    pub col: usize,
    /// Number of columns covered
    pub span: usize,
}

impl KeypadButton {
    /// Creates a one-column button
    #[must_use]
    pub fn new(command: KeyCommand, row: usize, col: usize) -> Self {
        Self {
            label: command.glyph(),
            pressed: false,
            command,
            row,
            col,
            span: 1,
        }
    }

    /// Widens the button to cover `span` columns
    #[must_use]
    pub fn with_span(mut self, span: usize) -> Self {
        self.span = span.max(1);
        self
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    /// Returns true if the button covers the given grid cell
    #[must_use]
    pub fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && col >= self.col && col < self.col + self.span
    }

    /// Background color for the button's role
    #[must_use]
    pub fn color(&self) -> Color {
        match self.command {
            KeyCommand::Digit(_) => DIGIT_COLOR,
            KeyCommand::Backspace => BACKSPACE_COLOR,
            KeyCommand::Reset => RESET_COLOR,
            KeyCommand::Advance => ADVANCE_COLOR,
        }
    }
}

/// The keypad layout - 4 rows, the last holding a double-width zero
/// ```text
/// [ 1 ] [ 2 ] [ 3 ] [ ⌫ ]
/// [ 4 ] [ 5 ] [ 6 ] [ ⟲ ]
/// [ 7 ] [ 8 ] [ 9 ] [ → ]
/// [    0    ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            // Row 0: 1 2 3 ⌫
            KeypadButton::new(KeyCommand::Digit(1), 0, 0),
            KeypadButton::new(KeyCommand::Digit(2), 0, 1),
            KeypadButton::new(KeyCommand::Digit(3), 0, 2),
            KeypadButton::new(KeyCommand::Backspace, 0, 3),
            // Row 1: 4 5 6 ⟲
            KeypadButton::new(KeyCommand::Digit(4), 1, 0),
            KeypadButton::new(KeyCommand::Digit(5), 1, 1),
            KeypadButton::new(KeyCommand::Digit(6), 1, 2),
            KeypadButton::new(KeyCommand::Reset, 1, 3),
            // Row 2: 7 8 9 →
            KeypadButton::new(KeyCommand::Digit(7), 2, 0),
            KeypadButton::new(KeyCommand::Digit(8), 2, 1),
            KeypadButton::new(KeyCommand::Digit(9), 2, 2),
            KeypadButton::new(KeyCommand::Advance, 2, 3),
            // Row 3: 0 (double width)
            KeypadButton::new(KeyCommand::Digit(0), 3, 0).with_span(2),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 4,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets the button covering a grid cell
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.covers(row, col))
    }

    /// Finds a button by its label glyph
    #[must_use]
    pub fn find_button_by_label(&self, label: char) -> Option<usize> {
        self.buttons.iter().position(|b| b.label == label)
    }

    /// Finds the button issuing a command
    #[must_use]
    pub fn find_button_by_command(&self, command: KeyCommand) -> Option<usize> {
        self.buttons.iter().position(|b| b.command == command)
    }

    /// Sets a button as pressed by index
    pub fn press_button(&mut self, index: usize) {
        if let Some(btn) = self.buttons.get_mut(index) {
            btn.set_pressed(true);
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Highlights only the button issuing `command`
    pub fn highlight(&mut self, command: KeyCommand) {
        self.release_all();
        if let Some(idx) = self.find_button_by_command(command) {
            self.press_button(idx);
        }
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Screen rectangle of a button inside the keypad's inner area
    #[must_use]
    pub fn button_rect(&self, inner: Rect, btn: &KeypadButton) -> Rect {
        let btn_width = inner.width / self.cols as u16;
        let btn_height = inner.height / self.rows as u16;
        Rect {
            x: inner.x + btn.col as u16 * btn_width,
            y: inner.y + btn.row as u16 * btn_height,
            width: btn_width * btn.span as u16,
            height: btn_height,
        }
    }

    /// Converts a click position to a button index
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        let inner = inner_area(area)?;
        if x < inner.x || y < inner.y || x >= inner.x + inner.width || y >= inner.y + inner.height
        {
            return None;
        }
        if inner.width < self.cols as u16 || inner.height < self.rows as u16 {
            return None;
        }

        self.buttons.iter().position(|btn| {
            let r = self.button_rect(inner, btn);
            x >= r.x && x < r.x + r.width && y >= r.y && y < r.y + r.height
        })
    }

    /// Resolves a click position straight to its command
    #[must_use]
    pub fn command_at(&self, area: Rect, x: u16, y: u16) -> Option<KeyCommand> {
        self.hit_test(area, x, y)
            .and_then(|idx| self.get_button(idx))
            .map(|btn| btn.command)
    }
}

/// Area inside the one-cell border, if there is any
fn inner_area(area: Rect) -> Option<Rect> {
    if area.width < 3 || area.height < 3 {
        return None;
    }
    Some(Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width - 2,
        height: area.height - 2,
    })
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let Some(inner) = inner_area(area) else {
            return;
        };
        if inner.width < self.keypad.cols as u16 * 3 || inner.height < self.keypad.rows as u16 {
            return; // Too small to render
        }

        for btn in self.keypad.buttons() {
            let rect = self.keypad.button_rect(inner, btn);

            let style = if btn.pressed {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(Color::White)
                    .bg(btn.color())
                    .add_modifier(Modifier::BOLD)
            };

            // Fill the key face, leaving a one-column gap on the right
            let face_width = rect.width.saturating_sub(1).max(1);
            for dy in 0..rect.height {
                let face = Rect::new(rect.x, rect.y + dy, face_width, 1);
                buf.set_style(face, style);
            }

            let label = Span::styled(format!("[{}]", btn.label), style);
            let label_width = label.width() as u16;
            let label_x = rect.x + face_width.saturating_sub(label_width) / 2;
            let label_y = rect.y + rect.height / 2;
            buf.set_span(label_x, label_y, &label, face_width);
        }
    }
}
