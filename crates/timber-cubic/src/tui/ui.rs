//! TUI rendering
//!
//! One screen: two field boxes, the live volume, the keypad and a help line.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use super::app::TimberApp;
use super::keypad::{Keypad, KeypadWidget};
use crate::core::Field;

/// Color of the active field value
pub const ACTIVE_COLOR: Color = Color::Rgb(0x10, 0xb9, 0x81);

/// Renders the timber UI to the frame
pub fn render(app: &TimberApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(TimberUI::new(app), area);
}

/// Screen regions, shared by rendering and mouse hit testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Length field box
    pub length: Rect,
    /// Circumference field box
    pub circumference: Rect,
    /// Volume box
    pub result: Rect,
    /// Keypad
    pub keypad: Rect,
    /// Help line
    pub help: Rect,
}

impl ScreenLayout {
    /// Splits the full frame area into regions
    #[must_use]
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(4), // Fields
                Constraint::Length(4), // Volume
                Constraint::Min(6),    // Keypad
                Constraint::Length(1), // Help
            ])
            .split(area);

        let fields = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[0]);

        Self {
            length: fields[0],
            circumference: fields[1],
            result: rows[1],
            keypad: rows[2],
            help: rows[3],
        }
    }

    /// Box of a field
    #[must_use]
    pub fn field(&self, field: Field) -> Rect {
        match field {
            Field::Length => self.length,
            Field::Circumference => self.circumference,
        }
    }
}

/// Timber UI widget
#[derive(Debug)]
pub struct TimberUI<'a> {
    app: &'a TimberApp,
    keypad: Keypad,
}

impl<'a> TimberUI<'a> {
    /// Creates a new UI widget, highlighting the last pressed key
    #[must_use]
    pub fn new(app: &'a TimberApp) -> Self {
        let mut keypad = Keypad::new();
        if let Some(command) = app.last_pressed() {
            keypad.highlight(command);
        }
        Self { app, keypad }
    }

    /// Renders one field box
    fn render_field(&self, field: Field, area: Rect, buf: &mut Buffer) {
        let active = self.app.active_field() == field;

        let (border, value_style) = if active {
            (
                Style::default().fg(ACTIVE_COLOR),
                Style::default()
                    .fg(ACTIVE_COLOR)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (
                Style::default().fg(Color::DarkGray),
                Style::default().fg(Color::White),
            )
        };

        let paragraph = Paragraph::new(vec![
            Line::from(Span::styled(field.label(), Style::default().fg(Color::Gray))),
            Line::from(Span::styled(self.app.field_display(field), value_style)),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));

        paragraph.render(area, buf);
    }

    /// Renders the volume box
    fn render_result(&self, area: Rect, buf: &mut Buffer) {
        let paragraph = Paragraph::new(vec![
            Line::from(Span::styled("Volume", Style::default().fg(Color::Gray))),
            Line::from(Span::styled(
                self.app.volume_display(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );

        paragraph.render(area, buf);
    }

    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        let spans: Vec<Span> = HELP_SHORTCUTS
            .iter()
            .flat_map(|(key, desc)| {
                [
                    Span::styled(*key, Style::default().fg(Color::Yellow)),
                    Span::styled(format!(" {desc}  "), Style::default().fg(Color::DarkGray)),
                ]
            })
            .collect();
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

impl Widget for TimberUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(APP_TITLE)
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let layout = ScreenLayout::new(area);

        for field in Field::ALL {
            self.render_field(field, layout.field(field), buf);
        }
        self.render_result(layout.result, buf);
        KeypadWidget::new(&self.keypad).render(layout.keypad, buf);
        self.render_help(layout.help, buf);
    }
}

/// Screen title
pub const APP_TITLE: &str = " Timber Cubic ";

/// Keyboard shortcuts shown on the help line
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9", "digit"),
    ("⌫", "back"),
    ("Enter", "next"),
    ("Esc", "reset"),
    ("l/c", "field"),
    ("q", "quit"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::KeyCommand;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn buf_to_string(buffer: &Buffer) -> String {
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    fn draw(app: &TimberApp, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        buf_to_string(terminal.backend().buffer())
    }

    fn app_with(keys: &[KeyCommand]) -> TimberApp {
        let mut app = TimberApp::new();
        for &k in keys {
            app.press(k);
        }
        app
    }

    #[test]
    fn test_render_initial_screen() {
        let content = draw(&TimberApp::new(), 60, 24);
        assert!(content.contains("Timber Cubic"));
        assert!(content.contains("Length (ft)"));
        assert!(content.contains("Circumference (in)"));
        assert!(content.contains("Volume"));
        assert!(content.contains("0′ 0″"));
        assert!(content.contains("Keypad"));
    }

    #[test]
    fn test_render_field_values_and_result() {
        let app = app_with(&[
            KeyCommand::Digit(1),
            KeyCommand::Digit(2),
            KeyCommand::Advance,
            KeyCommand::Digit(3),
            KeyCommand::Digit(6),
        ]);
        let content = draw(&app, 60, 24);
        assert!(content.contains("12"));
        assert!(content.contains("36"));
        assert!(content.contains("6′ 9″"));
    }

    #[test]
    fn test_active_field_highlighted() {
        let app = app_with(&[KeyCommand::Digit(7)]);
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let layout = ScreenLayout::new(Rect::new(0, 0, 60, 24));
        let buffer = terminal.backend().buffer();
        let length_border = &buffer[(layout.length.x, layout.length.y)];
        let circ_border = &buffer[(layout.circumference.x, layout.circumference.y)];
        assert_eq!(length_border.fg, ACTIVE_COLOR);
        assert_eq!(circ_border.fg, Color::DarkGray);
    }

    #[test]
    fn test_render_small_terminal() {
        let _ = draw(&TimberApp::new(), 20, 10);
    }

    #[test]
    fn test_render_help_line() {
        let content = draw(&TimberApp::new(), 80, 24);
        assert!(content.contains("Enter"));
        assert!(content.contains("reset"));
    }

    #[test]
    fn test_layout_regions_do_not_overlap() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 60, 24));
        assert!(layout.length.x + layout.length.width <= layout.circumference.x);
        assert!(layout.length.y + layout.length.height <= layout.result.y);
        assert!(layout.result.y + layout.result.height <= layout.keypad.y);
        assert!(layout.keypad.y + layout.keypad.height <= layout.help.y);
    }

    #[test]
    fn test_layout_field_lookup() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 60, 24));
        assert_eq!(layout.field(Field::Length), layout.length);
        assert_eq!(layout.field(Field::Circumference), layout.circumference);
    }

    #[test]
    fn test_ui_highlights_last_pressed() {
        let app = app_with(&[KeyCommand::Digit(4)]);
        let ui = TimberUI::new(&app);
        let idx = ui
            .keypad
            .find_button_by_command(KeyCommand::Digit(4))
            .unwrap();
        assert!(ui.keypad.get_button(idx).unwrap().pressed);
        assert_eq!(ui.keypad.buttons().filter(|b| b.pressed).count(), 1);
    }

    #[test]
    fn test_widget_render_direct() {
        let app = TimberApp::new();
        let area = Rect::new(0, 0, 60, 24);
        let mut buf = Buffer::empty(area);
        TimberUI::new(&app).render(area, &mut buf);
        assert!(buf_to_string(&buf).contains("Timber Cubic"));
    }

    #[test]
    fn test_help_shortcuts_have_descriptions() {
        for (key, desc) in HELP_SHORTCUTS {
            assert!(!key.is_empty());
            assert!(!desc.is_empty());
        }
    }
}
