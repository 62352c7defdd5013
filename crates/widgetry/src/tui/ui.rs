//! Calculator rendering
//!
//! Display and power status on the left, keypad in the middle, key help on
//! the right.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;
use crate::calc::ERROR_DISPLAY;

/// Title on the outer border
pub const CALC_TITLE: &str = " Widgetry Calculator ";

/// Key help shown in the sidebar
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("o / f", "On / Off"),
    ("Enter", "Equals"),
    ("Esc", "AC"),
    ("Bksp", "DE"),
    ("%", "Percent"),
    ("r", "Root"),
    ("Ctrl+C", "Quit"),
];

/// Operators help
pub const HELP_OPERATORS: &str = "+ - * / ( ) .";

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

fn columns(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([
            Constraint::Min(24),    // Display
            Constraint::Length(26), // Keypad
            Constraint::Length(22), // Help
        ])
        .split(area)
        .to_vec()
}

/// Where the keypad is drawn inside a frame of size `area`
///
/// Mouse handling uses this to map clicks back to buttons.
#[must_use]
pub fn keypad_area(area: Rect) -> Rect {
    columns(area).get(1).copied().unwrap_or_default()
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let pad = self.app.pad();
        let text = pad.display();

        let style = if !pad.is_on() {
            Style::default().fg(Color::DarkGray)
        } else if text == ERROR_DISPLAY {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };

        Paragraph::new(Span::styled(text, style))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(" Display ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(area, buf);
    }

    fn render_power(&self, area: Rect, buf: &mut Buffer) {
        let (label, color) = if self.app.pad().is_on() {
            ("ON", Color::Green)
        } else {
            ("OFF", Color::Red)
        };
        let line = Line::from(vec![
            Span::raw("Power: "),
            Span::styled(label, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        ]);
        Paragraph::new(line)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }

    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(9), Constraint::Length(3)])
            .split(area);

        let shortcuts: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>7}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        List::new(shortcuts)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(chunks[0], buf);

        Paragraph::new(Span::styled(HELP_OPERATORS, Style::default().fg(Color::Cyan)))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(chunks[1], buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(CALC_TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let cols = columns(area);
        if cols.len() < 3 {
            return;
        }

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(cols[0]);
        self.render_display(left[0], buf);
        self.render_power(left[1], buf);

        KeypadWidget::new(self.app.keypad())
            .pressed(self.app.pressed())
            .powered(self.app.pad().is_on())
            .render(cols[1], buf);

        self.render_help(cols[2], buf);
    }
}
