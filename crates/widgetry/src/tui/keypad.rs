//! Keypad widget for the terminal calculator
//!
//! Draws the power row above the 5x4 grid and maps mouse clicks back to
//! keypad actions. The button pressed last is highlighted.
//!
//! ```text
//! [ON ] [OFF]
//! [AC ] [DE ] [ % ] [ ÷ ]
//! [ 7 ] [ 8 ] [ 9 ] [ * ]
//! ...
//! ```

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::calc::{Keypad, KeypadAction};

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
    pressed: Option<KeypadAction>,
    powered: bool,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self {
            keypad,
            pressed: None,
            powered: true,
        }
    }

    /// Highlights the button for an action
    #[must_use]
    pub fn pressed(mut self, action: Option<KeypadAction>) -> Self {
        self.pressed = action;
        self
    }

    /// Dims the grid while the pad is off
    #[must_use]
    pub fn powered(mut self, powered: bool) -> Self {
        self.powered = powered;
        self
    }

    /// Rows drawn, counting the power row
    fn total_rows(&self) -> usize {
        self.keypad.dimensions().0 + 1
    }

    fn cols(&self) -> usize {
        self.keypad.dimensions().1
    }

    /// Button at a (drawn row, col) cell
    fn action_at(&self, row: usize, col: usize) -> Option<KeypadAction> {
        if row == 0 {
            self.keypad.power_buttons().get(col).map(|b| b.action)
        } else {
            self.keypad.get_button_at(row - 1, col).map(|b| b.action)
        }
    }

    /// Converts a click position to the action of the button under it
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<KeypadAction> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // Border
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let btn_width = (area.width - 2) / self.cols() as u16;
        let btn_height = (area.height - 2) / self.total_rows() as u16;
        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = ((rel_x - 1) / btn_width) as usize;
        let row = ((rel_y - 1) / btn_height) as usize;
        if row < self.total_rows() && col < self.cols() {
            self.action_at(row, col)
        } else {
            None
        }
    }

    fn style_for(&self, action: KeypadAction) -> Style {
        if self.pressed == Some(action) {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        match action {
            KeypadAction::PowerOn => Style::default().fg(Color::Green),
            KeypadAction::PowerOff => Style::default().fg(Color::Red),
            _ if !self.powered => Style::default().fg(Color::DarkGray),
            KeypadAction::Digit(_) | KeypadAction::Decimal => Style::default().fg(Color::White),
            KeypadAction::Operator(_) => Style::default().fg(Color::Yellow),
            KeypadAction::Equals => Style::default().fg(Color::Green),
            KeypadAction::AllClear | KeypadAction::Delete => Style::default().fg(Color::Red),
            _ => Style::default().fg(Color::Cyan),
        }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        if inner.width < self.cols() as u16 || inner.height < self.total_rows() as u16 {
            return; // Too small to render
        }

        let btn_width = inner.width / self.cols() as u16;
        let btn_height = inner.height / self.total_rows() as u16;

        let power = self.keypad.power_buttons().iter().map(|b| (0, b.col, b.action));
        let grid = self
            .keypad
            .buttons()
            .iter()
            .map(|b| (b.row + 1, b.col, b.action));

        for (row, col, action) in power.chain(grid) {
            let x = inner.x + (col as u16 * btn_width);
            let y = inner.y + (row as u16 * btn_height);

            let label = format!("[{}]", action.label());
            let label_width = label.chars().count() as u16;
            if btn_width < label_width {
                continue;
            }
            let label_x = x + (btn_width - label_width) / 2;
            let label_y = y + btn_height / 2;

            if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                buf.set_span(
                    label_x,
                    label_y,
                    &Span::styled(label, self.style_for(action)),
                    btn_width,
                );
            }
        }
    }
}
