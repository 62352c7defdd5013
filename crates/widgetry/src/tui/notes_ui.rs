//! Notes rendering
//!
//! The list only ever shows headings. Content is visible in the edit modal,
//! drawn over the list while a note is open.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Widget, Wrap},
    Frame,
};

use super::notes_app::NotesApp;
use crate::storage::KeyValueStore;

/// Title on the outer border
pub const NOTES_TITLE: &str = " Widgetry Notes ";

/// Footer help in list mode
pub const LIST_HELP: &str = "Enter add | Up/Down select | Tab open | Del delete | Ctrl+Q quit";

/// Footer help inside the edit modal
pub const MODAL_HELP: &str = " Ctrl+S save | Esc cancel ";

/// Renders the notes UI to the frame
pub fn render_notes<S: KeyValueStore>(app: &NotesApp<S>, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(NotesUI::new(app), area);
}

/// Rect of `percent_x` by `percent_y` centred in `r`
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Notes UI widget
#[derive(Debug)]
pub struct NotesUI<'a, S> {
    app: &'a NotesApp<S>,
}

impl<'a, S: KeyValueStore> NotesUI<'a, S> {
    /// Creates a new notes UI widget
    #[must_use]
    pub fn new(app: &'a NotesApp<S>) -> Self {
        Self { app }
    }

    fn render_input(&self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::raw(self.app.input()),
            Span::styled(" ", Style::default().bg(Color::White)),
        ]);
        Paragraph::new(line)
            .block(
                Block::default()
                    .title(" New note heading ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .render(area, buf);
    }

    fn render_list(&self, area: Rect, buf: &mut Buffer) {
        let selected = self.app.selected();
        let items: Vec<ListItem> = self
            .app
            .board()
            .notes()
            .iter()
            .enumerate()
            .map(|(i, note)| {
                if selected == Some(i) {
                    ListItem::new(format!("> {}", note.heading)).style(
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    ListItem::new(format!("  {}", note.heading))
                }
            })
            .collect();

        let title = format!(" Notes ({}) ", self.app.board().len());
        List::new(items)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .render(area, buf);
    }

    fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        let line = match self.app.status() {
            Some(status) => Span::styled(status, Style::default().fg(Color::Red)),
            None => Span::styled(LIST_HELP, Style::default().fg(Color::DarkGray)),
        };
        Paragraph::new(line).render(area, buf);
    }

    fn render_modal(&self, area: Rect, buf: &mut Buffer) {
        let board = self.app.board();
        let Some(session) = board.session() else {
            return;
        };
        let heading = board
            .get(session.index())
            .map(|n| n.heading.as_str())
            .unwrap_or_default();

        let popup = centered_rect(70, 60, area);
        Clear.render(popup, buf);
        Paragraph::new(format!("{}_", session.draft()))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(format!(" {heading} "))
                    .title_bottom(Line::from(MODAL_HELP).alignment(Alignment::Right))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(popup, buf);
    }

    fn render_alert(&self, area: Rect, buf: &mut Buffer) {
        let Some(message) = self.app.board().alert() else {
            return;
        };

        let popup = centered_rect(50, 30, area);
        Clear.render(popup, buf);
        Paragraph::new(message)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(" Error ")
                    .title_bottom(Line::from(" Enter / Esc ").alignment(Alignment::Right))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red)),
            )
            .render(popup, buf);
    }
}

impl<S: KeyValueStore> Widget for NotesUI<'_, S> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(NOTES_TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Input
                Constraint::Min(3),    // List
                Constraint::Length(1), // Footer
            ])
            .split(area);

        self.render_input(chunks[0], buf);
        self.render_list(chunks[1], buf);
        self.render_footer(chunks[2], buf);

        // Overlays last so they sit on top
        self.render_modal(area, buf);
        self.render_alert(area, buf);
    }
}
