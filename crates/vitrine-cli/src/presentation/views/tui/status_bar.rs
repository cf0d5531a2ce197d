//! Bottom status bar: result counts, transient message, key hints.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::theme::Palette;
use crate::presentation::view_models::StatusBarViewModel;

use super::status_level_to_color;

pub struct StatusBarView<'a> {
    model: &'a StatusBarViewModel,
    palette: &'a Palette,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusBarViewModel, palette: &'a Palette) -> Self {
        Self { model, palette }
    }
}

impl Widget for StatusBarView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let palette = self.palette;

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border));
        let inner = block.inner(area);
        block.render(area, buf);

        let [left, right] =
            Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
                .areas(inner);

        let mut status = vec![Span::styled(
            format!("{} de {} produtos", self.model.shown, self.model.total),
            Style::default().fg(palette.text),
        )];
        if let Some(message) = &self.model.message {
            status.push(Span::styled(" │ ", Style::default().fg(palette.border)));
            status.push(Span::styled(
                message.as_str(),
                Style::default().fg(status_level_to_color(self.model.level, palette)),
            ));
        }
        Paragraph::new(Line::from(status)).render(left, buf);

        let mut hints = Vec::with_capacity(self.model.hints.len() * 2);
        for (key, label) in &self.model.hints {
            hints.push(Span::styled(
                format!("[{}]", key),
                Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
            ));
            hints.push(Span::styled(
                format!("{} ", label),
                Style::default().fg(palette.muted),
            ));
        }
        Paragraph::new(Line::from(hints))
            .alignment(ratatui::layout::Alignment::Right)
            .render(right, buf);
    }
}
