use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs, Widget},
};

use crate::presentation::theme::Palette;
use crate::presentation::view_models::CategoryBarViewModel;

pub struct CategoryBarView<'a> {
    model: &'a CategoryBarViewModel,
    palette: &'a Palette,
}

impl<'a> CategoryBarView<'a> {
    pub fn new(model: &'a CategoryBarViewModel, palette: &'a Palette) -> Self {
        Self { model, palette }
    }
}

impl Widget for CategoryBarView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let titles: Vec<Line> = self
            .model
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                // Only the first nine have a direct key.
                if i < 9 {
                    Line::from(format!("{} {}", i + 1, entry.label))
                } else {
                    Line::from(entry.label.as_str())
                }
            })
            .collect();

        Tabs::new(titles)
            .select(self.model.active_index)
            .style(Style::default().fg(self.palette.muted))
            .highlight_style(
                Style::default()
                    .fg(self.palette.background)
                    .bg(self.palette.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .divider("│")
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.palette.border)),
            )
            .render(area, buf);
    }
}
