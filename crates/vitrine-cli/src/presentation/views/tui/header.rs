use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use vitrine_types::LayoutMode;

use crate::presentation::theme::Palette;
use crate::presentation::view_models::HeaderViewModel;

/// Search box on the left, sort/layout/theme indicators on the right.
pub struct HeaderView<'a> {
    model: &'a HeaderViewModel,
    palette: &'a Palette,
}

impl<'a> HeaderView<'a> {
    pub fn new(model: &'a HeaderViewModel, palette: &'a Palette) -> Self {
        Self { model, palette }
    }
}

impl Widget for HeaderView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let palette = self.palette;
        let [search_area, info_area] =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                .areas(area);

        let border = if self.model.search_active {
            palette.accent
        } else {
            palette.border
        };
        let search_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(Span::styled(
                " Buscar ",
                Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
            ));

        let search_line = if self.model.search.is_empty() && !self.model.search_active {
            Line::from(Span::styled(
                "Pressione / para buscar por nome ou código",
                Style::default().fg(palette.muted),
            ))
        } else {
            let mut spans = vec![Span::styled(
                self.model.search.as_str(),
                Style::default().fg(palette.text),
            )];
            if self.model.search_active {
                spans.push(Span::styled("▏", Style::default().fg(palette.accent)));
            }
            Line::from(spans)
        };
        Paragraph::new(search_line)
            .block(search_block)
            .render(search_area, buf);

        let layout_label = match self.model.layout {
            LayoutMode::Grid => "▦ grade",
            LayoutMode::List => "☰ lista",
        };
        let theme_label = if self.model.theme.is_dark() {
            "☾ escuro"
        } else {
            "☀ claro"
        };
        let info = Line::from(vec![
            Span::styled("Ordem: ", Style::default().fg(palette.muted)),
            Span::styled(
                self.model.sort_label.as_str(),
                Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", Style::default().fg(palette.border)),
            Span::styled(layout_label, Style::default().fg(palette.text)),
            Span::styled("  │  ", Style::default().fg(palette.border)),
            Span::styled(theme_label, Style::default().fg(palette.text)),
        ]);
        Paragraph::new(info)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.border)),
            )
            .render(info_area, buf);
    }
}
