use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, StatefulWidget, Widget},
};

use crate::presentation::theme::Palette;
use crate::presentation::view_models::{CardViewModel, CatalogViewModel};

/// One compact row per card.
pub struct ProductListView<'a> {
    model: &'a CatalogViewModel,
    palette: &'a Palette,
}

impl<'a> ProductListView<'a> {
    pub fn new(model: &'a CatalogViewModel, palette: &'a Palette) -> Self {
        Self { model, palette }
    }

    fn row(&self, card: &'a CardViewModel) -> ListItem<'a> {
        let palette = self.palette;
        let separator = || Span::styled(" │ ", Style::default().fg(palette.border));

        let mut spans = vec![
            Span::styled(
                format!("{:>12}", card.price),
                Style::default().fg(palette.price).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {:<5}", card.discount.as_deref().unwrap_or("")),
                Style::default().fg(palette.discount),
            ),
            separator(),
            Span::styled(
                format!("{:<14}", card.store),
                Style::default().fg(palette.accent),
            ),
            separator(),
            Span::styled(card.title.as_str(), Style::default().fg(palette.text)),
        ];
        if let Some(code) = &card.code_label {
            spans.push(separator());
            spans.push(Span::styled(code.as_str(), Style::default().fg(palette.muted)));
        }
        if card.copied {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                "Copiado!",
                Style::default().fg(palette.success).add_modifier(Modifier::BOLD),
            ));
        }

        ListItem::new(Line::from(spans))
    }
}

impl Widget for ProductListView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = self.model.cards.iter().map(|card| self.row(card)).collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.palette.border)),
            )
            .highlight_style(Style::default().bg(self.palette.selection))
            .highlight_symbol("▸ ");

        let mut state = ListState::default().with_selected(self.model.selected);
        StatefulWidget::render(list, area, buf, &mut state);
    }
}
