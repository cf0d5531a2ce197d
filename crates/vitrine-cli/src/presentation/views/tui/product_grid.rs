use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::formatters::truncate;
use crate::presentation::theme::Palette;
use crate::presentation::view_models::{CardViewModel, CatalogViewModel};

/// Borders plus six content lines.
const CARD_HEIGHT: u16 = 8;

/// Cards stacked in rows of `columns`, scrolled to keep the selection visible.
pub struct ProductGridView<'a> {
    model: &'a CatalogViewModel,
    palette: &'a Palette,
}

impl<'a> ProductGridView<'a> {
    pub fn new(model: &'a CatalogViewModel, palette: &'a Palette) -> Self {
        Self { model, palette }
    }
}

impl Widget for ProductGridView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let columns = usize::from(self.model.columns.max(1));
        let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));
        let selected = self.model.selected.unwrap_or(0);
        let selected_row = selected / columns;
        let first_row = (selected_row + 1).saturating_sub(visible_rows);

        let row_areas = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); visible_rows])
            .split(area);

        let rows = self.model.cards.chunks(columns).skip(first_row);
        for (row_index, (cards, row_area)) in rows.zip(row_areas.iter()).enumerate() {
            let cells = Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns])
                .split(*row_area);
            for (column, (card, cell)) in cards.iter().zip(cells.iter()).enumerate() {
                let position = (first_row + row_index) * columns + column;
                render_card(
                    card,
                    self.model.selected == Some(position),
                    self.palette,
                    *cell,
                    buf,
                );
            }
        }
    }
}

fn render_card(card: &CardViewModel, selected: bool, palette: &Palette, area: Rect, buf: &mut Buffer) {
    let border = if selected {
        Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.border)
    };
    let block = Block::default().borders(Borders::ALL).border_style(border);
    let width = usize::from(block.inner(area).width);

    let mut heading = vec![Span::styled(
        card.store.as_str(),
        Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
    )];
    if let Some(code) = &card.code_label {
        heading.push(Span::raw("  "));
        heading.push(Span::styled(code.as_str(), Style::default().fg(palette.muted)));
    }

    let old_price = match &card.old_price {
        Some(old) => Line::from(Span::styled(
            old.as_str(),
            Style::default()
                .fg(palette.muted)
                .add_modifier(Modifier::CROSSED_OUT),
        )),
        None => Line::default(),
    };

    let mut price = vec![Span::styled(
        card.price.as_str(),
        Style::default().fg(palette.price).add_modifier(Modifier::BOLD),
    )];
    if let Some(discount) = &card.discount {
        price.push(Span::raw("  "));
        price.push(Span::styled(
            discount.as_str(),
            Style::default().fg(palette.discount).add_modifier(Modifier::BOLD),
        ));
    }

    let footer = if card.copied {
        Line::from(Span::styled(
            "Copiado!",
            Style::default().fg(palette.success).add_modifier(Modifier::BOLD),
        ))
    } else if card.code_label.is_some() {
        Line::from(Span::styled("[c] copiar código", Style::default().fg(palette.muted)))
    } else {
        Line::default()
    };

    let lines = vec![
        Line::from(heading),
        Line::from(Span::styled(
            truncate(&card.title, width),
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        )),
        old_price,
        Line::from(price),
        Line::from(Span::styled(
            truncate(&card.link, width),
            Style::default().fg(palette.muted).add_modifier(Modifier::UNDERLINED),
        )),
        footer,
    ];

    Paragraph::new(lines).block(block).render(area, buf);
}
