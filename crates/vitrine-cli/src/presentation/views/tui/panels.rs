use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::theme::Palette;

fn centered_message(message: &str, style: Style, palette: &Palette, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));
    let inner = block.inner(area);
    block.render(area, buf);

    let top = inner.height.saturating_sub(1) / 2;
    let line_area = Rect {
        y: inner.y + top,
        height: inner.height.min(1),
        ..inner
    };
    Paragraph::new(Line::styled(message, style))
        .alignment(Alignment::Center)
        .render(line_area, buf);
}

pub struct LoadingPanel<'a> {
    palette: &'a Palette,
}

impl<'a> LoadingPanel<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }
}

impl Widget for LoadingPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default().fg(self.palette.muted);
        centered_message("Carregando produtos…", style, self.palette, area, buf);
    }
}

pub struct ErrorPanel<'a> {
    message: &'a str,
    palette: &'a Palette,
}

impl<'a> ErrorPanel<'a> {
    pub fn new(message: &'a str, palette: &'a Palette) -> Self {
        Self { message, palette }
    }
}

impl Widget for ErrorPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default()
            .fg(self.palette.error)
            .add_modifier(Modifier::BOLD);
        centered_message(self.message, style, self.palette, area, buf);
    }
}

/// Shown when filters leave nothing to display.
pub struct EmptyPanel<'a> {
    palette: &'a Palette,
}

impl<'a> EmptyPanel<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }
}

impl Widget for EmptyPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default().fg(self.palette.muted);
        centered_message("Nenhum produto encontrado", style, self.palette, area, buf);
    }
}
