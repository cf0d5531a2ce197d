//! Ratatui views for the interactive screen
//!
//! Every view is a stateless `Widget` over a borrowed view model and a
//! [`Palette`]. Layout arithmetic lives here; formatting does not.

pub mod category_bar;
pub mod header;
pub mod panels;
pub mod product_grid;
pub mod product_list;
pub mod status_bar;

pub use category_bar::CategoryBarView;
pub use header::HeaderView;
pub use panels::{EmptyPanel, ErrorPanel, LoadingPanel};
pub use product_grid::ProductGridView;
pub use product_list::ProductListView;
pub use status_bar::StatusBarView;

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    widgets::Block,
};
use vitrine_types::LayoutMode;

use crate::presentation::theme::Palette;
use crate::presentation::view_models::{BodyViewModel, ScreenViewModel, StatusLevel};

pub fn draw(frame: &mut Frame, model: &ScreenViewModel) {
    let palette = Palette::for_theme(model.theme);
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        area,
    );

    let [header, categories, body, status] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(3),
    ])
    .areas(area);

    frame.render_widget(HeaderView::new(&model.header, &palette), header);
    frame.render_widget(CategoryBarView::new(&model.categories, &palette), categories);

    match &model.body {
        BodyViewModel::Loading => frame.render_widget(LoadingPanel::new(&palette), body),
        BodyViewModel::Error { message } => {
            frame.render_widget(ErrorPanel::new(message, &palette), body)
        }
        BodyViewModel::Catalog(catalog) if catalog.cards.is_empty() => {
            frame.render_widget(EmptyPanel::new(&palette), body)
        }
        BodyViewModel::Catalog(catalog) => match catalog.layout {
            LayoutMode::Grid => frame.render_widget(ProductGridView::new(catalog, &palette), body),
            LayoutMode::List => frame.render_widget(ProductListView::new(catalog, &palette), body),
        },
    }

    frame.render_widget(StatusBarView::new(&model.status, &palette), status);
}

pub(crate) fn status_level_to_color(level: StatusLevel, palette: &Palette) -> Color {
    match level {
        StatusLevel::Success => palette.success,
        StatusLevel::Info => palette.muted,
        StatusLevel::Warning => palette.warning,
        StatusLevel::Error => palette.error,
    }
}
