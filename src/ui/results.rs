use eframe::egui::{self, Align, Layout, ScrollArea, Ui};
use egui_extras::{Column as TableColumn, TableBuilder};

use crate::data::model::DisplayColumn;
use crate::data::view::Cell;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Results table (central panel)
// ---------------------------------------------------------------------------

/// Render the rows of the last search.
pub fn results_table(ui: &mut Ui, state: &mut AppState) {
    let Some(view) = &state.results else {
        ui.weak("Choose filters and press Search.");
        return;
    };
    if view.columns.is_empty() {
        ui.weak("No display columns selected.");
        return;
    }
    if view.is_empty() {
        ui.label("No matching rows.");
        return;
    }

    if view.is_truncated() {
        ui.label(format!(
            "Showing {} of {} matches",
            view.rows.len(),
            view.total_matches
        ));
    }

    let selected = state.selected_row;
    let mut clicked = None;

    ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .sense(egui::Sense::click())
            .cell_layout(Layout::left_to_right(Align::Center))
            .columns(TableColumn::auto().at_least(90.0).clip(true), view.columns.len())
            .header(22.0, |mut header| {
                for col in &view.columns {
                    header.col(|ui: &mut Ui| {
                        ui.strong(header_label(*col));
                    });
                }
            })
            .body(|body| {
                body.rows(20.0, view.rows.len(), |mut row| {
                    let view_row = &view.rows[row.index()];
                    row.set_selected(selected == Some(view_row.source_index));
                    for cell in &view_row.cells {
                        row.col(|ui: &mut Ui| draw_cell(ui, cell));
                    }
                    if row.response().clicked() {
                        clicked = Some(view_row.source_index);
                    }
                });
            });
    });

    if let Some(index) = clicked {
        state.selected_row = Some(index);
    }
}

fn header_label(col: DisplayColumn) -> &'static str {
    match col {
        DisplayColumn::ResLink => "Resource",
        other => other.header(),
    }
}

fn draw_cell(ui: &mut Ui, cell: &Cell) {
    match cell {
        Cell::Text(text) => {
            ui.label(text);
        }
        Cell::List(items) => {
            ui.label(items.join("; "));
        }
        Cell::Link(url) if url.is_empty() => {}
        Cell::Link(url) => {
            ui.hyperlink(url);
        }
    }
}
