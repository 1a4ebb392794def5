use std::path::PathBuf;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::model::DisplayColumn;
use crate::data::view::{MAX_LIMIT, MIN_LIMIT};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – result settings and row details
// ---------------------------------------------------------------------------

/// Render the left settings panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Settings");
    ui.separator();

    ui.strong("Search results limit");
    let mut limit = state.limit;
    let slider = ui
        .add(egui::Slider::new(&mut limit, MIN_LIMIT..=MAX_LIMIT).step_by(1.0))
        .on_hover_text("Limit the number of search results");
    if slider.changed() {
        state.set_limit(limit);
    }
    ui.add_space(8.0);

    ui.strong("Display columns")
        .on_hover_text("Select columns to display in the search results");
    for col in DisplayColumn::ALL {
        let mut shown = state.display_columns.contains(&col);
        if ui.checkbox(&mut shown, col.header()).changed() {
            state.toggle_display_column(col);
        }
    }
    ui.separator();

    detail_panel(ui, state);
}

/// Prototype and resource link of the row picked in the results table.
fn detail_panel(ui: &mut Ui, state: &AppState) {
    let Some(rec) = state.selected_record() else {
        ui.weak("Click a result row to see its details.");
        return;
    };

    ui.group(|ui: &mut Ui| {
        ui.label(format!("Bionic prototype is: {}", rec.prototype));
        ui.horizontal_wrapped(|ui: &mut Ui| {
            ui.label("Resource Link:");
            if rec.res_link.is_empty() {
                ui.weak("none");
            } else {
                ui.hyperlink(&rec.res_link);
            }
        });
        if !rec.materials.is_empty() {
            ui.label(format!("Materials: {}", rec.materials.join(", ")));
        }
    });
}

// ---------------------------------------------------------------------------
// Search panel – selection widgets and the Search trigger
// ---------------------------------------------------------------------------

/// Render the selection widgets above the results table.
pub fn search_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Bionic Path Selection");
    ui.add_space(4.0);

    if state.table.is_none() {
        ui.label("No dataset loaded.  (File → Open…)");
        return;
    }

    if let Some(tag) = multi_select(
        ui,
        "Multifunction",
        "Select the multifunction to display in the search results",
        &state.options.multifunctions,
        &state.selected_multifunctions,
    ) {
        state.toggle_multifunction(&tag);
    }

    let enabled = state.selectors_enabled();
    let mut picked_method = None;
    let mut picked_prototype = None;

    ui.columns(2, |cols: &mut [Ui]| {
        cols[0].add_enabled_ui(enabled, |ui: &mut Ui| {
            picked_prototype = prototype_select(ui, state);
        });
        cols[1].add_enabled_ui(enabled, |ui: &mut Ui| {
            picked_method = multi_select(
                ui,
                "Method",
                "Select the method to display in the search results",
                &state.options.methods,
                &state.selected_methods,
            );
        });
    });

    if let Some(prototype) = picked_prototype {
        state.set_prototype(prototype);
    }
    if let Some(method) = picked_method {
        state.toggle_method(&method);
    }

    ui.horizontal(|ui: &mut Ui| {
        if ui.button("Search").clicked() {
            state.search();
        }
        if ui.button("Clear").clicked() {
            state.clear_selection();
        }
    });
}

/// Single-select for the prototype.  Returns the new choice if it changed.
fn prototype_select(ui: &mut Ui, state: &AppState) -> Option<Option<String>> {
    ui.strong("Bionic prototype")
        .on_hover_text("Select the bionic prototype to display in the search results");

    let current = state.selected_prototype.clone();
    let mut choice = current.clone();
    egui::ComboBox::from_id_salt("bionic_prototype")
        .selected_text(current.as_deref().unwrap_or("Select the bionic prototype"))
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            ui.selectable_value(&mut choice, None, "None");
            for prototype in &state.options.prototypes {
                ui.selectable_value(&mut choice, Some(prototype.clone()), prototype);
            }
        });

    (choice != current).then_some(choice)
}

/// Checkbox list in a collapsible header.  Returns the option that was toggled.
fn multi_select(
    ui: &mut Ui,
    label: &str,
    help: &str,
    options: &[String],
    selected: &[String],
) -> Option<String> {
    let mut toggled = None;
    let header_text = format!("{label}  ({}/{})", selected.len(), options.len());

    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt(label)
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            ScrollArea::vertical()
                .id_salt(label)
                .max_height(220.0)
                .show(ui, |ui: &mut Ui| {
                    for opt in options {
                        let mut checked = selected.contains(opt);
                        if ui.checkbox(&mut checked, opt).changed() {
                            toggled = Some(opt.clone());
                        }
                    }
                });
        })
        .header_response
        .on_hover_text(help);

    if !selected.is_empty() {
        ui.label(RichText::new(selected.join(", ")).small());
    }

    toggled
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            ui.separator();
            let has_table = state.table.is_some();
            if ui
                .add_enabled(has_table, egui::Button::new("Export processed dataset…"))
                .clicked()
            {
                export_dialog(state, ExportScope::Dataset);
                ui.close_menu();
            }
            if ui
                .add_enabled(state.results.is_some(), egui::Button::new("Export results…"))
                .clicked()
            {
                export_dialog(state, ExportScope::Results);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(table) = &state.table {
            let source = state
                .source
                .as_ref()
                .and_then(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let mut text = format!("{source}: {} prototypes loaded", table.len());
            if let Some(view) = &state.results {
                text.push_str(&format!(", {} matching", view.total_matches));
            }
            ui.label(text);
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open bionic dataset")
        .add_filter("Supported files", &["xlsx", "xlsm", "xlsb", "xls", "ods", "csv", "json"])
        .add_filter("Spreadsheet", &["xlsx", "xlsm", "xlsb", "xls", "ods"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(table) => state.set_dataset(table, &path),
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

enum ExportScope {
    /// Every row, every column.
    Dataset,
    /// Rows of the last search, display columns, no limit.
    Results,
}

fn export_dialog(state: &mut AppState, scope: ExportScope) {
    let Some(table) = &state.table else {
        return;
    };
    let (default_name, indices, columns) = match scope {
        ExportScope::Dataset => (
            "processed_table.xlsx",
            (0..table.len()).collect::<Vec<_>>(),
            DisplayColumn::ALL.to_vec(),
        ),
        ExportScope::Results => (
            "search_results.xlsx",
            state.matches.clone(),
            state.display_columns.clone(),
        ),
    };

    let file: Option<PathBuf> = rfd::FileDialog::new()
        .set_title("Export")
        .set_file_name(default_name)
        .add_filter("Excel", &["xlsx"])
        .add_filter("CSV", &["csv"])
        .save_file();

    if let Some(path) = file {
        let result = crate::data::export::export_file(&path, table, &indices, &columns);
        state.status_message = match result {
            Ok(()) => None,
            Err(e) => {
                log::error!("Failed to export: {e:#}");
                Some(format!("Error: {e:#}"))
            }
        };
    }
}
