use std::path::{Path, PathBuf};

use crate::data::filter::{filtered_indices, selectors_enabled, SearchRequest};
use crate::data::model::{BionicRecord, BionicTable, DisplayColumn};
use crate::data::options::OptionLists;
use crate::data::view::{clamp_limit, ResultView, DEFAULT_LIMIT};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded table (None until a file is loaded).
    pub table: Option<BionicTable>,

    /// Choices for the selection widgets, derived from `table`.
    pub options: OptionLists,

    /// File the table was read from.
    pub source: Option<PathBuf>,

    /// Maximum number of rows shown.
    pub limit: usize,

    /// Columns shown in the results table, in display order.
    pub display_columns: Vec<DisplayColumn>,

    /// Pending selections, applied when Search is pressed.
    pub selected_multifunctions: Vec<String>,
    pub selected_prototype: Option<String>,
    pub selected_methods: Vec<String>,

    /// Indices of all rows matched by the last search.
    pub matches: Vec<usize>,

    /// Result of the last search (None before the first one).
    pub results: Option<ResultView>,

    /// Base-table index of the row picked in the results table.
    pub selected_row: Option<usize>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            table: None,
            options: OptionLists::default(),
            source: None,
            limit: DEFAULT_LIMIT,
            display_columns: DisplayColumn::ALL.to_vec(),
            selected_multifunctions: Vec::new(),
            selected_prototype: None,
            selected_methods: Vec::new(),
            matches: Vec::new(),
            results: None,
            selected_row: None,
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded table, rebuild option lists and reset selections.
    pub fn set_dataset(&mut self, table: BionicTable, source: &Path) {
        self.options = OptionLists::from_table(&table);
        log::info!(
            "{} prototypes, {} methods, {} multifunction tags",
            self.options.prototypes.len(),
            self.options.methods.len(),
            self.options.multifunctions.len()
        );

        self.table = Some(table);
        self.source = Some(source.to_path_buf());
        self.clear_selection();
        self.status_message = None;
    }

    /// Snapshot the pending selections.
    pub fn request(&self) -> SearchRequest {
        SearchRequest {
            multifunctions: self.selected_multifunctions.clone(),
            prototype: self.selected_prototype.clone(),
            methods: self.selected_methods.clone(),
        }
    }

    /// Whether the prototype and method selectors accept input.
    pub fn selectors_enabled(&self) -> bool {
        selectors_enabled(&self.selected_multifunctions)
    }

    /// Run the filter with the current selections and store the result.
    pub fn search(&mut self) {
        let Some(table) = &self.table else {
            return;
        };
        let request = self.request();
        self.matches = filtered_indices(table, &request);
        log::info!("Search {:?} matched {} rows", request, self.matches.len());

        self.results = Some(ResultView::build(
            table,
            &self.matches,
            &self.display_columns,
            self.limit,
        ));
        self.selected_row = None;
    }

    /// Re-project the last matches after a limit or column change.
    fn rebuild_view(&mut self) {
        if self.results.is_none() {
            return;
        }
        if let Some(table) = &self.table {
            self.results = Some(ResultView::build(
                table,
                &self.matches,
                &self.display_columns,
                self.limit,
            ));
        }
    }

    pub fn set_limit(&mut self, limit: usize) {
        self.limit = clamp_limit(limit);
        self.rebuild_view();
    }

    /// Show or hide a column; newly shown columns go last.
    pub fn toggle_display_column(&mut self, column: DisplayColumn) {
        if let Some(pos) = self.display_columns.iter().position(|&c| c == column) {
            self.display_columns.remove(pos);
        } else {
            self.display_columns.push(column);
        }
        self.rebuild_view();
    }

    pub fn toggle_multifunction(&mut self, tag: &str) {
        toggle(&mut self.selected_multifunctions, tag);
    }

    pub fn toggle_method(&mut self, method: &str) {
        toggle(&mut self.selected_methods, method);
    }

    pub fn set_prototype(&mut self, prototype: Option<String>) {
        self.selected_prototype = prototype;
    }

    /// Drop all selections and results.
    pub fn clear_selection(&mut self) {
        self.selected_multifunctions.clear();
        self.selected_prototype = None;
        self.selected_methods.clear();
        self.matches.clear();
        self.results = None;
        self.selected_row = None;
    }

    /// The record behind the row picked in the results table.
    pub fn selected_record(&self) -> Option<&BionicRecord> {
        self.table.as_ref()?.get(self.selected_row?)
    }
}

/// Add `value` if absent, remove it if present.  Keeps selection order.
fn toggle(list: &mut Vec<String>, value: &str) {
    if let Some(pos) = list.iter().position(|v| v == value) {
        list.remove(pos);
    } else {
        list.push(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::test_support::sample_table;

    fn loaded() -> AppState {
        let mut state = AppState::default();
        state.set_dataset(sample_table(), Path::new("table.xlsx"));
        state
    }

    #[test]
    fn defaults_match_search_panel() {
        let state = AppState::default();
        assert_eq!(state.limit, 20);
        assert_eq!(state.display_columns, DisplayColumn::ALL.to_vec());
        assert!(!state.selectors_enabled());
        assert!(state.results.is_none());
    }

    #[test]
    fn selectors_follow_multifunction_selection() {
        let mut state = loaded();
        state.toggle_multifunction("Antifogging");
        assert!(state.selectors_enabled());
        state.toggle_multifunction("Antifogging");
        assert!(!state.selectors_enabled());
    }

    #[test]
    fn selector_gate_agrees_with_request() {
        let mut state = loaded();
        assert_eq!(state.selectors_enabled(), state.request().selectors_enabled());
        state.toggle_multifunction("Anti-icing");
        assert!(state.selectors_enabled());
        assert_eq!(state.selectors_enabled(), state.request().selectors_enabled());
    }

    #[test]
    fn search_without_tags_shows_whole_table() {
        let mut state = loaded();
        state.set_prototype(Some("Lotus leaf".into()));
        state.toggle_method("Molding");
        state.search();

        let view = state.results.as_ref().unwrap();
        assert_eq!(view.total_matches, 6);
        assert_eq!(view.rows.len(), 6);
    }

    #[test]
    fn search_uses_snapshot_and_limit() {
        let mut state = loaded();
        state.toggle_multifunction("Antifogging");
        state.set_limit(3);
        state.search();

        let view = state.results.as_ref().unwrap();
        let shown: Vec<usize> = view.rows.iter().map(|r| r.source_index).collect();
        assert_eq!(shown, vec![1, 2, 3]);
        assert_eq!(view.total_matches, 4);

        // Changing selections alone does not re-run the search.
        state.toggle_method("Coating");
        assert_eq!(state.results.as_ref().unwrap().total_matches, 4);

        state.search();
        assert_eq!(state.results.as_ref().unwrap().total_matches, 1);
    }

    #[test]
    fn column_toggle_reprojects_results() {
        let mut state = loaded();
        state.search();
        state.toggle_display_column(DisplayColumn::Materials);
        state.toggle_display_column(DisplayColumn::Prototype);
        state.toggle_display_column(DisplayColumn::Prototype);

        let view = state.results.as_ref().unwrap();
        assert_eq!(
            view.columns,
            vec![
                DisplayColumn::Multifunction,
                DisplayColumn::Method,
                DisplayColumn::ResLink,
                DisplayColumn::Prototype,
            ]
        );
        assert_eq!(view.rows[0].cells.len(), 4);
    }

    #[test]
    fn selected_record_resolves_through_table() {
        let mut state = loaded();
        state.toggle_multifunction("Antibacterial");
        state.search();
        state.selected_row = state.results.as_ref().unwrap().rows.first().map(|r| r.source_index);

        let rec = state.selected_record().unwrap();
        assert_eq!(rec.prototype, "Cicada wing");
        assert_eq!(rec.res_link, "https://example.org/cicada");
    }

    #[test]
    fn loading_new_dataset_resets_selection() {
        let mut state = loaded();
        state.toggle_multifunction("Antifogging");
        state.search();
        state.set_dataset(sample_table(), Path::new("other.csv"));

        assert!(state.selected_multifunctions.is_empty());
        assert!(state.results.is_none());
        assert_eq!(state.options.prototypes.len(), 4);
    }
}
