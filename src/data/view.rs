use super::model::{BionicTable, DisplayColumn};

/// Smallest selectable result limit.
pub const MIN_LIMIT: usize = 1;
/// Largest selectable result limit.
pub const MAX_LIMIT: usize = 50;
/// Result limit before the user touches the slider.
pub const DEFAULT_LIMIT: usize = 20;

/// A rendered table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    List(Vec<String>),
    /// URL, shown as a hyperlink.
    Link(String),
}

/// One displayed row, remembering where it came from in the base table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRow {
    pub source_index: usize,
    pub cells: Vec<Cell>,
}

/// Filtered rows, truncated and projected to the chosen columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub columns: Vec<DisplayColumn>,
    pub rows: Vec<ViewRow>,
    /// Number of matching rows before truncation.
    pub total_matches: usize,
}

impl ResultView {
    pub fn build(
        table: &BionicTable,
        indices: &[usize],
        columns: &[DisplayColumn],
        limit: usize,
    ) -> Self {
        let limit = clamp_limit(limit);
        let rows = indices
            .iter()
            .take(limit)
            .filter_map(|&i| {
                let rec = table.get(i)?;
                let cells = columns
                    .iter()
                    .map(|&col| match col {
                        DisplayColumn::Prototype => Cell::Text(rec.prototype.clone()),
                        DisplayColumn::ResLink => Cell::Link(rec.res_link.clone()),
                        list_col => Cell::List(
                            rec.list(list_col).map(<[String]>::to_vec).unwrap_or_default(),
                        ),
                    })
                    .collect();
                Some(ViewRow {
                    source_index: i,
                    cells,
                })
            })
            .collect();

        Self {
            columns: columns.to_vec(),
            rows,
            total_matches: indices.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether the limit cut off some matches.
    pub fn is_truncated(&self) -> bool {
        self.rows.len() < self.total_matches
    }
}

pub fn clamp_limit(limit: usize) -> usize {
    limit.clamp(MIN_LIMIT, MAX_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::test_support::sample_table;

    #[test]
    fn projects_columns_in_requested_order() {
        let table = sample_table();
        let cols = [DisplayColumn::ResLink, DisplayColumn::Prototype];
        let view = ResultView::build(&table, &[3], &cols, DEFAULT_LIMIT);

        assert_eq!(view.columns, cols);
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].source_index, 3);
        assert_eq!(
            view.rows[0].cells,
            vec![
                Cell::Link("https://example.org/lotus-2".into()),
                Cell::Text("Lotus leaf".into()),
            ]
        );
    }

    #[test]
    fn list_columns_keep_their_pieces() {
        let table = sample_table();
        let view = ResultView::build(&table, &[0], &[DisplayColumn::Method], DEFAULT_LIMIT);
        assert_eq!(
            view.rows[0].cells,
            vec![Cell::List(vec!["Etching".into(), "Coating".into()])]
        );
    }

    #[test]
    fn truncates_to_limit_and_keeps_order() {
        let table = sample_table();
        let indices = [1, 2, 3, 5];
        let view = ResultView::build(&table, &indices, &DisplayColumn::ALL, 2);

        let shown: Vec<usize> = view.rows.iter().map(|r| r.source_index).collect();
        assert_eq!(shown, vec![1, 2]);
        assert_eq!(view.total_matches, 4);
        assert!(view.is_truncated());
    }

    #[test]
    fn limit_is_clamped() {
        assert_eq!(clamp_limit(0), MIN_LIMIT);
        assert_eq!(clamp_limit(500), MAX_LIMIT);
        assert_eq!(clamp_limit(7), 7);

        let table = sample_table();
        let view = ResultView::build(&table, &[0, 1], &DisplayColumn::ALL, 0);
        assert_eq!(view.rows.len(), 1);
    }

    #[test]
    fn empty_match_is_an_empty_view() {
        let table = sample_table();
        let view = ResultView::build(&table, &[], &DisplayColumn::ALL, DEFAULT_LIMIT);
        assert!(view.is_empty());
        assert!(!view.is_truncated());
        assert_eq!(view.columns.len(), 5);
    }
}
