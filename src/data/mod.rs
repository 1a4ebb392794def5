/// Data layer: core types, loading, option lists, filtering and export.
///
/// Architecture:
/// ```text
///  .xlsx / .xls / .ods / .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + normalize → BionicTable
///   └──────────┘
///        │
///        ├──────────────► options   distinct prototypes / methods / tags
///        ▼
///   ┌──────────┐
///   │  filter   │  SearchRequest → matching row indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   view    │  limit + display columns → ResultView
///   └──────────┘
///        │
///        ▼
///     export       rows → .xlsx / .csv
/// ```

pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
pub mod options;
pub mod view;

#[cfg(test)]
pub(crate) mod test_support {
    use super::model::{BionicRecord, BionicTable};

    /// Small table covering shared tags, repeated prototypes and multi-method rows.
    pub fn sample_table() -> BionicTable {
        let rows = [
            (
                "Lotus leaf",
                "PDMS; SiO2",
                "Etching; Coating",
                "Self-cleaning; Superhydrophobic",
                "https://example.org/lotus",
            ),
            (
                "Moth eye",
                "PMMA",
                "Lithography",
                "Antireflective; Antifogging",
                "https://example.org/moth",
            ),
            (
                "Cicada wing",
                "Ag",
                "Etching",
                "Antibacterial; Antifogging",
                "https://example.org/cicada",
            ),
            (
                "Lotus leaf",
                "Wax",
                "Molding",
                "Antifogging; Hydrophobic",
                "https://example.org/lotus-2",
            ),
            (
                "Butterfly wing",
                "TiO2",
                "Self-assembly",
                "Structural color",
                "",
            ),
            (
                "Moth eye",
                "Si",
                "Coating; Etching",
                "Antifogging; Antireflective; Self-cleaning",
                "https://example.org/moth-2",
            ),
        ];
        BionicTable::new(
            rows.iter()
                .map(|(p, mat, meth, mf, link)| BionicRecord::from_raw(p, mat, meth, mf, link))
                .collect(),
        )
    }
}
