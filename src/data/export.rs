use std::path::Path;

use anyhow::{bail, Context, Result};
use rust_xlsxwriter::{Format, Url, Workbook};

use super::model::{BionicTable, DisplayColumn};

/// Write the given rows and columns to `path`.  Dispatch by extension.
///
/// List-valued cells are joined back with `"; "` so the output can be
/// loaded again.
pub fn export_file(
    path: &Path,
    table: &BionicTable,
    indices: &[usize],
    columns: &[DisplayColumn],
) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "xlsx" => export_xlsx(path, table, indices, columns),
        "csv" => export_csv(path, table, indices, columns),
        other => bail!("Unsupported export extension: .{other}"),
    }?;

    log::info!("Exported {} rows to {}", indices.len(), path.display());
    Ok(())
}

pub fn export_xlsx(
    path: &Path,
    table: &BionicTable,
    indices: &[usize],
    columns: &[DisplayColumn],
) -> Result<()> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Bionic prototypes")?;

    for (c, col) in columns.iter().enumerate() {
        sheet.write_string_with_format(0, c as u16, col.header(), &header_format)?;
    }

    for (r, &i) in indices.iter().enumerate() {
        let rec = table
            .get(i)
            .with_context(|| format!("row index {i} out of range"))?;
        let row = r as u32 + 1;
        for (c, &col) in columns.iter().enumerate() {
            let c = c as u16;
            // Links without a scheme the writer understands stay plain text.
            let linked = col == DisplayColumn::ResLink
                && has_link_scheme(&rec.res_link)
                && sheet
                    .write_url(row, c, Url::new(rec.res_link.as_str()))
                    .is_ok();
            if !linked {
                sheet.write_string(row, c, rec.text(col))?;
            }
        }
    }

    workbook
        .save(path)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn has_link_scheme(url: &str) -> bool {
    const SCHEMES: [&str; 4] = ["http://", "https://", "ftp://", "mailto:"];
    let lower = url.to_ascii_lowercase();
    SCHEMES.iter().any(|s| lower.starts_with(s))
}

pub fn export_csv(
    path: &Path,
    table: &BionicTable,
    indices: &[usize],
    columns: &[DisplayColumn],
) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV")?;
    writer.write_record(columns.iter().map(|c| c.header()))?;

    for &i in indices {
        let rec = table
            .get(i)
            .with_context(|| format!("row index {i} out of range"))?;
        writer.write_record(columns.iter().map(|&c| rec.text(c)))?;
    }

    writer.flush().context("flushing CSV")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_file;
    use crate::data::model::BionicRecord;
    use crate::data::test_support::sample_table;

    #[test]
    fn xlsx_export_reloads_to_same_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("processed.xlsx");
        let table = sample_table();
        let all: Vec<usize> = (0..table.len()).collect();

        export_file(&path, &table, &all, &DisplayColumn::ALL).unwrap();
        let reloaded = load_file(&path).unwrap();

        assert_eq!(reloaded.records(), table.records());
    }

    #[test]
    fn xlsx_export_keeps_links_without_scheme_as_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("links.xlsx");
        let table = BionicTable::new(vec![
            BionicRecord::from_raw("Lotus leaf", "PDMS", "Etching", "Antifogging", "doi.org/10.1000/xyz"),
            BionicRecord::from_raw("Moth eye", "PMMA", "Coating", "Antireflective", "www.example.com"),
            BionicRecord::from_raw("Cicada wing", "Ag", "Etching", "Antibacterial", "https://example.org/c"),
        ]);

        export_file(&path, &table, &[0, 1, 2], &DisplayColumn::ALL).unwrap();
        let reloaded = load_file(&path).unwrap();

        let links: Vec<&str> = reloaded.records().iter().map(|r| r.res_link.as_str()).collect();
        assert_eq!(links, vec!["doi.org/10.1000/xyz", "www.example.com", "https://example.org/c"]);
    }

    #[test]
    fn link_scheme_detection() {
        assert!(has_link_scheme("https://example.org"));
        assert!(has_link_scheme("HTTP://EXAMPLE.ORG"));
        assert!(has_link_scheme("mailto:lab@example.org"));
        assert!(!has_link_scheme("doi.org/10.1000/xyz"));
        assert!(!has_link_scheme(""));
    }

    #[test]
    fn csv_export_writes_selected_rows_and_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");
        let table = sample_table();

        export_file(
            &path,
            &table,
            &[5, 2],
            &[DisplayColumn::Prototype, DisplayColumn::Method],
        )
        .unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec!["Bionic prototype,Method", "Moth eye,Coating; Etching", "Cicada wing,Etching"]
        );
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let table = sample_table();
        let err = export_file(&dir.path().join("out.txt"), &table, &[0], &DisplayColumn::ALL);
        assert!(err.is_err());
    }

    #[test]
    fn out_of_range_index_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let table = sample_table();
        let err = export_csv(&dir.path().join("out.csv"), &table, &[99], &DisplayColumn::ALL);
        assert!(err.is_err());
    }
}
