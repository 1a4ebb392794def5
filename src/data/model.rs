// ---------------------------------------------------------------------------
// DisplayColumn – the five columns of the dataset
// ---------------------------------------------------------------------------

/// A column of the bionic dataset, named by its spreadsheet header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayColumn {
    Prototype,
    Multifunction,
    Method,
    Materials,
    ResLink,
}

impl DisplayColumn {
    /// All columns in default display order.
    pub const ALL: [DisplayColumn; 5] = [
        DisplayColumn::Prototype,
        DisplayColumn::Multifunction,
        DisplayColumn::Method,
        DisplayColumn::Materials,
        DisplayColumn::ResLink,
    ];

    /// Header name as it appears in the source spreadsheet.
    pub fn header(self) -> &'static str {
        match self {
            DisplayColumn::Prototype => "Bionic prototype",
            DisplayColumn::Multifunction => "Multifunction",
            DisplayColumn::Method => "Method",
            DisplayColumn::Materials => "Materials",
            DisplayColumn::ResLink => "Res link",
        }
    }

    /// Resolve a header name (surrounding whitespace ignored).
    pub fn from_header(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL.into_iter().find(|c| c.header() == name)
    }
}

// ---------------------------------------------------------------------------
// BionicRecord – one row of the spreadsheet
// ---------------------------------------------------------------------------

/// A single normalized row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BionicRecord {
    pub prototype: String,
    pub materials: Vec<String>,
    pub method: Vec<String>,
    pub multifunction: Vec<String>,
    /// Resource URL for the prototype.
    pub res_link: String,
}

impl BionicRecord {
    /// Build a record from raw cell text, normalizing the delimited columns.
    pub fn from_raw(
        prototype: &str,
        materials: &str,
        method: &str,
        multifunction: &str,
        res_link: &str,
    ) -> Self {
        Self {
            prototype: prototype.trim().to_string(),
            materials: split_delimited(materials),
            method: split_delimited(method),
            multifunction: split_delimited(multifunction),
            res_link: res_link.trim().to_string(),
        }
    }

    /// The list behind a list-valued column, `None` for scalar columns.
    pub fn list(&self, column: DisplayColumn) -> Option<&[String]> {
        match column {
            DisplayColumn::Materials => Some(&self.materials),
            DisplayColumn::Method => Some(&self.method),
            DisplayColumn::Multifunction => Some(&self.multifunction),
            DisplayColumn::Prototype | DisplayColumn::ResLink => None,
        }
    }

    /// Flatten a column back to spreadsheet text (lists joined with `"; "`).
    pub fn text(&self, column: DisplayColumn) -> String {
        match column {
            DisplayColumn::Prototype => self.prototype.clone(),
            DisplayColumn::ResLink => self.res_link.clone(),
            other => self.list(other).map(|l| l.join("; ")).unwrap_or_default(),
        }
    }
}

/// Split a `;`-delimited cell into trimmed pieces, keeping source order.
/// Blank pieces are dropped.
pub fn split_delimited(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// BionicTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full normalized dataset. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct BionicTable {
    records: Vec<BionicRecord>,
}

impl BionicTable {
    pub fn new(records: Vec<BionicRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[BionicRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&BionicRecord> {
        self.records.get(index)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
