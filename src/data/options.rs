use std::collections::BTreeSet;

use super::model::BionicTable;

/// Multifunction tags that always lead the option list, in this order.
pub const PRIORITY_MULTIFUNCTIONS: [&str; 13] = [
    "Antifogging",
    "Self-cleaning",
    "Antireflective",
    "Antibacterial",
    "Anti-icing",
    "Antiwetting",
    "Large FOV",
    "Fast motion detection",
    "Structural color",
    "Droplet directional migration",
    "Anti-drag",
    "Water collection",
    "Self-propelled actuator",
];

/// Choices offered by the selection widgets, derived once per table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionLists {
    /// Distinct prototype names, sorted.
    pub prototypes: Vec<String>,
    /// Distinct method tags across all rows, sorted.
    pub methods: Vec<String>,
    /// Priority tags first, then the remaining tags sorted.
    pub multifunctions: Vec<String>,
}

impl OptionLists {
    pub fn from_table(table: &BionicTable) -> Self {
        let mut prototypes = BTreeSet::new();
        let mut methods = BTreeSet::new();
        let mut multifunctions = BTreeSet::new();

        for rec in table.records() {
            if !rec.prototype.is_empty() {
                prototypes.insert(rec.prototype.as_str());
            }
            methods.extend(rec.method.iter().map(String::as_str));
            multifunctions.extend(rec.multifunction.iter().map(String::as_str));
        }

        Self {
            prototypes: prototypes.into_iter().map(str::to_string).collect(),
            methods: methods.into_iter().map(str::to_string).collect(),
            multifunctions: prioritized(multifunctions),
        }
    }
}

fn prioritized(sorted: BTreeSet<&str>) -> Vec<String> {
    let mut out: Vec<String> = PRIORITY_MULTIFUNCTIONS
        .iter()
        .map(|s| s.to_string())
        .collect();
    out.extend(
        sorted
            .into_iter()
            .filter(|tag| !PRIORITY_MULTIFUNCTIONS.contains(tag))
            .map(str::to_string),
    );
    out
}
