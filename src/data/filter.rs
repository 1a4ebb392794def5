use super::model::{BionicRecord, BionicTable};

// ---------------------------------------------------------------------------
// SearchRequest – snapshot of the selection widgets
// ---------------------------------------------------------------------------

/// Everything the user selected when pressing Search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    /// Tags a row must carry, all of them.
    pub multifunctions: Vec<String>,
    /// Exact prototype name, if one was chosen.
    pub prototype: Option<String>,
    /// Methods of which a row must use at least one.
    pub methods: Vec<String>,
}

impl SearchRequest {
    pub fn selectors_enabled(&self) -> bool {
        selectors_enabled(&self.multifunctions)
    }
}

/// Prototype and method selectors only apply once a multifunction tag is chosen.
pub fn selectors_enabled(multifunctions: &[String]) -> bool {
    !multifunctions.is_empty()
}

/// Return indices of rows matching `request`, in table order.
///
/// Stages run in sequence:
/// 1. multifunction tags: a row must contain every selected tag;
/// 2. prototype: exact match (only when selectors are enabled);
/// 3. methods: a row must contain any selected method (likewise gated).
///
/// Stages 2 and 3 are skipped once the running result is empty.
pub fn filtered_indices(table: &BionicTable, request: &SearchRequest) -> Vec<usize> {
    let mut hits: Vec<usize> = table
        .records()
        .iter()
        .enumerate()
        .filter(|(_, rec)| has_all_tags(rec, &request.multifunctions))
        .map(|(i, _)| i)
        .collect();
    log::debug!("multifunction stage: {} rows", hits.len());

    if !request.selectors_enabled() {
        return hits;
    }

    if let Some(prototype) = &request.prototype {
        if !hits.is_empty() {
            hits.retain(|&i| table.records()[i].prototype == *prototype);
            log::debug!("prototype stage: {} rows", hits.len());
        }
    }

    if !request.methods.is_empty() && !hits.is_empty() {
        hits.retain(|&i| has_any_method(&table.records()[i], &request.methods));
        log::debug!("method stage: {} rows", hits.len());
    }

    hits
}

fn has_all_tags(rec: &BionicRecord, tags: &[String]) -> bool {
    tags.iter().all(|tag| rec.multifunction.contains(tag))
}

fn has_any_method(rec: &BionicRecord, methods: &[String]) -> bool {
    methods.iter().any(|m| rec.method.contains(m))
}
