//! Root result extraction

use shared_types::JudicialResult;
use uuid::Uuid;

/// Type ids of the root results, in input order.
///
/// Results refining another result, and results without a type id, are
/// dropped. A missing list yields an empty vector, which callers read as
/// "no application-level result recorded yet".
pub fn root_result_type_ids(results: Option<&[JudicialResult]>) -> Vec<Uuid> {
    results
        .unwrap_or_default()
        .iter()
        .filter(|r| r.is_root())
        .filter_map(|r| r.judicial_result_type_id)
        .collect()
}
