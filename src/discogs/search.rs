use indicatif::ProgressBar;

use super::{
    Credentials, Discogs, JsonFetch,
    pagination::{self, PaginationEnvelope},
};
use crate::{
    error::Res,
    types::{CandidateRecord, SearchCriteria, SearchField},
};

pub const SEARCH_RESULTS_KEY: &str = "results";

/// Format constraint sent when the criteria do not name one.
pub const DEFAULT_FORMAT: &str = "vinyl";

/// Query parameters for a search: every set field plus the format constraint.
pub fn search_params(criteria: &SearchCriteria) -> Vec<(String, String)> {
    let mut params: Vec<(String, String)> = criteria
        .iter()
        .map(|(field, value)| (field.param().to_string(), value.to_string()))
        .collect();

    if criteria.get(SearchField::Format).is_none() {
        params.push((
            SearchField::Format.param().to_string(),
            DEFAULT_FORMAT.to_string(),
        ));
    }

    params
}

/// Runs a database search and returns every candidate across all pages.
///
/// Master entries are still part of the result; they are dropped before
/// enrichment.
pub async fn search<F: JsonFetch>(
    api: &mut Discogs<F>,
    criteria: &SearchCriteria,
    pb: &ProgressBar,
) -> Res<Vec<CandidateRecord>> {
    let url = format!("{base}/database/search", base = api.base_url());
    let params = search_params(criteria);

    pb.set_message("Searching the catalog...");
    let first = api.get_json(&url, &params, Credentials::Attach).await?;
    let envelope = PaginationEnvelope::from_value(&url, first, SEARCH_RESULTS_KEY)?;

    let records = pagination::drain(api, envelope, SEARCH_RESULTS_KEY, pb).await?;
    pagination::records_as(&url, records)
}
