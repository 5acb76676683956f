use indicatif::ProgressBar;
use serde::Deserialize;

use super::{Credentials, Discogs, JsonFetch};
use crate::{
    error::{Error, Res},
    types::{CandidateRecord, DetailResponse, Notice, Release},
};

/// Outcome of enriching a candidate list.
#[derive(Debug, Clone, Default)]
pub struct Enrichment {
    /// Releases in candidate order.
    pub releases: Vec<Release>,
    /// Candidates the catalog answered with an error message for.
    pub notices: Vec<Notice>,
}

/// Fetches the detail record of a single release.
pub async fn get_release<F: JsonFetch>(api: &mut Discogs<F>, id: u64) -> Res<DetailResponse> {
    let url = format!("{base}/releases/{id}", base = api.base_url(), id = id);
    let value = api.get_json(&url, &[], Credentials::Attach).await?;

    DetailResponse::deserialize(&value).map_err(|_| Error::malformed(&url, value.to_string()))
}

/// Fetches one detail record per eligible candidate, in input order.
///
/// Master entries are skipped before any request is made. A detail response
/// carrying an error message drops that candidate and is recorded as a
/// [`Notice`]; any other failure aborts the whole enrichment.
pub async fn enrich<F: JsonFetch>(
    api: &mut Discogs<F>,
    candidates: &[CandidateRecord],
    pb: &ProgressBar,
) -> Res<Enrichment> {
    let eligible: Vec<&CandidateRecord> = candidates.iter().filter(|c| c.is_eligible()).collect();
    let total = eligible.len();
    let mut enrichment = Enrichment::default();

    pb.set_length(total as u64);
    pb.set_position(0);

    for (index, candidate) in eligible.into_iter().enumerate() {
        pb.set_message(format!(
            "Fetching release {id} ({count}/{total})",
            id = candidate.id,
            count = index + 1,
            total = total
        ));

        match get_release(api, candidate.id).await? {
            DetailResponse::Release(detail) => enrichment.releases.push(Release::from(*detail)),
            DetailResponse::Error(envelope) => enrichment.notices.push(Notice {
                id: candidate.id,
                message: envelope.message,
            }),
        }

        pb.inc(1);
    }

    Ok(enrichment)
}
