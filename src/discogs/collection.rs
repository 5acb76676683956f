use indicatif::ProgressBar;
use serde::Deserialize;

use super::{
    Credentials, Discogs, JsonFetch,
    pagination::{self, PaginationEnvelope},
};
use crate::{
    error::{Error, Res},
    types::{CollectionItem, Identity},
};

pub const COLLECTION_RESULTS_KEY: &str = "releases";

/// Username of the account the token belongs to.
pub async fn get_username<F: JsonFetch>(api: &mut Discogs<F>) -> Res<String> {
    let url = format!("{base}/oauth/identity", base = api.base_url());
    let value = api.get_json(&url, &[], Credentials::Attach).await?;

    Identity::deserialize(&value)
        .map(|identity| identity.username)
        .map_err(|_| Error::malformed(&url, value.to_string()))
}

/// Every release in the user's "All" collection folder.
pub async fn get_collection<F: JsonFetch>(
    api: &mut Discogs<F>,
    username: &str,
    pb: &ProgressBar,
) -> Res<Vec<CollectionItem>> {
    let url = format!(
        "{base}/users/{username}/collection/folders/0/releases",
        base = api.base_url(),
        username = username
    );

    pb.set_message(format!("Fetching collection of {username}..."));
    let first = api.get_json(&url, &[], Credentials::Attach).await?;
    let envelope = PaginationEnvelope::from_value(&url, first, COLLECTION_RESULTS_KEY)?;

    let records = pagination::drain(api, envelope, COLLECTION_RESULTS_KEY, pb).await?;
    pagination::records_as(&url, records)
}
