use indicatif::ProgressBar;
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::Value;

use super::{Credentials, Discogs, JsonFetch};
use crate::{
    error::{Error, Res},
    types::Pagination,
};

/// One page of a paginated listing.
#[derive(Debug, Clone)]
pub struct PaginationEnvelope {
    pub records: Vec<Value>,
    pub pagination: Pagination,
}

impl PaginationEnvelope {
    /// Splits a raw page into its records (under `results_key`) and its
    /// pagination block.
    ///
    /// A missing or unreadable pagination block means "no further pages".
    /// A missing record list is a malformed response.
    pub fn from_value(url: &str, value: Value, results_key: &str) -> Res<Self> {
        let records = value
            .get(results_key)
            .and_then(Value::as_array)
            .cloned()
            .ok_or_else(|| Error::malformed(url, value.to_string()))?;

        let pagination = value
            .get("pagination")
            .and_then(|p| Pagination::deserialize(p).ok())
            .unwrap_or_default();

        Ok(Self {
            records,
            pagination,
        })
    }

    /// The only field that decides whether traversal continues.
    pub fn next_url(&self) -> Option<&str> {
        self.pagination
            .urls
            .next
            .as_deref()
            .filter(|url| !url.is_empty())
    }
}

/// Follows `next` links from `first_page` until none is left.
///
/// Records come back in page order, each page's records in the order the
/// catalog sent them; nothing is reordered or deduplicated. Follow-up pages
/// are fetched with [`Credentials::Suppress`] since their links already carry
/// the original query.
pub async fn drain<F: JsonFetch>(
    api: &mut Discogs<F>,
    first_page: PaginationEnvelope,
    results_key: &str,
    pb: &ProgressBar,
) -> Res<Vec<Value>> {
    let pages = first_page.pagination.pages.max(1);
    let mut next = first_page.next_url().map(str::to_string);
    let mut records = first_page.records;
    let mut page_number = 1;

    while let Some(url) = next {
        page_number += 1;
        pb.set_message(format!(
            "Fetching page {page}/{pages}...",
            page = page_number,
            pages = pages.max(page_number)
        ));

        let value = api.get_json(&url, &[], Credentials::Suppress).await?;
        let page = PaginationEnvelope::from_value(&url, value, results_key)?;

        next = page.next_url().map(str::to_string);
        records.extend(page.records);
    }

    Ok(records)
}

/// Maps raw records to a typed shape; a record that does not fit is malformed.
pub fn records_as<T: DeserializeOwned>(url: &str, records: Vec<Value>) -> Res<Vec<T>> {
    records
        .into_iter()
        .map(|record| T::deserialize(&record).map_err(|_| Error::malformed(url, record.to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn envelope_reads_next_link() {
        let page = json!({
            "pagination": {"pages": 3, "urls": {"next": "https://api.test/p2"}},
            "results": [{"id": 1}, {"id": 2}]
        });
        let envelope = PaginationEnvelope::from_value("u", page, "results").unwrap();
        assert_eq!(envelope.records.len(), 2);
        assert_eq!(envelope.pagination.pages, 3);
        assert_eq!(envelope.next_url(), Some("https://api.test/p2"));
    }

    #[test]
    fn envelope_treats_broken_pagination_as_last_page() {
        let page = json!({"pagination": "oops", "results": []});
        let envelope = PaginationEnvelope::from_value("u", page, "results").unwrap();
        assert_eq!(envelope.next_url(), None);

        let page = json!({"pagination": {"pages": 4, "urls": {"next": ""}}, "results": []});
        let envelope = PaginationEnvelope::from_value("u", page, "results").unwrap();
        assert_eq!(envelope.next_url(), None);
    }

    #[test]
    fn envelope_without_records_is_malformed() {
        let page = json!({"message": "You are making requests too quickly."});
        let err = PaginationEnvelope::from_value("https://api.test/s", page, "results").unwrap_err();
        assert!(matches!(err, Error::MalformedResponse { ref url, .. } if url == "https://api.test/s"));
    }
}
