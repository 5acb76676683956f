use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::error::Error;

/// Search fields understood by the catalog's database search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SearchField {
    Query,
    Title,
    Artist,
    Label,
    Genre,
    Style,
    Country,
    Year,
    Format,
    CatalogNumber,
    Barcode,
    Track,
    Submitter,
    Contributor,
    Type,
}

impl SearchField {
    pub const ALL: [SearchField; 15] = [
        SearchField::Query,
        SearchField::Title,
        SearchField::Artist,
        SearchField::Label,
        SearchField::Genre,
        SearchField::Style,
        SearchField::Country,
        SearchField::Year,
        SearchField::Format,
        SearchField::CatalogNumber,
        SearchField::Barcode,
        SearchField::Track,
        SearchField::Submitter,
        SearchField::Contributor,
        SearchField::Type,
    ];

    /// Name used on the command line and in `key=value` filters.
    pub fn name(&self) -> &'static str {
        match self {
            SearchField::Query => "query",
            SearchField::Title => "title",
            SearchField::Artist => "artist",
            SearchField::Label => "label",
            SearchField::Genre => "genre",
            SearchField::Style => "style",
            SearchField::Country => "country",
            SearchField::Year => "year",
            SearchField::Format => "format",
            SearchField::CatalogNumber => "catalog-number",
            SearchField::Barcode => "barcode",
            SearchField::Track => "track",
            SearchField::Submitter => "submitter",
            SearchField::Contributor => "contributor",
            SearchField::Type => "type",
        }
    }

    /// Query parameter sent to the search endpoint.
    pub fn param(&self) -> &'static str {
        match self {
            SearchField::Query => "q",
            SearchField::CatalogNumber => "catno",
            other => other.name(),
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        SearchField::ALL
            .into_iter()
            .find(|field| field.name() == normalized || field.param() == normalized)
            .ok_or_else(|| Error::UnknownSearchField(s.trim().to_string()))
    }
}

/// Criteria for one catalog search. Only fields holding a value are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    fields: BTreeMap<SearchField, String>,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds criteria from named pairs, rejecting names outside [`SearchField::ALL`].
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut criteria = Self::new();
        for (name, value) in pairs {
            criteria.set_named(name.as_ref(), Some(value.into()))?;
        }
        Ok(criteria)
    }

    /// Sets or clears a field. Blank values count as absent.
    pub fn set(&mut self, field: SearchField, value: Option<String>) -> &mut Self {
        match value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
            Some(value) => {
                self.fields.insert(field, value);
            }
            None => {
                self.fields.remove(&field);
            }
        }
        self
    }

    pub fn set_named(&mut self, name: &str, value: Option<String>) -> Result<&mut Self, Error> {
        let field: SearchField = name.parse()?;
        Ok(self.set(field, value))
    }

    pub fn get(&self, field: SearchField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SearchField, &str)> {
        self.fields.iter().map(|(field, value)| (*field, value.as_str()))
    }
}

/// One entry of a search result page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub id: u64,
    #[serde(default)]
    pub master_id: Option<u64>,
    #[serde(default)]
    pub title: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub resource_url: Option<String>,
}

impl CandidateRecord {
    /// Master entries carry their own id as `master_id` and have no rating.
    pub fn is_aggregate(&self) -> bool {
        self.master_id == Some(self.id)
    }

    pub fn is_eligible(&self) -> bool {
        !self.is_aggregate()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub pages: u64,
    #[serde(default)]
    pub urls: PageUrls,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PageUrls {
    #[serde(default)]
    pub next: Option<String>,
}

/// Body of the release detail endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DetailResponse {
    Error(ErrorEnvelope),
    Release(Box<ReleaseDetail>),
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseDetail {
    pub id: u64,
    #[serde(default)]
    pub artists_sort: Option<String>,
    #[serde(default)]
    pub artists: Vec<ArtistCredit>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub year: Option<u32>,
    #[serde(default)]
    pub community: Option<Community>,
    #[serde(default)]
    pub videos: Vec<Video>,
    #[serde(default)]
    pub uri: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistCredit {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Community {
    #[serde(default)]
    pub rating: Option<CommunityRating>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommunityRating {
    pub average: f64,
    #[serde(default)]
    pub count: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Video {
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub title: String,
}

/// Normalized detail record used for filtering and reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Release {
    pub id: u64,
    pub artist: String,
    pub title: String,
    pub country: Option<String>,
    pub year: Option<u32>,
    pub rating: Option<f64>,
    pub uri: String,
    pub has_videos: bool,
}

impl From<ReleaseDetail> for Release {
    fn from(detail: ReleaseDetail) -> Self {
        let artist = detail
            .artists_sort
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| {
                detail
                    .artists
                    .iter()
                    .map(|a| a.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            });

        // an average over zero votes is reported as 0 and means "unrated"
        let rating = detail
            .community
            .and_then(|c| c.rating)
            .filter(|r| r.count != Some(0))
            .map(|r| r.average);

        Release {
            id: detail.id,
            artist,
            title: detail.title,
            country: detail.country.filter(|c| !c.is_empty()),
            year: detail.year.filter(|y| *y > 0),
            rating,
            uri: detail.uri,
            has_videos: !detail.videos.is_empty(),
        }
    }
}

/// A detail fetch that was answered with an error message instead of a release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Identity {
    pub username: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CollectionItem {
    pub id: u64,
    #[serde(default)]
    pub basic_information: BasicInformation,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BasicInformation {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub styles: Vec<String>,
    #[serde(default)]
    pub genres: Vec<String>,
}

#[derive(Tabled)]
pub struct ReleaseTableRow {
    pub rating: String,
    pub artist: String,
    pub title: String,
    pub year: String,
    pub country: String,
    pub uri: String,
}
