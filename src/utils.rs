use std::{cmp::Ordering, collections::HashMap};

use crate::types::{CollectionItem, Release, ReleaseTableRow};

/// Surviving releases after each filter step, with the count after every step.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome {
    pub releases: Vec<Release>,
    /// Releases left after the rating filter.
    pub rated: usize,
    /// Releases left after the video filter, when it was applied.
    pub without_videos: Option<usize>,
}

/// Strictly above `min_rating`. An unknown rating never passes.
pub fn rated_above(release: &Release, min_rating: f64) -> bool {
    matches!(release.rating, Some(rating) if rating > min_rating)
}

pub fn filter_releases(
    releases: Vec<Release>,
    min_rating: f64,
    exclude_with_videos: bool,
) -> FilterOutcome {
    let releases: Vec<Release> = releases
        .into_iter()
        .filter(|r| rated_above(r, min_rating))
        .collect();
    let rated = releases.len();

    if !exclude_with_videos {
        return FilterOutcome {
            releases,
            rated,
            without_videos: None,
        };
    }

    let releases: Vec<Release> = releases.into_iter().filter(|r| !r.has_videos).collect();
    FilterOutcome {
        without_videos: Some(releases.len()),
        releases,
        rated,
    }
}

/// Highest rating first. Equal ratings keep their relative order.
pub fn sort_by_rating(releases: &mut [Release]) {
    releases.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal));
}

/// Distinct values ordered by how often they occur, most frequent first.
/// Ties keep the order of first appearance.
pub fn unique_by_frequency<I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for value in values {
        let count = counts.entry(value.clone()).or_insert(0);
        if *count == 0 {
            order.push(value);
        }
        *count += 1;
    }

    order.sort_by(|a, b| counts[b].cmp(&counts[a]));
    order
}

/// Lowercased styles of a collection, most used first.
pub fn collection_styles(items: &[CollectionItem]) -> Vec<String> {
    unique_by_frequency(
        items
            .iter()
            .flat_map(|item| item.basic_information.styles.iter())
            .map(|style| style.trim().to_lowercase())
            .filter(|style| !style.is_empty()),
    )
}

/// clap value parser for `--filter key=value`.
pub fn parse_filter_pair(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid filter '{}': expected key=value", s))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(format!("invalid filter '{}': key cannot be empty", s));
    }

    Ok((key.to_string(), value.trim().to_string()))
}

pub fn format_rating(rating: Option<f64>) -> String {
    match rating {
        Some(rating) => format!("{:.2}", rating),
        None => "-".to_string(),
    }
}

pub fn release_table_rows(releases: &[Release]) -> Vec<ReleaseTableRow> {
    releases
        .iter()
        .map(|r| ReleaseTableRow {
            rating: format_rating(r.rating),
            artist: r.artist.clone(),
            title: r.title.clone(),
            year: r.year.map(|y| y.to_string()).unwrap_or_default(),
            country: r.country.clone().unwrap_or_default(),
            uri: r.uri.clone(),
        })
        .collect()
}
