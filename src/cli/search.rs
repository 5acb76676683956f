use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    config,
    discogs::{Discogs, HttpJsonClient, JsonFetch, RateLimiter, releases, search as catalog},
    error::{Error, Res},
    info,
    management::StylesManager,
    success,
    types::{Notice, Release, SearchCriteria, SearchField},
    utils, warning,
};

/// Everything a search run produced, step by step.
#[derive(Debug, Clone)]
pub struct TopRated {
    /// Entries returned by the search, masters included.
    pub candidates: usize,
    /// Entries a detail request was made for.
    pub eligible: usize,
    pub notices: Vec<Notice>,
    /// Releases left after the rating filter.
    pub rated: usize,
    /// Releases left after the video filter, when it was applied.
    pub without_videos: Option<usize>,
    /// Final result, best rated first.
    pub releases: Vec<Release>,
}

/// Search, enrich, filter and sort.
pub async fn find_top_rated<F: JsonFetch>(
    api: &mut Discogs<F>,
    criteria: &SearchCriteria,
    min_rating: f64,
    exclude_with_videos: bool,
    pb: &ProgressBar,
) -> Res<TopRated> {
    let candidates = catalog::search(api, criteria, pb).await?;
    let eligible = candidates.iter().filter(|c| c.is_eligible()).count();

    let enrichment = releases::enrich(api, &candidates, pb).await?;
    let filtered = utils::filter_releases(enrichment.releases, min_rating, exclude_with_videos);

    let mut ranked = filtered.releases;
    utils::sort_by_rating(&mut ranked);

    Ok(TopRated {
        candidates: candidates.len(),
        eligible,
        notices: enrichment.notices,
        rated: filtered.rated,
        without_videos: filtered.without_videos,
        releases: ranked,
    })
}

/// Rejects empty criteria and styles missing from the stored style list.
pub async fn validate_criteria(criteria: &SearchCriteria) -> Res<()> {
    if criteria.is_empty() {
        return Err(Error::configuration(
            "Provide at least one search criterion, e.g. --style techno --country Germany --year 1995",
        ));
    }

    let Some(style) = criteria.get(SearchField::Style) else {
        return Ok(());
    };

    match StylesManager::load().await {
        Ok(styles) if !styles.is_empty() && !styles.contains(style) => Err(Error::configuration(
            format!(
                "Unknown style '{}'. Run toprated styles to list known styles.",
                style
            ),
        )),
        Ok(_) => Ok(()),
        Err(_) => {
            warning!("No stored style list, skipping style check. Run toprated styles update.");
            Ok(())
        }
    }
}

pub async fn search(criteria: SearchCriteria, min_rating: f64, exclude_with_videos: bool) -> Res<()> {
    validate_criteria(&criteria).await?;

    let client = HttpJsonClient::new(config::client_config()?)?;
    let mut api = Discogs::new(client, RateLimiter::new(config::request_interval()?));

    let pb = ProgressBar::new_spinner();
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .map_err(|e| Error::configuration(e.to_string()))?
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let result = find_top_rated(&mut api, &criteria, min_rating, exclude_with_videos, &pb).await;
    pb.finish_and_clear();
    let top = result?;

    info!(
        "{} results, {} releases after dropping master entries.",
        top.candidates, top.eligible
    );

    for notice in &top.notices {
        warning!("Skipped release {}: {}", notice.id, notice.message);
    }

    info!("{} releases rated above {:.2}.", top.rated, min_rating);
    if let Some(count) = top.without_videos {
        info!("{} of them without videos.", count);
    }

    if top.releases.is_empty() {
        warning!("No results, check your filters.");
        return Ok(());
    }

    let table = Table::new(utils::release_table_rows(&top.releases));
    println!("{}", table);
    success!("Found {} top rated releases.", top.releases.len());

    Ok(())
}
