//! # CLI Module
//!
//! User-facing commands of toprated. Each command wires the configuration,
//! the Discogs layer and the local style list together, shows progress while
//! requests are running and prints the outcome with the status macros.
//!
//! ## Commands
//!
//! - [`search`] - Searches the catalog, fetches the detail of every release
//!   found, keeps those rated above a threshold and prints them best first
//! - [`list_styles`] - Prints the stored style list
//! - [`update_styles`] - Rebuilds the style list from the user's collection
//!
//! ## Data Flow of a Search
//!
//! ```text
//! SearchCriteria
//!     ↓  discogs::search        (all result pages)
//! CandidateRecord[]
//!     ↓  discogs::releases      (one throttled detail request each, masters skipped)
//! Release[]
//!     ↓  utils::filter_releases (rating > min, optionally no videos)
//!     ↓  utils::sort_by_rating  (stable, best first)
//! table
//! ```
//!
//! ## Usage
//!
//! ```bash
//! toprated styles update
//! toprated search --style techno --country Germany --year 1995
//! toprated search --style "deep house" --min-rating 4.5 --no-videos
//! toprated search --filter label=Tresor --filter year=1993
//! ```
//!
//! ## Errors
//!
//! Commands return [`crate::Res`]; `main` prints any error and exits with a
//! non-zero code. An empty result is not an error and is reported as a
//! warning.

mod search;
mod styles;

pub use search::TopRated;
pub use search::find_top_rated;
pub use search::search;
pub use search::validate_criteria;
pub use styles::list_styles;
pub use styles::update_styles;
