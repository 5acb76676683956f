//! # Discogs Integration Module
//!
//! This module is the remote API layer of toprated. It knows the catalog's
//! endpoints, its pagination envelope and its quota, and turns raw JSON into
//! the typed records defined in [`crate::types`].
//!
//! ## Architecture
//!
//! ```text
//! CLI Layer (search, styles)
//!          ↓
//! Discogs Integration Layer
//!     ├── Search       (database search, all pages)
//!     ├── Releases     (per-release detail, enrichment)
//!     ├── Collection   (identity, collection folder)
//!     └── Pagination   (follows `next` links)
//!          ↓
//! Discogs<F>  = JsonFetch + RateLimiter
//!          ↓
//! HttpJsonClient (reqwest, JSON)
//! ```
//!
//! ## Request Discipline
//!
//! Every request goes through [`Discogs::get_json`], which waits on the
//! [`RateLimiter`] before handing the call to the underlying [`JsonFetch`].
//! Requests are strictly sequential: a stage awaits each response before it
//! builds the next request, and there is no retry. A transport error or an
//! unreadable body ends the run; the only failure handled locally is a
//! release detail answered with an error message, which
//! [`releases::enrich`] records as a notice and skips.
//!
//! ## Credentials
//!
//! The personal access token is sent as a `token` query parameter on fresh
//! requests ([`Credentials::Attach`]). Links from a pagination block already
//! contain the full query of the original request and are fetched with
//! [`Credentials::Suppress`].
//!
//! ## API Coverage
//!
//! - `GET /database/search` - Catalog search, paginated under `results`
//! - `GET /releases/{id}` - Release detail including community rating
//! - `GET /oauth/identity` - Username for the token
//! - `GET /users/{username}/collection/folders/0/releases` - Collection, paginated under `releases`

pub mod client;
pub mod collection;
pub mod pagination;
pub mod rate_limit;
pub mod releases;
pub mod search;

pub use client::{ClientConfig, Credentials, Discogs, HttpJsonClient, JsonFetch};
pub use rate_limit::RateLimiter;
