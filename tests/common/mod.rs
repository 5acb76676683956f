//! Shared test helpers: an in-memory catalog and JSON builders.

use std::{collections::HashMap, sync::Mutex, time::Duration};

use async_trait::async_trait;
use serde_json::{Value, json};
use tokio::time::Instant;
use toprated::{
    Error, Res,
    discogs::{Credentials, Discogs, JsonFetch, RateLimiter},
};

#[allow(dead_code)]
pub const BASE_URL: &str = "https://api.test";

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub url: String,
    pub params: Vec<(String, String)>,
    pub credentials: Credentials,
    pub at: Instant,
}

/// Answers GET requests from a fixed URL → body table and records every call.
pub struct FakeCatalog {
    responses: HashMap<String, Value>,
    calls: Mutex<Vec<Call>>,
}

#[allow(dead_code)]
impl FakeCatalog {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with(mut self, url: impl Into<String>, body: Value) -> Self {
        self.responses.insert(url.into(), body);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn urls(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.url).collect()
    }
}

#[async_trait]
impl JsonFetch for FakeCatalog {
    fn base_url(&self) -> &str {
        BASE_URL
    }

    async fn get_json(
        &self,
        url: &str,
        params: &[(String, String)],
        credentials: Credentials,
    ) -> Res<Value> {
        self.calls.lock().unwrap().push(Call {
            url: url.to_string(),
            params: params.to_vec(),
            credentials,
            at: Instant::now(),
        });

        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| Error::malformed(url, "404 page not found"))
    }
}

#[allow(dead_code)]
pub fn api(catalog: FakeCatalog) -> Discogs<FakeCatalog> {
    api_with_interval(catalog, Duration::ZERO)
}

#[allow(dead_code)]
pub fn api_with_interval(catalog: FakeCatalog, interval: Duration) -> Discogs<FakeCatalog> {
    Discogs::new(catalog, RateLimiter::new(interval))
}

#[allow(dead_code)]
pub fn search_url() -> String {
    format!("{}/database/search", BASE_URL)
}

#[allow(dead_code)]
pub fn release_url(id: u64) -> String {
    format!("{}/releases/{}", BASE_URL, id)
}

#[allow(dead_code)]
pub fn page_url(page: u64) -> String {
    format!("{}/database/search?page={}&per_page=2", BASE_URL, page)
}

/// A page of `key` records with the given pagination block.
#[allow(dead_code)]
pub fn page(key: &str, records: Vec<Value>, pages: u64, next: Option<&str>) -> Value {
    let urls = match next {
        Some(next) => json!({ "next": next }),
        None => json!({}),
    };
    let mut body = json!({
        "pagination": { "page": 1, "pages": pages, "per_page": 2, "urls": urls }
    });
    body[key] = Value::Array(records);
    body
}

#[allow(dead_code)]
pub fn candidate(id: u64, master_id: Option<u64>) -> Value {
    let kind = if master_id == Some(id) { "master" } else { "release" };
    json!({
        "id": id,
        "master_id": master_id,
        "title": format!("Artist - Record {}", id),
        "type": kind,
        "resource_url": release_url(id)
    })
}

#[allow(dead_code)]
pub fn detail(id: u64, rating: Option<f64>, videos: usize) -> Value {
    let community = match rating {
        Some(average) => json!({ "rating": { "average": average, "count": 12 } }),
        None => json!({}),
    };
    let videos: Vec<Value> = (0..videos)
        .map(|i| json!({ "uri": format!("https://video.test/{}", i), "title": "clip" }))
        .collect();

    json!({
        "id": id,
        "artists_sort": "Artist",
        "artists": [{ "name": "Artist" }],
        "title": format!("Record {}", id),
        "country": "Germany",
        "year": 1995,
        "community": community,
        "videos": videos,
        "uri": format!("https://www.discogs.test/release/{}", id)
    })
}
