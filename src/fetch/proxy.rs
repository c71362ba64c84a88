//! Outbound fetch execution.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use reqwest::header::HeaderMap;
use reqwest::redirect;

use crate::config::FetchConfig;
use crate::fetch::types::{FetchError, ProxyResult};
use crate::observability::metrics;

/// Performs single GET requests on behalf of API clients.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct FetchProxy {
    client: reqwest::Client,
    max_content_chars: usize,
}

impl FetchProxy {
    /// Build the proxy and its HTTP client from config.
    ///
    /// `timeout_secs` bounds the whole exchange (connect, headers and body)
    /// and also caps the connect phase on its own. Redirects are followed up
    /// to `max_redirects` hops; zero disables following.
    pub fn new(config: &FetchConfig) -> Result<Self, reqwest::Error> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let policy = if config.max_redirects == 0 {
            redirect::Policy::none()
        } else {
            redirect::Policy::limited(config.max_redirects)
        };

        let mut builder = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .redirect(policy)
            .user_agent(config.user_agent.clone());
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }

        Ok(Self {
            client: builder.build()?,
            max_content_chars: config.max_content_chars,
        })
    }

    /// Fetch `target_url` and summarize the response.
    ///
    /// A missing or empty target fails with [`FetchError::MissingUrl`]
    /// without touching the network.
    pub async fn fetch(&self, target_url: Option<&str>) -> Result<ProxyResult, FetchError> {
        let target = match target_url {
            Some(url) if !url.is_empty() => url,
            _ => return Err(FetchError::MissingUrl),
        };

        let start_time = Instant::now();
        match self.execute(target).await {
            Ok(result) => {
                tracing::info!(
                    target = %target,
                    status = result.status_code,
                    elapsed_ms = start_time.elapsed().as_millis() as u64,
                    "Proxy fetch completed"
                );
                metrics::record_fetch("ok", start_time);
                Ok(result)
            }
            Err(e) => {
                tracing::warn!(
                    target = %target,
                    error = %e,
                    elapsed_ms = start_time.elapsed().as_millis() as u64,
                    "Proxy fetch failed"
                );
                metrics::record_fetch("error", start_time);
                Err(e)
            }
        }
    }

    async fn execute(&self, target: &str) -> Result<ProxyResult, FetchError> {
        let response = self
            .client
            .get(target)
            .send()
            .await
            .map_err(|e| FetchError::network(&e))?;

        let status_code = response.status().as_u16();
        let headers = flatten_headers(response.headers());
        let body = response.text().await.map_err(|e| FetchError::network(&e))?;

        Ok(ProxyResult {
            status_code,
            content: truncate_chars(&body, self.max_content_chars).to_string(),
            headers,
        })
    }
}

/// Returns at most the first `max_chars` characters of `text`.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Collapse a header map into one string per name.
///
/// Names come out lowercased. Repeated headers are joined with ", " in
/// arrival order. Non-UTF-8 bytes are replaced lossily.
pub fn flatten_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
    let mut flat = BTreeMap::new();
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        match flat.entry(name.as_str().to_string()) {
            Entry::Occupied(mut entry) => {
                let existing: &mut String = entry.get_mut();
                existing.push_str(", ");
                existing.push_str(&value);
            }
            Entry::Vacant(entry) => {
                entry.insert(value);
            }
        }
    }
    flat
}
