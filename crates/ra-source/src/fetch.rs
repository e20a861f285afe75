//! The `PositionFetcher` seam between the poll loop and a concrete source.

use std::future::Future;

use crate::{PositionRecord, SourceResult};

/// One-shot position read, called once per poll tick.
///
/// Implementors should return promptly; a slow fetch delays the next tick
/// rather than overlapping with it.
pub trait PositionFetcher: Send + 'static {
    fn fetch(&mut self) -> impl Future<Output = SourceResult<PositionRecord>> + Send;
}

#[cfg(feature = "http")]
pub use http::HttpFetcher;

#[cfg(feature = "http")]
mod http {
    use std::time::Duration;

    use crate::{PositionFetcher, PositionRecord, SourceError, SourceResult};

    /// Reads `GET {base}/gpsdata` from the on-board GPS bridge.
    #[derive(Clone)]
    pub struct HttpFetcher {
        client: reqwest::Client,
        url:    String,
    }

    impl HttpFetcher {
        /// Default bridge address.
        pub const DEFAULT_BASE: &'static str = "http://localhost:5000";

        /// `timeout` bounds each request so a hung bridge cannot stall polling.
        pub fn new(base_url: &str, timeout: Duration) -> SourceResult<Self> {
            let client = reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .map_err(|e| SourceError::Fetch(e.to_string()))?;
            Ok(Self {
                client,
                url: format!("{}/gpsdata", base_url.trim_end_matches('/')),
            })
        }

        pub fn url(&self) -> &str {
            &self.url
        }
    }

    impl PositionFetcher for HttpFetcher {
        async fn fetch(&mut self) -> SourceResult<PositionRecord> {
            let resp = self
                .client
                .get(&self.url)
                .header("Content-Type", "application/json")
                .send()
                .await
                .map_err(|e| SourceError::Fetch(e.to_string()))?
                .error_for_status()
                .map_err(|e| SourceError::Fetch(e.to_string()))?;

            let body = resp.text().await.map_err(|e| SourceError::Fetch(e.to_string()))?;
            log::trace!("gps payload: {body}");
            PositionRecord::from_json(&body)
        }
    }
}
