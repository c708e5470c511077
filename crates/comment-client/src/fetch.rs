//! Bounded single-attempt HTTP GET.

use std::time::Duration;

use url::Url;

use crate::SourceError;

const USER_AGENT: &str = concat!("comments-bot/", env!("CARGO_PKG_VERSION"));

/// Time limits applied to every request.
///
/// `connect` covers TCP connect and the TLS handshake, `transfer` is the
/// longest allowed gap between body reads, and `overall` is a hard cutoff
/// for the whole request including reading the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTimeouts {
    pub connect: Duration,
    pub transfer: Duration,
    pub overall: Duration,
}

impl Default for FetchTimeouts {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(5),
            transfer: Duration::from_secs(5),
            overall: Duration::from_secs(10),
        }
    }
}

/// Result of a fetch: the body, or why there is none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetched {
    Body(Vec<u8>),
    Empty(EmptyReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    Status(u16),
    Timeout,
    EmptyBody,
    Transport,
}

impl Fetched {
    pub fn into_body(self) -> Option<Vec<u8>> {
        match self {
            Fetched::Body(body) => Some(body),
            Fetched::Empty(_) => None,
        }
    }
}

impl From<&SourceError> for EmptyReason {
    fn from(err: &SourceError) -> Self {
        match err {
            SourceError::Status(status) => EmptyReason::Status(*status),
            SourceError::Timeout => EmptyReason::Timeout,
            SourceError::Http(e) if e.is_timeout() => EmptyReason::Timeout,
            SourceError::EmptyBody => EmptyReason::EmptyBody,
            _ => EmptyReason::Transport,
        }
    }
}

/// HTTP client shared by both comment sources.
#[derive(Debug, Clone)]
pub struct Fetcher {
    http: reqwest::Client,
    overall: Duration,
}

impl Fetcher {
    pub fn new(timeouts: FetchTimeouts) -> Result<Self, SourceError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(timeouts.connect)
            .read_timeout(timeouts.transfer)
            .build()?;
        Ok(Self {
            http,
            overall: timeouts.overall,
        })
    }

    /// GET `url` once. Every failure collapses into [`Fetched::Empty`].
    pub async fn fetch(&self, url: &Url) -> Fetched {
        match self.try_fetch(url).await {
            Ok(body) => {
                tracing::debug!(url = %url, bytes = body.len(), "Fetched comment page");
                Fetched::Body(body)
            }
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Comment source returned no data");
                Fetched::Empty(EmptyReason::from(&e))
            }
        }
    }

    async fn try_fetch(&self, url: &Url) -> Result<Vec<u8>, SourceError> {
        let request = async {
            let resp = self.http.get(url.clone()).send().await?;
            let status = resp.status();
            if !status.is_success() {
                return Err(SourceError::Status(status.as_u16()));
            }
            let body = resp.bytes().await?;
            Ok(body.to_vec())
        };

        let body = tokio::time::timeout(self.overall, request)
            .await
            .map_err(|_| SourceError::Timeout)??;

        if body.is_empty() {
            return Err(SourceError::EmptyBody);
        }
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn url(server: &MockServer, p: &str) -> Url {
        Url::parse(&format!("{}{p}", server.uri())).unwrap()
    }

    #[tokio::test]
    async fn success_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .respond_with(ResponseTemplate::new(200).set_body_string("hello"))
            .mount(&server)
            .await;

        let fetcher = Fetcher::new(FetchTimeouts::default()).unwrap();
        let got = fetcher.fetch(&url(&server, "/page")).await;
        assert_eq!(got, Fetched::Body(b"hello".to_vec()));
    }

    #[tokio::test]
    async fn server_error_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let fetcher = Fetcher::new(FetchTimeouts::default()).unwrap();
        let got = fetcher.fetch(&url(&server, "/page")).await;
        assert_eq!(got, Fetched::Empty(EmptyReason::Status(500)));
        assert_eq!(got.into_body(), None);
    }

    #[tokio::test]
    async fn empty_body_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let fetcher = Fetcher::new(FetchTimeouts::default()).unwrap();
        let got = fetcher.fetch(&url(&server, "/page")).await;
        assert_eq!(got, Fetched::Empty(EmptyReason::EmptyBody));
    }

    #[tokio::test]
    async fn slow_server_hits_hard_cutoff() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("late")
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let fetcher = Fetcher::new(FetchTimeouts {
            overall: Duration::from_millis(200),
            ..FetchTimeouts::default()
        })
        .unwrap();
        let started = std::time::Instant::now();
        let got = fetcher.fetch(&url(&server, "/page")).await;
        assert_eq!(got, Fetched::Empty(EmptyReason::Timeout));
        assert!(started.elapsed() < Duration::from_secs(2));
    }
}
