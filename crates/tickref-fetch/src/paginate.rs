//! Cursor-driven pagination with bounded exponential backoff.
//!
//! The pagination loop is modeled as an explicit state machine so that
//! backoff and termination behavior are testable without a network:
//! [`classify_page`] turns one raw response into a [`PageAction`], and
//! [`FetchSession::apply`] folds the action into the session state, yielding
//! the next [`Step`]. [`fetch_all`] drives the machine over HTTP.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tickref_types::TickerRecord;
use tracing::{debug, info, warn};

use crate::client::{ApiClient, ClientConfig};
use crate::url;

/// Error-message fragment the API uses to report per-minute rate limiting.
const RATE_LIMIT_PHRASE: &str = "exceeded the maximum requests per minute";

/// Errors that can occur while fetching the ticker listing.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-level HTTP failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Consecutive rate-limit responses exhausted the retry budget.
    #[error("rate limited: exceeded {retries} retries")]
    RateLimitExceeded {
        /// The retry ceiling that was exhausted.
        retries: u32,
    },

    /// The API reported a non-recoverable error.
    #[error("API error: {message}")]
    Api {
        /// Error payload reported upstream.
        message: String,
    },
}

/// One page of the paginated tickers listing, as returned by the API.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TickersPage {
    /// Response status field (`OK` or `ERROR`).
    pub status: Option<String>,
    /// Error payload, present when `status` is `ERROR`.
    pub error: Option<String>,
    /// Ticker records for this page.
    pub results: Option<Vec<TickerRecord>>,
    /// Opaque cursor URL for the next page.
    pub next_url: Option<String>,
}

/// What the session should do with one classified response.
#[derive(Debug)]
pub enum PageAction {
    /// A successful page: append the records, follow the cursor if present.
    Page {
        /// Records contributed by this page.
        results: Vec<TickerRecord>,
        /// Cursor for the next page, absent on the last page.
        next_url: Option<String>,
    },
    /// Parseable response without records: the listing is exhausted, or the
    /// upstream answered anomalously on the first page.
    MissingResults {
        /// Raw body, logged when nothing has been accumulated yet.
        body: String,
    },
    /// The API reported rate limiting; the same URL should be retried.
    RateLimited {
        /// Error payload reported upstream.
        message: String,
    },
    /// The API reported a non-recoverable error.
    Failed {
        /// Error payload reported upstream.
        message: String,
    },
    /// The body was not parseable; pagination truncates.
    Malformed {
        /// Raw body for the log.
        body: String,
    },
}

/// Classifies one raw page response.
///
/// Failure responses (non-2xx status, or an explicit `ERROR` status field)
/// carry the `error` payload when present, falling back to the raw body.
/// Rate limiting is recognized by HTTP 429 or by the error message. A page
/// whose `results` is absent or empty classifies as [`PageAction::MissingResults`].
#[must_use]
pub fn classify_page(status: u16, body: &str) -> PageAction {
    let Ok(page) = serde_json::from_str::<TickersPage>(body) else {
        return PageAction::Malformed {
            body: body.to_string(),
        };
    };

    if !(200..300).contains(&status) || page.status.as_deref() == Some("ERROR") {
        let message = page.error.unwrap_or_else(|| body.to_string());
        if status == 429 || message.to_lowercase().contains(RATE_LIMIT_PHRASE) {
            return PageAction::RateLimited { message };
        }
        return PageAction::Failed { message };
    }

    match page.results {
        Some(results) if !results.is_empty() => PageAction::Page {
            results,
            next_url: page.next_url,
        },
        _ => PageAction::MissingResults {
            body: body.to_string(),
        },
    }
}

/// Computes the backoff delay for the given retry count.
///
/// Exponential in whole seconds, capped at `max`: `min(max, 2^retries)`.
#[must_use]
pub fn backoff_delay(retries: u32, max: Duration) -> Duration {
    Duration::from_secs(2u64.saturating_pow(retries)).min(max)
}

/// The next step the pagination driver should take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Request this URL after observing `delay`.
    Request {
        /// Fully credentialed URL to request.
        url: String,
        /// Pacing or backoff delay to observe first.
        delay: Duration,
    },
    /// Pagination has terminated.
    Done,
}

/// Transient state for one full listing fetch.
///
/// The record accumulator only grows during a session; re-running the job
/// always starts a fresh session.
pub struct FetchSession {
    records: Vec<TickerRecord>,
    retries: u32,
    api_key: String,
    max_retries: u32,
    page_pause: Duration,
    max_backoff: Duration,
}

impl std::fmt::Debug for FetchSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchSession")
            .field("records", &self.records.len())
            .field("retries", &self.retries)
            .field("max_retries", &self.max_retries)
            .finish_non_exhaustive()
    }
}

impl FetchSession {
    /// Creates a session for one full fetch.
    #[must_use]
    pub fn new(config: &ClientConfig, api_key: &str) -> Self {
        Self {
            records: Vec::new(),
            retries: 0,
            api_key: api_key.to_string(),
            max_retries: config.max_retries,
            page_pause: config.page_pause,
            max_backoff: config.max_backoff,
        }
    }

    /// Returns the initial step: request the first page immediately.
    #[must_use]
    pub fn start(&self, page_size: u32) -> Step {
        Step::Request {
            url: url::tickers_url(&self.api_key, page_size),
            delay: Duration::ZERO,
        }
    }

    /// Number of records accumulated so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true when nothing has been accumulated yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consumes the session, yielding the accumulated records.
    #[must_use]
    pub fn into_records(self) -> Vec<TickerRecord> {
        self.records
    }

    /// Folds one classified response into the session.
    ///
    /// `url` is the URL the response came from; rate-limited pages retry it
    /// verbatim rather than advancing the cursor.
    ///
    /// # Errors
    ///
    /// [`FetchError::RateLimitExceeded`] once consecutive rate-limit
    /// responses exceed the retry ceiling; [`FetchError::Api`] for any other
    /// upstream-reported error.
    pub fn apply(&mut self, url: &str, action: PageAction) -> Result<Step, FetchError> {
        match action {
            PageAction::Page { results, next_url } => {
                self.retries = 0;
                debug!(page_records = results.len(), "page received");
                self.records.extend(results);
                match next_url {
                    Some(next) => Ok(Step::Request {
                        url: url::with_api_key(&next, &self.api_key),
                        delay: self.page_pause,
                    }),
                    None => Ok(Step::Done),
                }
            }
            PageAction::MissingResults { body } => {
                if self.records.is_empty() {
                    warn!(%body, "no results in response");
                }
                Ok(Step::Done)
            }
            PageAction::RateLimited { message } => {
                self.retries += 1;
                if self.retries > self.max_retries {
                    return Err(FetchError::RateLimitExceeded {
                        retries: self.max_retries,
                    });
                }
                let delay = backoff_delay(self.retries, self.max_backoff);
                warn!(
                    retry = self.retries,
                    max_retries = self.max_retries,
                    delay_secs = delay.as_secs(),
                    %message,
                    "rate limited, backing off"
                );
                Ok(Step::Request {
                    url: url.to_string(),
                    delay,
                })
            }
            PageAction::Failed { message } => Err(FetchError::Api { message }),
            PageAction::Malformed { body } => {
                warn!(%body, "response was not valid JSON, stopping pagination");
                Ok(Step::Done)
            }
        }
    }
}

/// Fetches the complete ticker listing, following cursors until exhausted.
///
/// Pages are requested strictly in sequence with a pacing delay between
/// them; rate-limit responses retry the same URL with bounded exponential
/// backoff. A malformed response truncates pagination and returns whatever
/// was accumulated.
///
/// # Errors
///
/// [`FetchError::Http`] on transport failures,
/// [`FetchError::RateLimitExceeded`] when consecutive rate-limit responses
/// exceed the configured ceiling, and [`FetchError::Api`] for any other
/// upstream-reported error.
pub async fn fetch_all(client: &ApiClient, api_key: &str) -> Result<Vec<TickerRecord>, FetchError> {
    let config = client.config();
    let mut session = FetchSession::new(config, api_key);
    let mut step = session.start(config.page_size);

    while let Step::Request { url, delay } = step {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        info!(url = %url::redact_api_key(&url), "requesting tickers page");
        let response = client.get_page(&url).await?;
        step = session.apply(&url, classify_page(response.status, &response.body))?;
    }

    info!(records = session.len(), "fetch complete");
    Ok(session.into_records())
}
