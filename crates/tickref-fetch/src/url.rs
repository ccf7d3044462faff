//! Tickers listing URL construction.

/// Base URL for the ticker reference listing.
pub const BASE_URL: &str = "https://api.polygon.io/v3/reference/tickers";

/// Builds the initial listing URL for a full fetch.
///
/// Fixed query parameters: stocks market, active tickers only, ascending
/// order by ticker symbol, with the requested page size and credential.
///
/// # Example
///
/// ```
/// use tickref_fetch::url::tickers_url;
///
/// let url = tickers_url("demo-key", 1000);
/// assert_eq!(
///     url,
///     "https://api.polygon.io/v3/reference/tickers?market=stocks&active=true&order=asc&limit=1000&sort=ticker&apiKey=demo-key"
/// );
/// ```
#[must_use]
pub fn tickers_url(api_key: &str, page_size: u32) -> String {
    format!(
        "{BASE_URL}?market=stocks&active=true&order=asc&limit={page_size}&sort=ticker&apiKey={api_key}"
    )
}

/// Appends the credential to a cursor URL returned by the API.
///
/// Cursor URLs carry the pagination state but not the credential, which must
/// be re-appended on every request.
///
/// # Example
///
/// ```
/// use tickref_fetch::url::with_api_key;
///
/// let url = with_api_key("https://api.polygon.io/v3/reference/tickers?cursor=abc", "demo-key");
/// assert_eq!(
///     url,
///     "https://api.polygon.io/v3/reference/tickers?cursor=abc&apiKey=demo-key"
/// );
/// ```
#[must_use]
pub fn with_api_key(next_url: &str, api_key: &str) -> String {
    format!("{next_url}&apiKey={api_key}")
}

/// Masks the credential value in a URL for log output.
///
/// # Example
///
/// ```
/// use tickref_fetch::url::redact_api_key;
///
/// let redacted = redact_api_key("https://example.com?apiKey=secret&cursor=abc");
/// assert_eq!(redacted, "https://example.com?apiKey=***&cursor=abc");
/// ```
#[must_use]
pub fn redact_api_key(url: &str) -> String {
    url.find("apiKey=").map_or_else(
        || url.to_string(),
        |start| {
            let value_start = start + "apiKey=".len();
            let value_end = url[value_start..]
                .find('&')
                .map_or(url.len(), |offset| value_start + offset);
            format!("{}***{}", &url[..value_start], &url[value_end..])
        },
    )
}
