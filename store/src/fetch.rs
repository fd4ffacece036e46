//! Remote map-code fetch.
//!
//! The codec itself is synchronous; fetching a remotely hosted code is the
//! one suspending operation around it. Every failure mode here — timeout,
//! connection error, non-success status, undecodable body — is presented the
//! same way a locally malformed string would be, so callers never branch on
//! "bad network" vs "bad code".

use std::fmt;
use std::time::Duration;

use tiles::Level;
use tracing::{debug, warn};

/// Upper bound on the whole fetch, connect included.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Why a remote fetch failed. All variants mean "invalid code" to the UI.
#[derive(Debug)]
pub enum FetchError {
    /// Request never produced a response (DNS, connect, timeout, body read).
    Network,

    /// Server answered with a non-success status.
    Status { code: u16 },

    /// Body arrived but the codec rejected it.
    Code(mapcode::MapCodeError),
}

impl FetchError {
    /// Always `true`: every fetch failure collapses to the same
    /// decode-failure outcome at the codec boundary.
    #[must_use]
    pub const fn is_invalid_code(&self) -> bool {
        true
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network => write!(f, "network failure fetching map code"),
            Self::Status { code } => write!(f, "server answered {code}"),
            Self::Code(err) => write!(f, "fetched body is not a map code: {err}"),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Code(err) => Some(err),
            _ => None,
        }
    }
}

/// Fetches a map code from `url` and decodes it.
///
/// The response body is trimmed before decoding, matching how pasted codes
/// are handled.
pub async fn fetch_map(url: &str) -> Result<Level, FetchError> {
    let client = reqwest::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(|err| {
            warn!(%err, "failed to build http client");
            FetchError::Network
        })?;

    let response = client.get(url).send().await.map_err(|err| {
        warn!(%err, url, "map code fetch failed");
        FetchError::Network
    })?;

    let status = response.status();
    if !status.is_success() {
        warn!(url, code = status.as_u16(), "map code fetch refused");
        return Err(FetchError::Status {
            code: status.as_u16(),
        });
    }

    let body = response.text().await.map_err(|err| {
        warn!(%err, url, "map code body read failed");
        FetchError::Network
    })?;

    debug!(url, bytes = body.len(), "fetched remote map code");
    mapcode::decode(body.trim()).map_err(FetchError::Code)
}
