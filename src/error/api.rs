use thiserror::Error;

/// Failure of a single remote API call.
///
/// The retry layer treats `RateLimited` as a deferral rather than a failure:
/// it waits the suggested duration and tries again without consuming the
/// attempt budget. Every other variant is transient and counts toward it.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The server throttled the call. `retry_after_ms` is the suggested wait
    /// in milliseconds when the response carried one.
    #[error("rate limited by the remote API")]
    RateLimited { retry_after_ms: Option<u64> },

    /// Transport-level or decoding error from reqwest.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Non-success status that is not a rate limit.
    #[error("unexpected status {status} from {route}")]
    Status { status: u16, route: String },
}
