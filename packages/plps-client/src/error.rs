pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything here is shown to the user as a failed search; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Transport(#[from] reqwest::Error),
	#[error("Search timed out after {timeout_ms} ms.")]
	Timeout { timeout_ms: u64 },
	#[error("Search rejected: {message}")]
	Rejected { message: String },
	#[error(transparent)]
	Decode(#[from] serde_json::Error),
	#[error("Widget config is missing {field}.")]
	MissingConfig { field: &'static str },
	#[error("Widget is no longer mounted.")]
	Unmounted,
}
