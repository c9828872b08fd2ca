pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid request.")]
	InvalidToken,
	#[error("Unknown action: {action}.")]
	UnknownAction { action: String },
	#[error("Catalog unavailable: {message}")]
	BackendUnavailable { message: String },
}
impl From<plps_storage::Error> for Error {
	fn from(err: plps_storage::Error) -> Self {
		Self::BackendUnavailable { message: err.to_string() }
	}
}
