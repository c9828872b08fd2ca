use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Sqlx(#[from] sqlx::Error),
	#[error("Failed to read catalog file at {path:?}.")]
	ReadCatalog { path: PathBuf, source: std::io::Error },
	#[error("Failed to parse catalog file at {path:?}.")]
	ParseCatalog { path: PathBuf, source: serde_json::Error },
}
