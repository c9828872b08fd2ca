use axum::{
	Form, Json, Router,
	extract::{State, rejection::FormRejection},
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::{get, post},
};
use serde::Serialize;

use crate::state::AppState;
use plps_service::{Error as ServiceError, SEARCH_ACTION, SearchForm, SearchResponse};

/// Path the widget posts to, kept compatible with CMS-hosted widgets.
pub const AJAX_PATH: &str = "/wp-admin/admin-ajax.php";

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route(AJAX_PATH, post(search))
		.route("/v1/search", post(search))
		.route("/v1/widget/config", get(widget_config))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn search(
	State(state): State<AppState>,
	form: Result<Form<SearchForm>, FormRejection>,
) -> Result<Json<Envelope<SearchResponse>>, ApiError> {
	let Form(form) = form?;
	let response = state.handler.handle(form).await?;

	Ok(Json(Envelope { success: true, data: response }))
}

async fn widget_config(State(state): State<AppState>) -> Json<WidgetConfigBody> {
	let widget = state.widget.as_ref();

	Json(WidgetConfigBody {
		ajax_url: widget.ajax_url.clone(),
		nonce: state.nonces.create(SEARCH_ACTION),
		limit: widget.limit,
		min_chars: widget.min_chars,
		placeholder: widget.placeholder.clone(),
	})
}

#[derive(Debug, Serialize)]
pub struct Envelope<T> {
	success: bool,
	data: T,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetConfigBody {
	ajax_url: String,
	nonce: String,
	limit: u32,
	min_chars: u32,
	placeholder: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	success: bool,
	message: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	message: String,
}
impl ApiError {
	fn new(status: StatusCode, message: impl Into<String>) -> Self {
		Self { status, message: message.into() }
	}
}
impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		match err {
			ServiceError::InvalidToken => Self::new(StatusCode::FORBIDDEN, "Invalid request."),
			ServiceError::UnknownAction { action } => {
				tracing::warn!(%action, "Rejected unknown action.");

				Self::new(StatusCode::BAD_REQUEST, "Unknown action.")
			},
			ServiceError::BackendUnavailable { message } => {
				tracing::error!(%message, "Catalog unavailable.");

				Self::new(StatusCode::BAD_REQUEST, "Product catalog unavailable.")
			},
		}
	}
}
impl From<FormRejection> for ApiError {
	fn from(err: FormRejection) -> Self {
		tracing::warn!(error = %err, "Rejected malformed search form.");

		Self::new(StatusCode::FORBIDDEN, "Invalid request.")
	}
}
impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		(self.status, Json(ErrorBody { success: false, message: self.message })).into_response()
	}
}
