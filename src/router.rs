//! Axum adapter for the contact endpoint.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};

use crate::contact::{ContactSubmission, SubmitResponse};
use crate::error::ContactError;
use crate::service::ContactService;

/// Shared state for routes.
#[derive(Clone)]
struct AppState {
    service: Arc<ContactService>,
}

/// Create a router exposing `POST /api/contact`.
///
/// Mount it into an existing app, or serve it directly:
///
/// ```rust,ignore
/// let service = Arc::new(ContactService::new(DeliveryConfig::from_env()));
/// let app = contact_router(service);
/// axum::serve(listener, app).await?;
/// ```
pub fn contact_router(service: Arc<ContactService>) -> Router {
    Router::new()
        .route("/api/contact", post(submit))
        .with_state(AppState { service })
}

/// POST /api/contact - run one submission through the pipeline.
///
/// Bodies the extractor cannot parse still get the endpoint's JSON
/// shape back, with the parser detail kept to the logs.
async fn submit(
    State(state): State<AppState>,
    submission: Result<Json<ContactSubmission>, JsonRejection>,
) -> (StatusCode, Json<SubmitResponse>) {
    let Json(submission) = match submission {
        Ok(json) => json,
        Err(rejection) => {
            tracing::error!(error = %rejection, "Rejected unreadable contact request body");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SubmitResponse::from(ContactError::DeliveryFailed)),
            );
        }
    };

    match state.service.handle(&submission).await {
        Ok(()) => (StatusCode::OK, Json(SubmitResponse::success())),
        Err(e) => {
            let status =
                StatusCode::from_u16(e.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, Json(SubmitResponse::from(e)))
        }
    }
}
