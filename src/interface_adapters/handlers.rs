use crate::domain::errors::LocationError;
use crate::domain::token::is_well_formed_token;
use crate::interface_adapters::protocol::{
    DebugListResponse, ErrorResponse, GenerateLinkResponse, LocationResultResponse,
    LocationSubmission, ShareQuery,
};
use crate::interface_adapters::share_page::render_share_page;
use crate::interface_adapters::state::AppState;
use crate::use_cases::{
    FetchResultUseCase, IssueLinkUseCase, ListRecordsUseCase, SubmitLocationUseCase,
};
use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode, header},
    response::Html,
};
use std::sync::Arc;
use tracing::Instrument;

type ApiError = (StatusCode, Json<ErrorResponse>);

// Handler for minting a new share token.
#[tracing::instrument(name = "generate_link", skip_all)]
pub async fn generate_link(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Json<GenerateLinkResponse> {
    let base_url = resolve_base_url(&state, &headers);
    let use_case = IssueLinkUseCase {
        tokens: state.tokens.as_ref(),
        base_url: &base_url,
    };

    let issued = use_case.execute();
    tracing::info!(token = %issued.token, "share link issued");

    Json(GenerateLinkResponse {
        share_link: issued.share_link,
        result_link: issued.result_link,
        user_id: issued.token,
    })
}

// Handler for the HTML page that collects the reading.
pub async fn share_page(Query(query): Query<ShareQuery>) -> Result<Html<String>, ApiError> {
    let token = query
        .id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| error_response(StatusCode::BAD_REQUEST, "id is required"))?;

    if !is_well_formed_token(&token) {
        return Err(error_response(StatusCode::BAD_REQUEST, "invalid id"));
    }

    Ok(Html(render_share_page(&token)))
}

// Handler for a posted reading. Geocoding failures never reach the client.
#[tracing::instrument(name = "submit_location", skip_all, fields(token = %token))]
pub async fn submit_location(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
    payload: Result<Json<LocationSubmission>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(submission) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "rejected location body");
        error_response(
            StatusCode::BAD_REQUEST,
            &format!("invalid request body: {}", rejection.body_text()),
        )
    })?;

    let coordinates = submission.coordinates();
    let device = submission.device();
    let store = state.store.clone();
    let geocoder = state.geocoder.clone();

    // Run detached so a client hanging up cannot cancel the lookup or the write.
    let submission_task = tokio::spawn(
        async move {
            let use_case = SubmitLocationUseCase {
                store: store.as_ref(),
                geocoder: geocoder.as_ref(),
            };
            use_case.execute(&token, coordinates, device).await
        }
        .in_current_span(),
    );

    let record = submission_task
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "location submission task failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "failed to store location")
        })?
        .map_err(map_location_error)?;

    tracing::info!(resolved = !record.address.is_empty(), "location stored");
    Ok(StatusCode::OK)
}

// Handler for fetching the stored reading.
#[tracing::instrument(name = "fetch_result", skip_all, fields(token = %token))]
pub async fn fetch_result(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
) -> Result<Json<LocationResultResponse>, ApiError> {
    let use_case = FetchResultUseCase {
        store: state.store.as_ref(),
    };

    let record = use_case.execute(&token).await.map_err(map_location_error)?;

    Ok(Json(record.into()))
}

// Handler dumping the whole store. Unauthenticated.
pub async fn debug_list(State(state): State<Arc<AppState>>) -> Json<DebugListResponse> {
    let use_case = ListRecordsUseCase {
        store: state.store.as_ref(),
    };

    Json(use_case.execute().await.into())
}

// Configured origin first, then the request's Host header, then the listen address.
fn resolve_base_url(state: &AppState, headers: &HeaderMap) -> String {
    if let Some(base_url) = &state.public_base_url {
        return base_url.clone();
    }

    headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .filter(|host| !host.is_empty())
        .map(|host| format!("http://{host}"))
        .unwrap_or_else(|| state.fallback_base_url.clone())
}

// Helper to build a JSON error response.
fn error_response(status: StatusCode, message: &str) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

fn map_location_error(err: LocationError) -> ApiError {
    match err {
        LocationError::InvalidToken => error_response(StatusCode::BAD_REQUEST, "token is required"),
        LocationError::InvalidCoordinates => error_response(
            StatusCode::BAD_REQUEST,
            "latitude must be within [-90, 90], longitude within [-180, 180], accuracy non-negative",
        ),
        LocationError::NotFound => error_response(StatusCode::NOT_FOUND, "location not found"),
    }
}
