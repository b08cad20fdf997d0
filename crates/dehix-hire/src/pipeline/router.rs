use std::sync::Arc;

use axum::extract::{FromRequestParts, Path, State};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::decision::Decision;
use super::domain::{HireRequestDraft, HireRequestId, HireRequestUpdate, StatusPatch};
use super::error::PipelineError;
use super::invitation::Invitation;
use super::ledger::ConnectsLedger;
use super::lobby::LobbySeed;
use super::notification::NotificationSink;
use super::profiles::FreelancerProfileLookup;
use super::service::HirePipelineService;
use super::store::HireRequestStore;

/// Header carrying the authenticated business id, set by the auth gateway in
/// front of this service.
pub const BUSINESS_ID_HEADER: &str = "x-business-id";

/// Caller identity resolved from the gateway header.
pub struct BusinessIdentity(pub String);

#[axum::async_trait]
impl<St> FromRequestParts<St> for BusinessIdentity
where
    St: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &St) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(BUSINESS_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(|value| BusinessIdentity(value.to_string()))
            .ok_or_else(|| {
                let body = json!({
                    "code": "UNAUTHORIZED",
                    "message": format!("missing {BUSINESS_ID_HEADER} header"),
                });
                (StatusCode::UNAUTHORIZED, Json(body)).into_response()
            })
    }
}

#[derive(Debug, Serialize)]
struct DataBody<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct BookmarkPatch {
    bookmarked: bool,
}

/// Router builder exposing the business-scoped hire pipeline endpoints.
pub fn hire_router<S, L, N, F>(service: Arc<HirePipelineService<S, L, N, F>>) -> Router
where
    S: HireRequestStore + 'static,
    L: ConnectsLedger + 'static,
    N: NotificationSink + 'static,
    F: FreelancerProfileLookup + 'static,
{
    Router::new()
        .route(
            "/business/hire-dehixtalent",
            post(create_handler::<S, L, N, F>).get(list_handler::<S, L, N, F>),
        )
        .route(
            "/business/hire-dehixtalent/add_into_lobby",
            put(add_into_lobby_handler::<S, L, N, F>),
        )
        .route(
            "/business/hire-dehixtalent/bookmarked/:hire_dehixtalent_id",
            put(bookmark_handler::<S, L, N, F>),
        )
        .route(
            "/business/hire-dehixtalent/:hire_dehixtalent_id",
            put(update_handler::<S, L, N, F>)
                .delete(delete_handler::<S, L, N, F>)
                .patch(patch_status_handler::<S, L, N, F>),
        )
        .route(
            "/business/hire-dehixtalent/:hire_dehixtalent_id/invite",
            put(invite_handler::<S, L, N, F>),
        )
        .route(
            "/business/hire-dehixtalent/:hire_dehixtalent_id/select",
            put(select_handler::<S, L, N, F>),
        )
        .route(
            "/business/hire-dehixtalent/:hire_dehixtalent_id/reject",
            put(reject_handler::<S, L, N, F>),
        )
        .route(
            "/business/hire-dehixtalent/:hire_dehixtalent_id/in-lobby",
            get(in_lobby_handler::<S, L, N, F>),
        )
        .route(
            "/business/hire-dehixtalent/:hire_dehixtalent_id/invited",
            get(invited_handler::<S, L, N, F>),
        )
        .route(
            "/business/hire-dehixtalent/:hire_dehixtalent_id/selected",
            get(selected_handler::<S, L, N, F>),
        )
        .route(
            "/business/hire-dehixtalent/:hire_dehixtalent_id/rejected",
            get(rejected_handler::<S, L, N, F>),
        )
        .with_state(service)
}

pub(crate) async fn create_handler<S, L, N, F>(
    State(service): State<Arc<HirePipelineService<S, L, N, F>>>,
    identity: BusinessIdentity,
    Json(draft): Json<HireRequestDraft>,
) -> Result<Response, PipelineError>
where
    S: HireRequestStore + 'static,
    L: ConnectsLedger + 'static,
    N: NotificationSink + 'static,
    F: FreelancerProfileLookup + 'static,
{
    let request = service.create(&identity.0, draft)?;
    Ok((StatusCode::OK, Json(DataBody { data: request })).into_response())
}

pub(crate) async fn list_handler<S, L, N, F>(
    State(service): State<Arc<HirePipelineService<S, L, N, F>>>,
    identity: BusinessIdentity,
) -> Result<Response, PipelineError>
where
    S: HireRequestStore + 'static,
    L: ConnectsLedger + 'static,
    N: NotificationSink + 'static,
    F: FreelancerProfileLookup + 'static,
{
    let requests = service.list_for_business(&identity.0)?;
    Ok(Json(DataBody { data: requests }).into_response())
}

pub(crate) async fn update_handler<S, L, N, F>(
    State(service): State<Arc<HirePipelineService<S, L, N, F>>>,
    Path(hire_dehixtalent_id): Path<String>,
    Json(update): Json<HireRequestUpdate>,
) -> Result<Response, PipelineError>
where
    S: HireRequestStore + 'static,
    L: ConnectsLedger + 'static,
    N: NotificationSink + 'static,
    F: FreelancerProfileLookup + 'static,
{
    let id = HireRequestId(hire_dehixtalent_id);
    let request = service.update(&id, update)?;
    Ok(Json(DataBody { data: request }).into_response())
}

pub(crate) async fn delete_handler<S, L, N, F>(
    State(service): State<Arc<HirePipelineService<S, L, N, F>>>,
    Path(hire_dehixtalent_id): Path<String>,
) -> Result<Response, PipelineError>
where
    S: HireRequestStore + 'static,
    L: ConnectsLedger + 'static,
    N: NotificationSink + 'static,
    F: FreelancerProfileLookup + 'static,
{
    let id = HireRequestId(hire_dehixtalent_id);
    service.delete(&id)?;
    Ok(Json(json!({ "message": "hire request deleted" })).into_response())
}

pub(crate) async fn patch_status_handler<S, L, N, F>(
    State(service): State<Arc<HirePipelineService<S, L, N, F>>>,
    identity: BusinessIdentity,
    Path(hire_dehixtalent_id): Path<String>,
    Json(patch): Json<StatusPatch>,
) -> Result<Response, PipelineError>
where
    S: HireRequestStore + 'static,
    L: ConnectsLedger + 'static,
    N: NotificationSink + 'static,
    F: FreelancerProfileLookup + 'static,
{
    let id = HireRequestId(hire_dehixtalent_id);
    let request = service.patch_status(&identity.0, &id, patch)?;
    Ok(Json(DataBody { data: request }).into_response())
}

pub(crate) async fn bookmark_handler<S, L, N, F>(
    State(service): State<Arc<HirePipelineService<S, L, N, F>>>,
    identity: BusinessIdentity,
    Path(hire_dehixtalent_id): Path<String>,
    Json(patch): Json<BookmarkPatch>,
) -> Result<Response, PipelineError>
where
    S: HireRequestStore + 'static,
    L: ConnectsLedger + 'static,
    N: NotificationSink + 'static,
    F: FreelancerProfileLookup + 'static,
{
    let id = HireRequestId(hire_dehixtalent_id);
    let request = service.set_bookmarked(&identity.0, &id, patch.bookmarked)?;
    Ok(Json(DataBody { data: request }).into_response())
}

pub(crate) async fn add_into_lobby_handler<S, L, N, F>(
    State(service): State<Arc<HirePipelineService<S, L, N, F>>>,
    Json(seed): Json<LobbySeed>,
) -> Result<Response, PipelineError>
where
    S: HireRequestStore + 'static,
    L: ConnectsLedger + 'static,
    N: NotificationSink + 'static,
    F: FreelancerProfileLookup + 'static,
{
    let updated = service.add_to_lobby(&seed)?;
    Ok(Json(DataBody { data: updated }).into_response())
}

pub(crate) async fn invite_handler<S, L, N, F>(
    State(service): State<Arc<HirePipelineService<S, L, N, F>>>,
    Path(hire_dehixtalent_id): Path<String>,
    Json(invitation): Json<Invitation>,
) -> Result<Response, PipelineError>
where
    S: HireRequestStore + 'static,
    L: ConnectsLedger + 'static,
    N: NotificationSink + 'static,
    F: FreelancerProfileLookup + 'static,
{
    let id = HireRequestId(hire_dehixtalent_id);
    let request = service.invite(&id, invitation)?;
    Ok(Json(DataBody { data: request }).into_response())
}

pub(crate) async fn select_handler<S, L, N, F>(
    State(service): State<Arc<HirePipelineService<S, L, N, F>>>,
    Path(hire_dehixtalent_id): Path<String>,
    Json(decision): Json<Decision>,
) -> Result<Response, PipelineError>
where
    S: HireRequestStore + 'static,
    L: ConnectsLedger + 'static,
    N: NotificationSink + 'static,
    F: FreelancerProfileLookup + 'static,
{
    let id = HireRequestId(hire_dehixtalent_id);
    let request = service.select(&id, decision)?;
    Ok(Json(DataBody { data: request }).into_response())
}

pub(crate) async fn reject_handler<S, L, N, F>(
    State(service): State<Arc<HirePipelineService<S, L, N, F>>>,
    Path(hire_dehixtalent_id): Path<String>,
    Json(decision): Json<Decision>,
) -> Result<Response, PipelineError>
where
    S: HireRequestStore + 'static,
    L: ConnectsLedger + 'static,
    N: NotificationSink + 'static,
    F: FreelancerProfileLookup + 'static,
{
    let id = HireRequestId(hire_dehixtalent_id);
    let request = service.reject(&id, decision)?;
    Ok(Json(DataBody { data: request }).into_response())
}

pub(crate) async fn in_lobby_handler<S, L, N, F>(
    State(service): State<Arc<HirePipelineService<S, L, N, F>>>,
    Path(hire_dehixtalent_id): Path<String>,
) -> Result<Response, PipelineError>
where
    S: HireRequestStore + 'static,
    L: ConnectsLedger + 'static,
    N: NotificationSink + 'static,
    F: FreelancerProfileLookup + 'static,
{
    let id = HireRequestId(hire_dehixtalent_id);
    let profiles = service.lobby_profiles(&id)?;
    Ok(Json(DataBody { data: profiles }).into_response())
}

pub(crate) async fn invited_handler<S, L, N, F>(
    State(service): State<Arc<HirePipelineService<S, L, N, F>>>,
    Path(hire_dehixtalent_id): Path<String>,
) -> Result<Response, PipelineError>
where
    S: HireRequestStore + 'static,
    L: ConnectsLedger + 'static,
    N: NotificationSink + 'static,
    F: FreelancerProfileLookup + 'static,
{
    let id = HireRequestId(hire_dehixtalent_id);
    let profiles = service.invited_profiles(&id)?;
    Ok(Json(DataBody { data: profiles }).into_response())
}

pub(crate) async fn selected_handler<S, L, N, F>(
    State(service): State<Arc<HirePipelineService<S, L, N, F>>>,
    Path(hire_dehixtalent_id): Path<String>,
) -> Result<Response, PipelineError>
where
    S: HireRequestStore + 'static,
    L: ConnectsLedger + 'static,
    N: NotificationSink + 'static,
    F: FreelancerProfileLookup + 'static,
{
    let id = HireRequestId(hire_dehixtalent_id);
    let profiles = service.selected_profiles(&id)?;
    Ok(Json(DataBody { data: profiles }).into_response())
}

pub(crate) async fn rejected_handler<S, L, N, F>(
    State(service): State<Arc<HirePipelineService<S, L, N, F>>>,
    Path(hire_dehixtalent_id): Path<String>,
) -> Result<Response, PipelineError>
where
    S: HireRequestStore + 'static,
    L: ConnectsLedger + 'static,
    N: NotificationSink + 'static,
    F: FreelancerProfileLookup + 'static,
{
    let id = HireRequestId(hire_dehixtalent_id);
    let profiles = service.rejected_profiles(&id)?;
    Ok(Json(DataBody { data: profiles }).into_response())
}
