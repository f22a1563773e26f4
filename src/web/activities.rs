use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use tracing::{info, warn};

use super::error::ApiError;
use super::AppState;
use crate::models::{Directory, MessageBody};

/// Raw query pairs; a repeated key keeps its last value.
type QueryPairs = Vec<(String, String)>;

fn last_value(pairs: QueryPairs, key: &str) -> Option<String> {
    pairs.into_iter().rev().find(|(k, _)| k == key).map(|(_, v)| v)
}

pub(crate) async fn list_activities(State(state): State<AppState>) -> Json<Directory> {
    Json(state.directory.list())
}

pub(crate) async fn sign_up(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<MessageBody>, ApiError> {
    let Path(activity_name) = path?;
    let Query(pairs) = query?;
    let email = last_value(pairs, "email").ok_or(ApiError::MissingParameter("email"))?;

    if let Err(e) = state.directory.sign_up(&activity_name, &email) {
        warn!("Signup of {} for {} rejected: {}", email, activity_name, e);
        return Err(e.into());
    }

    info!("Signed up {} for {}", email, activity_name);
    Ok(Json(MessageBody {
        message: format!("Signed up {email} for {activity_name}"),
    }))
}

pub(crate) async fn unregister(
    State(state): State<AppState>,
    path: Result<Path<(String, String)>, PathRejection>,
) -> Result<Json<MessageBody>, ApiError> {
    let Path((activity_name, email)) = path?;
    if let Err(e) = state.directory.unregister(&activity_name, &email) {
        warn!("Removal of {} from {} rejected: {}", email, activity_name, e);
        return Err(e.into());
    }

    info!("Removed {} from {}", email, activity_name);
    Ok(Json(MessageBody {
        message: format!("Removed {email} from {activity_name}"),
    }))
}
