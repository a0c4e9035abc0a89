use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use std::collections::BTreeMap;

use crate::error::{ApiError, ApiResult, RegistryError};
use crate::models::{Activity, MessageResponse};
use crate::services::ActivityRegistry;

type ActivityPath = Result<Path<String>, PathRejection>;
type RawQuery = Result<Query<Vec<(String, String)>>, QueryRejection>;

// A name that cannot be decoded can never match a registry key.
fn decode_activity_name(path: ActivityPath) -> ApiResult<String> {
    match path {
        Ok(Path(name)) => Ok(name),
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "activity path rejected");
            Err(RegistryError::ActivityNotFound {
                activity: String::new(),
            }
            .into())
        }
    }
}

/// Last `email` value wins when the key is repeated.
fn participant_email(query: RawQuery) -> ApiResult<String> {
    let pairs = match query {
        Ok(Query(pairs)) => pairs,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "participant query rejected");
            return Err(ApiError::Validation(
                "Query string could not be parsed".to_string(),
            ));
        }
    };

    pairs
        .into_iter()
        .rev()
        .find_map(|(key, value)| (key == "email").then_some(value))
        .ok_or_else(|| ApiError::Validation("Query parameter 'email' is required".to_string()))
}

pub async fn list_activities_handler(
    State(registry): State<ActivityRegistry>,
) -> Json<BTreeMap<String, Activity>> {
    Json(registry.list())
}

pub async fn signup_handler(
    path: ActivityPath,
    State(registry): State<ActivityRegistry>,
    query: RawQuery,
) -> ApiResult<Json<MessageResponse>> {
    let activity_name = decode_activity_name(path)?;
    let email = participant_email(query)?;
    let message = registry.signup(&activity_name, &email)?;
    Ok(Json(MessageResponse::new(message)))
}

pub async fn unregister_handler(
    path: ActivityPath,
    State(registry): State<ActivityRegistry>,
    query: RawQuery,
) -> ApiResult<Json<MessageResponse>> {
    let activity_name = decode_activity_name(path)?;
    let email = participant_email(query)?;
    let message = registry.unregister(&activity_name, &email)?;
    Ok(Json(MessageResponse::new(message)))
}
