use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};

use crate::database::ActivityDirectory;
use crate::error::ApiError;
use crate::models::{ActivityMap, EmailQuery, MessageResponse};
use crate::services::registration_service;

pub async fn activities_handler(State(directory): State<ActivityDirectory>) -> Json<ActivityMap> {
    Json(registration_service::list_activities(&directory).await)
}

fn required_email(query: Result<Query<EmailQuery>, QueryRejection>) -> Result<String, ApiError> {
    let Query(query) = query
        .map_err(|rejection| ApiError::InvalidQuery(rejection.body_text()))?;
    query
        .email()
        .map(str::to_string)
        .ok_or_else(|| ApiError::InvalidQuery("Missing query parameter: email".to_string()))
}

// `Path` percent-decodes, so "Chess%20Club" arrives as "Chess Club".
pub async fn signup_handler(
    Path(activity_name): Path<String>,
    State(directory): State<ActivityDirectory>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let email = required_email(query)?;
    let confirmation = registration_service::signup(&directory, &activity_name, &email).await?;
    Ok(Json(confirmation))
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    State(directory): State<ActivityDirectory>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let email = required_email(query)?;
    let confirmation =
        registration_service::unregister(&directory, &activity_name, &email).await?;
    Ok(Json(confirmation))
}
