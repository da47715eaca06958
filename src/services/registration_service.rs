use tracing::{info, warn};

use crate::database::ActivityDirectory;
use crate::error::RegistrationError;
use crate::models::{ActivityMap, MessageResponse};

pub async fn list_activities(directory: &ActivityDirectory) -> ActivityMap {
    directory.snapshot().await
}

/// Adds `email` to the activity's roster. Capacity is not checked.
pub async fn signup(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<MessageResponse, RegistrationError> {
    match directory.append_participant(activity_name, email).await {
        Ok(()) => {
            info!(activity = %activity_name, email = %email, "signup accepted");
            Ok(MessageResponse {
                message: format!("Signed up {} for {}", email, activity_name),
            })
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, "signup rejected: {}", e);
            Err(e)
        }
    }
}

pub async fn unregister(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<MessageResponse, RegistrationError> {
    match directory.remove_participant(activity_name, email).await {
        Ok(()) => {
            info!(activity = %activity_name, email = %email, "unregister accepted");
            Ok(MessageResponse {
                message: format!("Unregistered {} from {}", email, activity_name),
            })
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, "unregister rejected: {}", e);
            Err(e)
        }
    }
}
