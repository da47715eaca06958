use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;

use crate::models::{Activity, ActivityMap};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid seed JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("activity {activity:?} lists {email} more than once")]
    DuplicateParticipant { activity: String, email: String },
}

/// The activities the school starts every term with.
pub fn default_activities() -> ActivityMap {
    let mut activities = ActivityMap::new();
    activities.insert(
        "Chess Club".to_string(),
        Activity::new(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
        )
        .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
    );
    activities.insert(
        "Programming Class".to_string(),
        Activity::new(
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
        )
        .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
    );
    activities.insert(
        "Gym Class".to_string(),
        Activity::new(
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
        )
        .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
    );
    activities
}

/// Reads a seed in the same JSON shape `GET /activities` returns.
pub fn load_seed_file(path: &Path) -> Result<ActivityMap, SeedError> {
    let display = path.display().to_string();
    let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: display.clone(),
        source,
    })?;
    let activities: ActivityMap =
        serde_json::from_str(&raw).map_err(|source| SeedError::Json {
            path: display,
            source,
        })?;
    validate(&activities)?;
    Ok(activities)
}

fn validate(activities: &ActivityMap) -> Result<(), SeedError> {
    for (name, activity) in activities {
        let mut seen = HashSet::new();
        for email in &activity.participants {
            if !seen.insert(email.as_str()) {
                return Err(SeedError::DuplicateParticipant {
                    activity: name.clone(),
                    email: email.clone(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_seed_keeps_order() {
        let names: Vec<_> = default_activities().keys().cloned().collect();
        assert_eq!(names, ["Chess Club", "Programming Class", "Gym Class"]);
    }

    #[test]
    fn default_seed_is_valid() {
        assert!(validate(&default_activities()).is_ok());
    }

    #[test]
    fn loads_seed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"Debate Team": {{"description": "Argue", "schedule": "Thursdays", "max_participants": 10}}}}"#
        )
        .unwrap();

        let activities = load_seed_file(file.path()).unwrap();
        let debate = &activities["Debate Team"];
        assert_eq!(debate.max_participants, 10);
        assert!(debate.participants.is_empty());
    }

    #[test]
    fn rejects_duplicate_participants() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"Art": {{"description": "Paint", "schedule": "Tue", "max_participants": 5, "participants": ["a@x.edu", "a@x.edu"]}}}}"#
        )
        .unwrap();

        let err = load_seed_file(file.path()).unwrap_err();
        assert!(matches!(err, SeedError::DuplicateParticipant { .. }));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_seed_file(Path::new("/nonexistent/seed.json")).unwrap_err();
        assert!(matches!(err, SeedError::Io { .. }));
    }
}
