use std::sync::Arc;
use tokio::sync::Mutex;

use crate::error::RegistrationError;
use crate::models::{Activity, ActivityMap};

/// In-memory activity directory shared by all request handlers.
///
/// Built once at startup from a seed and handed to the router as state. Cloning
/// clones the `Arc`, so every clone sees the same roster. Activities are never
/// added or removed after construction; only participant lists change, and
/// each change runs its membership check and mutation under one lock.
#[derive(Clone, Debug, Default)]
pub struct ActivityDirectory {
    activities: Arc<Mutex<ActivityMap>>,
}

impl ActivityDirectory {
    pub fn new(activities: ActivityMap) -> Self {
        Self {
            activities: Arc::new(Mutex::new(activities)),
        }
    }

    pub async fn activity_count(&self) -> usize {
        self.activities.lock().await.len()
    }

    pub async fn lookup(&self, name: &str) -> Option<Activity> {
        self.activities.lock().await.get(name).cloned()
    }

    pub async fn snapshot(&self) -> ActivityMap {
        self.activities.lock().await.clone()
    }

    /// Appends `email` to the end of the activity's roster.
    pub async fn append_participant(
        &self,
        name: &str,
        email: &str,
    ) -> Result<(), RegistrationError> {
        let mut activities = self.activities.lock().await;
        let activity = activities
            .get_mut(name)
            .ok_or(RegistrationError::ActivityNotFound)?;
        if activity.is_registered(email) {
            return Err(RegistrationError::AlreadyRegistered);
        }
        activity.participants.push(email.to_string());
        Ok(())
    }

    /// Removes `email` from the roster, keeping the order of the others.
    pub async fn remove_participant(
        &self,
        name: &str,
        email: &str,
    ) -> Result<(), RegistrationError> {
        let mut activities = self.activities.lock().await;
        let activity = activities
            .get_mut(name)
            .ok_or(RegistrationError::ActivityNotFound)?;
        let Some(pos) = activity.participants.iter().position(|p| p == email) else {
            return Err(RegistrationError::NotRegistered);
        };
        activity.participants.remove(pos);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> ActivityDirectory {
        let mut map = ActivityMap::new();
        map.insert(
            "Chess Club".to_string(),
            Activity::new("Chess", "Fridays", 12).with_participants(["a@x.edu", "b@x.edu"]),
        );
        ActivityDirectory::new(map)
    }

    #[tokio::test]
    async fn remove_keeps_order_of_remaining() {
        let dir = directory();
        dir.append_participant("Chess Club", "c@x.edu").await.unwrap();
        dir.remove_participant("Chess Club", "a@x.edu").await.unwrap();

        let chess = dir.lookup("Chess Club").await.unwrap();
        assert_eq!(chess.participants, vec!["b@x.edu", "c@x.edu"]);
    }

    #[tokio::test]
    async fn clones_share_state() {
        let dir = directory();
        let other = dir.clone();
        other.append_participant("Chess Club", "c@x.edu").await.unwrap();

        assert!(dir.lookup("Chess Club").await.unwrap().is_registered("c@x.edu"));
    }

    #[tokio::test]
    async fn concurrent_duplicate_signups_admit_one() {
        let dir = directory();
        let mut handles = Vec::new();
        for _ in 0..16 {
            let dir = dir.clone();
            handles.push(tokio::spawn(async move {
                dir.append_participant("Chess Club", "race@x.edu").await
            }));
        }

        let mut ok = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                ok += 1;
            }
        }
        assert_eq!(ok, 1);
        assert_eq!(dir.lookup("Chess Club").await.unwrap().participants.len(), 3);
    }

    #[tokio::test]
    async fn unknown_activity() {
        let dir = directory();
        assert_eq!(
            dir.remove_participant("Drama", "a@x.edu").await,
            Err(RegistrationError::ActivityNotFound)
        );
        assert!(dir.lookup("Drama").await.is_none());
    }
}
