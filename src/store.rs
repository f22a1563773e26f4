//! The activity directory and its in-memory backing store.
//!
//! Request handlers only see [`ActivityRepository`], so a persistent backend can
//! replace [`InMemoryDirectory`] without touching the web layer.

use std::sync::{Mutex, PoisonError};

use tracing::debug;

use crate::models::Directory;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum DirectoryError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student already signed up")]
    AlreadySignedUp,

    #[error("Participant not found in this activity")]
    ParticipantNotFound,
}

pub type Result<T> = core::result::Result<T, DirectoryError>;

pub trait ActivityRepository: Send + Sync {
    /// Snapshot of every activity with its participant list.
    fn list(&self) -> Directory;

    /// Append `email` to the activity's participants.
    fn sign_up(&self, activity: &str, email: &str) -> Result<()>;

    /// Remove `email` from the activity's participants, keeping the order of the rest.
    fn unregister(&self, activity: &str, email: &str) -> Result<()>;
}

/// Process-local directory. Each check-then-mutate runs under one lock, so two
/// concurrent signups of the same email cannot both pass the duplicate check.
pub struct InMemoryDirectory {
    activities: Mutex<Directory>,
}

impl InMemoryDirectory {
    pub fn new(activities: Directory) -> Self {
        Self {
            activities: Mutex::new(activities),
        }
    }

    fn with_activities<T>(&self, f: impl FnOnce(&mut Directory) -> T) -> T {
        let mut guard = self
            .activities
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}

impl ActivityRepository for InMemoryDirectory {
    fn list(&self) -> Directory {
        self.with_activities(|activities| activities.clone())
    }

    fn sign_up(&self, activity: &str, email: &str) -> Result<()> {
        self.with_activities(|activities| {
            let entry = activities
                .get_mut(activity)
                .ok_or(DirectoryError::ActivityNotFound)?;
            if entry.participants.iter().any(|p| p == email) {
                return Err(DirectoryError::AlreadySignedUp);
            }
            entry.participants.push(email.to_string());
            // Capacity is informational; a full activity still accepts signups.
            debug!(
                "{}: {}/{} participants",
                activity,
                entry.participants.len(),
                entry.max_participants
            );
            Ok(())
        })
    }

    fn unregister(&self, activity: &str, email: &str) -> Result<()> {
        self.with_activities(|activities| {
            let entry = activities
                .get_mut(activity)
                .ok_or(DirectoryError::ActivityNotFound)?;
            let pos = entry
                .participants
                .iter()
                .position(|p| p == email)
                .ok_or(DirectoryError::ParticipantNotFound)?;
            entry.participants.remove(pos);
            Ok(())
        })
    }
}
