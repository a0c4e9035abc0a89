use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};

use crate::database::seed_activities;
use crate::error::RegistryError;
use crate::models::Activity;

/// In-memory activity roster shared by every request handler.
///
/// Cloning is cheap and every clone sees the same state. Each mutator
/// validates and writes under a single write guard, so concurrent signups
/// for the same email can never both succeed.
#[derive(Clone, Default)]
pub struct ActivityRegistry {
    inner: Arc<RwLock<BTreeMap<String, Activity>>>,
}

impl ActivityRegistry {
    /// Registry populated with the school's standard activity set.
    pub fn seeded() -> Self {
        Self::from_activities(seed_activities())
    }

    pub fn from_activities<I>(activities: I) -> Self
    where
        I: IntoIterator<Item = (String, Activity)>,
    {
        Self {
            inner: Arc::new(RwLock::new(activities.into_iter().collect())),
        }
    }

    /// Snapshot of every activity keyed by name.
    pub fn list(&self) -> BTreeMap<String, Activity> {
        self.inner.read().clone()
    }

    pub fn get(&self, activity_name: &str) -> Option<Activity> {
        self.inner.read().get(activity_name).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Appends `email` to the roster of `activity_name`.
    ///
    /// Capacity is not checked.
    pub fn signup(&self, activity_name: &str, email: &str) -> Result<String, RegistryError> {
        let mut activities = self.inner.write();
        let Some(activity) = activities.get_mut(activity_name) else {
            warn!(activity = %activity_name, "signup for unknown activity");
            return Err(RegistryError::ActivityNotFound {
                activity: activity_name.to_string(),
            });
        };

        if activity.is_registered(email) {
            warn!(activity = %activity_name, email = %email, "duplicate signup rejected");
            return Err(RegistryError::AlreadySignedUp {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        }

        activity.participants.push(email.to_string());
        info!(
            activity = %activity_name,
            email = %email,
            participants = activity.participants.len(),
            "participant signed up"
        );
        Ok(format!("Signed up {} for {}", email, activity_name))
    }

    /// Removes `email` from the roster of `activity_name`.
    pub fn unregister(&self, activity_name: &str, email: &str) -> Result<String, RegistryError> {
        let mut activities = self.inner.write();
        let Some(activity) = activities.get_mut(activity_name) else {
            warn!(activity = %activity_name, "unregister for unknown activity");
            return Err(RegistryError::ActivityNotFound {
                activity: activity_name.to_string(),
            });
        };

        let Some(position) = activity.participants.iter().position(|p| p == email) else {
            warn!(
                activity = %activity_name,
                email = %email,
                "unregister of absent participant rejected"
            );
            return Err(RegistryError::NotRegistered {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        };

        activity.participants.remove(position);
        info!(
            activity = %activity_name,
            email = %email,
            participants = activity.participants.len(),
            "participant unregistered"
        );
        Ok(format!("Unregistered {} from {}", email, activity_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    const CHESS: &str = "Chess Club";

    fn chess_roster(registry: &ActivityRegistry) -> Vec<String> {
        registry.get(CHESS).map(|a| a.participants).unwrap_or_default()
    }

    #[test]
    fn seeded_registry_matches_seed_set() {
        let registry = ActivityRegistry::seeded();
        let listed = registry.list();
        assert_eq!(listed.len(), 9);
        for (name, activity) in seed_activities() {
            assert_eq!(listed.get(&name), Some(&activity), "{name}");
        }
    }

    #[test]
    fn signup_appends_to_end_of_roster() {
        let registry = ActivityRegistry::seeded();
        let message = registry.signup(CHESS, "newstudent@mergington.edu").unwrap();
        assert_eq!(message, "Signed up newstudent@mergington.edu for Chess Club");
        assert_eq!(
            chess_roster(&registry),
            vec![
                "michael@mergington.edu",
                "daniel@mergington.edu",
                "newstudent@mergington.edu"
            ]
        );
    }

    #[test]
    fn duplicate_signup_is_rejected_without_mutation() {
        let registry = ActivityRegistry::seeded();
        registry.signup(CHESS, "a@mergington.edu").unwrap();
        let err = registry.signup(CHESS, "a@mergington.edu").unwrap_err();
        assert!(matches!(err, RegistryError::AlreadySignedUp { .. }));
        assert_eq!(chess_roster(&registry).len(), 3);
    }

    #[test]
    fn unknown_activity_is_not_found() {
        let registry = ActivityRegistry::seeded();
        let before = registry.list();
        assert!(matches!(
            registry.signup("Nonexistent Activity", "x@y.edu"),
            Err(RegistryError::ActivityNotFound { .. })
        ));
        assert!(matches!(
            registry.unregister("Nonexistent Activity", "x@y.edu"),
            Err(RegistryError::ActivityNotFound { .. })
        ));
        assert_eq!(registry.list(), before);
    }

    #[test]
    fn activity_names_are_case_sensitive_and_untrimmed() {
        let registry = ActivityRegistry::seeded();
        assert!(registry.signup("chess club", "x@y.edu").is_err());
        assert!(registry.signup(" Chess Club", "x@y.edu").is_err());
    }

    #[test]
    fn unregister_removes_exactly_one_entry() {
        let registry = ActivityRegistry::seeded();
        let message = registry.unregister(CHESS, "michael@mergington.edu").unwrap();
        assert_eq!(message, "Unregistered michael@mergington.edu from Chess Club");
        assert_eq!(chess_roster(&registry), vec!["daniel@mergington.edu"]);
    }

    #[test]
    fn unregister_absent_participant_is_conflict() {
        let registry = ActivityRegistry::seeded();
        let err = registry
            .unregister(CHESS, "nonexistent@mergington.edu")
            .unwrap_err();
        assert!(matches!(err, RegistryError::NotRegistered { .. }));
        assert_eq!(chess_roster(&registry).len(), 2);
    }

    #[test]
    fn signup_unregister_signup_round_trip() {
        let registry = ActivityRegistry::seeded();
        registry.signup(CHESS, "r@mergington.edu").unwrap();
        registry.unregister(CHESS, "r@mergington.edu").unwrap();
        registry.signup(CHESS, "r@mergington.edu").unwrap();
        assert_eq!(chess_roster(&registry).last().map(String::as_str), Some("r@mergington.edu"));
    }

    #[test]
    fn capacity_is_not_enforced() {
        let registry = ActivityRegistry::from_activities([(
            "Tiny".to_string(),
            Activity::new("Small room", "Mondays", 1),
        )]);
        registry.signup("Tiny", "a@x.edu").unwrap();
        registry.signup("Tiny", "b@x.edu").unwrap();
        let tiny = registry.get("Tiny").unwrap();
        assert_eq!(tiny.participants.len(), 2);
        assert!(tiny.participants.len() > tiny.max_participants as usize);
    }

    #[test]
    fn clones_share_state() {
        let registry = ActivityRegistry::seeded();
        let handle = registry.clone();
        handle.signup(CHESS, "shared@mergington.edu").unwrap();
        assert!(registry.get(CHESS).unwrap().is_registered("shared@mergington.edu"));
    }

    #[test]
    fn concurrent_duplicate_signups_admit_one() {
        let registry = ActivityRegistry::seeded();
        let handles: Vec<_> = (0..16)
            .map(|_| {
                let registry = registry.clone();
                thread::spawn(move || registry.signup(CHESS, "race@mergington.edu").is_ok())
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();

        assert_eq!(successes, 1);
        let roster = chess_roster(&registry);
        assert_eq!(
            roster.iter().filter(|p| *p == "race@mergington.edu").count(),
            1
        );
    }

    #[test]
    fn empty_registry() {
        let registry = ActivityRegistry::default();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.list().is_empty());
    }
}
