//! User list store
//!
//! The one store with an optimistic path: toggling a user's status flips
//! the local record first for snappy feedback, then performs the API call
//! and reverts by refetching if it fails.

use dynasty_client::{ClientResult, UserService};
use shared::models::{AdminUser, UserCreate, UserUpdate};

/// Fetched user list.
pub struct UserStore {
    service: UserService,
    users: Vec<AdminUser>,
}

/// Flip a user's activity flags in place; returns the new state, or `None`
/// when the user is not in the list.
fn apply_toggle(users: &mut [AdminUser], id: &str) -> Option<bool> {
    let user = users.iter_mut().find(|u| u.id == id)?;
    let now_active = !user.is_active();
    user.is_active = Some(now_active);
    user.status = Some(if now_active { "active" } else { "inactive" }.to_string());
    Some(now_active)
}

/// Replace a user record in place, matching by id.
fn replace_user(users: &mut [AdminUser], updated: AdminUser) {
    if let Some(slot) = users.iter_mut().find(|u| u.id == updated.id) {
        *slot = updated;
    }
}

impl UserStore {
    pub fn new(service: UserService) -> Self {
        Self {
            service,
            users: Vec::new(),
        }
    }

    pub fn users(&self) -> &[AdminUser] {
        &self.users
    }

    /// Fetch the user list.
    pub async fn fetch(&mut self) -> ClientResult<()> {
        let payload = self.service.list().await?;
        self.users = payload.items;
        Ok(())
    }

    /// Create a user; the returned record is prepended to the list.
    pub async fn create(&mut self, payload: &UserCreate) -> ClientResult<()> {
        let created = self.service.create(payload).await?;
        self.users.insert(0, created);
        Ok(())
    }

    /// Update a user; the returned record replaces the old one in place.
    pub async fn update(&mut self, id: &str, payload: &UserUpdate) -> ClientResult<()> {
        let updated = self.service.update(id, payload).await?;
        replace_user(&mut self.users, updated);
        Ok(())
    }

    /// Delete a user and drop it from the list.
    pub async fn delete(&mut self, id: &str) -> ClientResult<()> {
        self.service.delete(id).await?;
        self.users.retain(|u| u.id != id);
        Ok(())
    }

    /// Toggle a user's active status, optimistically.
    ///
    /// The local record flips before the call; on failure the list is
    /// refetched to revert, and the original error is returned.
    pub async fn toggle_status(&mut self, id: &str) -> ClientResult<()> {
        apply_toggle(&mut self.users, id);
        match self.service.toggle_status(id).await {
            Ok(()) => Ok(()),
            Err(err) => {
                tracing::warn!(user = %id, error = %err, "status toggle failed, reverting");
                if let Err(refetch_err) = self.fetch().await {
                    tracing::warn!(error = %refetch_err, "revert refetch failed");
                }
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, active: bool) -> AdminUser {
        serde_json::from_value(serde_json::json!({
            "_id": id,
            "name": "Asha",
            "isActive": active
        }))
        .unwrap()
    }

    #[test]
    fn toggle_flips_both_activity_fields() {
        let mut users = vec![user("u1", true), user("u2", false)];
        assert_eq!(apply_toggle(&mut users, "u1"), Some(false));
        assert!(!users[0].is_active());
        assert_eq!(users[0].status.as_deref(), Some("inactive"));

        assert_eq!(apply_toggle(&mut users, "u2"), Some(true));
        assert!(users[1].is_active());

        assert_eq!(apply_toggle(&mut users, "missing"), None);
    }

    #[test]
    fn replace_matches_by_id() {
        let mut users = vec![user("u1", true), user("u2", true)];
        let mut updated = user("u2", false);
        updated.name = "Renamed".to_string();
        replace_user(&mut users, updated);
        assert_eq!(users[1].name, "Renamed");
        assert_eq!(users[0].name, "Asha");
    }
}
