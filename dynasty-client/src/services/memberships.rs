//! Membership Plan API service

use validator::Validate;

use shared::models::{MembershipPayload, MembershipPlan};
use shared::response::ListPayload;

use crate::{ClientResult, HttpClient};

/// Membership tier CRUD. Reads go through the public plans endpoint, writes
/// through the admin one.
#[derive(Debug, Clone)]
pub struct MembershipService {
    http: HttpClient,
}

impl MembershipService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// List all plans
    pub async fn list(&self) -> ClientResult<ListPayload<MembershipPlan>> {
        self.http.get_list("/api/membership/plans", &[]).await
    }

    /// Create a plan
    pub async fn create(&self, payload: &MembershipPayload) -> ClientResult<()> {
        payload.validate()?;
        self.http
            .post_json("/api/membership/admin/plans", payload)
            .await?;
        Ok(())
    }

    /// Update a plan
    pub async fn update(&self, id: &str, payload: &MembershipPayload) -> ClientResult<()> {
        payload.validate()?;
        self.http
            .put_json(&format!("/api/membership/admin/plans/{id}"), payload)
            .await?;
        Ok(())
    }

    /// Delete a plan
    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.http
            .delete_json(&format!("/api/membership/admin/plans/{id}"))
            .await?;
        Ok(())
    }
}
