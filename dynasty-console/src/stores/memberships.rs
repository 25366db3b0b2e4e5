//! Membership plan store

use dynasty_client::{ClientResult, MembershipService};
use shared::models::{MembershipPayload, MembershipPlan};

/// Fetched membership tier list.
pub struct MembershipStore {
    service: MembershipService,
    plans: Vec<MembershipPlan>,
}

impl MembershipStore {
    pub fn new(service: MembershipService) -> Self {
        Self {
            service,
            plans: Vec::new(),
        }
    }

    pub fn plans(&self) -> &[MembershipPlan] {
        &self.plans
    }

    /// Fetch all plans.
    pub async fn fetch(&mut self) -> ClientResult<()> {
        let payload = self.service.list().await?;
        self.plans = payload.items;
        Ok(())
    }

    /// Create a tier, then refetch.
    pub async fn create(&mut self, payload: &MembershipPayload) -> ClientResult<()> {
        self.service.create(payload).await?;
        self.fetch().await
    }

    /// Update a tier, then refetch.
    pub async fn update(&mut self, id: &str, payload: &MembershipPayload) -> ClientResult<()> {
        self.service.update(id, payload).await?;
        self.fetch().await
    }

    /// Delete a tier, then refetch.
    pub async fn delete(&mut self, id: &str) -> ClientResult<()> {
        self.service.delete(id).await?;
        self.fetch().await
    }
}
