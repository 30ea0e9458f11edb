use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use models::proposal::{
    CreateProposal, Proposal, ProposalPatch, ProposalStats, ProposalStatus, PHONE_NOT_PROVIDED,
};

use crate::errors::ServiceError;
use crate::store::EntityStore;

/// Proposal (lead) operations as seen by the HTTP layer.
#[async_trait]
pub trait LeadStore: Send + Sync {
    async fn list(&self) -> Vec<Proposal>;
    async fn get(&self, id: u64) -> Result<Proposal, ServiceError>;
    async fn create(&self, input: CreateProposal) -> Proposal;
    async fn update(&self, id: u64, patch: ProposalPatch) -> Result<Proposal, ServiceError>;
    async fn delete(&self, id: u64) -> Result<(), ServiceError>;
    async fn stats(&self) -> ProposalStats;
}

/// CRUD and aggregate statistics over client proposals.
#[derive(Clone)]
pub struct ProposalService {
    store: Arc<EntityStore<Proposal>>,
}

impl ProposalService {
    pub fn new(store: Arc<EntityStore<Proposal>>) -> Arc<Self> {
        Arc::new(Self { store })
    }

    /// All proposals in submission order; no filter.
    pub async fn list(&self) -> Vec<Proposal> {
        self.store.all().await
    }

    pub async fn get(&self, id: u64) -> Result<Proposal, ServiceError> {
        self.store
            .find(id)
            .await
            .ok_or_else(|| ServiceError::not_found("Proposal"))
    }

    /// Assigns a fresh id, stamps today's date, forces status to pending and
    /// fills the phone sentinel when the submitter left it out.
    pub async fn create(&self, input: CreateProposal) -> Proposal {
        let id = self.store.next_id().await;
        let proposal = Proposal {
            id,
            name: input.name,
            email: input.email,
            phone: input.phone.unwrap_or_else(|| PHONE_NOT_PROVIDED.to_string()),
            business_type: input.business_type,
            budget: input.budget,
            requirements: input.requirements,
            status: ProposalStatus::Pending,
            date: models::today(),
        };
        self.store.insert(proposal.clone()).await;
        debug!(id, "proposal inserted");
        proposal
    }

    /// Shallow merge; status may move between any two states in any order.
    pub async fn update(&self, id: u64, patch: ProposalPatch) -> Result<Proposal, ServiceError> {
        self.store
            .replace(id, |proposal| patch.apply(proposal))
            .await
            .ok_or_else(|| ServiceError::not_found("Proposal"))
    }

    pub async fn delete(&self, id: u64) -> Result<(), ServiceError> {
        if self.store.remove(id).await {
            debug!(id, "proposal removed");
            Ok(())
        } else {
            Err(ServiceError::not_found("Proposal"))
        }
    }

    /// Full-collection scan; nothing is cached.
    pub async fn stats(&self) -> ProposalStats {
        let proposals = self.store.all().await;
        let by_status = |s: ProposalStatus| proposals.iter().filter(|p| p.status == s).count();
        ProposalStats {
            total: proposals.len(),
            pending: by_status(ProposalStatus::Pending),
            reviewed: by_status(ProposalStatus::Reviewed),
            completed: by_status(ProposalStatus::Completed),
        }
    }
}

#[async_trait]
impl LeadStore for ProposalService {
    async fn list(&self) -> Vec<Proposal> { self.list().await }
    async fn get(&self, id: u64) -> Result<Proposal, ServiceError> { self.get(id).await }
    async fn create(&self, input: CreateProposal) -> Proposal { self.create(input).await }
    async fn update(&self, id: u64, patch: ProposalPatch) -> Result<Proposal, ServiceError> {
        self.update(id, patch).await
    }
    async fn delete(&self, id: u64) -> Result<(), ServiceError> { self.delete(id).await }
    async fn stats(&self) -> ProposalStats { self.stats().await }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> Arc<ProposalService> {
        ProposalService::new(EntityStore::new())
    }

    fn input(name: &str) -> CreateProposal {
        CreateProposal {
            name: name.into(),
            email: format!("{}@example.com", name),
            phone: None,
            business_type: "E-commerce".into(),
            budget: "$2,500 - $5,000".into(),
            requirements: "A storefront".into(),
        }
    }

    #[tokio::test]
    async fn create_without_phone_uses_sentinel() {
        let svc = service();
        let created = svc.create(input("john")).await;

        assert_eq!(created.phone, PHONE_NOT_PROVIDED);
        assert_eq!(created.status, ProposalStatus::Pending);
        assert_eq!(created.date, models::today());
    }

    #[tokio::test]
    async fn create_keeps_supplied_phone() {
        let svc = service();
        let mut with_phone = input("jane");
        with_phone.phone = Some("+1 (555) 123-4567".into());
        let created = svc.create(with_phone).await;
        assert_eq!(created.phone, "+1 (555) 123-4567");
    }

    #[tokio::test]
    async fn status_update_touches_only_the_addressed_record() {
        let svc = service();
        let first = svc.create(input("first")).await;
        let second = svc.create(input("second")).await;

        let patch = ProposalPatch { status: Some(ProposalStatus::Reviewed), ..Default::default() };
        svc.update(first.id, patch).await.expect("update ok");

        assert_eq!(svc.get(first.id).await.unwrap().status, ProposalStatus::Reviewed);
        assert_eq!(svc.get(second.id).await.unwrap(), second);
    }

    #[tokio::test]
    async fn completed_can_revert_to_pending() {
        let svc = service();
        let created = svc.create(input("flip")).await;
        for status in [ProposalStatus::Completed, ProposalStatus::Pending] {
            let patch = ProposalPatch { status: Some(status), ..Default::default() };
            let merged = svc.update(created.id, patch).await.expect("update ok");
            assert_eq!(merged.status, status);
        }
    }

    #[tokio::test]
    async fn stats_on_empty_collection_are_all_zero() {
        let svc = service();
        let stats = svc.stats().await;
        assert_eq!(
            stats,
            ProposalStats { total: 0, pending: 0, reviewed: 0, completed: 0 }
        );
    }

    #[tokio::test]
    async fn stats_count_by_status() {
        let svc = service();
        for name in ["a", "b", "c"] {
            svc.create(input(name)).await;
        }
        let listed = svc.list().await;
        let patch = ProposalPatch { status: Some(ProposalStatus::Completed), ..Default::default() };
        svc.update(listed[1].id, patch).await.expect("update ok");

        let stats = svc.stats().await;
        assert_eq!(stats.total, 3);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.reviewed, 0);
        assert_eq!(stats.completed, 1);
    }

    #[tokio::test]
    async fn delete_missing_id_is_not_found() {
        let svc = service();
        assert_eq!(svc.delete(9).await.unwrap_err(), ServiceError::not_found("Proposal"));
        let created = svc.create(input("gone")).await;
        svc.delete(created.id).await.expect("delete ok");
        assert!(svc.get(created.id).await.is_err());
    }
}
