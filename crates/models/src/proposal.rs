use serde::{Deserialize, Serialize};

/// Sentinel stored when a submitter leaves the phone field empty.
pub const PHONE_NOT_PROVIDED: &str = "Not provided";

/// Review state of a proposal. Any state may move to any other; an
/// administrator can revert a completed proposal back to pending.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProposalStatus {
    #[default]
    Pending,
    Reviewed,
    Completed,
}

/// A project proposal submitted by a prospective client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub business_type: String,
    pub budget: String,
    pub requirements: String,
    pub status: ProposalStatus,
    /// Calendar date (`YYYY-MM-DD`), stamped at submission.
    pub date: String,
}

/// Public submission input. `status` and `date` are server-assigned; a
/// missing `phone` becomes the "Not provided" sentinel.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProposal {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub phone: Option<String>,
    #[serde(default)]
    pub business_type: String,
    #[serde(default)]
    pub budget: String,
    #[serde(default)]
    pub requirements: String,
}

/// Partial update, used mainly for status transitions from the admin UI.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub business_type: Option<String>,
    pub budget: Option<String>,
    pub requirements: Option<String>,
    pub status: Option<ProposalStatus>,
    pub date: Option<String>,
}

impl ProposalPatch {
    /// Shallow merge into an existing record.
    pub fn apply(self, proposal: &mut Proposal) {
        if let Some(v) = self.name { proposal.name = v; }
        if let Some(v) = self.email { proposal.email = v; }
        if let Some(v) = self.phone { proposal.phone = v; }
        if let Some(v) = self.business_type { proposal.business_type = v; }
        if let Some(v) = self.budget { proposal.budget = v; }
        if let Some(v) = self.requirements { proposal.requirements = v; }
        if let Some(v) = self.status { proposal.status = v; }
        if let Some(v) = self.date { proposal.date = v; }
    }
}

/// Aggregate counts over the proposal collection, computed on demand.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalStats {
    pub total: usize,
    pub pending: usize,
    pub reviewed: usize,
    pub completed: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ProposalStatus::Pending).unwrap(), "\"pending\"");
        assert_eq!(serde_json::to_string(&ProposalStatus::Reviewed).unwrap(), "\"reviewed\"");
        assert_eq!(serde_json::to_string(&ProposalStatus::Completed).unwrap(), "\"completed\"");
    }

    #[test]
    fn create_input_accepts_missing_phone() {
        let input: CreateProposal =
            serde_json::from_str(r#"{"name":"N","email":"n@example.com","businessType":"E-commerce"}"#)
                .unwrap();
        assert!(input.phone.is_none());
        assert_eq!(input.business_type, "E-commerce");
        assert_eq!(input.budget, "");
    }

    #[test]
    fn patch_moves_status_any_direction() {
        let mut p = Proposal {
            id: 1,
            name: "N".into(),
            email: "n@example.com".into(),
            phone: PHONE_NOT_PROVIDED.into(),
            business_type: "SaaS".into(),
            budget: "$1,000".into(),
            requirements: "R".into(),
            status: ProposalStatus::Completed,
            date: "2024-01-15".into(),
        };
        let patch: ProposalPatch = serde_json::from_str(r#"{"status":"pending"}"#).unwrap();
        patch.apply(&mut p);
        assert_eq!(p.status, ProposalStatus::Pending);
        assert_eq!(p.name, "N");
    }
}
