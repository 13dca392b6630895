use bullhorn_types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};

use crate::{BullhornEntity, EntityRef};

/// A person being considered for job placements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: Option<EntityId>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: Option<String>,
    pub date_of_birth: Option<Timestamp>,
    pub date_added: Option<Timestamp>,
    pub date_last_modified: Option<Timestamp>,
    pub salary: Option<f64>,
    pub is_deleted: Option<bool>,
    /// Recruiter who owns the record.
    pub owner: Option<EntityRef>,
    #[serde(default)]
    pub skill_set: Vec<String>,
}

impl Candidate {
    /// Full name, falling back to first/last when `name` is unset.
    pub fn display_name(&self) -> Option<String> {
        if let Some(name) = &self.name {
            return Some(name.clone());
        }
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            (Some(one), None) | (None, Some(one)) => Some(one.clone()),
            (None, None) => None,
        }
    }
}

impl BullhornEntity for Candidate {
    const ENTITY_NAME: &'static str = "Candidate";

    fn id(&self) -> Option<EntityId> {
        self.id
    }
}
