use bullhorn_types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};

use crate::{BullhornEntity, EntityRef};

/// A free-text note attached to a person and optionally a job order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: Option<EntityId>,
    pub action: Option<String>,
    pub comments: Option<String>,
    pub person_reference: Option<EntityRef>,
    pub job_order: Option<EntityRef>,
    pub commenting_person: Option<EntityRef>,
    pub date_added: Option<Timestamp>,
    pub is_deleted: Option<bool>,
}

impl BullhornEntity for Note {
    const ENTITY_NAME: &'static str = "Note";

    fn id(&self) -> Option<EntityId> {
        self.id
    }
}
