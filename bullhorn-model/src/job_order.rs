use bullhorn_types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};

use crate::{BullhornEntity, EntityRef};

/// An open position at a client company.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobOrder {
    pub id: Option<EntityId>,
    pub title: Option<String>,
    pub status: Option<String>,
    pub employment_type: Option<String>,
    pub is_open: Option<bool>,
    pub num_openings: Option<i32>,
    pub salary: Option<f64>,
    pub description: Option<String>,
    pub client_contact: Option<EntityRef>,
    pub client_corporation: Option<EntityRef>,
    pub start_date: Option<Timestamp>,
    pub date_added: Option<Timestamp>,
    pub date_closed: Option<Timestamp>,
}

impl BullhornEntity for JobOrder {
    const ENTITY_NAME: &'static str = "JobOrder";

    fn id(&self) -> Option<EntityId> {
        self.id
    }
}
