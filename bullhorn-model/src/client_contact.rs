use bullhorn_types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};

use crate::{BullhornEntity, EntityRef};

/// A hiring manager or other contact at a client company.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientContact {
    pub id: Option<EntityId>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub occupation: Option<String>,
    pub client_corporation: Option<EntityRef>,
    pub date_added: Option<Timestamp>,
    pub date_last_visit: Option<Timestamp>,
    pub is_deleted: Option<bool>,
}

impl BullhornEntity for ClientContact {
    const ENTITY_NAME: &'static str = "ClientContact";

    fn id(&self) -> Option<EntityId> {
        self.id
    }
}
