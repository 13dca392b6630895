use bullhorn_types::EntityId;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A business entity exchanged with the Bullhorn REST API.
///
/// # Trait Bounds
/// - `Serialize` / `DeserializeOwned`: the entity travels as JSON
/// - `Send + Sync + 'static`: codecs are shared across threads
pub trait BullhornEntity: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// REST entity name (e.g., "Candidate", "JobOrder").
    const ENTITY_NAME: &'static str;

    /// The entity's id, `None` for entities not yet persisted.
    fn id(&self) -> Option<EntityId>;

    /// Runtime entity name; handy behind generic code paths.
    fn entity_name(&self) -> &'static str {
        Self::ENTITY_NAME
    }
}

/// Reference to another entity through a to-one association.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: EntityId,
}

impl EntityRef {
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self { id: EntityId::new(id) }
    }
}

impl From<EntityId> for EntityRef {
    fn from(id: EntityId) -> Self {
        Self { id }
    }
}
