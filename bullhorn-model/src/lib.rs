//! Bullhorn entity model.
//!
//! Defines the family of business entities the REST codec works with:
//! - [`BullhornEntity`] — the trait every entity type implements
//! - [`EntityRef`] — a to-one association (`{"id": 123}`) to another entity
//! - [`Candidate`], [`ClientContact`], [`JobOrder`], [`Note`] — representative
//!   REST entities with camelCase JSON property names
//!
//! Nullable attributes are plain `Option`s that serialize as JSON `null`.
//! Whether a null reaches the wire is decided by the codec's null-value
//! filter, not by the entity definitions.

mod candidate;
mod client_contact;
mod entity;
mod job_order;
mod note;

pub use bullhorn_types::{EntityId, Timestamp};
pub use candidate::Candidate;
pub use client_contact::ClientContact;
pub use entity::{BullhornEntity, EntityRef};
pub use job_order::JobOrder;
pub use note::Note;
