//! Domain Layer
//!
//! Check sheet entities and the rules that keep their fields consistent.
//! This layer has no storage or UI dependencies.

mod entity;
mod ids;
mod response_type;
mod normal_value;
mod check_item;
mod pattern;
pub mod derivation;

pub use entity::{
    find_by_id, find_by_id_mut, position_by_id, remove_by_id, DomainError, DomainResult, Entity,
};
pub use ids::{ItemId, PatternId};
pub use response_type::{ResponseType, numeric_candidates, temperature_candidates};
pub use normal_value::NormalValue;
pub use check_item::CheckItem;
pub use pattern::Pattern;
