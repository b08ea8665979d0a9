//! Detail lookup abstraction trait definition

mod detail_lookup;

pub use detail_lookup::{ByIdLookup, DetailLookup, InventoryLookup, lookup_for};
