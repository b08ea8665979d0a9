//! 类型定义模块

mod catalog;
mod navigation;
mod part;
mod search;

pub use catalog::{BrandEntry, Catalog, CatalogOptions};
pub use navigation::{NavigationState, ViewSnapshot};
pub use part::{ContactChannel, NOT_AVAILABLE, ResolvedPart};
pub use search::{SearchCriteria, VendorGroup};

// Re-export provider 库的公共类型
pub use autoparts_provider::{
    BrandModelPair, DetailRecord, InventoryKey, PartQuery, PartResult, VendorContact,
};
