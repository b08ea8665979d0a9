//! 导航状态

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use autoparts_provider::PartResult;

use super::{Catalog, ResolvedPart, VendorGroup};
use crate::error::ErrorKind;

/// Where the user is in the results.
///
/// An image can only be zoomed while a part is open, and a part is always
/// opened from a vendor's list, so the vendor travels with it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "camelCase")]
pub enum NavigationState {
    /// Vendor groups of the current results.
    #[default]
    VendorList,
    /// Items of one vendor.
    VendorDetail { vendor: String },
    /// One resolved part, optionally with its photo zoomed.
    PartDetail {
        vendor: String,
        part: Box<ResolvedPart>,
        image_zoom: bool,
    },
}

impl NavigationState {
    /// Vendor whose items are on screen (or underneath the open part).
    pub fn vendor(&self) -> Option<&str> {
        match self {
            Self::VendorList => None,
            Self::VendorDetail { vendor } | Self::PartDetail { vendor, .. } => Some(vendor),
        }
    }

    pub fn part(&self) -> Option<&ResolvedPart> {
        match self {
            Self::PartDetail { part, .. } => Some(part),
            _ => None,
        }
    }

    pub fn is_image_zoomed(&self) -> bool {
        matches!(self, Self::PartDetail { image_zoom: true, .. })
    }
}

/// Everything the presentation layer renders, as one owned value.
#[derive(Debug, Clone, Default)]
pub struct ViewSnapshot {
    pub state: NavigationState,
    pub loading: bool,
    pub last_error: Option<ErrorKind>,
    pub groups: Vec<VendorGroup>,
    pub catalog: Arc<Catalog>,
}

impl ViewSnapshot {
    /// Group of the vendor currently selected, if any.
    pub fn current_group(&self) -> Option<&VendorGroup> {
        let vendor = self.state.vendor()?;
        self.groups.iter().find(|g| g.vendor_name == vendor)
    }

    /// Items listed for the selected vendor; empty in the vendor list.
    pub fn current_items(&self) -> &[PartResult] {
        self.current_group()
            .map(|g| g.items.as_slice())
            .unwrap_or_default()
    }

    /// Notice text for the last error.
    pub fn notice(&self) -> Option<&'static str> {
        self.last_error.map(ErrorKind::message)
    }

    pub fn total_results(&self) -> usize {
        self.groups.iter().map(VendorGroup::len).sum()
    }
}
