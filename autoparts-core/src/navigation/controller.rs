//! 导航状态机
//!
//! Synchronous and single-owner: every transition is a `&mut self` call that
//! completes immediately. Asynchronous work (search, detail lookup) is split
//! into `begin_*`, which hands out a [`Ticket`], and `complete_*`, which only
//! applies a result whose ticket is still the pending one. Anything that
//! supersedes the request drops the pending ticket, so late results are
//! discarded without touching the state.

use std::sync::Arc;

use autoparts_provider::PartResult;

use crate::error::{CoreError, CoreResult, ErrorKind};
use crate::services::{Resolution, group};
use crate::types::{Catalog, NavigationState, VendorGroup, ViewSnapshot};

/// Sequence token of one asynchronous request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
pub struct NavigationController {
    state: NavigationState,
    results: Vec<PartResult>,
    groups: Vec<VendorGroup>,
    last_error: Option<ErrorKind>,
    next_ticket: u64,
    pending_search: Option<Ticket>,
    pending_detail: Option<Ticket>,
}

impl NavigationController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Rows of the last applied search, in service order.
    pub fn results(&self) -> &[PartResult] {
        &self.results
    }

    pub fn groups(&self) -> &[VendorGroup] {
        &self.groups
    }

    /// `true` while a search or a detail lookup is pending.
    pub fn loading(&self) -> bool {
        self.pending_search.is_some() || self.pending_detail.is_some()
    }

    pub fn last_error(&self) -> Option<ErrorKind> {
        self.last_error
    }

    /// Items of the vendor on screen; empty in the vendor list.
    pub fn vendor_items(&self) -> &[PartResult] {
        let Some(vendor) = self.state.vendor() else {
            return &[];
        };
        self.groups
            .iter()
            .find(|g| g.vendor_name == vendor)
            .map(|g| g.items.as_slice())
            .unwrap_or_default()
    }

    /// Records a notice for the presentation layer.
    pub fn report(&mut self, kind: ErrorKind) {
        self.last_error = Some(kind);
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    // ===== 搜索 =====

    /// Starts a search. Supersedes any pending search and detail lookup.
    pub fn begin_search(&mut self) -> Ticket {
        let ticket = self.issue_ticket();
        if let Some(old) = self.pending_search.replace(ticket) {
            log::debug!("Search {old:?} superseded by {ticket:?}");
        }
        self.cancel_detail();
        self.last_error = None;
        ticket
    }

    /// Applies a search outcome. Returns `false` if `ticket` was superseded.
    ///
    /// Either way the view returns to the vendor list. A failed search clears
    /// the previous results rather than leaving stale matches on screen.
    pub fn complete_search(
        &mut self,
        ticket: Ticket,
        outcome: CoreResult<Vec<PartResult>>,
    ) -> bool {
        if self.pending_search != Some(ticket) {
            log::debug!("Discarding result of superseded search {ticket:?}");
            return false;
        }
        self.pending_search = None;
        self.cancel_detail();

        match outcome {
            Ok(rows) => {
                self.groups = group(&rows);
                self.results = rows;
            }
            Err(err) => {
                self.results.clear();
                self.groups.clear();
                self.last_error = err.kind();
            }
        }
        self.state = NavigationState::VendorList;
        true
    }

    // ===== 商家 / 配件 =====

    pub fn select_vendor(&mut self, name: &str) -> CoreResult<()> {
        if !matches!(self.state, NavigationState::VendorList) {
            return Err(self.invalid("select a vendor"));
        }
        if !self.groups.iter().any(|g| g.vendor_name == name) {
            return Err(CoreError::VendorNotFound(name.to_string()));
        }
        self.state = NavigationState::VendorDetail {
            vendor: name.to_string(),
        };
        Ok(())
    }

    /// Starts resolving `item`. Only valid on a vendor's item list.
    pub fn begin_select_item(&mut self, item: &PartResult) -> CoreResult<Ticket> {
        if !matches!(self.state, NavigationState::VendorDetail { .. }) {
            return Err(self.invalid("select an item"));
        }
        let ticket = self.issue_ticket();
        if let Some(old) = self.pending_detail.replace(ticket) {
            log::debug!("Detail {old:?} superseded by {ticket:?}");
        }
        log::debug!("Selecting part {} ({ticket:?})", item.id);
        Ok(ticket)
    }

    /// Opens the resolved part. Returns `false` if `ticket` was superseded.
    pub fn complete_select_item(&mut self, ticket: Ticket, resolution: Resolution) -> bool {
        if self.pending_detail != Some(ticket) {
            log::debug!("Discarding result of superseded detail {ticket:?}");
            return false;
        }
        self.pending_detail = None;

        let NavigationState::VendorDetail { vendor } = &self.state else {
            return false;
        };
        self.state = NavigationState::PartDetail {
            vendor: vendor.clone(),
            part: Box::new(resolution.part),
            image_zoom: false,
        };
        if let Some(notice) = resolution.notice {
            self.last_error = Some(notice);
        }
        true
    }

    /// Vendor's item list → vendor list. Cancels a pending lookup.
    pub fn back(&mut self) -> CoreResult<()> {
        if !matches!(self.state, NavigationState::VendorDetail { .. }) {
            return Err(self.invalid("go back"));
        }
        self.cancel_detail();
        self.state = NavigationState::VendorList;
        Ok(())
    }

    /// Part detail → the vendor's item list it was opened from.
    ///
    /// On the item list itself, dismisses a pending lookup.
    pub fn close(&mut self) -> CoreResult<()> {
        match &self.state {
            NavigationState::PartDetail { vendor, .. } => {
                self.state = NavigationState::VendorDetail {
                    vendor: vendor.clone(),
                };
                Ok(())
            }
            NavigationState::VendorDetail { .. } if self.pending_detail.is_some() => {
                self.cancel_detail();
                Ok(())
            }
            _ => Err(self.invalid("close")),
        }
    }

    // ===== 图片 =====

    /// Zooms the part photo. The part must have one.
    pub fn open_image(&mut self) -> CoreResult<()> {
        match &mut self.state {
            NavigationState::PartDetail {
                part, image_zoom, ..
            } => {
                if part.photo_url().is_none() {
                    return Err(CoreError::InvalidTransition(
                        "part has no photo".to_string(),
                    ));
                }
                *image_zoom = true;
                Ok(())
            }
            _ => Err(self.invalid("open the image")),
        }
    }

    pub fn close_image(&mut self) -> CoreResult<()> {
        match &mut self.state {
            NavigationState::PartDetail { image_zoom, .. } => {
                *image_zoom = false;
                Ok(())
            }
            _ => Err(self.invalid("close the image")),
        }
    }

    /// Owned copy of everything the view renders.
    pub fn snapshot(&self, catalog: Arc<Catalog>) -> ViewSnapshot {
        ViewSnapshot {
            state: self.state.clone(),
            loading: self.loading(),
            last_error: self.last_error,
            groups: self.groups.clone(),
            catalog,
        }
    }

    /// Drops `ticket` if it is still pending without applying anything.
    ///
    /// Used when the task that held it went away before completing. Returns
    /// `false` if the ticket had already been completed or superseded.
    pub fn abandon(&mut self, ticket: Ticket) -> bool {
        if self.pending_search == Some(ticket) {
            self.pending_search = None;
        } else if self.pending_detail == Some(ticket) {
            self.pending_detail = None;
        } else {
            return false;
        }
        log::debug!("Request {ticket:?} abandoned before completion");
        true
    }

    fn issue_ticket(&mut self) -> Ticket {
        self.next_ticket += 1;
        Ticket(self.next_ticket)
    }

    fn cancel_detail(&mut self) {
        if let Some(ticket) = self.pending_detail.take() {
            log::debug!("Detail {ticket:?} cancelled");
        }
    }

    fn invalid(&self, action: &str) -> CoreError {
        let view = match self.state {
            NavigationState::VendorList => "vendor list",
            NavigationState::VendorDetail { .. } => "vendor detail",
            NavigationState::PartDetail { .. } => "part detail",
        };
        CoreError::InvalidTransition(format!("cannot {action} from the {view}"))
    }
}
