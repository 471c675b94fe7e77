// src/application/services/view_gate.rs
use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::view_markers::ViewMarkerStore;
use crate::domain::item::{ItemWriteRepository, ViewKey, ViewTarget, Viewer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewOutcome {
    /// Counter incremented; carries the new persisted value.
    Counted(u64),
    /// A live marker exists for this viewer address and item.
    AlreadySeen,
    /// Owners never move their own counter.
    OwnerView,
    /// The marker store or the counter write failed; nothing was counted.
    Dropped,
}

/// Decides whether a detail view bumps an item's view counter.
///
/// The marker is claimed with an atomic set-if-absent before the counter is
/// touched, so concurrent first views from one address count once. Failures
/// are logged and swallowed: a lost view never fails the read it rides on.
pub struct ViewCountGate {
    markers: Arc<dyn ViewMarkerStore>,
    write_repo: Arc<dyn ItemWriteRepository>,
    window: Duration,
}

impl ViewCountGate {
    pub fn new(
        markers: Arc<dyn ViewMarkerStore>,
        write_repo: Arc<dyn ItemWriteRepository>,
        window: Duration,
    ) -> Self {
        Self {
            markers,
            write_repo,
            window,
        }
    }

    pub async fn register_view<T>(&self, viewer: &Viewer, target: &T) -> ViewOutcome
    where
        T: ViewTarget + Sync + ?Sized,
    {
        if viewer.owns(target) {
            return ViewOutcome::OwnerView;
        }

        let kind = target.view_kind();
        let id = target.view_id();
        let key = ViewKey::for_view(viewer, target);

        match self.markers.mark_if_absent(&key, self.window).await {
            Ok(true) => {}
            Ok(false) => return ViewOutcome::AlreadySeen,
            Err(err) => {
                tracing::warn!(
                    kind = %kind,
                    item_id = %id,
                    error = %err,
                    "view marker store failed; view not counted"
                );
                return ViewOutcome::Dropped;
            }
        }

        match self.write_repo.increment_view_count(kind, id).await {
            Ok(count) => {
                tracing::debug!(kind = %kind, item_id = %id, view_count = count, "view counted");
                ViewOutcome::Counted(count)
            }
            Err(err) => {
                tracing::warn!(
                    kind = %kind,
                    item_id = %id,
                    error = %err,
                    "failed to persist view count increment"
                );
                ViewOutcome::Dropped
            }
        }
    }
}
