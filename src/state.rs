//! View state management
//!
//! This module holds the state the dashboard view presents, and the flag
//! that tells a late fetch completion whether the view is still mounted.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::watch;

use crate::models::ViewState;

/// View state container.
///
/// Starts at zero totals and an empty chart. Writes replace the whole state
/// in one step; readers either read the current value or subscribe.
#[derive(Debug)]
pub struct ViewStateContainer {
    sender: watch::Sender<ViewState>,
}

impl ViewStateContainer {
    /// Create a container holding the default state
    pub fn new() -> Self {
        let (sender, _) = watch::channel(ViewState::default());
        Self { sender }
    }

    /// Get a snapshot of the current state
    pub fn current(&self) -> ViewState {
        self.sender.borrow().clone()
    }

    /// Replace the state
    pub fn replace(&self, state: ViewState) {
        self.sender.send_replace(state);
    }

    /// Receive every future replacement
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.sender.subscribe()
    }
}

impl Default for ViewStateContainer {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether the view that started a fetch is still mounted
#[derive(Debug, Clone)]
pub struct ViewLifetime {
    active: Arc<AtomicBool>,
}

impl ViewLifetime {
    /// Create an active lifetime
    pub fn new() -> Self {
        Self {
            active: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Mark the view as unmounted. Shared by every clone.
    pub fn deactivate(&self) {
        self.active.store(false, Ordering::SeqCst);
    }
}

impl Default for ViewLifetime {
    fn default() -> Self {
        Self::new()
    }
}
