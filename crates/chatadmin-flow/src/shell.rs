//! The navigation shell seam.
//!
//! The shell owns route-loaded data (the plan list, the configs record)
//! and the toast surface. Flows never mutate the loaded plan list in
//! place; after a successful mutation they ask the shell to invalidate,
//! forcing a re-fetch of the authoritative copy.

use std::sync::Arc;

use async_trait::async_trait;

/// Toast severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// Operation succeeded.
    Success,
    /// Operation failed.
    Error,
    /// Neutral notice.
    Info,
}

/// Collaborator the flows report through.
#[async_trait]
pub trait Shell: Send + Sync {
    /// Show a toast.
    fn toast(&self, kind: ToastKind, message: &str);

    /// Mark loader data stale so it is re-fetched.
    async fn invalidate(&self);
}

#[async_trait]
impl<T: Shell + ?Sized> Shell for Arc<T> {
    fn toast(&self, kind: ToastKind, message: &str) {
        (**self).toast(kind, message);
    }

    async fn invalidate(&self) {
        (**self).invalidate().await;
    }
}
