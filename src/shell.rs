//! Terminal implementation of the navigation shell.

use async_trait::async_trait;

use chatadmin_flow::{Shell, ToastKind};

use crate::output;

/// Shell that renders toasts as terminal lines.
///
/// The CLI has no cached loader data; commands re-fetch after each
/// mutation, so invalidation only marks the moment in the log.
#[derive(Debug, Default, Clone)]
pub struct TerminalShell;

#[async_trait]
impl Shell for TerminalShell {
    fn toast(&self, kind: ToastKind, message: &str) {
        match kind {
            ToastKind::Success => output::print_success(message),
            ToastKind::Error => output::print_error(message),
            ToastKind::Info => output::print_info(message),
        }
    }

    async fn invalidate(&self) {
        tracing::debug!("Loader data invalidated");
    }
}
