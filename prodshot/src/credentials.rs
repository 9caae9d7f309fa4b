//! Credential gate for premium-tier runs.
//!
//! Some host environments expose a key-selection flow (check whether an API
//! key is selected, open a picker if not). The orchestrator consults these
//! two operations before an Ultra run and after a credential failure; all
//! key storage and validation stays with the host.

use futures_util::future::{ready, BoxFuture};
use futures_util::FutureExt;

/// Host-provided credential selection capability.
pub trait CredentialGate: Send + Sync {
    /// Whether an API credential is currently selected.
    fn has_credential(&self) -> BoxFuture<'_, bool>;

    /// Open the host's selection flow; resolves when it finishes.
    fn prompt_for_credential(&self) -> BoxFuture<'_, ()>;
}

/// Gate for hosts without a selection capability: the credential is assumed
/// to be configured externally and prompting is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExternallyManaged;

impl CredentialGate for ExternallyManaged {
    fn has_credential(&self) -> BoxFuture<'_, bool> {
        ready(true).boxed()
    }

    fn prompt_for_credential(&self) -> BoxFuture<'_, ()> {
        ready(()).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn externally_managed_assumes_credential() {
        let gate = ExternallyManaged;
        assert!(gate.has_credential().await);
        gate.prompt_for_credential().await;
    }
}
