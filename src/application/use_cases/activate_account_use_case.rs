//! Account activation use case implementation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::ActivationOutcome;
use crate::domain::ports::AuthPort;

/// Handles the one-shot account confirmation workflow.
///
/// Each execution issues exactly one confirmation call. There is no retry;
/// re-entering a code starts a fresh execution.
#[derive(Clone)]
pub struct ActivateAccountUseCase {
    auth_port: Arc<dyn AuthPort>,
}

impl ActivateAccountUseCase {
    /// Creates new activation use case.
    #[must_use]
    pub const fn new(auth_port: Arc<dyn AuthPort>) -> Self {
        Self { auth_port }
    }

    /// Confirms the account with the given code.
    ///
    /// Never fails: every underlying error (expired code, invalid code,
    /// unreachable backend) collapses into the fixed failure outcome.
    pub async fn execute(&self, code: &str) -> ActivationOutcome {
        debug!("Submitting activation code");

        match self.auth_port.confirm(code).await {
            Ok(()) => {
                info!("Account activated");
                ActivationOutcome::success()
            }
            Err(e) => {
                warn!(error = %e, "Account activation failed");
                ActivationOutcome::failure()
            }
        }
    }
}
