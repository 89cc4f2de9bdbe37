use crate::core::{AccessPolicy, Result, Session};
use crate::utils::error::SolidError;

/// Rejects anonymous sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequireAuthenticated;

impl AccessPolicy for RequireAuthenticated {
    fn authorize(&self, session: &Session) -> Result<()> {
        if session.is_authenticated() {
            Ok(())
        } else {
            Err(SolidError::AccessDenied {
                message: "authentication required".to_string(),
            })
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAnonymous;

impl AccessPolicy for AllowAnonymous {
    fn authorize(&self, _session: &Session) -> Result<()> {
        Ok(())
    }
}

/// Picks the policy once from configuration.
pub fn policy_for(require_auth: bool) -> Box<dyn AccessPolicy> {
    if require_auth {
        Box::new(RequireAuthenticated)
    } else {
        Box::new(AllowAnonymous)
    }
}
