//! Check Session Use Case
//!
//! Resolves a session cookie value into its claims.

use std::sync::Arc;

use crate::application::session_codec::{SessionClaims, SessionCodec};
use crate::error::{AuthError, AuthResult};

/// Check session use case
pub struct CheckSessionUseCase {
    codec: Arc<dyn SessionCodec>,
}

impl CheckSessionUseCase {
    pub fn new(codec: Arc<dyn SessionCodec>) -> Self {
        Self { codec }
    }

    /// Absent, malformed, tampered and expired tokens all yield
    /// `AuthError::SessionInvalid`.
    pub fn execute(&self, session_token: Option<&str>) -> AuthResult<SessionClaims> {
        let token = session_token
            .filter(|t| !t.is_empty())
            .ok_or(AuthError::SessionInvalid)?;

        self.codec.decode(token)
    }

    /// Just check if session is valid
    pub fn is_valid(&self, session_token: Option<&str>) -> bool {
        self.execute(session_token).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::session_codec::HmacSessionCodec;
    use kernel::id::UserId;
    use std::time::Duration;

    #[test]
    fn test_check_session() {
        let codec: Arc<dyn SessionCodec> = Arc::new(HmacSessionCodec::new(vec![3u8; 32]).unwrap());
        let use_case = CheckSessionUseCase::new(codec.clone());

        let claims = SessionClaims::new(UserId::new(), "alice", Duration::from_secs(60));
        let token = codec.encode(&claims).unwrap();

        assert_eq!(use_case.execute(Some(&token)).unwrap(), claims);
        assert!(!use_case.is_valid(None));
        assert!(!use_case.is_valid(Some("")));
        assert!(!use_case.is_valid(Some("forged.token")));
    }
}
