//! services/tui/src/adapters/verifier.rs
//!
//! The demo credential verifier: the concrete implementation of the
//! `CredentialVerifier` port. It performs no credential lookup and keeps no
//! account store; any well-formed input is accepted and an identity is
//! synthesized on the spot. A real deployment would swap in a verifier
//! backed by an actual credential subsystem without touching the core.

use async_trait::async_trait;
use uuid::Uuid;

use tooldex_core::domain::User;
use tooldex_core::ports::{Credentials, CredentialVerifier, PortError, PortResult};

/// Accept-anything verifier for the demo sign-in flow.
#[derive(Clone, Default)]
pub struct DemoVerifier;

#[async_trait]
impl CredentialVerifier for DemoVerifier {
    async fn verify(&self, credentials: &Credentials) -> PortResult<User> {
        let email = credentials.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(PortError::Rejected("Enter a valid email address".to_string()));
        }
        if credentials.password.is_empty() {
            return Err(PortError::Rejected("Enter a password".to_string()));
        }

        // Display name: the registered name if given, otherwise the email's
        // local part.
        let name = credentials
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| email.split('@').next().unwrap_or(email))
            .to_string();

        Ok(User {
            id: Uuid::new_v4(),
            name,
            email: email.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials(name: Option<&str>, email: &str, password: &str) -> Credentials {
        Credentials {
            name: name.map(str::to_string),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn any_well_formed_login_is_accepted() {
        let user = DemoVerifier
            .verify(&credentials(None, "ada@example.com", "anything"))
            .await
            .unwrap();
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.name, "ada");
    }

    #[tokio::test]
    async fn registered_name_wins_over_the_email_local_part() {
        let user = DemoVerifier
            .verify(&credentials(Some("Ada Lovelace"), "ada@example.com", "pw"))
            .await
            .unwrap();
        assert_eq!(user.name, "Ada Lovelace");
    }

    #[tokio::test]
    async fn malformed_email_is_rejected() {
        for email in ["", "   ", "no-at-sign"] {
            let result = DemoVerifier.verify(&credentials(None, email, "pw")).await;
            assert!(matches!(result, Err(PortError::Rejected(_))), "email {email:?}");
        }
    }

    #[tokio::test]
    async fn empty_password_is_rejected() {
        let result = DemoVerifier
            .verify(&credentials(None, "ada@example.com", ""))
            .await;
        assert!(matches!(result, Err(PortError::Rejected(_))));
    }

    #[tokio::test]
    async fn each_login_synthesizes_a_fresh_identity() {
        let first = DemoVerifier
            .verify(&credentials(None, "ada@example.com", "pw"))
            .await
            .unwrap();
        let second = DemoVerifier
            .verify(&credentials(None, "ada@example.com", "pw"))
            .await
            .unwrap();
        assert_ne!(first.id, second.id);
    }
}
