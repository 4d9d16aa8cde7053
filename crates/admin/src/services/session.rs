//! Admin sign-in, passed through to the identity service.

use tracing::info;

use chops_and_chips_core::{AdminIdentity, Email, IdentityGateway};

use crate::error::Result;

/// The admin login screen's operations.
///
/// Credentials are checked by the external identity service; this service
/// only parses the form input and relays the outcome. A failed sign-in is a
/// normal `Err` the page renders, never a panic or process exit.
pub struct AdminSession<'a, I: IdentityGateway> {
    identity: &'a mut I,
}

impl<'a, I: IdentityGateway> AdminSession<'a, I> {
    /// A session over the identity service.
    pub fn new(identity: &'a mut I) -> Self {
        Self { identity }
    }

    /// Sign in with the login form's email and password.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::AppError::InvalidEmail`] for an unparseable
    /// email and [`crate::error::AppError::Backend`] when the identity
    /// service rejects the credentials.
    pub fn sign_in(&mut self, email: &str, password: &str) -> Result<AdminIdentity> {
        let email = Email::parse(email)?;
        let identity = self.identity.sign_in(&email, password)?;
        info!(admin = %identity.email, "admin signed in");
        Ok(identity)
    }

    /// Sign the current admin out; signing out while signed out is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::AppError::Backend`] on transport failure.
    pub fn sign_out(&mut self) -> Result<()> {
        self.identity.sign_out()?;
        info!("admin signed out");
        Ok(())
    }

    /// The currently signed-in admin, if any.
    #[must_use]
    pub fn current(&self) -> Option<&AdminIdentity> {
        self.identity.current()
    }
}
