//! Ports to the persistence collaborator
//!
//! Storage and identity lookup live outside this crate; these traits are the
//! seams the request layer plugs real implementations into.

use crate::domain::account::AccountSubmission;
use crate::shared::error::AppResult;

/// Stores accounts that passed registration validation
pub trait AccountStore {
    fn store(&self, account: &AccountSubmission) -> AppResult<()>;
}

impl<T: AccountStore + ?Sized> AccountStore for &T {
    fn store(&self, account: &AccountSubmission) -> AppResult<()> {
        (**self).store(account)
    }
}

impl<T: AccountStore + ?Sized> AccountStore for std::sync::Arc<T> {
    fn store(&self, account: &AccountSubmission) -> AppResult<()> {
        (**self).store(account)
    }
}

/// Resolves a credential pair to an identity
///
/// Implemented for any `Fn(&str, &str) -> Option<I>`.
pub trait Authenticator {
    type Identity;

    fn authenticate(&self, email: &str, password: &str) -> Option<Self::Identity>;
}

impl<F, I> Authenticator for F
where
    F: Fn(&str, &str) -> Option<I>,
{
    type Identity = I;

    fn authenticate(&self, email: &str, password: &str) -> Option<I> {
        self(email, password)
    }
}
