#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::user::UserInfo;

/// Page-lifetime holder for the last authenticated user.
///
/// Clones share the same slot. Any component may read it; only the loader
/// writes it, and always with a complete payload.
#[derive(Clone, Debug, Default)]
pub struct SessionContext {
    current: Rc<RefCell<Option<UserInfo>>>,
}

impl SessionContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current user, if one has been loaded.
    #[must_use]
    pub fn current_user(&self) -> Option<UserInfo> {
        self.current.borrow().clone()
    }

    #[cfg(test)]
    pub(crate) fn is_signed_in(&self) -> bool {
        self.current.borrow().is_some()
    }

    pub(crate) fn set_current_user(&self, user: UserInfo) {
        *self.current.borrow_mut() = Some(user);
    }
}
