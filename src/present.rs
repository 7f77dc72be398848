//! Projection of a `UserInfo` onto the page header.
//!
//! SYSTEM CONTEXT
//! ==============
//! The loader decides *whether* to present; this module only decides *what*
//! to write. The DOM-backed surface lives in `dom`; tests use in-memory ones.

#[cfg(test)]
#[path = "present_test.rs"]
mod present_test;

use crate::user::UserInfo;

/// The set of page elements that show the signed-in user.
pub trait ProfileSurface {
    /// Set the text of every user-name element. Returns how many were written.
    fn set_user_names(&mut self, text: &str) -> usize;

    /// Set the image source of every user-avatar element. Returns how many
    /// were written.
    fn set_user_avatars(&mut self, src: &str) -> usize;
}

/// Element counts touched by one [`apply_user_info`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Applied {
    pub names: usize,
    pub avatars: usize,
}

/// Write the display name to every name element and, when the user has an
/// avatar, its URL to every avatar element. Without an avatar URL the
/// existing image sources are left alone.
pub fn apply_user_info<S: ProfileSurface + ?Sized>(user: &UserInfo, surface: &mut S) -> Applied {
    let names = surface.set_user_names(&user.display_name());
    let avatars = user.avatar().map_or(0, |src| surface.set_user_avatars(src));
    Applied { names, avatars }
}
