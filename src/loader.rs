//! User info loading: fetch, then record and present if authenticated.
//!
//! ERROR HANDLING
//! ==============
//! Fetch failures are logged once and turned into `None`. Nothing is rolled
//! back and nothing is retried.

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;

use std::future::Future;

use crate::error::ApiError;
use crate::present::{ProfileSurface, apply_user_info};
use crate::session::SessionContext;
use crate::user::UserInfo;

/// Run one load with the given fetch step.
///
/// - Authenticated payload: stored in `session`, presented on `surface`,
///   returned.
/// - Unauthenticated payload: no writes, returns `None`.
/// - Fetch error: one `error` log line, no writes, returns `None`.
pub async fn load_with<F, Fut, S>(
    fetch: F,
    session: &SessionContext,
    surface: &mut S,
) -> Option<UserInfo>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<UserInfo, ApiError>>,
    S: ProfileSurface + ?Sized,
{
    let user = match fetch().await {
        Ok(user) => user,
        Err(e) => {
            log::error!("Error loading user info: {e}");
            return None;
        }
    };

    if !user.authenticated {
        log::debug!("user info: not authenticated");
        return None;
    }

    session.set_current_user(user.clone());
    let applied = apply_user_info(&user, surface);
    log::debug!(
        "user info: updated {} name and {} avatar elements",
        applied.names,
        applied.avatars
    );
    Some(user)
}
