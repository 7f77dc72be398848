//! Logout flow: cancel the click, post to the logout endpoint, reload on
//! success.
//!
//! The reload waits a fixed delay so the cookie cleared by the server is
//! applied before the page is requested again. Non-2xx answers and network
//! failures leave the page as it is.

#[cfg(test)]
#[path = "logout_test.rs"]
mod logout_test;

use std::future::Future;

use crate::error::ApiError;

/// Something whose default browser action can be cancelled (a click event).
pub trait Cancelable {
    fn prevent_default(&self);
}

/// Page navigation side effects needed by the logout flow.
pub trait Navigator {
    /// Reload the current page once `delay_ms` has elapsed.
    fn schedule_reload(&self, delay_ms: u32);
}

impl<N: Navigator + ?Sized> Navigator for &N {
    fn schedule_reload(&self, delay_ms: u32) {
        (**self).schedule_reload(delay_ms);
    }
}

/// How one logout attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoutOutcome {
    /// Server accepted; reload scheduled.
    ReloadScheduled,
    /// Server answered with a non-2xx status.
    Rejected,
    /// The request could not be sent.
    Failed,
}

/// Post the logout request and schedule a reload if the server accepted it.
pub async fn logout_with<F, Fut, N>(post: F, navigator: &N, reload_delay_ms: u32) -> LogoutOutcome
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<bool, ApiError>>,
    N: Navigator + ?Sized,
{
    match post().await {
        Ok(true) => {
            log::debug!("logout accepted, reloading in {reload_delay_ms}ms");
            navigator.schedule_reload(reload_delay_ms);
            LogoutOutcome::ReloadScheduled
        }
        Ok(false) => {
            log::debug!("logout rejected by server");
            LogoutOutcome::Rejected
        }
        Err(e) => {
            log::error!("Error logging out: {e}");
            LogoutOutcome::Failed
        }
    }
}

/// Handle a click on a logout control.
///
/// The default action is cancelled synchronously, before the returned future
/// is first polled, so anchor navigation never starts.
pub fn begin_logout<E, F, Fut, N>(
    event: &E,
    post: F,
    navigator: N,
    reload_delay_ms: u32,
) -> impl Future<Output = LogoutOutcome> + use<E, F, Fut, N>
where
    E: Cancelable + ?Sized,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<bool, ApiError>>,
    N: Navigator,
{
    event.prevent_default();
    async move { logout_with(post, &navigator, reload_delay_ms).await }
}
