//! # userbar
//!
//! Browser-side session glue shared by every page of the site, compiled to
//! WebAssembly. It shows the signed-in user in the page header, wires the
//! logout controls, and renders transient toast notifications.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`user`] | `UserInfo` payload and display-name rules |
//! | [`session`] | Injectable holder for the current user |
//! | [`api`] | HTTP wrappers for `/api/user` and `/api/logout` |
//! | [`present`] | Projects a `UserInfo` onto a [`present::ProfileSurface`] |
//! | [`loader`] | Fetch + present + session update, failures swallowed and logged |
//! | [`logout`] | Logout flow and reload scheduling |
//! | [`notification`] | Toast lifecycle state machine and styling |
//! | [`lifecycle`] | `document.readyState` interpretation |
//! | [`config`] | Page configuration (endpoints, selectors, timings) |
//! | [`consts`] | Default endpoints, selectors, durations and colors |
//! | `dom` / `page` | `web-sys` bindings and JS exports (`browser` feature) |
//!
//! Everything outside `dom` and `page` is plain Rust and is unit tested
//! without a browser.
//!
//! ## Page scripts
//!
//! ES module scripts can `import { showNotification, currentUser,
//! loadUserInfo, logout } from "/pkg/userbar.js"`. Classic scripts use the
//! same functions from `window`, which `start` installs, and read the user
//! from `window.currentUser` after a successful load.

pub mod api;
pub mod config;
pub mod consts;
pub mod error;
pub mod lifecycle;
pub mod loader;
pub mod logout;
pub mod notification;
pub mod present;
pub mod session;
pub mod user;

#[cfg(test)]
mod log_capture;

#[cfg(feature = "browser")]
pub mod dom;
#[cfg(feature = "browser")]
pub mod page;
