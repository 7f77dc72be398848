//! Default endpoints, selectors, durations and colors.

// ── Endpoints ───────────────────────────────────────────────────

/// Session/user payload endpoint.
pub const USER_INFO_ENDPOINT: &str = "/api/user";

/// Session termination endpoint.
pub const LOGOUT_ENDPOINT: &str = "/api/logout";

// ── DOM tags ────────────────────────────────────────────────────

/// Elements that display the user's name.
pub const USER_NAME_SELECTOR: &str = ".user-name";

/// Image elements that display the user's avatar.
pub const USER_AVATAR_SELECTOR: &str = ".user-avatar";

/// Controls that trigger logout on click.
pub const LOGOUT_SELECTOR: &str = ".logout-item";

/// Id of the optional `<script type="application/json">` holding page config.
pub const CONFIG_ELEMENT_ID: &str = "userbar-config";

// ── Page globals ────────────────────────────────────────────────

/// `window` property holding the last authenticated user.
pub const GLOBAL_CURRENT_USER: &str = "currentUser";
pub const GLOBAL_SHOW_NOTIFICATION: &str = "showNotification";
pub const GLOBAL_LOAD_USER_INFO: &str = "loadUserInfo";
pub const GLOBAL_LOGOUT: &str = "logout";

// ── Timing ──────────────────────────────────────────────────────

/// Wait after a successful logout so the cleared cookie lands before reload.
pub const RELOAD_DELAY_MS: u32 = 100;

/// Delay between appending a notification and sliding it in.
pub const NOTIFICATION_ENTRY_DELAY_MS: u32 = 100;

/// Time from append until the notification starts fading out.
pub const NOTIFICATION_DWELL_MS: u32 = 4000;

/// Fade-out duration; also the CSS transition duration.
pub const NOTIFICATION_EXIT_MS: u32 = 300;

// ── Notification colors ─────────────────────────────────────────

pub const SUCCESS_COLOR: &str = "#10b981";
pub const FAILURE_COLOR: &str = "#ef4444";

// ── Logging ─────────────────────────────────────────────────────

pub const DEFAULT_LOG_LEVEL: &str = "info";
