//! Document readiness as reported by `document.readyState`.

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadyState {
    Loading,
    Interactive,
    Complete,
}

impl ReadyState {
    /// Parse the DOM's string value. Anything unrecognized counts as
    /// `Complete`, so the page is wired immediately rather than never.
    #[must_use]
    pub fn parse(state: &str) -> Self {
        match state {
            "loading" => Self::Loading,
            "interactive" => Self::Interactive,
            _ => Self::Complete,
        }
    }

    /// Whether wiring has to wait for `DOMContentLoaded`.
    #[must_use]
    pub fn awaits_dom_content_loaded(self) -> bool {
        self == Self::Loading
    }
}
