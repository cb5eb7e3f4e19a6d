//! Navigation-token history.
//!
//! A single-page editor keeps its current view in a *token*: the part of the
//! location after a fixed path prefix, followed by the query string. This
//! module models the browser history behind it as the [`History`] trait,
//! with [`TokenTransformer`] deciding how tokens map to locations.
//!
//! [`MemoryHistory`] is the in-process implementation; a binding to a real
//! browser history implements the same trait.
//!
//! # Examples
//!
//! ```rust
//! use ruler::history::{self, History};
//!
//! let mut h = history::create();
//! history::enable(&mut h);
//!
//! history::set_token(&mut h, "workspace/1").unwrap();
//! assert_eq!(h.token(), "workspace/1");
//! assert_eq!(h.location().hash, "#workspace/1");
//!
//! history::replace_token(&mut h, "workspace/2").unwrap();
//! assert_eq!(h.len(), 2);
//! ```

mod memory;
mod transformer;

pub use memory::MemoryHistory;
pub use transformer::{Location, PrefixTokenTransformer, TokenTransformer};

use crate::error::HistoryError;

/// Announces that the current token changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigateEvent {
    /// The token navigated to.
    pub token: String,
    /// True when the user moved through history (back), false when the
    /// application set the token itself.
    pub is_navigation: bool,
}

/// A history of navigation tokens.
pub trait History {
    /// Starts dispatching navigation events.
    fn enable(&mut self);

    /// Stops dispatching navigation events. Tokens can still be set.
    fn disable(&mut self);

    fn is_enabled(&self) -> bool;

    /// The token for the current location.
    fn token(&self) -> String;

    /// Navigates to `token`, adding a history entry.
    ///
    /// Does nothing if `token` is already current.
    fn set_token(&mut self, token: &str) -> Result<(), HistoryError>;

    /// Navigates to `token` in place of the current entry.
    fn replace_token(&mut self, token: &str) -> Result<(), HistoryError>;
}

/// A fragment-mode history rooted at `/`.
pub fn create() -> MemoryHistory<PrefixTokenTransformer> {
    let mut history = MemoryHistory::new(PrefixTokenTransformer, "/", Location::new("/", ""));
    history.set_use_fragment(true);
    history
}

pub fn enable<H: History + ?Sized>(history: &mut H) {
    history.enable();
}

pub fn disable<H: History + ?Sized>(history: &mut H) {
    history.disable();
}

pub fn set_token<H: History + ?Sized>(history: &mut H, token: &str) -> Result<(), HistoryError> {
    history.set_token(token)
}

pub fn replace_token<H: History + ?Sized>(
    history: &mut H,
    token: &str,
) -> Result<(), HistoryError> {
    history.replace_token(token)
}
