use std::fmt;
use std::mem;

use tracing::{debug, trace};

use super::{History, Location, NavigateEvent, PrefixTokenTransformer, TokenTransformer};
use crate::error::HistoryError;

type NavigateListener = Box<dyn FnMut(&NavigateEvent) + Send>;

/// A [`History`] kept in memory.
///
/// Holds the current location and a stack of earlier ones. In fragment mode
/// tokens live in the `#fragment` and the path never changes; otherwise the
/// path is rebuilt from the token with the transformer.
///
/// Navigation works whether or not the history is enabled. Enabling only
/// controls whether [`NavigateEvent`]s reach the listeners registered with
/// [`MemoryHistory::on_navigate`].
///
/// # Examples
///
/// ```
/// use std::sync::{Arc, Mutex};
///
/// use ruler::history::{History, Location, MemoryHistory, PrefixTokenTransformer};
///
/// let mut history = MemoryHistory::new(
///     PrefixTokenTransformer,
///     "/app/",
///     Location::new("/app/dashboard", ""),
/// );
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
/// history.on_navigate(move |event| sink.lock().unwrap().push(event.token.clone()));
///
/// history.enable();
/// assert_eq!(history.token(), "dashboard");
///
/// history.set_token("projects?team=3").unwrap();
/// assert_eq!(history.location().pathname, "/app/projects");
/// assert_eq!(history.location().search, "?team=3");
/// assert_eq!(history.token(), "projects?team=3");
///
/// assert_eq!(*seen.lock().unwrap(), vec!["dashboard", "projects?team=3"]);
/// ```
pub struct MemoryHistory<T = PrefixTokenTransformer> {
    transformer: T,
    path_prefix: String,
    use_fragment: bool,
    enabled: bool,
    current: Location,
    previous: Vec<Location>,
    listeners: Vec<NavigateListener>,
}

impl<T: fmt::Debug> fmt::Debug for MemoryHistory<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryHistory")
            .field("transformer", &self.transformer)
            .field("path_prefix", &self.path_prefix)
            .field("use_fragment", &self.use_fragment)
            .field("enabled", &self.enabled)
            .field("current", &self.current)
            .field("previous", &self.previous)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<T: TokenTransformer> MemoryHistory<T> {
    /// Creates a disabled, path-mode history starting at `initial`.
    pub fn new(transformer: T, path_prefix: impl Into<String>, initial: Location) -> Self {
        Self {
            transformer,
            path_prefix: path_prefix.into(),
            use_fragment: false,
            enabled: false,
            current: initial,
            previous: Vec::new(),
            listeners: Vec::new(),
        }
    }

    /// Switches between fragment mode and path mode.
    pub fn set_use_fragment(&mut self, use_fragment: bool) {
        self.use_fragment = use_fragment;
    }

    pub fn use_fragment(&self) -> bool {
        self.use_fragment
    }

    pub fn path_prefix(&self) -> &str {
        &self.path_prefix
    }

    pub fn location(&self) -> &Location {
        &self.current
    }

    /// Number of entries, the current one included.
    pub fn len(&self) -> usize {
        self.previous.len() + 1
    }

    /// Always false; there is at least the current entry.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Registers a listener for navigation events.
    ///
    /// Listeners run in registration order, and only while the history is
    /// enabled.
    pub fn on_navigate<F>(&mut self, listener: F)
    where
        F: FnMut(&NavigateEvent) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Returns to the previous entry and yields its token.
    ///
    /// This is the user pressing back, so the event it dispatches has
    /// `is_navigation` set. `None` when already at the first entry.
    pub fn back(&mut self) -> Option<String> {
        let prev = self.previous.pop()?;
        self.current = prev;
        let token = self.token();
        debug!(%token, "history back");
        self.dispatch(&token, true);
        Some(token)
    }

    fn location_for(&self, token: &str) -> Result<Location, HistoryError> {
        if self.use_fragment {
            Ok(Location {
                hash: format!("#{token}"),
                ..self.current.clone()
            })
        } else {
            let path = self
                .transformer
                .create_url(token, &self.path_prefix, &self.current);
            Location::from_path(&path)
        }
    }

    fn dispatch(&mut self, token: &str, is_navigation: bool) {
        if !self.enabled {
            trace!(token, "history disabled, event dropped");
            return;
        }
        let event = NavigateEvent {
            token: token.to_string(),
            is_navigation,
        };
        for listener in &mut self.listeners {
            listener(&event);
        }
    }
}

impl<T: TokenTransformer> History for MemoryHistory<T> {
    /// Starts dispatching events, announcing the current token.
    fn enable(&mut self) {
        if self.enabled {
            return;
        }
        self.enabled = true;
        debug!("history enabled");
        let token = self.token();
        self.dispatch(&token, false);
    }

    fn disable(&mut self) {
        self.enabled = false;
        debug!("history disabled");
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn token(&self) -> String {
        if self.use_fragment {
            self.current.fragment().to_string()
        } else {
            self.transformer
                .retrieve_token(&self.path_prefix, &self.current)
        }
    }

    fn set_token(&mut self, token: &str) -> Result<(), HistoryError> {
        if self.token() == token {
            trace!(token, "token unchanged");
            return Ok(());
        }

        let next = self.location_for(token)?;
        self.previous.push(mem::replace(&mut self.current, next));
        debug!(token, entries = self.len(), "token set");
        self.dispatch(token, false);
        Ok(())
    }

    fn replace_token(&mut self, token: &str) -> Result<(), HistoryError> {
        self.current = self.location_for(token)?;
        debug!(token, "token replaced");
        self.dispatch(token, false);
        Ok(())
    }
}
