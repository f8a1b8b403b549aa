//! Warning side-channel.
//!
//! `warn!` builds a [`Warning`] and passes it to the current thread's
//! [`WarningHandler`]. Without an override the warning is logged through
//! `kwarn!`. Overrides are scoped with [`WarningHandlerGuard`].

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::Site;

/// A warning message and the site that emitted it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    message: String,
    site: Site,
}

impl Warning {
    pub fn new(message: impl Into<String>, site: Site) -> Self {
        Self { message: message.into(), site }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn site(&self) -> Site {
        self.site
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (warning raised at {})", self.message, self.site)
    }
}

/// Receives warnings emitted on the current thread.
pub trait WarningHandler {
    fn process(&self, warning: &Warning);
}

/// Default handler: one `[WARN]` line on stderr per warning.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogWarningHandler;

impl WarningHandler for LogWarningHandler {
    fn process(&self, warning: &Warning) {
        gcheck_core::kwarn!("{}", warning);
    }
}

/// Stores warnings for later inspection.
#[derive(Debug, Default)]
pub struct CollectingWarningHandler {
    warnings: RefCell<Vec<Warning>>,
}

impl CollectingWarningHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain everything collected so far.
    pub fn take(&self) -> Vec<Warning> {
        self.warnings.take()
    }

    pub fn len(&self) -> usize {
        self.warnings.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.borrow().is_empty()
    }
}

impl WarningHandler for CollectingWarningHandler {
    fn process(&self, warning: &Warning) {
        self.warnings.borrow_mut().push(warning.clone());
    }
}

thread_local! {
    static HANDLER: RefCell<Option<Rc<dyn WarningHandler>>> = const { RefCell::new(None) };
}

/// Installs a warning handler for the current thread until dropped.
///
/// Guards nest; dropping one restores whatever was installed before it.
#[must_use = "the handler is uninstalled when the guard is dropped"]
pub struct WarningHandlerGuard {
    prev: Option<Rc<dyn WarningHandler>>,
}

impl WarningHandlerGuard {
    pub fn new(handler: Rc<dyn WarningHandler>) -> Self {
        let prev = HANDLER.with(|h| h.borrow_mut().replace(handler));
        Self { prev }
    }
}

impl Drop for WarningHandlerGuard {
    fn drop(&mut self) {
        let prev = self.prev.take();
        HANDLER.with(|h| *h.borrow_mut() = prev);
    }
}

/// Dispatch a warning to the current handler. Never fails.
pub fn warn(warning: Warning) {
    // Clone out of the cell so a handler may itself warn.
    let handler = HANDLER.with(|h| h.borrow().clone());
    match handler {
        Some(handler) => handler.process(&warning),
        None => LogWarningHandler.process(&warning),
    }
}
