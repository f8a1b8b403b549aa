use crate::error::ErrorKind;
use crate::Site;

/// Indent applied to every context line in the rendered message.
pub const CONTEXT_INDENT: &str = "  ";

/// Full error record behind a `CheckError`.
///
/// `message` never changes after construction. `context` only grows.
/// `rendered` is the no-backtrace view and is kept in step with `context`
/// by [`ErrorContext::push_context`].
pub struct ErrorContext {
    // ── Identity ──────────────────────────────────────────────
    pub kind:       ErrorKind,
    pub site:       Site,
    pub condition:  Option<&'static str>,

    // ── Message ───────────────────────────────────────────────
    pub(crate) message:  String,
    pub(crate) context:  Vec<String>,
    pub(crate) rendered: String,

    // ── Backtrace ─────────────────────────────────────────────
    pub backtrace:  Option<String>,
}

impl ErrorContext {
    pub fn new(kind: ErrorKind, message: String, site: Site) -> Self {
        Self {
            kind,
            site,
            condition: None,
            rendered: message.clone(),
            message,
            context: Vec::new(),
            backtrace: None,
        }
    }

    pub fn with_condition(mut self, condition: &'static str) -> Self {
        self.condition = Some(condition);
        self
    }

    /// Capture a backtrace unless disabled by `GCHECK_BACKTRACE`.
    ///
    /// `std::backtrace` additionally honors `RUST_BACKTRACE` and
    /// `RUST_LIB_BACKTRACE`; when it reports anything other than a captured
    /// trace the field stays `None`.
    pub fn capture_backtrace(&mut self) {
        use std::backtrace::{Backtrace, BacktraceStatus};

        if self.backtrace.is_some() || !gcheck_core::backtrace_enabled() {
            return;
        }
        let bt = Backtrace::capture();
        if bt.status() == BacktraceStatus::Captured {
            self.backtrace = Some(bt.to_string());
        }
    }

    pub fn push_context(&mut self, line: String) {
        self.rendered.push('\n');
        self.rendered.push_str(CONTEXT_INDENT);
        self.rendered.push_str(&line);
        self.context.push(line);
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn context(&self) -> &[String] {
        &self.context
    }

    pub fn rendered(&self) -> &str {
        &self.rendered
    }
}

impl core::fmt::Debug for ErrorContext {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut d = f.debug_struct("ErrorContext");
        d.field("kind", &self.kind);
        d.field("message", &self.message);
        if !self.context.is_empty() {
            d.field("context", &self.context);
        }
        if let Some(cond) = self.condition {
            d.field("condition", &cond);
        }
        d.field("site", &self.site);
        if self.backtrace.is_some() {
            d.field("backtrace", &"<captured>");
        }
        d.finish()
    }
}
