//! Theme slice.

use std::str::FromStr;
use std::sync::Arc;

use vitrine_core::Theme;

use crate::storage::StorageBridge;

pub(crate) const THEME_KEY: &str = "theme";

/// Receives the chosen theme so the presentation layer can react.
///
/// In a browser this would be a root-level document class flag; here it is
/// a port with an inert default. This is the only cross-cutting side effect
/// any slice performs.
pub trait ThemeSink: Send + Sync {
    fn apply(&self, theme: Theme);
}

/// A sink that drops the reflection.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardSink;

impl ThemeSink for DiscardSink {
    fn apply(&self, _theme: Theme) {}
}

/// Tracks the binary display mode.
pub struct ThemeSlice {
    theme: Theme,
    bridge: Arc<dyn StorageBridge>,
    sink: Arc<dyn ThemeSink>,
}

impl ThemeSlice {
    pub(super) fn new(bridge: Arc<dyn StorageBridge>, sink: Arc<dyn ThemeSink>) -> Self {
        Self {
            theme: Theme::default(),
            bridge,
            sink,
        }
    }

    /// Hydrate from the bridge.
    ///
    /// Adopts the persisted theme when present and parseable, else the host
    /// preference when given, else light. A malformed stored token falls back
    /// rather than failing hydration. Reflects the result through the sink.
    pub fn initialize(&mut self, host_preference: Option<Theme>) {
        self.theme = match self.bridge.read(THEME_KEY) {
            Some(raw) => Theme::from_str(raw.trim()).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "ignoring malformed persisted theme");
                host_preference.unwrap_or_default()
            }),
            None => host_preference.unwrap_or_default(),
        };
        self.sink.apply(self.theme);
    }

    /// Assign, persist, reflect.
    pub fn set(&mut self, theme: Theme) {
        self.theme = theme;
        self.persist();
        self.sink.apply(self.theme);
    }

    /// Flip light/dark, persist, reflect. Returns the new theme.
    pub fn toggle(&mut self) -> Theme {
        self.set(self.theme.toggled());
        self.theme
    }

    #[must_use]
    pub const fn current(&self) -> Theme {
        self.theme
    }

    fn persist(&self) {
        self.bridge.write(THEME_KEY, self.theme.as_str());
    }
}
