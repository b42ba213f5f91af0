//! Supported languages and the current-language context.
//!
//! The site ships in exactly two languages: English (left-to-right) and
//! Arabic (right-to-left). [`Language`] is a closed enum, so every match on it
//! is exhaustive and an unsupported code can only enter through
//! [`Language::from_code`], which rejects it.
//!
//! [`LanguageState`] is the single mutable piece of the system. It is an
//! explicit value handed to whoever renders, not a global: tests build their
//! own, and the generator drives one through [`Language::ALL`].
//!
//! ```text
//! set_language(Ar) ──► current = Ar ──► subscribers(LanguageSnapshot { Ar, Rtl })
//! set_language(Ar) ──► unchanged    ──► (no notification)
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Raised when a language code outside the supported set is requested.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported language code: '{0}' (expected one of: en, ar)")]
pub struct InvalidLanguageError(pub String);

/// A supported site language.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
}

/// Text direction of a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    /// Value of the HTML `dir` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Language {
    /// Every supported language, in the order pages are generated.
    pub const ALL: [Language; 2] = [Language::En, Language::Ar];

    /// Parse an ISO 639-1 code. Matching is exact after trimming and lowercasing.
    pub fn from_code(code: &str) -> Result<Language, InvalidLanguageError> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "ar" => Ok(Language::Ar),
            _ => Err(InvalidLanguageError(code.to_string())),
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    /// English name of the language.
    pub fn name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ar => "Arabic",
        }
    }

    /// Name of the language written in that language (used by the toggle).
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ar => "العربية",
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Language::En => Direction::Ltr,
            Language::Ar => Direction::Rtl,
        }
    }

    pub fn is_rtl(self) -> bool {
        self.direction() == Direction::Rtl
    }

    /// Open Graph locale (`og:locale`).
    pub fn og_locale(self) -> &'static str {
        match self {
            Language::En => "en_US",
            Language::Ar => "ar_KW",
        }
    }

    /// The language the toggle switches to.
    pub fn other(self) -> Language {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = InvalidLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s)
    }
}

// =============================================================================
// Language state
// =============================================================================

/// What subscribers observe after a language change.
///
/// Direction is derived from the language when the snapshot is built, so a
/// language/direction mismatch cannot be observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageSnapshot {
    pub language: Language,
    pub direction: Direction,
}

impl From<Language> for LanguageSnapshot {
    fn from(language: Language) -> Self {
        Self {
            language,
            direction: language.direction(),
        }
    }
}

/// Handle returned by [`LanguageState::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(LanguageSnapshot)>;

/// The current language plus the views that depend on it.
///
/// One writer path (`set_language*`) and many readers. Single-threaded:
/// listeners are plain `FnMut` closures and run synchronously inside the
/// setter, before it returns.
pub struct LanguageState {
    current: Language,
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl LanguageState {
    pub fn new(initial: Language) -> Self {
        Self {
            current: initial,
            next_id: 0,
            listeners: Vec::new(),
        }
    }

    pub fn current(&self) -> Language {
        self.current
    }

    pub fn is_rtl(&self) -> bool {
        self.current.is_rtl()
    }

    pub fn snapshot(&self) -> LanguageSnapshot {
        LanguageSnapshot::from(self.current)
    }

    /// Switch language. Returns `false` (and notifies nobody) when `language`
    /// is already current.
    pub fn set_language(&mut self, language: Language) -> bool {
        if language == self.current {
            return false;
        }
        self.current = language;
        let snapshot = self.snapshot();
        tracing::debug!(language = %language, dir = %snapshot.direction, "language changed");
        for (_, listener) in &mut self.listeners {
            listener(snapshot);
        }
        true
    }

    /// Switch language from a raw code, as received from a URL or the CLI.
    ///
    /// Unsupported codes leave the current language untouched.
    pub fn set_language_code(&mut self, code: &str) -> Result<bool, InvalidLanguageError> {
        match Language::from_code(code) {
            Ok(language) => Ok(self.set_language(language)),
            Err(err) => {
                tracing::warn!(code, current = %self.current, "rejected unsupported language");
                Err(err)
            }
        }
    }

    pub fn subscribe(&mut self, listener: impl FnMut(LanguageSnapshot) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }
}

impl Default for LanguageState {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl fmt::Debug for LanguageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageState")
            .field("current", &self.current)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording_state(initial: Language) -> (LanguageState, Rc<RefCell<Vec<LanguageSnapshot>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut state = LanguageState::new(initial);
        let sink = Rc::clone(&seen);
        state.subscribe(move |snap| sink.borrow_mut().push(snap));
        (state, seen)
    }

    #[test]
    fn from_code_accepts_supported_codes() {
        assert_eq!(Language::from_code("en"), Ok(Language::En));
        assert_eq!(Language::from_code("ar"), Ok(Language::Ar));
        assert_eq!(Language::from_code(" AR "), Ok(Language::Ar));
    }

    #[test]
    fn from_code_rejects_unsupported() {
        let err = Language::from_code("fr").unwrap_err();
        assert_eq!(err, InvalidLanguageError("fr".to_string()));
        assert!(err.to_string().contains("'fr'"));
    }

    #[test]
    fn direction_follows_language() {
        assert_eq!(Language::En.direction(), Direction::Ltr);
        assert_eq!(Language::Ar.direction(), Direction::Rtl);
        assert!(Language::Ar.is_rtl());
        assert!(!Language::En.is_rtl());
    }

    #[test]
    fn og_locales() {
        assert_eq!(Language::En.og_locale(), "en_US");
        assert_eq!(Language::Ar.og_locale(), "ar_KW");
    }

    #[test]
    fn other_toggles() {
        assert_eq!(Language::En.other(), Language::Ar);
        assert_eq!(Language::Ar.other(), Language::En);
    }

    #[test]
    fn serde_uses_codes() {
        assert_eq!(serde_json::to_string(&Language::Ar).unwrap(), "\"ar\"");
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::En);
    }

    #[test]
    fn default_state_is_english() {
        let state = LanguageState::default();
        assert_eq!(state.current(), Language::En);
        assert!(!state.is_rtl());
    }

    #[test]
    fn set_language_notifies_with_consistent_snapshot() {
        let (mut state, seen) = recording_state(Language::En);
        assert!(state.set_language(Language::Ar));
        assert!(state.is_rtl());
        assert_eq!(
            *seen.borrow(),
            vec![LanguageSnapshot {
                language: Language::Ar,
                direction: Direction::Rtl
            }]
        );
    }

    #[test]
    fn set_same_language_is_silent() {
        let (mut state, seen) = recording_state(Language::En);
        assert!(!state.set_language(Language::En));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn set_language_code_rejects_and_keeps_current() {
        let (mut state, seen) = recording_state(Language::Ar);
        let err = state.set_language_code("fr").unwrap_err();
        assert_eq!(err.0, "fr");
        assert_eq!(state.current(), Language::Ar);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let seen = Rc::new(RefCell::new(0));
        let mut state = LanguageState::default();
        let sink = Rc::clone(&seen);
        let id = state.subscribe(move |_| *sink.borrow_mut() += 1);
        state.set_language(Language::Ar);
        assert!(state.unsubscribe(id));
        assert!(!state.unsubscribe(id));
        state.set_language(Language::En);
        assert_eq!(*seen.borrow(), 1);
    }
}
