use marquee_i18n::Language;

use crate::Theme;

/// Ambient document-level attributes the preference store pushes into.
///
/// The real sink sets the locale attribute and the style-scope class
/// the visual layer keys its text direction and palette off; keeping it
/// behind a trait keeps the store testable without a document.
pub trait EnvironmentSink {
    fn set_locale(&self, language: Language);
    fn set_color_scheme(&self, theme: Theme);
}

/// Sink that swallows everything, for headless use.
pub struct NullSink;

impl EnvironmentSink for NullSink {
    fn set_locale(&self, _language: Language) {}
    fn set_color_scheme(&self, _theme: Theme) {}
}
