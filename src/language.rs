//! Language reference used for instruction text
//!
//! A plain string-substitution table: templates and direction words go in,
//! translated strings come out. Entries without a translation pass through
//! unchanged. Templates carry positional `{0}`/`{1}` placeholders.

use rustc_hash::FxHashMap;

pub trait LanguageReference {
    /// Translate a template or word; unknown entries are returned as-is.
    fn lookup<'a>(&'a self, text: &'a str) -> &'a str;
}

/// Identity reference; templates and words are already English.
#[derive(Debug, Clone, Copy, Default)]
pub struct English;

impl LanguageReference for English {
    fn lookup<'a>(&'a self, text: &'a str) -> &'a str {
        text
    }
}

/// Map-backed reference for hosts that load translations.
#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    entries: FxHashMap<String, String>,
}

impl TranslationTable {
    pub fn new() -> TranslationTable {
        TranslationTable::default()
    }

    pub fn insert(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.entries.insert(from.into(), to.into());
    }
}

impl LanguageReference for TranslationTable {
    fn lookup<'a>(&'a self, text: &'a str) -> &'a str {
        self.entries.get(text).map(String::as_str).unwrap_or(text)
    }
}

/// Fill positional `{0}`/`{1}` placeholders in a template.
pub(crate) fn substitute(template: &str, args: &[&str]) -> String {
    let mut text = template.to_string();
    for (index, arg) in args.iter().enumerate() {
        text = text.replace(&format!("{{{index}}}"), arg);
    }
    text
}
