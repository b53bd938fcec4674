//! UI label lookup with language fallback.
//!
//! Every labelled control registers an id and a slot kind once at setup;
//! lookups then go through the registry instead of any runtime inspection
//! of the widget tree. Extra languages are flat id → text JSON maps; ids
//! missing from the active language fall back to the default language.

use std::collections::HashMap;

/// Where a label is written on its control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelSlot {
    /// Plain visible text (headings, counters).
    Text,
    /// Caption of a push button.
    ButtonLabel,
    /// Placeholder of a numeric input.
    Placeholder,
    /// Entry in a selector.
    OptionLabel,
    /// Heading of a selector group.
    GroupLabel,
}

#[derive(Debug)]
pub struct LabelRegistry {
    default_lang: String,
    current_lang: String,
    slots: HashMap<String, LabelSlot>,
    /// lang → id → text.
    labels: HashMap<String, HashMap<String, String>>,
}

impl LabelRegistry {
    pub fn new(default_lang: impl Into<String>) -> Self {
        let default_lang = default_lang.into();
        let mut labels = HashMap::new();
        labels.insert(default_lang.clone(), HashMap::new());
        Self {
            current_lang: default_lang.clone(),
            default_lang,
            slots: HashMap::new(),
            labels,
        }
    }

    /// Registers a control's label in the default language.
    pub fn register(&mut self, id: impl Into<String>, slot: LabelSlot, text: impl Into<String>) {
        let id = id.into();
        self.slots.insert(id.clone(), slot);
        self.labels
            .get_mut(&self.default_lang)
            .expect("default language map exists")
            .insert(id, text.into());
    }

    /// Installs a language from a flat id → text JSON document.
    pub fn install_language_json(&mut self, lang: &str, json: &str) -> Result<(), serde_json::Error> {
        let map: HashMap<String, String> = serde_json::from_str(json)?;
        self.labels.insert(lang.to_string(), map);
        Ok(())
    }

    /// Switches the active language; false if it was never installed.
    pub fn set_language(&mut self, lang: &str) -> bool {
        if !self.labels.contains_key(lang) {
            return false;
        }
        self.current_lang = lang.to_string();
        true
    }

    pub fn current_language(&self) -> &str {
        &self.current_lang
    }

    /// Installed language codes, default language first.
    pub fn languages(&self) -> Vec<&str> {
        let mut langs: Vec<&str> = self.labels.keys().map(String::as_str).collect();
        langs.sort_unstable_by_key(|&l| (l != self.default_lang, l));
        langs
    }

    pub fn slot(&self, id: &str) -> Option<LabelSlot> {
        self.slots.get(id).copied()
    }

    /// Active-language text for an id, falling back to the default
    /// language, and to the id itself for anything never registered.
    pub fn current_label<'a>(&'a self, id: &'a str) -> &'a str {
        self.labels
            .get(&self.current_lang)
            .and_then(|m| m.get(id))
            .or_else(|| self.labels.get(&self.default_lang).and_then(|m| m.get(id)))
            .map(String::as_str)
            .unwrap_or(id)
    }
}
