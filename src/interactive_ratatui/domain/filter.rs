/// The (language, text) pair identifying a logical query.
///
/// Blank values are stored as `None`, so two filters compare equal exactly
/// when they constrain the search the same way.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Filter {
    language: Option<String>,
    text: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterKind {
    Language,
    Text,
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Filter {
    pub fn new(language: Option<String>, text: Option<String>) -> Self {
        Self {
            language: normalize(language),
            text: normalize(text),
        }
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.language.is_none() && self.text.is_none()
    }

    pub fn with_language(&self, language: Option<String>) -> Self {
        Self::new(language, self.text.clone())
    }

    pub fn with_text(&self, text: Option<String>) -> Self {
        Self::new(self.language.clone(), text)
    }

    /// Selecting the language that is already active clears it.
    pub fn toggle_language(&self, language: &str) -> Self {
        if self.language() == Some(language.trim()) {
            self.with_language(None)
        } else {
            self.with_language(Some(language.to_string()))
        }
    }

    pub fn cleared(&self, kind: FilterKind) -> Self {
        match kind {
            FilterKind::Language => self.with_language(None),
            FilterKind::Text => self.with_text(None),
        }
    }
}
