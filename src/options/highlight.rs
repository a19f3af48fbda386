//! Highlighting request settings.

use serde::{Deserialize, Serialize};

use crate::params::{
    HIGHLIGHT, HIGHLIGHT_FIELDS, HIGHLIGHT_FRAGMENT_SIZE, HIGHLIGHT_POST, HIGHLIGHT_PRE,
    HIGHLIGHT_SNIPPETS, Parameters,
};

/// Server-side markup of matched terms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightOptions {
    /// Fields to highlight; empty means the server default.
    pub fields: Vec<String>,
    /// Markup placed before a matched term.
    pub before_term: Option<String>,
    /// Markup placed after a matched term.
    pub after_term: Option<String>,
    /// Size of each snippet in characters.
    pub fragment_size: Option<usize>,
    /// Maximum number of snippets per field.
    pub snippets: Option<usize>,
}

impl HighlightOptions {
    /// Create new highlighting settings for the given fields.
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        HighlightOptions {
            fields: fields.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Set the markup placed before and after a matched term.
    pub fn markup<B: Into<String>, A: Into<String>>(mut self, before: B, after: A) -> Self {
        self.before_term = Some(before.into());
        self.after_term = Some(after.into());
        self
    }

    /// Set the snippet size.
    pub fn fragment_size(mut self, fragment_size: usize) -> Self {
        self.fragment_size = Some(fragment_size);
        self
    }

    /// Set the maximum number of snippets per field.
    pub fn snippets(mut self, snippets: usize) -> Self {
        self.snippets = Some(snippets);
        self
    }

    /// Add the highlighting parameters.
    pub fn apply(&self, params: &mut Parameters) {
        params.set(HIGHLIGHT, "true");
        if !self.fields.is_empty() {
            params.set(HIGHLIGHT_FIELDS, self.fields.join(","));
        }
        if let Some(before) = &self.before_term {
            params.set(HIGHLIGHT_PRE, before.as_str());
        }
        if let Some(after) = &self.after_term {
            params.set(HIGHLIGHT_POST, after.as_str());
        }
        if let Some(fragment_size) = self.fragment_size {
            params.set(HIGHLIGHT_FRAGMENT_SIZE, fragment_size.to_string());
        }
        if let Some(snippets) = self.snippets {
            params.set(HIGHLIGHT_SNIPPETS, snippets.to_string());
        }
    }
}
