//! Prompt composition for generation requests.
//!
//! Combines the fixed mascot template, the user's idea, and the resolved
//! style fragment into the final text sent to the generation service.
use crate::prompt::styles;

/// The final prompt text for one request. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedPrompt {
    text: String,
}

impl ComposedPrompt {
    /// Compose the prompt from an idea and a style key. The style key is
    /// resolved through the style table, so any input is acceptable here.
    pub fn compose(idea: &str, style_key: &str) -> Self {
        let fragment = styles::style_fragment(style_key);
        let text = format!(
            "A meme coin mascot inspired by \"{}\". {}. Single centered subject, clean background, high detail.",
            idea, fragment
        );
        ComposedPrompt { text }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}
