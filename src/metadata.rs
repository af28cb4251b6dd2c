//! Cosmetic coin metadata derived from the user's idea.
//!
//! Pure string derivation: display name, ticker, description, and the fixed
//! social-link placeholders shown on the generator page.

const DESCRIPTION_TEMPLATE_TAIL: &str =
    "is the meme coin the internet did not know it needed. Community first, utility later, vibes always.";

const SOCIAL_LINKS: [&str; 3] = ["Twitter", "Telegram", "Website"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinMetadata {
    pub name: String,
    pub ticker: String,
    pub description: String,
    pub social_links: Vec<String>,
}

impl CoinMetadata {
    /// Derive all display fields from the idea text. Validation of the idea
    /// happens at the API boundary; an empty idea here just yields empty
    /// name and ticker.
    pub fn synthesize(idea: &str) -> Self {
        CoinMetadata {
            name: title_case(idea),
            ticker: ticker(idea),
            description: format!("\"{}\" {}", idea, DESCRIPTION_TEMPLATE_TAIL),
            social_links: SOCIAL_LINKS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// First letter of each whitespace-separated word uppercased, the rest
/// lowercased.
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercase initials of the first three words. Fewer words, shorter ticker.
fn ticker(text: &str) -> String {
    text.split_whitespace()
        .take(3)
        .filter_map(|word| word.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticker_takes_first_three_initials() {
        assert_eq!(CoinMetadata::synthesize("cool doge coin").ticker, "CDC");
        assert_eq!(CoinMetadata::synthesize("very cool doge coin").ticker, "VCD");
    }

    #[test]
    fn ticker_shrinks_with_fewer_words() {
        assert_eq!(CoinMetadata::synthesize("moon").ticker, "M");
        assert_eq!(CoinMetadata::synthesize("to the").ticker, "TT");
        assert_eq!(CoinMetadata::synthesize("").ticker, "");
    }

    #[test]
    fn name_is_title_cased() {
        assert_eq!(CoinMetadata::synthesize("cool doge coin").name, "Cool Doge Coin");
        assert_eq!(CoinMetadata::synthesize("MOON soon").name, "Moon Soon");
    }

    #[test]
    fn description_contains_idea_verbatim() {
        let meta = CoinMetadata::synthesize("cool doge coin");
        assert!(meta.description.contains("cool doge coin"));
    }

    #[test]
    fn social_links_are_fixed() {
        let meta = CoinMetadata::synthesize("anything");
        assert_eq!(meta.social_links, vec!["Twitter", "Telegram", "Website"]);
    }
}
