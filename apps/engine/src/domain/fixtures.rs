use super::cards_types::Card;

/// Centralized helper for parsing hardcoded card tokens in fixtures and demo data.
pub struct CardFixtures;

impl CardFixtures {
    /// Parse hardcoded card tokens (e.g., `["AS", "9C", "TH"]`) into cards.
    ///
    /// Panics on an invalid token; only pass literals known to be valid.
    pub fn parse_hardcoded(tokens: &[&str]) -> Vec<Card> {
        tokens
            .iter()
            .map(|s| {
                #[allow(clippy::expect_used)]
                s.parse::<Card>().expect("hardcoded valid card token")
            })
            .collect()
    }
}
