// SPDX-License-Identifier: MIT OR Apache-2.0
//! Built-in deck catalog.
//!
//! Deck files live under `decks/` as RON and are embedded at compile
//! time; each is parsed and validated once at startup, before any
//! navigation is accepted.

use stepdeck_sequencer::{Storyboard, StoryboardError};

/// A built-in deck: CLI slug plus its embedded RON source
#[derive(Debug, Clone, Copy)]
pub struct BuiltinDeck {
    /// Selection key used on the command line
    pub slug: &'static str,
    /// One-line description for the deck listing
    pub summary: &'static str,
    source: &'static str,
}

impl BuiltinDeck {
    /// Parse and validate this deck's storyboard
    pub fn storyboard(&self) -> Result<Storyboard, StoryboardError> {
        Storyboard::from_ron(self.source)
    }
}

/// All built-in decks, in menu order
pub const BUILTIN_DECKS: &[BuiltinDeck] = &[
    BuiltinDeck {
        slug: "rag",
        summary: "Retrieval-augmented generation, from knowledge article to answer",
        source: include_str!("../decks/rag.ron"),
    },
    BuiltinDeck {
        slug: "finetuning",
        summary: "Model finetuning, from base model to deployed comparison",
        source: include_str!("../decks/finetuning.ron"),
    },
    BuiltinDeck {
        slug: "governance",
        summary: "AI governance checklist for production systems",
        source: include_str!("../decks/governance.ron"),
    },
];

/// Find a built-in deck by slug
pub fn find(slug: &str) -> Option<&'static BuiltinDeck> {
    BUILTIN_DECKS.iter().find(|deck| deck.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_decks_are_valid() {
        for deck in BUILTIN_DECKS {
            let board = deck.storyboard().unwrap();
            assert!(board.step_count() > 0, "deck {} is empty", deck.slug);
        }
    }

    #[test]
    fn test_deck_step_counts() {
        assert_eq!(find("rag").unwrap().storyboard().unwrap().step_count(), 11);
        assert_eq!(
            find("finetuning").unwrap().storyboard().unwrap().step_count(),
            9
        );
        assert_eq!(
            find("governance").unwrap().storyboard().unwrap().step_count(),
            8
        );
    }

    #[test]
    fn test_unknown_slug() {
        assert!(find("tokenization").is_none());
    }
}
