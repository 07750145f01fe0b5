//! Search result models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What the resolver found for an out-of-stock medicine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum AlternativeOutcome {
    /// First listed alternative with stock
    Suggestion { name: String, quantity: u32 },
    /// No alternatives were configured for the medicine
    NoAlternativesListed,
    /// Alternatives exist but every one of them is out of stock
    AlternativesExhausted,
}

impl AlternativeOutcome {
    /// Suggested substitute name, if any.
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            AlternativeOutcome::Suggestion { name, .. } => Some(name),
            _ => None,
        }
    }
}

/// Stock status of a search hit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum StockStatus {
    InStock,
    OutOfStock(AlternativeOutcome),
}

/// A single medicine matched by a search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchHit {
    pub name: String,
    pub quantity: u32,
    pub status: StockStatus,
}

impl SearchHit {
    pub fn in_stock(&self) -> bool {
        matches!(self.status, StockStatus::InStock)
    }
}

/// Result of a user-facing search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Blank query; nothing was searched
    NoInput,
    /// The prefix matched nothing
    NoResults,
    /// Matches ordered by name
    Hits(Vec<SearchHit>),
}

impl SearchOutcome {
    /// Matched hits, empty for `NoInput` and `NoResults`.
    pub fn hits(&self) -> &[SearchHit] {
        match self {
            SearchOutcome::Hits(hits) => hits,
            _ => &[],
        }
    }
}

impl fmt::Display for SearchHit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.status {
            StockStatus::InStock => write!(f, "{}: {} in stock", self.name, self.quantity),
            StockStatus::OutOfStock(outcome) => {
                writeln!(f, "{}: out of stock", self.name)?;
                match outcome {
                    AlternativeOutcome::NoAlternativesListed => {
                        write!(f, "  no alternatives listed for {}", self.name)
                    }
                    other => write!(f, "  {}", other),
                }
            }
        }
    }
}

impl fmt::Display for AlternativeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlternativeOutcome::Suggestion { name, quantity } => {
                write!(f, "try alternative: {} ({} in stock)", name, quantity)
            }
            AlternativeOutcome::NoAlternativesListed => write!(f, "no alternatives listed"),
            AlternativeOutcome::AlternativesExhausted => {
                write!(f, "alternatives exist, but none are in stock")
            }
        }
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchOutcome::NoInput => Ok(()),
            SearchOutcome::NoResults => write!(f, "No medicine found!"),
            SearchOutcome::Hits(hits) => {
                writeln!(f, "Search Results:")?;
                for hit in hits {
                    writeln!(f, "{}", hit)?;
                }
                Ok(())
            }
        }
    }
}
