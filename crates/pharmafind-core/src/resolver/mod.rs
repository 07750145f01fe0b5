//! Alternative-medicine resolution.
//!
//! For an out-of-stock medicine, walk its configured alternatives in listed
//! order and suggest the first one with stock. List order is the priority;
//! stock levels and names never reorder it.

use crate::index::SearchIndex;
use crate::models::{AlternativeOutcome, AlternativesMap, Inventory};

/// Source of stock levels. Unknown medicines report `None`.
pub trait StockLookup {
    fn quantity(&self, name: &str) -> Option<u32>;
}

impl StockLookup for Inventory {
    fn quantity(&self, name: &str) -> Option<u32> {
        self.get(name).copied()
    }
}

impl StockLookup for SearchIndex {
    fn quantity(&self, name: &str) -> Option<u32> {
        self.get(name)
    }
}

/// Resolves substitutes against a fixed alternatives map and stock source.
pub struct AlternativeResolver<'a, S: StockLookup + ?Sized> {
    alternatives: &'a AlternativesMap,
    stock: &'a S,
}

impl<'a, S: StockLookup + ?Sized> AlternativeResolver<'a, S> {
    pub fn new(alternatives: &'a AlternativesMap, stock: &'a S) -> Self {
        Self {
            alternatives,
            stock,
        }
    }

    /// Resolve a substitute for `medicine`.
    pub fn resolve(&self, medicine: &str) -> AlternativeOutcome {
        resolve_alternative(medicine, self.alternatives, self.stock)
    }
}

/// First in-stock alternative for `medicine`, in listed order.
///
/// Alternatives missing from the stock source count as zero.
pub fn resolve_alternative<S: StockLookup + ?Sized>(
    medicine: &str,
    alternatives: &AlternativesMap,
    stock: &S,
) -> AlternativeOutcome {
    let listed = match alternatives.get(medicine) {
        Some(listed) if !listed.is_empty() => listed,
        _ => return AlternativeOutcome::NoAlternativesListed,
    };

    listed
        .iter()
        .find_map(|alt| {
            let quantity = stock.quantity(alt).unwrap_or(0);
            (quantity > 0).then(|| AlternativeOutcome::Suggestion {
                name: alt.clone(),
                quantity,
            })
        })
        .unwrap_or(AlternativeOutcome::AlternativesExhausted)
}
