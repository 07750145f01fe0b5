//! Unbalanced binary search tree keyed by medicine name.
//!
//! Nodes live in an arena and link to their children by index, so every
//! node has exactly one parent and the tree cannot form cycles. Ordering is
//! byte-wise (`str::cmp`), which for UTF-8 matches code-point order.
//! There is no delete; callers rebuild the index from a fresh inventory.

use std::cmp::Ordering;

use crate::models::{Inventory, MedicineRecord};

#[derive(Debug, Clone)]
struct Node {
    name: String,
    quantity: u32,
    left: Option<usize>,
    right: Option<usize>,
}

/// Ordered medicine index supporting upsert, exact lookup and prefix search.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    nodes: Vec<Node>,
    root: Option<usize>,
}

impl SearchIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index holding exactly the given inventory.
    ///
    /// The inventory is already sorted, so entries are inserted median-first
    /// to keep the tree balanced instead of degenerating into a list.
    pub fn from_inventory(inventory: &Inventory) -> Self {
        let entries: Vec<(&String, &u32)> = inventory.iter().collect();
        let mut index = Self::new();
        let mut ranges = vec![(0, entries.len())];
        while let Some((lo, hi)) = ranges.pop() {
            if lo >= hi {
                continue;
            }
            let mid = lo + (hi - lo) / 2;
            let (name, quantity) = entries[mid];
            index.insert(name.clone(), *quantity);
            ranges.push((mid + 1, hi));
            ranges.push((lo, mid));
        }
        index
    }

    /// Insert a medicine or update its quantity.
    ///
    /// Returns `true` when a new node was created, `false` on update.
    pub fn insert(&mut self, name: impl Into<String>, quantity: u32) -> bool {
        let name = name.into();
        let Some(mut idx) = self.root else {
            self.root = Some(self.push(name, quantity));
            return true;
        };

        loop {
            let node = &mut self.nodes[idx];
            let next = match name.as_str().cmp(node.name.as_str()) {
                Ordering::Equal => {
                    node.quantity = quantity;
                    return false;
                }
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };

            match next {
                Some(child) => idx = child,
                None => {
                    let goes_left = name < self.nodes[idx].name;
                    let child = self.push(name, quantity);
                    if goes_left {
                        self.nodes[idx].left = Some(child);
                    } else {
                        self.nodes[idx].right = Some(child);
                    }
                    return true;
                }
            }
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, name: &str) -> Option<u32> {
        let mut cursor = self.root;
        while let Some(idx) = cursor {
            let node = &self.nodes[idx];
            cursor = match name.cmp(node.name.as_str()) {
                Ordering::Equal => return Some(node.quantity),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }
        None
    }

    /// All records whose name starts with `prefix`, ignoring case.
    ///
    /// Results are sorted by name. Case folding breaks the tree ordering, so
    /// every node is visited.
    pub fn prefix_search(&self, prefix: &str) -> Vec<MedicineRecord> {
        let prefix = prefix.to_lowercase();
        self.iter()
            .filter(|record| record.name.to_lowercase().starts_with(&prefix))
            .collect()
    }

    /// In-order traversal.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            index: self,
            stack: Vec::new(),
            cursor: self.root,
        }
    }

    /// Number of distinct medicines.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of levels on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        let mut max = 0;
        let mut stack: Vec<(usize, usize)> = self.root.map(|r| (r, 1)).into_iter().collect();
        while let Some((idx, depth)) = stack.pop() {
            max = max.max(depth);
            let node = &self.nodes[idx];
            stack.extend(node.left.map(|l| (l, depth + 1)));
            stack.extend(node.right.map(|r| (r, depth + 1)));
        }
        max
    }

    fn push(&mut self, name: String, quantity: u32) -> usize {
        self.nodes.push(Node {
            name,
            quantity,
            left: None,
            right: None,
        });
        self.nodes.len() - 1
    }
}

/// In-order iterator over a [`SearchIndex`].
pub struct Iter<'a> {
    index: &'a SearchIndex,
    stack: Vec<usize>,
    cursor: Option<usize>,
}

impl Iterator for Iter<'_> {
    type Item = MedicineRecord;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(idx) = self.cursor {
            self.stack.push(idx);
            self.cursor = self.index.nodes[idx].left;
        }
        let idx = self.stack.pop()?;
        let node = &self.index.nodes[idx];
        self.cursor = node.right;
        Some(MedicineRecord::new(node.name.clone(), node.quantity))
    }
}
