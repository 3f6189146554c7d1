use crate::core::{check_compatibility, CompatibilityResult};
use crate::model::Part;

/// Parts picked for a build, in the order they were added.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<Part>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, part: Part) {
        self.items.push(part);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[Part] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_price(&self) -> f64 {
        self.items.iter().map(Part::price).sum()
    }

    pub fn check(&self) -> CompatibilityResult {
        check_compatibility(&self.items)
    }
}
