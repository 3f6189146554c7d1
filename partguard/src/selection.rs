//! First-wins category selection over a cart.

use crate::model::{Category, Part};

/// The first part seen for each ruled category in a selection.
///
/// Later parts of an already-seen category are ignored. `Storage` and
/// `Unknown` parts never participate.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectedParts<'a> {
    pub cpu: Option<&'a Part>,
    pub motherboard: Option<&'a Part>,
    pub ram: Option<&'a Part>,
    pub gpu: Option<&'a Part>,
    pub psu: Option<&'a Part>,
    pub case: Option<&'a Part>,
}

impl<'a> SelectedParts<'a> {
    /// Single in-order pass over the selection.
    pub fn from_selection(selection: &'a [Part]) -> Self {
        let mut selected = SelectedParts::default();
        for part in selection {
            let slot = match part.category() {
                Category::Cpu => &mut selected.cpu,
                Category::Motherboard => &mut selected.motherboard,
                Category::Ram => &mut selected.ram,
                Category::Gpu => &mut selected.gpu,
                Category::Psu => &mut selected.psu,
                Category::Case => &mut selected.case,
                Category::Storage | Category::Unknown => continue,
            };
            if let Some(first) = *slot {
                tracing::debug!(
                    "Ignoring duplicate {} '{}' (id:{}); using '{}' (id:{})",
                    part.category(),
                    part.name(),
                    part.id(),
                    first.name(),
                    first.id()
                );
            } else {
                *slot = Some(part);
            }
        }
        selected
    }

    pub fn get(&self, category: Category) -> Option<&'a Part> {
        match category {
            Category::Cpu => self.cpu,
            Category::Motherboard => self.motherboard,
            Category::Ram => self.ram,
            Category::Gpu => self.gpu,
            Category::Psu => self.psu,
            Category::Case => self.case,
            Category::Storage | Category::Unknown => None,
        }
    }

    pub fn count(&self) -> usize {
        [self.cpu, self.motherboard, self.ram, self.gpu, self.psu, self.case]
            .iter()
            .filter(|p| p.is_some())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_occurrence_wins() {
        let parts = vec![
            Part::new(1, Category::Cpu, "First", 1.0, 1).with_socket("AM4"),
            Part::new(2, Category::Cpu, "Second", 1.0, 1).with_socket("AM5"),
        ];
        let selected = SelectedParts::from_selection(&parts);
        assert_eq!(selected.cpu.map(|p| p.id()), Some(1));
        assert_eq!(selected.count(), 1);
    }

    #[test]
    fn test_unruled_categories_ignored() {
        let parts = vec![
            Part::new(1, Category::Storage, "NVMe", 80.0, 4),
            Part::new(2, Category::Unknown, "Sticker", 1.0, 100),
        ];
        let selected = SelectedParts::from_selection(&parts);
        assert_eq!(selected.count(), 0);
        assert!(selected.get(Category::Storage).is_none());
    }

    #[test]
    fn test_empty_selection() {
        let selected = SelectedParts::from_selection(&[]);
        assert_eq!(selected.count(), 0);
    }
}
