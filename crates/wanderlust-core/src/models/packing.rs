//! Packing list items and the interactive checklist built from them.

use serde::{Deserialize, Serialize};

/// One thing to pack.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PackingListItem {
    /// Item label
    pub item: String,

    /// Category label used for grouping
    pub category: String,

    /// Local UI state, never written back to a stored itinerary
    #[serde(default)]
    pub checked: bool,
}

impl PackingListItem {
    /// Creates an unchecked item.
    pub fn new(item: &str, category: &str) -> Self {
        Self {
            item: item.to_string(),
            category: category.to_string(),
            checked: false,
        }
    }
}

/// Ordered packing list with check-off state.
///
/// # Examples
///
/// ```rust
/// use wanderlust_core::models::{PackingChecklist, PackingListItem};
///
/// let mut checklist = PackingChecklist::new(vec![
///     PackingListItem::new("First aid kit", "Health"),
///     PackingListItem::new("Sunscreen", "Health"),
/// ]);
/// assert!(checklist.toggle(1));
/// assert_eq!(checklist.packed_count(), 1);
/// assert_eq!(checklist.progress_percent(), 50);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct PackingChecklist {
    items: Vec<PackingListItem>,
}

impl PackingChecklist {
    pub fn new(items: Vec<PackingListItem>) -> Self {
        Self { items }
    }

    /// Flips the checked state of the item at `index`.
    ///
    /// Returns the new state, or `false` when the index is out of range.
    pub fn toggle(&mut self, index: usize) -> bool {
        match self.items.get_mut(index) {
            Some(item) => {
                item.checked = !item.checked;
                item.checked
            }
            None => false,
        }
    }

    pub fn items(&self) -> &[PackingListItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of checked items.
    pub fn packed_count(&self) -> usize {
        self.items.iter().filter(|item| item.checked).count()
    }

    /// Whole percentage of checked items, 0 for an empty list.
    pub fn progress_percent(&self) -> usize {
        if self.items.is_empty() {
            return 0;
        }
        self.packed_count() * 100 / self.items.len()
    }

    /// Items grouped by category, categories in first-seen order.
    ///
    /// Each entry keeps the item's index in the full list so callers can
    /// toggle it.
    pub fn by_category(&self) -> Vec<(&str, Vec<(usize, &PackingListItem)>)> {
        let mut groups: Vec<(&str, Vec<(usize, &PackingListItem)>)> = Vec::new();
        for (index, item) in self.items.iter().enumerate() {
            match groups.iter_mut().find(|(category, _)| *category == item.category) {
                Some((_, members)) => members.push((index, item)),
                None => groups.push((item.category.as_str(), vec![(index, item)])),
            }
        }
        groups
    }

    /// Item labels, as stored on an itinerary.
    pub fn labels(&self) -> Vec<String> {
        self.items.iter().map(|item| item.item.clone()).collect()
    }
}

impl From<Vec<PackingListItem>> for PackingChecklist {
    fn from(items: Vec<PackingListItem>) -> Self {
        Self::new(items)
    }
}
