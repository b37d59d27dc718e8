use log::debug;

use crate::error::StoreError;
use crate::model::component::{ComponentArchetype, default_catalog};

/// Ordered palette of archetypes. Membership is fixed for the session; only
/// the order can change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteStore {
    items: Vec<ComponentArchetype>,
}

impl PaletteStore {
    pub fn new(items: Vec<ComponentArchetype>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[ComponentArchetype] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&ComponentArchetype> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.items.iter().any(|a| a.id == id)
    }

    pub fn reorder(&mut self, from: usize, to: usize) -> Result<(), StoreError> {
        super::reorder(&mut self.items, from, to)?;
        debug!("palette: moved {} -> {}", from, to);
        Ok(())
    }
}

impl Default for PaletteStore {
    fn default() -> Self {
        Self::new(default_catalog())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(store: &PaletteStore) -> Vec<&str> {
        store.items().iter().map(|a| a.display_name.as_str()).collect()
    }

    #[test]
    fn reorder_moves_archetype() {
        let mut palette = PaletteStore::default();
        palette.reorder(4, 1).unwrap();
        assert_eq!(names(&palette), ["Title", "Divider", "Paragraph", "Button", "Image"]);
    }

    #[test]
    fn out_of_range_reorder_is_rejected() {
        let mut palette = PaletteStore::default();
        let before = palette.clone();
        assert!(palette.reorder(0, 5).is_err());
        assert_eq!(palette, before);
    }
}
