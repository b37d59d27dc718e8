//! The template sequence: placed component instances in display order.
//!
//! Items are addressed by position for drag operations and by id for edits
//! that may complete after the sequence has changed (file uploads).

use std::collections::HashSet;
use std::fmt;

use log::{debug, warn};

use crate::error::StoreError;
use crate::ids::{IdSource, UuidIds};
use crate::model::component::ComponentArchetype;
use crate::model::template::{ImageSource, ItemContent, TemplateItem};

/// How many ids the source may offer before minting gives up.
const MINT_ATTEMPTS: usize = 16;

/// Handle for an image upload in flight.
///
/// Captures the target item's id when the upload starts, so the decoded
/// payload is applied to that item wherever it sits when decoding finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingImage {
    item_id: String,
}

impl PendingImage {
    pub fn item_id(&self) -> &str {
        &self.item_id
    }
}

pub struct TemplateStore {
    items: Vec<TemplateItem>,
    ids: Box<dyn IdSource>,
    reserved: HashSet<String>,
}

impl TemplateStore {
    pub fn new(ids: Box<dyn IdSource>) -> Self {
        Self {
            items: Vec::new(),
            ids,
            reserved: HashSet::new(),
        }
    }

    /// Marks ids owned by another store (the palette) so minting never
    /// hands them out.
    pub fn reserve_ids<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.reserved.extend(ids);
    }

    pub fn items(&self) -> &[TemplateItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&TemplateItem> {
        self.items.get(index)
    }

    pub fn find(&self, id: &str) -> Option<&TemplateItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Places a copy of `archetype` at `at_index`, clamped to `[0, len]`.
    ///
    /// Returns the index the item landed at and its freshly minted id. Fails
    /// with [`StoreError::IdExhausted`] when the id source keeps returning
    /// ids already in use.
    pub fn insert_copy(
        &mut self,
        archetype: &ComponentArchetype,
        at_index: usize,
    ) -> Result<(usize, String), StoreError> {
        let id = self.mint_id(&archetype.id)?;
        let index = at_index.min(self.items.len());
        self.items
            .insert(index, TemplateItem::from_archetype(id.clone(), archetype));
        debug!("template: inserted {} ({}) at {}", id, archetype.kind, index);
        Ok((index, id))
    }

    pub fn reorder(&mut self, from: usize, to: usize) -> Result<(), StoreError> {
        super::reorder(&mut self.items, from, to)?;
        debug!("template: moved {} -> {}", from, to);
        Ok(())
    }

    /// Starts an image upload for the item at `index`.
    pub fn request_image(&self, index: usize) -> Result<PendingImage, StoreError> {
        let item = self.items.get(index).ok_or(StoreError::IndexOutOfRange {
            index,
            len: self.items.len(),
        })?;
        if !matches!(item.content, ItemContent::Image { .. }) {
            return Err(StoreError::KindMismatch {
                id: item.id.clone(),
                kind: item.kind(),
                expected: "image",
            });
        }
        Ok(PendingImage {
            item_id: item.id.clone(),
        })
    }

    /// Applies a decoded upload. Fails with [`StoreError::ItemNotFound`]
    /// when the item no longer exists.
    pub fn complete_image(&mut self, pending: PendingImage, data_url: String) -> Result<(), StoreError> {
        let item = self.item_mut_by_id(&pending.item_id)?;
        write_image(item, Some(ImageSource::DataUrl(data_url)))?;
        debug!("template: {} now shows an uploaded image", pending.item_id);
        Ok(())
    }

    /// Sets the image of the item at `index` to a pasted URL. A blank URL
    /// clears the image instead.
    pub fn set_image_url(&mut self, index: usize, url: &str) -> Result<(), StoreError> {
        let item = self.item_mut_at(index)?;
        write_image(item, url_source(url))
    }

    pub fn set_image_url_by_id(&mut self, id: &str, url: &str) -> Result<(), StoreError> {
        let item = self.item_mut_by_id(id)?;
        write_image(item, url_source(url))
    }

    pub fn clear_image_by_id(&mut self, id: &str) -> Result<(), StoreError> {
        let item = self.item_mut_by_id(id)?;
        write_image(item, None)
    }

    pub fn set_text_by_id(&mut self, id: &str, text: String) -> Result<(), StoreError> {
        let item = self.item_mut_by_id(id)?;
        write_text(item, text)
    }

    fn item_mut_at(&mut self, index: usize) -> Result<&mut TemplateItem, StoreError> {
        let len = self.items.len();
        self.items
            .get_mut(index)
            .ok_or(StoreError::IndexOutOfRange { index, len })
    }

    fn item_mut_by_id(&mut self, id: &str) -> Result<&mut TemplateItem, StoreError> {
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| StoreError::ItemNotFound { id: id.to_string() })
    }

    fn mint_id(&mut self, archetype_id: &str) -> Result<String, StoreError> {
        for _ in 0..MINT_ATTEMPTS {
            let id = self.ids.next_id();
            let taken = id == archetype_id
                || self.reserved.contains(&id)
                || self.items.iter().any(|item| item.id == id);
            if !taken {
                return Ok(id);
            }
            warn!("template: id source returned {} which is already in use", id);
        }
        Err(StoreError::IdExhausted {
            attempts: MINT_ATTEMPTS,
        })
    }
}

impl Default for TemplateStore {
    fn default() -> Self {
        Self::new(Box::new(UuidIds))
    }
}

impl fmt::Debug for TemplateStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateStore")
            .field("items", &self.items)
            .field("reserved", &self.reserved)
            .finish_non_exhaustive()
    }
}

fn url_source(url: &str) -> Option<ImageSource> {
    let url = url.trim();
    if url.is_empty() {
        None
    } else {
        Some(ImageSource::Url(url.to_string()))
    }
}

fn write_image(item: &mut TemplateItem, new_source: Option<ImageSource>) -> Result<(), StoreError> {
    match &mut item.content {
        ItemContent::Image { source } => {
            *source = new_source;
            Ok(())
        }
        other => Err(StoreError::KindMismatch {
            id: item.id.clone(),
            kind: other.kind(),
            expected: "image",
        }),
    }
}

fn write_text(item: &mut TemplateItem, new_text: String) -> Result<(), StoreError> {
    match &mut item.content {
        ItemContent::Heading { text } | ItemContent::Paragraph { text } => {
            *text = new_text;
            Ok(())
        }
        ItemContent::Button { label } => {
            *label = new_text;
            Ok(())
        }
        other => Err(StoreError::KindMismatch {
            id: item.id.clone(),
            kind: other.kind(),
            expected: "heading, paragraph or button",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::testing::SequentialIds;
    use crate::model::component::{ComponentKind, default_catalog};

    fn store() -> TemplateStore {
        TemplateStore::new(Box::new(SequentialIds::default()))
    }

    fn archetype(kind: ComponentKind) -> ComponentArchetype {
        ComponentArchetype::new(format!("palette-{}", kind), kind)
    }

    fn ids(store: &TemplateStore) -> Vec<String> {
        store.items().iter().map(|item| item.id.clone()).collect()
    }

    #[test]
    fn insert_copy_clamps_position() {
        let mut store = store();
        let (first, _) = store.insert_copy(&archetype(ComponentKind::Heading), 10).unwrap();
        let (second, _) = store.insert_copy(&archetype(ComponentKind::Divider), 99).unwrap();
        assert_eq!((first, second), (0, 1));
        assert_eq!(store.get(1).map(|i| i.kind()), Some(ComponentKind::Divider));
    }

    #[test]
    fn insert_copy_leaves_archetype_alone() {
        let mut store = store();
        let source = archetype(ComponentKind::Image);
        let before = source.clone();
        let (_, id) = store.insert_copy(&source, 0).unwrap();
        store.set_image_url(0, "https://example.com/a.png").unwrap();
        assert_eq!(source, before);
        assert_ne!(id, source.id);
    }

    #[test]
    fn minting_skips_reserved_and_used_ids() {
        let mut store = store();
        store.reserve_ids(default_catalog().into_iter().map(|a| a.id));
        let (_, id) = store.insert_copy(&archetype(ComponentKind::Heading), 0).unwrap();
        // "1" to "5" belong to the palette.
        assert_eq!(id, "6");
    }

    #[test]
    fn two_copies_of_one_archetype_are_independent() {
        let mut store = store();
        let image = archetype(ComponentKind::Image);
        store.insert_copy(&image, 0).unwrap();
        store.insert_copy(&image, 1).unwrap();
        store.set_image_url(0, "https://example.com/a.png").unwrap();
        assert!(store.get(0).unwrap().content.image_source().is_some());
        assert_eq!(store.get(1).unwrap().content.image_source(), None);
    }

    #[test]
    fn url_then_upload_keeps_upload() {
        let mut store = store();
        store.insert_copy(&archetype(ComponentKind::Image), 0).unwrap();
        store.set_image_url(0, "https://example.com/a.png").unwrap();
        let pending = store.request_image(0).unwrap();
        store
            .complete_image(pending, "data:image/png;base64,AAAA".to_string())
            .unwrap();
        assert_eq!(
            store.get(0).unwrap().content.image_source(),
            Some(&ImageSource::DataUrl("data:image/png;base64,AAAA".to_string()))
        );
    }

    #[test]
    fn upload_then_url_keeps_url() {
        let mut store = store();
        store.insert_copy(&archetype(ComponentKind::Image), 0).unwrap();
        let pending = store.request_image(0).unwrap();
        store
            .complete_image(pending, "data:image/png;base64,AAAA".to_string())
            .unwrap();
        store.set_image_url(0, " https://example.com/b.png ").unwrap();
        assert_eq!(
            store.get(0).unwrap().content.image_source(),
            Some(&ImageSource::Url("https://example.com/b.png".to_string()))
        );
    }

    #[test]
    fn blank_url_clears_image() {
        let mut store = store();
        store.insert_copy(&archetype(ComponentKind::Image), 0).unwrap();
        store.set_image_url(0, "https://example.com/a.png").unwrap();
        store.set_image_url(0, "   ").unwrap();
        assert_eq!(store.get(0).unwrap().content.image_source(), None);
    }

    #[test]
    fn upload_completion_follows_item_after_reorder() {
        let mut store = store();
        store.insert_copy(&archetype(ComponentKind::Image), 0).unwrap();
        store.insert_copy(&archetype(ComponentKind::Heading), 1).unwrap();
        let pending = store.request_image(0).unwrap();
        store.reorder(0, 1).unwrap();
        store
            .complete_image(pending.clone(), "data:image/gif;base64,R0lG".to_string())
            .unwrap();
        let image = store.find(pending.item_id()).unwrap();
        assert!(image.content.image_source().is_some());
        assert_eq!(store.position(pending.item_id()), Some(1));
        assert_eq!(store.get(0).unwrap().kind(), ComponentKind::Heading);
    }

    #[test]
    fn upload_for_vanished_item_is_rejected() {
        let mut store = store();
        store.insert_copy(&archetype(ComponentKind::Image), 0).unwrap();
        let pending = store.request_image(0).unwrap();
        let mut other = self::store();
        let result = other.complete_image(pending, "data:,".to_string());
        assert!(matches!(result, Err(StoreError::ItemNotFound { .. })));
        assert!(other.is_empty());
    }

    #[test]
    fn image_edits_on_other_kinds_are_rejected() {
        let mut store = store();
        store.insert_copy(&archetype(ComponentKind::Paragraph), 0).unwrap();
        let before = ids(&store);
        assert!(matches!(
            store.request_image(0),
            Err(StoreError::KindMismatch { kind: ComponentKind::Paragraph, .. })
        ));
        assert!(store.set_image_url(0, "https://example.com").is_err());
        assert_eq!(store.get(0).unwrap().content, ItemContent::Paragraph { text: String::new() });
        assert_eq!(ids(&store), before);
    }

    #[test]
    fn text_edits_target_text_kinds() {
        let mut store = store();
        let (_, button) = store.insert_copy(&archetype(ComponentKind::Button), 0).unwrap();
        let (_, divider) = store.insert_copy(&archetype(ComponentKind::Divider), 1).unwrap();
        store.set_text_by_id(&button, "Sign up".to_string()).unwrap();
        assert_eq!(store.find(&button).unwrap().content.text(), Some("Sign up"));
        assert!(matches!(
            store.set_text_by_id(&divider, "nope".to_string()),
            Err(StoreError::KindMismatch { kind: ComponentKind::Divider, .. })
        ));
    }

    #[test]
    fn url_by_id_replaces_upload_and_follows_reorder() {
        let mut store = store();
        let (_, image) = store.insert_copy(&archetype(ComponentKind::Image), 0).unwrap();
        store.insert_copy(&archetype(ComponentKind::Heading), 0).unwrap();
        let pending = store.request_image(1).unwrap();
        store
            .complete_image(pending, "data:image/png;base64,AAAA".to_string())
            .unwrap();
        store.reorder(1, 0).unwrap();

        store.set_image_url_by_id(&image, "https://example.com/c.png").unwrap();
        assert_eq!(
            store.get(0).unwrap().content.image_source(),
            Some(&ImageSource::Url("https://example.com/c.png".to_string()))
        );
        store.clear_image_by_id(&image).unwrap();
        assert_eq!(store.get(0).unwrap().content.image_source(), None);
    }

    #[test]
    fn edits_by_unknown_id_are_rejected() {
        let mut store = store();
        assert!(matches!(
            store.set_image_url_by_id("missing", "https://example.com"),
            Err(StoreError::ItemNotFound { .. })
        ));
        assert!(store.clear_image_by_id("missing").is_err());
        assert!(store.set_text_by_id("missing", String::new()).is_err());
    }

    #[test]
    fn out_of_range_edits_are_rejected() {
        let mut store = store();
        assert_eq!(
            store.set_image_url(0, "https://example.com"),
            Err(StoreError::IndexOutOfRange { index: 0, len: 0 })
        );
        assert!(store.request_image(3).is_err());
    }

    struct ConstantIds;

    impl IdSource for ConstantIds {
        fn next_id(&mut self) -> String {
            "same".to_string()
        }
    }

    #[test]
    fn stuck_id_source_gives_up_without_inserting() {
        let mut store = TemplateStore::new(Box::new(ConstantIds));
        let heading = archetype(ComponentKind::Heading);
        let (_, first) = store.insert_copy(&heading, 0).unwrap();
        assert_eq!(first, "same");

        assert_eq!(
            store.insert_copy(&heading, 0),
            Err(StoreError::IdExhausted { attempts: MINT_ATTEMPTS })
        );
        assert_eq!(ids(&store), ["same"]);
    }
}
