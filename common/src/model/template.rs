//! Placed template items.
//!
//! Each item's content is a tagged variant, so only image items can carry an
//! image source and only text kinds carry text.

use crate::model::component::{ComponentArchetype, ComponentKind};

/// Where an image item gets its picture from. Exactly one representation is
/// held at a time; writing either one replaces the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Inline `data:` URL produced from an uploaded file.
    DataUrl(String),
    /// URL pasted by the user.
    Url(String),
}

impl ImageSource {
    /// Value suitable for an `<img src>` attribute.
    pub fn as_src(&self) -> &str {
        match self {
            ImageSource::DataUrl(s) | ImageSource::Url(s) => s,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemContent {
    Heading { text: String },
    Paragraph { text: String },
    Button { label: String },
    Image { source: Option<ImageSource> },
    Divider,
}

impl ItemContent {
    /// Blank content for a freshly placed component of `kind`.
    pub fn empty(kind: ComponentKind) -> Self {
        match kind {
            ComponentKind::Heading => ItemContent::Heading { text: String::new() },
            ComponentKind::Paragraph => ItemContent::Paragraph { text: String::new() },
            ComponentKind::Button => ItemContent::Button { label: String::new() },
            ComponentKind::Image => ItemContent::Image { source: None },
            ComponentKind::Divider => ItemContent::Divider,
        }
    }

    pub fn kind(&self) -> ComponentKind {
        match self {
            ItemContent::Heading { .. } => ComponentKind::Heading,
            ItemContent::Paragraph { .. } => ComponentKind::Paragraph,
            ItemContent::Button { .. } => ComponentKind::Button,
            ItemContent::Image { .. } => ComponentKind::Image,
            ItemContent::Divider => ComponentKind::Divider,
        }
    }

    /// Inline text of heading, paragraph and button items.
    pub fn text(&self) -> Option<&str> {
        match self {
            ItemContent::Heading { text } | ItemContent::Paragraph { text } => Some(text),
            ItemContent::Button { label } => Some(label),
            _ => None,
        }
    }

    pub fn image_source(&self) -> Option<&ImageSource> {
        match self {
            ItemContent::Image { source } => source.as_ref(),
            _ => None,
        }
    }
}

/// A component instance placed in the template. Its id is minted on
/// placement and is never shared with the archetype it was copied from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateItem {
    pub id: String,
    pub display_name: String,
    pub content: ItemContent,
}

impl TemplateItem {
    pub fn from_archetype(id: String, archetype: &ComponentArchetype) -> Self {
        Self {
            id,
            display_name: archetype.display_name.clone(),
            content: ItemContent::empty(archetype.kind),
        }
    }

    pub fn kind(&self) -> ComponentKind {
        self.content.kind()
    }
}
