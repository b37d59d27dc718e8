//! Palette entries: the component kinds a user can drag into a template.

use std::fmt;

/// Closed set of component kinds offered by the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Heading,
    Paragraph,
    Button,
    Image,
    Divider,
}

impl ComponentKind {
    /// Every kind, in catalog order.
    pub const ALL: [ComponentKind; 5] = [
        ComponentKind::Heading,
        ComponentKind::Paragraph,
        ComponentKind::Button,
        ComponentKind::Image,
        ComponentKind::Divider,
    ];

    /// Label shown on the palette and used as input placeholder.
    pub fn display_name(self) -> &'static str {
        match self {
            ComponentKind::Heading => "Title",
            ComponentKind::Paragraph => "Paragraph",
            ComponentKind::Button => "Button",
            ComponentKind::Image => "Image",
            ComponentKind::Divider => "Divider",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ComponentKind::Heading => "heading",
            ComponentKind::Paragraph => "paragraph",
            ComponentKind::Button => "button",
            ComponentKind::Image => "image",
            ComponentKind::Divider => "divider",
        };
        f.write_str(name)
    }
}

/// A draggable palette entry. Its id and kind never change; only its
/// position in the palette does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentArchetype {
    pub id: String,
    pub display_name: String,
    pub kind: ComponentKind,
}

impl ComponentArchetype {
    pub fn new(id: impl Into<String>, kind: ComponentKind) -> Self {
        Self {
            id: id.into(),
            display_name: kind.display_name().to_string(),
            kind,
        }
    }
}

/// The static palette catalog: one archetype per kind, ids `"1"` to `"5"`.
pub fn default_catalog() -> Vec<ComponentArchetype> {
    ComponentKind::ALL
        .iter()
        .enumerate()
        .map(|(i, kind)| ComponentArchetype::new((i + 1).to_string(), *kind))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lists_every_kind_once() {
        let catalog = default_catalog();
        let names: Vec<_> = catalog.iter().map(|a| a.display_name.as_str()).collect();
        assert_eq!(names, ["Title", "Paragraph", "Button", "Image", "Divider"]);
        let ids: Vec<_> = catalog.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5"]);
    }
}
