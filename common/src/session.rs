//! One builder session: both stores plus the seeded starter layout.

use log::{debug, warn};

use crate::coordinator::{DropOutcome, apply_drop};
use crate::error::StoreError;
use crate::ids::{IdSource, UuidIds};
use crate::model::component::ComponentKind;
use crate::model::drop::DropEvent;
use crate::store::palette::PaletteStore;
use crate::store::template::TemplateStore;

/// Image shown by the starter layout before the user picks one.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/250";

/// Kinds of the starter layout, top to bottom.
pub const STARTER_LAYOUT: [ComponentKind; 5] = [
    ComponentKind::Heading,
    ComponentKind::Paragraph,
    ComponentKind::Image,
    ComponentKind::Divider,
    ComponentKind::Button,
];

/// Owns the palette and template for the lifetime of the page.
///
/// Constructed once by the UI component and passed around by reference;
/// there is no global state.
#[derive(Debug)]
pub struct BuilderSession {
    pub palette: PaletteStore,
    pub template: TemplateStore,
}

impl BuilderSession {
    /// Default catalog with the starter layout, ids from UUIDs.
    pub fn new() -> Self {
        Self::with_id_source(Box::new(UuidIds), true)
    }

    /// Default catalog and an empty template.
    pub fn empty() -> Self {
        Self::with_id_source(Box::new(UuidIds), false)
    }

    pub fn with_id_source(ids: Box<dyn IdSource>, seed_starter_layout: bool) -> Self {
        let palette = PaletteStore::default();
        let mut template = TemplateStore::new(ids);
        template.reserve_ids(palette.items().iter().map(|a| a.id.clone()));

        let mut session = Self { palette, template };
        if seed_starter_layout {
            session.seed_starter_layout();
        }
        session
    }

    fn seed_starter_layout(&mut self) {
        for kind in STARTER_LAYOUT {
            let Some(archetype) = self.palette.items().iter().find(|a| a.kind == kind) else {
                continue;
            };
            let seeded = match self.template.insert_copy(archetype, self.template.len()) {
                Ok((index, _)) if kind == ComponentKind::Image => {
                    self.template.set_image_url(index, PLACEHOLDER_IMAGE_URL)
                }
                Ok(_) => Ok(()),
                Err(err) => Err(err),
            };
            if let Err(err) = seeded {
                warn!("session: could not seed starter {}: {}", kind, err);
            }
        }
        debug!("session: seeded {} starter items", self.template.len());
    }

    /// Routes a completed drag gesture. See [`apply_drop`].
    pub fn apply_drop(&mut self, event: DropEvent) -> Result<DropOutcome, StoreError> {
        let result = apply_drop(&mut self.palette, &mut self.template, event);
        if let Err(err) = &result {
            warn!("session: rejected drop {:?}: {}", event, err);
        }
        result
    }
}

impl Default for BuilderSession {
    fn default() -> Self {
        Self::new()
    }
}
