//! Routing of completed drag gestures between the palette and the template.
//!
//! | source   | destination | effect                                  |
//! |----------|-------------|-----------------------------------------|
//! | any      | none        | cancelled, nothing changes              |
//! | palette  | palette     | palette reorder                         |
//! | template | template    | template reorder                        |
//! | palette  | template    | copy of the archetype inserted          |
//! | template | palette     | unsupported, nothing changes            |

use log::debug;

use crate::error::StoreError;
use crate::model::drop::{Container, DropEvent};
use crate::store::palette::PaletteStore;
use crate::store::template::TemplateStore;

/// What a drop did to the stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// Released outside any container.
    Cancelled,
    PaletteReordered { from: usize, to: usize },
    TemplateReordered { from: usize, to: usize },
    /// A palette archetype was copied into the template.
    Inserted { id: String, index: usize },
    /// Template items cannot be dropped on the palette.
    Unsupported,
}

/// Applies one drop event. On error neither store has changed.
pub fn apply_drop(
    palette: &mut PaletteStore,
    template: &mut TemplateStore,
    event: DropEvent,
) -> Result<DropOutcome, StoreError> {
    let Some(destination) = event.destination else {
        debug!("drop: cancelled gesture from {:?}", event.source);
        return Ok(DropOutcome::Cancelled);
    };
    let (from, to) = (event.source.index, destination.index);

    match (event.source.container, destination.container) {
        (Container::Palette, Container::Palette) => {
            palette.reorder(from, to)?;
            Ok(DropOutcome::PaletteReordered { from, to })
        }
        (Container::Template, Container::Template) => {
            template.reorder(from, to)?;
            Ok(DropOutcome::TemplateReordered { from, to })
        }
        (Container::Palette, Container::Template) => {
            let archetype = palette.get(from).ok_or(StoreError::IndexOutOfRange {
                index: from,
                len: palette.len(),
            })?;
            let (index, id) = template.insert_copy(archetype, to)?;
            Ok(DropOutcome::Inserted { id, index })
        }
        (Container::Template, Container::Palette) => {
            debug!("drop: template item {} dropped on the palette, ignoring", from);
            Ok(DropOutcome::Unsupported)
        }
    }
}
