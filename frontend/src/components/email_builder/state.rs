//! Component state for the email builder.
//!
//! The two ordered sequences live in a single `BuilderSession`; everything
//! else here is transient UI state for the drag gesture in progress, uploads
//! in flight, and the image dialog.

use std::collections::HashSet;

use builder_common::{BuilderSession, DropLocation};
use yew::prelude::*;

use super::props::EmailBuilderProps;

/// Main state container for the `EmailBuilderComponent`.
///
/// Fields are `pub` because they are accessed by `view` and `update` modules.
pub struct EmailBuilderComponent {
    /// Palette and template stores.
    pub session: BuilderSession,

    /// Where the item being dragged came from, set on `dragstart` and taken
    /// by the first `drop` or `dragend` that follows.
    pub drag_source: Option<DropLocation>,

    /// Item currently hovered by a drag, used to highlight the drop position.
    pub drag_over: Option<DropLocation>,

    /// Ids of image items whose file is still being read.
    pub uploading: HashSet<String>,

    /// Reference to the image dialog/top-sheet container node.
    pub image_dialog_ref: NodeRef,

    /// Id of the image item shown in the image dialog (if any).
    pub selected_image_id: Option<String>,
}

impl EmailBuilderComponent {
    pub fn new(props: &EmailBuilderProps) -> Self {
        let session = if props.seed_starter_layout {
            BuilderSession::new()
        } else {
            BuilderSession::empty()
        };
        Self {
            session,
            drag_source: None,
            drag_over: None,
            uploading: HashSet::new(),
            image_dialog_ref: Default::default(),
            selected_image_id: None,
        }
    }

    /// Whether a drop at `location` should be highlighted.
    pub fn is_drag_target(&self, location: DropLocation) -> bool {
        self.drag_source.is_some() && self.drag_over == Some(location)
    }
}
