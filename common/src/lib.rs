//! Platform-neutral core of the email template builder.
//!
//! Holds the component palette, the placed template sequence, and the drag
//! coordinator that routes completed drop gestures between them. Nothing in
//! here touches the DOM, so the whole state model is testable natively while
//! the Yew frontend drives it from the browser.

pub mod coordinator;
pub mod error;
pub mod ids;
pub mod image;
pub mod model;
pub mod session;
pub mod store;

pub use coordinator::{DropOutcome, apply_drop};
pub use error::{ImageError, StoreError};
pub use ids::{IdSource, UuidIds};
pub use model::component::{ComponentArchetype, ComponentKind};
pub use model::drop::{Container, DropEvent, DropLocation};
pub use model::template::{ImageSource, ItemContent, TemplateItem};
pub use session::BuilderSession;
pub use store::palette::PaletteStore;
pub use store::template::{PendingImage, TemplateStore};
