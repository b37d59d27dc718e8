use thiserror::Error;

use crate::model::component::ComponentKind;

/// Rejections raised by the palette and template stores.
///
/// Every operation that returns one of these leaves its store untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("index {index} is out of range for a sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("no template item with id {id}")]
    ItemNotFound { id: String },

    #[error("item {id} is a {kind} component, expected {expected}")]
    KindMismatch {
        id: String,
        kind: ComponentKind,
        expected: &'static str,
    },

    #[error("no unused item id after {attempts} attempts")]
    IdExhausted { attempts: usize },
}

/// Failures while turning a picked file into an embeddable payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageError {
    #[error("the selected file is empty")]
    EmptyPayload,
}
