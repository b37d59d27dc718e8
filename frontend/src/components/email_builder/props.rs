//! Defines the properties for the `EmailBuilderComponent`.

use yew::prelude::*;

/// Properties for the `EmailBuilderComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct EmailBuilderProps {
    /// Start with the five-item starter layout (title, paragraph, image,
    /// divider, button). When `false` the template starts empty.
    ///
    /// Read once, when the component is created.
    #[prop_or(true)]
    pub seed_starter_layout: bool,
}
