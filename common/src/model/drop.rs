/// The two drop targets of the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Container {
    Palette,
    Template,
}

/// A position inside one container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropLocation {
    pub container: Container,
    pub index: usize,
}

impl DropLocation {
    pub fn new(container: Container, index: usize) -> Self {
        Self { container, index }
    }

    pub fn palette(index: usize) -> Self {
        Self::new(Container::Palette, index)
    }

    pub fn template(index: usize) -> Self {
        Self::new(Container::Template, index)
    }
}

/// One completed drag gesture. `destination` is `None` when the item was
/// released outside every container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropEvent {
    pub source: DropLocation,
    pub destination: Option<DropLocation>,
}

impl DropEvent {
    pub fn new(source: DropLocation, destination: DropLocation) -> Self {
        Self {
            source,
            destination: Some(destination),
        }
    }

    pub fn cancelled(source: DropLocation) -> Self {
        Self {
            source,
            destination: None,
        }
    }
}
