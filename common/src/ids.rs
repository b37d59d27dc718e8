//! Identity minting for placed template items.

use uuid::Uuid;

/// Source of fresh item ids.
///
/// The stores treat ids as opaque strings; uniqueness across both stores is
/// enforced by the template store, which skips any id already in use.
pub trait IdSource {
    fn next_id(&mut self) -> String;
}

/// Random v4 UUIDs, the id source used by the running application.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}
