//! Registry validation orchestration.

pub mod naming;
pub mod reference;

use crate::{error::ErrorTree, registry::Registry};

/// Run full registry validation in a staged, deterministic order.
pub(crate) fn validate_registry(registry: &Registry) -> Result<(), ErrorTree> {
    let mut errors = ErrorTree::new();

    // Phase 1: local invariants (names, well-formed descriptors).
    naming::validate_naming(registry, &mut errors);

    // Phase 2: schema-wide reference closure.
    reference::validate_references(registry, &mut errors);

    errors.result()
}
