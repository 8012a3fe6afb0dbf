//! Resolve the nested host-type tree into one flat map
//!
//! Depth first: each host type's resolved definition is its parent's
//! resolved definition with its own definition merged on top, and becomes the
//! parent of its children in turn.

use crate::Result;
use crate::merge::combine_host_type;
use crate::model::{HostTypeDefinition, HostTypeMap};

/// Flatten one level of nested host types beneath `parent`.
///
/// `parent` is the fully resolved definition of the enclosing host type
/// (empty at the root). The result holds every host type at this level and
/// below, each fully resolved and without child host types. A host type is
/// inserted after its descendants, so it is never shadowed by one of them.
pub fn flatten(nested: &HostTypeMap, parent: &HostTypeDefinition) -> Result<HostTypeMap> {
    let mut flat = HostTypeMap::new();

    for (host_type, definition) in nested {
        let resolved = combine_host_type(parent, definition)?.without_children();

        let descendants = flatten(&definition.host_type_specific_metadata, &resolved)?;
        tracing::trace!(%host_type, descendants = descendants.len(), "Flattened host type");
        flat.extend(descendants);

        flat.insert(host_type.clone(), resolved);
    }

    Ok(flat)
}
