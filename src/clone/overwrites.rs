use crate::clone::id_map::{IdMap, MapKind};
use crate::model::channel::PermissionOverwrite;

/// Rewrites overwrite subject ids to their destination counterparts.
///
/// Subjects without a recorded role mapping (member subjects, `@everyone`)
/// pass through unchanged. Kind, allow, and deny bitmasks are preserved, as
/// is the order of the rules. An absent rule list stays absent.
pub fn translate_overwrites(
    overwrites: Option<&[PermissionOverwrite]>,
    ids: &IdMap,
) -> Option<Vec<PermissionOverwrite>> {
    overwrites.map(|rules| {
        rules
            .iter()
            .map(|rule| PermissionOverwrite {
                id: ids.resolve(MapKind::Role, &rule.id).to_string(),
                kind: rule.kind,
                allow: rule.allow.clone(),
                deny: rule.deny.clone(),
            })
            .collect()
    })
}
