use crate::clone::id_map::{IdMap, MapKind};

/// Tests lookup of a recorded mapping.
///
/// Expected: destination id returned
#[test]
fn resolves_recorded_mapping() {
    let mut ids = IdMap::default();
    ids.record(MapKind::Role, "src-1", "dst-1");

    assert_eq!(ids.resolve(MapKind::Role, "src-1"), "dst-1");
    assert_eq!(ids.get(MapKind::Role, "src-1"), Some("dst-1"));
}

/// Tests the passthrough for ids that were never mapped.
///
/// Expected: the source id unchanged, for every kind
#[test]
fn passes_through_unmapped_ids() {
    let ids = IdMap::default();

    assert_eq!(ids.resolve(MapKind::Role, "everyone-id"), "everyone-id");
    assert_eq!(ids.resolve(MapKind::Category, "cat-1"), "cat-1");
    assert_eq!(ids.resolve(MapKind::Channel, "chan-1"), "chan-1");
    assert_eq!(ids.get(MapKind::Role, "everyone-id"), None);
}

/// Tests that entity kinds do not share a namespace.
///
/// Expected: a role mapping is invisible to category lookups
#[test]
fn kinds_are_independent_namespaces() {
    let mut ids = IdMap::default();
    ids.record(MapKind::Role, "shared-id", "dst-role");

    assert_eq!(ids.resolve(MapKind::Role, "shared-id"), "dst-role");
    assert_eq!(ids.resolve(MapKind::Category, "shared-id"), "shared-id");
}
