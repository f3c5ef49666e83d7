use std::collections::HashMap;

/// Entity kinds that receive fresh ids in the destination guild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapKind {
    Role,
    Category,
    Channel,
}

/// Source-to-destination id mapping, one namespace per entity kind.
///
/// Built up as each clone phase creates entities and consulted by later
/// phases to rewrite cross-entity references. Single-pass: a source id is
/// recorded at most once and never overwritten within a run.
#[derive(Debug, Default)]
pub struct IdMap {
    entries: HashMap<MapKind, HashMap<String, String>>,
}

impl IdMap {
    pub fn record(
        &mut self,
        kind: MapKind,
        source_id: impl Into<String>,
        dest_id: impl Into<String>,
    ) {
        self.entries
            .entry(kind)
            .or_default()
            .insert(source_id.into(), dest_id.into());
    }

    /// The destination id recorded for `source_id`, if any.
    pub fn get(&self, kind: MapKind, source_id: &str) -> Option<&str> {
        self.entries
            .get(&kind)
            .and_then(|namespace| namespace.get(source_id))
            .map(String::as_str)
    }

    /// The mapped destination id, or `source_id` unchanged when no mapping
    /// exists. The passthrough covers subjects that keep their original id,
    /// such as the `@everyone` role or a raw member id.
    pub fn resolve<'a>(&'a self, kind: MapKind, source_id: &'a str) -> &'a str {
        self.get(kind, source_id).unwrap_or(source_id)
    }
}
