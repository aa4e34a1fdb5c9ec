// Named-entity extraction per topic, grouped by entity type.

use std::collections::{BTreeMap, BTreeSet};

use anyhow::Result;
use tracing::debug;

use crate::engine::traits::LanguageEngine;
use crate::ingest::TopicMap;

/// Entity-type label -> unique surface strings (case-sensitive dedup).
pub type EntityReport = BTreeMap<String, BTreeSet<String>>;

/// Extract and group named entities for every topic.
///
/// A topic with no detected entities still gets a key, mapped to an
/// empty report — absence of entities is a result, not a missing row.
pub fn analyze_entities(
    topics: &TopicMap,
    engine: &dyn LanguageEngine,
) -> Result<BTreeMap<String, EntityReport>> {
    let mut reports = BTreeMap::new();

    for (title, corpus) in topics {
        let doc = engine.annotate(corpus)?;

        let mut grouped: EntityReport = BTreeMap::new();
        for entity in &doc.entities {
            grouped
                .entry(entity.label.clone())
                .or_default()
                .insert(entity.text.clone());
        }

        debug!(topic = %title, types = grouped.len(), "Entities grouped");
        reports.insert(title.clone(), grouped);
    }

    Ok(reports)
}
