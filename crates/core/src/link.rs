//! Record linkage: reviewer join and reverse document association.

use std::collections::{BTreeMap, BTreeSet};

use crate::model::{DocumentRecord, LinkedRecord, RosterRecord};

/// Link cleaned documents to the cleaned roster.
///
/// Step 1 — reviewer join: left outer join on the canonical name key. Every
/// document row survives; unmatched rows carry no roster fields; roster rows
/// sharing one key multiply the document row (accepted, not deduplicated).
///
/// Step 2 — reverse association: for each document, the set of distinct
/// `internal_id`s whose `associated_document_id` points at it. Documents
/// never referenced stay `None`.
pub fn link(documents: &[DocumentRecord], roster: &[RosterRecord]) -> Vec<LinkedRecord> {
    let mut by_key: BTreeMap<&str, Vec<&RosterRecord>> = BTreeMap::new();
    for record in roster {
        by_key.entry(record.name_key.as_str()).or_default().push(record);
    }

    let referencing = referencing_ids(documents);

    let mut linked = Vec::new();
    for document in documents {
        let referencing_ids = referencing.get(document.internal_id.as_str()).cloned();
        match by_key.get(document.reviewer_name.as_str()) {
            Some(assignments) => {
                for assignment in assignments {
                    linked.push(LinkedRecord {
                        document: document.clone(),
                        roster: Some((*assignment).clone()),
                        referencing_ids: referencing_ids.clone(),
                    });
                }
            }
            None => linked.push(LinkedRecord {
                document: document.clone(),
                roster: None,
                referencing_ids,
            }),
        }
    }

    linked
}

/// Group documents by the id they point at; collect the distinct pointing
/// ids per target.
fn referencing_ids(documents: &[DocumentRecord]) -> BTreeMap<&str, BTreeSet<String>> {
    let mut map: BTreeMap<&str, BTreeSet<String>> = BTreeMap::new();
    for document in documents {
        if let Some(ref target) = document.associated_document_id {
            map.entry(target.as_str())
                .or_default()
                .insert(document.internal_id.clone());
        }
    }
    map
}
