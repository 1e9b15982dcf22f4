use std::collections::{BTreeSet, HashMap};

use chrono::{Duration, NaiveDateTime};

// ---------------------------------------------------------------------------
// Documents
// ---------------------------------------------------------------------------

/// One historical action on a document. A document accumulates several of
/// these over its lifecycle; `internal_id` groups them and is never assumed
/// unique per row.
#[derive(Debug, Clone)]
pub struct DocumentRecord {
    pub internal_id: String,
    pub category: String,
    /// Canonical name key after cleaning (whitespace-collapsed,
    /// diacritic-free, reordered when the raw field had 4 tokens).
    pub reviewer_name: String,
    pub event_timestamp: NaiveDateTime,
    /// `internal_id` of the document this row points at, when any
    /// (e.g. a resolution naming the agreement it enacts).
    pub associated_document_id: Option<String>,
    /// Delta to the previous event of the same `internal_id` in timestamp
    /// order. `None` for the first event of each group, never zero.
    pub elapsed_since_previous: Option<Duration>,
    /// Every original column of the row, keyed by header. The reviewer
    /// column is rewritten with the cleaned value.
    pub raw_fields: HashMap<String, String>,
}

// ---------------------------------------------------------------------------
// Roster
// ---------------------------------------------------------------------------

/// One employee-unit assignment, unique after deduplication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterRecord {
    /// Name as stored in the roster export.
    pub full_name: String,
    pub unit_code: String,
    pub unit_description: String,
    pub unit_code_secondary: String,
    pub unit_description_secondary: String,
    /// Canonical join key derived from `full_name`.
    pub name_key: String,
}

// ---------------------------------------------------------------------------
// Linked output
// ---------------------------------------------------------------------------

/// A cleaned document row joined with its reviewer and the set of documents
/// that reference it.
#[derive(Debug, Clone)]
pub struct LinkedRecord {
    pub document: DocumentRecord,
    /// Matched roster assignment; `None` when the reviewer key found no
    /// roster row. Duplicate roster keys multiply linked rows instead.
    pub roster: Option<RosterRecord>,
    /// Distinct `internal_id`s whose `associated_document_id` names this
    /// row's document; `None` when nothing references it. Set semantics —
    /// ordering among referencing ids carries no meaning.
    pub referencing_ids: Option<BTreeSet<String>>,
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// Run statistics for the operator report.
#[derive(Debug, Clone, Default)]
pub struct PipelineSummary {
    pub document_rows: usize,
    pub roster_rows: usize,
    pub linked_rows: usize,
    /// Linked rows that carry a roster match.
    pub matched_reviewers: usize,
    /// Linked rows with no roster match.
    pub unmatched_reviewers: usize,
    /// Distinct documents referenced by at least one other document.
    pub referenced_documents: usize,
}
