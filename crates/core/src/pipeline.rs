//! Explicit three-stage composition: clean documents, clean roster, link.
//!
//! Each stage is callable on its own; this module only wires them and
//! derives the run summary.

use std::collections::BTreeSet;

use crate::clean::{clean_documents, clean_roster};
use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::link::link;
use crate::model::{DocumentRecord, LinkedRecord, PipelineSummary, RosterRecord};
use crate::table::Table;

#[derive(Debug)]
pub struct PipelineOutput {
    pub documents: Vec<DocumentRecord>,
    pub roster: Vec<RosterRecord>,
    pub linked: Vec<LinkedRecord>,
    pub summary: PipelineSummary,
}

/// Run the whole pipeline over two pre-loaded tables.
pub fn run(
    config: &PipelineConfig,
    documents_table: &Table,
    roster_table: &Table,
) -> Result<PipelineOutput, PipelineError> {
    let documents = clean_documents(documents_table, &config.documents)?;
    let roster = clean_roster(roster_table, &config.roster)?;
    let linked = link(&documents, &roster);
    let summary = summarize(&documents, &roster, &linked);

    Ok(PipelineOutput {
        documents,
        roster,
        linked,
        summary,
    })
}

fn summarize(
    documents: &[DocumentRecord],
    roster: &[RosterRecord],
    linked: &[LinkedRecord],
) -> PipelineSummary {
    let matched_reviewers = linked.iter().filter(|l| l.roster.is_some()).count();
    let referenced_documents = linked
        .iter()
        .filter(|l| l.referencing_ids.is_some())
        .map(|l| l.document.internal_id.as_str())
        .collect::<BTreeSet<_>>()
        .len();

    PipelineSummary {
        document_rows: documents.len(),
        roster_rows: roster.len(),
        linked_rows: linked.len(),
        matched_reviewers,
        unmatched_reviewers: linked.len() - matched_reviewers,
        referenced_documents,
    }
}
