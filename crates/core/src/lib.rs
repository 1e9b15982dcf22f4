//! `rosterlink-core` — document/roster cleaning and linking engine.
//!
//! Pure engine crate: receives pre-loaded tables, returns cleaned and linked
//! records. No CLI or IO dependencies.

pub mod clean;
pub mod config;
pub mod error;
pub mod link;
pub mod model;
pub mod name_key;
pub mod normalize;
pub mod pipeline;
pub mod table;

pub use config::PipelineConfig;
pub use error::PipelineError;
pub use model::{DocumentRecord, LinkedRecord, PipelineSummary, RosterRecord};
pub use pipeline::{run, PipelineOutput};
pub use table::Table;
