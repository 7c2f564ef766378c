//! Mutagraph core: data model for the gene-mutation dashboard pipeline.
//!
//! Everything in this crate is constructed once at startup from fixed
//! definitions and is immutable afterward. The builders and aggregators in
//! `mutagraph-report` consume these entities by shared reference.
//!
//! # Contents
//!
//! - [`MutationDataset`] - the in-memory mutation record table
//! - [`ReferenceStructures`] - fixed auxiliary data (sequence track,
//!   interaction graph, signature tables, pathway map, spectrum counts)
//! - [`MutagraphError`] - unified error type for the whole pipeline

pub mod dataset;
pub mod errors;
pub mod reference;

pub use dataset::{
    ClinicalSignificance, MutationDataset, MutationRecord, MutationType,
};
pub use errors::MutagraphError;
pub use reference::{
    GraphNode, InteractionGraph, Pathway, PathwayMap, ReferenceStructures, SequenceTrack,
    Signature, SignatureTable, SpectrumCounts, SUBSTITUTION_CONTEXTS,
};

/// Crate version (from Cargo.toml)
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
