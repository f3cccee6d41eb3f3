#![doc = include_str!("../README.md")]

pub mod data_sources;
pub mod errors;
pub mod models;
pub mod normalize;
pub mod qvalues;

pub use data_sources::{
    SourceFormat,
    read_distinct_peptides,
    sniff_format,
};
pub use errors::{
    PepsiftError,
    Result,
};
pub use models::{
    DistinctPeptides,
    FragpipePsm,
    TargetDecoy,
};
pub use normalize::canonicalize;
pub use qvalues::{
    LabelledHit,
    assign_qvalues,
    qvalues_from_labels,
};
