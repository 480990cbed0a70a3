pub mod config;
pub mod report;
pub mod schema;

pub use report::{
    BatchReport, FieldChange, FileReferences, FileReport, FileStatus, ReferenceEntry,
    ReferenceReport,
};
