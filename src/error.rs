use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure taxonomy for one analysis run.
///
/// Only `ArchiveOpen` is fatal. Every other variant is contained at the
/// document, node, or reference level: the affected item is omitted from the
/// report and the condition is recorded on the diagnostic trail.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("cannot open {} as a gzip compressed tar archive: {source}", .path.display())]
    ArchiveOpen { path: PathBuf, source: io::Error },

    #[error("{entry}: file does not contain JSON data")]
    DocumentDecode {
        entry: String,
        source: serde_json::Error,
    },

    #[error("{entry}: policy root {root} carries no configuration")]
    UnsupportedPolicyRoot { entry: String, root: String },

    #[error("{entry}: unknown policy root {root}")]
    UnknownPolicyRoot { entry: String, root: String },

    #[error("{entry}: policy class {class} is not supported")]
    UnsupportedPolicyClass { entry: String, class: String },

    #[error("{entry}: unknown policy class {class}")]
    UnknownPolicyClass { entry: String, class: String },

    #[error("{entry}: reference {target} does not name a VLAN pool")]
    MalformedReference { entry: String, target: String },

    #[error("{entry}: {class} node is missing required attribute {attribute}")]
    MissingAttribute {
        entry: String,
        class: String,
        attribute: String,
    },
}

impl AnalysisError {
    /// True for the one condition that aborts the whole run.
    pub fn is_fatal(&self) -> bool {
        matches!(self, AnalysisError::ArchiveOpen { .. })
    }
}
