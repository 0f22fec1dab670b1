use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Envelope for `--json` output.
#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Tenant configuration extracted from an `fvTenant` node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tenant {
    pub name: String,
    pub description: String,
    pub owner_key: String,
    pub owner_tag: String,
}

/// Physical domain extracted from a `physDomP` node.
///
/// `vlan_pool` holds the most recently resolved pool reference; the report
/// rows themselves come from [`VlanAssociation`] facts, one per reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhysicalDomain {
    pub name: String,
    pub domain_type: String,
    pub vlan_pool: Option<String>,
}

/// Domain-to-pool fact resolved from an `infraRsVlanNs` child reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VlanAssociation {
    pub domain_name: String,
    pub domain_type: String,
    pub vlan_pool: String,
}

/// Entities accumulated over one analysis run, keyed by name per variant.
///
/// Re-inserting a name replaces the previous record wholesale; fields are
/// never merged across occurrences. BTreeMap keeps report ordering stable
/// across runs.
#[derive(Debug, Default)]
pub struct EntityStore {
    pub tenants: BTreeMap<String, Tenant>,
    pub domains: BTreeMap<String, PhysicalDomain>,
}

/// Finalized row sets handed to the report sink.
#[derive(Debug, Default, Serialize)]
pub struct Report {
    pub tenants: Vec<Tenant>,
    pub domains: Vec<VlanAssociation>,
}

/// Progress of one analysis run, recorded on the diagnostic trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    ReadingArchive,
    ClassifyingDocuments,
    WalkingTrees,
    Aggregating,
    Reported,
    Done,
    Failed,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Idle => "idle",
            Phase::ReadingArchive => "reading-archive",
            Phase::ClassifyingDocuments => "classifying-documents",
            Phase::WalkingTrees => "walking-trees",
            Phase::Aggregating => "aggregating",
            Phase::Reported => "reported",
            Phase::Done => "done",
            Phase::Failed => "failed",
        };
        f.write_str(name)
    }
}
