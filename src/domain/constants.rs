//! Policy class tags recognized by the classifier and tree walker.

/// Root key of documents carrying configuration.
pub const POLICY_UNIVERSE_ROOT: &str = "polUni";

/// Root key of topology documents; recognized but carries no configuration.
pub const TOP_ROOT: &str = "topRoot";

/// Tenant container class.
pub const TENANT_CLASS: &str = "fvTenant";

/// Physical domain profile class.
pub const PHYS_DOMAIN_CLASS: &str = "physDomP";

/// Relation from a physical domain to its VLAN namespace.
pub const VLAN_NS_REFERENCE_CLASS: &str = "infraRsVlanNs";

/// Classes we recognize under `polUni` but deliberately do not analyse.
pub const UNSUPPORTED_CLASSES: &[&str] = &[
    "quotaCont",
    "plannerCont",
    "aaaRbacEp",
    "dbgDebugP",
    "pkiFabricCommunicationEp",
];

/// The only domain type the tool extracts.
pub const PHYSICAL_DOMAIN_TYPE: &str = "physical";
