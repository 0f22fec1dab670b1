use crate::error::AnalysisError;
use once_cell::sync::Lazy;
use regex::Regex;

/// `tDn` shape of a VLAN namespace reference, e.g.
/// `uni/infra/vlanns-[prod-pool]-static`. The suffix distinguishes static
/// from dynamic allocation; both name a pool the same way.
static VLAN_NS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"uni/infra/vlanns-\[(.+)\]-(static|dynamic)").expect("valid pattern"));

/// Extracts the VLAN pool name from a namespace reference target.
///
/// Pure pattern extraction: no normalization, and no check that the pool
/// actually exists anywhere else in the backup. A target that does not
/// match the expected shape is a data-shape violation reported as
/// [`AnalysisError::MalformedReference`]; callers skip the one derived fact
/// and keep walking.
pub fn resolve_vlan_reference(entry: &str, target: &str) -> Result<String, AnalysisError> {
    match VLAN_NS_PATTERN.captures(target) {
        Some(caps) => Ok(caps[1].to_string()),
        None => Err(AnalysisError::MalformedReference {
            entry: entry.to_string(),
            target: target.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::resolve_vlan_reference;
    use crate::error::AnalysisError;

    #[test]
    fn static_reference_yields_pool_name() {
        let pool = resolve_vlan_reference("doc", "uni/infra/vlanns-[POOLNAME]-static").unwrap();
        assert_eq!(pool, "POOLNAME");
    }

    #[test]
    fn dynamic_reference_yields_pool_name() {
        let pool = resolve_vlan_reference("doc", "uni/infra/vlanns-[POOLNAME]-dynamic").unwrap();
        assert_eq!(pool, "POOLNAME");
    }

    #[test]
    fn pool_names_keep_internal_punctuation() {
        let pool =
            resolve_vlan_reference("doc", "uni/infra/vlanns-[prod_pool-01]-dynamic").unwrap();
        assert_eq!(pool, "prod_pool-01");
    }

    #[test]
    fn unrelated_target_is_malformed() {
        let err = resolve_vlan_reference("doc", "uni/tn-common/ap-default").unwrap_err();
        assert!(matches!(err, AnalysisError::MalformedReference { .. }));
        assert!(!err.is_fatal());
    }

    #[test]
    fn unknown_allocation_mode_is_malformed() {
        let err = resolve_vlan_reference("doc", "uni/infra/vlanns-[p1]-inherited").unwrap_err();
        assert!(matches!(err, AnalysisError::MalformedReference { .. }));
    }

    #[test]
    fn empty_target_is_malformed() {
        assert!(resolve_vlan_reference("doc", "").is_err());
    }
}
