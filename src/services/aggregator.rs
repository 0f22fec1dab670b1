use crate::domain::models::{EntityStore, Report, VlanAssociation};
use crate::services::diagnostics::DiagnosticSink;

/// Flattens the finalized entity store and the pool facts into report rows.
///
/// Tenant rows come from the store, ordered by name. Domain rows come from
/// the facts in collection order, one per resolved reference: a domain with
/// no resolved pools contributes no rows, a domain with several contributes
/// several.
pub fn build_report(
    store: &EntityStore,
    facts: &[VlanAssociation],
    diag: &mut dyn DiagnosticSink,
) -> Report {
    diag.event(&format!(
        "+-- Aggregated {} tenants and {} domain associations",
        store.tenants.len(),
        facts.len()
    ));
    Report {
        tenants: store.tenants.values().cloned().collect(),
        domains: facts.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::build_report;
    use crate::domain::models::{EntityStore, PhysicalDomain, Tenant, VlanAssociation};
    use crate::services::diagnostics::RecordingSink;

    fn tenant(name: &str) -> Tenant {
        Tenant {
            name: name.to_string(),
            description: String::new(),
            owner_key: String::new(),
            owner_tag: String::new(),
        }
    }

    #[test]
    fn tenant_rows_are_ordered_by_name() {
        let mut store = EntityStore::default();
        for name in ["zeta", "alpha", "mid"] {
            store.tenants.insert(name.to_string(), tenant(name));
        }
        let mut diag = RecordingSink::default();
        let report = build_report(&store, &[], &mut diag);
        let names: Vec<&str> = report.tenants.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["alpha", "mid", "zeta"]);
    }

    #[test]
    fn domains_without_facts_produce_no_rows() {
        let mut store = EntityStore::default();
        store.domains.insert(
            "D1".to_string(),
            PhysicalDomain {
                name: "D1".to_string(),
                domain_type: "physical".to_string(),
                vlan_pool: None,
            },
        );
        let mut diag = RecordingSink::default();
        let report = build_report(&store, &[], &mut diag);
        assert!(report.domains.is_empty());
    }

    #[test]
    fn domain_rows_keep_fact_collection_order() {
        let facts = vec![
            VlanAssociation {
                domain_name: "D1".to_string(),
                domain_type: "physical".to_string(),
                vlan_pool: "P1".to_string(),
            },
            VlanAssociation {
                domain_name: "D1".to_string(),
                domain_type: "physical".to_string(),
                vlan_pool: "P2".to_string(),
            },
        ];
        let mut diag = RecordingSink::default();
        let report = build_report(&EntityStore::default(), &facts, &mut diag);
        assert_eq!(report.domains, facts);
    }
}
