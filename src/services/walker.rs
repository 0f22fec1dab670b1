use crate::domain::constants::{
    PHYSICAL_DOMAIN_TYPE, PHYS_DOMAIN_CLASS, TENANT_CLASS, UNSUPPORTED_CLASSES,
    VLAN_NS_REFERENCE_CLASS,
};
use crate::domain::models::{EntityStore, PhysicalDomain, Tenant, VlanAssociation};
use crate::error::AnalysisError;
use crate::services::classifier::PolicyNode;
use crate::services::diagnostics::DiagnosticSink;
use crate::services::resolver;
use serde_json::Value;

/// Mutable state threaded through one walk: the entity store, the resolved
/// pool facts, and the diagnostic trail. Owned by a single analysis run.
pub struct WalkContext<'a> {
    pub store: &'a mut EntityStore,
    pub facts: &'a mut Vec<VlanAssociation>,
    pub diag: &'a mut dyn DiagnosticSink,
}

type Extractor = fn(&mut WalkContext<'_>, &str, &Value);

/// Class-tag dispatch registry. Supporting a new policy class means one row
/// here plus its extractor below; unknown tags fall through to a skip.
const EXTRACTORS: &[(&str, Extractor)] = &[
    (TENANT_CLASS, extract_tenant),
    (PHYS_DOMAIN_CLASS, extract_physical_domain),
];

/// Visits one policy node, dispatching each class tag it carries.
///
/// Tags are visited in sorted order so repeated runs over the same backup
/// produce identical output ordering.
pub fn visit(ctx: &mut WalkContext<'_>, entry: &str, node: &PolicyNode) {
    let mut tags: Vec<&str> = node.keys().map(String::as_str).collect();
    tags.sort_unstable();
    for tag in tags {
        dispatch(ctx, entry, tag, &node[tag]);
    }
}

fn dispatch(ctx: &mut WalkContext<'_>, entry: &str, tag: &str, payload: &Value) {
    if let Some((_, extract)) = EXTRACTORS.iter().find(|(t, _)| *t == tag) {
        extract(ctx, entry, payload);
    } else if UNSUPPORTED_CLASSES.contains(&tag) {
        let err = AnalysisError::UnsupportedPolicyClass {
            entry: entry.to_string(),
            class: tag.to_string(),
        };
        ctx.diag.debug(&format!("+--- Skipping: {err}"));
    } else {
        let err = AnalysisError::UnknownPolicyClass {
            entry: entry.to_string(),
            class: tag.to_string(),
        };
        ctx.diag.event(&format!("+--- Skipping: {err}"));
    }
}

fn extract_tenant(ctx: &mut WalkContext<'_>, entry: &str, payload: &Value) {
    match tenant_from(entry, payload) {
        Ok(tenant) => {
            ctx.diag.event(&format!("+--- Tenant found: {}", tenant.name));
            dump_attributes(
                ctx,
                payload,
                &["descr", "dn", "name", "nameAlias", "ownerKey", "ownerTag"],
            );
            ctx.store.tenants.insert(tenant.name.clone(), tenant);
        }
        Err(err) => ctx.diag.event(&format!("+--- Skipping: {err}")),
    }
    // Tenants have no further-processed children today; the walk still
    // descends so extra content surfaces on the trail instead of failing.
    visit_children(ctx, entry, payload);
}

fn extract_physical_domain(ctx: &mut WalkContext<'_>, entry: &str, payload: &Value) {
    let domain = match physical_domain_from(entry, payload) {
        Ok(d) => d,
        Err(err) => {
            ctx.diag.event(&format!("+--- Skipping: {err}"));
            return;
        }
    };
    ctx.diag
        .event(&format!("+--- Physical domain found: {}", domain.name));
    dump_attributes(
        ctx,
        payload,
        &["dn", "name", "nameAlias", "ownerKey", "ownerTag"],
    );
    let name = domain.name.clone();
    ctx.store.domains.insert(name.clone(), domain);

    let Some(children) = payload.get("children").and_then(Value::as_array) else {
        ctx.diag
            .debug(&format!("+------ {entry}: no {PHYS_DOMAIN_CLASS} child objects"));
        return;
    };
    for child in children.iter().filter_map(Value::as_object) {
        let mut tags: Vec<&str> = child.keys().map(String::as_str).collect();
        tags.sort_unstable();
        for tag in tags {
            if tag == VLAN_NS_REFERENCE_CLASS {
                resolve_pool_reference(ctx, entry, &name, &child[tag]);
            } else {
                dispatch(ctx, entry, tag, &child[tag]);
            }
        }
    }
}

/// Handles one `infraRsVlanNs` child: resolves its `tDn` into a pool name
/// and records the association. A malformed target costs exactly this one
/// fact, never the rest of the walk.
fn resolve_pool_reference(ctx: &mut WalkContext<'_>, entry: &str, domain_name: &str, payload: &Value) {
    let target = match required_attr(entry, VLAN_NS_REFERENCE_CLASS, payload, "tDn") {
        Ok(t) => t,
        Err(err) => {
            ctx.diag.event(&format!("+--- Skipping: {err}"));
            return;
        }
    };
    ctx.diag
        .event(&format!("+---- Associated VLAN pool found: {target}"));
    match resolver::resolve_vlan_reference(entry, &target) {
        Ok(pool) => {
            dump_attributes(ctx, payload, &["dn", "tDn"]);
            if let Some(domain) = ctx.store.domains.get_mut(domain_name) {
                domain.vlan_pool = Some(pool.clone());
            }
            ctx.facts.push(VlanAssociation {
                domain_name: domain_name.to_string(),
                domain_type: PHYSICAL_DOMAIN_TYPE.to_string(),
                vlan_pool: pool,
            });
        }
        Err(err) => ctx.diag.event(&format!("+--- Skipping: {err}")),
    }
}

fn tenant_from(entry: &str, payload: &Value) -> Result<Tenant, AnalysisError> {
    Ok(Tenant {
        name: required_attr(entry, TENANT_CLASS, payload, "name")?,
        description: required_attr(entry, TENANT_CLASS, payload, "descr")?,
        owner_key: required_attr(entry, TENANT_CLASS, payload, "ownerKey")?,
        owner_tag: required_attr(entry, TENANT_CLASS, payload, "ownerTag")?,
    })
}

fn physical_domain_from(entry: &str, payload: &Value) -> Result<PhysicalDomain, AnalysisError> {
    Ok(PhysicalDomain {
        name: required_attr(entry, PHYS_DOMAIN_CLASS, payload, "name")?,
        domain_type: PHYSICAL_DOMAIN_TYPE.to_string(),
        vlan_pool: None,
    })
}

/// Looks up a required attribute. Absent and empty both count as missing;
/// extraction never substitutes a default. `name` in particular must stay
/// non-empty because it keys the entity store.
fn required_attr(
    entry: &str,
    class: &str,
    payload: &Value,
    attribute: &str,
) -> Result<String, AnalysisError> {
    payload
        .get("attributes")
        .and_then(|a| a.get(attribute))
        .and_then(Value::as_str)
        .filter(|v| attribute != "name" || !v.is_empty())
        .map(str::to_string)
        .ok_or_else(|| AnalysisError::MissingAttribute {
            entry: entry.to_string(),
            class: class.to_string(),
            attribute: attribute.to_string(),
        })
}

fn visit_children(ctx: &mut WalkContext<'_>, entry: &str, payload: &Value) {
    let Some(children) = payload.get("children").and_then(Value::as_array) else {
        return;
    };
    for child in children.iter().filter_map(Value::as_object) {
        visit(ctx, entry, child);
    }
}

fn dump_attributes(ctx: &mut WalkContext<'_>, payload: &Value, keys: &[&str]) {
    let Some(attrs) = payload.get("attributes").and_then(Value::as_object) else {
        return;
    };
    for key in keys {
        if let Some(v) = attrs.get(*key).and_then(Value::as_str) {
            ctx.diag.debug(&format!("+---- {key}: {v}"));
        }
    }
}
