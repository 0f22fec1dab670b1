use crate::domain::constants::{POLICY_UNIVERSE_ROOT, TOP_ROOT};
use crate::error::AnalysisError;
use crate::services::diagnostics::DiagnosticSink;
use serde_json::Value;

/// A policy node: a JSON object whose keys are class tags and whose values
/// carry `attributes` and optional `children`.
pub type PolicyNode = serde_json::Map<String, Value>;

/// Inspects one decoded archive entry and returns the top-level policy
/// nodes to walk.
///
/// Only `polUni` documents contribute nodes. `topRoot` documents, unknown
/// root keys, and non-JSON content are expected conditions: each leaves a
/// line on the diagnostic trail and routes nothing.
pub fn classify(entry: &str, bytes: &[u8], diag: &mut dyn DiagnosticSink) -> Vec<PolicyNode> {
    let value: Value = match serde_json::from_slice(bytes) {
        Ok(v) => v,
        Err(source) => {
            let err = AnalysisError::DocumentDecode {
                entry: entry.to_string(),
                source,
            };
            diag.event(&format!("+--- Skipping: {err}"));
            return Vec::new();
        }
    };

    let Some(root) = value.as_object() else {
        diag.event(&format!("+--- Skipping: {entry}: document root is not an object"));
        return Vec::new();
    };

    if let Some(universe) = root.get(POLICY_UNIVERSE_ROOT) {
        let Some(children) = universe.get("children").and_then(Value::as_array) else {
            diag.debug(&format!("+--- {entry}: {POLICY_UNIVERSE_ROOT} has no children"));
            return Vec::new();
        };
        return children
            .iter()
            .filter_map(Value::as_object)
            .cloned()
            .collect();
    }

    if root.contains_key(TOP_ROOT) {
        let err = AnalysisError::UnsupportedPolicyRoot {
            entry: entry.to_string(),
            root: TOP_ROOT.to_string(),
        };
        diag.event(&format!("+--- Skipping: {err}"));
        return Vec::new();
    }

    let key = root.keys().next().cloned().unwrap_or_default();
    let err = AnalysisError::UnknownPolicyRoot {
        entry: entry.to_string(),
        root: key,
    };
    diag.event(&format!("+--- Skipping: {err}"));
    Vec::new()
}
