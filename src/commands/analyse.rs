use crate::domain::models::{EntityStore, Phase, Report};
use crate::error::AnalysisError;
use crate::services::diagnostics::DiagnosticSink;
use crate::services::{aggregator, archive, classifier, walker};
use std::path::Path;

/// Runs the analysis pipeline over one backup archive.
///
/// Phase transitions land on the diagnostic trail. Per-document and
/// per-node trouble is contained inside its phase and only reduces report
/// coverage; the one error this returns is a container that cannot be
/// opened.
pub fn run_analysis(input: &Path, diag: &mut dyn DiagnosticSink) -> Result<Report, AnalysisError> {
    enter(diag, Phase::ReadingArchive);
    diag.event(&format!("+- Reading config archive {}", input.display()));
    let entries = archive::read_entries(input)?;

    enter(diag, Phase::ClassifyingDocuments);
    let mut routed = Vec::new();
    for entry in &entries {
        diag.debug(&format!("+-- Reading file {}", entry.name));
        for node in classifier::classify(&entry.name, &entry.bytes, diag) {
            routed.push((entry.name.clone(), node));
        }
    }

    enter(diag, Phase::WalkingTrees);
    let mut store = EntityStore::default();
    let mut facts = Vec::new();
    {
        let mut ctx = walker::WalkContext {
            store: &mut store,
            facts: &mut facts,
            diag: &mut *diag,
        };
        for (entry, node) in &routed {
            walker::visit(&mut ctx, entry, node);
        }
    }

    enter(diag, Phase::Aggregating);
    Ok(aggregator::build_report(&store, &facts, diag))
}

fn enter(diag: &mut dyn DiagnosticSink, phase: Phase) {
    diag.event(&format!("+- phase: {phase}"));
}

#[cfg(test)]
mod tests {
    use super::run_analysis;
    use crate::services::diagnostics::RecordingSink;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use serde_json::json;
    use std::fs::File;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn fixture_archive(dir: &Path) -> PathBuf {
        let path = dir.join("backup.tar.gz");
        let gz = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        let mut builder = tar::Builder::new(gz);

        let config = json!({
            "polUni": {
                "children": [
                    {"fvTenant": {"attributes": {
                        "name": "T1", "descr": "prod", "ownerKey": "k", "ownerTag": "t"
                    }}},
                    {"physDomP": {
                        "attributes": {"name": "D1"},
                        "children": [{"infraRsVlanNs": {"attributes": {
                            "tDn": "uni/infra/vlanns-[POOL1]-static"
                        }}}]
                    }},
                    {"quotaCont": {"attributes": {}}}
                ]
            }
        });
        let topology = json!({"topRoot": {"children": []}});

        for (name, content) in [
            ("config.json", config.to_string().into_bytes()),
            ("topology.json", topology.to_string().into_bytes()),
            ("notes.txt", b"plain text".to_vec()),
        ] {
            let mut header = tar::Header::new_gnu();
            header.set_size(content.len() as u64);
            header.set_mode(0o644);
            header.set_cksum();
            builder
                .append_data(&mut header, name, content.as_slice())
                .unwrap();
        }
        builder.into_inner().unwrap().finish().unwrap();
        path
    }

    #[test]
    fn pipeline_extracts_rows_and_explains_skips() {
        let tmp = TempDir::new().unwrap();
        let archive = fixture_archive(tmp.path());

        let mut diag = RecordingSink::default();
        let report = run_analysis(&archive, &mut diag).unwrap();

        assert_eq!(report.tenants.len(), 1);
        assert_eq!(report.tenants[0].name, "T1");
        assert_eq!(report.domains.len(), 1);
        assert_eq!(report.domains[0].vlan_pool, "POOL1");

        assert!(diag.events.iter().any(|l| l.contains("topRoot")));
        assert!(diag.events.iter().any(|l| l.contains("does not contain JSON")));
        assert!(diag.debugs.iter().any(|l| l.contains("quotaCont")));
    }

    #[test]
    fn pipeline_is_deterministic_over_identical_input() {
        let tmp = TempDir::new().unwrap();
        let archive = fixture_archive(tmp.path());

        let mut first = RecordingSink::default();
        let mut second = RecordingSink::default();
        let a = run_analysis(&archive, &mut first).unwrap();
        let b = run_analysis(&archive, &mut second).unwrap();

        assert_eq!(a.tenants, b.tenants);
        assert_eq!(a.domains, b.domains);
        assert_eq!(first.events, second.events);
    }

    #[test]
    fn unopenable_archive_is_the_only_fatal_path() {
        let mut diag = RecordingSink::default();
        let err = run_analysis(Path::new("/no/such/backup.tar.gz"), &mut diag).unwrap_err();
        assert!(err.is_fatal());
    }
}
