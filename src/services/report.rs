use crate::domain::models::Report;
use std::path::{Path, PathBuf};

/// Paths of the files a report run produced.
pub struct ReportFiles {
    pub tenants: PathBuf,
    pub domains: PathBuf,
}

/// Writes the report as `tenant.csv` and `phys_domain.csv` in `dir`.
///
/// Column order is part of the output contract: tenants carry
/// `name,description,ownerKey,ownerTag`, domains carry `name,type,vlan_pool`.
pub fn write_csv(report: &Report, dir: &Path) -> anyhow::Result<ReportFiles> {
    let files = ReportFiles {
        tenants: dir.join("tenant.csv"),
        domains: dir.join("phys_domain.csv"),
    };

    let mut wtr = csv::Writer::from_path(&files.tenants)?;
    wtr.write_record(["name", "description", "ownerKey", "ownerTag"])?;
    for t in &report.tenants {
        wtr.write_record([&t.name, &t.description, &t.owner_key, &t.owner_tag])?;
    }
    wtr.flush()?;

    let mut wtr = csv::Writer::from_path(&files.domains)?;
    wtr.write_record(["name", "type", "vlan_pool"])?;
    for d in &report.domains {
        wtr.write_record([&d.domain_name, &d.domain_type, &d.vlan_pool])?;
    }
    wtr.flush()?;

    Ok(files)
}
