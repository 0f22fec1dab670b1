use flate2::write::GzEncoder;
use flate2::Compression;
use serde_json::Value;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Builds a gzip tar archive named `backup.tar.gz` under `dir` from
/// (entry-name, content) pairs.
pub fn write_archive(dir: &Path, files: &[(&str, Vec<u8>)]) -> PathBuf {
    let path = dir.join("backup.tar.gz");
    let gz = GzEncoder::new(
        File::create(&path).expect("create archive"),
        Compression::default(),
    );
    let mut builder = tar::Builder::new(gz);
    for (name, content) in files {
        let mut header = tar::Header::new_gnu();
        header.set_size(content.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder
            .append_data(&mut header, name, content.as_slice())
            .expect("append entry");
    }
    builder
        .into_inner()
        .expect("finish tar")
        .finish()
        .expect("finish gzip");
    path
}

pub fn doc(v: &Value) -> Vec<u8> {
    v.to_string().into_bytes()
}
