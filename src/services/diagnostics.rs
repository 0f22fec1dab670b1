use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Append-only sink for the human-readable analysis trail.
///
/// Two severities only: `event` lines are always recorded, `debug` lines
/// carry verbose per-node detail. Nothing in the pipeline reads the trail
/// back; it exists purely to explain omissions.
pub trait DiagnosticSink {
    fn event(&mut self, line: &str);
    fn debug(&mut self, line: &str);
}

/// Production sink: a timestamped log file in the output directory,
/// mirrored through `tracing` for terminal visibility.
pub struct LogFile {
    out: BufWriter<File>,
    path: PathBuf,
    verbose: bool,
}

impl LogFile {
    pub fn create(dir: &Path, verbose: bool) -> anyhow::Result<Self> {
        let stamp = chrono::Local::now().format("%Y-%m-%d-%H%M");
        let path = dir.join(format!("{stamp}-config_analysis_log.log"));
        let file = File::options().create(true).append(true).open(&path)?;
        Ok(Self {
            out: BufWriter::new(file),
            path,
            verbose,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DiagnosticSink for LogFile {
    fn event(&mut self, line: &str) {
        tracing::info!("{line}");
        let _ = writeln!(self.out, "{line}");
    }

    fn debug(&mut self, line: &str) {
        tracing::debug!("{line}");
        if self.verbose {
            let _ = writeln!(self.out, "{line}");
        }
    }
}

impl Drop for LogFile {
    fn drop(&mut self) {
        let _ = self.out.flush();
    }
}

/// In-memory sink for unit tests.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<String>,
    pub debugs: Vec<String>,
}

#[cfg(test)]
impl DiagnosticSink for RecordingSink {
    fn event(&mut self, line: &str) {
        self.events.push(line.to_string());
    }

    fn debug(&mut self, line: &str) {
        self.debugs.push(line.to_string());
    }
}
