//! JSON output for the machine-readable listing

use std::io;

use serde::Serialize;

/// What a scan found, in serializable form. Produced for `--list --json`.
#[derive(Debug, Serialize)]
pub struct ScanReport<'a> {
    pub root: String,
    pub files: &'a [String],
    pub directories: &'a [String],
}

/// Print a scan report as pretty-printed JSON to stdout.
pub fn print_report_json(report: &ScanReport) -> io::Result<()> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    println!("{}", json);
    Ok(())
}
