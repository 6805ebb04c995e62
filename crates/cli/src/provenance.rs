use anyhow::{Context, Result};
use serde::Serialize;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Provenance block written next to every artifact (and printed by `report`).
#[derive(Serialize)]
pub struct Provenance<P: Serialize> {
    pub code_rev: String,
    pub version: &'static str,
    pub command: &'static str,
    pub params: P,
    pub outputs: Vec<String>,
}

impl<P: Serialize> Provenance<P> {
    pub fn new(command: &'static str, params: P) -> Self {
        Self {
            code_rev: current_git_rev(),
            version: chainhull::VERSION,
            command,
            params,
            outputs: Vec::new(),
        }
    }
}

/// Write `<artifact stem>.provenance.json` recording how `artifact` was made.
pub fn write_sidecar<P: Serialize>(artifact: &Path, mut prov: Provenance<P>) -> Result<PathBuf> {
    let sidecar = provenance_path(artifact);
    if let Some(parent) = sidecar.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }
    prov.outputs = vec![artifact.to_string_lossy().into_owned()];
    fs::write(&sidecar, serde_json::to_vec_pretty(&prov)?)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    Ok(sidecar)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let stem = artifact.file_stem().unwrap_or(OsStr::new("artifact"));
    let mut name = stem.to_os_string();
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Revision baked in at build time, overridden by `GIT_COMMIT` at run time;
/// empty values count as unset.
fn pinned_rev(built: Option<&str>, runtime: Option<String>) -> Option<String> {
    runtime
        .filter(|r| !r.is_empty())
        .or_else(|| built.filter(|r| !r.is_empty()).map(str::to_owned))
}

/// Pinned revision, else `git rev-parse HEAD`, else "unknown".
pub fn current_git_rev() -> String {
    pinned_rev(option_env!("GIT_COMMIT"), std::env::var("GIT_COMMIT").ok())
        .or_else(|| {
            let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            let rev = String::from_utf8(out.stdout).ok()?;
            out.status.success().then(|| rev.trim().to_owned())
        })
        .unwrap_or_else(|| "unknown".to_owned())
}
