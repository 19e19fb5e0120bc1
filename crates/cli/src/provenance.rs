//! Provenance sidecars for JSON artifacts.
//!
//! An artifact `out/foo.json` gets `out/foo.provenance.json` next to it with the
//! git revision, the library version, the call site that wrote it, the command
//! parameters and the artifact path.

use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What produced an artifact.
pub struct Payload {
    pub params: Value,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self { params }
    }
}

/// Write the sidecar of `artifact` and return its path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let path = sidecar_path(artifact);
    let callsite = Location::caller();
    let doc = json!({
        "code_rev": current_git_rev(),
        "dsymbol_version": dsymbol::VERSION,
        "callsite": format!("{}:{}", callsite.file(), callsite.line()),
        "params": payload.params,
        "outputs": [artifact.to_string_lossy()]
    });
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// `GIT_COMMIT` at build time, then at run time, then `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    let build = option_env!("GIT_COMMIT").map(str::to_string);
    let runtime = std::env::var("GIT_COMMIT").ok();
    build
        .into_iter()
        .chain(runtime)
        .find(|rev| !rev.is_empty())
        .or_else(|| {
            let output = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            if !output.status.success() {
                return None;
            }
            String::from_utf8(output.stdout).ok().map(|s| s.trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}
