use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Code identity stamped on reports and sidecars.
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub code_rev: String,
    pub lib_version: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            code_rev: current_git_rev(),
            lib_version: hull2d::VERSION,
        }
    }
}

/// How a hull or thickness report was produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunParams {
    pub action: &'static str,
    pub input: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric: Option<&'static str>,
    pub unordered: bool,
    pub integer: bool,
    pub tags: Vec<String>,
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

#[derive(Serialize)]
struct Sidecar<'a> {
    #[serde(flatten)]
    build: BuildInfo,
    callsite: Callsite,
    #[serde(flatten)]
    run: &'a RunParams,
    output: String,
}

/// Write `<stem>.provenance.json` next to `artifact` and return its path.
#[track_caller]
pub fn write_sidecar(artifact: &Path, run: &RunParams) -> Result<PathBuf> {
    let caller = Location::caller();
    let path = provenance_path(artifact);
    let sidecar = Sidecar {
        build: BuildInfo::current(),
        callsite: Callsite {
            file: caller.file(),
            line: caller.line(),
        },
        run,
        output: artifact.to_string_lossy().into_owned(),
    };
    fs::write(&path, serde_json::to_vec_pretty(&sidecar)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`, else "unknown".
pub fn current_git_rev() -> String {
    option_env!("GIT_COMMIT")
        .filter(|rev| !rev.is_empty())
        .map(str::to_owned)
        .or_else(|| std::env::var("GIT_COMMIT").ok().filter(|rev| !rev.is_empty()))
        .or_else(|| {
            let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            out.status
                .success()
                .then(|| String::from_utf8_lossy(&out.stdout).trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}
