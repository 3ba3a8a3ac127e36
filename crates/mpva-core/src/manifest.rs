//! Generated package manifest: in-memory form and construction

use crate::config::PINNED_TOOLS;
use crate::error::ScaffoldError;
use crate::registry::ResolvedVersion;
use serde::Serialize;
use std::collections::BTreeMap;

/// The fixed npm script table every generated project gets
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Scripts {
    pub dev: String,
    pub build: String,
    pub preview: String,
}

impl Default for Scripts {
    fn default() -> Self {
        Self {
            dev: "vite".to_string(),
            build: "vite build".to_string(),
            preview: "vite preview".to_string(),
        }
    }
}

/// In-memory form of the generated `package.json`.
///
/// Field order here is the serialization order. `devDependencies` is a
/// `BTreeMap` so the emitted mapping is always alphabetical, keeping
/// generated manifests diff-stable.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProjectManifest {
    pub name: String,
    pub private: bool,
    pub version: String,
    #[serde(rename = "type")]
    pub module_type: String,
    pub scripts: Scripts,
    #[serde(rename = "devDependencies")]
    pub dev_dependencies: BTreeMap<String, String>,
}

impl ProjectManifest {
    /// Canonical two-space-indented serialized form
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).expect("manifest serialization is infallible")
    }
}

/// Build the manifest from the full resolved set. Pure; no I/O.
/// Fails if any pinned tool is missing from `resolved` — a partial
/// dependency set must never reach disk.
pub fn build_manifest(
    name: &str,
    resolved: &[ResolvedVersion],
) -> Result<ProjectManifest, ScaffoldError> {
    for pin in &PINNED_TOOLS {
        if !resolved.iter().any(|r| r.tool == pin.name) {
            return Err(ScaffoldError::resolution(pin.name, "no resolved version"));
        }
    }

    let dev_dependencies = resolved
        .iter()
        .map(|r| (r.tool.to_string(), r.range.clone()))
        .collect();

    Ok(ProjectManifest {
        name: name.to_string(),
        private: true,
        version: "1.0.0".to_string(),
        module_type: "module".to_string(),
        scripts: Scripts::default(),
        dev_dependencies,
    })
}
