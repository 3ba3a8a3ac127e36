//! Scaffold pipeline orchestration
//!
//! One run moves through fixed stages: validating-name,
//! workspace-created, resolving-versions, writing-scaffold,
//! fetching-assets, complete. Any error raised once the workspace
//! exists sends the run to rolling-back: the tree is removed
//! best-effort and the original error is the one propagated. There is
//! no retry and no partial-success state.

use crate::assets::AssetFetcher;
use crate::config::{
    AssetLayout, DEFAULT_REGISTRY_URL, DEFAULT_TEMPLATE_URL, REGISTRY_URL_ENV, TEMPLATE_URL_ENV,
};
use crate::error::ScaffoldError;
use crate::manifest::build_manifest;
use crate::registry::VersionResolver;
use crate::scaffold::write_scaffold;
use crate::workspace::{ProjectDescriptor, Workspace};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// User agent for registry and template requests
const USER_AGENT: &str = concat!("mpva/", env!("CARGO_PKG_VERSION"));

/// Bound on each outbound request so a stalled endpoint cannot hang the
/// run forever. Hardening beyond the observed behavior; there is still
/// no retry.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Everything one scaffold run needs
#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
    /// Project name; becomes the workspace directory name under `parent`
    pub name: String,
    /// Directory the workspace is created in (normally the cwd)
    pub parent: PathBuf,
    /// Where the stylesheet/entry script live, and whether a fonts dir exists
    pub layout: AssetLayout,
    /// Registry endpoint override; defaults via `MPVA_REGISTRY_URL`,
    /// then the public npm registry
    pub registry_url: Option<Url>,
    /// Template base URL override; defaults via `MPVA_TEMPLATE_URL`,
    /// then the published template location
    pub template_url: Option<Url>,
}

impl ScaffoldOptions {
    pub fn new(name: impl Into<String>, parent: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            parent: parent.into(),
            layout: AssetLayout::default(),
            registry_url: None,
            template_url: None,
        }
    }

    pub fn with_layout(mut self, layout: AssetLayout) -> Self {
        self.layout = layout;
        self
    }
}

fn endpoint(explicit: &Option<Url>, env_var: &str, default: &str) -> Result<Url, ScaffoldError> {
    if let Some(url) = explicit {
        return Ok(url.clone());
    }
    let raw = std::env::var(env_var).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw)
        .map_err(|e| ScaffoldError::Usage(format!("Invalid URL in {}: {} ({})", env_var, raw, e)))
}

/// Run the whole scaffold pipeline for one project.
///
/// The conflict check runs before any network call, so a taken name
/// costs no resolver queries and leaves the existing path untouched.
pub async fn run(options: &ScaffoldOptions) -> Result<(), ScaffoldError> {
    // validating-name: no side effects yet
    let descriptor = ProjectDescriptor::new(&options.name, &options.parent)?;
    let registry_url = endpoint(&options.registry_url, REGISTRY_URL_ENV, DEFAULT_REGISTRY_URL)?;
    let template_url = endpoint(&options.template_url, TEMPLATE_URL_ENV, DEFAULT_TEMPLATE_URL)?;

    // workspace-created: from here on, any failure rolls back
    let workspace = Workspace::create(&descriptor, options.layout).await?;

    match populate(&descriptor, &workspace, registry_url, template_url).await {
        Ok(()) => Ok(()),
        Err(err) => {
            // rolling-back: best-effort delete, original error survives
            workspace.rollback().await;
            Err(err)
        }
    }
}

async fn populate(
    descriptor: &ProjectDescriptor,
    workspace: &Workspace,
    registry_url: Url,
    template_url: Url,
) -> Result<(), ScaffoldError> {
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new());

    // resolving-versions: fan out over all pins, fail the join on any error
    let resolver = VersionResolver::new(registry_url, client.clone());
    let resolved = resolver.resolve_all().await?;

    // writing-scaffold
    let manifest = build_manifest(&descriptor.name, &resolved)?;
    write_scaffold(workspace, &manifest).await?;

    // fetching-assets
    let fetcher = AssetFetcher::new(template_url, client);
    fetcher.fetch_all(workspace).await?;

    Ok(())
}
