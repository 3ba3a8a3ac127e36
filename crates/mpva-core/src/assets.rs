//! Remote template file retrieval

use crate::config::REMOTE_FILES;
use crate::error::ScaffoldError;
use crate::registry::build_url;
use crate::workspace::Workspace;
use url::Url;

/// Downloads the fixed remote template files into a workspace
pub struct AssetFetcher {
    base: Url,
    client: reqwest::Client,
}

impl AssetFetcher {
    pub fn new(base: Url, client: reqwest::Client) -> Self {
        Self { base, client }
    }

    /// Fetch every remote file and write it to its workspace-relative
    /// destination. No retries: a transport failure or non-success
    /// status on any file fails the whole pipeline. The workspace
    /// directories must already exist.
    pub async fn fetch_all(&self, workspace: &Workspace) -> Result<(), ScaffoldError> {
        for file in &REMOTE_FILES {
            let bytes = self.fetch(file.source).await?;
            workspace.write_file(file.dest, &bytes).await?;
        }
        Ok(())
    }

    async fn fetch(&self, source: &str) -> Result<Vec<u8>, ScaffoldError> {
        let url =
            build_url(&self.base, source).map_err(|reason| ScaffoldError::fetch(source, reason))?;

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| ScaffoldError::fetch(source, e.to_string()))?;

        if !response.status().is_success() {
            return Err(ScaffoldError::fetch(
                source,
                format!("HTTP {} from {}", response.status(), url),
            ));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ScaffoldError::fetch(source, e.to_string()))?;

        Ok(bytes.to_vec())
    }
}
