//! Latest-version resolution against the npm registry

use crate::config::{ToolPin, PINNED_TOOLS};
use crate::error::ScaffoldError;
use semver::{Version, VersionReq};
use serde_json::Value;
use url::Url;

/// The resolved caret range for one pinned tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVersion {
    pub tool: &'static str,
    pub range: String,
}

/// Resolves pinned tools to their latest published version on the registry
pub struct VersionResolver {
    base: Url,
    client: reqwest::Client,
}

impl VersionResolver {
    pub fn new(base: Url, client: reqwest::Client) -> Self {
        Self { base, client }
    }

    /// Resolve every pinned tool concurrently. Returns the resolved set in
    /// canonical pin order; the first failure aborts the whole join.
    pub async fn resolve_all(&self) -> Result<Vec<ResolvedVersion>, ScaffoldError> {
        let [autoprefixer, glob, postcss, prettier, prettier_tw, tailwindcss, vite] = PINNED_TOOLS;

        let resolved = tokio::try_join!(
            self.resolve(autoprefixer),
            self.resolve(glob),
            self.resolve(postcss),
            self.resolve(prettier),
            self.resolve(prettier_tw),
            self.resolve(tailwindcss),
            self.resolve(vite),
        )?;

        let (autoprefixer, glob, postcss, prettier, prettier_tw, tailwindcss, vite) = resolved;
        Ok(vec![
            autoprefixer,
            glob,
            postcss,
            prettier,
            prettier_tw,
            tailwindcss,
            vite,
        ])
    }

    /// Query the registry for one pin and extract the newest published
    /// version within the pinned major, as a caret range.
    pub async fn resolve(&self, pin: ToolPin) -> Result<ResolvedVersion, ScaffoldError> {
        let url = build_url(&self.base, pin.name)
            .map_err(|reason| ScaffoldError::resolution(pin.name, reason))?;

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| ScaffoldError::resolution(pin.name, e.to_string()))?;

        if !response.status().is_success() {
            return Err(ScaffoldError::resolution(
                pin.name,
                format!("HTTP {} from {}", response.status(), url),
            ));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| ScaffoldError::resolution(pin.name, format!("invalid JSON: {}", e)))?;

        let versions = published_versions(&body)
            .ok_or_else(|| ScaffoldError::resolution(pin.name, "unrecognized response shape"))?;

        let range = latest_matching_range(&versions, pin.major).ok_or_else(|| {
            ScaffoldError::resolution(
                pin.name,
                format!("no published version matches major {}", pin.major),
            )
        })?;

        Ok(ResolvedVersion {
            tool: pin.name,
            range,
        })
    }
}

/// Append a path segment to a base URL, preserving query parameters
pub(crate) fn build_url(base: &Url, segment: &str) -> Result<Url, String> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| format!("URL cannot have path segments: {}", base))?
        .pop_if_empty()
        .push(segment);
    Ok(url)
}

/// Extract the published version list from a registry response.
///
/// Three shapes are accepted: a JSON array of version strings (what
/// `npm view <pkg> versions --json` emits), a single string (packages
/// with one published version), and a packument object with a
/// `versions` map (the registry's package endpoint). Unparsable
/// entries are skipped rather than failing the lookup.
fn published_versions(body: &Value) -> Option<Vec<Version>> {
    let strings: Vec<&str> = match body {
        Value::Array(items) => items.iter().filter_map(Value::as_str).collect(),
        Value::String(single) => vec![single.as_str()],
        Value::Object(fields) => fields
            .get("versions")?
            .as_object()?
            .keys()
            .map(String::as_str)
            .collect(),
        _ => return None,
    };

    Some(
        strings
            .into_iter()
            .filter_map(|s| Version::parse(s).ok())
            .collect(),
    )
}

/// Pick the newest version within `major` and anchor a caret range at it.
/// Prereleases never match, same as the registry's own range semantics.
fn latest_matching_range(versions: &[Version], major: u64) -> Option<String> {
    let req = VersionReq::parse(&format!("^{}", major)).ok()?;
    let latest = versions.iter().filter(|v| req.matches(v)).max()?;
    Some(format!("^{}", latest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn versions(raw: &[&str]) -> Vec<Version> {
        raw.iter().map(|s| Version::parse(s).unwrap()).collect()
    }

    #[test]
    fn picks_the_newest_version_within_the_major() {
        let vs = versions(&["5.0.0", "5.0.1", "5.1.0"]);
        assert_eq!(latest_matching_range(&vs, 5).as_deref(), Some("^5.1.0"));
    }

    #[test]
    fn ignores_versions_outside_the_major() {
        let vs = versions(&["4.9.9", "5.2.0", "6.0.0"]);
        assert_eq!(latest_matching_range(&vs, 5).as_deref(), Some("^5.2.0"));
    }

    #[test]
    fn excludes_prereleases() {
        let vs = versions(&["5.1.0", "5.2.0-beta.1"]);
        assert_eq!(latest_matching_range(&vs, 5).as_deref(), Some("^5.1.0"));
    }

    #[test]
    fn zero_major_stays_below_one() {
        let vs = versions(&["0.5.11", "0.6.2", "1.0.0"]);
        assert_eq!(latest_matching_range(&vs, 0).as_deref(), Some("^0.6.2"));
    }

    #[test]
    fn no_match_yields_none() {
        let vs = versions(&["4.0.0", "6.0.0"]);
        assert_eq!(latest_matching_range(&vs, 5), None);
        assert_eq!(latest_matching_range(&[], 5), None);
    }

    #[test]
    fn parses_array_responses() {
        let body = json!(["5.0.0", "5.1.0", "not-a-version"]);
        let vs = published_versions(&body).unwrap();
        assert_eq!(vs, versions(&["5.0.0", "5.1.0"]));
    }

    #[test]
    fn parses_single_string_responses() {
        let body = json!("0.6.11");
        let vs = published_versions(&body).unwrap();
        assert_eq!(vs, versions(&["0.6.11"]));
    }

    #[test]
    fn parses_packument_responses() {
        let body = json!({
            "name": "vite",
            "versions": { "5.0.0": {}, "5.2.0": {} }
        });
        let mut vs = published_versions(&body).unwrap();
        vs.sort();
        assert_eq!(vs, versions(&["5.0.0", "5.2.0"]));
    }

    #[test]
    fn rejects_unrecognized_shapes() {
        assert!(published_versions(&json!(42)).is_none());
        assert!(published_versions(&json!({ "name": "vite" })).is_none());
    }

    #[test]
    fn build_url_appends_a_segment() {
        let base = Url::parse("https://registry.npmjs.org").unwrap();
        let url = build_url(&base, "vite").unwrap();
        assert_eq!(url.as_str(), "https://registry.npmjs.org/vite");
    }

    #[test]
    fn build_url_keeps_existing_path() {
        let base = Url::parse("http://127.0.0.1:8080/registry/").unwrap();
        let url = build_url(&base, "postcss").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/registry/postcss");
    }
}
