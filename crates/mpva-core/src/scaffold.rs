//! Locally-generated scaffold files: manifest plus fixed-content configs

use crate::error::ScaffoldError;
use crate::manifest::ProjectManifest;
use crate::workspace::Workspace;

/// Build output and dependency directories an npm project ignores
pub const GITIGNORE: &str = "node_modules\ndist\n";

/// Netlify-style redirect rule routing unknown paths to the 404 page
pub const REDIRECTS: &str = "/* /404.html 200";

/// The three Tailwind framework-import directives
pub const STYLESHEET: &str = "@tailwind base;\n@tailwind components;\n@tailwind utilities;\n";

/// The generated entry script
pub const ENTRY_SCRIPT: &str = "console.log('Multi Page Vite App');\n";

fn prettier_config() -> String {
    let config = serde_json::json!({
        "plugins": ["prettier-plugin-tailwindcss"],
    });
    serde_json::to_string_pretty(&config).expect("prettier config serialization is infallible")
}

/// Write the manifest and every locally-generated file into the workspace.
/// Each write is an independent create-or-truncate; order is not
/// significant. The stylesheet and entry script land wherever the
/// workspace's layout puts them.
pub async fn write_scaffold(
    workspace: &Workspace,
    manifest: &ProjectManifest,
) -> Result<(), ScaffoldError> {
    workspace
        .write_file("package.json", manifest.to_json().as_bytes())
        .await?;
    workspace
        .write_file(".gitignore", GITIGNORE.as_bytes())
        .await?;
    workspace
        .write_file(".prettierrc", prettier_config().as_bytes())
        .await?;
    workspace
        .write_file("src/public/_redirects", REDIRECTS.as_bytes())
        .await?;

    let layout = workspace.layout();
    workspace
        .write_file(layout.stylesheet_path(), STYLESHEET.as_bytes())
        .await?;
    workspace
        .write_file(layout.entry_script_path(), ENTRY_SCRIPT.as_bytes())
        .await?;

    Ok(())
}
