//! Process-wide static configuration: pinned tools, remote file list, layout

/// A build-tool dependency the scaffold always includes, pinned to a
/// major version. Resolved against the registry at generation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolPin {
    /// Package name on the registry
    pub name: &'static str,
    /// Major version the resolved range must stay within
    pub major: u64,
}

/// The fixed dev-dependency set, in canonical (alphabetical) order.
/// This order is what the generated manifest emits, so it stays
/// diff-stable across runs.
pub const PINNED_TOOLS: [ToolPin; 7] = [
    ToolPin { name: "autoprefixer", major: 10 },
    ToolPin { name: "glob", major: 10 },
    ToolPin { name: "postcss", major: 8 },
    ToolPin { name: "prettier", major: 3 },
    ToolPin { name: "prettier-plugin-tailwindcss", major: 0 },
    ToolPin { name: "tailwindcss", major: 3 },
    ToolPin { name: "vite", major: 5 },
];

/// A remote template file: name at the template base URL and destination
/// path relative to the workspace root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoteFile {
    pub source: &'static str,
    pub dest: &'static str,
}

/// Every remote file the scaffold downloads. Order is fixed but no fetch
/// depends on another's output.
pub const REMOTE_FILES: [RemoteFile; 6] = [
    RemoteFile { source: "vite.config.js", dest: "vite.config.js" },
    RemoteFile { source: "tailwind.config.js", dest: "tailwind.config.js" },
    RemoteFile { source: "postcss.config.js", dest: "postcss.config.js" },
    RemoteFile { source: "index.html", dest: "src/index.html" },
    RemoteFile { source: "404.html", dest: "src/404.html" },
    RemoteFile { source: "vite.svg", dest: "src/public/vite.svg" },
];

/// Default registry endpoint for version lookups
pub const DEFAULT_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// Default base URL for the remote template files
pub const DEFAULT_TEMPLATE_URL: &str =
    "https://raw.githubusercontent.com/mochamadboval/mpva/main";

/// Environment variable overriding the registry endpoint
pub const REGISTRY_URL_ENV: &str = "MPVA_REGISTRY_URL";

/// Environment variable overriding the template base URL
pub const TEMPLATE_URL_ENV: &str = "MPVA_TEMPLATE_URL";

/// Where the stylesheet and entry script live, and whether a fonts
/// directory is created under `src/assets/`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AssetLayout {
    /// `src/style.css` and `src/main.js`; no fonts directory
    #[default]
    Flat,
    /// `src/assets/style.css` and `src/assets/main.js`, plus `src/assets/fonts/`
    NestedFonts,
}

impl AssetLayout {
    /// Workspace-relative path of the generated stylesheet
    pub fn stylesheet_path(&self) -> &'static str {
        match self {
            AssetLayout::Flat => "src/style.css",
            AssetLayout::NestedFonts => "src/assets/style.css",
        }
    }

    /// Workspace-relative path of the generated entry script
    pub fn entry_script_path(&self) -> &'static str {
        match self {
            AssetLayout::Flat => "src/main.js",
            AssetLayout::NestedFonts => "src/assets/main.js",
        }
    }

    /// Whether `src/assets/fonts/` is part of the directory tree
    pub fn has_fonts_dir(&self) -> bool {
        matches!(self, AssetLayout::NestedFonts)
    }
}
