//! mpva-core - Scaffold pipeline for Multi Page Vite App projects
//!
//! This library generates a ready-to-install Vite + Tailwind multi-page
//! project: it creates the directory tree, resolves the latest compatible
//! versions of a fixed set of build tools against the npm registry, writes
//! the generated `package.json` and local config files, and downloads the
//! remaining template files from a remote base URL.
//!
//! The pipeline runs in fixed stages (see [`pipeline::run`]):
//!
//! 1. Validate the project name and check the target path is free
//! 2. Create the workspace directory tree
//! 3. Resolve all pinned tool versions concurrently
//! 4. Write the manifest and locally-generated files
//! 5. Fetch the remote template files
//!
//! Any failure after the workspace is created rolls the whole directory
//! back, so a run either produces the complete file set or nothing.

pub mod assets;
pub mod config;
pub mod error;
pub mod manifest;
pub mod pipeline;
pub mod registry;
pub mod scaffold;
pub mod workspace;

// Re-export main types for convenience
pub use config::{AssetLayout, ToolPin, PINNED_TOOLS, REMOTE_FILES};
pub use error::ScaffoldError;
pub use manifest::ProjectManifest;
pub use pipeline::{run, ScaffoldOptions};
pub use registry::{ResolvedVersion, VersionResolver};
pub use workspace::{ProjectDescriptor, Workspace};
