//! Workspace creation and rollback

use crate::config::AssetLayout;
use crate::error::ScaffoldError;
use std::path::{Path, PathBuf};
use tokio::fs;

/// A validated project target: name plus its absolute location.
/// Immutable once constructed.
#[derive(Debug, Clone)]
pub struct ProjectDescriptor {
    pub name: String,
    pub path: PathBuf,
}

impl ProjectDescriptor {
    /// Validate the project name and anchor it under `parent`
    pub fn new(name: &str, parent: &Path) -> Result<Self, ScaffoldError> {
        validate_name(name)?;
        Ok(Self {
            name: name.to_string(),
            path: parent.join(name),
        })
    }
}

fn validate_name(name: &str) -> Result<(), ScaffoldError> {
    if name.is_empty() {
        return Err(ScaffoldError::Usage(
            "Project name must not be empty.".to_string(),
        ));
    }
    if name == "." || name == ".." {
        return Err(ScaffoldError::Usage(format!(
            "'{}' is not a valid project name.",
            name
        )));
    }
    if name.chars().any(|c| matches!(c, '/' | '\\' | '\0')) {
        return Err(ScaffoldError::Usage(
            "Project name must not contain path separators.".to_string(),
        ));
    }
    Ok(())
}

/// The physical directory tree owned by one scaffold run
#[derive(Debug)]
pub struct Workspace {
    root: PathBuf,
    layout: AssetLayout,
}

impl Workspace {
    /// Create the root directory and the fixed subdirectory set.
    ///
    /// The existence pre-check is authoritative for the whole run: it
    /// happens here, before any network call, and nothing re-checks
    /// later. Any entry at the target path (file, directory, symlink)
    /// is a conflict. A creation failure after the root exists removes
    /// whatever was created so nothing partial is left behind.
    pub async fn create(
        descriptor: &ProjectDescriptor,
        layout: AssetLayout,
    ) -> Result<Self, ScaffoldError> {
        match fs::try_exists(&descriptor.path).await {
            Ok(true) => {
                return Err(ScaffoldError::Conflict {
                    name: descriptor.name.clone(),
                })
            }
            Ok(false) => {}
            Err(e) => return Err(ScaffoldError::io(&descriptor.path, e)),
        }

        let workspace = Self {
            root: descriptor.path.clone(),
            layout,
        };

        fs::create_dir(&workspace.root)
            .await
            .map_err(|e| ScaffoldError::io(&workspace.root, e))?;

        for dir in workspace.subdirectories() {
            if let Err(e) = fs::create_dir(&dir).await {
                let _ = fs::remove_dir_all(&workspace.root).await;
                return Err(ScaffoldError::io(dir, e));
            }
        }

        Ok(workspace)
    }

    /// Fixed subdirectory set, parent-before-child
    fn subdirectories(&self) -> Vec<PathBuf> {
        let mut dirs = vec![self.root.join("src"), self.root.join("src/assets")];
        if self.layout.has_fonts_dir() {
            dirs.push(self.root.join("src/assets/fonts"));
        }
        dirs.push(self.root.join("src/public"));
        dirs
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn layout(&self) -> AssetLayout {
        self.layout
    }

    /// Write bytes to a path relative to the workspace root,
    /// create-or-truncate
    pub async fn write_file(&self, relative: &str, contents: &[u8]) -> Result<(), ScaffoldError> {
        let path = self.root.join(relative);
        fs::write(&path, contents)
            .await
            .map_err(|e| ScaffoldError::io(path, e))
    }

    /// Best-effort recursive removal of the whole tree. Deletion errors
    /// are reported and swallowed: the pipeline is already on its error
    /// path and the original cause must stay the reported one.
    pub async fn rollback(self) {
        if let Err(e) = fs::remove_dir_all(&self.root).await {
            let _ = cliclack::log::warning(format!(
                "Could not remove {}: {}",
                self.root.display(),
                e
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(name: &str, parent: &Path) -> ProjectDescriptor {
        ProjectDescriptor::new(name, parent).unwrap()
    }

    #[test]
    fn valid_names_are_accepted() {
        let parent = Path::new("/tmp");
        let d = descriptor("my-project", parent);
        assert_eq!(d.name, "my-project");
        assert_eq!(d.path, parent.join("my-project"));
    }

    #[test]
    fn invalid_names_are_rejected() {
        let parent = Path::new("/tmp");
        for bad in ["", ".", "..", "a/b", "a\\b", "a\0b"] {
            assert!(
                matches!(
                    ProjectDescriptor::new(bad, parent),
                    Err(ScaffoldError::Usage(_))
                ),
                "expected {:?} to be rejected",
                bad
            );
        }
    }

    #[tokio::test]
    async fn create_builds_the_flat_tree() {
        let tmp = tempfile::tempdir().unwrap();
        let d = descriptor("demo", tmp.path());
        let ws = Workspace::create(&d, AssetLayout::Flat).await.unwrap();

        assert!(ws.root().join("src").is_dir());
        assert!(ws.root().join("src/assets").is_dir());
        assert!(ws.root().join("src/public").is_dir());
        assert!(!ws.root().join("src/assets/fonts").exists());
    }

    #[tokio::test]
    async fn create_builds_the_fonts_tree() {
        let tmp = tempfile::tempdir().unwrap();
        let d = descriptor("demo", tmp.path());
        let ws = Workspace::create(&d, AssetLayout::NestedFonts)
            .await
            .unwrap();

        assert!(ws.root().join("src/assets/fonts").is_dir());
    }

    #[tokio::test]
    async fn existing_directory_is_a_conflict() {
        let tmp = tempfile::tempdir().unwrap();
        let d = descriptor("demo", tmp.path());
        std::fs::create_dir(&d.path).unwrap();
        std::fs::write(d.path.join("keep.txt"), "keep").unwrap();

        let err = Workspace::create(&d, AssetLayout::Flat).await.unwrap_err();
        assert!(matches!(err, ScaffoldError::Conflict { .. }));

        // the pre-existing tree must be left completely untouched
        assert_eq!(std::fs::read_to_string(d.path.join("keep.txt")).unwrap(), "keep");
    }

    #[tokio::test]
    async fn existing_file_is_a_conflict() {
        let tmp = tempfile::tempdir().unwrap();
        let d = descriptor("demo", tmp.path());
        std::fs::write(&d.path, "not a directory").unwrap();

        let err = Workspace::create(&d, AssetLayout::Flat).await.unwrap_err();
        assert!(matches!(err, ScaffoldError::Conflict { .. }));
        assert!(d.path.is_file());
    }

    #[tokio::test]
    async fn write_file_lands_relative_to_root() {
        let tmp = tempfile::tempdir().unwrap();
        let d = descriptor("demo", tmp.path());
        let ws = Workspace::create(&d, AssetLayout::Flat).await.unwrap();

        ws.write_file("src/main.js", b"console.log('hi');\n")
            .await
            .unwrap();
        assert_eq!(
            std::fs::read_to_string(ws.root().join("src/main.js")).unwrap(),
            "console.log('hi');\n"
        );
    }

    #[tokio::test]
    async fn rollback_removes_the_whole_tree() {
        let tmp = tempfile::tempdir().unwrap();
        let d = descriptor("demo", tmp.path());
        let ws = Workspace::create(&d, AssetLayout::Flat).await.unwrap();
        ws.write_file("src/main.js", b"x").await.unwrap();

        let root = d.path.clone();
        ws.rollback().await;
        assert!(!root.exists());
    }
}
