//! Product icon lookup.

use std::path::{Path, PathBuf};

use vending_core::VendingSelection;

/// Asset name shown for selections that ship without their own icon.
pub const DEFAULT_ICON: &str = "default";

/// Resolved icon asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    pub name: String,
    pub path: PathBuf,
}

impl Icon {
    pub fn is_default(&self) -> bool {
        self.name == DEFAULT_ICON
    }
}

/// Icon lookup never fails: a missing asset resolves to the default icon.
pub trait IconLookup {
    fn icon(&self, selection: VendingSelection) -> Icon;
}

/// Icons stored as `<root>/<selection key>.<extension>`.
#[derive(Debug, Clone)]
pub struct AssetDirectory {
    root: PathBuf,
    extension: String,
}

impl AssetDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_extension(root, "png")
    }

    pub fn with_extension(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            extension: extension.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn asset(&self, name: &str) -> Icon {
        Icon {
            name: name.to_string(),
            path: self.root.join(format!("{name}.{}", self.extension)),
        }
    }
}

impl IconLookup for AssetDirectory {
    fn icon(&self, selection: VendingSelection) -> Icon {
        let icon = self.asset(selection.as_key());
        if icon.path.is_file() {
            icon
        } else {
            self.asset(DEFAULT_ICON)
        }
    }
}
