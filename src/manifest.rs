//! Mini-program `tabBar` configuration pointing at the generated icons.
//!
//! The written `tabbar.json` can be pasted into the `tabBar` section of
//! `app.json` as-is.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::icon::{IconKind, RenderState};
use crate::theme::{Theme, to_hex};

/// File name of the manifest inside the output directory.
pub const MANIFEST_FILE: &str = "tabbar.json";

/// One tab entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabBarItem {
    pub page_path: String,
    pub text: String,
    pub icon_path: String,
    pub selected_icon_path: String,
}

/// The `tabBar` object of a mini-program `app.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabBarManifest {
    /// Text color of unselected tabs.
    pub color: String,
    /// Text color of the selected tab.
    pub selected_color: String,
    pub list: Vec<TabBarItem>,
}

impl TabBarManifest {
    /// Builds the manifest for icons stored under `icon_dir`.
    ///
    /// Icon paths are written with forward slashes regardless of platform.
    pub fn new(icon_dir: &Path, theme: &Theme) -> Self {
        let dir = icon_dir.to_string_lossy().replace('\\', "/");
        let dir = dir.trim_end_matches('/');
        let icon_path = |kind: IconKind, state: RenderState| {
            if dir.is_empty() {
                state.file_name(kind)
            } else {
                format!("{dir}/{}", state.file_name(kind))
            }
        };

        let list = IconKind::ALL
            .iter()
            .map(|&kind| TabBarItem {
                page_path: kind.page_path().to_string(),
                text: kind.label().to_string(),
                icon_path: icon_path(kind, RenderState::Normal),
                selected_icon_path: icon_path(kind, RenderState::Active),
            })
            .collect();

        Self {
            color: to_hex(theme.normal.primary),
            selected_color: to_hex(theme.active.primary),
            list,
        }
    }

    /// Serializes the manifest to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_lists_every_kind() {
        let manifest = TabBarManifest::new(Path::new("images/tabbar/"), &Theme::default());

        assert_eq!(manifest.color, "#7a7e83");
        assert_eq!(manifest.selected_color, "#9b59b6");
        assert_eq!(manifest.list.len(), 3);

        let kitchen = &manifest.list[0];
        assert_eq!(kitchen.page_path, "pages/kitchen/kitchen");
        assert_eq!(kitchen.text, "厨房");
        assert_eq!(kitchen.icon_path, "images/tabbar/kitchen.png");
        assert_eq!(kitchen.selected_icon_path, "images/tabbar/kitchen-active.png");

        let pages: Vec<_> = manifest.list.iter().map(|item| item.page_path.as_str()).collect();
        assert_eq!(
            pages,
            ["pages/kitchen/kitchen", "pages/order/list/list", "pages/profile/profile"]
        );
    }

    #[test]
    fn manifest_json_shape() {
        let manifest = TabBarManifest::new(Path::new("icons"), &Theme::default());
        let json = manifest.to_json_pretty().unwrap();

        assert!(json.contains("\"selectedColor\""));
        assert!(json.contains("\"selectedIconPath\": \"icons/profile-active.png\""));

        let restored: TabBarManifest = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, manifest);
    }

    #[test]
    fn bare_file_names_without_dir() {
        let manifest = TabBarManifest::new(Path::new(""), &Theme::default());
        assert_eq!(manifest.list[1].icon_path, "order.png");
    }
}
