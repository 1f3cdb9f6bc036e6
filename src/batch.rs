//! Batch generation of the full icon set.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::ImageFormat;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::icon::{IconImage, IconKind, RenderState};
use crate::manifest::{MANIFEST_FILE, TabBarManifest};
use crate::profile::RenderProfile;
use crate::render::IconRenderer;

/// A file written by the [`BatchDriver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenIcon {
    pub kind: IconKind,
    pub state: RenderState,
    pub path: PathBuf,
}

/// Summary of a completed batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Icons in the order they were written.
    pub icons: Vec<WrittenIcon>,
    /// Path of the tab bar manifest, if one was requested.
    pub manifest: Option<PathBuf>,
}

// ============================================================================
// BatchDriver
// ============================================================================

/// Renders every kind in both states and writes them as PNG files.
///
/// Files are named `<kind>.png` and `<kind>-active.png`. Existing files are
/// overwritten, so repeated runs leave the same set behind.
///
/// # Example
///
/// ```no_run
/// use tabbar_icons::BatchDriver;
///
/// let report = BatchDriver::new("images/tabbar").run().unwrap();
/// assert_eq!(report.icons.len(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct BatchDriver {
    out_dir: PathBuf,
    renderer: IconRenderer,
    write_manifest: bool,
}

impl BatchDriver {
    /// Creates a driver with the default renderer.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            renderer: IconRenderer::default(),
            write_manifest: false,
        }
    }

    /// Creates a driver from a render profile.
    pub fn from_profile(profile: &RenderProfile) -> Result<Self> {
        Ok(Self::new(&profile.output_dir).with_renderer(profile.renderer()?))
    }

    pub fn with_renderer(mut self, renderer: IconRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Also write a `tabbar.json` manifest next to the icons.
    pub fn with_manifest(mut self, enabled: bool) -> Self {
        self.write_manifest = enabled;
        self
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Runs the batch without progress callbacks.
    pub fn run(&self) -> Result<BatchReport> {
        self.run_with(|_| {})
    }

    /// Runs the batch, calling `on_written` after each icon is saved.
    ///
    /// Stops at the first failure; icons written before it stay on disk.
    pub fn run_with(&self, mut on_written: impl FnMut(&WrittenIcon)) -> Result<BatchReport> {
        fs::create_dir_all(&self.out_dir).map_err(|e| Error::io(&self.out_dir, e))?;

        let mut report = BatchReport::default();
        for kind in IconKind::ALL {
            for state in RenderState::ALL {
                let icon = self.renderer.render(kind, state)?;
                let path = self.out_dir.join(icon.file_name());
                save_png(&icon, &path)?;

                info!(%kind, %state, path = %path.display(), "wrote icon");
                let written = WrittenIcon { kind, state, path };
                on_written(&written);
                report.icons.push(written);
            }
        }

        if self.write_manifest {
            let manifest = TabBarManifest::new(&self.out_dir, self.renderer.theme());
            let path = self.out_dir.join(MANIFEST_FILE);
            let json = manifest.to_json_pretty()?;
            fs::write(&path, json).map_err(|e| Error::io(&path, e))?;
            info!(path = %path.display(), "wrote tab bar manifest");
            report.manifest = Some(path);
        }

        Ok(report)
    }
}

/// Encodes `icon` as PNG and writes it to `path`, replacing any existing file.
pub fn save_png(icon: &IconImage, path: &Path) -> Result<()> {
    let mut bytes = Cursor::new(Vec::new());
    icon.data.write_to(&mut bytes, ImageFormat::Png)?;
    let bytes = bytes.into_inner();

    debug!(path = %path.display(), len = bytes.len(), "encoded png");
    fs::write(path, bytes).map_err(|e| Error::io(path, e))
}
