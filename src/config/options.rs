// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RosterSource {
    Bundled,
    File(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteOptions {
    /// Site root; everything else defaults relative to it.
    pub root: PathBuf,
    pub roster: RosterSource,
    out_dir: Option<PathBuf>,
    images_dir: Option<PathBuf>,
    banners_dir: Option<PathBuf>,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            roster: RosterSource::Bundled,
            out_dir: None,
            images_dir: None,
            banners_dir: None,
        }
    }
}

impl SiteOptions {
    pub fn with_root<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf(), ..Self::default() }
    }

    /// Where fighter pages land: `<root>/fighters` unless overridden.
    pub fn out_dir(&self) -> PathBuf {
        self.out_dir
            .clone()
            .unwrap_or_else(|| self.root.join(FIGHTERS_SUBDIR))
    }

    /// Fighter portraits + gallery images.
    pub fn images_dir(&self) -> PathBuf {
        self.images_dir
            .clone()
            .unwrap_or_else(|| self.root.join(FIGHTER_IMG_SUBDIR))
    }

    /// Division banner artwork.
    pub fn banners_dir(&self) -> PathBuf {
        self.banners_dir
            .clone()
            .unwrap_or_else(|| self.root.join(DIVISION_IMG_SUBDIR))
    }

    pub fn set_out_dir<P: Into<PathBuf>>(&mut self, dir: P) {
        self.out_dir = Some(dir.into());
    }

    pub fn set_images_dir<P: Into<PathBuf>>(&mut self, dir: P) {
        self.images_dir = Some(dir.into());
    }

    pub fn set_banners_dir<P: Into<PathBuf>>(&mut self, dir: P) {
        self.banners_dir = Some(dir.into());
    }

    /// True when no directory was overridden.
    pub fn is_fully_default(&self) -> bool {
        self.out_dir.is_none() && self.images_dir.is_none() && self.banners_dir.is_none()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtOptions {
    pub site: SiteOptions,
    /// Leave already-present images alone.
    pub keep_existing: bool,
}

impl Default for ArtOptions {
    fn default() -> Self {
        Self { site: SiteOptions::default(), keep_existing: false }
    }
}
