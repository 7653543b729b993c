// file: src/assets/icons.rs
// description: solid colour placeholder icons for packaging metadata
// reference: https://docs.rs/image

use crate::config::IconConfig;
use crate::error::{ConvertError, Result};
use image::{ImageFormat, Rgba, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct IconGenerator {
    config: IconConfig,
}

impl IconGenerator {
    pub fn new(config: IconConfig) -> Self {
        Self { config }
    }

    pub fn with_assets_dir(mut self, assets_dir: impl Into<PathBuf>) -> Self {
        self.config.assets_dir = assets_dir.into();
        self
    }

    pub fn assets_dir(&self) -> &Path {
        &self.config.assets_dir
    }

    pub fn icon_name(size: u32) -> String {
        format!("icon-{}.png", size)
    }

    /// Writes `icon-<size>.png` for every configured size and returns the
    /// paths in the configured order. Existing files are overwritten.
    pub fn generate(&self) -> Result<Vec<PathBuf>> {
        let dir = &self.config.assets_dir;
        fs::create_dir_all(dir).map_err(|source| ConvertError::file_operation(dir, source))?;

        self.config
            .sizes
            .iter()
            .map(|&size| self.write_icon(size))
            .collect()
    }

    fn write_icon(&self, size: u32) -> Result<PathBuf> {
        if size == 0 {
            return Err(ConvertError::Validation(
                "icon size must be greater than 0".to_string(),
            ));
        }

        let path = self.config.assets_dir.join(Self::icon_name(size));
        let icon = RgbaImage::from_pixel(size, size, Rgba(self.config.color));
        icon.save_with_format(&path, ImageFormat::Png)?;

        debug!("Wrote {}x{} icon to {}", size, size, path.display());
        Ok(path)
    }
}
