// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use image::{ImageFormat, ImageReader};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::model::PhotoRef;

#[derive(Debug)]
pub enum PhotoError {
    Missing(PathBuf),
    Unreadable { path: PathBuf, message: String },
    UnsupportedFormat(PathBuf),
}

impl fmt::Display for PhotoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(path) => write!(f, "photo {} does not exist", path.display()),
            Self::Unreadable { path, message } => {
                write!(f, "cannot read photo {}: {message}", path.display())
            }
            Self::UnsupportedFormat(path) => write!(
                f,
                "photo {} is not a PNG, JPEG, GIF, or WebP image",
                path.display()
            ),
        }
    }
}

impl std::error::Error for PhotoError {}

/// A locally chosen image held by a draft until it is committed or dropped.
///
/// Dropping the preview releases it. A saved profile keeps only the
/// [`PhotoRef::File`] returned by [`PhotoPreview::photo_ref`].
#[derive(Debug, PartialEq, Eq)]
pub struct PhotoPreview {
    path: PathBuf,
    format: ImageFormat,
    width: u32,
    height: u32,
}

impl PhotoPreview {
    pub fn acquire(path: &Path) -> Result<Self, PhotoError> {
        if !path.is_file() {
            return Err(PhotoError::Missing(path.to_owned()));
        }

        let unreadable = |message: String| PhotoError::Unreadable {
            path: path.to_owned(),
            message,
        };
        let reader = ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|error| unreadable(error.to_string()))?;
        let format = match reader.format() {
            Some(
                format @ (ImageFormat::Png | ImageFormat::Jpeg | ImageFormat::Gif | ImageFormat::WebP),
            ) => format,
            _ => return Err(PhotoError::UnsupportedFormat(path.to_owned())),
        };
        let (width, height) = reader
            .into_dimensions()
            .map_err(|error| unreadable(error.to_string()))?;

        log::debug!("acquired photo preview {} ({width}x{height})", path.display());
        Ok(Self {
            path: path.to_owned(),
            format,
            width,
            height,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn format_name(&self) -> &'static str {
        match self.format {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Gif => "gif",
            ImageFormat::WebP => "webp",
            _ => "image",
        }
    }

    pub fn label(&self) -> String {
        let name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string());
        format!(
            "{name} ({} {}x{})",
            self.format_name(),
            self.width,
            self.height
        )
    }

    pub fn photo_ref(&self) -> PhotoRef {
        PhotoRef::File(self.path.clone())
    }
}

impl Drop for PhotoPreview {
    fn drop(&mut self) {
        log::debug!("released photo preview {}", self.path.display());
    }
}

