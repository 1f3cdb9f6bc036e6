//! Error type shared by rendering, persistence and profile loading.

use std::path::PathBuf;

use image::error::{ImageError, UnsupportedErrorKind};

/// Errors produced while rendering or writing tab bar icons.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A canvas cannot be allocated with a zero side length.
    #[error("icon size must be at least 1 pixel, got {0}")]
    InvalidSize(u32),

    /// A shape's geometry collapsed (e.g. a zero-area rectangle).
    #[error("cannot build {0} geometry at this size")]
    InvalidShape(&'static str),

    /// The PNG encoder was not compiled into the imaging backend.
    #[error("PNG encoding is unavailable ({0}); rebuild with the `png` feature of the `image` crate enabled")]
    EncoderUnavailable(String),

    /// Encoding or saving an image failed.
    #[error("failed to encode image: {0}")]
    Image(#[source] ImageError),

    /// A filesystem operation failed.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A render profile or manifest could not be parsed or serialized.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A profile color was not a `#RRGGBB` or `#RRGGBBAA` hex code.
    #[error("invalid color {0:?}, expected #RRGGBB or #RRGGBBAA")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<ImageError> for Error {
    /// Separates a missing encoder from ordinary encode/write failures so the
    /// caller can print a remediation hint.
    fn from(err: ImageError) -> Self {
        if let ImageError::Unsupported(unsupported) = &err {
            if let UnsupportedErrorKind::Format(hint) = unsupported.kind() {
                return Self::EncoderUnavailable(hint.to_string());
            }
        }
        Self::Image(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::ImageFormat;
    use image::error::{ImageFormatHint, UnsupportedError};

    #[test]
    fn unsupported_format_maps_to_encoder_unavailable() {
        let err = ImageError::Unsupported(UnsupportedError::from_format_and_kind(
            ImageFormatHint::Exact(ImageFormat::Png),
            UnsupportedErrorKind::Format(ImageFormatHint::Exact(ImageFormat::Png)),
        ));
        let mapped = Error::from(err);
        assert!(matches!(mapped, Error::EncoderUnavailable(_)));
        assert!(mapped.to_string().contains("`png` feature"));
    }

    #[test]
    fn io_error_keeps_path() {
        let err = Error::io(
            "images/tabbar/kitchen.png",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "images/tabbar/kitchen.png: denied");
    }

    #[test]
    fn invalid_size_message() {
        assert_eq!(
            Error::InvalidSize(0).to_string(),
            "icon size must be at least 1 pixel, got 0"
        );
    }
}
