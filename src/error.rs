//! Crate error type.
//!
//! Only the I/O adapters (model, texture and config loading, image output)
//! can fail. Rendering itself never returns an error: numerically degenerate
//! primitives are skipped where they are found.

use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Image(image::ImageError),
    Obj(tobj::LoadError),
    Config(ron::error::SpannedError),
    InvalidConfig(String),
    InvalidTexture { width: u32, height: u32, len: usize },
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Error::Image(e)
    }
}

impl From<tobj::LoadError> for Error {
    fn from(e: tobj::LoadError) -> Self {
        Error::Obj(e)
    }
}

impl From<ron::error::SpannedError> for Error {
    fn from(e: ron::error::SpannedError) -> Self {
        Error::Config(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "IO error: {}", e),
            Error::Image(e) => write!(f, "Image error: {}", e),
            Error::Obj(e) => write!(f, "OBJ load error: {}", e),
            Error::Config(e) => write!(f, "Config parse error: {}", e),
            Error::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
            Error::InvalidTexture { width, height, len } => write!(
                f,
                "Invalid texture: {}x{} needs {} texels, got {}",
                width,
                height,
                *width as usize * *height as usize,
                len
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Image(e) => Some(e),
            Error::Obj(e) => Some(e),
            Error::Config(e) => Some(e),
            Error::InvalidConfig(_) | Error::InvalidTexture { .. } => None,
        }
    }
}
