use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("out of memory allocating a {width}x{height} bitmap")]
    OutOfMemory { width: u32, height: u32 },

    #[error("invalid bitmap size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("shared buffer holds {actual} pixels, bitmap needs {expected}")]
    BufferSize { expected: usize, actual: usize },

    /// `path` is `None` for images decoded from memory
    #[error("failed to decode image{}: {source}", origin(.path.as_deref()))]
    Decode {
        path: Option<PathBuf>,
        #[source]
        source: image::ImageError,
    },

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[cfg(feature = "sdl")]
    #[error("display error: {0}")]
    Display(String),
}

fn origin(path: Option<&Path>) -> String {
    path.map(|p| format!(" {}", p.display())).unwrap_or_default()
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    #[cfg(feature = "sdl")]
    pub fn display(msg: impl Into<String>) -> Self {
        Self::Display(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages_carry_dimensions() {
        let err = Error::OutOfMemory {
            width: 640,
            height: 480,
        };
        assert!(err.to_string().contains("640x480"));

        let err = Error::BufferSize {
            expected: 16,
            actual: 4,
        };
        assert!(err.to_string().contains("16"));
        assert!(err.to_string().contains('4'));
    }

    #[test]
    fn test_io_errors_convert() {
        let base = std::io::Error::other("boom");
        let err: Error = base.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn test_config_prefix_is_stable() {
        assert!(Error::config("x").to_string().starts_with("config error:"));
    }

    #[test]
    fn test_decode_message_names_file_when_known() {
        let cause = || image::ImageError::IoError(std::io::Error::other("truncated"));
        let err = Error::Decode {
            path: Some(PathBuf::from("sprites/ship.bmp")),
            source: cause(),
        };
        assert!(err.to_string().starts_with("failed to decode image sprites/ship.bmp: "));

        let err = Error::Decode {
            path: None,
            source: cause(),
        };
        assert!(err.to_string().starts_with("failed to decode image: "));
        assert!(err.to_string().contains("truncated"));
    }
}
