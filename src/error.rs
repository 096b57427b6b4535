//! Error types
//!
//! None of these are fatal to the control loop. Hardware failures are logged
//! and the operation is skipped, an unmapped button is ignored and a broken
//! sound asset only silences the animation.

use core::fmt;

use crate::button::ButtonId;

/// Hardware port that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Port {
    Input,
    Display,
    Sound,
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Port::Input => f.write_str("input"),
            Port::Display => f.write_str("display"),
            Port::Sound => f.write_str("sound"),
        }
    }
}

/// Problems found while validating a WAV clip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetError {
    /// Missing `RIFF` magic
    NotRiff,
    /// Missing `WAVE` form type
    NotWave,
    /// Format tag other than PCM
    UnsupportedFormat(u16),
    /// More than one channel
    UnsupportedChannels(u16),
    /// Sample width other than 16 bits
    UnsupportedBitDepth(u16),
    /// `data` chunk seen before any `fmt ` chunk
    MissingFormat,
    /// No `data` chunk in the file
    MissingData,
    /// A chunk runs past the end of the file
    Truncated,
    /// Audio does not fit the playback buffer
    TooLarge {
        /// Size of the data chunk in bytes
        size: usize,
        /// Buffer capacity in bytes
        capacity: usize,
    },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::NotRiff => write!(f, "not a RIFF file"),
            AssetError::NotWave => write!(f, "not a WAVE file"),
            AssetError::UnsupportedFormat(tag) => {
                write!(f, "unsupported audio format {tag}, only PCM is supported")
            }
            AssetError::UnsupportedChannels(n) => {
                write!(f, "unsupported channel count {n}, only mono is supported")
            }
            AssetError::UnsupportedBitDepth(bits) => {
                write!(f, "unsupported sample width {bits}, only 16 bit is supported")
            }
            AssetError::MissingFormat => write!(f, "data chunk before fmt chunk"),
            AssetError::MissingData => write!(f, "no data chunk found"),
            AssetError::Truncated => write!(f, "chunk extends past end of file"),
            AssetError::TooLarge { size, capacity } => {
                write!(f, "audio too large: {size} > {capacity} bytes")
            }
        }
    }
}

impl core::error::Error for AssetError {}

/// Errors reported by ports and lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A hardware port failed to complete an operation
    Hardware(Port),
    /// A debounced press has no animation assigned
    UnknownButtonMapping(ButtonId),
    /// A sound resource could not be decoded
    MalformedAsset(AssetError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Hardware(port) => write!(f, "{port} port i/o error"),
            Error::UnknownButtonMapping(button) => {
                write!(f, "no animation mapped to button {button}")
            }
            Error::MalformedAsset(err) => write!(f, "malformed asset: {err}"),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Error::MalformedAsset(err) => Some(err),
            _ => None,
        }
    }
}

impl From<AssetError> for Error {
    fn from(err: AssetError) -> Self {
        Error::MalformedAsset(err)
    }
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
