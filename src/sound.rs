//! Sound identifiers and WAV clip validation
//!
//! Sounds are 16-bit PCM mono WAV files stored on the device. Decoding and
//! playback belong to the [`SoundPort`](crate::SoundPort) implementation; this
//! module only names the clips and checks their headers.

use core::fmt;

use crate::error::AssetError;

/// Size of the preallocated playback buffer in bytes
pub const AUDIO_BUFFER_SIZE: usize = 200_000;

const FORMAT_PCM: u16 = 1;

/// Sound clips shipped with the toy
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoundId {
    Startup,
    Heartbeat,
    Star,
    Moon,
    Flower,
}

impl SoundId {
    /// Asset path on the device filesystem
    pub const fn path(self) -> &'static str {
        match self {
            Self::Startup => "sounds/startup.wav",
            Self::Heartbeat => "sounds/heartbeat.wav",
            Self::Star => "sounds/star.wav",
            Self::Moon => "sounds/moon.wav",
            Self::Flower => "sounds/flower.wav",
        }
    }
}

impl fmt::Display for SoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// A validated clip borrowed from the raw file bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavClip<'a> {
    pub sample_rate: u32,
    /// Raw little-endian 16-bit samples
    pub samples: &'a [u8],
}

/// Validate a WAV file and locate its sample data.
///
/// Unknown chunks are skipped. The data chunk must fit in
/// [`AUDIO_BUFFER_SIZE`].
pub fn parse_wav(bytes: &[u8]) -> Result<WavClip<'_>, AssetError> {
    if bytes.get(0..4) != Some(b"RIFF".as_slice()) {
        return Err(AssetError::NotRiff);
    }
    if bytes.get(8..12) != Some(b"WAVE".as_slice()) {
        return Err(AssetError::NotWave);
    }

    let mut sample_rate = None;
    let mut offset = 12;
    while let Some(header) = bytes.get(offset..offset + 8) {
        let chunk_id = &header[0..4];
        let chunk_size = read_u32(header, 4) as usize;
        let body_start = offset + 8;
        let body_end = body_start
            .checked_add(chunk_size)
            .ok_or(AssetError::Truncated)?;

        match chunk_id {
            b"fmt " => {
                let body = bytes.get(body_start..body_end).ok_or(AssetError::Truncated)?;
                if body.len() < 16 {
                    return Err(AssetError::Truncated);
                }
                let format = read_u16(body, 0);
                let channels = read_u16(body, 2);
                let bits = read_u16(body, 14);
                if format != FORMAT_PCM {
                    return Err(AssetError::UnsupportedFormat(format));
                }
                if channels != 1 {
                    return Err(AssetError::UnsupportedChannels(channels));
                }
                if bits != 16 {
                    return Err(AssetError::UnsupportedBitDepth(bits));
                }
                sample_rate = Some(read_u32(body, 4));
            }
            b"data" => {
                let Some(sample_rate) = sample_rate else {
                    return Err(AssetError::MissingFormat);
                };
                if chunk_size > AUDIO_BUFFER_SIZE {
                    return Err(AssetError::TooLarge {
                        size: chunk_size,
                        capacity: AUDIO_BUFFER_SIZE,
                    });
                }
                let samples = bytes.get(body_start..body_end).ok_or(AssetError::Truncated)?;
                return Ok(WavClip {
                    sample_rate,
                    samples,
                });
            }
            _ => {}
        }

        // Chunks are padded to an even length
        offset = body_end + (chunk_size & 1);
    }

    Err(AssetError::MissingData)
}

fn read_u16(bytes: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([bytes[at], bytes[at + 1]])
}

fn read_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}
