use crate::drivers::audio::TransportError;

pub mod morse;
pub mod note;
pub mod pitches;
pub mod songs;
pub mod tabs;
pub mod tone_player;
pub mod tunetalk;

/// Why a play request failed, either up front or while the tune was sounding.
#[derive(Clone, Copy, PartialEq, Eq, Debug, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlayError {
    #[error("tone of {tone} Hz is outside the transport's playable range")]
    UnplayableTone { tone: u16 },
    #[error("tune exceeds the note capacity")]
    TuneTooLong,
    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),
}

/// Translator rejection. Raised before any notes are handed back, so a
/// caller never observes a partially translated tune.
#[derive(Clone, PartialEq, Eq, Debug, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TranslateError {
    #[error("unknown pitch name `{token}`")]
    UnknownPitch { token: heapless::String<8> },
    #[error("base unit must be nonzero")]
    InvalidUnit,
    #[error("octave {octave} has no pitch table entries")]
    OctaveOutOfRange { octave: u8 },
    #[error("translation exceeds the note capacity")]
    TuneTooLong,
}
