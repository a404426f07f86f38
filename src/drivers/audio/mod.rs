pub mod qwiic;

/// Peripheral-bus failure while commanding the buzzer.
#[derive(Clone, Copy, PartialEq, Eq, Debug, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    #[error("i2c bus error: {0:?}")]
    I2c(embedded_hal::i2c::ErrorKind),
    #[error("unexpected device id {found}")]
    BadDeviceId { found: u8 },
}

/// A tone transport: something that can sound exactly one tone at a time,
/// or be quiet. The playback scheduler owns all timing; implementations only
/// latch the commanded state.
pub trait PlayTone {
    /// Starts sounding `tone` Hz until told otherwise. `0` is a rest and is
    /// equivalent to [`PlayTone::silence`].
    async fn play_tone(&mut self, tone: u16) -> Result<(), TransportError>;

    /// Stops any sounding tone. Idempotent.
    async fn silence(&mut self) -> Result<(), TransportError>;

    /// Inclusive bounds of the tones this transport can produce.
    fn tone_range(&self) -> (u16, u16);

    fn can_play_tone(&self, tone: u16) -> bool {
        let (min, max) = self.tone_range();
        min <= tone && tone <= max
    }
}
