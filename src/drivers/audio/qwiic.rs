/*
 * Driver for the SparkFun Qwiic Buzzer (BOB-24474).
 *
 * https://www.sparkfun.com/products/24474
 */

use embedded_hal::i2c::Error as _;
use embedded_hal_async::i2c::I2c;
use num_traits::clamp;

use super::{PlayTone, TransportError};
use crate::warn;

pub const QWIIC_BUZZER_DEFAULT_ADDR: u8 = 0x34;
pub const QWIIC_BUZZER_DEVICE_ID: u8 = 0x5E;

pub const BUZZER_MIN_FREQ: u16 = 31;
pub const BUZZER_MAX_FREQ: u16 = 5000;

#[repr(u8)]
#[allow(dead_code)]
#[derive(Clone, Copy, Debug)]
enum Register {
    Id = 0x00,
    FirmwareMinor = 0x01,
    FirmwareMajor = 0x02,
    ToneFrequencyMsb = 0x03,
    ToneFrequencyLsb = 0x04,
    Volume = 0x05,
    DurationMsb = 0x06,
    DurationLsb = 0x07,
    Active = 0x08,
    SaveSettings = 0x09,
    I2cAddress = 0x0A,
}

/// Buzzer loudness, register values 0 through 4.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Volume {
    Off = 0,
    Quiet = 1,
    Low = 2,
    #[default]
    Mid = 3,
    Loud = 4,
}

/// Register-level adapter for the Qwiic Buzzer, generic over the host's I2C
/// bus. Tones are started open-ended (device duration 0) and stopped by
/// clearing the active register, so the scheduler keeps sole ownership of
/// note timing.
pub struct QwiicBuzzer<I2C> {
    i2c: I2C,
    addr: u8,
    volume: Volume,
    min_freq: u16,
    max_freq: u16,
}

impl<I2C: I2c> QwiicBuzzer<I2C> {
    pub fn new(i2c: I2C) -> Self {
        QwiicBuzzer {
            i2c,
            addr: QWIIC_BUZZER_DEFAULT_ADDR,
            volume: Volume::default(),
            min_freq: BUZZER_MIN_FREQ,
            max_freq: BUZZER_MAX_FREQ,
        }
    }

    pub fn new_with_limits(i2c: I2C, addr: u8, min_freq: u16, max_freq: u16) -> Self {
        QwiicBuzzer {
            i2c,
            addr,
            volume: Volume::default(),
            min_freq,
            max_freq,
        }
    }

    pub fn set_volume(&mut self, volume: Volume) {
        self.volume = volume;
    }

    /// Probes the identity register and confirms a Qwiic Buzzer is answering
    /// at the configured address.
    pub async fn init(&mut self) -> Result<(), TransportError> {
        let mut id = [0u8; 1];
        self.i2c
            .write_read(self.addr, &[Register::Id as u8], &mut id)
            .await
            .map_err(|e| TransportError::I2c(e.kind()))?;

        if id[0] != QWIIC_BUZZER_DEVICE_ID {
            warn!("qwiic buzzer probe found device id {}", id[0]);
            return Err(TransportError::BadDeviceId { found: id[0] });
        }

        Ok(())
    }

    /// Hands the bus back, e.g. for sharing with other peripherals.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> PlayTone for QwiicBuzzer<I2C> {
    async fn play_tone(&mut self, tone: u16) -> Result<(), TransportError> {
        if tone == 0 {
            return self.silence().await;
        }

        let tone = clamp(tone, self.min_freq, self.max_freq);
        let freq = tone.to_be_bytes();

        // Burst write from TONE_FREQUENCY_MSB: frequency, volume, duration
        // (0 = sound until commanded off), active.
        let cmd = [
            Register::ToneFrequencyMsb as u8,
            freq[0],
            freq[1],
            self.volume as u8,
            0,
            0,
            1,
        ];
        self.i2c
            .write(self.addr, &cmd)
            .await
            .map_err(|e| TransportError::I2c(e.kind()))
    }

    async fn silence(&mut self) -> Result<(), TransportError> {
        self.i2c
            .write(self.addr, &[Register::Active as u8, 0])
            .await
            .map_err(|e| TransportError::I2c(e.kind()))
    }

    fn tone_range(&self) -> (u16, u16) {
        (self.min_freq, self.max_freq)
    }
}
