use embassy_futures::block_on;
use embedded_hal::i2c::ErrorKind;
use embedded_hal_mock::eh1::i2c::{Mock, Transaction};

use qwiic_buzzer::drivers::audio::qwiic::{QwiicBuzzer, Volume, QWIIC_BUZZER_DEFAULT_ADDR};
use qwiic_buzzer::drivers::audio::{PlayTone, TransportError};

const ADDR: u8 = QWIIC_BUZZER_DEFAULT_ADDR;

#[test]
fn tone_writes_follow_the_register_map() {
    let expectations = [
        Transaction::write_read(ADDR, vec![0x00], vec![0x5E]),
        // freq msb/lsb, volume, duration 0 (open-ended), active
        Transaction::write(ADDR, vec![0x03, 0x01, 0xB8, 3, 0, 0, 1]),
        Transaction::write(ADDR, vec![0x08, 0]),
    ];
    let mut buzzer = QwiicBuzzer::new(Mock::new(&expectations));

    block_on(async {
        buzzer.init().await.unwrap();
        buzzer.play_tone(440).await.unwrap();
        buzzer.silence().await.unwrap();
    });

    buzzer.release().done();
}

#[test]
fn out_of_bounds_tones_are_clamped() {
    let expectations = [
        Transaction::write(ADDR, vec![0x03, 0x13, 0x88, 3, 0, 0, 1]),
        Transaction::write(ADDR, vec![0x03, 0x00, 0x1F, 3, 0, 0, 1]),
    ];
    let mut buzzer = QwiicBuzzer::new(Mock::new(&expectations));

    block_on(async {
        buzzer.play_tone(20000).await.unwrap();
        buzzer.play_tone(1).await.unwrap();
    });

    buzzer.release().done();
}

#[test]
fn zero_tone_is_a_silence_command() {
    let expectations = [Transaction::write(ADDR, vec![0x08, 0])];
    let mut buzzer = QwiicBuzzer::new(Mock::new(&expectations));

    block_on(async {
        buzzer.play_tone(0).await.unwrap();
    });

    buzzer.release().done();
}

#[test]
fn configured_volume_rides_along_with_every_tone() {
    let expectations = [Transaction::write(ADDR, vec![0x03, 0x01, 0xB8, 4, 0, 0, 1])];
    let mut buzzer = QwiicBuzzer::new(Mock::new(&expectations));
    buzzer.set_volume(Volume::Loud);

    block_on(async {
        buzzer.play_tone(440).await.unwrap();
    });

    buzzer.release().done();
}

#[test]
fn wrong_device_id_fails_the_probe() {
    let expectations = [Transaction::write_read(ADDR, vec![0x00], vec![0x10])];
    let mut buzzer = QwiicBuzzer::new(Mock::new(&expectations));

    block_on(async {
        assert_eq!(
            buzzer.init().await,
            Err(TransportError::BadDeviceId { found: 0x10 })
        );
    });

    buzzer.release().done();
}

#[test]
fn bus_errors_surface_as_transport_errors() {
    let expectations =
        [Transaction::write(ADDR, vec![0x03, 0x01, 0xB8, 3, 0, 0, 1]).with_error(ErrorKind::Other)];
    let mut buzzer = QwiicBuzzer::new(Mock::new(&expectations));

    block_on(async {
        assert_eq!(
            buzzer.play_tone(440).await,
            Err(TransportError::I2c(ErrorKind::Other))
        );
    });

    buzzer.release().done();
}
