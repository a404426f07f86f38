use qwiic_buzzer::audio::morse::{morse_tune, MorseStyle};
use qwiic_buzzer::audio::note::Note;
use qwiic_buzzer::audio::tabs::tabs_tune;
use qwiic_buzzer::audio::tunetalk::tunetalk_tune;
use qwiic_buzzer::audio::{pitches, TranslateError};

#[test]
fn sos_uses_standard_element_timing() {
    let style = MorseStyle::new(880, 60);
    let tune = morse_tune("SOS", &style).unwrap();

    let dot = Note::new(880, 60);
    let dash = Note::new(880, 180);
    let gap = Note::rest(60);
    let letter_gap = Note::rest(180);
    let expected = [
        dot, gap, dot, gap, dot,
        letter_gap,
        dash, gap, dash, gap, dash,
        letter_gap,
        dot, gap, dot, gap, dot,
    ];
    assert_eq!(tune.as_slice(), expected.as_slice());
}

#[test]
fn words_are_separated_by_a_seven_unit_gap() {
    let style = MorseStyle::new(880, 60);
    let tune = morse_tune("e e", &style).unwrap();

    let dot = Note::new(880, 60);
    assert_eq!(tune.as_slice(), [dot, Note::rest(420), dot].as_slice());
}

#[test]
fn unrecognized_characters_are_skipped() {
    let style = MorseStyle::default();
    assert_eq!(morse_tune("s#s", &style), morse_tune("ss", &style));
}

#[test]
fn tab_length_marks_scale_the_unit() {
    let tune = tabs_tune("C4 E4- A4! S:", 400).unwrap();
    assert_eq!(
        tune.as_slice(),
        [
            Note::new(pitches::C4, 400),
            Note::new(pitches::E4, 800),
            Note::new(pitches::A4, 50),
            Note::new(pitches::S, 100),
        ]
        .as_slice()
    );
}

#[test]
fn malformed_tab_tokens_are_rejected() {
    let err = tabs_tune("C4 H7", 400).unwrap_err();
    match err {
        TranslateError::UnknownPitch { token } => assert_eq!(token.as_str(), "H7"),
        other => panic!("unexpected error {other:?}"),
    }

    // octave beyond the pitch table
    assert!(matches!(
        tabs_tune("C9", 400),
        Err(TranslateError::UnknownPitch { .. })
    ));
    assert!(matches!(
        tabs_tune("A4x", 400),
        Err(TranslateError::UnknownPitch { .. })
    ));
}

#[test]
fn zero_units_are_rejected() {
    assert_eq!(morse_tune("sos", &MorseStyle::new(880, 0)), Err(TranslateError::InvalidUnit));
    assert_eq!(tabs_tune("C4", 0), Err(TranslateError::InvalidUnit));
    assert_eq!(tunetalk_tune("hi", 4, 0), Err(TranslateError::InvalidUnit));
}

#[test]
fn tunetalk_vowels_are_long_consonants_paired() {
    let tune = tunetalk_tune("hi", 4, 400).unwrap();
    assert_eq!(
        tune.as_slice(),
        [
            Note::new(pitches::G4, 400),
            Note::new(pitches::A4, 400),
            Note::rest(100),
            Note::new(pitches::B4, 800),
            Note::rest(100),
        ]
        .as_slice()
    );
}

#[test]
fn tunetalk_octave_is_validated() {
    assert_eq!(
        tunetalk_tune("hi", 9, 400),
        Err(TranslateError::OctaveOutOfRange { octave: 9 })
    );
    assert_eq!(
        tunetalk_tune("hi", 0, 400),
        Err(TranslateError::OctaveOutOfRange { octave: 0 })
    );
}

#[test]
fn translators_are_pure() {
    let style = MorseStyle::default();
    assert_eq!(morse_tune("hello world 73", &style), morse_tune("hello world 73", &style));
    assert_eq!(tabs_tune("C4 E4 G4 C5-", 250), tabs_tune("C4 E4 G4 C5-", 250));
    assert_eq!(tunetalk_tune("hey you", 5, 300), tunetalk_tune("hey you", 5, 300));
}
