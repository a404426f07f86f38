//! Letters to a chatter-like tune: vowels become one long note, consonants a
//! pair of short ones, each letter followed by a short breath of silence.
//! Expressive rather than phonetic — the only contract is that the same text
//! always produces the same tune.

use super::note::{Note, Tune};
use super::{pitches, TranslateError};

/// Default length of a consonant note, in milliseconds.
pub const DEFAULT_UNIT_MS: u32 = 400;

/// Octaves for which every natural pitch letter exists in the table.
pub const OCTAVE_RANGE: (u8, u8) = (1, 7);

enum Pattern {
    Long(u8),
    Pair(u8, u8),
}

fn letter_pattern(symbol: char) -> Option<Pattern> {
    match symbol {
        'a' => Some(Pattern::Long(b'F')),
        'e' => Some(Pattern::Long(b'A')),
        'i' => Some(Pattern::Long(b'B')),
        'o' => Some(Pattern::Long(b'E')),
        'u' => Some(Pattern::Long(b'D')),
        'y' => Some(Pattern::Long(b'G')),
        'b' => Some(Pattern::Pair(b'E', b'C')),
        'c' => Some(Pattern::Pair(b'A', b'D')),
        'd' => Some(Pattern::Pair(b'F', b'D')),
        'f' => Some(Pattern::Pair(b'E', b'A')),
        'g' => Some(Pattern::Pair(b'D', b'C')),
        'h' => Some(Pattern::Pair(b'G', b'A')),
        'j' => Some(Pattern::Pair(b'A', b'B')),
        'k' => Some(Pattern::Pair(b'A', b'F')),
        'l' => Some(Pattern::Pair(b'D', b'F')),
        'm' => Some(Pattern::Pair(b'F', b'A')),
        'n' => Some(Pattern::Pair(b'E', b'G')),
        'p' => Some(Pattern::Pair(b'G', b'E')),
        'q' => Some(Pattern::Pair(b'A', b'E')),
        'r' => Some(Pattern::Pair(b'D', b'G')),
        's' => Some(Pattern::Pair(b'F', b'B')),
        't' => Some(Pattern::Pair(b'B', b'G')),
        'v' => Some(Pattern::Pair(b'C', b'E')),
        'w' => Some(Pattern::Pair(b'C', b'F')),
        'x' => Some(Pattern::Pair(b'A', b'C')),
        'z' => Some(Pattern::Pair(b'G', b'D')),
        _ => None,
    }
}

fn pitch_of(letter: u8, octave: u8) -> Option<u16> {
    let name = [letter, b'0' + octave];
    pitches::from_name(core::str::from_utf8(&name).ok()?)
}

/// Translates `text` in the given octave, `unit_ms` milliseconds per short
/// note. Letters and spaces are considered; everything else is skipped.
pub fn tunetalk_tune(text: &str, octave: u8, unit_ms: u32) -> Result<Tune, TranslateError> {
    if unit_ms == 0 {
        return Err(TranslateError::InvalidUnit);
    }
    if octave < OCTAVE_RANGE.0 || octave > OCTAVE_RANGE.1 {
        return Err(TranslateError::OctaveOutOfRange { octave });
    }

    let breath = Note::rest(unit_ms / 4);
    let mut tune = Tune::new();

    for symbol in text.chars() {
        let symbol = symbol.to_ascii_lowercase();
        if symbol == ' ' {
            push(&mut tune, Note::rest(2 * unit_ms))?;
            push(&mut tune, breath)?;
            continue;
        }
        let Some(pattern) = letter_pattern(symbol) else {
            continue;
        };

        match pattern {
            Pattern::Long(letter) => {
                // letters in OCTAVE_RANGE always resolve
                let tone = pitch_of(letter, octave).unwrap_or(pitches::S);
                push(&mut tune, Note::new(tone, 2 * unit_ms))?;
            }
            Pattern::Pair(first, second) => {
                let first = pitch_of(first, octave).unwrap_or(pitches::S);
                let second = pitch_of(second, octave).unwrap_or(pitches::S);
                push(&mut tune, Note::new(first, unit_ms))?;
                push(&mut tune, Note::new(second, unit_ms))?;
            }
        }
        push(&mut tune, breath)?;
    }

    Ok(tune)
}

fn push(tune: &mut Tune, note: Note) -> Result<(), TranslateError> {
    tune.push(note).map_err(|_| TranslateError::TuneTooLong)
}
