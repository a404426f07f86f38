//! Text to Morse-code tunes.
//!
//! Standard element timing: dot = 1 unit, dash = 3 units, gap between the
//! elements of a letter = 1 unit, between letters = 3 units, between words =
//! 7 units. All gaps come out as rest notes. Letters `a..z` and digits are
//! recognized case-insensitively; anything else is skipped.

use super::note::{Note, Tune};
use super::{pitches, TranslateError};

/// Dot pitch and base unit for a translation. The defaults are an A5 dot at
/// 60 ms per unit, roughly 20 words per minute.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MorseStyle {
    pub tone: u16,
    pub unit_ms: u32,
}

impl MorseStyle {
    pub const fn new(tone: u16, unit_ms: u32) -> Self {
        MorseStyle { tone, unit_ms }
    }
}

impl Default for MorseStyle {
    fn default() -> Self {
        MorseStyle {
            tone: pitches::A5,
            unit_ms: 60,
        }
    }
}

fn code(symbol: char) -> Option<&'static str> {
    match symbol {
        'a' => Some(".-"),
        'b' => Some("-..."),
        'c' => Some("-.-."),
        'd' => Some("-.."),
        'e' => Some("."),
        'f' => Some("..-."),
        'g' => Some("--."),
        'h' => Some("...."),
        'i' => Some(".."),
        'j' => Some(".---"),
        'k' => Some("-.-"),
        'l' => Some(".-.."),
        'm' => Some("--"),
        'n' => Some("-."),
        'o' => Some("---"),
        'p' => Some(".--."),
        'q' => Some("--.-"),
        'r' => Some(".-."),
        's' => Some("..."),
        't' => Some("-"),
        'u' => Some("..-"),
        'v' => Some("...-"),
        'w' => Some(".--"),
        'x' => Some("-..-"),
        'y' => Some("-.--"),
        'z' => Some("--.."),
        '0' => Some("-----"),
        '1' => Some(".----"),
        '2' => Some("..---"),
        '3' => Some("...--"),
        '4' => Some("....-"),
        '5' => Some("....."),
        '6' => Some("-...."),
        '7' => Some("--..."),
        '8' => Some("---.."),
        '9' => Some("----."),
        _ => None,
    }
}

/// Translates `text` into a Morse tune. Pure: the same text and style always
/// produce the same tune.
pub fn morse_tune(text: &str, style: &MorseStyle) -> Result<Tune, TranslateError> {
    if style.unit_ms == 0 {
        return Err(TranslateError::InvalidUnit);
    }

    let unit = style.unit_ms;
    let mut tune = Tune::new();
    // gap owed before the next sounded letter; a word gap supersedes the
    // letter gap left behind by the previous letter
    let mut gap: Option<Note> = None;

    for symbol in text.chars() {
        let symbol = symbol.to_ascii_lowercase();
        if symbol == ' ' {
            if gap.is_some() {
                gap = Some(Note::rest(7 * unit));
            }
            continue;
        }
        let Some(pattern) = code(symbol) else {
            continue;
        };

        if let Some(rest) = gap.take() {
            push(&mut tune, rest)?;
        }
        for (i, element) in pattern.chars().enumerate() {
            if i > 0 {
                push(&mut tune, Note::rest(unit))?;
            }
            let duration = if element == '-' { 3 * unit } else { unit };
            push(&mut tune, Note::new(style.tone, duration))?;
        }
        gap = Some(Note::rest(3 * unit));
    }

    Ok(tune)
}

fn push(tune: &mut Tune, note: Note) -> Result<(), TranslateError> {
    tune.push(note).map_err(|_| TranslateError::TuneTooLong)
}
