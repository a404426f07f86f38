//! Tab-string translation.
//!
//! A tab string is whitespace-separated tokens. Each token names a pitch
//! from [`super::pitches`] (`S` for a rest) with an optional trailing length
//! mark scaling the base unit:
//!
//! `!` 1/8, `:` 1/4, `;` 1/3, `.` 1/2, nothing 1, `*` 3/2, `-` 2, `~` 3,
//! `_` 4.
//!
//! Malformed tokens are rejected outright; a tab string never translates to
//! wrong pitches.

use super::note::{Note, Tune};
use super::{pitches, TranslateError};

/// Base unit for an unmarked note, in milliseconds.
pub const DEFAULT_UNIT_MS: u32 = 400;

fn length_mark(mark: char) -> Option<(u32, u32)> {
    match mark {
        '!' => Some((1, 8)),
        ':' => Some((1, 4)),
        ';' => Some((1, 3)),
        '.' => Some((1, 2)),
        '*' => Some((3, 2)),
        '-' => Some((2, 1)),
        '~' => Some((3, 1)),
        '_' => Some((4, 1)),
        _ => None,
    }
}

/// Translates a tab string with `unit_ms` milliseconds per unmarked note.
/// Pure: the same tabs and unit always produce the same tune.
pub fn tabs_tune(tabs: &str, unit_ms: u32) -> Result<Tune, TranslateError> {
    if unit_ms == 0 {
        return Err(TranslateError::InvalidUnit);
    }

    let mut tune = Tune::new();
    for token in tabs.split_whitespace() {
        let (name, num, den) = match token.chars().last().and_then(length_mark) {
            Some((num, den)) => (&token[..token.len() - 1], num, den),
            None => (token, 1, 1),
        };

        let Some(tone) = pitches::from_name(name) else {
            return Err(TranslateError::UnknownPitch {
                token: truncated(token),
            });
        };

        let duration = unit_ms * num / den;
        tune.push(Note::new(tone, duration))
            .map_err(|_| TranslateError::TuneTooLong)?;
    }

    Ok(tune)
}

fn truncated(token: &str) -> heapless::String<8> {
    let mut copy = heapless::String::new();
    for symbol in token.chars() {
        if copy.push(symbol).is_err() {
            break;
        }
    }
    copy
}
