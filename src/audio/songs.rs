//! Canned feedback jingles.

use super::note::Note;
use super::pitches;

pub const YES: [Note; 2] = [
    Note::new(pitches::C5, 150),
    Note::new(pitches::E5, 250),
];

pub const NO: [Note; 2] = [
    Note::new(pitches::C5, 200),
    Note::new(pitches::A4, 300),
];

pub const WRONG: [Note; 1] = [
    Note::new(pitches::C3, 800),
];

pub const VICTORY: [Note; 4] = [
    Note::new(pitches::C5, 150),
    Note::new(pitches::E5, 150),
    Note::new(pitches::C5, 150),
    Note::new(pitches::F5, 300),
];

pub const LAUGH: [Note; 8] = [
    Note::new(pitches::F5, 100),
    Note::new(pitches::E5, 200),
    Note::new(pitches::F5, 100),
    Note::new(pitches::E5, 200),
    Note::new(pitches::F5, 100),
    Note::new(pitches::E5, 200),
    Note::new(pitches::F5, 100),
    Note::new(pitches::E5, 200),
];

pub const SAD: [Note; 4] = [
    Note::new(pitches::F4, 400),
    Note::new(pitches::E4, 400),
    Note::new(pitches::DS4, 400),
    Note::new(pitches::D4, 400),
];

pub const SIREN: [Note; 8] = [
    Note::new(pitches::FS5, 400),
    Note::new(pitches::C5, 400),
    Note::new(pitches::FS5, 400),
    Note::new(pitches::C5, 400),
    Note::new(pitches::FS5, 400),
    Note::new(pitches::C5, 400),
    Note::new(pitches::FS5, 400),
    Note::new(pitches::C5, 400),
];
