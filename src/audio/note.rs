/// Upper bound on owned tune length. Translator output and submitted play
/// requests are capped here so control blocks have a fixed footprint.
pub const MAX_TUNE_NOTES: usize = 256;

/// One sound event: a tone in Hz, how long it sounds, and optional trailing
/// silence. `tone == 0` is a rest. A note with `duration_ms == 0` is a no-op
/// and is skipped without touching the transport.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Note {
    pub tone: u16,
    pub duration_ms: u32,
    pub rest_ms: u32,
}

impl Note {
    pub const fn new(tone: u16, duration_ms: u32) -> Self {
        Note {
            tone,
            duration_ms,
            rest_ms: 0,
        }
    }

    pub const fn with_rest(tone: u16, duration_ms: u32, rest_ms: u32) -> Self {
        Note {
            tone,
            duration_ms,
            rest_ms,
        }
    }

    pub const fn rest(duration_ms: u32) -> Self {
        Note {
            tone: 0,
            duration_ms,
            rest_ms: 0,
        }
    }

    pub const fn is_rest(&self) -> bool {
        self.tone == 0
    }

    pub const fn is_skippable(&self) -> bool {
        self.duration_ms == 0
    }
}

/// An ordered, owned sequence of notes. Playback order is insertion order.
pub type Tune = heapless::Vec<Note, MAX_TUNE_NOTES>;
