use core::cell::RefCell;

use embassy_futures::select::{select, Either};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::signal::Signal;
use embassy_time::Timer;

use super::note::{Note, Tune};
use super::PlayError;
use crate::drivers::audio::PlayTone;
use crate::{debug, warn};

const COMPLETION_POLL_MS: u64 = 5;

/// Identifies one play request. Monotonically issued; at most one request is
/// ever sounding, so a handle is just its session id.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SessionHandle(u32);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum PlaybackState {
    Idle,
    Playing,
    Cancelling,
}

enum Command {
    Play(u32, Tune),
    Stop,
}

struct Shared {
    next_session: u32,
    /// Submitted but not yet picked up by the engine.
    pending: Option<u32>,
    /// Session the engine is currently driving.
    active: Option<u32>,
    state: PlaybackState,
    /// Result of the most recently finished session that reached the engine.
    last_result: Option<(u32, Result<(), PlayError>)>,
    tone_range: (u16, u16),
}

/// Shared control block between callers and the playback engine. Lives in a
/// `static` owned by the host application; at most one [`TonePlayer`] may be
/// attached to it, matching the one-transport-per-device constraint.
pub struct PlayerControl {
    commands: Signal<CriticalSectionRawMutex, Command>,
    shared: Mutex<CriticalSectionRawMutex, RefCell<Shared>>,
}

impl PlayerControl {
    pub const fn new() -> Self {
        PlayerControl {
            commands: Signal::new(),
            shared: Mutex::new(RefCell::new(Shared {
                next_session: 1,
                pending: None,
                active: None,
                state: PlaybackState::Idle,
                last_result: None,
                tone_range: (1, u16::MAX),
            })),
        }
    }

    pub fn player(&self) -> Player<'_> {
        Player { control: self }
    }

    fn allocate_session(&self) -> u32 {
        self.shared.lock(|s| {
            let mut s = s.borrow_mut();
            let id = s.next_session;
            s.next_session = s.next_session.wrapping_add(1);
            id
        })
    }

    fn tone_range(&self) -> (u16, u16) {
        self.shared.lock(|s| s.borrow().tone_range)
    }

    fn set_tone_range(&self, range: (u16, u16)) {
        self.shared.lock(|s| s.borrow_mut().tone_range = range);
    }

    fn mark_pending(&self, id: u32) {
        self.shared.lock(|s| s.borrow_mut().pending = Some(id));
    }

    /// Completes a session that never made a sound: an empty submission, or a
    /// request superseded before the engine picked it up.
    fn finish_unheard(&self, id: u32) {
        self.shared.lock(|s| {
            let mut s = s.borrow_mut();
            if s.pending == Some(id) {
                s.pending = None;
            }
            s.last_result = Some((id, Ok(())));
        });
    }

    fn is_engaged(&self) -> bool {
        self.shared.lock(|s| {
            let s = s.borrow();
            s.pending.is_some() || s.state != PlaybackState::Idle
        })
    }

    /// `None` while the session is still pending or sounding, otherwise its
    /// outcome. Only the most recent finished session's error is retained;
    /// superseded sessions read back as `Ok`.
    fn session_result(&self, id: u32) -> Option<Result<(), PlayError>> {
        self.shared.lock(|s| {
            let s = s.borrow();
            if s.pending == Some(id) || s.active == Some(id) {
                return None;
            }
            Some(match s.last_result {
                Some((done, result)) if done == id => result,
                _ => Ok(()),
            })
        })
    }

    fn session_started(&self, id: u32) {
        self.shared.lock(|s| {
            let mut s = s.borrow_mut();
            if s.pending == Some(id) {
                s.pending = None;
            }
            s.active = Some(id);
            s.state = PlaybackState::Playing;
        });
    }

    fn session_cancelling(&self) {
        self.shared.lock(|s| s.borrow_mut().state = PlaybackState::Cancelling);
    }

    fn session_finished(&self, id: u32, result: Result<(), PlayError>) {
        self.shared.lock(|s| {
            let mut s = s.borrow_mut();
            s.active = None;
            s.state = PlaybackState::Idle;
            s.last_result = Some((id, result));
        });
    }
}

impl Default for PlayerControl {
    fn default() -> Self {
        Self::new()
    }
}

/// Caller-side handle. Cheap to copy; every method returns without waiting
/// for sound to happen, except [`Player::await_completion`] which suspends
/// cooperatively.
#[derive(Clone, Copy)]
pub struct Player<'a> {
    control: &'a PlayerControl,
}

impl Player<'_> {
    /// Starts playing `notes` and returns immediately.
    ///
    /// If a tune is already sounding it is preempted: the transport goes
    /// quiet before the new tune's first note, and no request is ever
    /// queued behind another — the last request wins. A tune in which no
    /// note has a nonzero duration completes on the spot without touching
    /// the transport or whatever is already playing.
    ///
    /// Every note is validated against the transport's tone range before
    /// anything is submitted; a failed call leaves playback state unchanged.
    pub fn play(&self, notes: &[Note]) -> Result<SessionHandle, PlayError> {
        let (min, max) = self.control.tone_range();
        let mut tune = Tune::new();
        for note in notes {
            if note.tone != 0 && !(min <= note.tone && note.tone <= max) {
                return Err(PlayError::UnplayableTone { tone: note.tone });
            }
            tune.push(*note).map_err(|_| PlayError::TuneTooLong)?;
        }

        let id = self.control.allocate_session();

        if tune.iter().all(|n| n.is_skippable()) {
            self.control.finish_unheard(id);
            return Ok(SessionHandle(id));
        }

        if let Some(Command::Play(old, _)) = self.control.commands.try_take() {
            self.control.finish_unheard(old);
        }
        self.control.mark_pending(id);
        self.control.commands.signal(Command::Play(id, tune));
        Ok(SessionHandle(id))
    }

    /// Silences the transport and completes the active session, if any.
    /// Idempotent; a stop with nothing playing is a no-op.
    pub fn stop(&self) {
        if let Some(Command::Play(old, _)) = self.control.commands.try_take() {
            self.control.finish_unheard(old);
        }
        self.control.commands.signal(Command::Stop);
    }

    pub fn is_playing(&self) -> bool {
        self.control.is_engaged()
    }

    /// Suspends until the referenced session has completed, or returns at
    /// once if it already has. Polling yields to the executor between checks
    /// and never touches the peripheral bus.
    pub async fn await_completion(&self, handle: SessionHandle) -> Result<(), PlayError> {
        loop {
            if let Some(result) = self.control.session_result(handle.0) {
                return result;
            }
            Timer::after_millis(COMPLETION_POLL_MS).await;
        }
    }
}

/// Engine end of the scheduler. Owns the transport exclusively and advances
/// sessions note by note, yielding at every timed wait so the rest of the
/// system keeps running.
pub struct TonePlayer<'a, D: PlayTone> {
    control: &'a PlayerControl,
    transport: D,
}

impl<'a, D: PlayTone> TonePlayer<'a, D> {
    pub fn new(control: &'a PlayerControl, transport: D) -> Self {
        control.set_tone_range(transport.tone_range());
        TonePlayer { control, transport }
    }

    /// Drives playback forever. Spawn this on the host executor; callers talk
    /// to it through [`Player`] handles on the same control block.
    pub async fn run(&mut self) -> ! {
        loop {
            let mut next = Some(self.control.commands.wait().await);
            while let Some(cmd) = next.take() {
                match cmd {
                    Command::Stop => {}
                    Command::Play(id, tune) => {
                        next = self.play_session(id, &tune).await;
                    }
                }
            }
        }
    }

    /// Plays one session to completion, cancellation, or failure. Returns the
    /// command that preempted it, if any, for the run loop to act on next.
    async fn play_session(&mut self, id: u32, tune: &[Note]) -> Option<Command> {
        self.control.session_started(id);
        debug!("tune {} started", id);

        let mut result = Ok(());
        let mut interrupt = None;

        'notes: for note in tune {
            if note.is_skippable() {
                continue;
            }

            let commanded = if note.is_rest() {
                self.transport.silence().await
            } else {
                self.transport.play_tone(note.tone).await
            };
            if let Err(e) = commanded {
                result = Err(PlayError::Transport(e));
                break 'notes;
            }
            if let Some(cmd) = self.pause(note.duration_ms).await {
                interrupt = Some(cmd);
                break 'notes;
            }

            if note.rest_ms > 0 {
                if let Err(e) = self.transport.silence().await {
                    result = Err(PlayError::Transport(e));
                    break 'notes;
                }
                if let Some(cmd) = self.pause(note.rest_ms).await {
                    interrupt = Some(cmd);
                    break 'notes;
                }
            }
        }

        if interrupt.is_some() {
            self.control.session_cancelling();
            debug!("tune {} preempted", id);
        }
        if result.is_err() {
            warn!("tune {} aborted on transport failure", id);
        }

        // quiescent between tunes, and never left sounding after an error
        let quiesced = self.transport.silence().await;
        if result.is_ok() {
            if let Err(e) = quiesced {
                result = Err(PlayError::Transport(e));
            }
        }

        self.control.session_finished(id, result);
        interrupt
    }

    async fn pause(&mut self, ms: u32) -> Option<Command> {
        match select(self.control.commands.wait(), Timer::after_millis(ms as u64)).await {
            Either::First(cmd) => Some(cmd),
            Either::Second(()) => None,
        }
    }
}
