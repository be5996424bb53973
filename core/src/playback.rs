use crate::notice::Notice;

pub type Attempt = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    /// Loop paused, nothing pending.
    Stopped,
    /// Startup muted-autoplay attempt pending.
    Priming,
    /// Loop running muted, armed to unmute on the first confirmed flip.
    MutedLoop,
    /// Explicit play attempt pending.
    Starting,
    /// Unmute attempt pending. Flip-triggered unmutes fail silently;
    /// user-initiated ones notify.
    Unmuting { user_initiated: bool },
    Playing,
}

/// What the audio shell must do against the media element. Async attempts
/// carry the attempt number and settle through `play_settled`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackCommand {
    Pause,
    /// Unmute the loop element and call play().
    BeginPlay { attempt: Attempt },
    /// Mute the loop element and call play().
    BeginMutedPlay { attempt: Attempt },
}

/// Background-loop state machine. All transitions are synchronous; the
/// shell reports play() promise outcomes back via `play_settled`. The
/// attempt counter invalidates settles from attempts a later pause
/// cancelled, so `is_playing` always reflects the last settled truth.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaybackState {
    phase: Phase,
    attempt: Attempt,
}

impl PlaybackState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Stopped,
            attempt: 0,
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.phase, Phase::Playing)
    }

    /// True while the loop element should stay muted.
    pub fn is_muted(&self) -> bool {
        matches!(self.phase, Phase::Priming | Phase::MutedLoop)
    }

    fn next_attempt(&mut self) -> Attempt {
        self.attempt = self.attempt.wrapping_add(1);
        self.attempt
    }

    /// Explicit speaker toggle. Pausing always succeeds synchronously;
    /// starting is asynchronous. A toggle while an attempt is pending is
    /// ignored, the pending settle decides.
    pub fn toggle(&mut self) -> Option<PlaybackCommand> {
        match self.phase {
            Phase::Playing => {
                self.phase = Phase::Stopped;
                // Invalidate anything still in flight.
                self.next_attempt();
                Some(PlaybackCommand::Pause)
            }
            Phase::MutedLoop => {
                // The icon reads "off" while muted, so the toggle means
                // "music on": unmute rather than pause.
                self.phase = Phase::Unmuting {
                    user_initiated: true,
                };
                Some(PlaybackCommand::BeginPlay {
                    attempt: self.next_attempt(),
                })
            }
            Phase::Stopped | Phase::Priming => {
                self.phase = Phase::Starting;
                Some(PlaybackCommand::BeginPlay {
                    attempt: self.next_attempt(),
                })
            }
            Phase::Starting | Phase::Unmuting { .. } => None,
        }
    }

    /// Startup handshake: start the loop muted to sidestep the autoplay
    /// policy. Only valid from a cold start; a failed attempt is silent.
    pub fn begin_muted_autoplay(&mut self) -> Option<PlaybackCommand> {
        if self.phase != Phase::Stopped {
            return None;
        }
        self.phase = Phase::Priming;
        Some(PlaybackCommand::BeginMutedPlay {
            attempt: self.next_attempt(),
        })
    }

    /// First confirmed page flip unmutes a muted loop. No-op otherwise.
    pub fn flip_confirmed(&mut self) -> Option<PlaybackCommand> {
        if self.phase != Phase::MutedLoop {
            return None;
        }
        self.phase = Phase::Unmuting {
            user_initiated: false,
        };
        Some(PlaybackCommand::BeginPlay {
            attempt: self.next_attempt(),
        })
    }

    /// Settle gate for promise continuations that may outlive the widget:
    /// once the mounted flag clears, the outcome is dropped without
    /// touching the machine.
    pub fn play_settled_while(
        &mut self,
        mounted: bool,
        attempt: Attempt,
        ok: bool,
    ) -> Option<Notice> {
        if !mounted {
            return None;
        }
        self.play_settled(attempt, ok)
    }

    /// Outcome of a play() promise. Settles of superseded attempts are
    /// dropped. Returns the single notice owed to the user, if any.
    pub fn play_settled(&mut self, attempt: Attempt, ok: bool) -> Option<Notice> {
        if attempt != self.attempt {
            return None;
        }
        match self.phase {
            Phase::Priming => {
                self.phase = if ok { Phase::MutedLoop } else { Phase::Stopped };
                None
            }
            Phase::Starting => {
                if ok {
                    self.phase = Phase::Playing;
                    None
                } else {
                    self.phase = Phase::Stopped;
                    Some(Notice::PlaybackBlocked)
                }
            }
            Phase::Unmuting { user_initiated } => {
                if ok {
                    self.phase = Phase::Playing;
                    None
                } else {
                    // Keep looping muted; the explicit toggle remains the
                    // recovery path.
                    self.phase = Phase::MutedLoop;
                    user_initiated.then_some(Notice::PlaybackBlocked)
                }
            }
            Phase::Stopped | Phase::MutedLoop | Phase::Playing => None,
        }
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new()
    }
}
