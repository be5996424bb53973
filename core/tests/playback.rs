use parapara_core::playback::{PlaybackCommand, PlaybackState};
use parapara_core::Notice;

fn attempt_of(command: PlaybackCommand) -> u32 {
    match command {
        PlaybackCommand::BeginPlay { attempt } | PlaybackCommand::BeginMutedPlay { attempt } => {
            attempt
        }
        PlaybackCommand::Pause => panic!("expected an async play command"),
    }
}

#[test]
fn toggle_settles_into_playing() {
    let mut state = PlaybackState::new();
    assert!(!state.is_playing());
    let attempt = attempt_of(state.toggle().expect("play command issued"));
    // Still pending until the promise resolves.
    assert!(!state.is_playing());
    assert_eq!(state.play_settled(attempt, true), None);
    assert!(state.is_playing());
    assert!(!state.is_muted());
}

#[test]
fn blocked_play_notifies_exactly_once() {
    let mut state = PlaybackState::new();
    let attempt = attempt_of(state.toggle().expect("play command issued"));
    assert_eq!(
        state.play_settled(attempt, false),
        Some(Notice::PlaybackBlocked)
    );
    assert!(!state.is_playing());
    // A duplicate settle of the same attempt changes nothing.
    assert_eq!(state.play_settled(attempt, false), None);
}

#[test]
fn pause_is_synchronous_and_cancels_late_settles() {
    let mut state = PlaybackState::new();
    let first = attempt_of(state.toggle().expect("play command issued"));
    state.play_settled(first, true);
    assert!(state.is_playing());

    assert_eq!(state.toggle(), Some(PlaybackCommand::Pause));
    assert!(!state.is_playing());
    // A settle of the superseded attempt must not resurrect playback.
    assert_eq!(state.play_settled(first, true), None);
    assert!(!state.is_playing());
}

#[test]
fn toggle_while_pending_is_ignored() {
    let mut state = PlaybackState::new();
    let attempt = attempt_of(state.toggle().expect("play command issued"));
    assert_eq!(state.toggle(), None);
    assert_eq!(state.play_settled(attempt, true), None);
    assert!(state.is_playing());
}

#[test]
fn muted_autoplay_unmutes_on_first_flip() {
    let mut state = PlaybackState::new();
    let priming = attempt_of(state.begin_muted_autoplay().expect("priming issued"));
    assert!(state.is_muted());
    assert_eq!(state.play_settled(priming, true), None);
    // Muted loop running: not "playing" for the UI yet.
    assert!(!state.is_playing());
    assert!(state.is_muted());

    let unmute = attempt_of(state.flip_confirmed().expect("unmute issued"));
    assert_eq!(state.play_settled(unmute, true), None);
    assert!(state.is_playing());
    assert!(!state.is_muted());

    // Later flips are no-ops for playback.
    assert_eq!(state.flip_confirmed(), None);
}

#[test]
fn failed_priming_is_silent() {
    let mut state = PlaybackState::new();
    let priming = attempt_of(state.begin_muted_autoplay().expect("priming issued"));
    assert_eq!(state.play_settled(priming, false), None);
    assert!(!state.is_playing());
    assert!(!state.is_muted());
    // The explicit toggle remains the recovery path.
    assert!(state.toggle().is_some());
}

#[test]
fn flip_triggered_unmute_failure_stays_muted_and_silent() {
    let mut state = PlaybackState::new();
    let priming = attempt_of(state.begin_muted_autoplay().expect("priming issued"));
    state.play_settled(priming, true);
    let unmute = attempt_of(state.flip_confirmed().expect("unmute issued"));
    assert_eq!(state.play_settled(unmute, false), None);
    assert!(!state.is_playing());
    assert!(state.is_muted());
}

#[test]
fn user_toggle_from_muted_loop_failure_notifies() {
    let mut state = PlaybackState::new();
    let priming = attempt_of(state.begin_muted_autoplay().expect("priming issued"));
    state.play_settled(priming, true);
    let unmute = attempt_of(state.toggle().expect("user unmute issued"));
    assert_eq!(
        state.play_settled(unmute, false),
        Some(Notice::PlaybackBlocked)
    );
    assert!(state.is_muted());
}

#[test]
fn settle_after_unmount_is_dropped() {
    let mut state = PlaybackState::new();
    let attempt = attempt_of(state.toggle().expect("play command issued"));
    // A continuation landing after the widget is gone changes nothing and
    // owes no notice.
    assert_eq!(state.play_settled_while(false, attempt, true), None);
    assert!(!state.is_playing());
    // Only the outcome was dropped; the machine itself was untouched.
    assert_eq!(
        state.play_settled_while(true, attempt, false),
        Some(Notice::PlaybackBlocked)
    );
}

#[test]
fn muted_autoplay_only_from_cold_start() {
    let mut state = PlaybackState::new();
    let attempt = attempt_of(state.toggle().expect("play command issued"));
    state.play_settled(attempt, true);
    assert_eq!(state.begin_muted_autoplay(), None);
}
