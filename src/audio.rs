use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlAudioElement;

use parapara_core::playback::{Attempt, PlaybackCommand, PlaybackState};
use parapara_core::{AlbumConfig, Notice};

/// Shell around the looping background track plus the one-shot turn sound.
/// All decisions live in [`PlaybackState`]; this type only executes its
/// commands against the media element and feeds promise outcomes back.
pub(crate) struct AudioController {
    music: Option<HtmlAudioElement>,
    turn_src: String,
    state: RefCell<PlaybackState>,
    mounted: Rc<Cell<bool>>,
    notice_hook: Rc<dyn Fn(Notice)>,
    playing_hook: Rc<dyn Fn(bool)>,
}

impl AudioController {
    pub(crate) fn mount(
        config: &AlbumConfig,
        mounted: Rc<Cell<bool>>,
        notice_hook: Rc<dyn Fn(Notice)>,
        playing_hook: Rc<dyn Fn(bool)>,
    ) -> Rc<Self> {
        let music = HtmlAudioElement::new_with_src(&config.music_src).ok();
        if let Some(element) = music.as_ref() {
            element.set_loop(true);
        }
        let controller = Rc::new(Self {
            music,
            turn_src: config.turn_sound_src.clone(),
            state: RefCell::new(PlaybackState::new()),
            mounted,
            notice_hook,
            playing_hook,
        });
        if config.muted_autoplay {
            let command = controller.state.borrow_mut().begin_muted_autoplay();
            if let Some(command) = command {
                controller.run(command);
            }
        }
        controller
    }

    /// Speaker button. Pausing is synchronous; starting settles through the
    /// play() promise and never throws into the caller.
    pub(crate) fn toggle_music(self: &Rc<Self>) {
        let command = self.state.borrow_mut().toggle();
        if let Some(command) = command {
            self.run(command);
        }
    }

    /// One confirmed page flip: one turn sound, plus the muted-autoplay
    /// unmute handshake when armed.
    pub(crate) fn flip_confirmed(self: &Rc<Self>) {
        self.play_turn_sound();
        let command = self.state.borrow_mut().flip_confirmed();
        if let Some(command) = command {
            self.run(command);
        }
    }

    /// Fire-and-forget. A fresh element per call so rapid flips overlap
    /// instead of cutting each other off; the awaited-and-dropped promise
    /// keeps a blocked sound from surfacing as an unhandled rejection.
    pub(crate) fn play_turn_sound(&self) {
        let Ok(sound) = HtmlAudioElement::new_with_src(&self.turn_src) else {
            return;
        };
        if let Ok(promise) = sound.play() {
            spawn_local(async move {
                let _ = JsFuture::from(promise).await;
            });
        }
    }

    pub(crate) fn unmount(&self) {
        if let Some(element) = self.music.as_ref() {
            let _ = element.pause();
        }
    }

    fn run(self: &Rc<Self>, command: PlaybackCommand) {
        match command {
            PlaybackCommand::Pause => {
                if let Some(element) = self.music.as_ref() {
                    let _ = element.pause();
                }
                self.publish();
            }
            PlaybackCommand::BeginPlay { attempt } => match self.music.as_ref() {
                Some(element) => {
                    element.set_muted(false);
                    self.start_play(attempt);
                }
                None => self.settle(attempt, false),
            },
            PlaybackCommand::BeginMutedPlay { attempt } => match self.music.as_ref() {
                Some(element) => {
                    element.set_muted(true);
                    self.start_play(attempt);
                }
                None => self.settle(attempt, false),
            },
        }
    }

    fn start_play(self: &Rc<Self>, attempt: Attempt) {
        let Some(element) = self.music.clone() else {
            return;
        };
        match element.play() {
            Ok(promise) => {
                let controller = self.clone();
                spawn_local(async move {
                    let ok = JsFuture::from(promise).await.is_ok();
                    controller.settle(attempt, ok);
                });
            }
            Err(_) => self.settle(attempt, false),
        }
    }

    fn settle(self: &Rc<Self>, attempt: Attempt, ok: bool) {
        let mounted = self.mounted.get();
        let notice = self
            .state
            .borrow_mut()
            .play_settled_while(mounted, attempt, ok);
        if !mounted {
            return;
        }
        // Converge the element with the machine: a failed unmute falls back
        // to the muted loop.
        if let Some(element) = self.music.as_ref() {
            element.set_muted(self.state.borrow().is_muted());
        }
        self.publish();
        if let Some(notice) = notice {
            (self.notice_hook)(notice);
        }
    }

    fn publish(&self) {
        (self.playing_hook)(self.state.borrow().is_playing());
    }
}
