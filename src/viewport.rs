use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{DomException, Event};

use parapara_core::{Notice, ViewportCommand, ViewportState};

const GENERIC_DENIAL: &str = "the browser rejected the request";

/// Fullscreen shell. `toggle` only issues requests; the flag tracks the
/// document's `fullscreenchange` notifications, so host-level exits
/// (Escape) and rejected requests both converge without special cases.
pub(crate) struct ViewportController {
    state: Rc<RefCell<ViewportState>>,
    notice_hook: Rc<dyn Fn(Notice)>,
    _listeners: Vec<EventListener>,
}

impl ViewportController {
    pub(crate) fn mount(
        fullscreen_hook: Rc<dyn Fn(bool)>,
        notice_hook: Rc<dyn Fn(Notice)>,
    ) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let state = Rc::new(RefCell::new(ViewportState::new()));

        let change = {
            let state = state.clone();
            let document_for_query = document.clone();
            EventListener::new(&document, "fullscreenchange", move |_event: &Event| {
                let active = document_for_query.fullscreen_element().is_some();
                if state.borrow_mut().host_changed(active) {
                    fullscreen_hook(active);
                }
            })
        };
        let error = {
            let notice_hook = notice_hook.clone();
            // Asynchronous denials report here; the event carries no reason.
            EventListener::new(&document, "fullscreenerror", move |_event: &Event| {
                notice_hook(Notice::FullscreenDenied {
                    reason: GENERIC_DENIAL.to_string(),
                });
            })
        };

        Some(Self {
            state,
            notice_hook,
            _listeners: vec![change, error],
        })
    }

    pub(crate) fn toggle(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        let command = self.state.borrow().toggle();
        match command {
            ViewportCommand::EnterFullscreen => {
                let Some(root) = document.document_element() else {
                    return;
                };
                if let Err(err) = root.request_fullscreen() {
                    (self.notice_hook)(Notice::FullscreenDenied {
                        reason: denial_reason(&err),
                    });
                }
            }
            ViewportCommand::ExitFullscreen => document.exit_fullscreen(),
        }
    }
}

fn denial_reason(err: &JsValue) -> String {
    err.dyn_ref::<DomException>()
        .map(|exception| exception.message())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| GENERIC_DENIAL.to_string())
}
