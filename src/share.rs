use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen_futures::{spawn_local, JsFuture};

use parapara_core::{clipboard_settled, Notice};

pub(crate) fn current_share_url() -> Option<String> {
    web_sys::window()?.location().href().ok()
}

/// Copies the current address to the host clipboard. Exactly one notice per
/// invocation: `LinkCopied` on the resolved write, `CopyFailed` otherwise.
/// The continuation is abandoned once the widget unmounts.
pub(crate) fn copy_share_link(mounted: Rc<Cell<bool>>, notice_hook: Rc<dyn Fn(Notice)>) {
    let Some(window) = web_sys::window() else {
        notice_hook(Notice::CopyFailed);
        return;
    };
    let Ok(href) = window.location().href() else {
        notice_hook(Notice::CopyFailed);
        return;
    };
    let promise = window.navigator().clipboard().write_text(&href);
    spawn_local(async move {
        let ok = JsFuture::from(promise).await.is_ok();
        if let Some(notice) = clipboard_settled(mounted.get(), ok) {
            notice_hook(notice);
        }
    });
}
