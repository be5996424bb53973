use std::cell::Cell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Event, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::audio::AudioController;
use crate::share;
use crate::surface::SurfaceHandle;
use crate::viewport::ViewportController;
use parapara_core::{
    command_for_key, page_assets, AlbumConfig, NavCommand, NavigatorState, Notice, PageAsset,
};

#[derive(Clone, Default, PartialEq, Properties)]
pub(crate) struct AppProps {
    #[prop_or_default]
    pub(crate) config: AlbumConfig,
}

fn render_page(asset: &PageAsset) -> Html {
    html! {
        <div class="page" key={asset.index}>
            <div class="page-content">
                <div class="page-image">
                    <img src={asset.image_src.clone()} alt={format!("Page {}", asset.number)} />
                </div>
                <div class="page-footer">{ asset.number }</div>
            </div>
        </div>
    }
}

#[function_component(App)]
pub(crate) fn app(props: &AppProps) -> Html {
    let config = props.config.clone();
    let total_pages = config.total_pages;

    let current_page = use_state(|| 0usize);
    let is_open = use_state(|| false);
    let music_playing = use_state(|| false);
    let fullscreen = use_state(|| false);
    let notice = use_state(|| None::<Notice>);

    let navigator = use_mut_ref(|| NavigatorState::new(total_pages));
    let surface = use_mut_ref(SurfaceHandle::new);
    let audio = use_mut_ref(|| None::<Rc<AudioController>>);
    let viewport = use_mut_ref(|| None::<ViewportController>);
    // Cleared by the unmount cleanup; every async continuation checks it
    // before touching state.
    let mounted: Rc<Cell<bool>> = use_memo((), |_| Cell::new(true));
    let book_ref = use_node_ref();

    {
        let config = config.clone();
        let navigator = navigator.clone();
        let surface = surface.clone();
        let audio = audio.clone();
        let viewport = viewport.clone();
        let current_page = current_page.clone();
        let is_open = is_open.clone();
        let music_playing = music_playing.clone();
        let fullscreen = fullscreen.clone();
        let notice = notice.clone();
        let mounted = mounted.clone();
        let book_ref = book_ref.clone();
        use_effect_with((), move |_| {
            let notice_hook: Rc<dyn Fn(Notice)> = {
                let notice = notice.clone();
                Rc::new(move |value| notice.set(Some(value)))
            };
            let playing_hook: Rc<dyn Fn(bool)> = {
                let music_playing = music_playing.clone();
                Rc::new(move |value| music_playing.set(value))
            };
            let controller = AudioController::mount(
                &config,
                mounted.clone(),
                notice_hook.clone(),
                playing_hook,
            );
            *audio.borrow_mut() = Some(controller.clone());

            let fullscreen_hook: Rc<dyn Fn(bool)> = {
                let fullscreen = fullscreen.clone();
                Rc::new(move |active| fullscreen.set(active))
            };
            *viewport.borrow_mut() = ViewportController::mount(fullscreen_hook, notice_hook);

            // The surface confirms flips; input handlers only request them.
            let on_flip: Rc<dyn Fn(usize)> = {
                let navigator = navigator.clone();
                let current_page = current_page.clone();
                let is_open = is_open.clone();
                Rc::new(move |new_index| {
                    let flip = navigator.borrow_mut().flip_completed(new_index);
                    if let Some(flip) = flip {
                        current_page.set(flip.to);
                        is_open.set(flip.is_open);
                        controller.flip_confirmed();
                    }
                })
            };
            if let Some(container) = book_ref.cast::<web_sys::Element>() {
                surface.borrow_mut().init(&container, &config.surface, on_flip);
            }

            let keyboard = {
                let navigator = navigator.clone();
                let surface = surface.clone();
                web_sys::window().map(|window| {
                    EventListener::new(&window, "keydown", move |event: &Event| {
                        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                            return;
                        };
                        if event.repeat() {
                            return;
                        }
                        let Some(command) = command_for_key(&event.key()) else {
                            return;
                        };
                        let request = navigator.borrow().request(command);
                        match request {
                            Some(NavCommand::Previous) => surface.borrow().flip_previous(),
                            Some(NavCommand::Next) => surface.borrow().flip_next(),
                            None => {}
                        }
                    })
                })
            };

            gloo::console::log!("parapara: mounted");

            move || {
                mounted.set(false);
                drop(keyboard);
                if let Some(controller) = audio.borrow_mut().take() {
                    controller.unmount();
                }
                viewport.borrow_mut().take();
                surface.borrow_mut().shutdown();
                gloo::console::log!("parapara: unmounted");
            }
        });
    }

    let on_music_toggle = {
        let audio = audio.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(controller) = audio.borrow().as_ref() {
                controller.toggle_music();
            }
        })
    };
    let on_share = {
        let mounted = mounted.clone();
        let notice = notice.clone();
        Callback::from(move |_: MouseEvent| {
            let notice = notice.clone();
            share::copy_share_link(
                mounted.clone(),
                Rc::new(move |value| notice.set(Some(value))),
            );
        })
    };
    let on_fullscreen_toggle = {
        let viewport = viewport.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(controller) = viewport.borrow().as_ref() {
                controller.toggle();
            }
        })
    };
    let on_notice_dismiss = {
        let notice = notice.clone();
        Callback::from(move |_: MouseEvent| notice.set(None))
    };

    let pages: Html = page_assets(&config).iter().map(render_page).collect();
    let music_icon = if *music_playing { "\u{1F50A}" } else { "\u{1F508}" };
    let fullscreen_icon = if *fullscreen { "\u{2199}" } else { "\u{26F6}" };
    let page_label = format!("{} / {}", *current_page + 1, total_pages);
    let wrapper_class = classes!("flipbook", (*is_open).then_some("flipbook-open"));

    html! {
        <div class={wrapper_class}>
            <header class="album-header">
                <h1>{ config.title.clone() }</h1>
            </header>
            { if let Some(value) = (*notice).clone() {
                html! {
                    <div
                        class={classes!("notice", value.severity())}
                        role="status"
                        onclick={on_notice_dismiss}
                    >
                        { value.to_string() }
                    </div>
                }
            } else {
                html! {}
            }}
            <div class="flipbook-center">
                <div class="album-book" ref={book_ref}>
                    { pages }
                </div>
            </div>
            <div class="flipbook-toolbar">
                <button
                    class="toolbar-button"
                    title="Background music"
                    onclick={on_music_toggle}
                >
                    { music_icon }
                </button>
                <button
                    class="toolbar-button"
                    title="Copy share link"
                    onclick={on_share}
                >
                    { "\u{1F4E4}" }
                </button>
                <button
                    class="toolbar-button"
                    title="Fullscreen"
                    onclick={on_fullscreen_toggle}
                >
                    { fullscreen_icon }
                </button>
                <span class="page-indicator">{ page_label }</span>
            </div>
        </div>
    }
}
