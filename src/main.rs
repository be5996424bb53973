mod audio;
mod boot;
mod share;
mod surface;
mod viewport;
mod yew_app;

use yew_app::{App, AppProps};

fn main() {
    console_error_panic_hook::set_once();
    let config = boot::load_album_config();
    gloo::console::log!("parapara: boot", format!("{} pages", config.total_pages));
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
