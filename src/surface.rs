use std::rc::Rc;

use js_sys::{Function, Object, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

use parapara_core::SurfaceConfig;

/// Global installed by the host page (index.html) wrapping the page-flip
/// library. The widget only ever talks to this object: imperative flip
/// commands in, flip-completed notifications out. Flip physics, gestures
/// and curl rendering all live on the other side of this boundary.
const SURFACE_GLOBAL: &str = "PAGE_FLIP_SURFACE";

fn with_surface<F: FnOnce(&Object)>(action: F) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(value) = Reflect::get(&window, &JsValue::from_str(SURFACE_GLOBAL)) else {
        return;
    };
    if value.is_null() || value.is_undefined() {
        return;
    }
    let Ok(obj) = value.dyn_into::<Object>() else {
        return;
    };
    action(&obj);
}

fn call(method: &str, args: &[JsValue]) {
    with_surface(|surface| {
        let Ok(value) = Reflect::get(surface, &JsValue::from_str(method)) else {
            return;
        };
        let Ok(func) = value.dyn_into::<Function>() else {
            return;
        };
        let array = js_sys::Array::new();
        for arg in args {
            array.push(arg);
        }
        let _ = func.apply(surface, &array);
    });
}

fn set_number(target: &Object, key: &str, value: f64) {
    let _ = Reflect::set(target, &JsValue::from_str(key), &JsValue::from_f64(value));
}

fn set_bool(target: &Object, key: &str, value: bool) {
    let _ = Reflect::set(target, &JsValue::from_str(key), &JsValue::from_bool(value));
}

fn surface_config_js(config: &SurfaceConfig) -> JsValue {
    let obj = Object::new();
    set_number(&obj, "width", config.width as f64);
    set_number(&obj, "height", config.height as f64);
    set_number(&obj, "minWidth", config.min_width as f64);
    set_number(&obj, "maxWidth", config.max_width as f64);
    set_number(&obj, "minHeight", config.min_height as f64);
    set_number(&obj, "maxHeight", config.max_height as f64);
    set_bool(&obj, "showCover", config.show_cover);
    set_bool(&obj, "mobileScrollSupport", config.mobile_scroll);
    obj.into()
}

/// Owning handle for the widget's side of the surface boundary. Keeps the
/// flip callback closure alive for the mounted lifetime.
pub(crate) struct SurfaceHandle {
    on_flip: Option<Closure<dyn FnMut(f64)>>,
}

impl SurfaceHandle {
    pub(crate) fn new() -> Self {
        Self { on_flip: None }
    }

    pub(crate) fn init(
        &mut self,
        container: &Element,
        config: &SurfaceConfig,
        on_flip: Rc<dyn Fn(usize)>,
    ) {
        let closure = Closure::wrap(Box::new(move |index: f64| {
            if index.is_finite() && index >= 0.0 {
                on_flip(index as usize);
            }
        }) as Box<dyn FnMut(f64)>);
        with_surface(|surface| {
            let _ = Reflect::set(surface, &JsValue::from_str("onFlip"), closure.as_ref());
        });
        self.on_flip = Some(closure);
        call(
            "init",
            &[JsValue::from(container.clone()), surface_config_js(config)],
        );
    }

    pub(crate) fn flip_previous(&self) {
        call("flipPrev", &[]);
    }

    pub(crate) fn flip_next(&self) {
        call("flipNext", &[]);
    }

    pub(crate) fn shutdown(&mut self) {
        call("destroy", &[]);
        with_surface(|surface| {
            let _ = Reflect::set(surface, &JsValue::from_str("onFlip"), &JsValue::NULL);
        });
        self.on_flip = None;
    }
}
