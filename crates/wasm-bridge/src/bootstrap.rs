//! Page-level LiveView bootstrap
//!
//! Reads the CSRF token rendered by the server, registers the chart hook
//! under its configured name and connects the LiveSocket. This runs once per
//! page and is independent of any chart binding.

use chart_hook_shared::{HookConfig, HookError, HookResult};
use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::hook::ChartHook;
use crate::wrappers::js::{document, interop_error};

#[wasm_bindgen(inline_js = r#"
export function lifecycle_callbacks(mount) {
  return {
    mounted() {
      this.__chartHook = mount(this.el);
    },
    updated() {
      if (this.__chartHook) {
        this.__chartHook.updated();
      }
    },
    destroyed() {
      if (this.__chartHook) {
        this.__chartHook.destroyed();
        this.__chartHook.free();
        this.__chartHook = undefined;
      }
    },
  };
}
"#)]
extern "C" {
    fn lifecycle_callbacks(mount: &Function) -> Object;
}

/// Content of the `csrf-token` meta tag
pub fn read_csrf_token(document: &Document) -> HookResult<String> {
    let meta = document
        .query_selector("meta[name='csrf-token']")
        .map_err(|err| interop_error("querySelector", &err))?
        .ok_or(HookError::MissingCsrfToken)?;

    meta.get_attribute("content")
        .ok_or(HookError::MissingCsrfToken)
}

/// `{ [hook_name]: { mounted, updated, destroyed } }` for the LiveSocket `hooks` option
pub fn hooks_object(config: &HookConfig) -> HookResult<Object> {
    let mount = Closure::<dyn Fn(Element) -> JsValue>::new(|element: Element| {
        JsValue::from(ChartHook::new(element))
    });
    // Callbacks stay registered for the lifetime of the page.
    let mount: Function = mount.into_js_value().unchecked_into();

    let hooks = Object::new();
    set(&hooks, &config.hook_name, &lifecycle_callbacks(&mount))?;
    Ok(hooks)
}

/// Construct and connect `new LiveSocket(path, Socket, { hooks, params })`.
///
/// The constructors come from the page entry module since `phoenix` and
/// `phoenix_live_view` are resolved by the page's bundler.
pub fn connect_live_socket(
    live_socket_class: &Function,
    socket_class: &JsValue,
    config: &HookConfig,
) -> HookResult<JsValue> {
    let document = document()?;
    let csrf_token = read_csrf_token(&document)?;

    let params = Object::new();
    set(&params, "_csrf_token", &JsValue::from_str(&csrf_token))?;

    let options = Object::new();
    let hooks = hooks_object(config)?;
    set(&options, "hooks", &hooks)?;
    set(&options, "params", &params)?;

    let args = Array::of3(
        &JsValue::from_str(&config.socket_path),
        socket_class,
        &options,
    );
    let live_socket = Reflect::construct(live_socket_class, &args)
        .map_err(|err| interop_error("new LiveSocket()", &err))?;

    let connect: Function = Reflect::get(&live_socket, &JsValue::from_str("connect"))
        .map_err(|err| interop_error("LiveSocket.connect", &err))?
        .dyn_into()
        .map_err(|_| HookError::JsInterop {
            message: "LiveSocket.connect is not a function".to_string(),
        })?;
    connect
        .call0(&live_socket)
        .map_err(|err| interop_error("LiveSocket.connect()", &err))?;

    // Exposed for console debugging, as the stock app.js does.
    if let Some(window) = web_sys::window() {
        set(&window, "liveSocket", &live_socket)?;
    }

    log::info!(
        "LiveSocket connected on {} with hook {}",
        config.socket_path,
        config.hook_name
    );
    Ok(live_socket)
}

fn set(target: &JsValue, key: &str, value: &JsValue) -> HookResult<()> {
    Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(|err| interop_error(key, &err))
}
