use chart_hook_shared::HookError;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Document;

/// Best-effort human readable text for a thrown JavaScript value
pub fn js_error_message(err: &JsValue) -> String {
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// Error raised by a JavaScript call, as a hook error
pub fn interop_error(context: &str, err: &JsValue) -> HookError {
    HookError::JsInterop {
        message: format!("{context}: {}", js_error_message(err)),
    }
}

/// Hook error as a JavaScript `Error` carrying the serialized error
pub fn to_js_error(err: &HookError) -> JsValue {
    js_sys::Error::new(&err.to_json()).into()
}

pub fn document() -> Result<Document, HookError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| HookError::JsInterop {
            message: "no global document available".to_string(),
        })
}
