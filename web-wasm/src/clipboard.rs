//! Clipboard access via navigator.clipboard

use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "/js/clipboard.js")]
extern "C" {
    #[wasm_bindgen(js_name = "copyText", catch)]
    async fn copy_text_js(text: &str) -> Result<JsValue, JsValue>;
}

pub async fn copy_text(text: &str) -> Result<(), String> {
    copy_text_js(text)
        .await
        .map(|_| ())
        .map_err(|e| format!("copy failed: {:?}", e))
}
