//! FileReader を Future として扱う

use futures::channel::oneshot;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{File, FileReader, ProgressEvent};

type Sender = Rc<RefCell<Option<oneshot::Sender<Result<String, JsValue>>>>>;

/// ファイルを data URL として読み込む
pub async fn read_as_data_url(file: &File) -> Result<String, JsValue> {
    let reader = FileReader::new()?;
    let (tx, rx) = oneshot::channel();
    let tx: Sender = Rc::new(RefCell::new(Some(tx)));

    let onload = {
        let reader = reader.clone();
        let tx = tx.clone();
        Closure::wrap(Box::new(move |_: ProgressEvent| {
            let result = reader.result().and_then(|value| {
                value
                    .as_string()
                    .ok_or_else(|| JsValue::from_str("FileReader result is not a string"))
            });
            send(&tx, result);
        }) as Box<dyn FnMut(_)>)
    };

    let onerror = {
        let tx = tx.clone();
        Closure::wrap(Box::new(move |_: ProgressEvent| {
            send(&tx, Err(JsValue::from_str("FileReader failed")));
        }) as Box<dyn FnMut(_)>)
    };

    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    reader.read_as_data_url(file)?;

    let result = rx
        .await
        .unwrap_or_else(|_| Err(JsValue::from_str("FileReader dropped")));

    reader.set_onload(None);
    reader.set_onerror(None);
    drop(onload);
    drop(onerror);
    result
}

fn send(tx: &Sender, result: Result<String, JsValue>) {
    if let Some(tx) = tx.borrow_mut().take() {
        let _ = tx.send(result);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_read_as_data_url() {
        let parts = js_sys::Array::of1(&JsValue::from_str("hello"));
        let file = File::new_with_str_sequence(&parts, "hello.txt").unwrap();
        let url = read_as_data_url(&file).await.unwrap();
        assert!(url.starts_with("data:"));
        assert!(url.ends_with("base64,aGVsbG8="));
    }
}
