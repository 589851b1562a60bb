//! Local file handling for image attachment.
//!
//! The preview is produced by reading the picked `File` into a data URL
//! (no network round-trip), and the same `File` handle is what the upload
//! step later sends, so preview and submitted bytes cannot diverge.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::FileReader;

pub fn is_image(file: &web_sys::File) -> bool {
    file.type_().starts_with("image/")
}

/// Read a file into a `data:` URL suitable for an `<img src>`.
pub async fn read_as_data_url(file: &web_sys::File) -> Result<String, String> {
    let reader = FileReader::new().map_err(|e| format!("{e:?}"))?;
    let (tx, rx) = oneshot::channel::<Result<String, String>>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let onload = Closure::once({
        let tx = tx.clone();
        let reader = reader.clone();
        move || {
            if let Some(tx) = tx.borrow_mut().take() {
                let result = reader
                    .result()
                    .ok()
                    .and_then(|v| v.as_string())
                    .ok_or_else(|| "could not read file".to_string());
                let _ = tx.send(result);
            }
        }
    });
    let onerror = Closure::once({
        let tx = tx.clone();
        move || {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(Err("could not read file".to_string()));
            }
        }
    });

    reader.set_onload(Some(onload.as_ref().unchecked_ref::<js_sys::Function>()));
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref::<js_sys::Function>()));
    // One leaked closure pair per picked file; the reader drops them with itself.
    onload.forget();
    onerror.forget();

    reader
        .read_as_data_url(file)
        .map_err(|e| format!("{e:?}"))?;

    rx.await.map_err(|_| "file read aborted".to_string())?
}
