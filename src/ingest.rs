use std::cell::RefCell;
use std::rc::Rc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use gloo::timers::callback::Interval;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{File, HtmlImageElement};

use photo_playground_core::frame::FrameModel;

const DIMENSION_POLL_MS: u32 = 10;
const FALLBACK_MIME: &str = "application/octet-stream";

pub(crate) async fn read_file_bytes(file: File) -> Result<Vec<u8>, String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| "failed to read file".to_string())?;
    let array = js_sys::Uint8Array::new(&buffer);
    Ok(array.to_vec())
}

pub(crate) fn data_uri(bytes: &[u8], mime: &str) -> String {
    let mime = if mime.trim().is_empty() {
        FALLBACK_MIME
    } else {
        mime
    };
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

pub(crate) fn load_photo(
    file: File,
    id: String,
    model: Rc<RefCell<FrameModel>>,
    refresh: Rc<dyn Fn()>,
) {
    watch_dimensions(id.clone(), model.clone(), refresh.clone());
    spawn_local(async move {
        match read_file_bytes(file.clone()).await {
            Ok(bytes) => {
                let uri = data_uri(&bytes, &file.type_());
                if model.borrow_mut().set_src(&id, uri) {
                    refresh();
                }
            }
            Err(error) => {
                gloo::console::error!("photo ingest: read failed", error);
            }
        }
    });
}

// Decode completion and layout readiness are separate events, so natural
// dimensions are polled until they appear. The poll cancels itself after the
// one-shot classification, or once the photo is gone.
pub(crate) fn watch_dimensions(
    id: String,
    model: Rc<RefCell<FrameModel>>,
    refresh: Rc<dyn Fn()>,
) {
    let handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let slot = handle.clone();
    *handle.borrow_mut() = Some(Interval::new(DIMENSION_POLL_MS, move || {
        if model.borrow().photo(&id).is_none() {
            slot.borrow_mut().take();
            return;
        }
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return;
        };
        let Some(element) = document.get_element_by_id(&id) else {
            return;
        };
        let Ok(image) = element.dyn_into::<HtmlImageElement>() else {
            return;
        };
        let width = image.natural_width();
        let height = image.natural_height();
        if height == 0 {
            return;
        }
        if model.borrow_mut().classify(&id, width, height) {
            refresh();
        }
        slot.borrow_mut().take();
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn data_uri_carries_mime_and_payload() {
        assert_eq!(data_uri(b"abc", "image/png"), "data:image/png;base64,YWJj");
    }

    #[wasm_bindgen_test]
    fn data_uri_falls_back_for_missing_mime() {
        assert_eq!(
            data_uri(b"abc", "  "),
            "data:application/octet-stream;base64,YWJj"
        );
    }
}
