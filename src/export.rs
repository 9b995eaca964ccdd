use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    CanvasRenderingContext2d, Document, HtmlAnchorElement, HtmlCanvasElement, HtmlElement,
    HtmlImageElement,
};

pub(crate) const EXPORT_FILE_NAME: &str = "photo frame.png";
const FRAME_BACKGROUND: &str = "#ffffff";

pub(crate) fn download_frame(frame: &HtmlElement) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| "missing document".to_string())?;
    let canvas = rasterize_frame(&document, frame).map_err(js_err)?;
    let data_url = canvas.to_data_url_with_type("image/png").map_err(js_err)?;
    trigger_download(&document, &data_url).map_err(js_err)
}

fn rasterize_frame(
    document: &Document,
    frame: &HtmlElement,
) -> Result<HtmlCanvasElement, JsValue> {
    let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    let width = frame.offset_width().max(1) as u32;
    let height = frame.offset_height().max(1) as u32;
    canvas.set_width(width);
    canvas.set_height(height);
    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;
    context.set_fill_style_str(FRAME_BACKGROUND);
    context.fill_rect(0.0, 0.0, width as f64, height as f64);

    // DOM order is paint order.
    let photos = frame.query_selector_all("img.img")?;
    for index in 0..photos.length() {
        let Some(node) = photos.item(index) else {
            continue;
        };
        let Ok(image) = node.dyn_into::<HtmlImageElement>() else {
            continue;
        };
        context.draw_image_with_html_image_element_and_dw_and_dh(
            &image,
            image.offset_left() as f64,
            image.offset_top() as f64,
            image.client_width().max(0) as f64,
            image.client_height().max(0) as f64,
        )?;
    }

    if let Some(overlay) = frame.query_selector(".overlay:not(.off)")? {
        if let Ok(image) = overlay.dyn_into::<HtmlImageElement>() {
            context.draw_image_with_html_image_element_and_dw_and_dh(
                &image,
                0.0,
                0.0,
                width as f64,
                height as f64,
            )?;
        }
    }
    Ok(canvas)
}

fn trigger_download(document: &Document, data_url: &str) -> Result<(), JsValue> {
    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(data_url);
    anchor.set_download(EXPORT_FILE_NAME);
    anchor.style().set_property("display", "none")?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("missing body"))?;
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    Ok(())
}

fn js_err(error: JsValue) -> String {
    if let Some(value) = error.as_string() {
        return value;
    }
    if let Ok(json) = js_sys::JSON::stringify(&error) {
        if let Some(value) = json.as_string() {
            return value;
        }
    }
    "js error".to_string()
}
