//! File input helpers

use blog_core::api::ImageUpload;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// First file selected in the `<input type="file">` that fired `ev`.
pub fn selected_file(ev: &web_sys::Event) -> Option<web_sys::File> {
    let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
    input.files()?.get(0)
}

/// Read a picked file into an upload payload.
pub async fn read_upload(file: &web_sys::File) -> Result<ImageUpload, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("could not read {}: {:?}", file.name(), e))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    let mime = match file.type_() {
        t if t.is_empty() => "application/octet-stream".to_string(),
        t => t,
    };
    Ok(ImageUpload {
        file_name: file.name(),
        mime,
        bytes,
    })
}

/// Object URL for showing a local preview before upload.
pub fn object_url(file: &web_sys::File) -> Option<String> {
    web_sys::Url::create_object_url_with_blob(file).ok()
}
