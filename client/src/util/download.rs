//! Browser file downloads for generated models.
//!
//! The download endpoint needs a bearer token, so a plain link cannot fetch
//! it. Bytes are fetched through the API, wrapped in a `Blob`, and handed to a
//! temporary `<a download>` element.

use crate::net::api;

/// Fetch `model_id` and save it as `filename`.
///
/// # Errors
///
/// Returns the display message from the API or `"Failed to download model"`
/// when the browser refuses the blob.
pub async fn download_model(token: &str, model_id: &str, filename: &str) -> Result<(), String> {
    let bytes = api::download_model(token, model_id).await?;
    save_bytes(&bytes, filename).map_err(|e| {
        #[cfg(feature = "hydrate")]
        log::warn!("download: saving {filename} failed: {e}");
        #[cfg(not(feature = "hydrate"))]
        let _ = e;
        api::DOWNLOAD_FAILED.to_owned()
    })
}

fn save_bytes(bytes: &[u8], filename: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let array = js_sys::Uint8Array::from(bytes);
        let parts = js_sys::Array::of1(&array);
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("application/json");
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(|e| format!("{e:?}"))?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|e| format!("{e:?}"))?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| "no document".to_owned())?;
        let anchor = document
            .create_element("a")
            .map_err(|e| format!("{e:?}"))?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| "anchor cast failed".to_owned())?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        let body = document.body().ok_or_else(|| "no body".to_owned())?;
        body.append_child(&anchor).map_err(|e| format!("{e:?}"))?;
        anchor.click();
        anchor.remove();
        web_sys::Url::revoke_object_url(&url).map_err(|e| format!("{e:?}"))?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (bytes, filename);
        Err("not available on server".to_owned())
    }
}
