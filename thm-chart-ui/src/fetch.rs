//! Runtime download of the daily temperature CSV.
//!
//! Used when no data was embedded at build time. URLs ending in `.gz` are
//! gunzipped after download.

use flate2::read::GzDecoder;
use std::io::Read;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Fetch `url` relative to the page and return the body as text.
pub async fn fetch_csv(url: &str) -> Result<String, String> {
    let window = web_sys::window().ok_or("no window")?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| format!("fetch {} failed: {:?}", url, e))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| "fetch did not return a Response".to_string())?;
    if !response.ok() {
        return Err(format!("fetch {} failed: HTTP {}", url, response.status()));
    }

    if url.ends_with(".gz") {
        let buffer = JsFuture::from(response.array_buffer().map_err(|e| format!("{:?}", e))?)
            .await
            .map_err(|e| format!("reading {} failed: {:?}", url, e))?;
        let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
        gunzip(&bytes)
    } else {
        let text = JsFuture::from(response.text().map_err(|e| format!("{:?}", e))?)
            .await
            .map_err(|e| format!("reading {} failed: {:?}", url, e))?;
        text.as_string()
            .ok_or_else(|| format!("{} body is not text", url))
    }
}

fn gunzip(bytes: &[u8]) -> Result<String, String> {
    let mut csv = String::new();
    GzDecoder::new(bytes)
        .read_to_string(&mut csv)
        .map_err(|e| format!("gzip decode failed: {}", e))?;
    Ok(csv)
}
