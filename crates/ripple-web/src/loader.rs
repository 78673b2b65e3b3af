use ripple_render::ImageRgba;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Fetch and decode the base image. Nothing else starts until this resolves.
pub async fn fetch_rgba(url: &str) -> anyhow::Result<ImageRgba> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!(format!("fetch {} failed: {:?}", url, e)))?;
    let resp: web::Response = resp
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("unexpected fetch result: {:?}", e)))?;
    if !resp.ok() {
        anyhow::bail!("fetch {} returned HTTP {}", url, resp.status());
    }
    let buf = resp
        .array_buffer()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let buf = JsFuture::from(buf)
        .await
        .map_err(|e| anyhow::anyhow!(format!("reading {} failed: {:?}", url, e)))?;
    let bytes = js_sys::Uint8Array::new(&buf).to_vec();

    let decoded = image::load_from_memory(&bytes)?.to_rgba8();
    let (width, height) = decoded.dimensions();
    log::info!("[image] {} decoded {}x{}", url, width, height);
    Ok(ImageRgba {
        width,
        height,
        pixels: decoded.into_raw(),
    })
}
