//! Timer and animation-frame futures for UI glue.
//!
//! wasm32 uses browser timers and `requestAnimationFrame`; native builds
//! sleep on tokio.

/// Roughly one frame at 60 Hz, for targets without a frame callback.
#[cfg(not(target_arch = "wasm32"))]
const FRAME_MS: u64 = 16;

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms.min(u32::MAX as u64) as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

/// Resolves after the browser has rendered the next frame.
///
/// Dropping the future before the frame fires withdraws the
/// `requestAnimationFrame` registration.
#[cfg(target_arch = "wasm32")]
pub async fn next_frame() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let mut handle = None;
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        match window.request_animation_frame(&resolve) {
            Ok(id) => handle = Some(id),
            Err(_) => {
                let _ = resolve.call0(&wasm_bindgen::JsValue::NULL);
            }
        }
    });
    let mut request = FrameRequest { window, handle };
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
    request.handle = None;
}

/// Pending animation-frame registration, cancelled on drop.
#[cfg(target_arch = "wasm32")]
struct FrameRequest {
    window: web_sys::Window,
    handle: Option<i32>,
}

#[cfg(target_arch = "wasm32")]
impl Drop for FrameRequest {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = self.window.cancel_animation_frame(handle);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn next_frame() {
    sleep_ms(FRAME_MS).await;
}
