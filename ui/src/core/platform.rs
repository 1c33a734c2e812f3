//! Platform glue for async work kicked off from UI callbacks.

#[cfg(target_arch = "wasm32")]
pub fn spawn_future<F>(future: F)
where
    F: std::future::Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}
