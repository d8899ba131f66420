#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use tonal_store::runtime::native;

    native::setup_logger();
    if let Err(e) = native::start() {
        log::error!("Failed to start audio: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}
