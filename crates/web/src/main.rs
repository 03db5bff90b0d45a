// =============================================================================
// USDZ Web - WASM Entry Point
// =============================================================================
// Trunk compiles this and injects it into the conversion server's index page.
// =============================================================================

fn main() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logger (ignore if already initialized by mount())
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Starting USDZ material form...");

    usdz_web::app::start();
}
