// =============================================================================
// USDZ Web - Main Library Entry Point
// =============================================================================
// Table of Contents:
// 1. Module Declarations
// 2. Re-exports
// 3. WASM Entry Point
// =============================================================================

// -----------------------------------------------------------------------------
// 1. Module Declarations
// -----------------------------------------------------------------------------

pub mod app;
pub mod assembler;
pub mod dropzone;
pub mod elements;
pub mod error;
pub mod form;
pub mod picker;
pub mod template;
pub mod upload;
pub mod utils;

// -----------------------------------------------------------------------------
// 2. Re-exports
// -----------------------------------------------------------------------------

pub use elements::ElementRegistry;
pub use error::{DomError, StartupError, UploadError};
pub use form::MaterialForm;

// -----------------------------------------------------------------------------
// 3. WASM Entry Point (for library usage)
// -----------------------------------------------------------------------------

use wasm_bindgen::prelude::*;

/// Bring up the texture map form on the current page (for external callers).
#[wasm_bindgen]
pub fn mount() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("Mounting USDZ material form...");
    app::start();
}
