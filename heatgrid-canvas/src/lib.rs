pub mod canvas_utils;
pub mod surface;

pub use canvas_utils::get_2d_context;
pub use surface::{render_to_canvas, CanvasPath, CanvasSurface};

/// Route `log` output to the browser console and install the panic hook.
///
/// Call once at application startup; repeat calls are harmless.
pub fn init_console_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
}
