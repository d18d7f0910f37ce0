//! Debug helpers: env-gated tracing and ASCII rendering of a module grid

use crate::models::ModuleGrid;
use std::sync::OnceLock;

static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

pub(crate) fn debug_enabled() -> bool {
    *DEBUG_ENABLED.get_or_init(|| std::env::var("LABEL_QR_DEBUG").is_ok())
}

/// Render the grid as ASCII art, two characters per module (dark = `##`)
pub fn grid_to_ascii(grid: &ModuleGrid) -> String {
    let size = grid.size();
    let mut out = String::with_capacity(size * (size * 2 + 1));
    for y in 0..size {
        for x in 0..size {
            out.push_str(if grid.is_dark(x, y) { "##" } else { "  " });
        }
        out.push('\n');
    }
    out
}
