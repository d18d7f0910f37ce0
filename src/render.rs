//! Rendering of a finished symbol into drawable geometry
//!
//! The renderer turns the module grid into a canvas size plus one
//! rectangle per dark module, offset by the quiet zone. Consumers (label
//! layout, print CSS) own colors and page embedding; `rasterize` is a
//! convenience for producing a grayscale bitmap directly.

use crate::models::{GRID_SIZE, QrSymbol};
use image::{GrayImage, Luma};

/// Light-module border around the symbol, in modules
pub const QUIET_ZONE: usize = 4;
/// Smallest accepted canvas request in pixels
const MIN_CANVAS_PX: usize = 28;

/// Axis-aligned rectangle in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// Left edge
    pub x: usize,
    /// Top edge
    pub y: usize,
    /// Width in pixels
    pub width: usize,
    /// Height in pixels
    pub height: usize,
}

/// Drawable output of the renderer: square canvas plus dark-module rects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderInstructions {
    /// Canvas side length in pixels (quiet zone included)
    pub canvas_size: usize,
    /// Side length of a single module in pixels
    pub module_px: usize,
    /// One rectangle per dark module
    pub rects: Vec<Rect>,
}

/// Map a finalized symbol and a desired pixel size to render instructions
pub fn render(symbol: &QrSymbol, size_hint: usize) -> RenderInstructions {
    let total_modules = GRID_SIZE + 2 * QUIET_ZONE;
    let requested = size_hint.max(MIN_CANVAS_PX);
    let module_px = ((requested as f32 / total_modules as f32).round() as usize).max(1);
    let canvas_size = module_px * total_modules;

    let mut rects = Vec::new();
    for y in 0..GRID_SIZE {
        for x in 0..GRID_SIZE {
            if symbol.grid.is_dark(x, y) {
                rects.push(Rect {
                    x: (x + QUIET_ZONE) * module_px,
                    y: (y + QUIET_ZONE) * module_px,
                    width: module_px,
                    height: module_px,
                });
            }
        }
    }

    RenderInstructions {
        canvas_size,
        module_px,
        rects,
    }
}

/// Draw the instructions into a grayscale image (white canvas, black modules)
pub fn rasterize(instructions: &RenderInstructions) -> GrayImage {
    let side = instructions.canvas_size as u32;
    let mut img = GrayImage::from_pixel(side, side, Luma([255u8]));
    for rect in &instructions.rects {
        for dy in 0..rect.height {
            for dx in 0..rect.width {
                img.put_pixel((rect.x + dx) as u32, (rect.y + dy) as u32, Luma([0u8]));
            }
        }
    }
    img
}
