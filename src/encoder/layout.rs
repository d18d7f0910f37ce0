//! Matrix layout engine for the Version-1 symbol
//!
//! Runs five ordered phases over a shared 21x21 tri-state grid: finder
//! patterns (with their light separators), timing patterns, the dark
//! module, zigzag data placement with mask application, then format bits
//! and finalization of untouched cells to light.

use super::TOTAL_CODEWORDS;
use super::format;
use crate::models::{ECLevel, GRID_SIZE, MaskPattern, Module, ModuleGrid};

/// Check whether (x, y) is a function module, excluded from data placement.
///
/// Covers the timing row/column, the three finder corners together with
/// their separators and format runs, and the dark module.
pub fn is_reserved(x: usize, y: usize) -> bool {
    if x == 6 || y == 6 {
        return true; // timing
    }
    if x < 9 && y < 9 {
        return true; // top-left finder + format
    }
    if x >= GRID_SIZE - 8 && y < 9 {
        return true; // top-right finder + format row
    }
    if x < 9 && y >= GRID_SIZE - 8 {
        return true; // bottom-left finder + format column, dark module
    }
    false
}

/// Builds the module grid from the combined codeword stream
pub struct MatrixBuilder {
    grid: ModuleGrid,
}

impl MatrixBuilder {
    fn new() -> Self {
        Self {
            grid: ModuleGrid::new(),
        }
    }

    /// Run all layout phases over the codeword stream and return the
    /// finalized grid
    pub fn build(codewords: &[u8; TOTAL_CODEWORDS]) -> ModuleGrid {
        let mut builder = Self::new();
        builder.place_finder_patterns();
        builder.place_timing_patterns();
        builder.place_dark_module();
        builder.place_data(codewords);
        format::place_format_bits(&mut builder.grid, ECLevel::L, MaskPattern::Pattern0);
        builder.grid.finalize();
        builder.grid
    }

    /// Phase 1: 7x7 finder patterns at three corners, with a one-module
    /// light separator drawn by clipping a -1..=7 local window
    fn place_finder_patterns(&mut self) {
        let far = GRID_SIZE as i32 - 7;
        self.place_finder(0, 0);
        self.place_finder(far, 0);
        self.place_finder(0, far);
    }

    fn place_finder(&mut self, ox: i32, oy: i32) {
        for dy in -1..8 {
            for dx in -1..8 {
                let x = ox + dx;
                let y = oy + dy;
                if x < 0 || y < 0 || x >= GRID_SIZE as i32 || y >= GRID_SIZE as i32 {
                    continue;
                }
                let value = if (0..7).contains(&dx) && (0..7).contains(&dy) {
                    let ring = dx == 0 || dx == 6 || dy == 0 || dy == 6;
                    let core = (2..=4).contains(&dx) && (2..=4).contains(&dy);
                    if ring || core {
                        Module::Dark
                    } else {
                        Module::Light
                    }
                } else {
                    Module::Light // separator
                };
                self.grid.set(x as usize, y as usize, value);
            }
        }
    }

    /// Phase 2: alternating timing modules on row 6 and column 6, between
    /// the finder regions
    fn place_timing_patterns(&mut self) {
        for i in 8..=GRID_SIZE - 9 {
            let value = if i % 2 == 0 { Module::Dark } else { Module::Light };
            self.grid.set(i, 6, value);
            self.grid.set(6, i, value);
        }
    }

    /// Phase 3: the fixed dark module at (8, 4*version + 9)
    fn place_dark_module(&mut self) {
        self.grid.set(8, 13, Module::Dark);
    }

    /// Phase 5: zigzag placement of the codeword bitstream with mask
    /// application, skipping reserved cells
    fn place_data(&mut self, codewords: &[u8; TOTAL_CODEWORDS]) {
        let mask = MaskPattern::Pattern0;
        let total_bits = TOTAL_CODEWORDS * 8;
        let mut bit_index = 0usize;
        let mut upward = true;
        let mut col = GRID_SIZE as i32 - 1;

        while col > 0 {
            if col == 6 {
                col -= 1;
                continue;
            }

            for step in 0..GRID_SIZE {
                let y = if upward { GRID_SIZE - 1 - step } else { step };
                for c in [col, col - 1] {
                    let x = c as usize;
                    if is_reserved(x, y) {
                        continue;
                    }
                    let bit = if bit_index < total_bits {
                        (codewords[bit_index / 8] >> (7 - bit_index % 8)) & 1 == 1
                    } else {
                        false // stream exhausted
                    };
                    bit_index += 1;
                    let dark = bit ^ mask.is_masked(x, y);
                    let value = if dark { Module::Dark } else { Module::Light };
                    self.grid.set(x, y, value);
                }
            }

            upward = !upward;
            col -= 2;
        }
    }
}
