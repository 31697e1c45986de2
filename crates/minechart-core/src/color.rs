// File: crates/minechart-core/src/color.rs
// Summary: Series line colors and the round-robin assignment pool.

use std::collections::VecDeque;

/// RGB color assigned to a series line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex form, e.g. `#3366cc`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Default 20-color rotation palette.
pub const PALETTE: [Color; 20] = [
    Color::new(0x33, 0x66, 0xcc),
    Color::new(0xdc, 0x39, 0x12),
    Color::new(0xff, 0x99, 0x00),
    Color::new(0x10, 0x96, 0x18),
    Color::new(0x99, 0x00, 0x99),
    Color::new(0x00, 0x99, 0xc6),
    Color::new(0xdd, 0x44, 0x77),
    Color::new(0x66, 0xaa, 0x00),
    Color::new(0xb8, 0x2e, 0x2e),
    Color::new(0x31, 0x63, 0x95),
    Color::new(0x99, 0x44, 0x99),
    Color::new(0x22, 0xaa, 0x99),
    Color::new(0xaa, 0xaa, 0x11),
    Color::new(0x66, 0x33, 0xcc),
    Color::new(0xe6, 0x73, 0x00),
    Color::new(0x8b, 0x07, 0x07),
    Color::new(0x65, 0x10, 0x67),
    Color::new(0x32, 0x92, 0x62),
    Color::new(0x55, 0x74, 0xa6),
    Color::new(0x3b, 0x3e, 0xac),
];

/// Round-robin color assignment: each draw dequeues the front color and
/// enqueues it at the back. A removed series' color is not reclaimed.
#[derive(Clone, Debug)]
pub struct ColorPool {
    colors: VecDeque<Color>,
}

impl ColorPool {
    pub fn new() -> Self {
        Self::with_colors(PALETTE)
    }

    pub fn with_colors(colors: impl IntoIterator<Item = Color>) -> Self {
        Self { colors: colors.into_iter().collect() }
    }

    pub fn next_color(&mut self) -> Color {
        match self.colors.pop_front() {
            Some(color) => {
                self.colors.push_back(color);
                color
            }
            None => PALETTE[0],
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for ColorPool {
    fn default() -> Self {
        Self::new()
    }
}
