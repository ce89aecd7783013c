//! Rendering of the glider pattern onto a square canvas
//!
//! The glider is drawn as white blocks on a black background. Cell size and
//! centering offsets are derived from the canvas size alone.

use image::{ImageBuffer, Rgb, RgbImage};

/// In-memory pixel buffer an icon is rendered into
pub type Canvas = RgbImage;

/// Fixed 3x3 grid, `true` marks a foreground cell
pub type Pattern = [[bool; 3]; 3];

/// The Game of Life glider, row 0 on top
pub const GLIDER: Pattern = [
    [false, true, false],
    [false, false, true],
    [true, true, true],
];

/// Pure black background
pub const BACKGROUND: Rgb<u8> = Rgb([0, 0, 0]);
/// Pure white foreground
pub const FOREGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Cell size is `size / CELL_DIVISOR`, independent of the pattern width.
pub const CELL_DIVISOR: u32 = 8;

/// Cell size and centering offsets for a given canvas size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub cell_size: u32,
    pub offset_x: u32,
    pub offset_y: u32,
}

impl Layout {
    pub fn for_size(size: u32) -> Self {
        let cell_size = size / CELL_DIVISOR;
        let rows = GLIDER.len() as u32;
        let cols = GLIDER[0].len() as u32;

        // 3 * (size / 8) never exceeds size, so these can't underflow
        Self {
            cell_size,
            offset_x: (size - cols * cell_size) / 2,
            offset_y: (size - rows * cell_size) / 2,
        }
    }

    /// Top-left pixel of the cell at `(row, col)`
    pub fn cell_origin(&self, row: u32, col: u32) -> (u32, u32) {
        (
            self.offset_x + col * self.cell_size,
            self.offset_y + row * self.cell_size,
        )
    }
}

/// Render the glider onto a fresh `size` x `size` canvas
///
/// Sizes below [`CELL_DIVISOR`] produce a zero cell size and therefore an
/// all-background canvas.
pub fn render_icon(size: u32) -> Canvas {
    let mut canvas = ImageBuffer::from_pixel(size, size, BACKGROUND);
    let layout = Layout::for_size(size);

    for (row, cells) in GLIDER.iter().enumerate() {
        for (col, &alive) in cells.iter().enumerate() {
            if alive {
                let (x, y) = layout.cell_origin(row as u32, col as u32);
                fill_square(&mut canvas, x, y, layout.cell_size, FOREGROUND);
            }
        }
    }

    canvas
}

/// Fill a `side` x `side` square at `(x, y)`, clipped to the canvas
pub fn fill_square(canvas: &mut Canvas, x: u32, y: u32, side: u32, color: Rgb<u8>) {
    let x_end = x.saturating_add(side).min(canvas.width());
    let y_end = y.saturating_add(side).min(canvas.height());

    for py in y..y_end {
        for px in x..x_end {
            canvas.put_pixel(px, py, color);
        }
    }
}
