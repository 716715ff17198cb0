//! Pixel-intensity buffer shared by the display, the map overlay and glyphs.

/// Full pixel intensity.
pub const LIT: u8 = 255;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Bitmap {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Bitmap {
    pub fn new(width: usize, height: usize) -> Self {
        Bitmap::filled(width, height, 0)
    }

    pub fn filled(width: usize, height: usize, value: u8) -> Self {
        Bitmap { width, height, pixels: vec![value; width * height] }
    }

    /// Build from text rows: `#` is lit, anything else dark.
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let mut bmp = Bitmap::new(width, height);
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                if ch == '#' {
                    bmp.set(row, col, LIT);
                }
            }
        }
        bmp
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Out-of-range writes are ignored.
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        if row < self.height && col < self.width {
            self.pixels[row * self.width + col] = value;
        }
    }

    /// Out-of-range reads are dark.
    pub fn get(&self, row: usize, col: usize) -> u8 {
        if row < self.height && col < self.width {
            self.pixels[row * self.width + col]
        } else {
            0
        }
    }

    pub fn is_lit(&self, row: usize, col: usize) -> bool {
        self.get(row, col) > 0
    }

    /// Copy a `height` x `width` window whose top-left corner sits at
    /// (`top`, `left`) in this bitmap. Pixels falling outside read as `fill`.
    /// `self` is never modified.
    pub fn window(&self, top: isize, left: isize, height: usize, width: usize, fill: u8) -> Bitmap {
        let mut out = Bitmap::filled(width, height, fill);
        for row in 0..height {
            let Some(src_row) = top.checked_add(row as isize).filter(|r| *r >= 0 && (*r as usize) < self.height) else {
                continue;
            };
            for col in 0..width {
                let Some(src_col) = left.checked_add(col as isize).filter(|c| *c >= 0 && (*c as usize) < self.width)
                else {
                    continue;
                };
                out.set(row, col, self.get(src_row as usize, src_col as usize));
            }
        }
        out
    }

    /// Same size, content moved left by `dx` and up by `dy`; vacated pixels
    /// take `fill`.
    pub fn shifted(&self, dx: isize, dy: isize, fill: u8) -> Bitmap {
        self.window(dy, dx, self.height, self.width, fill)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.pixels.chunks(self.width.max(1))
    }
}
