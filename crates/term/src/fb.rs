//! Framebuffer and style types for terminal rendering.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear mix toward `other`; `amount` 0 keeps `self`, 255 gives `other`.
    pub fn mix(self, other: Rgb, amount: u8) -> Rgb {
        let blend = |a: u8, b: u8| {
            let a = u16::from(a);
            let b = u16::from(b);
            let t = u16::from(amount);
            ((a * (255 - t) + b * t) / 255) as u8
        };
        Rgb::new(
            blend(self.r, other.r),
            blend(self.g, other.g),
            blend(self.b, other.b),
        )
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        CellStyle::default().into_cell(' ')
    }
}

/// 2D framebuffer of styled character cells.
///
/// Signed `*_at` variants clip anything outside the buffer, so projected world
/// shapes can be drawn without bounds checks at the call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = usize::from(width) * usize::from(height);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize, keeping the allocation where possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.cells
            .resize(usize::from(width) * usize::from(height), Cell::default());
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= i32::from(self.width) || y >= i32::from(self.height) {
            return None;
        }
        Some(y as usize * usize::from(self.width) + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.get_at(i32::from(x), i32::from(y))
    }

    pub fn get_at(&self, x: i32, y: i32) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        self.set_at(i32::from(x), i32::from(y), cell);
    }

    pub fn set_at(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Change only the background of a cell, keeping glyph and foreground.
    pub fn set_bg_at(&mut self, x: i32, y: i32, bg: Rgb) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i].style.bg = bg;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Write a string left to right; the background of covered cells is kept.
    pub fn put_str_at(&mut self, x: i32, y: i32, s: &str, fg: Rgb, bold: bool) {
        for (dx, ch) in s.chars().enumerate() {
            let cx = x + dx as i32;
            if let Some(i) = self.idx(cx, y) {
                let cell = &mut self.cells[i];
                cell.ch = ch;
                cell.style.fg = fg;
                cell.style.bold = bold;
                cell.style.dim = false;
            }
        }
    }

    /// Fill an inclusive-exclusive cell rectangle.
    pub fn fill_rect_at(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, cell: Cell) {
        for y in y0.max(0)..y1.min(i32::from(self.height)) {
            for x in x0.max(0)..x1.min(i32::from(self.width)) {
                self.set_at(x, y, cell);
            }
        }
    }
}
