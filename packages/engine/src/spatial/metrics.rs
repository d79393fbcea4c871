//! Canvas metrics - sizing and coordinate mapping
//!
//! Two coordinate spaces:
//! - client: CSS pixels relative to the viewport (what pointer events report)
//! - device: backing-store pixels of the canvas (`client × devicePixelRatio`)
//!
//! Rendering and hit-testing both go through the same `cell_width` /
//! `cell_height`, so `cell_rect(cell_at(p))` always contains `p`.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub css_width: f64,
    pub css_height: f64,
    pub device_pixel_ratio: f64,
}

impl Viewport {
    /// Non-finite or non-positive sizes clamp to 0, ratios fall back to 1
    pub fn new(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> Self {
        let dim = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        Self {
            css_width: dim(css_width),
            css_height: dim(css_height),
            device_pixel_ratio: dpr,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }
}

/// Device-pixel rectangle of one cell
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl CellRect {
    /// Half-open on the far edges, matching the `floor` in `cell_at`
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasMetrics {
    viewport: Viewport,
    grid_size: u32,
    row_divisor: u32,
    backing_width: f64,
    backing_height: f64,
    cell_width: f64,
    cell_height: f64,
}

impl CanvasMetrics {
    pub fn from_viewport(viewport: Viewport, grid_size: u32, row_divisor: u32) -> Self {
        let backing_width = viewport.css_width * viewport.device_pixel_ratio;
        let backing_height = viewport.css_height * viewport.device_pixel_ratio;
        Self {
            viewport,
            grid_size,
            row_divisor,
            backing_width,
            backing_height,
            cell_width: backing_width / grid_size.max(1) as f64,
            cell_height: backing_height / row_divisor.max(1) as f64,
        }
    }

    /// Same grid and divisor, new window size
    pub fn resized(&self, viewport: Viewport) -> Self {
        Self::from_viewport(viewport, self.grid_size, self.row_divisor)
    }

    // === Dimensions ===
    #[inline]
    pub fn viewport(&self) -> Viewport { self.viewport }

    #[inline]
    pub fn grid_size(&self) -> u32 { self.grid_size }

    #[inline]
    pub fn row_divisor(&self) -> u32 { self.row_divisor }

    #[inline]
    pub fn backing_width(&self) -> f64 { self.backing_width }

    #[inline]
    pub fn backing_height(&self) -> f64 { self.backing_height }

    #[inline]
    pub fn cell_width(&self) -> f64 { self.cell_width }

    #[inline]
    pub fn cell_height(&self) -> f64 { self.cell_height }

    /// True before the first resize (or for a zero-sized window)
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.cell_width > 0.0 && self.cell_height > 0.0)
    }

    // === Mapping ===

    /// Client point -> device pixels inside the canvas whose top-left is at `canvas_offset`
    #[inline]
    pub fn to_device(&self, client: Point, canvas_offset: Point) -> Point {
        let dpr = self.viewport.device_pixel_ratio;
        Point::new((client.x - canvas_offset.x) * dpr, (client.y - canvas_offset.y) * dpr)
    }

    /// Cell under a client point; `None` when the point is off the grid
    pub fn cell_at(&self, client: Point, canvas_offset: Point) -> Option<usize> {
        if self.is_degenerate() {
            return None;
        }

        let p = self.to_device(client, canvas_offset);
        let row = (p.y / self.cell_height).floor();
        let col = (p.x / self.cell_width).floor();

        let n = self.grid_size as f64;
        if !(0.0..n).contains(&row) || !(0.0..n).contains(&col) {
            return None;
        }
        Some(row as usize * self.grid_size as usize + col as usize)
    }

    /// Device-pixel rectangle a cell is drawn into
    pub fn cell_rect(&self, index: usize) -> CellRect {
        let n = self.grid_size.max(1) as usize;
        let (col, row) = (index % n, index / n);
        CellRect {
            x: col as f64 * self.cell_width,
            y: row as f64 * self.cell_height,
            width: self.cell_width,
            height: self.cell_height,
        }
    }
}
