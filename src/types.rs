// Core types shared by the compositor, the renderer and the window.

/// Window-sized pixel buffer handed to minifb every frame.
#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// Black buffer of the given size.
    pub fn new(size: Size) -> Self {
        Self {
            width: size.width,
            height: size.height,
            pixels: vec![0u32; size.width * size.height],
        }
    }

    pub fn size(&self) -> Size {
        Size { width: self.width, height: self.height }
    }

    /// Reallocate when the window was resized. Returns true if anything changed.
    /// Visual: the next painted frame fills the whole new window.
    pub fn resize(&mut self, size: Size) -> bool {
        if self.size() == size {
            return false;
        }
        self.width = size.width;
        self.height = size.height;
        self.pixels.clear();
        self.pixels.resize(size.width * size.height, 0);
        true
    }
}

/// A position in window pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Viewport size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: usize,
    pub height: usize,
}

impl Size {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// The longer side; the wipe radius is measured against it.
    pub fn max_side(&self) -> f32 {
        self.width.max(self.height) as f32
    }
}

/// Region a draw layer covers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// The whole viewport.
    FullRect,
    /// Disc centered at `center`.
    Circle { center: Point, radius: f32 },
}

impl Shape {
    /// Does the pixel at (x,y) belong to this shape? Sampled at the pixel center.
    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        match *self {
            Shape::FullRect => true,
            Shape::Circle { center, radius } => {
                let dx = x as f32 + 0.5 - center.x;
                let dy = y as f32 + 0.5 - center.y;
                dx * dx + dy * dy <= radius * radius
            }
        }
    }

    /// Pixel rows/columns worth scanning inside a `width` x `height` frame,
    /// as half-open ranges. Empty when the shape misses the frame.
    pub fn bounds(&self, width: usize, height: usize) -> (std::ops::Range<usize>, std::ops::Range<usize>) {
        match *self {
            Shape::FullRect => (0..width, 0..height),
            Shape::Circle { center, radius } => {
                let clamp = |v: f32, max: usize| v.max(0.0).min(max as f32) as usize;
                let x0 = clamp((center.x - radius).floor(), width);
                let x1 = clamp((center.x + radius).ceil() + 1.0, width);
                let y0 = clamp((center.y - radius).floor(), height);
                let y1 = clamp((center.y + radius).ceil() + 1.0, height);
                (x0..x1.max(x0), y0..y1.max(y0))
            }
        }
    }
}
