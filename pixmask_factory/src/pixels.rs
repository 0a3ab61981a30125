use pixmask_common::colors::Color;

/// Contract the mask builders expect from a decoded image. Image decoding
/// itself is out of scope for this library: adapt whatever decoder is in use
/// by implementing this on its output type.
pub trait Pixel_Source {
    fn width(&self) -> i32;
    fn height(&self) -> i32;

    /// False when the image carries no alpha information at all.
    fn has_alpha(&self) -> bool;

    /// Alpha of pixel `(x, y)`; only meaningful when `has_alpha()` is true.
    fn alpha_at(&self, x: i32, y: i32) -> u8;

    fn color_at(&self, x: i32, y: i32) -> Color;
}

/// Plain in-memory pixel buffer, row-major. The simplest possible
/// `Pixel_Source`; decoders that already hand out raw pixels can go through
/// this instead of a bespoke adapter.
pub struct Raster_Image {
    width: i32,
    height: i32,
    has_alpha: bool,
    pixels: Vec<Color>,
}

impl Raster_Image {
    pub fn new(width: i32, height: i32, has_alpha: bool, pixels: Vec<Color>) -> Raster_Image {
        assert!(
            pixels.len() == (width.max(0) * height.max(0)) as usize,
            "Pixel buffer size does not match {}x{}!",
            width,
            height
        );
        Raster_Image {
            width,
            height,
            has_alpha,
            pixels,
        }
    }

    #[inline]
    fn pixel(&self, x: i32, y: i32) -> Color {
        debug_assert!(x >= 0 && x < self.width, "x out of bounds: {}", x);
        debug_assert!(y >= 0 && y < self.height, "y out of bounds: {}", y);
        self.pixels[(y * self.width + x) as usize]
    }
}

impl Pixel_Source for Raster_Image {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn has_alpha(&self) -> bool {
        self.has_alpha
    }

    fn alpha_at(&self, x: i32, y: i32) -> u8 {
        self.pixel(x, y).a
    }

    fn color_at(&self, x: i32, y: i32) -> Color {
        self.pixel(x, y)
    }
}
