//====================================================================

use std::fmt::Display;

//====================================================================

#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct Size<T> {
    pub width: T,
    pub height: T,
}

#[allow(dead_code)]
impl<T> Size<T> {
    #[inline]
    pub const fn new(width: T, height: T) -> Self {
        Self { width, height }
    }
}

impl<T> From<(T, T)> for Size<T> {
    #[inline]
    fn from(value: (T, T)) -> Self {
        Self {
            width: value.0,
            height: value.1,
        }
    }
}

impl<T> From<Size<T>> for (T, T) {
    #[inline]
    fn from(value: Size<T>) -> Self {
        (value.width, value.height)
    }
}

impl<T: Display> Display for Size<T> {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.width, self.height)
    }
}

//====================================================================

/// Screen space rectangle, origin at the top left corner.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn from_size(size: Size<u32>) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    #[inline]
    pub fn position(&self) -> glam::IVec2 {
        glam::ivec2(self.x, self.y)
    }

    #[inline]
    pub fn size(&self) -> Size<u32> {
        Size::new(self.width, self.height)
    }

    /// Shrink the rectangle by `amount` on every side.
    pub fn inset(&self, amount: u32) -> Self {
        Self {
            x: self.x + amount as i32,
            y: self.y + amount as i32,
            width: self.width.saturating_sub(amount * 2),
            height: self.height.saturating_sub(amount * 2),
        }
    }

    /// Position of a box of `size` centered within this rectangle.
    pub fn center(&self, size: Size<u32>) -> glam::IVec2 {
        glam::ivec2(
            self.x + (self.width as i32 - size.width as i32) / 2,
            self.y + (self.height as i32 - size.height as i32) / 2,
        )
    }
}

impl Display for Rect {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {} {}x{}]", self.x, self.y, self.width, self.height)
    }
}

//====================================================================

/// RGBA color packed as `0xRRGGBBAA`.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0x000000ff);
    pub const WHITE: Color = Color(0xffffffff);

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | a as u32)
    }

    #[inline]
    pub const fn r(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn g(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn b(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn a(&self) -> u8 {
        self.0 as u8
    }

    #[inline]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self((self.0 & 0xffffff00) | alpha as u32)
    }

    /// Compare the color channels, ignoring alpha.
    #[inline]
    pub const fn same_rgb(&self, other: Color) -> bool {
        (self.0 >> 8) == (other.0 >> 8)
    }
}

impl Display for Color {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:08x}", self.0)
    }
}

//====================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_channels() {
        let color = Color::rgba(0xa5, 0x30, 0x30, 0x00);

        assert_eq!(color.r(), 0xa5);
        assert_eq!(color.g(), 0x30);
        assert_eq!(color.b(), 0x30);
        assert_eq!(color.a(), 0x00);
        assert!(color.same_rgb(color.with_alpha(0xff)));
    }

    #[test]
    fn rect_center_and_inset() {
        let rect = Rect::new(10, 10, 100, 50);

        assert_eq!(rect.center(Size::new(20, 10)), glam::ivec2(50, 30));
        assert_eq!(rect.inset(5), Rect::new(15, 15, 90, 40));
    }
}

//====================================================================
