//====================================================================

use std::sync::Arc;

use common::{Color, Size};

use crate::sprite::Sprite;

//====================================================================

/// Shared look of every widget. Text is measured with a fixed glyph cell
/// since font rasterization belongs to the backend.
#[derive(Debug, Clone)]
pub struct Theme {
    pub padding: u32,
    pub border_size: u32,
    pub glyph: Size<u32>,

    pub text: Color,
    pub selected: Color,
    pub background: Color,
    pub border: Color,

    pub cursor: Option<Arc<Sprite>>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            padding: 10,
            border_size: 2,
            glyph: Size::new(8, 16),
            text: Color(0xffffffff),
            selected: Color(0x7da42dff),
            background: Color(0x222323ff),
            border: Color(0x141414ff),
            cursor: None,
        }
    }
}

impl Theme {
    pub fn measure(&self, text: &str) -> Size<u32> {
        Size::new(
            text.chars().count() as u32 * self.glyph.width,
            self.glyph.height,
        )
    }

    #[inline]
    pub fn line_height(&self) -> u32 {
        self.glyph.height
    }
}

//====================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_uses_glyph_cell() {
        let theme = Theme::default();

        assert_eq!(theme.measure("Molko"), Size::new(40, 16));
        assert_eq!(theme.measure(""), Size::new(0, 16));
    }
}

//====================================================================
