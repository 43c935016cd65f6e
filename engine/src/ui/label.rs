//====================================================================

use common::{Color, Size};

use crate::painter::Painter;

use super::Theme;

//====================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub position: glam::IVec2,
    pub color: Option<Color>,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            position: glam::IVec2::ZERO,
            color: None,
        }
    }

    #[inline]
    pub fn size(&self, theme: &Theme) -> Size<u32> {
        theme.measure(&self.text)
    }

    pub fn draw(&self, painter: &mut dyn Painter, theme: &Theme) {
        painter.draw_text(
            &self.text,
            self.position,
            self.color.unwrap_or(theme.text),
        );
    }
}

//====================================================================
