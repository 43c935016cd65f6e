//====================================================================

use common::Rect;

use crate::painter::Painter;

use super::Theme;

//====================================================================

/// Bordered box used as a background for other widgets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Frame {
    pub rect: Rect,
}

impl Frame {
    #[inline]
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    pub fn draw(&self, painter: &mut dyn Painter, theme: &Theme) {
        painter.set_color(theme.border);
        painter.draw_rectangle(self.rect);
        painter.set_color(theme.background);
        painter.draw_rectangle(self.rect.inset(theme.border_size));
    }
}

//====================================================================
