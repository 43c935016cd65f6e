//====================================================================

use common::Rect;

use crate::{
    event::{Event, Key},
    painter::Painter,
};

use super::Theme;

//====================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Layout {
    eltw: u32,
    elth: u32,
    spacew: u32,
    spaceh: u32,
}

/// Paged grid of text items navigated with the arrow keys.
#[derive(Debug, Clone, Default)]
pub struct GridMenu {
    pub rect: Rect,
    pub items: Vec<String>,
    pub nrows: usize,
    pub ncols: usize,
    pub selected: usize,
}

impl GridMenu {
    pub fn new(rect: Rect, nrows: usize, ncols: usize) -> Self {
        debug_assert!(nrows > 0 && ncols > 0);

        Self {
            rect,
            items: Vec::new(),
            nrows,
            ncols,
            selected: 0,
        }
    }

    pub fn set_items(&mut self, items: Vec<String>) {
        self.items = items;
        self.selected = 0;
    }

    #[inline]
    fn page_size(&self) -> usize {
        self.nrows * self.ncols
    }

    fn layout(&self, theme: &Theme) -> Layout {
        let mut layout = Layout::default();

        self.items.iter().for_each(|item| {
            let size = theme.measure(item);
            layout.eltw = layout.eltw.max(size.width);
            layout.elth = layout.elth.max(size.height);
        });

        let reqw = theme.padding * 3 + layout.eltw * self.ncols as u32;
        let reqh = theme.padding * 3 + layout.elth * self.nrows as u32;

        if reqw > self.rect.width {
            log::warn!("gridmenu width is too small: {} < {}", self.rect.width, reqw);
            layout.spacew = 1;
        } else if self.ncols > 1 {
            layout.spacew = (self.rect.width - (reqw - theme.padding * 2)) / self.ncols as u32;
        }

        if reqh > self.rect.height {
            log::warn!("gridmenu height is too small: {} < {}", self.rect.height, reqh);
            layout.spaceh = 1;
        } else if self.nrows > 1 {
            layout.spaceh = (self.rect.height - (reqh - theme.padding * 2)) / self.nrows as u32;
        }

        layout
    }

    fn cell_position(&self, layout: &Layout, theme: &Theme, row: usize, col: usize) -> glam::IVec2 {
        glam::ivec2(
            self.rect.x
                + (theme.padding + col as u32 * (layout.eltw + layout.spacew)) as i32,
            self.rect.y
                + (theme.padding + row as u32 * (layout.elth + layout.spaceh)) as i32,
        )
    }

    fn handle_key(&mut self, key: Key) -> bool {
        let row = self.selected / self.ncols;
        let col = self.selected % self.ncols;

        match key {
            Key::Up => {
                if row > 0 {
                    self.selected -= self.ncols;
                }
            }
            Key::Right => {
                if self.selected + 1 < self.items.len() {
                    self.selected += 1;
                }
            }
            Key::Down => {
                if row + 1 < self.items.len() / self.ncols {
                    self.selected += self.ncols;
                } else {
                    self.selected = self.items.len() - 1;
                }
            }
            Key::Left => {
                if col > 0 {
                    self.selected -= 1;
                }
            }
            Key::Enter => return true,
            _ => {}
        }

        false
    }

    fn handle_click(&mut self, x: i32, y: i32, theme: &Theme) -> bool {
        let layout = self.layout(theme);
        let page = self.selected / self.page_size();

        for index in 0..self.page_size() {
            let (row, col) = (index / self.ncols, index % self.ncols);
            let at = self.cell_position(&layout, theme, row, col);

            let boxed = x >= at.x
                && x < at.x + layout.eltw as i32
                && y >= at.y
                && y < at.y + layout.elth as i32;

            if boxed {
                let selected = index + page * self.page_size();

                if selected < self.items.len() {
                    self.selected = selected;
                    return true;
                }
            }
        }

        false
    }

    /// Returns true when the current item is validated.
    pub fn handle(&mut self, event: &Event, theme: &Theme) -> bool {
        if self.items.is_empty() {
            return false;
        }

        match *event {
            Event::KeyDown(key) => self.handle_key(key),
            Event::ClickDown { x, y, .. } => self.handle_click(x, y, theme),
            _ => false,
        }
    }

    pub fn draw(&self, painter: &mut dyn Painter, theme: &Theme) {
        let layout = self.layout(theme);
        let page_size = self.page_size();
        let page = self.selected / page_size;

        for index in 0..page_size {
            let item = match self.items.get(index + page * page_size) {
                Some(item) => item,
                None => break,
            };

            let at = self.cell_position(&layout, theme, index / self.ncols, index % self.ncols);

            let color = match index == self.selected % page_size {
                true => theme.selected,
                false => theme.text,
            };

            painter.draw_text(item, at, color);
        }
    }
}

//====================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::painter::{DrawCommand, Recorder};

    fn menu(count: usize) -> GridMenu {
        let mut menu = GridMenu::new(Rect::new(0, 0, 600, 200), 3, 4);
        menu.set_items((0..count).map(|index| format!("item {}", index)).collect());
        menu
    }

    #[test]
    fn arrows_move_within_grid() {
        let theme = Theme::default();
        let mut menu = menu(10);

        assert!(!menu.handle(&Event::KeyDown(Key::Up), &theme));
        assert_eq!(menu.selected, 0);

        menu.handle(&Event::KeyDown(Key::Right), &theme);
        menu.handle(&Event::KeyDown(Key::Down), &theme);
        assert_eq!(menu.selected, 5);

        menu.handle(&Event::KeyDown(Key::Down), &theme);
        assert_eq!(menu.selected, 9);

        menu.handle(&Event::KeyDown(Key::Left), &theme);
        assert_eq!(menu.selected, 8);

        menu.handle(&Event::KeyDown(Key::Left), &theme);
        assert_eq!(menu.selected, 8);

        assert!(menu.handle(&Event::KeyDown(Key::Enter), &theme));
    }

    #[test]
    fn empty_menu_never_validates() {
        let theme = Theme::default();
        let mut menu = menu(0);

        assert!(!menu.handle(&Event::KeyDown(Key::Enter), &theme));
        assert!(!menu.handle(&Event::KeyDown(Key::Down), &theme));
    }

    #[test]
    fn draws_current_page_only() {
        let theme = Theme::default();
        let mut painter = Recorder::new();
        let mut menu = menu(14);

        menu.selected = 13;
        menu.draw(&mut painter, &theme);

        let texts = painter.texts().collect::<Vec<_>>();
        assert_eq!(texts, vec!["item 12", "item 13"]);

        let selected = painter.commands().iter().any(|command| {
            matches!(command, DrawCommand::Text { text, color, .. } if text == "item 13" && *color == theme.selected)
        });
        assert!(selected);
    }
}

//====================================================================
