//====================================================================

use std::ops::BitOr;

use common::{Rect, Size};

use crate::{
    action::Action,
    event::{Event, Key},
    painter::Painter,
};

use super::{Frame, Theme};

//====================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MessageFlags(u8);

impl MessageFlags {
    pub const NONE: MessageFlags = MessageFlags(0);
    /// Close itself once the timeout elapsed.
    pub const AUTOMATIC: MessageFlags = MessageFlags(1 << 0);
    pub const FADEIN: MessageFlags = MessageFlags(1 << 1);
    pub const FADEOUT: MessageFlags = MessageFlags(1 << 2);

    #[inline]
    pub const fn contains(&self, other: MessageFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for MessageFlags {
    type Output = MessageFlags;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        MessageFlags(self.0 | rhs.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MessageState {
    #[default]
    None,
    Opening,
    Showing,
    Hiding,
}

//====================================================================

/// Dialog box showing a few lines of text, optionally with selectable lines.
#[derive(Debug, Clone)]
pub struct Message {
    pub rect: Rect,
    pub lines: Vec<String>,
    pub flags: MessageFlags,
    /// Bitmask of the lines that can be selected.
    pub selectable: u32,
    pub selected: usize,

    pub timeout: u32,
    pub speed: u32,
    pub theme: Theme,

    state: MessageState,
    elapsed: u32,
    scale: f32,
}

impl Message {
    pub const TIMEOUT_DEFAULT: u32 = 5000;
    pub const SPEED_DEFAULT: u32 = 150;

    pub fn new(lines: Vec<String>, flags: MessageFlags, theme: Theme) -> Self {
        Self {
            rect: Rect::default(),
            lines,
            flags,
            selectable: 0,
            selected: 0,
            timeout: Self::TIMEOUT_DEFAULT,
            speed: Self::SPEED_DEFAULT,
            theme,
            state: MessageState::None,
            elapsed: 0,
            scale: 0.,
        }
    }

    #[inline]
    pub fn state(&self) -> MessageState {
        self.state
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        self.state == MessageState::None
    }

    /// Minimal size able to hold every line.
    pub fn query(&self) -> Size<u32> {
        let width = self
            .lines
            .iter()
            .map(|line| self.theme.measure(line).width)
            .max()
            .unwrap_or(0);

        let count = self.lines.len() as u32;
        let height = self.theme.padding * 2
            + count * self.theme.line_height()
            + count.saturating_sub(1) * self.theme.padding;

        Size::new(self.theme.padding * 2 + width, height)
    }

    #[inline]
    fn is_selectable(&self, line: usize) -> bool {
        line < self.lines.len() && line < 32 && (self.selectable >> line) & 0x1 == 1
    }

    fn first(&self) -> Option<usize> {
        (0..self.lines.len()).find(|line| self.is_selectable(*line))
    }

    fn last(&self) -> Option<usize> {
        (0..self.lines.len()).rev().find(|line| self.is_selectable(*line))
    }

    fn previous(&self) -> usize {
        if Some(self.selected) == self.first() {
            return self.last().unwrap_or(self.selected);
        }

        (0..self.selected)
            .rev()
            .find(|line| self.is_selectable(*line))
            .unwrap_or(self.selected)
    }

    fn next(&self) -> usize {
        if Some(self.selected) == self.last() {
            return self.first().unwrap_or(self.selected);
        }

        (self.selected + 1..self.lines.len())
            .find(|line| self.is_selectable(*line))
            .unwrap_or(self.selected)
    }

    fn close(&mut self) {
        self.state = match self.flags.contains(MessageFlags::FADEOUT) {
            true => MessageState::Hiding,
            false => MessageState::None,
        };
        self.elapsed = 0;
    }

    /// Start closing, animated or not.
    pub fn hide(&mut self) {
        self.state = MessageState::Hiding;
        self.elapsed = 0;
    }
}

impl Action for Message {
    fn start(&mut self) {
        let fadein = self.flags.contains(MessageFlags::FADEIN);

        if (fadein || self.flags.contains(MessageFlags::FADEOUT)) && self.speed == 0 {
            log::warn!("message has animation but zero speed");
        }

        if self.flags.contains(MessageFlags::AUTOMATIC) && self.timeout == 0 {
            log::warn!("message is automatic but has zero timeout");
        }

        self.elapsed = 0;
        self.scale = if fadein { 0. } else { 1. };
        self.state = if fadein {
            MessageState::Opening
        } else {
            MessageState::Showing
        };

        if self.selectable != 0 && !self.is_selectable(self.selected) {
            self.selected = self.first().unwrap_or(0);
        }
    }

    fn handle(&mut self, event: &Event) {
        if self.state != MessageState::Showing {
            return;
        }

        match event.key_down() {
            Some(Key::Up) if self.selectable != 0 => self.selected = self.previous(),
            Some(Key::Down) if self.selectable != 0 => self.selected = self.next(),
            Some(Key::Enter) => self.close(),
            _ => {}
        }
    }

    fn update(&mut self, ticks: u32) -> bool {
        self.elapsed += ticks;

        match self.state {
            MessageState::Opening => {
                self.scale = (self.elapsed as f32 / self.speed.max(1) as f32).min(1.);

                if self.elapsed >= self.speed {
                    self.state = MessageState::Showing;
                    self.elapsed = 0;
                }
            }

            MessageState::Showing => {
                if self.flags.contains(MessageFlags::AUTOMATIC) && self.elapsed >= self.timeout {
                    self.close();
                }
            }

            MessageState::Hiding => {
                self.scale = (1. - self.elapsed as f32 / self.speed.max(1) as f32).max(0.);

                if self.elapsed >= self.speed {
                    self.state = MessageState::None;
                    self.elapsed = 0;
                }
            }

            MessageState::None => {}
        }

        self.is_completed()
    }

    fn draw(&self, painter: &mut dyn Painter) {
        if self.rect.width == 0 || self.rect.height == 0 {
            log::warn!("message has null dimensions");
            return;
        }

        if self.state == MessageState::None {
            return;
        }

        let scaled = Size::new(
            (self.rect.width as f32 * self.scale) as u32,
            (self.rect.height as f32 * self.scale) as u32,
        );
        let at = self.rect.center(scaled);

        Frame::new(Rect::new(at.x, at.y, scaled.width, scaled.height)).draw(painter, &self.theme);

        // Lines only once the box is fully open.
        if self.scale < 1. {
            return;
        }

        let padding = self.theme.padding as i32;
        let line_height = self.theme.line_height() as i32;

        self.lines.iter().enumerate().for_each(|(index, line)| {
            let color = match self.selectable != 0
                && self.selected == index
                && self.is_selectable(index)
            {
                true => self.theme.selected,
                false => self.theme.text,
            };

            let y = padding + index as i32 * (line_height + padding);
            painter.draw_text(line, self.rect.position() + glam::ivec2(padding, y), color);
        });
    }
}

//====================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::painter::Recorder;

    fn message(flags: MessageFlags) -> Message {
        let mut message = Message::new(
            vec!["Victory!".to_string()],
            flags,
            Theme::default(),
        );
        message.rect = Rect::new(0, 0, 200, 50);
        message
    }

    #[test]
    fn automatic_fade_lifecycle() {
        let mut message = message(MessageFlags::AUTOMATIC | MessageFlags::FADEIN | MessageFlags::FADEOUT);
        message.start();
        assert_eq!(message.state(), MessageState::Opening);

        assert!(!message.update(150));
        assert_eq!(message.state(), MessageState::Showing);

        assert!(!message.update(4999));
        assert!(!message.update(1));
        assert_eq!(message.state(), MessageState::Hiding);

        assert!(!message.update(100));
        assert!(message.update(50));
        assert!(message.is_completed());
    }

    #[test]
    fn enter_closes_showing_message() {
        let mut message = message(MessageFlags::NONE);
        message.start();

        message.handle(&Event::KeyDown(Key::Enter));
        assert!(message.update(0));
    }

    #[test]
    fn input_ignored_while_opening() {
        let mut message = message(MessageFlags::FADEIN);
        message.start();

        message.handle(&Event::KeyDown(Key::Enter));
        assert_eq!(message.state(), MessageState::Opening);
    }

    #[test]
    fn selection_wraps_on_selectable_lines() {
        let mut message = Message::new(
            vec!["Yes".into(), "-".into(), "No".into()],
            MessageFlags::NONE,
            Theme::default(),
        );
        message.selectable = 0b101;
        message.start();
        assert_eq!(message.selected, 0);

        message.handle(&Event::KeyDown(Key::Down));
        assert_eq!(message.selected, 2);

        message.handle(&Event::KeyDown(Key::Down));
        assert_eq!(message.selected, 0);

        message.handle(&Event::KeyDown(Key::Up));
        assert_eq!(message.selected, 2);
    }

    #[test]
    fn draws_lines_when_open() {
        let mut painter = Recorder::new();
        let mut message = message(MessageFlags::NONE);
        message.start();
        message.draw(&mut painter);

        assert_eq!(painter.texts().collect::<Vec<_>>(), vec!["Victory!"]);
        assert_eq!(message.query(), Size::new(84, 36));
    }
}

//====================================================================
