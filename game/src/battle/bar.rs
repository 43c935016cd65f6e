//====================================================================

use common::{Rect, Size};
use engine::{
    event::{Event, Key},
    painter::Painter,
    ui::{Frame, GridMenu, Label, Theme},
};
use hecs::Entity;

use crate::spell::Spell;

use super::{
    selection::{SelectionKind, Side, Sides, Target},
    Battle, Selection,
};

//====================================================================

/// What the player asked the current team member to do.
#[derive(Debug, Clone, Copy)]
pub enum Command {
    Attack {
        target: Entity,
    },
    Cast {
        spell: &'static Spell,
        selection: Selection,
    },
    UseItem {
        slot: usize,
        target: Entity,
    },
}

/// Bottom of the screen interface: team status and the menu of the team
/// member playing.
pub trait BattleBar {
    /// A team member starts its turn.
    fn start(&mut self, battle: &Battle);

    /// Returns a selection preset once an action needing a target was picked.
    fn handle(&mut self, battle: &Battle, event: &Event) -> Option<Selection>;

    /// The target was confirmed, turn the picked action into a command.
    fn select(&mut self, battle: &Battle, selection: &Selection) -> Option<Command>;

    /// The target selection was abandoned, go back to where the action was
    /// picked.
    fn cancel(&mut self, battle: &Battle) {
        self.start(battle);
    }

    fn update(&mut self, _battle: &Battle, _ticks: u32) {}

    fn draw(&self, battle: &Battle, painter: &mut dyn Painter);
}

//====================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MenuEntry {
    #[default]
    Attack,
    Magic,
    Objects,
    Special,
}

impl MenuEntry {
    pub fn label(&self) -> &'static str {
        match self {
            MenuEntry::Attack => "Attack",
            MenuEntry::Magic => "Magic",
            MenuEntry::Objects => "Objects",
            MenuEntry::Special => "Special",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BarState {
    /// Only the status is shown.
    #[default]
    None,
    Menu,
    /// Spells or objects listed in the grid.
    Grid,
}

const GRID_ROWS: usize = 3;
const GRID_COLS: usize = 4;

/// Menu with the four actions in a cross and a grid for spells and objects.
#[derive(Debug)]
pub struct DefaultBar {
    pub rect: Rect,
    pub status_frame: Rect,
    pub menu_frame: Rect,

    state: BarState,
    menu: MenuEntry,
    grid: GridMenu,
    /// Inventory slot of every object listed in the grid.
    slots: Vec<usize>,
}

impl DefaultBar {
    pub fn new(screen: Size<u32>) -> Self {
        let height = screen.height * 12 / 100;
        let rect = Rect::new(0, (screen.height - height) as i32, screen.width, height);

        let menu_width = rect.width / 5;
        let menu_frame = Rect::new(
            rect.x + (rect.width / 2 - menu_width / 2) as i32,
            rect.y,
            menu_width,
            height,
        );

        let status_frame = Rect::new(
            menu_frame.x + menu_width as i32,
            rect.y,
            (rect.width - menu_width) / 2,
            height,
        );

        let grid = GridMenu::new(
            Rect::new(rect.x, menu_frame.y, status_frame.width, height),
            GRID_ROWS,
            GRID_COLS,
        );

        Self {
            rect,
            status_frame,
            menu_frame,
            state: BarState::None,
            menu: MenuEntry::Attack,
            grid,
            slots: Vec::new(),
        }
    }

    #[inline]
    pub fn state(&self) -> BarState {
        self.state
    }

    #[inline]
    pub fn menu(&self) -> MenuEntry {
        self.menu
    }

    #[inline]
    pub fn grid(&self) -> &GridMenu {
        &self.grid
    }

    fn spells(battle: &Battle) -> Vec<&'static Spell> {
        battle
            .current()
            .and_then(|current| battle.character(current).ok())
            .map(|character| character.spells.clone())
            .unwrap_or_default()
    }

    fn open_magic(&mut self, battle: &Battle) {
        let spells = Self::spells(battle);

        if spells.is_empty() {
            log::debug!("No spell to cast");
            return;
        }

        self.grid
            .set_items(spells.iter().map(|spell| spell.name.to_string()).collect());
        self.state = BarState::Grid;
    }

    fn open_objects(&mut self, battle: &Battle) {
        let inventory = match &battle.inventory {
            Some(inventory) => inventory,
            None => {
                log::debug!("No inventory in this battle");
                return;
            }
        };

        self.slots.clear();

        let items = inventory
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| {
                let item = slot.item.filter(|_| slot.amount > 0)?;
                self.slots.push(index);
                Some(format!("{} {}", item.name, slot.amount))
            })
            .collect::<Vec<_>>();

        if items.is_empty() {
            log::debug!("No object to use");
            return;
        }

        self.grid.set_items(items);
        self.state = BarState::Grid;
    }

    fn validate_menu(&mut self, battle: &Battle) -> Option<Selection> {
        match self.menu {
            MenuEntry::Attack => {
                let mut selection = Selection::new(SelectionKind::One, Sides::ENEMY);

                match selection.first(battle) {
                    Ok(()) => Some(selection),
                    Err(e) => {
                        log::warn!("Nothing to attack: {}", e);
                        None
                    }
                }
            }
            MenuEntry::Magic => {
                self.open_magic(battle);
                None
            }
            MenuEntry::Objects => {
                self.open_objects(battle);
                None
            }
            MenuEntry::Special => {
                log::debug!("No special action available");
                None
            }
        }
    }

    fn validate_grid(&mut self, battle: &Battle) -> Option<Selection> {
        match self.menu {
            MenuEntry::Magic => {
                let current = battle.current()?;
                let character = battle.character(current).ok()?;
                let spell = *character.spells.get(self.grid.selected)?;

                if spell.mp > character.mp {
                    log::debug!(
                        "'{}' needs {} mp to cast '{}'",
                        character.name,
                        spell.mp,
                        spell.name
                    );
                    return None;
                }

                Some(spell.selection(battle))
            }

            MenuEntry::Objects => {
                let current = battle.current()?;

                Some(Selection {
                    allowed_kinds: SelectionKind::One,
                    allowed_sides: Sides::BOTH,
                    index_side: Side::Team,
                    index_character: Target::One(battle.team_index(current)?),
                })
            }

            _ => None,
        }
    }

    fn draw_status(&self, battle: &Battle, painter: &mut dyn Painter) {
        let theme = &battle.theme;
        let frame = self.status_frame;
        let column = frame.width as i32 / 4;

        Frame::new(frame).draw(painter, theme);

        battle
            .team()
            .iter()
            .flatten()
            .filter_map(|entity| battle.character(*entity).ok())
            .enumerate()
            .for_each(|(index, character)| {
                let y = frame.y + (theme.padding + index as u32 * theme.line_height()) as i32;
                let x = frame.x + theme.padding as i32;

                painter.draw_text(&character.name, glam::ivec2(x, y), theme.text);
                painter.draw_text(
                    &format!("{}/{}", character.hp, character.max_hp()),
                    glam::ivec2(x + column * 2, y),
                    theme.text,
                );
                painter.draw_text(
                    &format!("{}/{}", character.mp, character.max_mp()),
                    glam::ivec2(x + column * 3, y),
                    theme.text,
                );
            });
    }

    fn draw_menu(&self, theme: &Theme, painter: &mut dyn Painter) {
        let frame = self.menu_frame;

        Frame::new(frame).draw(painter, theme);

        let inner = frame.inset(theme.padding);

        [
            MenuEntry::Attack,
            MenuEntry::Magic,
            MenuEntry::Objects,
            MenuEntry::Special,
        ]
        .into_iter()
        .for_each(|entry| {
            let mut label = Label::new(entry.label());
            let size = label.size(theme);
            let center = inner.center(size);

            label.position = match entry {
                MenuEntry::Attack => glam::ivec2(center.x, inner.y),
                MenuEntry::Magic => glam::ivec2(inner.x + inner.width.saturating_sub(size.width) as i32, center.y),
                MenuEntry::Objects => {
                    glam::ivec2(center.x, inner.y + inner.height.saturating_sub(size.height) as i32)
                }
                MenuEntry::Special => glam::ivec2(inner.x, center.y),
            };

            if self.state == BarState::Menu && self.menu == entry {
                label.color = Some(theme.selected);
            }

            label.draw(painter, theme);
        });
    }

    fn draw_help(&self, battle: &Battle, painter: &mut dyn Painter) {
        let description = match self.menu {
            MenuEntry::Magic => Self::spells(battle)
                .get(self.grid.selected)
                .map(|spell| spell.description),

            MenuEntry::Objects => self
                .slots
                .get(self.grid.selected)
                .and_then(|index| battle.inventory.as_ref()?.slot(*index)?.item)
                .map(|item| item.description),

            _ => None,
        };

        if let Some(description) = description {
            let theme = &battle.theme;
            let mut label = Label::new(description);
            let size = label.size(theme);

            label.position = glam::ivec2(
                self.grid.rect.x + (self.grid.rect.width / 2) as i32 - (size.width / 2) as i32,
                self.grid.rect.y - (size.height + theme.padding) as i32,
            );
            label.draw(painter, theme);
        }
    }
}

impl BattleBar for DefaultBar {
    fn start(&mut self, _battle: &Battle) {
        self.state = BarState::Menu;
        self.menu = MenuEntry::Attack;
    }

    fn handle(&mut self, battle: &Battle, event: &Event) -> Option<Selection> {
        match self.state {
            BarState::None => None,

            BarState::Menu => match event.key_down()? {
                Key::Up => {
                    self.menu = MenuEntry::Attack;
                    None
                }
                Key::Right => {
                    self.menu = MenuEntry::Magic;
                    None
                }
                Key::Down => {
                    self.menu = MenuEntry::Objects;
                    None
                }
                Key::Left => {
                    self.menu = MenuEntry::Special;
                    None
                }
                Key::Enter => self.validate_menu(battle),
                _ => None,
            },

            BarState::Grid => {
                if event.key_down() == Some(Key::Escape) {
                    self.state = BarState::Menu;
                    return None;
                }

                match self.grid.handle(event, &battle.theme) {
                    true => self.validate_grid(battle),
                    false => None,
                }
            }
        }
    }

    fn select(&mut self, battle: &Battle, selection: &Selection) -> Option<Command> {
        let command = match (self.state, self.menu) {
            (BarState::Menu, MenuEntry::Attack) => Command::Attack {
                target: selection.target(battle)?,
            },

            (BarState::Grid, MenuEntry::Magic) => Command::Cast {
                spell: *Self::spells(battle).get(self.grid.selected)?,
                selection: *selection,
            },

            (BarState::Grid, MenuEntry::Objects) => Command::UseItem {
                slot: *self.slots.get(self.grid.selected)?,
                target: selection.target(battle)?,
            },

            _ => return None,
        };

        self.state = BarState::None;
        Some(command)
    }

    fn cancel(&mut self, _battle: &Battle) {
        self.state = match self.menu {
            MenuEntry::Magic | MenuEntry::Objects => BarState::Grid,
            _ => BarState::Menu,
        };
    }

    fn draw(&self, battle: &Battle, painter: &mut dyn Painter) {
        self.draw_status(battle, painter);
        self.draw_menu(&battle.theme, painter);

        if self.state == BarState::Grid {
            self.grid.draw(painter, &battle.theme);
            self.draw_help(battle, painter);
        }
    }
}

//====================================================================


//====================================================================
