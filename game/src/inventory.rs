//====================================================================

use std::cmp::Ordering;

use crate::item::Item;

//====================================================================

pub const INVENTORY_ROWS: usize = 3;
pub const INVENTORY_COLS: usize = 10;
pub const INVENTORY_SLOTS: usize = INVENTORY_ROWS * INVENTORY_COLS;

#[derive(Debug, Clone, Copy, Default)]
pub struct Slot {
    pub item: Option<&'static Item>,
    pub amount: u32,
}

impl Slot {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.item.is_none() || self.amount == 0
    }

    /// Whether `item` can still be stacked in this slot.
    fn accepts(&self, item: &Item) -> bool {
        match self.item {
            Some(current) => current.same(item) && self.amount < current.stackable,
            None => false,
        }
    }

    /// Store as much as possible and return what did not fit.
    fn provide(&mut self, item: &'static Item, amount: u32) -> u32 {
        self.item = Some(item);

        let available = item.stackable.saturating_sub(self.amount);
        let stored = amount.min(available);

        self.amount += stored;
        amount - stored
    }
}

//====================================================================

/// Grid of item stacks shared by the team.
#[derive(Debug, Clone)]
pub struct Inventory {
    slots: [[Slot; INVENTORY_COLS]; INVENTORY_ROWS],
}

impl Default for Inventory {
    fn default() -> Self {
        Self {
            slots: [[Slot::default(); INVENTORY_COLS]; INVENTORY_ROWS],
        }
    }
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots
            .get(index / INVENTORY_COLS)
            .and_then(|row| row.get(index % INVENTORY_COLS))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter().flatten()
    }

    fn find(&mut self, item: &Item) -> Option<&mut Slot> {
        let index = self
            .iter()
            .position(|slot| slot.accepts(item))
            .or_else(|| self.iter().position(|slot| slot.item.is_none()))?;

        Some(&mut self.slots[index / INVENTORY_COLS][index % INVENTORY_COLS])
    }

    /// Store `amount` units of `item`, filling partial stacks first. Returns
    /// the amount that could not be stored.
    pub fn push(&mut self, item: &'static Item, mut amount: u32) -> u32 {
        if item.stackable == 0 {
            log::warn!("Item '{}' can't be stacked", item.name);
            return amount;
        }

        while amount > 0 {
            match self.find(item) {
                Some(slot) => amount = slot.provide(item, amount),
                None => break,
            }
        }

        if amount > 0 {
            log::debug!("Inventory full, {} '{}' left over", amount, item.name);
        }

        amount
    }

    /// Remove up to `amount` units of `item`. Returns the amount removed.
    pub fn consume(&mut self, item: &Item, amount: u32) -> u32 {
        let mut removed = 0;

        for slot in self.slots.iter_mut().flatten() {
            if removed == amount {
                break;
            }

            if !slot.item.map(|current| current.same(item)).unwrap_or(false) {
                continue;
            }

            let taken = (amount - removed).min(slot.amount);
            slot.amount -= taken;
            removed += taken;

            if slot.amount == 0 {
                *slot = Slot::default();
            }
        }

        removed
    }

    /// Merge partial stacks then order by name and descending amount, empty
    /// slots last.
    pub fn sort(&mut self) {
        let mut items = self
            .iter()
            .filter(|slot| !slot.is_empty())
            .copied()
            .collect::<Vec<_>>();

        self.clear();
        items.iter().for_each(|slot| {
            if let Some(item) = slot.item {
                self.push(item, slot.amount);
            }
        });

        items = self.iter().copied().collect();
        items.sort_by(|a, b| match (a.item, b.item) {
            (Some(left), Some(right)) => left
                .name
                .cmp(right.name)
                .then_with(|| b.amount.cmp(&a.amount)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });

        items.into_iter().enumerate().for_each(|(index, slot)| {
            self.slots[index / INVENTORY_COLS][index % INVENTORY_COLS] = slot;
        });
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

//====================================================================

#[cfg(test)]
mod tests {
    use hecs::Entity;

    use super::*;
    use crate::battle::Battle;

    fn nothing(_: &mut Battle, _: Entity, _: Entity) {}

    static POTION: Item = Item {
        name: "Potion",
        description: "Restore 100 hp",
        stackable: 10,
        exec_battle: nothing,
        exec_menu: None,
    };

    static ELIXIR: Item = Item {
        name: "Elixir",
        description: "Restore everything",
        stackable: 2,
        exec_battle: nothing,
        exec_menu: None,
    };

    #[test]
    fn push_fills_existing_stacks_first() {
        let mut inventory = Inventory::new();

        assert_eq!(inventory.push(&POTION, 4), 0);
        assert_eq!(inventory.push(&POTION, 8), 0);

        assert_eq!(inventory.slot(0).unwrap().amount, 10);
        assert_eq!(inventory.slot(1).unwrap().amount, 2);
    }

    #[test]
    fn push_reports_what_did_not_fit() {
        let mut inventory = Inventory::new();

        assert_eq!(inventory.push(&ELIXIR, 100), 100 - 2 * INVENTORY_SLOTS as u32);
        assert!(inventory.iter().all(|slot| slot.amount == 2));
    }

    #[test]
    fn consume_empties_slots() {
        let mut inventory = Inventory::new();
        inventory.push(&POTION, 3);

        assert_eq!(inventory.consume(&POTION, 1), 1);
        assert_eq!(inventory.slot(0).unwrap().amount, 2);

        assert_eq!(inventory.consume(&POTION, 5), 2);
        assert!(inventory.slot(0).unwrap().is_empty());
        assert!(inventory.slot(0).unwrap().item.is_none());
    }

    #[test]
    fn sort_merges_and_orders() {
        let mut inventory = Inventory::new();
        inventory.slots[0][3] = Slot {
            item: Some(&POTION),
            amount: 3,
        };
        inventory.slots[1][0] = Slot {
            item: Some(&POTION),
            amount: 4,
        };
        inventory.slots[2][9] = Slot {
            item: Some(&ELIXIR),
            amount: 1,
        };

        inventory.sort();

        let first = inventory.slot(0).unwrap();
        assert_eq!(first.item.map(|item| item.name), Some("Elixir"));
        assert_eq!(first.amount, 1);

        let second = inventory.slot(1).unwrap();
        assert_eq!(second.item.map(|item| item.name), Some("Potion"));
        assert_eq!(second.amount, 7);

        assert!(inventory.iter().skip(2).all(Slot::is_empty));
    }
}

//====================================================================
