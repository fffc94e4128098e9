//! Equipment and the player's worn-slot map.

use strum::{Display, EnumCount, EnumIter};

/// Body slot an item occupies. One item per slot.
#[derive(Clone, Copy, Debug, Display, EnumCount, EnumIter, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EquipSlot {
    Weapon,
    Helm,
    Chestplate,
    Greaves,
    Trinket,
}

/// A piece of equipment with flat stat deltas.
///
/// Deltas apply to *base* stats (and max health), so they survive status
/// effect recomputation and are exactly reversed when the item comes off.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    pub name: String,
    pub slot: EquipSlot,
    /// Earliest stage the item can appear in a shop.
    pub stage: u32,
    pub health: i32,
    pub attack: f64,
    pub defense: f64,
    pub critical: f64,
    pub evasion: f64,
    pub price: u32,
}

impl Equipment {
    pub fn new(name: impl Into<String>, slot: EquipSlot, stage: u32, price: u32) -> Self {
        Self {
            name: name.into(),
            slot,
            stage,
            health: 0,
            attack: 0.0,
            defense: 0.0,
            critical: 0.0,
            evasion: 0.0,
            price,
        }
    }

    pub fn with_health(mut self, health: i32) -> Self {
        self.health = health;
        self
    }

    pub fn with_attack(mut self, attack: f64) -> Self {
        self.attack = attack;
        self
    }

    pub fn with_defense(mut self, defense: f64) -> Self {
        self.defense = defense;
        self
    }

    pub fn with_critical(mut self, critical: f64) -> Self {
        self.critical = critical;
        self
    }

    pub fn with_evasion(mut self, evasion: f64) -> Self {
        self.evasion = evasion;
        self
    }
}

/// The player's worn equipment, one optional item per slot.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipmentSlots {
    slots: [Option<Equipment>; EquipSlot::COUNT],
}

impl EquipmentSlots {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: EquipSlot) -> Option<&Equipment> {
        self.slots[slot as usize].as_ref()
    }

    /// Put an item in its slot, returning whatever it displaced.
    pub fn put(&mut self, item: Equipment) -> Option<Equipment> {
        self.slots[item.slot as usize].replace(item)
    }

    /// Take the item out of a slot.
    pub fn take(&mut self, slot: EquipSlot) -> Option<Equipment> {
        self.slots[slot as usize].take()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EquipSlot, Option<&Equipment>)> {
        use strum::IntoEnumIterator;
        EquipSlot::iter().map(move |slot| (slot, self.get(slot)))
    }
}
