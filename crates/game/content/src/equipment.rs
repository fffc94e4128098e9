//! Equipment tables.
//!
//! `stage` is the earliest shop stage an item can appear in. Prices are
//! paid from battle gold.

use abyss_core::{EquipSlot, Equipment};

fn item(name: &str, slot: EquipSlot, stage: u32, price: u32) -> Equipment {
    Equipment::new(name, slot, stage, price)
}

/// Build the full equipment table.
pub fn equipment_catalog() -> Vec<Equipment> {
    use EquipSlot::{Chestplate, Greaves, Helm, Trinket, Weapon};

    vec![
        // ===== weapons =====
        item("Sturdy Wooden Sword", Weapon, 2, 10).with_attack(5.0),
        item("Rusty Shortsword", Weapon, 2, 15).with_attack(10.0),
        item("Rusty Pot Lid", Weapon, 2, 20).with_attack(2.0).with_defense(8.0),
        item("Broken Axe", Weapon, 3, 37).with_attack(14.0),
        item("Corroded Dagger", Weapon, 3, 37).with_attack(10.0).with_critical(0.10),
        item("Rusty Kitchen Knife", Weapon, 3, 42).with_attack(10.0).with_critical(0.20),
        item("Steel Broadsword", Weapon, 4, 80).with_attack(20.0),
        item("Double-Edged Axe", Weapon, 4, 87).with_attack(25.0),
        item("Warrior's Greatsword", Weapon, 4, 105).with_attack(30.0),
        item("Skull Crusher", Weapon, 4, 125).with_health(50).with_attack(20.0),
        item("Battle Mace", Weapon, 4, 130)
            .with_attack(27.0)
            .with_defense(8.0)
            .with_critical(0.10),
        item("Warrior's Shield", Weapon, 4, 95).with_attack(5.0).with_defense(17.0),
        item("War-Worn Spear", Weapon, 4, 210).with_attack(20.0).with_critical(0.20),
        item("Bloodthirsty Battleaxe", Weapon, 5, 370).with_attack(40.0),
        item("Runed Claymore", Weapon, 5, 400).with_attack(60.0).with_defense(5.0),
        item("Dark Knight's Longsword", Weapon, 5, 490).with_attack(80.0),
        item("Blood-Oath Greatsword", Weapon, 5, 180).with_attack(50.0).with_defense(-10.0),
        item("Guardian's Mace", Weapon, 5, 160).with_attack(16.0).with_defense(10.0),
        item("Dragon's Fang", Weapon, 6, 300).with_attack(22.0).with_health(20),
        item("Dragonscale Axe", Weapon, 6, 350).with_attack(20.0).with_health(150),
        item("Dragonbone Hammer", Weapon, 8, 200).with_attack(25.0).with_health(100),
        item("Blasphemous Blade", Weapon, 8, 250).with_attack(100.0).with_health(30),

        // ===== chestplates =====
        item("Tattered Leather Cuirass", Chestplate, 1, 10).with_defense(4.0),
        item("Rusty Chainmail", Chestplate, 2, 30).with_defense(8.0),
        item("Dented Plate Cuirass", Chestplate, 4, 80).with_defense(18.0),
        item("Dragonscale Cuirass", Chestplate, 8, 200).with_defense(30.0).with_health(30),
        item("Steel Cuirass", Chestplate, 1, 15).with_defense(5.0).with_health(5),
        item("Spiked Tower Cuirass", Chestplate, 5, 150).with_defense(12.0).with_health(20),
        item("Dark Knight's Cuirass", Chestplate, 3, 50).with_defense(10.0),
        item("Blood Cuirass", Chestplate, 7, 180).with_defense(22.0),
        item("Hero's Relic Cuirass", Chestplate, 8, 160).with_defense(20.0).with_health(15),
        item("Blasphemous Cuirass", Chestplate, 9, 5000).with_defense(50.0).with_health(500),

        // ===== helms and greaves =====
        item("Leather Helm", Helm, 1, 5).with_defense(2.0),
        item("Iron Helm", Helm, 2, 15).with_defense(4.0),
        item("Steel Helm", Helm, 4, 30).with_defense(8.0),
        item("Leather Greaves", Greaves, 1, 5).with_defense(2.0),
        item("Iron Greaves", Greaves, 2, 15).with_defense(4.0),
        item("Steel Greaves", Greaves, 4, 30).with_defense(8.0),

        // ===== trinkets =====
        item("Skull Trinket", Trinket, 1, 20)
            .with_health(10)
            .with_attack(2.0)
            .with_defense(2.0),
        item("Sinew Trinket", Trinket, 3, 50).with_attack(7.0),
        item("Lifestone Trinket", Trinket, 3, 50).with_health(25),
        item("Bone Talisman", Trinket, 3, 50).with_defense(7.0),
        item("Warfiend's Trinket", Trinket, 6, 150)
            .with_health(20)
            .with_attack(8.0)
            .with_defense(8.0),
        item("Mark of Valor", Trinket, 8, 220).with_attack(12.0).with_health(25),
        item("Berserker's Sigil", Trinket, 5, 120).with_attack(10.0),
        item("Unbroken Vow", Trinket, 7, 170).with_attack(15.0).with_defense(-5.0),
        item("Guardian's Relic", Trinket, 9, 240).with_defense(18.0).with_health(35),
        item("King's Skull Trinket", Trinket, 9, 400)
            .with_health(60)
            .with_attack(18.0)
            .with_defense(12.0),
    ]
}
