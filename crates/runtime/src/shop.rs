//! The between-stage shop.
//!
//! Each boss victory opens one visit: up to five items sampled (without
//! replacement) from everything whose stage requirement the player has
//! reached. Purchases equip immediately and leave the visit's stock;
//! insufficient gold just re-prompts. Leaving is always available.

use tracing::debug;

use abyss_core::{Equipment, GameConfig, GameEvent, Player, RngOracle, sample_indices};

use crate::providers::{DecisionProvider, EventSink};

/// Run one shop visit against the full equipment table.
pub fn run_shop(
    player: &mut Player,
    equipment: &[Equipment],
    stage: u32,
    provider: &mut dyn DecisionProvider,
    sink: &mut dyn EventSink,
    rng: &mut dyn RngOracle,
) {
    let available: Vec<&Equipment> = equipment.iter().filter(|e| e.stage <= stage).collect();
    if available.is_empty() {
        return;
    }

    let mut stock: Vec<Equipment> = sample_indices(rng, available.len(), GameConfig::SHOP_STOCK)
        .into_iter()
        .map(|index| available[index].clone())
        .collect();
    debug!(stage, stock = stock.len(), "shop opened");

    while !stock.is_empty() {
        let Some(choice) = provider.shop_choice(player, &stock) else {
            break;
        };
        let Some(item) = stock.get(choice) else {
            debug!(choice, "rejected shop choice");
            continue;
        };
        if player.gold < item.price {
            debug!(item = %item.name, price = item.price, gold = player.gold, "cannot afford");
            continue;
        }

        let item = stock.remove(choice);
        player.gold -= item.price;
        let slot = item.slot;
        let name = item.name.clone();
        if let Some(replaced) = player.equip(item) {
            sink.emit(&GameEvent::ItemUnequipped {
                slot,
                item: replaced.name,
            });
        }
        sink.emit(&GameEvent::ItemEquipped { slot, item: name });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::ScriptedProvider;
    use abyss_core::{EquipSlot, ScriptedRng};

    fn table() -> Vec<Equipment> {
        vec![
            Equipment::new("Leather Helm", EquipSlot::Helm, 1, 5).with_defense(2.0),
            Equipment::new("Steel Helm", EquipSlot::Helm, 4, 30).with_defense(8.0),
            Equipment::new("Rusty Shortsword", EquipSlot::Weapon, 2, 15).with_attack(10.0),
        ]
    }

    #[test]
    fn stock_is_stage_filtered() {
        let mut player = Player::new("wanderer");
        player.gold = 100;
        // buy everything offered
        let mut provider = ScriptedProvider::new().with_shop(vec![Some(0), Some(0), Some(0)]);
        let mut events: Vec<GameEvent> = Vec::new();
        let mut rng = ScriptedRng::new(vec![0.0]);

        run_shop(
            &mut player,
            &table(),
            1,
            &mut provider,
            &mut events,
            &mut rng,
        );

        // only the stage-1 helm was purchasable at stage 1
        assert!(player.equipment.get(EquipSlot::Helm).is_some());
        assert!(player.equipment.get(EquipSlot::Weapon).is_none());
        assert_eq!(player.gold, 95);
    }

    #[test]
    fn insufficient_gold_reprompts_without_state_change() {
        let mut player = Player::new("wanderer");
        player.gold = 1;
        let mut provider = ScriptedProvider::new().with_shop(vec![Some(0), None]);
        let mut events: Vec<GameEvent> = Vec::new();
        let mut rng = ScriptedRng::new(vec![0.0]);

        run_shop(
            &mut player,
            &table(),
            1,
            &mut provider,
            &mut events,
            &mut rng,
        );

        assert_eq!(player.gold, 1);
        assert!(events.is_empty());
        assert!(player.equipment.get(EquipSlot::Helm).is_none());
    }

    #[test]
    fn replacement_purchase_reverses_the_old_item() {
        let mut player = Player::new("wanderer");
        player.gold = 100;
        // the scripted rng orders the stock [leather helm, shortsword, steel helm]
        let mut provider = ScriptedProvider::new().with_shop(vec![Some(0), Some(1), None]);
        let mut events: Vec<GameEvent> = Vec::new();
        let mut rng = ScriptedRng::new(vec![0.0]);

        // stage 4: both helms in the pool
        run_shop(
            &mut player,
            &table(),
            4,
            &mut provider,
            &mut events,
            &mut rng,
        );

        // the steel helm displaced the leather one; deltas never stack
        let worn = player.equipment.get(EquipSlot::Helm).unwrap();
        assert_eq!(worn.name, "Steel Helm");
        assert_eq!(player.character.effective.defense, 13.0);
        assert_eq!(player.gold, 65);
        assert!(events.iter().any(|e| matches!(
            e,
            GameEvent::ItemUnequipped { item, .. } if item == "Leather Helm"
        )));
    }
}
