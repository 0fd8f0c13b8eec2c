//! Builder für Hand-Szenen aus dem Controller.

use super::HandController;
use crate::core::{Card, CardLifecycle};
use crate::shared::{HandScene, SceneCard, SceneDissolve};

fn scene_card(card: &Card) -> SceneCard {
    SceneCard {
        id: card.id(),
        pose: card.pose,
        inactive: card.is_inactive(),
    }
}

/// Baut eine HandScene aus dem aktuellen Controller-Zustand.
pub fn build(controller: &HandController) -> HandScene {
    let hand = controller.hand();
    let id_at = |index: Option<usize>| index.and_then(|i| hand.get(i)).map(Card::id);
    let pointer = controller.pointer();

    let dissolving = controller
        .dissolving()
        .iter()
        .filter_map(|card| match card.lifecycle() {
            CardLifecycle::Dissolving(dissolve) => Some(SceneDissolve {
                id: card.id(),
                pose: card.pose,
                progress: dissolve.progress,
                glow: dissolve.glow(),
            }),
            _ => None,
        })
        .collect();

    HandScene {
        cards: hand.iter().map(scene_card).collect(),
        held: controller.held_card().map(scene_card),
        dissolving,
        selected: id_at(controller.selected_index()),
        hovered: id_at(controller.hovered_index()),
        dragged: id_at(controller.dragged_index()),
        pointer_world: pointer.world_position,
        pointer_inside: pointer.inside_bounds,
        mana: controller.mana(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::{HandController, PointerInput};
    use crate::core::{Card, CardId, ViewCamera};
    use crate::shared::HandOptions;
    use glam::{Vec2, Vec3};

    #[test]
    fn build_reflects_order_and_selection() {
        let camera =
            ViewCamera::orthographic(Vec3::new(0.0, 0.0, -10.0), 2.25, Vec2::new(1600.0, 900.0));
        let options = HandOptions {
            mana: 1,
            ..HandOptions::default()
        };
        let cards = [Card::new(CardId(1), 1), Card::new(CardId(2), 2)];
        let mut controller = HandController::new(options, cards);

        // Zeiger über Karte 1 (x = 1, y = -0.4375)
        controller.tick(0.016, PointerInput::new(Vec2::new(1000.0, 537.5), false), &camera);
        let scene = build(&controller);

        assert_eq!(scene.order(), vec![CardId(1), CardId(2)]);
        assert_eq!(scene.selected, Some(CardId(1)));
        assert_eq!(scene.hovered, Some(CardId(1)));
        assert_eq!(scene.dragged, None);
        assert!(scene.held.is_none());
        assert!(scene.pointer_inside);
        assert_eq!(scene.mana, 1);
        assert!(!scene.cards[0].inactive);
        assert!(scene.cards[1].inactive, "Karte 2 kostet mehr als vorhanden");
    }
}
