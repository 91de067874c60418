//! Pairwise AABB collision detection.
//!
//! A pure detection pass: collects every overlapping actor pair, then
//! triggers one [`CollisionEvent`](crate::events::collision::CollisionEvent)
//! per pair. What an overlap *means* is decided by the combat observer, not
//! here. Frozen defeated actors still participate in detection; the observer
//! filters on state.

use bevy_ecs::prelude::*;

use crate::components::actor::Actor;
use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::events::collision::CollisionEvent;

pub fn collision_detector(
    query: Query<(Entity, &MapPosition, &BoxCollider), With<Actor>>,
    mut commands: Commands,
) {
    let mut pairs: Vec<(Entity, Entity)> = Vec::new();

    for [(entity_a, position_a, collider_a), (entity_b, position_b, collider_b)] in
        query.iter_combinations()
    {
        if collider_a.overlaps(position_a.pos, collider_b, position_b.pos) {
            pairs.push((entity_a, entity_b));
        }
    }

    for (a, b) in pairs {
        commands.trigger(CollisionEvent { a, b });
    }
}
