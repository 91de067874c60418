use bevy_ecs::prelude::Component;

/// The fixed set of entity kinds the simulation knows about.
///
/// The entity population is deliberately small and closed; pairwise collision
/// rules and world-bound margins are selected by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActorKind {
    Player,
    Enemy,
    Coin,
    Asteroid,
}

/// Kind tag attached to every simulated entity.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub kind: ActorKind,
}

impl Actor {
    pub fn new(kind: ActorKind) -> Self {
        Self { kind }
    }

    pub fn is(&self, kind: ActorKind) -> bool {
        self.kind == kind
    }
}
