use bevy_ecs::message::Message;

/// Sound requests emitted by the simulation.
///
/// Fire-and-forget: the core writes these as ECS messages, a bridge system
/// forwards them over a channel, and whatever the embedder does with them is
/// not the simulation's concern.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SfxCmd {
    /// Coin collected.
    Coin,
    /// Enemy roar: spawn-in and attack.
    Roar,
    /// Enemy defeated.
    Moan,
    /// Level built and ready.
    LevelUp,
}
