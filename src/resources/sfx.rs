//! Sound request bridge.
//!
//! The core never touches playback devices; it emits fire-and-forget
//! [`SfxCmd`](crate::events::sfx::SfxCmd) requests. Systems write them as ECS
//! messages and [`crate::systems::sfx::forward_sfx_cmds`] drains the mailbox
//! into a lock-free channel the embedder owns the other end of.

use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::events::sfx::SfxCmd;

/// Sender half of the sound request channel, held by the world.
#[derive(Resource)]
pub struct SfxBridge {
    pub tx_cmd: Sender<SfxCmd>,
}

/// Create the channel, register the bridge and the message mailbox, and hand
/// the receiver back to the embedder.
pub fn setup_sfx(world: &mut World) -> Receiver<SfxCmd> {
    let (tx_cmd, rx_cmd) = unbounded::<SfxCmd>();
    world.insert_resource(SfxBridge { tx_cmd });
    world.insert_resource(Messages::<SfxCmd>::default());
    rx_cmd
}
