//! Sound request forwarding.
//!
//! Systems and observers write [`SfxCmd`] messages; each tick the forwarder
//! drains the mailbox into the crossbeam channel handed to the embedder at
//! setup. Send errors mean the embedder dropped the receiver, which is fine:
//! sound is fire-and-forget.

use bevy_ecs::prelude::*;

use crate::events::sfx::SfxCmd;
use crate::resources::sfx::SfxBridge;

/// Forward queued sound requests to the embedder's channel.
pub fn forward_sfx_cmds(bridge: Res<SfxBridge>, mut reader: MessageReader<SfxCmd>) {
    for cmd in reader.read() {
        let _ = bridge.tx_cmd.send(*cmd);
    }
}

/// Advance the message queue so same-tick writes become readable.
pub fn update_sfx_messages(mut messages: ResMut<Messages<SfxCmd>>) {
    messages.update();
}
