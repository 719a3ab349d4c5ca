use bevy::prelude::Resource;
use uuid::Uuid;

use crate::network::{RemoteFleet, SnapshotScheduler};

/// Transport-agnostic mailbox between a Bevy app and its peers.
///
/// The host pushes received JSON payloads into `inbound` and drains
/// `outbound` into whatever channel it uses.
#[derive(Resource, Debug, Clone)]
pub struct PeerSync {
    pub fleet: RemoteFleet,
    pub scheduler: SnapshotScheduler,
    pub inbound: Vec<String>,
    pub outbound: Vec<String>,
}

impl PeerSync {
    pub fn new(local_id: Uuid) -> Self {
        Self {
            fleet: RemoteFleet::new(local_id),
            scheduler: SnapshotScheduler::default(),
            inbound: Vec::new(),
            outbound: Vec::new(),
        }
    }

    pub fn local_id(&self) -> Uuid {
        self.fleet.local_id()
    }

    pub fn drain_outbound(&mut self) -> Vec<String> {
        std::mem::take(&mut self.outbound)
    }
}
