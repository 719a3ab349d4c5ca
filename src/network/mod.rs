//! Host-side multiplayer plumbing: the peer snapshot wire format, the
//! broadcast cadence and smoothing of remote vehicles. Transport is left to
//! the host.

mod remote;
mod scheduler;
mod snapshot;

pub use remote::{RemoteFleet, RemoteVehicle};
pub use scheduler::SnapshotScheduler;
pub use snapshot::PeerSnapshot;
