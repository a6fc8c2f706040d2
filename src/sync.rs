//! Blob synchronization protocol: wire values and the sender.
//!
//! One [`BlobEvent`] is written per track lifecycle change, and a frame's
//! removals are always flushed before its creations and updates, so a remote
//! consumer indexing blobs by id never observes an id in two live states
//! within one synchronization cycle.

mod blob;
mod sender;

pub use blob::{Blob, BlobEvent, BlobKind};
pub use sender::{BlobSender, SyncError};
