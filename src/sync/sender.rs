//! Sender side of the blob protocol.

use std::io::Write;
use std::net::TcpStream;

use thiserror::Error;

use crate::sync::blob::{Blob, BlobEvent, BlobKind};
use crate::tracker::Track;

/// Failures while connecting or publishing.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The remote endpoint could not be reached at startup.
    #[error("connection to {addr} failed: {source}")]
    Connect {
        addr: String,
        source: std::io::Error,
    },
    /// A message failed to encode or write.
    #[error("blob send failed: {0}")]
    Send(#[from] bincode::Error),
}

/// Writes blob lifecycle events to a persistent connection.
///
/// The sender owns the connection exclusively and holds no track state of
/// its own, so a failed send can never corrupt the tracker; the error is
/// returned for the driver to decide whether that frame's messages are
/// dropped or retried. Each message is fire-and-forget: no acknowledgment is
/// awaited.
pub struct BlobSender<W: Write> {
    conn: W,
}

impl BlobSender<TcpStream> {
    /// Connect to the remote blob consumer.
    pub fn connect(host: &str, port: u16) -> Result<Self, SyncError> {
        let conn = TcpStream::connect((host, port)).map_err(|source| SyncError::Connect {
            addr: format!("{host}:{port}"),
            source,
        })?;
        Ok(Self { conn })
    }
}

impl<W: Write> BlobSender<W> {
    /// Wrap an already-open connection, or any writer in tests.
    pub fn new(conn: W) -> Self {
        Self { conn }
    }

    pub fn send_new_blob(&mut self, blob: &Blob) -> Result<(), SyncError> {
        self.send(BlobKind::New, blob)
    }

    pub fn send_update_blob(&mut self, blob: &Blob) -> Result<(), SyncError> {
        self.send(BlobKind::Update, blob)
    }

    pub fn send_remove_blob(&mut self, blob: &Blob) -> Result<(), SyncError> {
        self.send(BlobKind::Remove, blob)
    }

    /// Publish one frame's tracker snapshot, exactly once per frame.
    ///
    /// All removals are flushed before any NEW or UPDATE. Within each group
    /// no cross-track order is promised; snapshot order is what goes out.
    /// A track's first published frame (`age == 1`) is a NEW, every later
    /// one an UPDATE.
    pub fn publish(
        &mut self,
        camera_id: i32,
        tracks: &[Track],
        deleted: &[u64],
    ) -> Result<(), SyncError> {
        for &id in deleted {
            self.send_remove_blob(&Blob::removal(camera_id, id))?;
        }

        for track in tracks {
            let blob = Blob::from_track(camera_id, track);
            if track.age == 1 {
                self.send_new_blob(&blob)?;
            } else {
                self.send_update_blob(&blob)?;
            }
        }

        Ok(())
    }

    fn send(&mut self, kind: BlobKind, blob: &Blob) -> Result<(), SyncError> {
        let event = BlobEvent {
            kind,
            blob: blob.clone(),
        };
        bincode::serialize_into(&mut self.conn, &event)?;
        Ok(())
    }

    /// Borrow the underlying connection.
    pub fn get_ref(&self) -> &W {
        &self.conn
    }

    /// Unwrap the underlying connection.
    pub fn into_inner(self) -> W {
        self.conn
    }
}
