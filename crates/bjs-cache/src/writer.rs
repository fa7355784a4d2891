//! Background writer for the persistent tier.
//!
//! `set` hands entries to a dedicated thread and returns immediately.
//! Writes for one key are applied in submission order. If the thread
//! cannot be spawned, or has gone away, writes happen inline instead.

use std::sync::mpsc::{self, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use parking_lot::Mutex;

use crate::disk::DiskTier;
use crate::entry::CacheEntry;

enum Job {
    Write {
        hash: String,
        entry: Arc<CacheEntry>,
    },
    Flush(Sender<()>),
}

#[derive(Debug)]
pub(crate) struct DiskWriter {
    disk: DiskTier,
    sender: Mutex<Option<Sender<Job>>>,
    handle: Option<JoinHandle<()>>,
}

impl DiskWriter {
    pub(crate) fn spawn(disk: DiskTier) -> Self {
        let (sender, receiver) = mpsc::channel::<Job>();
        let worker_disk = disk.clone();
        let spawned = thread::Builder::new()
            .name("bjs-cache-writer".into())
            .spawn(move || {
                for job in receiver {
                    match job {
                        Job::Write { hash, entry } => write_logged(&worker_disk, &hash, &entry),
                        Job::Flush(done) => {
                            let _ = done.send(());
                        }
                    }
                }
            });

        match spawned {
            Ok(handle) => Self {
                disk,
                sender: Mutex::new(Some(sender)),
                handle: Some(handle),
            },
            Err(e) => {
                tracing::debug!(error = %e, "cache writer thread unavailable, writing inline");
                Self {
                    disk,
                    sender: Mutex::new(None),
                    handle: None,
                }
            }
        }
    }

    /// Queue a write without waiting for it.
    pub(crate) fn submit(&self, hash: String, entry: Arc<CacheEntry>) {
        let job = Job::Write { hash, entry };
        let rejected = match self.sender.lock().as_ref() {
            Some(sender) => sender.send(job).err().map(|e| e.0),
            None => Some(job),
        };
        if let Some(Job::Write { hash, entry }) = rejected {
            write_logged(&self.disk, &hash, &entry);
        }
    }

    /// Block until every write queued so far has been applied.
    pub(crate) fn flush(&self) {
        let (done, wait) = mpsc::channel();
        let queued = match self.sender.lock().as_ref() {
            Some(sender) => sender.send(Job::Flush(done)).is_ok(),
            None => false,
        };
        if queued {
            let _ = wait.recv();
        }
    }
}

impl Drop for DiskWriter {
    fn drop(&mut self) {
        // closing the channel ends the worker loop after the queue drains
        self.sender.get_mut().take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn write_logged(disk: &DiskTier, hash: &str, entry: &CacheEntry) {
    match disk.write(hash, entry) {
        Ok(()) => tracing::trace!(hash, "cache entry persisted"),
        Err(e) => tracing::debug!(error = %e, "cache write skipped"),
    }
}
