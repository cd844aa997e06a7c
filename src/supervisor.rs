//! Console worker supervisor.
//!
//! Keeps exactly one console worker alive while the host link is up: when no
//! worker is held and the transport reports ready, one worker is spawned;
//! when the held worker terminates (it exits on its own once the link
//! drops), its thread is joined — reclaiming the stack — and the slot is
//! cleared so the next readiness check may spawn a fresh one.
//!
//! The poll interval is fixed and coarse (500 ms by default), independent of
//! the sampling loop's cadence.  A worker that never terminates is simply
//! never replaced; there is no backpressure or retry beyond this
//! poll-and-respawn cycle.

use std::thread::JoinHandle;
use std::time::Duration;

use log::{info, warn};

use crate::app::ports::LinkPort;

/// Worker slot: either empty or holding the one live worker.
///
/// The sum type makes the reclaim-before-respawn invariant structural —
/// there is no way to hold a stale handle while spawning a new worker.
pub enum ShellWorker {
    Idle,
    Running(JoinHandle<()>),
}

/// Supervises the console worker's lifecycle.
///
/// `F` is the spawn factory; each call must create one new worker thread.
pub struct ConsoleSupervisor<L, F> {
    link: L,
    spawn_shell: F,
    worker: ShellWorker,
    poll_interval: Duration,
}

impl<L, F> ConsoleSupervisor<L, F>
where
    L: LinkPort,
    F: FnMut() -> JoinHandle<()>,
{
    pub fn new(link: L, spawn_shell: F, poll_interval: Duration) -> Self {
        Self {
            link,
            spawn_shell,
            worker: ShellWorker::Idle,
            poll_interval,
        }
    }

    /// One liveness check.
    ///
    /// Never blocks: spawning is immediate and reclaiming joins a thread
    /// that has already terminated.
    pub fn poll(&mut self) {
        self.worker = match std::mem::replace(&mut self.worker, ShellWorker::Idle) {
            ShellWorker::Idle => {
                if self.link.is_ready() {
                    info!("console link up — spawning worker");
                    ShellWorker::Running((self.spawn_shell)())
                } else {
                    ShellWorker::Idle
                }
            }
            ShellWorker::Running(handle) => {
                if handle.is_finished() {
                    if handle.join().is_err() {
                        warn!("console worker panicked");
                    }
                    info!("console worker reclaimed");
                    ShellWorker::Idle
                } else {
                    ShellWorker::Running(handle)
                }
            }
        };
    }

    /// Whether a worker is currently held (it may have terminated but not
    /// yet been reclaimed by the next poll).
    pub fn is_running(&self) -> bool {
        matches!(self.worker, ShellWorker::Running(_))
    }

    /// Poll forever at the fixed interval.
    pub fn run(mut self) -> ! {
        info!(
            "supervisor polling every {} ms",
            self.poll_interval.as_millis()
        );
        loop {
            self.poll();
            std::thread::sleep(self.poll_interval);
        }
    }
}
