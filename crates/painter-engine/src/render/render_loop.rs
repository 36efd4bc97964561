use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use anyhow::{anyhow, Context, Result};
use log::*;

use crate::config::LoopConfig;
use crate::op::{Operation, StopRequest};
use crate::queue::OpQueue;
use crate::surface::{Surface, SurfaceProvider};

use super::DisplaySink;

/// Cloneable producer handle onto a render loop's queue.
///
/// Safe to use from any number of threads. Never blocks.
#[derive(Debug, Clone)]
pub struct OpSender {
    queue: Arc<OpQueue>,
}

impl OpSender {
    #[inline]
    pub fn post(&self, op: Operation) {
        self.queue.push(op);
    }

    /// Enqueues `ops` contiguously; operations from other producers cannot
    /// land between them.
    #[inline]
    pub fn post_all<I>(&self, ops: I)
    where
        I: IntoIterator<Item = Operation>,
    {
        self.queue.push_all(ops);
    }
}

/// Double-buffered render loop running on a dedicated thread.
///
/// Operations are applied one at a time, in queue order, to the "next"
/// buffer. When one reports ready, the buffer is handed to the sink and the
/// two buffers swap roles, so the sink never sees a buffer that is being
/// drawn into.
///
/// Lifecycle: [`start`](RenderLoop::start) once, then
/// [`stop_and_wait`](RenderLoop::stop_and_wait). Dropping a running loop
/// stops it.
pub struct RenderLoop {
    sender: OpSender,
    stop_flag: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl RenderLoop {
    /// Creates both buffers and spawns the render thread.
    ///
    /// Fails if the provider cannot create a surface or the thread cannot be
    /// spawned; nothing is left running in that case.
    pub fn start<P, K>(provider: &P, sink: K, config: LoopConfig) -> Result<Self>
    where
        P: SurfaceProvider,
        K: DisplaySink<P::Surface> + 'static,
    {
        let size = config.surface_size;
        let next = provider
            .create_surface(size)
            .context("failed to create render surface")?;
        let prev = provider
            .create_surface(size)
            .context("failed to create render surface")?;

        let queue = Arc::new(OpQueue::new());
        let stop_flag = Arc::new(AtomicBool::new(false));

        let worker = RenderWorker {
            queue: queue.clone(),
            next,
            prev,
            sink,
            stop_flag: stop_flag.clone(),
            frames: 0,
        };

        let handle = thread::Builder::new()
            .name(config.thread_name.clone())
            .spawn(move || worker.run())
            .context("failed to spawn render thread")?;

        info!(
            "RenderLoop: started '{}' with {}x{} buffers",
            config.thread_name, size.width, size.height
        );

        Ok(Self {
            sender: OpSender { queue },
            stop_flag,
            worker: Some(handle),
        })
    }

    /// Producer handle for other threads.
    #[inline]
    pub fn sender(&self) -> OpSender {
        self.sender.clone()
    }

    #[inline]
    pub fn post(&self, op: Operation) {
        self.note_if_stopped(|| format!("'{}'", op.name()));
        self.sender.post(op);
    }

    pub fn post_all<I>(&self, ops: I)
    where
        I: IntoIterator<Item = Operation>,
    {
        let ops: Vec<Operation> = ops.into_iter().collect();
        self.note_if_stopped(|| format!("batch of {} ops", ops.len()));
        self.sender.post_all(ops);
    }

    /// Number of operations queued but not yet taken by the render thread.
    pub fn pending(&self) -> usize {
        self.sender.queue.len()
    }

    fn note_if_stopped(&self, what: impl FnOnce() -> String) {
        if self.worker.is_none() {
            debug!("RenderLoop: {} posted after stop, it will not run", what());
        }
    }

    /// True until the loop has been stopped (or its thread has died).
    pub fn is_running(&self) -> bool {
        self.worker.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Enqueues a stop request behind everything already queued and blocks
    /// until the render thread has exited.
    ///
    /// Idempotent. Returns an error if the render thread panicked.
    pub fn stop_and_wait(&mut self) -> Result<()> {
        let Some(handle) = self.worker.take() else {
            return Ok(());
        };

        debug!("RenderLoop: stop requested");
        self.sender
            .post(Operation::Stop(StopRequest::new(self.stop_flag.clone())));

        handle
            .join()
            .map_err(|_| anyhow!("render thread panicked"))
    }
}

impl Drop for RenderLoop {
    fn drop(&mut self) {
        if let Err(e) = self.stop_and_wait() {
            error!("RenderLoop: {e:#}");
        }
    }
}

/// State owned by the render thread.
struct RenderWorker<S, K> {
    queue: Arc<OpQueue>,
    next: S,
    prev: S,
    sink: K,
    stop_flag: Arc<AtomicBool>,
    frames: u64,
}

impl<S, K> RenderWorker<S, K>
where
    S: Surface,
    K: DisplaySink<S>,
{
    fn run(mut self) {
        info!("RenderLoop: thread started");

        loop {
            let op = self.queue.pop();
            trace!("RenderLoop: applying {}", op.name());

            if op.apply(&mut self.next) {
                self.publish();
            }

            if self.stop_flag.load(Ordering::Acquire) {
                break;
            }
        }

        info!("RenderLoop: thread stopped after {} frames", self.frames);
    }

    fn publish(&mut self) {
        self.sink.present(&self.next);
        std::mem::swap(&mut self.next, &mut self.prev);
        self.frames += 1;
        debug!("RenderLoop: published frame {}", self.frames);
    }
}
