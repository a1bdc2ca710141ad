use crate::controllers::generation::data::completion_data::CompletionData;
use crate::controllers::generation::data::generation_settings::GenerationSettings;
use crate::controllers::generation::errors::generation::GenerationFailure;
use crate::controllers::generation::events::generation_event::GenerationEvent;
use crate::controllers::generation::ports::completion_port::GenerationCompletionPort;
use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::generate_image::generate_image::{
    GenerateImageError, build_worker_pool, generate_image_cancelable,
};
use crate::core::data::image_buffer::ImageBuffer;
use crate::core::data::view_area::ViewArea;
use crate::core::fractals::mandelbrot::kernel::{
    MandelbrotKernel, MandelbrotKernelConstructorError,
};
use std::error::Error;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Instant;

#[derive(Debug)]
pub enum GenerationControllerConstructorError {
    Kernel(MandelbrotKernelConstructorError),
    WorkerPool(rayon::ThreadPoolBuildError),
}

impl fmt::Display for GenerationControllerConstructorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kernel(err) => write!(f, "invalid kernel settings: {}", err),
            Self::WorkerPool(err) => write!(f, "worker pool build failed: {}", err),
        }
    }
}

impl Error for GenerationControllerConstructorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Kernel(err) => Some(err),
            Self::WorkerPool(err) => Some(err),
        }
    }
}

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<Option<(u64, ViewArea)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    settings: GenerationSettings,
    kernel: MandelbrotKernel,
    pool: rayon::ThreadPool,
    completion_port: Arc<dyn GenerationCompletionPort>,
}

/// Top-level entry point: accepts generation requests, supersedes any
/// in-flight run, and raises a single completion event per finished run.
///
/// A dedicated thread drains the single-slot latest-request mailbox; an
/// in-flight run observes supersession through a generation-counter
/// comparison, so issuing a new request is what cancels the old run. This is
/// last-request-wins, not a queue.
pub struct GenerationController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl GenerationController {
    pub fn new(
        settings: GenerationSettings,
        completion_port: Arc<dyn GenerationCompletionPort>,
    ) -> Result<Self, GenerationControllerConstructorError> {
        let kernel = MandelbrotKernel::new(settings.max_iterations, settings.escape_radius)
            .map_err(GenerationControllerConstructorError::Kernel)?;
        let pool = build_worker_pool(settings.workers)
            .map_err(GenerationControllerConstructorError::WorkerPool)?;

        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            settings,
            kernel,
            pool,
            completion_port,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared);
        });

        Ok(Self {
            shared,
            worker: Some(worker),
        })
    }

    /// Asynchronously requests generation of `area`, superseding any
    /// in-flight run, and returns the new run's generation id.
    pub fn request_generation(&self, area: ViewArea) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut guard = self.shared.latest_request.lock().unwrap();
            *guard = Some((generation, area));
        }

        self.shared.wake.notify_one();

        generation
    }

    /// Explicit stop: invalidates the in-flight run (and any not-yet-taken
    /// request) without starting a new one. No event is emitted for it.
    pub fn cancel_in_flight(&self) {
        self.shared.generation.fetch_add(1, Ordering::SeqCst);

        let mut guard = self.shared.latest_request.lock().unwrap();
        *guard = None;
    }

    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    fn worker_loop(shared: &Arc<SharedState>) {
        loop {
            let (job_generation, area) = {
                let mut guard = shared.latest_request.lock().unwrap();
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(request) = guard.take() {
                        break request;
                    }

                    guard = shared.wake.wait(guard).unwrap();
                }
            };

            // Stale the moment a newer request bumps the counter.
            let cancel_token = || {
                shared.shutdown.load(Ordering::Relaxed)
                    || job_generation != shared.generation.load(Ordering::Relaxed)
            };

            let start = Instant::now();
            let result = Self::run_generation(shared, &area, &cancel_token);
            let elapsed = start.elapsed();

            match result {
                Ok(image) => {
                    let current_gen = shared.generation.load(Ordering::Acquire);

                    if job_generation != current_gen {
                        continue;
                    }

                    shared
                        .completion_port
                        .notify(GenerationEvent::Completed(CompletionData {
                            generation: job_generation,
                            area,
                            image,
                            elapsed,
                        }));

                    shared
                        .last_completed_generation
                        .store(job_generation, Ordering::Release);
                }
                Err(RunOutcome::Cancelled) => {
                    continue;
                }
                Err(RunOutcome::Failed(message)) => {
                    let current_gen = shared.generation.load(Ordering::Acquire);

                    if job_generation != current_gen {
                        continue;
                    }

                    shared
                        .completion_port
                        .notify(GenerationEvent::Failed(GenerationFailure {
                            generation: job_generation,
                            message,
                        }));

                    shared
                        .last_completed_generation
                        .store(job_generation, Ordering::Release);
                }
            }
        }
    }

    fn run_generation<C: CancelToken>(
        shared: &SharedState,
        area: &ViewArea,
        cancel: &C,
    ) -> Result<ImageBuffer, RunOutcome> {
        generate_image_cancelable(
            area,
            &shared.kernel,
            shared.settings.grid_scale,
            &shared.pool,
            cancel,
        )
        .map_err(|e| match e {
            GenerateImageError::Cancelled(_) => RunOutcome::Cancelled,
            GenerateImageError::Worker(fault) => RunOutcome::Failed(fault.to_string()),
        })
    }
}

enum RunOutcome {
    Cancelled,
    Failed(String),
}

impl Drop for GenerationController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
