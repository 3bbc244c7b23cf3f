use super::provider::ContentProvider;
use crate::app::session::GenerationRequest;
use crate::trace_debug;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("{provider} provider failed: {source}")]
    Provider {
        provider: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to start generation runtime: {0}")]
    Runtime(String),

    #[error("Generation worker stopped without returning a result")]
    WorkerStopped,

    #[error("A generation is already in progress")]
    Busy,
}

#[derive(Debug)]
pub enum GenerationOutcome {
    Completed {
        request: GenerationRequest,
        content: String,
    },
    Failed {
        request: GenerationRequest,
        error: GenerationError,
    },
}

impl GenerationOutcome {
    pub fn request(&self) -> &GenerationRequest {
        match self {
            GenerationOutcome::Completed { request, .. } => request,
            GenerationOutcome::Failed { request, .. } => request,
        }
    }
}

struct InFlight {
    request: GenerationRequest,
    handle: JoinHandle<()>,
}

/// Runs one generation at a time on a worker thread.
///
/// egui runs on a blocking thread, so each request gets its own thread with a small tokio
/// runtime. The result comes back over a channel that the UI polls once per frame.
pub struct GenerationPipeline {
    provider: Arc<dyn ContentProvider>,
    sender: Sender<GenerationOutcome>,
    receiver: Receiver<GenerationOutcome>,
    in_flight: Option<InFlight>,
}

impl GenerationPipeline {
    pub fn new(provider: Arc<dyn ContentProvider>) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            provider,
            sender,
            receiver,
            in_flight: None,
        }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn start(&mut self, request: GenerationRequest) -> Result<(), GenerationError> {
        if self.in_flight.is_some() {
            return Err(GenerationError::Busy);
        }

        let provider = Arc::clone(&self.provider);
        let sender = self.sender.clone();
        let worker_request = request.clone();

        let handle = std::thread::spawn(move || {
            let outcome = run_request(provider.as_ref(), worker_request);
            // The receiver lives as long as the pipeline; a send error means the app is closing.
            let _ = sender.send(outcome);
        });

        trace_debug!(
            "Generation worker started for style {} using {} provider",
            request.style,
            self.provider.name()
        );
        self.in_flight = Some(InFlight { request, handle });
        Ok(())
    }

    /// Non-blocking check for a finished generation.
    pub fn poll(&mut self) -> Option<GenerationOutcome> {
        match self.receiver.try_recv() {
            Ok(outcome) => {
                self.in_flight = None;
                Some(outcome)
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => self.check_worker_stopped(),
        }
    }

    /// Block until the current generation finishes or `timeout` elapses.
    pub fn wait(&mut self, timeout: Duration) -> Option<GenerationOutcome> {
        if self.in_flight.is_none() {
            return None;
        }

        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.receiver.recv_timeout(remaining.min(Duration::from_millis(20))) {
                Ok(outcome) => {
                    self.in_flight = None;
                    return Some(outcome);
                }
                Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
                    if let Some(outcome) = self.check_worker_stopped() {
                        return Some(outcome);
                    }
                    if remaining.is_zero() {
                        return None;
                    }
                }
            }
        }
    }

    /// A worker that panicked finishes without sending anything.
    fn check_worker_stopped(&mut self) -> Option<GenerationOutcome> {
        let finished = self
            .in_flight
            .as_ref()
            .map(|in_flight| in_flight.handle.is_finished())
            .unwrap_or(false);
        if !finished {
            return None;
        }

        // The worker may have sent its result between the first check and now.
        if let Ok(outcome) = self.receiver.try_recv() {
            self.in_flight = None;
            return Some(outcome);
        }

        let in_flight = self.in_flight.take()?;
        let _ = in_flight.handle.join();
        Some(GenerationOutcome::Failed {
            request: in_flight.request,
            error: GenerationError::WorkerStopped,
        })
    }
}

fn run_request(provider: &dyn ContentProvider, request: GenerationRequest) -> GenerationOutcome {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            return GenerationOutcome::Failed {
                request,
                error: GenerationError::Runtime(e.to_string()),
            }
        }
    };

    let result = runtime.block_on(provider.generate(&request.style, &request.prompt));
    match result {
        Ok(content) => GenerationOutcome::Completed { request, content },
        Err(source) => GenerationOutcome::Failed {
            request,
            error: GenerationError::Provider {
                provider: provider.name().to_string(),
                source,
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::generation::provider::{placeholder_content, MockContentProvider};
    use async_trait::async_trait;
    use chrono::Local;

    struct FailingProvider;

    #[async_trait]
    impl ContentProvider for FailingProvider {
        fn name(&self) -> &str {
            "failing"
        }

        async fn generate(&self, _style: &str, _prompt: &str) -> anyhow::Result<String> {
            anyhow::bail!("backend unavailable")
        }
    }

    struct PanickingProvider;

    #[async_trait]
    impl ContentProvider for PanickingProvider {
        fn name(&self) -> &str {
            "panicking"
        }

        async fn generate(&self, _style: &str, _prompt: &str) -> anyhow::Result<String> {
            panic!("provider bug")
        }
    }

    fn request(prompt: &str) -> GenerationRequest {
        GenerationRequest {
            style: "tim-ferriss".to_string(),
            prompt: prompt.to_string(),
            started_at: Local::now(),
        }
    }

    #[test]
    fn test_completed_outcome() {
        let mut pipeline = GenerationPipeline::new(Arc::new(MockContentProvider::immediate()));
        pipeline.start(request("P")).expect("start");
        assert!(pipeline.is_busy());

        match pipeline.wait(Duration::from_secs(5)) {
            Some(GenerationOutcome::Completed { request, content }) => {
                assert_eq!(request.prompt, "P");
                assert_eq!(content, placeholder_content("tim-ferriss", "P"));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(!pipeline.is_busy());
    }

    #[test]
    fn test_busy_pipeline_rejects_second_start() {
        let mut pipeline = GenerationPipeline::new(Arc::new(MockContentProvider::new(
            Duration::from_millis(200),
        )));
        pipeline.start(request("first")).expect("start");
        assert!(matches!(
            pipeline.start(request("second")),
            Err(GenerationError::Busy)
        ));
        assert!(pipeline.wait(Duration::from_secs(5)).is_some());
    }

    #[test]
    fn test_provider_error_becomes_failed_outcome() {
        let mut pipeline = GenerationPipeline::new(Arc::new(FailingProvider));
        pipeline.start(request("P")).expect("start");

        match pipeline.wait(Duration::from_secs(5)) {
            Some(GenerationOutcome::Failed { error, .. }) => {
                assert!(error.to_string().contains("backend unavailable"));
                assert!(error.to_string().contains("failing"));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_panicking_provider_is_reported_as_stopped_worker() {
        let mut pipeline = GenerationPipeline::new(Arc::new(PanickingProvider));
        pipeline.start(request("P")).expect("start");

        match pipeline.wait(Duration::from_secs(5)) {
            Some(GenerationOutcome::Failed { error, request }) => {
                assert!(matches!(error, GenerationError::WorkerStopped));
                assert_eq!(request.prompt, "P");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(!pipeline.is_busy());
    }

    #[test]
    fn test_poll_without_request_returns_none() {
        let mut pipeline = GenerationPipeline::new(Arc::new(MockContentProvider::immediate()));
        assert!(pipeline.poll().is_none());
        assert!(pipeline.wait(Duration::from_millis(10)).is_none());
        assert_eq!(pipeline.provider_name(), "mock");
    }
}
