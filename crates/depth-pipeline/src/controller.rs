use crate::{Display, PipelineConfig, PipelineError, Resources};
use chrono::Local;
use depth_base::Size;
use depth_camera::FrameSource;
use depth_infer::{DepthEstimator, Preprocessor};
use depth_record::{Recorder, RecordingSettings, timestamped_path};
use depth_render::{FpsCounter, Postprocessor, overlay};
use std::time::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    Configuring,
    Running,
    Stopping,
    Released,
}

/// How a run that did not fail came to an end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// The stop key was pressed or the window was closed.
    StopRequested,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub reason: StopReason,
}

/// Resources held for one run. Released exactly once: camera, then
/// recorder, then display, whichever of them were acquired.
pub struct PipelineSession {
    source: Option<Box<dyn FrameSource>>,
    recorder: Option<Recorder>,
    display: Option<Box<dyn Display>>,
    fps: FpsCounter,
    frames: u64,
}

impl PipelineSession {
    fn new() -> Self {
        Self {
            source: None,
            recorder: None,
            display: None,
            fps: FpsCounter::new(),
            frames: 0,
        }
    }

    pub fn is_recording(&self) -> bool {
        self.recorder.as_ref().is_some_and(Recorder::is_recording)
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn release(&mut self) {
        if let Some(mut source) = self.source.take() {
            source.release();
        }
        if let Some(mut recorder) = self.recorder.take() {
            if let Err(e) = recorder.stop() {
                log::warn!("failed to finalize recording: {}", e);
            }
        }
        if let Some(mut display) = self.display.take() {
            display.close();
        }
    }
}

impl Drop for PipelineSession {
    fn drop(&mut self) {
        self.release();
    }
}

/// Runs the capture, inference, render, display and record loop.
pub struct PipelineController<R: Resources> {
    config: PipelineConfig,
    resources: R,
    estimator: DepthEstimator,
    preprocessor: Preprocessor,
    postprocessor: Postprocessor,
    state: PipelineState,
}

impl<R: Resources> PipelineController<R> {
    /// The estimator is loaded by the caller, so a bad model never reaches here.
    pub fn new(config: PipelineConfig, estimator: DepthEstimator, resources: R) -> Self {
        let preprocessor = Preprocessor::new(config.scaling);
        let postprocessor = Postprocessor::new(config.colormap, config.polarity);
        Self {
            config,
            resources,
            estimator,
            preprocessor,
            postprocessor,
            state: PipelineState::Idle,
        }
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn resources(&self) -> &R {
        &self.resources
    }

    fn transition(&mut self, state: PipelineState) {
        log::info!("pipeline {:?} -> {:?}", self.state, state);
        self.state = state;
    }

    /// Run until the stop control fires or an error ends the loop.
    ///
    /// All acquired resources are released before this returns, on every path.
    pub fn run(&mut self) -> Result<RunSummary, PipelineError> {
        if self.state != PipelineState::Idle {
            return Err(PipelineError::InvalidState(self.state));
        }
        self.transition(PipelineState::Configuring);
        let mut session = match self.start() {
            Ok(session) => session,
            Err(e) => {
                // dropping the partial session already released it
                self.transition(PipelineState::Released);
                return Err(e);
            }
        };

        self.transition(PipelineState::Running);
        let outcome = self.run_loop(&mut session);

        self.transition(PipelineState::Stopping);
        session.release();
        self.transition(PipelineState::Released);

        match &outcome {
            Ok(summary) => log::info!("stopped after {} frames", summary.frames),
            Err(e) if e.is_end_of_stream() => {
                log::info!("source ended after {} frames", session.frames())
            }
            Err(e) => log::error!("stopped after {} frames: {}", session.frames(), e),
        }
        outcome
    }

    fn start(&mut self) -> Result<PipelineSession, PipelineError> {
        let mut session = PipelineSession::new();

        let source = self.resources.open_source(&self.config.camera)?;
        let capture = source.size();
        session.source = Some(source);

        // the window comes first so a display failure leaves no empty recording
        let composite = Size::new(capture.width * 2, capture.height);
        let display = self.resources.open_display(
            &self.config.window_title,
            composite,
            self.config.stop_key,
        )?;
        session.display = Some(display);

        if let Some(recording) = &self.config.recording {
            let settings = match self.config.resolution() {
                Some(preset) => {
                    RecordingSettings::for_preset(preset, recording.frame_rate, recording.codec)
                }
                None => RecordingSettings {
                    frame_rate: recording.frame_rate,
                    size: Size::new(capture.width * 2, capture.height),
                    codec: recording.codec,
                },
            };
            let path = timestamped_path(&recording.dir, &Local::now(), recording.codec.extension());
            session.recorder = Some(self.resources.open_recorder(&path, settings)?);
        }

        // measure the first interval from the moment frames start flowing
        session.fps = FpsCounter::new();
        Ok(session)
    }

    fn run_loop(&mut self, session: &mut PipelineSession) -> Result<RunSummary, PipelineError> {
        let target = self.estimator.input_size();
        loop {
            let (Some(source), Some(display)) = (session.source.as_mut(), session.display.as_mut())
            else {
                return Err(PipelineError::InvalidState(self.state));
            };

            let started = Instant::now();
            let frame = source.next_frame()?;
            let tensor = self.preprocessor.to_tensor(&frame, target)?;
            let depth = self.estimator.infer(tensor)?;
            let mut composite = self.postprocessor.compose(&depth, &frame)?;

            let text = session.fps.update(Instant::now());
            overlay(&mut composite, text, &self.config.text_style);
            display.show(&composite)?;

            if let Some(recorder) = session.recorder.as_mut() {
                if let Err(e) = recorder.write(&composite) {
                    log::warn!("recording stopped: {}", e);
                    if let Some(mut recorder) = session.recorder.take() {
                        if let Err(e) = recorder.stop() {
                            log::warn!("failed to finalize recording: {}", e);
                        }
                    }
                }
            }

            session.frames += 1;
            log::debug!("frame {} in {:?}", session.frames, started.elapsed());

            if display.stop_requested() {
                return Ok(RunSummary {
                    frames: session.frames,
                    reason: StopReason::StopRequested,
                });
            }
        }
    }
}
