use clap::Parser;
use depth_base::{ResolutionPreset, init_stdout_logger};
use depth_camera::{CameraConfig, CaptureSource};
use depth_infer::{DepthEstimator, Device, InputScaling, ModelSource, OnnxBackend};
use depth_pipeline::{PipelineConfig, PipelineController, RecordingConfig, SystemResources};
use depth_record::Codec;
use depth_render::{Colormap, Polarity};
use log::LevelFilter;
use std::path::PathBuf;

/// Live monocular depth estimation: camera on the left, depth on the right.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Depth model (ONNX).
    #[arg(long, env = "DEPTH_MODEL_PATH", default_value = "models/depth.onnx")]
    model: PathBuf,
    /// Camera index, device node, or video file.
    #[arg(long, default_value = "0")]
    source: String,
    /// Resolution: 1 = 240p, 2 = 480p, 3 = 720p, 4 = 1080p.
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..=4))]
    resolution: u8,
    /// Save the composited stream to a timestamped video file.
    #[arg(long)]
    record: bool,
    /// Directory for recordings.
    #[arg(long, default_value = "videos")]
    output_dir: PathBuf,
    /// Recording frame rate.
    #[arg(long, default_value_t = 10.0)]
    fps: f64,
    /// Four-character recording codec.
    #[arg(long, default_value = "mp4v")]
    codec: Codec,
    /// Colormap: magma, bone or gray.
    #[arg(long, default_value = "magma")]
    colormap: Colormap,
    /// Flip depth intensities before coloring.
    #[arg(long)]
    invert: bool,
    /// Use `(v - zero_point) * scale` instead of `v / 255` for model input.
    #[arg(long)]
    input_scale: Option<f32>,
    /// Zero point for `--input-scale`.
    #[arg(long, default_value_t = 0.0)]
    input_zero_point: f32,
    /// Run on this CUDA device instead of the CPU.
    #[arg(long)]
    cuda: Option<i32>,
    /// Number of V4L2 capture buffers.
    #[arg(long, default_value_t = 4)]
    buffers: u32,
    /// More logging (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => depth_base::logging::default_level(),
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    fn pipeline_config(&self) -> Result<PipelineConfig, String> {
        let preset = ResolutionPreset::try_from(self.resolution)?;
        let camera = CameraConfig::default()
            .with_source(CaptureSource::parse(&self.source))
            .with_resolution(Some(preset))
            .with_buffer_count(self.buffers);
        let recording = self.record.then(|| RecordingConfig {
            dir: self.output_dir.clone(),
            frame_rate: self.fps,
            codec: self.codec,
        });
        let scaling = match self.input_scale {
            Some(scale) => InputScaling::Quantized {
                scale,
                zero_point: self.input_zero_point,
            },
            None => InputScaling::UnitRange,
        };
        let polarity = if self.invert {
            Polarity::Inverted
        } else {
            Polarity::Direct
        };
        Ok(PipelineConfig::default()
            .with_camera(camera)
            .with_recording(recording)
            .with_scaling(scaling)
            .with_colormap(self.colormap)
            .with_polarity(polarity))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_stdout_logger(args.log_level());

    let config = args.pipeline_config()?;

    println!("Depth View");
    println!("Model: {}", args.model.display());
    println!("Source: {}", config.camera.source());
    if let Some(preset) = config.resolution() {
        println!("Resolution: {}", preset);
    }
    if let Some(recording) = &config.recording {
        println!("Recording to {}", recording.dir.display());
    }
    println!("Controls: Q to exit");
    println!();

    let device = match args.cuda {
        Some(device_id) => Device::Cuda { device_id },
        None => Device::Cpu,
    };
    let estimator = DepthEstimator::load(ModelSource::File(args.model.clone()), &OnnxBackend::new(device))?;
    log::info!("model input {} ({:?})", estimator.input_size(), estimator.layout());

    let mut controller = PipelineController::new(config, estimator, SystemResources);
    match controller.run() {
        Ok(summary) => {
            println!("Exiting after {} frames", summary.frames);
            Ok(())
        }
        Err(e) if e.is_end_of_stream() => {
            println!("End of stream");
            Ok(())
        }
        Err(e) => {
            // run() has already released every resource
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
