use crate::curve::sample::Curve;
use crate::curve::time::TimeMapping;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::cancel::CancelToken;
use crate::foundation::core::{Fps, FrameIndex, PixelPoint, Rgb8};
use crate::foundation::error::{CurvecastError, CurvecastResult};
use crate::render::background::Background;
use crate::render::color::ColorCycler;
use crate::render::composite::{CompositeMode, blend_into, draw_axes, overlay_into};
use crate::render::layer::Layer;
use crate::render::mapper::CoordinateMapper;
use crate::render::path::PathAccumulator;
use crate::scene::animation::Animation;
use crate::scene::config::{DrawMode, RenderConfig};
use rayon::prelude::*;

/// Options controlling how `RenderSession::render` schedules work.
#[derive(Clone, Debug)]
pub struct RenderSessionOpts {
    /// Evaluate and project curve samples on a dedicated rayon thread pool.
    pub parallel: bool,
    /// Frames sampled per batch. `0` is treated as `1`.
    pub chunk_size: usize,
    /// Override the number of rayon worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
}

impl Default for RenderSessionOpts {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

/// Run statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames in the run.
    pub frames_total: u64,
    /// Frames accepted by the sink.
    pub frames_emitted: u64,
    /// Frames whose curve sample was drawn as a new segment.
    pub segments_drawn: u64,
    /// The run stopped early because the cancel token fired.
    pub cancelled: bool,
}

/// Session-oriented renderer for one curve animation.
///
/// A session resolves and validates the configuration up front, then renders the whole run into a
/// [`FrameSink`] or single frames on demand. Frames are produced strictly in index order.
pub struct RenderSession {
    config: RenderConfig,
    curve: Box<dyn Curve>,
    background: Box<dyn Background>,
    time: TimeMapping,
    frame_count: u64,
    mapper: CoordinateMapper,
    cycler: ColorCycler,
    opts: RenderSessionOpts,
}

impl std::fmt::Debug for RenderSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderSession")
            .field("config", &self.config)
            .field("time", &self.time)
            .field("frame_count", &self.frame_count)
            .field("opts", &self.opts)
            .finish_non_exhaustive()
    }
}

impl RenderSession {
    /// Construct a session for an arbitrary curve.
    ///
    /// When `config.time` is unset the default [`TimeMapping`] is used.
    pub fn new(
        config: &RenderConfig,
        curve: impl Curve + 'static,
        opts: RenderSessionOpts,
    ) -> CurvecastResult<Self> {
        config.validate()?;
        let time = config.time.unwrap_or_default();
        Ok(Self::from_parts(config.clone(), Box::new(curve), time, opts))
    }

    /// Construct a session for a built-in family, falling back to its preferred time mapping.
    pub fn from_animation(anim: &Animation, opts: RenderSessionOpts) -> CurvecastResult<Self> {
        anim.validate()?;
        let time = anim.time_mapping();
        Ok(Self::from_parts(
            anim.render.clone(),
            Box::new(anim.curve.clone()),
            time,
            opts,
        ))
    }

    fn from_parts(
        config: RenderConfig,
        curve: Box<dyn Curve>,
        time: TimeMapping,
        opts: RenderSessionOpts,
    ) -> Self {
        let frame_count = config.resolved_frame_count();
        let mapper =
            CoordinateMapper::new(config.canvas(), config.resolved_center(), config.y_axis);
        let cycler = ColorCycler::new(config.color, frame_count);
        let background: Box<dyn Background> = Box::new(config.background);
        Self {
            config,
            curve,
            background,
            time,
            frame_count,
            mapper,
            cycler,
            opts,
        }
    }

    /// Replace the configured background with a custom generator.
    pub fn with_background(mut self, background: impl Background + 'static) -> Self {
        self.background = Box::new(background);
        self
    }

    /// Number of frames in the run.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Resolved settings.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Output frame rate.
    pub fn fps(&self) -> Fps {
        self.config.fps
    }

    /// Curve parameter used for frame `idx`.
    pub fn t_at(&self, idx: FrameIndex) -> f64 {
        self.time.t_at(idx, self.frame_count, self.config.fps)
    }

    /// Projected pixel of frame `idx`'s sample, or `None` when it is undefined or off-canvas.
    ///
    /// Depends only on `idx`, so samples can be computed out of order.
    pub fn project(&self, idx: FrameIndex) -> Option<PixelPoint> {
        let sample = self.curve.sample(self.t_at(idx));
        self.mapper.project(sample, self.config.scale_at(idx))
    }

    /// Render a single frame by replaying the run up to and including `frame`.
    ///
    /// The projected history is drawn once from an empty path, which yields the same curve layer
    /// in both draw modes.
    pub fn render_frame(&self, frame: FrameIndex) -> CurvecastResult<Layer> {
        if frame.0 >= self.frame_count {
            return Err(CurvecastError::validation(format!(
                "frame {} is outside the run (frame_count {})",
                frame.0, self.frame_count
            )));
        }
        let mut state = FrameState::new(self);
        state.history = (0..=frame.0).map(|i| self.project(FrameIndex(i))).collect();
        state.redraw(self);
        state.compose(self, frame)?;
        Ok(state.out)
    }

    /// Render the whole run into `sink`.
    ///
    /// The sink receives `begin`, then frames `0..frame_count` in strictly increasing order, then
    /// `end`. `cancel` is polled before every frame; on cancellation the sink is finalized with
    /// the frames emitted so far. A sink error aborts the run after a best-effort `end` and is
    /// reported as [`CurvecastError::Sink`].
    #[tracing::instrument(
        skip_all,
        fields(frames = self.frame_count, mode = ?self.config.draw_mode, parallel = self.opts.parallel)
    )]
    pub fn render(
        &self,
        sink: &mut dyn FrameSink,
        cancel: &CancelToken,
    ) -> CurvecastResult<RenderStats> {
        let pool = if self.opts.parallel {
            Some(build_thread_pool(self.opts.threads)?)
        } else {
            None
        };
        let chunk_size = normalized_chunk_size(self.opts.chunk_size);

        sink.begin(SinkConfig {
            width: self.config.width,
            height: self.config.height,
            fps: self.config.fps,
            frame_count: self.frame_count,
        })?;
        tracing::info!(
            width = self.config.width,
            height = self.config.height,
            duration_secs = self.config.fps.frames_to_secs(self.frame_count),
            "render started"
        );

        let mut stats = RenderStats {
            frames_total: self.frame_count,
            ..RenderStats::default()
        };
        let mut state = FrameState::new(self);
        let mut last_emitted: Option<FrameIndex> = None;

        let mut chunk_start = 0u64;
        while chunk_start < self.frame_count {
            let chunk_end = chunk_start
                .saturating_add(chunk_size)
                .min(self.frame_count);
            let samples = self.project_chunk(chunk_start, chunk_end, pool.as_ref());
            tracing::debug!(chunk_start, chunk_end, "projected chunk");

            for (i, sample) in (chunk_start..chunk_end).zip(samples) {
                let idx = FrameIndex(i);
                if cancel.is_cancelled() {
                    stats.cancelled = true;
                    tracing::info!(
                        frames_emitted = stats.frames_emitted,
                        "render cancelled"
                    );
                    sink.end()?;
                    return Ok(stats);
                }

                if state.advance(self, idx, sample) {
                    stats.segments_drawn += 1;
                }
                state.compose(self, idx)?;

                if let Err(err) = sink.push_frame(idx, &state.out) {
                    if let Err(end_err) = sink.end() {
                        tracing::warn!(error = %end_err, "sink finalization failed after error");
                    }
                    return Err(CurvecastError::sink(idx, last_emitted, err));
                }
                last_emitted = Some(idx);
                stats.frames_emitted += 1;
            }
            chunk_start = chunk_end;
        }

        sink.end()?;
        tracing::info!(
            frames_emitted = stats.frames_emitted,
            segments_drawn = stats.segments_drawn,
            "render finished"
        );
        Ok(stats)
    }

    fn project_chunk(
        &self,
        start: u64,
        end: u64,
        pool: Option<&rayon::ThreadPool>,
    ) -> Vec<Option<PixelPoint>> {
        match pool {
            Some(pool) => pool.install(|| {
                (start..end)
                    .into_par_iter()
                    .map(|i| self.project(FrameIndex(i)))
                    .collect()
            }),
            None => (start..end).map(|i| self.project(FrameIndex(i))).collect(),
        }
    }
}

/// Layers and drawing state owned by one pass over the run.
struct FrameState {
    curve_layer: Layer,
    /// Every pixel a stroke touched, painted white. Only kept for [`CompositeMode::Overlay`].
    coverage: Option<Layer>,
    background: Layer,
    out: Layer,
    acc: PathAccumulator,
    history: Vec<Option<PixelPoint>>,
    static_bg_ready: bool,
}

impl FrameState {
    fn new(session: &RenderSession) -> Self {
        let canvas = session.config.canvas();
        let coverage = match session.config.composite {
            CompositeMode::Weighted => None,
            CompositeMode::Overlay => Some(Layer::black(canvas)),
        };
        Self {
            curve_layer: Layer::black(canvas),
            coverage,
            background: Layer::black(canvas),
            out: Layer::black(canvas),
            acc: PathAccumulator::new(),
            history: Vec::new(),
            static_bg_ready: false,
        }
    }

    /// Feed frame `idx`'s sample into the curve layer. Returns `true` when a segment was drawn.
    fn advance(
        &mut self,
        session: &RenderSession,
        idx: FrameIndex,
        sample: Option<PixelPoint>,
    ) -> bool {
        match session.config.draw_mode {
            DrawMode::Streaming => self.stroke(session, idx, sample),
            DrawMode::FullRedraw => {
                self.history.push(sample);
                self.redraw(session)
            }
        }
    }

    /// Clear the curve layer and draw `self.history` from an empty path.
    ///
    /// Returns whether the last sample drew a segment.
    fn redraw(&mut self, session: &RenderSession) -> bool {
        self.curve_layer.fill(Rgb8::BLACK);
        if let Some(coverage) = self.coverage.as_mut() {
            coverage.fill(Rgb8::BLACK);
        }
        self.acc.reset();
        let history = std::mem::take(&mut self.history);
        let mut drew = false;
        for (j, sample) in history.iter().enumerate() {
            drew = self.stroke(session, FrameIndex(j as u64), *sample);
        }
        self.history = history;
        drew
    }

    fn stroke(
        &mut self,
        session: &RenderSession,
        idx: FrameIndex,
        sample: Option<PixelPoint>,
    ) -> bool {
        let thickness = session.config.line_thickness;
        let prev = self.acc.last_valid();
        let drew = self.acc.advance(
            sample,
            &mut self.curve_layer,
            session.cycler.color_for(idx),
            thickness,
        );
        if drew
            && let (Some(coverage), Some(a), Some(b)) = (self.coverage.as_mut(), prev, sample)
        {
            coverage.draw_line(a, b, Rgb8::WHITE, thickness);
        }
        drew
    }

    /// Composite frame `idx` into `self.out`.
    fn compose(&mut self, session: &RenderSession, idx: FrameIndex) -> CurvecastResult<()> {
        if !(session.background.is_static() && self.static_bg_ready) {
            session
                .background
                .render(idx, session.frame_count, &mut self.background);
            self.static_bg_ready = session.background.is_static();
        }
        match &self.coverage {
            Some(coverage) => overlay_into(
                &mut self.out,
                &self.background,
                &self.curve_layer,
                coverage,
            )?,
            None => blend_into(
                &mut self.out,
                &self.background,
                &self.curve_layer,
                session.config.blend,
            )?,
        }
        draw_axes(&mut self.out, session.mapper.center(), session.config.axes);
        Ok(())
    }
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    if chunk_size == 0 {
        1
    } else {
        chunk_size as u64
    }
}

fn build_thread_pool(threads: Option<usize>) -> CurvecastResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(CurvecastError::validation(
            "render 'threads' must be >= 1 when set",
        ));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| CurvecastError::evaluation(format!("failed to build rayon thread pool: {e}")))
}
