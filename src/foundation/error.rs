use crate::foundation::core::FrameIndex;

/// Crate-wide result alias.
pub type CurvecastResult<T> = Result<T, CurvecastError>;

/// Errors surfaced by configuration, rendering, and frame sinks.
///
/// Per-frame domain and bounds conditions are not errors: undefined curve samples and
/// off-canvas projections break path continuity and rendering continues.
#[derive(thiserror::Error, Debug)]
pub enum CurvecastError {
    /// Invalid configuration, detected before the frame loop starts.
    #[error("validation error: {0}")]
    Validation(String),

    /// Failure while evaluating or rendering outside of the sink boundary.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// The frame sink rejected frame `frame`. Fatal to the run.
    #[error(
        "sink failed at frame {} (last emitted: {}): {source}",
        .frame.0,
        fmt_last_emitted(.last_emitted)
    )]
    Sink {
        /// Frame index whose hand-off failed.
        frame: FrameIndex,
        /// Last frame index the sink accepted, if any.
        last_emitted: Option<FrameIndex>,
        /// Underlying sink error.
        #[source]
        source: Box<CurvecastError>,
    },

    /// JSON (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error (I/O, image encoding, ...).
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CurvecastError {
    /// Build a [`CurvecastError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CurvecastError::Evaluation`].
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`CurvecastError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    pub(crate) fn sink(
        frame: FrameIndex,
        last_emitted: Option<FrameIndex>,
        source: CurvecastError,
    ) -> Self {
        Self::Sink {
            frame,
            last_emitted,
            source: Box::new(source),
        }
    }
}

fn fmt_last_emitted(last: &Option<FrameIndex>) -> String {
    match last {
        Some(f) => f.0.to_string(),
        None => "none".to_owned(),
    }
}
