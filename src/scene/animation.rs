use crate::curve::family::CurveFamily;
use crate::curve::time::TimeMapping;
use crate::foundation::error::{CurvecastError, CurvecastResult};
use crate::scene::config::RenderConfig;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// A complete run description: render settings plus one curve family.
///
/// This is the JSON-facing, human-edited representation, e.g.
///
/// ```json
/// {
///   "render": { "width": 640, "height": 480, "frame_count": 300, "scale_initial": 100.0 },
///   "curve": { "family": "rose", "k": 5, "a": 2.0 }
/// }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Animation {
    /// Render settings.
    #[serde(default)]
    pub render: RenderConfig,
    /// Curve family and parameters.
    pub curve: CurveFamily,
}

impl Animation {
    /// Build an animation for `curve` with default render settings, using the family's preferred
    /// scale and time mapping.
    pub fn preset(curve: CurveFamily) -> Self {
        let render = RenderConfig {
            scale_initial: curve.default_scale(),
            time: Some(curve.default_time_mapping()),
            ..RenderConfig::default()
        };
        Self { render, curve }
    }

    /// Parse an animation from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> CurvecastResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| CurvecastError::serde(format!("parse animation JSON: {e}")))
    }

    /// Parse an animation from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> CurvecastResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            CurvecastError::validation(format!("open animation JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Write the animation as pretty-printed JSON.
    pub fn to_writer_pretty<W: std::io::Write>(&self, w: W) -> CurvecastResult<()> {
        serde_json::to_writer_pretty(w, self)
            .map_err(|e| CurvecastError::serde(format!("write animation JSON: {e}")))
    }

    /// Write the animation to `path` as pretty-printed JSON, creating the parent directory.
    pub fn to_path(&self, path: impl AsRef<Path>) -> CurvecastResult<()> {
        use anyhow::Context as _;
        let path = path.as_ref();
        crate::encode::ffmpeg::ensure_parent_dir(path)?;
        let f = File::create(path)
            .with_context(|| format!("create animation JSON '{}'", path.display()))?;
        let mut w = BufWriter::new(f);
        self.to_writer_pretty(&mut w)?;
        use std::io::Write as _;
        w.flush()
            .with_context(|| format!("flush animation JSON '{}'", path.display()))?;
        Ok(())
    }

    /// Validate render settings and curve parameters.
    pub fn validate(&self) -> CurvecastResult<()> {
        self.render.validate()?;
        self.curve.validate()
    }

    /// Time mapping in effect: the explicit one, else the family default.
    pub fn time_mapping(&self) -> TimeMapping {
        self.render
            .time
            .unwrap_or_else(|| self.curve.default_time_mapping())
    }
}
