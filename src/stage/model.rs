use std::{fmt, path::Path};

use anyhow::Context as _;
use serde::de::{self, MapAccess, Visitor, value::MapAccessDeserializer};

use crate::{
    animation::{
        unit::ValueUnit,
        value::{Animated, AnimatedPosition},
    },
    foundation::core::{Fps, Size},
    foundation::error::{KeytrackError, KeytrackResult},
};

/// A fixed-size stage holding text clips with animated properties.
///
/// The composition is a pure data model: it can be built in code or loaded
/// from JSON, and sampled per frame (see [`Composition::sample_frame`]).
/// Displaying or rendering it is left to the caller.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Composition {
    /// Stage width in pixels.
    pub width: u32,
    /// Stage height in pixels.
    pub height: u32,
    /// Timeline frame rate; track times are frame numbers.
    #[serde(default)]
    pub fps: Fps,
    /// Clips in insertion order.
    #[serde(default)]
    pub clips: Vec<TextClip>,
}

/// Horizontal alignment of a text clip's content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Align to the left edge.
    #[default]
    Left,
    /// Center on the anchor.
    Center,
    /// Align to the right edge.
    Right,
}

/// Where a clip sits on the stage.
///
/// JSON accepts the keyword `"center"` or an `{x, y}` object of animated axes.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(into = "ClipPositionRepr")]
pub enum ClipPosition {
    /// The middle of the stage.
    Center,
    /// Explicit, possibly animated, coordinates.
    At(AnimatedPosition),
}

impl Default for ClipPosition {
    fn default() -> Self {
        Self::At(AnimatedPosition::default())
    }
}

#[derive(Clone, serde::Serialize)]
#[serde(untagged)]
enum ClipPositionRepr {
    Keyword(PositionKeyword),
    At(AnimatedPosition),
}

#[derive(Clone, Copy, serde::Serialize)]
#[serde(rename_all = "lowercase")]
enum PositionKeyword {
    Center,
}

impl<'de> serde::Deserialize<'de> for ClipPosition {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ClipPositionVisitor;

        impl<'de> Visitor<'de> for ClipPositionVisitor {
            type Value = ClipPosition;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("\"center\" or an {x, y} object")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<ClipPosition, E> {
                match v {
                    "center" => Ok(ClipPosition::Center),
                    other => Err(E::unknown_variant(other, &["center"])),
                }
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<ClipPosition, A::Error> {
                let pos = <AnimatedPosition as serde::Deserialize>::deserialize(
                    MapAccessDeserializer::new(map),
                )?;
                Ok(ClipPosition::At(pos))
            }
        }

        deserializer.deserialize_any(ClipPositionVisitor)
    }
}

impl From<ClipPosition> for ClipPositionRepr {
    fn from(pos: ClipPosition) -> Self {
        match pos {
            ClipPosition::Center => Self::Keyword(PositionKeyword::Center),
            ClipPosition::At(pos) => Self::At(pos),
        }
    }
}

/// A line of text placed on the stage.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TextClip {
    /// Text content.
    pub text: String,
    /// Content alignment relative to the position.
    #[serde(default)]
    pub text_align: TextAlign,
    /// Anchor position in stage pixels.
    #[serde(default)]
    pub position: ClipPosition,
    /// Rotation in degrees about the anchor.
    #[serde(default)]
    pub rotation: Animated,
}

impl TextClip {
    /// A clip at the stage origin without rotation.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Set the content alignment.
    pub fn text_align(mut self, align: TextAlign) -> Self {
        self.text_align = align;
        self
    }

    /// Set the anchor position.
    pub fn position(mut self, position: ClipPosition) -> Self {
        self.position = position;
        self
    }

    /// Set the rotation, in degrees.
    pub fn rotation(mut self, rotation: impl Into<Animated>) -> Self {
        self.rotation = rotation.into();
        self
    }

    /// Check that angular tracks only drive angles.
    pub fn validate(&self) -> KeytrackResult<()> {
        if let ClipPosition::At(pos) = &self.position {
            for (axis, prop) in [("x", &pos.x), ("y", &pos.y)] {
                if prop.unit() == Some(ValueUnit::Degrees) {
                    return Err(KeytrackError::validation(format!(
                        "position.{axis} of clip '{}' uses an angular unit",
                        self.text
                    )));
                }
            }
        }
        Ok(())
    }

    /// Time of the last keyframe across all animated properties.
    pub fn end(&self) -> Option<f64> {
        let mut ends = vec![self.rotation.end()];
        if let ClipPosition::At(pos) = &self.position {
            ends.push(pos.x.end());
            ends.push(pos.y.end());
        }
        ends.into_iter().flatten().reduce(f64::max)
    }
}

impl Composition {
    /// An empty stage of `width` x `height` pixels at 30 fps.
    pub fn new(width: u32, height: u32) -> KeytrackResult<Self> {
        let comp = Self {
            width,
            height,
            fps: Fps::default(),
            clips: Vec::new(),
        };
        comp.validate()?;
        Ok(comp)
    }

    /// Replace the frame rate.
    pub fn with_fps(mut self, fps: Fps) -> Self {
        self.fps = fps;
        self
    }

    /// Append a clip, returning its index.
    pub fn add(&mut self, clip: TextClip) -> KeytrackResult<usize> {
        if let Err(err) = clip.validate() {
            tracing::debug!(%err, "rejected clip");
            return Err(err);
        }
        self.clips.push(clip);
        Ok(self.clips.len() - 1)
    }

    /// Check stage dimensions, frame rate and every clip.
    pub fn validate(&self) -> KeytrackResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(KeytrackError::validation(format!(
                "composition size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        Fps::new(self.fps.num, self.fps.den)?;
        self.clips.iter().try_for_each(TextClip::validate)
    }

    /// Stage size in pixels.
    pub fn size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }

    /// Time of the last keyframe in the composition, 0 when nothing animates.
    pub fn end(&self) -> f64 {
        self.clips
            .iter()
            .filter_map(TextClip::end)
            .fold(0.0, f64::max)
    }

    /// Parse and validate a composition from JSON text.
    pub fn from_json_str(s: &str) -> KeytrackResult<Self> {
        let comp: Self = serde_json::from_str(s).map_err(|e| KeytrackError::serde(e.to_string()))?;
        comp.validate()?;
        Ok(comp)
    }

    /// Read, parse and validate a composition JSON file.
    #[tracing::instrument]
    pub fn from_path(path: &Path) -> KeytrackResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read composition '{}'", path.display()))?;
        let comp = Self::from_json_str(&s)?;
        tracing::debug!(clips = comp.clips.len(), "loaded composition");
        Ok(comp)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stage/model.rs"]
mod tests;
