use std::fmt;

use serde::de::{self, MapAccess, Visitor, value::MapAccessDeserializer};

use crate::{
    animation::{track::KeyframeTrack, unit::ValueUnit},
    foundation::core::Point,
    foundation::error::{KeytrackError, KeytrackResult},
};

/// A numeric property that is either fixed or driven by a [`KeyframeTrack`].
///
/// In JSON a bare number is a fixed value and a track object is animated.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Animated {
    /// Same value at every time.
    Fixed(f64),
    /// Value sampled from a track.
    Track(KeyframeTrack),
}

impl Default for Animated {
    fn default() -> Self {
        Self::Fixed(0.0)
    }
}

impl From<f64> for Animated {
    fn from(value: f64) -> Self {
        Self::Fixed(value)
    }
}

impl From<KeyframeTrack> for Animated {
    fn from(track: KeyframeTrack) -> Self {
        Self::Track(track)
    }
}

// An object always goes to the track so its validation error surfaces intact.
impl<'de> serde::Deserialize<'de> for Animated {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AnimatedVisitor;

        impl<'de> Visitor<'de> for AnimatedVisitor {
            type Value = Animated;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a number or a keyframe track object")
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Animated, E> {
                Ok(Animated::Fixed(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Animated, E> {
                Ok(Animated::Fixed(v as f64))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Animated, E> {
                Ok(Animated::Fixed(v as f64))
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Animated, A::Error> {
                let track =
                    <KeyframeTrack as serde::Deserialize>::deserialize(MapAccessDeserializer::new(map))?;
                Ok(Animated::Track(track))
            }
        }

        deserializer.deserialize_any(AnimatedVisitor)
    }
}

impl Animated {
    /// Value at time `t`. Non-finite times fail even for fixed values.
    pub fn sample(&self, t: f64) -> KeytrackResult<f64> {
        match self {
            Self::Fixed(v) => {
                if !t.is_finite() {
                    return Err(KeytrackError::invalid_query(format!(
                        "sample time must be finite, got {t}"
                    )));
                }
                Ok(*v)
            }
            Self::Track(track) => track.value_at(t),
        }
    }

    /// The track's unit, `None` for fixed values.
    pub fn unit(&self) -> Option<ValueUnit> {
        match self {
            Self::Fixed(_) => None,
            Self::Track(track) => Some(track.config().unit),
        }
    }

    /// Time of the last keyframe, `None` for fixed values.
    pub fn end(&self) -> Option<f64> {
        match self {
            Self::Fixed(_) => None,
            Self::Track(track) => Some(track.end()),
        }
    }
}

/// A 2D position animated as one independent track per axis.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnimatedPosition {
    /// Horizontal coordinate in pixels.
    #[serde(default)]
    pub x: Animated,
    /// Vertical coordinate in pixels.
    #[serde(default)]
    pub y: Animated,
}

impl AnimatedPosition {
    /// Position built from per-axis properties.
    pub fn new(x: impl Into<Animated>, y: impl Into<Animated>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    /// Point at time `t`.
    pub fn sample(&self, t: f64) -> KeytrackResult<Point> {
        Ok(Point::new(self.x.sample(t)?, self.y.sample(t)?))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/value.rs"]
mod tests;
