use rayon::prelude::*;

use crate::{
    animation::{ease::Easing, unit::ValueUnit},
    foundation::core::FrameIndex,
    foundation::error::{KeytrackError, KeytrackResult},
};

/// Options shared by every segment of a track.
///
/// In JSON the unit is spelled `type`, e.g. `{"easing": "easeIn", "type": "degrees"}`.
/// Missing keys take their defaults and unknown keys are rejected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrackConfig {
    /// Curve applied within each segment (default `linear`).
    pub easing: Easing,
    /// Unit of the values (default plain number).
    #[serde(rename = "type")]
    pub unit: ValueUnit,
}

impl TrackConfig {
    /// Replace the easing curve.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Replace the value unit.
    pub fn with_unit(mut self, unit: ValueUnit) -> Self {
        self.unit = unit;
        self
    }
}

/// A single control point of a [`KeyframeTrack`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Keyframe {
    /// Time marker.
    pub time: f64,
    /// Value reached at `time`.
    pub value: f64,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct TrackRepr {
    times: Vec<f64>,
    values: Vec<f64>,
    #[serde(default)]
    config: TrackConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    segments: Option<Vec<Easing>>,
}

/// Maps a time to a value by easing between sparse control points.
///
/// A track is immutable once built and sampling never mutates it, so one track
/// can be shared across threads and sampled concurrently.
///
/// ```
/// use keytrack::{KeyframeTrack, TrackConfig, ValueUnit};
///
/// let rotation = KeyframeTrack::new(
///     vec![100.0, 200.0, 201.0, 300.0],
///     vec![0.0, 3600.0, 0.0, 360.0],
///     TrackConfig::default().with_unit(ValueUnit::Degrees),
/// )?;
/// assert_eq!(rotation.value_at(50.0)?, 0.0);
/// assert_eq!(rotation.value_at(200.0)?, 3600.0);
/// assert_eq!(rotation.value_at(250.5)?, 180.0);
/// # Ok::<(), keytrack::KeytrackError>(())
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "TrackRepr", into = "TrackRepr")]
pub struct KeyframeTrack {
    times: Vec<f64>,
    values: Vec<f64>,
    config: TrackConfig,
    segments: Option<Vec<Easing>>, // len == times.len() - 1 when set
}

impl KeyframeTrack {
    /// Build a track from parallel time and value sequences.
    ///
    /// Fails with [`KeytrackError::InvalidTrack`] when the lengths differ, fewer
    /// than two points are given, any number is NaN or infinite, or the times
    /// decrease. Use [`KeyframeTrack::constant`] for a single-point track.
    pub fn new(times: Vec<f64>, values: Vec<f64>, config: TrackConfig) -> KeytrackResult<Self> {
        if times.len() < 2 {
            return Err(KeytrackError::invalid_track(format!(
                "a track needs at least 2 keyframes, got {}; use a constant track for a single value",
                times.len()
            )));
        }
        Self::from_points(times, values, config)
    }

    /// A track that yields `value` for every time.
    pub fn constant(value: f64, config: TrackConfig) -> KeytrackResult<Self> {
        Self::from_points(vec![0.0], vec![value], config)
    }

    fn from_points(times: Vec<f64>, values: Vec<f64>, config: TrackConfig) -> KeytrackResult<Self> {
        if times.is_empty() {
            return Err(KeytrackError::invalid_track("a track needs at least 1 keyframe"));
        }
        validate_points(&times, &values)?;
        Ok(Self {
            times,
            values,
            config,
            segments: None,
        })
    }

    /// Override the easing of segment `index` (between keyframes `index` and `index + 1`).
    pub fn with_segment_easing(mut self, index: usize, easing: Easing) -> KeytrackResult<Self> {
        let count = self.segment_count();
        if index >= count {
            return Err(KeytrackError::invalid_track(format!(
                "segment {index} out of range, track has {count} segments"
            )));
        }
        let default = self.config.easing;
        self.segments.get_or_insert_with(|| vec![default; count])[index] = easing;
        Ok(self)
    }

    /// Sample the track at time `t`.
    ///
    /// Times before the first keyframe yield the first value and times after the
    /// last keyframe yield the last value. Values come back in the track's unit.
    pub fn value_at(&self, t: f64) -> KeytrackResult<f64> {
        if !t.is_finite() {
            return Err(KeytrackError::invalid_query(format!(
                "sample time must be finite, got {t}"
            )));
        }

        let last = self.times.len() - 1;
        if t <= self.times[0] {
            return Ok(self.values[0]);
        }
        if t >= self.times[last] {
            return Ok(self.values[last]);
        }

        // times[0] < t < times[last], so 1 <= idx <= last.
        let idx = self.times.partition_point(|&k| k <= t);
        let (i, j) = (idx - 1, idx);
        let width = self.times[j] - self.times[i];
        if width <= 0.0 {
            return Ok(self.values[j]);
        }

        let f = (t - self.times[i]) / width;
        let fe = self.segment_easing(i).apply(f);
        Ok(self.values[i] + fe * (self.values[j] - self.values[i]))
    }

    /// Sample at a timeline frame; track times are frame numbers.
    pub fn value_at_frame(&self, frame: FrameIndex) -> KeytrackResult<f64> {
        self.value_at(frame.as_time())
    }

    /// Sample at `t` and convert the result to radians for angular tracks.
    pub fn radians_at(&self, t: f64) -> KeytrackResult<f64> {
        Ok(self.config.unit.to_radians(self.value_at(t)?))
    }

    /// Sample every time in `times`, in parallel. Any invalid time fails the batch.
    pub fn sample_many(&self, times: &[f64]) -> KeytrackResult<Vec<f64>> {
        times.par_iter().map(|&t| self.value_at(t)).collect()
    }

    /// Easing used by segment `index`.
    pub fn segment_easing(&self, index: usize) -> Easing {
        self.segments
            .as_ref()
            .and_then(|s| s.get(index).copied())
            .unwrap_or(self.config.easing)
    }

    /// Number of segments (one less than the number of keyframes).
    pub fn segment_count(&self) -> usize {
        self.times.len() - 1
    }

    /// Number of keyframes.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Always false; a track holds at least one keyframe.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Time of the first keyframe.
    pub fn start(&self) -> f64 {
        self.times[0]
    }

    /// Time of the last keyframe.
    pub fn end(&self) -> f64 {
        self.times[self.times.len() - 1]
    }

    /// Span between the first and last keyframe.
    pub fn duration(&self) -> f64 {
        self.end() - self.start()
    }

    /// Options this track was built with.
    pub fn config(&self) -> TrackConfig {
        self.config
    }

    /// Control points in time order.
    pub fn keyframes(&self) -> impl Iterator<Item = Keyframe> + '_ {
        self.times
            .iter()
            .zip(&self.values)
            .map(|(&time, &value)| Keyframe { time, value })
    }
}

fn validate_points(times: &[f64], values: &[f64]) -> KeytrackResult<()> {
    if times.len() != values.len() {
        return Err(KeytrackError::invalid_track(format!(
            "times and values differ in length ({} vs {})",
            times.len(),
            values.len()
        )));
    }
    if let Some(i) = times.iter().position(|t| !t.is_finite()) {
        return Err(KeytrackError::invalid_track(format!(
            "time at index {i} is not finite"
        )));
    }
    if let Some(i) = values.iter().position(|v| !v.is_finite()) {
        return Err(KeytrackError::invalid_track(format!(
            "value at index {i} is not finite"
        )));
    }
    if let Some(i) = times.windows(2).position(|w| w[0] > w[1]) {
        return Err(KeytrackError::invalid_track(format!(
            "times must be non-decreasing, {} follows {} at index {}",
            times[i + 1],
            times[i],
            i + 1
        )));
    }
    Ok(())
}

impl TryFrom<TrackRepr> for KeyframeTrack {
    type Error = KeytrackError;

    fn try_from(repr: TrackRepr) -> Result<Self, Self::Error> {
        // A lone keyframe in data is an explicit constant.
        let track = if repr.times.len() == 1 {
            Self::from_points(repr.times, repr.values, repr.config)?
        } else {
            Self::new(repr.times, repr.values, repr.config)?
        };

        match repr.segments {
            None => Ok(track),
            Some(segments) if segments.len() == track.segment_count() => Ok(Self {
                segments: Some(segments),
                ..track
            }),
            Some(segments) => Err(KeytrackError::invalid_track(format!(
                "expected {} segment easings, got {}",
                track.segment_count(),
                segments.len()
            ))),
        }
    }
}

impl From<KeyframeTrack> for TrackRepr {
    fn from(track: KeyframeTrack) -> Self {
        Self {
            times: track.times,
            values: track.values,
            config: track.config,
            segments: track.segments,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/track.rs"]
mod tests;
