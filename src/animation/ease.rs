use std::str::FromStr;

use crate::foundation::error::KeytrackError;

/// Named easing curve applied to the normalized progress within a segment.
///
/// `easeIn`, `easeOut` and `easeInOut` are the cubic curves; the quadratic and
/// cubic families are also addressable by their explicit names.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    /// Identity.
    #[default]
    Linear,
    /// Slow start.
    EaseIn,
    /// Slow end.
    EaseOut,
    /// Slow start and end.
    EaseInOut,
    /// Quadratic slow start.
    InQuad,
    /// Quadratic slow end.
    OutQuad,
    /// Quadratic slow start and end.
    InOutQuad,
    /// Cubic slow start, same curve as `EaseIn`.
    InCubic,
    /// Cubic slow end, same curve as `EaseOut`.
    OutCubic,
    /// Cubic slow start and end, same curve as `EaseInOut`.
    InOutCubic,
}

impl Easing {
    /// Every named curve, in declaration order.
    pub const ALL: [Easing; 10] = [
        Self::Linear,
        Self::EaseIn,
        Self::EaseOut,
        Self::EaseInOut,
        Self::InQuad,
        Self::OutQuad,
        Self::InOutQuad,
        Self::InCubic,
        Self::OutCubic,
        Self::InOutCubic,
    ];

    /// Map progress `t` to eased progress. `t` is clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::EaseIn | Self::InCubic => t * t * t,
            Self::EaseOut | Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::EaseInOut | Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
        }
    }

    /// The name used in JSON and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseIn => "easeIn",
            Self::EaseOut => "easeOut",
            Self::EaseInOut => "easeInOut",
            Self::InQuad => "inQuad",
            Self::OutQuad => "outQuad",
            Self::InOutQuad => "inOutQuad",
            Self::InCubic => "inCubic",
            Self::OutCubic => "outCubic",
            Self::InOutCubic => "inOutCubic",
        }
    }
}

impl FromStr for Easing {
    type Err = KeytrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|e| e.name() == s)
            .ok_or_else(|| KeytrackError::validation(format!("unknown easing '{s}'")))
    }
}

impl std::fmt::Display for Easing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
