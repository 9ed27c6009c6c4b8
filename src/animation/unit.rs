/// Unit of the value axis of a track.
///
/// Tracks never convert between units while sampling. A renderer that expects
/// radians calls [`ValueUnit::to_radians`] on the sampled value itself.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum ValueUnit {
    /// Plain number.
    #[default]
    Number,
    /// Angle in degrees.
    Degrees,
}

impl ValueUnit {
    /// Whether values carry an angle.
    pub fn is_angular(self) -> bool {
        matches!(self, Self::Degrees)
    }

    /// Convert a value in this unit to radians. Plain numbers pass through.
    pub fn to_radians(self, value: f64) -> f64 {
        match self {
            Self::Number => value,
            Self::Degrees => value.to_radians(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/unit.rs"]
mod tests;
