//! keytrack maps animation time to property values through keyframe tracks.
//!
//! A [`KeyframeTrack`] holds sparse `(time, value)` control points, an
//! [`Easing`] curve and a [`ValueUnit`]. Sampling clamps outside the keyed range
//! and eases between neighbouring keyframes inside it.
//!
//! # Layers
//!
//! 1. **Tracks**: [`KeyframeTrack`], [`TrackConfig`], [`Easing`], [`ValueUnit`]
//! 2. **Properties**: [`Animated`] (fixed or tracked) and [`AnimatedPosition`] (one track per axis)
//! 3. **Stage**: [`Composition`] of [`TextClip`]s sampled per frame into [`ClipState`]s,
//!    plus [`fit_scale`] for fitting a player surface into its container
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure sampling**: tracks and compositions are immutable once built and
//!   safe to sample from many threads at once.
//! - **No implicit unit conversion**: angular tracks return degrees; converting
//!   to radians is the caller's job ([`ValueUnit::to_radians`]).
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod foundation;
mod stage;

pub use animation::ease::Easing;
pub use animation::track::{Keyframe, KeyframeTrack, TrackConfig};
pub use animation::unit::ValueUnit;
pub use animation::value::{Animated, AnimatedPosition};
pub use foundation::core::{Affine, Fps, FrameIndex, Point, Size, Vec2};
pub use foundation::error::{KeytrackError, KeytrackResult};
pub use stage::model::{ClipPosition, Composition, TextAlign, TextClip};
pub use stage::sample::{ClipState, PlayerFit, fit_scale};
