use std::ops::Range;

use rayon::prelude::*;

use crate::{
    foundation::core::{Affine, FrameIndex, Point, Size, Vec2},
    foundation::error::{KeytrackError, KeytrackResult},
    stage::model::{ClipPosition, Composition, TextClip},
};

/// Resolved state of one clip at one instant.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ClipState {
    /// Anchor position in stage pixels.
    pub position: Point,
    /// Rotation in degrees, as authored.
    pub rotation_deg: f64,
    /// Clip-to-stage transform: `T(position) * R(rotation)`.
    pub transform: Affine,
}

impl TextClip {
    /// Sample position and rotation at track time `t` on a stage of `stage` size.
    pub fn sample(&self, stage: Size, t: f64) -> KeytrackResult<ClipState> {
        let position = match &self.position {
            ClipPosition::Center => {
                if !t.is_finite() {
                    return Err(KeytrackError::invalid_query(format!(
                        "sample time must be finite, got {t}"
                    )));
                }
                Point::new(stage.width / 2.0, stage.height / 2.0)
            }
            ClipPosition::At(pos) => pos.sample(t)?,
        };
        let rotation_deg = self.rotation.sample(t)?;
        // Renderers take radians; tracks keep the authored degrees.
        let transform =
            Affine::translate(position.to_vec2()) * Affine::rotate(rotation_deg.to_radians());
        Ok(ClipState {
            position,
            rotation_deg,
            transform,
        })
    }
}

impl Composition {
    /// State of clip `index` at `frame`.
    pub fn sample_clip(&self, index: usize, frame: FrameIndex) -> KeytrackResult<ClipState> {
        let clip = self.clips.get(index).ok_or_else(|| {
            KeytrackError::validation(format!(
                "clip index {index} out of range ({} clips)",
                self.clips.len()
            ))
        })?;
        clip.sample(self.size(), frame.as_time())
    }

    /// States of every clip at `frame`, in clip order.
    #[tracing::instrument(skip(self), fields(clips = self.clips.len()))]
    pub fn sample_frame(&self, frame: FrameIndex) -> KeytrackResult<Vec<ClipState>> {
        self.sample_time(frame.as_time())
    }

    /// States of every clip `secs` seconds into the timeline.
    pub fn sample_secs(&self, secs: f64) -> KeytrackResult<Vec<ClipState>> {
        self.sample_time(self.fps.secs_to_time(secs))
    }

    /// States for every frame in `frames`, sampled in parallel.
    pub fn sample_frames(&self, frames: Range<u64>) -> KeytrackResult<Vec<Vec<ClipState>>> {
        frames
            .into_par_iter()
            .map(|f| self.sample_time(FrameIndex(f).as_time()))
            .collect()
    }

    /// Uniform scale and centered origin that fit the stage into `container`.
    pub fn fit_player(&self, container: Size) -> KeytrackResult<PlayerFit> {
        PlayerFit::fit(container, self.size())
    }

    fn sample_time(&self, t: f64) -> KeytrackResult<Vec<ClipState>> {
        let size = self.size();
        self.clips.iter().map(|clip| clip.sample(size, t)).collect()
    }
}

/// Largest uniform scale at which `content` fits inside `container`:
/// `min(container.width / content.width, container.height / content.height)`.
pub fn fit_scale(container: Size, content: Size) -> KeytrackResult<f64> {
    for (name, s) in [("container", container), ("content", content)] {
        let ok = s.width.is_finite() && s.height.is_finite();
        if !ok || s.width < 0.0 || s.height < 0.0 {
            return Err(KeytrackError::validation(format!(
                "{name} size must be finite and non-negative, got {}x{}",
                s.width, s.height
            )));
        }
    }
    if content.width == 0.0 || content.height == 0.0 {
        return Err(KeytrackError::validation("content size must be positive"));
    }
    Ok((container.width / content.width).min(container.height / content.height))
}

/// How a player surface of the stage's pixel size is scaled into its container.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PlayerFit {
    /// Uniform scale factor.
    pub scale: f64,
    /// Unscaled surface width in pixels.
    pub width: f64,
    /// Unscaled surface height in pixels.
    pub height: f64,
}

impl PlayerFit {
    /// Fit a surface of `content` size into `container`, see [`fit_scale`].
    pub fn fit(container: Size, content: Size) -> KeytrackResult<Self> {
        Ok(Self {
            scale: fit_scale(container, content)?,
            width: content.width,
            height: content.height,
        })
    }

    /// Transform origin: the center of the surface.
    pub fn origin(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Scale about [`PlayerFit::origin`].
    pub fn to_affine(&self) -> Affine {
        let c = Vec2::new(self.width / 2.0, self.height / 2.0);
        Affine::translate(c) * Affine::scale(self.scale) * Affine::translate(-c)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stage/sample.rs"]
mod tests;
