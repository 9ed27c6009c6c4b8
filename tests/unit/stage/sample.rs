use super::*;
use crate::animation::{
    track::{KeyframeTrack, TrackConfig},
    unit::ValueUnit,
    value::AnimatedPosition,
};

fn hello_world() -> Composition {
    let mut comp = Composition::new(970, 540).unwrap();
    let rotation = KeyframeTrack::new(
        vec![100.0, 200.0, 201.0, 300.0],
        vec![0.0, 3600.0, 0.0, 360.0],
        TrackConfig::default().with_unit(ValueUnit::Degrees),
    )
    .unwrap();
    comp.add(
        TextClip::new("Hello World")
            .position(ClipPosition::Center)
            .rotation(rotation),
    )
    .unwrap();
    comp
}

#[test]
fn center_resolves_to_half_stage() {
    let comp = hello_world();
    let s = comp.sample_clip(0, FrameIndex(0)).unwrap();
    assert_eq!(s.position, Point::new(485.0, 270.0));
    assert_eq!(s.rotation_deg, 0.0);
    assert_eq!(s.transform, Affine::translate(Vec2::new(485.0, 270.0)));
}

#[test]
fn rotation_follows_track() {
    let comp = hello_world();
    assert_eq!(comp.sample_clip(0, FrameIndex(200)).unwrap().rotation_deg, 3600.0);
    assert_eq!(comp.sample_clip(0, FrameIndex(201)).unwrap().rotation_deg, 0.0);
    let mid = comp.sample_clip(0, FrameIndex(250)).unwrap().rotation_deg;
    assert!(mid > 0.0 && mid < 360.0);
}

#[test]
fn transform_rotates_about_anchor() {
    let comp = hello_world();
    // 3600 degrees is ten full turns.
    let s = comp.sample_clip(0, FrameIndex(200)).unwrap();
    let p = s.transform * Point::new(10.0, 0.0);
    assert!((p.x - 495.0).abs() < 1e-9);
    assert!((p.y - 270.0).abs() < 1e-9);
}

#[test]
fn secs_use_fps() {
    let comp = hello_world();
    let at_secs = comp.sample_secs(5.0).unwrap();
    let at_frame = comp.sample_frame(FrameIndex(150)).unwrap();
    assert_eq!(at_secs, at_frame);
    assert!(comp.sample_secs(f64::NAN).is_err());
}

#[test]
fn sample_frames_matches_single_frames() {
    let comp = hello_world();
    let all = comp.sample_frames(90..310).unwrap();
    assert_eq!(all.len(), 220);
    for (i, states) in all.iter().enumerate() {
        let f = FrameIndex(90 + i as u64);
        assert_eq!(states, &comp.sample_frame(f).unwrap());
    }
}

#[test]
fn out_of_range_clip_index() {
    let comp = hello_world();
    assert!(matches!(
        comp.sample_clip(3, FrameIndex(0)),
        Err(KeytrackError::Validation(_))
    ));
}

#[test]
fn explicit_position_is_sampled() {
    let mut comp = Composition::new(970, 540).unwrap();
    let x = KeyframeTrack::new(vec![0.0, 100.0], vec![-30.0, 485.0], TrackConfig::default())
        .unwrap();
    comp.add(
        TextClip::new("slide").position(ClipPosition::At(AnimatedPosition::new(x, 270.0))),
    )
    .unwrap();
    let s = comp.sample_clip(0, FrameIndex(100)).unwrap();
    assert_eq!(s.position, Point::new(485.0, 270.0));
}

#[test]
fn fit_scale_picks_tighter_axis() {
    let content = Size::new(970.0, 540.0);
    assert_eq!(
        fit_scale(Size::new(500.0, 500.0), content).unwrap(),
        500.0 / 970.0
    );
    assert_eq!(
        fit_scale(Size::new(1940.0, 540.0), content).unwrap(),
        1.0
    );
    assert_eq!(fit_scale(Size::new(0.0, 100.0), content).unwrap(), 0.0);
}

#[test]
fn fit_scale_rejects_bad_sizes() {
    let content = Size::new(970.0, 540.0);
    assert!(fit_scale(Size::new(-1.0, 100.0), content).is_err());
    assert!(fit_scale(Size::new(f64::NAN, 100.0), content).is_err());
    assert!(fit_scale(Size::new(100.0, 100.0), Size::ZERO).is_err());
}

#[test]
fn player_fit_scales_about_center() {
    let comp = hello_world();
    let fit = comp.fit_player(Size::new(485.0, 1000.0)).unwrap();
    assert_eq!(fit.scale, 0.5);
    assert_eq!(fit.origin(), Point::new(485.0, 270.0));
    let a = fit.to_affine();
    assert_eq!(a * fit.origin(), fit.origin());
    let corner = a * Point::new(0.0, 0.0);
    assert_eq!(corner, Point::new(242.5, 135.0));
}

#[test]
fn player_fit_matches_fit_scale() {
    let fit = PlayerFit::fit(Size::new(1280.0, 720.0), Size::new(970.0, 540.0)).unwrap();
    assert_eq!(
        fit.scale,
        fit_scale(Size::new(1280.0, 720.0), Size::new(970.0, 540.0)).unwrap()
    );
    assert_eq!((fit.width, fit.height), (970.0, 540.0));
    assert!(PlayerFit::fit(Size::new(1.0, 1.0), Size::ZERO).is_err());
}
