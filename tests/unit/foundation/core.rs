use super::*;

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
    assert_eq!(Fps::new(30, 1).unwrap(), Fps::default());
}

#[test]
fn fps_seconds_map_to_fractional_frames() {
    let fps = Fps::new(30, 1).unwrap();
    assert_eq!(fps.secs_to_time(2.5), 75.0);
    assert!((fps.frames_to_secs(45) - 1.5).abs() < 1e-12);
}

#[test]
fn ntsc_frame_duration() {
    let fps = Fps::new(30000, 1001).unwrap();
    assert!((fps.frame_duration_secs() - 0.033_366_7).abs() < 1e-6);
}

#[test]
fn frame_index_as_time() {
    assert_eq!(FrameIndex(250).as_time(), 250.0);
}
