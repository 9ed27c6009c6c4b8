use super::*;
use crate::animation::{ease::Easing, track::TrackConfig};

#[test]
fn fixed_ignores_time_but_rejects_nan() {
    let v = Animated::from(12.5);
    assert_eq!(v.sample(-100.0).unwrap(), 12.5);
    assert_eq!(v.sample(1e9).unwrap(), 12.5);
    assert!(matches!(
        v.sample(f64::NAN),
        Err(KeytrackError::InvalidQuery(_))
    ));
    assert_eq!(v.unit(), None);
    assert_eq!(v.end(), None);
}

#[test]
fn axes_animate_independently() {
    let x = KeyframeTrack::new(
        vec![0.0, 100.0],
        vec![-30.0, 485.0],
        TrackConfig::default().with_easing(Easing::EaseIn),
    )
    .unwrap();
    let pos = AnimatedPosition::new(x, 270.0);
    assert_eq!(pos.sample(0.0).unwrap(), Point::new(-30.0, 270.0));
    assert_eq!(pos.sample(100.0).unwrap(), Point::new(485.0, 270.0));
    let mid = pos.sample(50.0).unwrap();
    assert!(mid.x > -30.0 && mid.x < 485.0);
    assert_eq!(mid.y, 270.0);
}

#[test]
fn json_accepts_number_or_track() {
    let pos: AnimatedPosition = serde_json::from_str(
        r#"{"x": {"times": [0, 100], "values": [-30, 485], "config": {"easing": "easeIn"}}, "y": 270}"#,
    )
    .unwrap();
    assert!(matches!(pos.x, Animated::Track(_)));
    assert_eq!(pos.y, Animated::Fixed(270.0));
    assert_eq!(pos.x.end(), Some(100.0));
    assert_eq!(pos.x.unit(), Some(ValueUnit::Number));
}

#[test]
fn json_track_errors_are_kept() {
    let err = serde_json::from_str::<Animated>(r#"{"times": [1, 2, 3], "values": [1, 2]}"#)
        .unwrap_err();
    assert!(err.to_string().contains("invalid track"), "{err}");
    assert!(serde_json::from_str::<Animated>(r#""spin""#).is_err());
    assert_eq!(
        serde_json::from_str::<Animated>("-4").unwrap(),
        Animated::Fixed(-4.0)
    );
}
