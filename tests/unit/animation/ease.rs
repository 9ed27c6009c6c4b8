use super::*;

#[test]
fn endpoints_are_stable() {
    for ease in Easing::ALL {
        assert_eq!(ease.apply(0.0), 0.0, "{ease}");
        assert_eq!(ease.apply(1.0), 1.0, "{ease}");
    }
}

#[test]
fn monotonic_over_unit_interval() {
    for ease in Easing::ALL {
        let mut prev = ease.apply(0.0);
        for i in 1..=100u32 {
            let v = ease.apply(f64::from(i) / 100.0);
            assert!(v >= prev, "{ease} decreased at step {i}");
            assert!((0.0..=1.0).contains(&v));
            prev = v;
        }
    }
}

#[test]
fn ease_in_starts_slow() {
    assert!(Easing::EaseIn.apply(0.1) < 0.1);
    assert!(Easing::EaseIn.apply(0.5) < 0.5);
    assert!(Easing::EaseOut.apply(0.5) > 0.5);
}

#[test]
fn input_is_clamped() {
    assert_eq!(Easing::InQuad.apply(-1.0), 0.0);
    assert_eq!(Easing::InQuad.apply(2.0), 1.0);
}

#[test]
fn names_parse_back() {
    for ease in Easing::ALL {
        assert_eq!(ease.name().parse::<Easing>().unwrap(), ease);
        let json = serde_json::to_string(&ease).unwrap();
        assert_eq!(json, format!("\"{}\"", ease.name()));
    }
    assert!("bounce".parse::<Easing>().is_err());
}
