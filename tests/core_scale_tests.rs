use approx::assert_relative_eq;
use chart_reconcile::core::{
    BandScale, DataKey, Easing, LinearScale, OrdinalColorScale, ValueDomain,
};
use chart_reconcile::render::Color;

#[test]
fn linear_scale_maps_and_inverts() {
    let scale = LinearScale::horizontal(10.0, 20.0, 400.0).expect("scale");
    assert_eq!(scale.map(10.0), 0.0);
    assert_eq!(scale.map(20.0), 400.0);
    assert_relative_eq!(scale.invert(scale.map(13.5)), 13.5, epsilon = 1e-9);
}

#[test]
fn vertical_scale_is_inverted() {
    let scale = LinearScale::vertical(0.0, 1.0, 300.0).expect("scale");
    assert_eq!(scale.map(0.0), 300.0);
    assert_eq!(scale.map(1.0), 0.0);
}

#[test]
fn degenerate_domain_never_divides_by_zero() {
    let scale = LinearScale::vertical(0.0, 0.0, 300.0).expect("scale");
    assert!(scale.is_degenerate());
    assert_eq!(scale.map(0.0), 150.0);
    assert_eq!(scale.map(1e9), 150.0);
    assert_eq!(scale.invert(42.0), 0.0);
}

#[test]
fn non_finite_domain_is_rejected() {
    assert!(LinearScale::new((f64::NAN, 1.0), (0.0, 1.0)).is_err());
    assert!(LinearScale::new((0.0, 1.0), (0.0, f64::INFINITY)).is_err());
}

#[test]
fn band_scale_splits_range_with_padding() {
    let band = BandScale::new(4, (0.0, 410.0), 0.1).expect("band");
    assert_relative_eq!(band.step(), 100.0, epsilon = 1e-9);
    assert_relative_eq!(band.bandwidth(), 90.0, epsilon = 1e-9);
    assert_relative_eq!(band.position(0), 10.0, epsilon = 1e-9);
    assert_relative_eq!(band.center(3), 355.0, epsilon = 1e-9);
    assert!(BandScale::new(4, (0.0, 100.0), 1.0).is_err());
}

#[test]
fn value_domain_policies() {
    let extent = Some((4.0, 9.0));
    assert_eq!(ValueDomain::Data.resolve(extent), (4.0, 9.0));
    assert_eq!(ValueDomain::ZeroBased.resolve(extent), (0.0, 9.0));
    assert_eq!(ValueDomain::ZeroBased.resolve(Some((-3.0, -1.0))), (-3.0, 0.0));
    assert_eq!(
        ValueDomain::Fixed { min: 0.0, max: 1.0 }.resolve(extent),
        (0.0, 1.0)
    );
    assert_eq!(ValueDomain::Data.resolve(None), (0.0, 0.0));
}

#[test]
fn ordinal_colors_are_stable_for_unchanged_category_set() {
    let palette = [
        Color::from_rgb8(0x2a, 0x69, 0x65),
        Color::from_rgb8(0x4e, 0xa1, 0x9b),
    ];
    let keys: Vec<DataKey> = ["a", "b", "c"].into_iter().map(DataKey::from).collect();
    let first = OrdinalColorScale::new(&palette, &keys).expect("scale");
    let second = OrdinalColorScale::new(&palette, &keys).expect("scale");

    for key in &keys {
        assert_eq!(first.color(key), second.color(key));
    }
    assert_eq!(first.color(&keys[2]), palette[0]);
    assert!(OrdinalColorScale::new(&[], &keys).is_err());
}

#[test]
fn back_in_out_overshoots_both_ends() {
    assert!(Easing::BackInOut.apply(0.1) < 0.0);
    assert!(Easing::BackInOut.apply(0.9) > 1.0);
    assert_relative_eq!(Easing::ExpInOut.apply(0.25), 1.0 - Easing::ExpInOut.apply(0.75), epsilon = 1e-12);
}
