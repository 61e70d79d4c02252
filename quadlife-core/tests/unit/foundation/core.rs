use super::*;
use serde_json::json;

#[test]
fn bucket_boundaries() {
    assert_eq!(Bucket::of(0), Bucket::Dead);
    assert_eq!(Bucket::of(1), Bucket::Low);
    assert_eq!(Bucket::of(4), Bucket::Low);
    assert_eq!(Bucket::of(5), Bucket::Medium);
    assert_eq!(Bucket::of(9), Bucket::Medium);
    assert_eq!(Bucket::of(10), Bucket::High);
    assert_eq!(Bucket::of(14), Bucket::High);
    assert_eq!(Bucket::of(15), Bucket::Max);
    assert_eq!(Bucket::of(u32::MAX), Bucket::Max);
}

#[test]
fn spawn_count_is_top_of_range() {
    let counts: Vec<u32> = Bucket::ALIVE.iter().map(|b| b.spawn_count()).collect();
    assert_eq!(counts, vec![4, 9, 14, 19]);
    assert_eq!(Bucket::Dead.spawn_count(), 0);

    // Every spawn count classifies back into its own bucket.
    for b in Bucket::ALIVE {
        assert_eq!(Bucket::of(b.spawn_count()), b);
    }
}

#[test]
fn index_follows_ascending_order() {
    for (i, b) in Bucket::ALL.into_iter().enumerate() {
        assert_eq!(b.index(), i);
    }
}

#[test]
fn parses_hex_with_and_without_hash() {
    assert_eq!(Rgb8::parse_hex("#161b22").unwrap(), Rgb8::new(0x16, 0x1b, 0x22));
    assert_eq!(Rgb8::parse_hex("39D1D3").unwrap(), Rgb8::new(0x39, 0xd1, 0xd3));
    assert!(Rgb8::parse_hex("#fff").is_err());
    assert!(Rgb8::parse_hex("#gg0000").is_err());
}

#[test]
fn lighten_adds_and_saturates() {
    // 5% -> round(12.75) = 13 per channel.
    let c = Rgb8::new(0x0d, 0x33, 0x44).lighten(5.0);
    assert_eq!(c, Rgb8::new(0x1a, 0x40, 0x51));

    let c = Rgb8::new(250, 0, 255).lighten(5.0);
    assert_eq!(c, Rgb8::new(255, 13, 255));
}

#[test]
fn serde_uses_hex_strings() {
    let c: Rgb8 = serde_json::from_value(json!("#2570a5")).unwrap();
    assert_eq!(c.to_string(), "#2570a5");
    assert_eq!(serde_json::to_value(c).unwrap(), json!("#2570a5"));
    assert!(serde_json::from_value::<Rgb8>(json!("red")).is_err());
}
