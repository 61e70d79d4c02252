use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        QuadlifeError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        QuadlifeError::calendar("x")
            .to_string()
            .contains("calendar error:")
    );
    assert!(
        QuadlifeError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        QuadlifeError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = QuadlifeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde() {
    let err: QuadlifeError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, QuadlifeError::Serde(_)));
}
