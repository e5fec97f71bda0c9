use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(FluxError::format("x").to_string().contains("format error:"));
    assert!(FluxError::domain("x").to_string().contains("domain error:"));
    assert!(
        FluxError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        FluxError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn kind_predicates_match_variants() {
    assert!(FluxError::format("x").is_format());
    assert!(!FluxError::format("x").is_domain());
    assert!(FluxError::domain("x").is_domain());
    assert!(!FluxError::validation("x").is_domain());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FluxError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
