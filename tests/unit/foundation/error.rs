use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        GlyphStackError::input("x")
            .to_string()
            .contains("input error:")
    );
    assert!(
        GlyphStackError::classification("x")
            .to_string()
            .contains("classification error:")
    );
    assert!(
        GlyphStackError::build("x")
            .to_string()
            .contains("build error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = GlyphStackError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
