use bullhorn_json::{CodecConfig, NullBypassFields, RestJsonCodec};

#[test]
fn default_is_pretty_without_bypass() {
    let config = CodecConfig::default();
    assert!(config.pretty);
    assert!(config.default_null_bypass.is_empty());
}

#[test]
fn builder_sets_fields() {
    let config = CodecConfig::default()
        .with_pretty(false)
        .with_default_null_bypass(vec!["email", "phone"]);
    assert!(!config.pretty);
    assert!(config.default_null_bypass.contains("email"));
    assert!(config.default_null_bypass.contains("phone"));
}

#[test]
fn codec_keeps_its_config() {
    let config = CodecConfig::default().with_pretty(false);
    let codec = RestJsonCodec::with_config(config.clone());
    assert_eq!(codec.config(), &config);
}

#[test]
fn deserializes_partial_config_with_defaults() {
    let config: CodecConfig = serde_json::from_str(r#"{"pretty": false}"#).unwrap();
    assert!(!config.pretty);
    assert_eq!(config.default_null_bypass, NullBypassFields::none());
}

#[test]
fn deserializes_bypass_list() {
    let config: CodecConfig =
        serde_json::from_str(r#"{"default_null_bypass": ["email", "email", "phone"]}"#).unwrap();
    assert!(config.pretty);
    assert_eq!(config.default_null_bypass.len(), 2);
}

#[test]
fn serializes_bypass_as_sorted_list() {
    let config = CodecConfig::default().with_default_null_bypass(["phone", "email"]);
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(json, r#"{"pretty":true,"default_null_bypass":["email","phone"]}"#);
}
