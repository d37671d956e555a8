//! Integration tests for `#[derive(Defaultable)]`
//!
//! These tests exercise the whole pipeline - derive-generated field tables,
//! the process-wide annotated-field cache, and the per-kind parse-and-assign
//! rules - through the public API only. Unit-level parsing behavior is
//! covered next to the code in `src/value.rs`.

use defaultable::{apply_defaults, fields_with_default, Defaultable, FieldKind};

#[derive(Default, Defaultable)]
struct ServerConfig {
    #[default_value("127.0.0.1")]
    host: String,

    #[default_value("8080")]
    port: i32,

    #[default_value("0.75")]
    load_factor: f64,

    #[default_value("true")]
    keep_alive: bool,

    /// No annotation - must never be touched
    name: String,
}

#[test]
fn test_empty_string_field_gets_annotation_text() {
    let mut config = ServerConfig::default();
    apply_defaults(&mut config);
    assert_eq!(config.host, "127.0.0.1");
}

#[test]
fn test_non_empty_string_field_is_unchanged() {
    let mut config = ServerConfig {
        host: "db.internal".to_string(),
        ..Default::default()
    };
    apply_defaults(&mut config);
    assert_eq!(config.host, "db.internal");
}

#[test]
fn test_zero_scalars_get_defaults_nonzero_kept() {
    let mut config = ServerConfig {
        port: 9000,
        ..Default::default()
    };
    apply_defaults(&mut config);
    assert_eq!(config.port, 9000, "explicit port must not be overwritten");
    assert_eq!(config.load_factor, 0.75);
    assert!(config.keep_alive);
}

#[test]
fn test_unannotated_field_is_never_touched() {
    let mut config = ServerConfig::default();
    apply_defaults(&mut config);
    assert_eq!(config.name, "");

    let annotated = fields_with_default::<ServerConfig>();
    assert!(
        annotated.iter().all(|meta| meta.name != "name"),
        "unannotated fields must not appear in the cache"
    );
}

#[test]
fn test_applying_twice_is_idempotent_for_scalars() {
    let mut config = ServerConfig::default();
    apply_defaults(&mut config);
    apply_defaults(&mut config);
    assert_eq!(config.port, 8080);
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.load_factor, 0.75);
}

#[derive(Default, Defaultable)]
struct ParseFailures {
    #[default_value("not-a-number")]
    retries: i64,

    #[default_value("fast")]
    timeout: f32,

    #[default_value("yes")]
    verbose: bool,
}

#[test]
fn test_unparsable_annotations_leave_fields_at_zero() {
    let mut record = ParseFailures::default();
    apply_defaults(&mut record);
    assert_eq!(record.retries, 0);
    assert_eq!(record.timeout, 0.0);
    assert!(!record.verbose);
}

#[derive(Default, Defaultable)]
struct ListConfig {
    #[default_value("a,b,c")]
    tags: Vec<String>,

    #[default_value("1,x,3")]
    ports: Vec<i32>,
}

#[test]
fn test_string_list_appends_tokens_in_order() {
    let mut config = ListConfig {
        tags: vec!["pre".to_string()],
        ..Default::default()
    };
    apply_defaults(&mut config);
    assert_eq!(config.tags, ["pre", "a", "b", "c"]);
}

#[test]
fn test_integer_list_drops_unparsable_tokens() {
    let mut config = ListConfig::default();
    apply_defaults(&mut config);
    assert_eq!(config.ports, [1, 3]);
}

#[test]
fn test_applying_twice_appends_lists_twice() {
    // Documented behavior: list fields are never treated as "at zero value",
    // so every application appends the annotation tokens again.
    let mut config = ListConfig::default();
    apply_defaults(&mut config);
    apply_defaults(&mut config);
    assert_eq!(config.tags, ["a", "b", "c", "a", "b", "c"]);
    assert_eq!(config.ports, [1, 3, 1, 3]);
}

#[derive(Default, Defaultable)]
struct OddWidths {
    #[default_value("-5")]
    offset: i8,

    #[default_value("1000000")]
    big: i64,

    #[default_value("12")]
    size: isize,

    #[default_value("7,8")]
    codes: Vec<i64>,
}

#[test]
fn test_all_signed_widths_are_supported() {
    let mut record = OddWidths::default();
    apply_defaults(&mut record);
    assert_eq!(record.offset, -5);
    assert_eq!(record.big, 1_000_000);
    assert_eq!(record.size, 12);
    assert_eq!(record.codes, [7, 8]);
}

#[derive(Default, Defaultable)]
struct Unsupported {
    #[default_value("1.5,2.5")]
    ratios: Vec<f64>,

    #[default_value("10")]
    count: u32,
}

#[test]
fn test_unsupported_kinds_are_skipped_silently() {
    let mut record = Unsupported::default();
    apply_defaults(&mut record);
    assert!(record.ratios.is_empty(), "float lists are unsupported");
    assert_eq!(record.count, 0, "unsigned integers are unsupported");

    let fields = <Unsupported as Defaultable>::fields();
    assert!(fields.iter().all(|meta| meta.kind == FieldKind::Unsupported));
}

#[test]
fn test_cache_returns_same_sequence_both_times() {
    let first = fields_with_default::<ServerConfig>();
    let second = fields_with_default::<ServerConfig>();
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a, b);
    }
}

#[test]
fn test_cache_preserves_declaration_order() {
    let fields = fields_with_default::<ServerConfig>();
    let names: Vec<&str> = fields.iter().map(|meta| meta.name).collect();
    assert_eq!(names, ["host", "port", "load_factor", "keep_alive"]);
}

#[derive(Default, Defaultable)]
struct NoAnnotations {
    id: String,
    weight: f64,
}

#[test]
fn test_struct_without_annotations_is_untouched() {
    let mut record = NoAnnotations::default();
    apply_defaults(&mut record);
    assert_eq!(record.id, "");
    assert_eq!(record.weight, 0.0);
    assert!(fields_with_default::<NoAnnotations>().is_empty());
}
