use super::*;
use serde_json::json;

#[derive(Debug)]
struct Unprintable;

impl ExtraObject for Unprintable {
    fn to_display_string(&self) -> anyhow::Result<String> {
        anyhow::bail!("no string form")
    }
}

#[test]
fn test_typed_getters() {
    let mut extras = Extras::new();
    extras.put_string("mEmail", "a@b.com");
    extras.put_int("count", 5);

    assert_eq!(extras.get_string("mEmail"), Some("a@b.com"));
    assert_eq!(extras.get_int("count"), 5);
    // Typed getters only see values of their own kind
    assert_eq!(extras.get_string("count"), None);
    assert_eq!(extras.get_int("mEmail"), 0);
    assert_eq!(extras.get_int("missing"), 0);
}

#[test]
fn test_keys_visit_every_entry_once() {
    let extras: Extras = vec![("a", "1"), ("b", "2"), ("c", "3")].into_iter().collect();
    let mut keys = extras.keys();
    keys.sort_unstable();
    assert_eq!(keys, vec!["a", "b", "c"]);
    assert_eq!(ExtrasBag::len(&extras), 3);
    assert!(!extras.is_empty());
}

#[test]
fn test_insert_replaces_previous_value() {
    let mut extras = Extras::new();
    assert!(extras.insert("k", "first").is_none());
    let previous = extras.insert("k", 7);
    assert!(matches!(previous, Some(ExtraValue::Str(ref s)) if s == "first"));
    assert_eq!(extras.get_int("k"), 7);
    assert!(extras.contains_key("k"));
    assert!(extras.remove("k").is_some());
    assert!(extras.is_empty());
}

#[test]
fn test_display_string_per_kind() {
    assert_eq!(ExtraValue::from("x").to_display_string().unwrap(), "x");
    assert_eq!(ExtraValue::from(5).to_display_string().unwrap(), "5");
    assert!(ExtraValue::Null.to_display_string().is_err());
    assert!(ExtraValue::other(Unprintable).to_display_string().is_err());
}

#[test]
fn test_object_display_strings() {
    assert_eq!(true.to_display_string().unwrap(), "true");
    assert_eq!(2.5f64.to_display_string().unwrap(), "2.5");
    assert_eq!(9_000_000_000i64.to_display_string().unwrap(), "9000000000");
    assert_eq!(
        vec!["a".to_string(), "b".to_string()]
            .to_display_string()
            .unwrap(),
        "[a, b]"
    );
    assert_eq!(vec![1i32, 2, 3].to_display_string().unwrap(), "[1, 2, 3]");
    assert!(None::<i64>.to_display_string().is_err());
    assert_eq!(Some('z').to_display_string().unwrap(), "z");
}

#[test]
fn test_from_json_maps_kinds() {
    let extras = Extras::from_json(json!({
        "name": "Ada",
        "age": 36,
        "big": 9_000_000_000i64,
        "flag": true,
        "tags": ["x", "y"],
        "missing": null
    }))
    .unwrap();

    assert!(matches!(extras.get("name"), Some(ExtraValue::Str(s)) if s == "Ada"));
    assert!(matches!(extras.get("age"), Some(ExtraValue::Int(36))));
    assert!(matches!(extras.get("big"), Some(ExtraValue::Other(_))));
    assert!(matches!(extras.get("flag"), Some(ExtraValue::Other(_))));
    assert!(matches!(extras.get("missing"), Some(ExtraValue::Null)));

    let big = extras.get("big").unwrap().to_display_string().unwrap();
    assert_eq!(big, "9000000000");
    let tags = extras.get("tags").unwrap().to_display_string().unwrap();
    assert_eq!(tags, r#"["x","y"]"#);
}

#[test]
fn test_from_json_rejects_non_objects() {
    assert!(Extras::from_json(json!([1, 2])).is_err());
    assert!(Extras::from_json_str("not json").is_err());
    assert!(Extras::from_json_str(r#"{"k": "v"}"#).is_ok());
}
