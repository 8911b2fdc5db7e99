/// Document façade tests: parsing, root put rules, keyed and path access,
/// views versus copies, sorting, the cursor and rendering.
use std::collections::BTreeMap;

use djson_core::{DocError, Document, Kind, SortOrder, Value};

fn doc(text: &str) -> Document {
    Document::parse(text).unwrap()
}

// ============================================================================
// 1. End-to-end scenarios
// ============================================================================

#[test]
fn path_update_replaces_a_field_with_an_object() {
    let d = doc(r#"[{"name":"A","skills":["x","y"]},{"name":"B","skills":["x","z"]}]"#);
    d.update_path(
        r#"[1]["name"]"#,
        Document::object_from_pairs([("first", "k")]),
    )
    .unwrap();

    assert_eq!(
        d.to_string(),
        r#"[{"name":"A","skills":["x","y"]},{"name":{"first":"k"},"skills":["x","z"]}]"#
    );
}

#[test]
fn put_int_array_renders_as_json() {
    let mut d = Document::new();
    d.put_object("int_array", vec![1, 2, 3, 4, 5]);
    assert_eq!(d.to_string(), r#"{"int_array":[1,2,3,4,5]}"#);
}

#[test]
fn sort_integers_and_reject_mixed() {
    let d = doc("[5,6,7,8,1,2,3,4]");
    d.sort_asc(None).unwrap();
    assert_eq!(d.to_string(), "[1,2,3,4,5,6,7,8]");

    let mixed = doc(r#"[2,"a",1]"#);
    assert!(mixed.sort_asc(None).is_err());
    assert_eq!(mixed.to_string(), r#"[2,"a",1]"#);
}

#[test]
fn int_getter_defaults() {
    let d = doc(r#"{"age":"28","nick":"abc"}"#);
    assert_eq!(d.int("age"), 28);
    assert_eq!(d.int_or("nick", 10), 10);
    assert_eq!(d.int_or("missing", 10), 10);
}

#[test]
fn write_past_the_end_grows_with_zeros() {
    let d = doc(r#"{"a":[1,2]}"#);
    d.update_path(r#"["a"][5]"#, 9).unwrap();
    assert_eq!(d.to_string(), r#"{"a":[1,2,0,0,0,9]}"#);
    assert_eq!(d.array("a").unwrap().len(), 6);
}

#[test]
fn rename_failures_do_not_mutate() {
    let d = doc(r#"{"a":1}"#);
    assert!(!d.rename("a", "a"));
    assert!(!d.rename("missing", "x"));
    assert_eq!(d.to_string(), r#"{"a":1}"#);

    assert!(d.rename("a", "b"));
    assert_eq!(d.to_string(), r#"{"b":1}"#);
}

// ============================================================================
// 2. Parsing
// ============================================================================

#[test]
fn parse_containers_and_literals() {
    assert!(doc(r#"{"a":1}"#).is_object());
    assert!(doc("[1]").is_array());
    assert_eq!(doc(r#""quoted""#).as_string(), "quoted");
    assert!(doc("3.5").is_float());
}

#[test]
fn parse_accepts_bare_scalars() {
    assert!(doc("NULL").is_null());
    assert!(doc("True").as_bool());
    assert!(!doc("FALSE").as_bool());
    assert_eq!(doc("  42 ").as_int(), 42);
    assert_eq!(doc("hello world").as_string(), "hello world");
    assert!(doc("").is_null());
}

#[test]
fn parse_rejects_broken_containers() {
    let err = Document::parse(r#"{"a":"#).unwrap_err();
    assert!(matches!(err, DocError::Parse(_)));
    assert!(Document::parse("[1,").is_err());
}

#[test]
fn from_str_delegates_to_parse() {
    let d: Document = "[1,2]".parse().unwrap();
    assert_eq!(d.len(), 2);
}

// ============================================================================
// 3. Root put rules
// ============================================================================

#[test]
fn scalar_put_replaces_null_or_same_kind_only() {
    let mut d = Document::new();
    d.put(5);
    assert_eq!(d.as_int(), 5);
    d.put(7);
    assert_eq!(d.as_int(), 7);
    d.put("text");
    assert_eq!(d.as_int(), 7);
    d.put(());
    assert!(d.is_null());
}

#[test]
fn scalar_put_into_array_appends() {
    let mut d = doc("[1]");
    d.put("x");
    assert_eq!(d.to_string(), r#"[1,"x"]"#);
}

#[test]
fn array_put_into_array_flattens_one_level() {
    let mut d = doc("[1]");
    d.put(Value::from(vec![Value::Int(2), Value::from(vec![3, 4])]));
    assert_eq!(d.to_string(), "[1,2,[3,4]]");
}

#[test]
fn object_put_into_object_merges() {
    let mut d = doc(r#"{"a":1,"b":2}"#);
    d.put(BTreeMap::from([("b", 20), ("c", 30)]));
    assert_eq!(d.to_string(), r#"{"a":1,"b":20,"c":30}"#);
}

#[test]
fn container_put_replaces_a_scalar_root() {
    let mut d = Document::from_value(3);
    d.put(vec![1]);
    assert_eq!(d.to_string(), "[1]");
}

#[test]
fn non_finite_floats_are_ignored() {
    let mut d = Document::from_value(1.5);
    d.put(f64::NAN);
    assert_eq!(d.as_float(), 1.5);

    assert!(Document::from_value(f64::INFINITY).is_null());
}

#[test]
fn put_object_and_put_array_adopt_a_null_root() {
    let mut obj = Document::new();
    obj.put_object("k", true);
    assert_eq!(obj.to_string(), r#"{"k":true}"#);

    let mut arr = Document::new();
    assert!(arr.put_array(1));
    assert!(arr.put_array(vec![2, 3]));
    assert_eq!(arr.to_string(), "[1,[2,3]]");

    // Wrong root kind: left alone.
    assert!(!arr.put_object("k", 1));
    assert!(arr.is_array());
}

#[test]
fn put_object_and_put_array_report_refused_values() {
    let mut obj = doc(r#"{"a":1}"#);
    assert!(!obj.put_object("b", f64::NAN));
    assert_eq!(obj.to_string(), r#"{"a":1}"#);

    let mut arr = doc("[1]");
    assert!(!arr.put_array(f64::NEG_INFINITY));
    assert!(!arr.put_array(arr.share()));
    assert_eq!(arr.to_string(), "[1]");
}

#[test]
fn set_to_object_discards_contents() {
    let mut d = doc("[1,2]");
    d.set_to_object().put_object("a", 1);
    assert_eq!(d.to_string(), r#"{"a":1}"#);
    d.set_to_array();
    assert!(d.is_empty());
}

// ============================================================================
// 4. Keyed access
// ============================================================================

#[test]
fn typed_getters_with_defaults() {
    let d = doc(r#"{"f":"2.5","b":1,"s":"maybe","o":{"x":[1]}}"#);
    assert_eq!(d.float("f"), 2.5);
    assert_eq!(d.float_or("s", -1.0), -1.0);
    assert!(d.bool("b"));
    assert!(d.bool_or("s", true));
    assert_eq!(d.string("missing"), "");
    assert_eq!(d.string_or("missing", "dflt"), "dflt");
    assert_eq!(d.string("o"), r#"{"x":[1]}"#);
}

#[test]
fn index_selectors_on_array_roots() {
    let d = doc(r#"[10,"20",{"k":1}]"#);
    assert_eq!(d.int(0), 10);
    assert_eq!(d.int(1), 20);
    assert!(d.has_key(2));
    assert!(!d.has_key(3));
    assert!(!d.has_key(-1));
    assert_eq!(d.kind_of(2), Some(Kind::Object));
    assert!(d.object(2).is_some());
    assert!(d.array(2).is_none());
}

#[test]
fn keys_and_membership() {
    let d = doc(r#"{"b":1,"a":{"y":1,"x":2}}"#);
    let mut keys = d.keys();
    keys.sort();
    assert_eq!(keys, ["a", "b"]);

    let mut inner = d.keys_of("a");
    inner.sort();
    assert_eq!(inner, ["x", "y"]);
    assert!(d.keys_of("b").is_empty());

    assert!(d.has_keys(["a", "b"]));
    assert!(!d.has_keys(["a", "c"]));
}

#[test]
fn remove_and_replace_at() {
    let obj = doc(r#"{"a":1,"b":2}"#);
    assert_eq!(obj.remove("a"), Some(Value::Int(1)));
    assert!(obj.replace_at("b", "two"));
    assert!(!obj.replace_at("missing", 3));
    assert_eq!(obj.to_string(), r#"{"b":"two"}"#);

    let arr = doc("[1,2,3]");
    assert_eq!(arr.remove(0), Some(Value::Int(1)));
    assert!(arr.replace_at(1, 30));
    assert!(!arr.replace_at(5, 0));
    assert_eq!(arr.to_string(), "[2,30]");
}

#[test]
fn kind_inspection_and_len() {
    assert_eq!(Document::new().len(), 0);
    assert_eq!(Document::from_value("x").len(), 1);
    assert!(Document::from_value(1).is_numeric());
    assert!(Document::from_value(1.0).is_numeric());
    assert!(Document::from_value(true).is_bool());
    assert!(Document::from_value("s").is_string());
    assert!(Document::from_value(7).is_int());
    assert_eq!(Document::new_object().kind(), Kind::Object);
    assert_eq!(Document::new_array().kind(), Kind::Array);
}

// ============================================================================
// 5. Views and copies
// ============================================================================

#[test]
fn object_view_writes_through_to_parent() {
    let d = doc(r#"{"user":{"name":"Ann"}}"#);
    let mut user = d.object("user").unwrap();
    user.put_object("age", 41);
    assert_eq!(d.int_path(r#"["user"]["age"]"#), 41);
}

#[test]
fn array_view_writes_through_to_parent() {
    let d = doc(r#"{"tags":["a"]}"#);
    let mut tags = d.array("tags").unwrap();
    tags.put_array("b");
    assert_eq!(d.to_string(), r#"{"tags":["a","b"]}"#);
}

#[test]
fn clone_is_fully_independent() {
    let d = doc(r#"{"user":{"tags":["a"]}}"#);
    let copy = d.clone();
    copy.push_back_to_path(r#"["user"]["tags"]"#, "b").unwrap();
    copy.update_path(r#"["user"]["new"]"#, 1).unwrap();

    assert_eq!(d.to_string(), r#"{"user":{"tags":["a"]}}"#);
    assert_ne!(d, copy);
}

#[test]
fn share_aliases_the_root() {
    let d = doc("[]");
    let alias = d.share();
    alias.update_path("[0]", "x").unwrap();
    assert_eq!(d.len(), 1);
}

#[test]
fn equality_is_structural() {
    assert_eq!(doc(r#"{"a":[1,{"b":null}]}"#), doc(r#"{ "a" : [1, {"b": null}] }"#));
    assert_ne!(doc("[1]"), doc("[1.0]"));
}

// ============================================================================
// 6. Cursor and array helpers
// ============================================================================

#[test]
fn scan_loop_over_array_root() {
    let d = doc(r#"[{"n":1},{"n":2},{"n":3}]"#);
    d.seek(1);
    let mut seen = Vec::new();
    while d.has_next() {
        if let Some(element) = d.scan() {
            seen.push(element.int("n"));
        }
    }
    assert_eq!(seen, [2, 3]);

    assert!(d.seek(0));
    d.skip();
    assert_eq!(d.scan().map(|e| e.int("n")), Some(2));
}

#[test]
fn cursor_on_non_array_root() {
    let d = doc(r#"{"a":1}"#);
    assert!(!d.seek(0));
    assert!(!d.has_next());
    assert!(d.scan().is_none());
}

#[test]
fn find_matches_field_text() {
    let d = doc(r#"[5,{"name":"A","age":1},{"name":"B","age":2},{"age":3}]"#);
    assert_eq!(d.find("name", "B").map(|e| e.int("age")), Some(2));
    assert!(d.find("name", "Z").is_none());
    // A missing field reads as the empty string.
    assert_eq!(d.find("name", "").map(|e| e.int("age")), Some(3));
}

#[test]
fn find_returns_a_live_view() {
    let d = doc(r#"[{"id":"x"}]"#);
    let mut found = d.find("id", "x").unwrap();
    found.put_object("seen", true);
    assert!(d.bool_path(r#"[0]["seen"]"#));
}

#[test]
fn append_shares_elements() {
    let a = doc("[1]");
    let b = doc(r#"[{"k":1}]"#);
    a.append(&b);
    assert_eq!(a.to_string(), r#"[1,{"k":1}]"#);

    b.update_path(r#"[0]["k"]"#, 2).unwrap();
    assert_eq!(a.int_path(r#"[1]["k"]"#), 2);
}

#[test]
fn strings_and_ints_helpers() {
    let d = doc(r#"[{"n":"a","v":"1"},{"n":"b","v":2}]"#);
    assert_eq!(d.strings(Some("n")), ["a", "b"]);
    assert_eq!(d.ints(Some("v")), [1, 2]);

    let plain = doc(r#"[1,"2",true]"#);
    assert_eq!(plain.strings(None), ["1", "2", "true"]);
    assert_eq!(plain.ints(None), [1, 2, 1]);
    assert!(doc("{}").ints(None).is_empty());
}

// ============================================================================
// 7. Sorting
// ============================================================================

#[test]
fn sort_by_field_on_root() {
    let d = doc(r#"[{"n":"b"},{"n":"a"}]"#);
    d.sort(SortOrder::Ascending, Some("n")).unwrap();
    assert_eq!(d.strings(Some("n")), ["a", "b"]);
    d.sort_desc(Some("n")).unwrap();
    assert_eq!(d.strings(Some("n")), ["b", "a"]);
}

#[test]
fn sort_on_non_array_root_fails() {
    let err = doc(r#"{"a":1}"#).sort_asc(None).unwrap_err();
    assert!(matches!(err, DocError::NotAnArray { kind: Kind::Object }));
}

#[test]
fn sort_at_child_array() {
    let d = doc(r#"{"list":[3,1,2],"name":"x"}"#);
    d.sort_at("list", SortOrder::Descending).unwrap();
    assert_eq!(d.string("list"), "[3,2,1]");

    assert!(matches!(
        d.sort_at("name", SortOrder::Ascending),
        Err(DocError::NotAnArray { kind: Kind::String })
    ));
    assert!(d.sort_at("missing", SortOrder::Ascending).is_err());
}

// ============================================================================
// 8. Path operations
// ============================================================================

#[test]
fn typed_path_getters() {
    let d = doc(r#"{"a":{"i":"7","f":1.25,"b":"true","s":"txt","l":[1,2]}}"#);
    assert_eq!(d.int_path(r#"["a"]["i"]"#), 7);
    assert_eq!(d.float_path(r#"["a"]["f"]"#), 1.25);
    assert!(d.bool_path(r#"["a"]["b"]"#));
    assert_eq!(d.string_path(r#"["a"]["s"]"#), "txt");
    assert_eq!(d.string_path(r#"["a"]["l"]"#), "[1,2]");
    assert_eq!(d.kind_path(r#"["a"]["l"]"#), Some(Kind::Array));

    assert_eq!(d.int_path_or(r#"["a"]["s"]"#, -1), -1);
    assert_eq!(d.float_path_or(r#"["a"]["nope"]"#, 0.5), 0.5);
    assert!(d.bool_path_or("not a path", true));
    assert_eq!(d.string_path_or(r#"["x"]["y"]"#, "d"), "d");
    assert_eq!(d.kind_path("[0]"), None);
}

#[test]
fn object_and_array_path_views() {
    let d = doc(r#"{"a":{"b":{"c":[]}}}"#);
    let mut b = d.object_path(r#"["a"]["b"]"#).unwrap();
    b.put_object("d", 1);
    let mut c = d.array_path(r#"["a"]["b"]["c"]"#).unwrap();
    c.put_array("x");

    assert_eq!(d.to_string(), r#"{"a":{"b":{"c":["x"],"d":1}}}"#);
    assert!(d.array_path(r#"["a"]["b"]"#).is_none());
}

#[test]
fn keys_path_distinguishes_invalid_paths() {
    let d = doc(r#"{"a":{"y":1,"x":2},"s":"str"}"#);
    let mut keys = d.keys_path(r#"["a"]"#).unwrap();
    keys.sort();
    assert_eq!(keys, ["x", "y"]);
    assert_eq!(d.keys_path(r#"["s"]"#), Some(Vec::new()));
    assert_eq!(d.keys_path(r#"["s"]["deeper"]"#), None);
}

#[test]
fn update_path_replaces_and_inserts() {
    let d = doc(r#"{"list":[1,2],"obj":{}}"#);
    d.update_path(r#"["list"][0]"#, "first").unwrap();
    d.update_path(r#"["list"][2]"#, "appended").unwrap();
    d.update_path(r#"["obj"]["k"]"#, Value::from(vec![true])).unwrap();

    assert_eq!(
        d.to_string(),
        r#"{"list":["first",2,"appended"],"obj":{"k":[true]}}"#
    );
}

#[test]
fn update_path_reports_invalid_paths() {
    let d = doc(r#"{"a":1}"#);
    assert!(matches!(
        d.update_path(r#"["a"]["b"]"#, 1),
        Err(DocError::InvalidPath { .. })
    ));
    assert!(d.update_path("no brackets", 1).is_err());
    assert!(d.update_path(r#"["unterminated"#, 1).is_err());
}

#[test]
fn path_read_back_matches_write() {
    let d = doc(r#"{"a":[{"b":0}]}"#);
    d.update_path(r#"["a"][0]["b"]"#, 3.5).unwrap();
    assert_eq!(d.float_path(r#"["a"][0]["b"]"#), 3.5);
}

#[test]
fn put_array_and_object_to_path() {
    let d = doc(r#"{"arr":[1]}"#);
    d.put_array_to_path(r#"["list"]"#, [1, 2, 3]).unwrap();
    d.put_array_to_path(r#"["arr"][0]"#, ["front"]).unwrap();
    d.put_object_to_path(r#"["meta"]"#, "k", "v").unwrap();
    d.put_object_to_path(r#"["arr"][5]"#, "tail", true).unwrap();

    assert_eq!(
        d.to_string(),
        r#"{"arr":[["front"],1,0,0,0,{"tail":true}],"list":[1,2,3],"meta":{"k":"v"}}"#
    );
}

#[test]
fn push_back_to_path_requires_an_array() {
    let d = doc(r#"{"skills":["x"],"name":"A"}"#);
    d.push_back_to_path(r#"["skills"]"#, "y").unwrap();
    assert_eq!(d.string("skills"), r#"["x","y"]"#);

    assert!(matches!(
        d.push_back_to_path(r#"["name"]"#, "z"),
        Err(DocError::NotAnArray { kind: Kind::String })
    ));
    assert!(matches!(
        d.push_back_to_path(r#"["missing"]"#, "z"),
        Err(DocError::NotAnArray { kind: Kind::Null })
    ));
}

#[test]
fn remove_path_removes_keys_and_elements() {
    let d = doc(r#"{"a":{"b":1,"c":2},"l":[1,2,3]}"#);
    d.remove_path(r#"["a"]["b"]"#).unwrap();
    d.remove_path(r#"["l"][1]"#).unwrap();
    d.remove_path(r#"["a"]["missing"]"#).unwrap();

    assert_eq!(d.to_string(), r#"{"a":{"c":2},"l":[1,3]}"#);
    assert!(d.remove_path(r#"["x"]["y"]"#).is_err());
}

#[test]
fn sort_path_sorts_nested_arrays() {
    let d = doc(r#"{"people":[{"n":"b","age":2},{"n":"a","age":1}],"nums":[2,1]}"#);
    d.sort_path(r#"["people"]"#, SortOrder::Ascending, Some("age"))
        .unwrap();
    d.sort_path(r#"["nums"]"#, SortOrder::Ascending, None).unwrap();

    assert_eq!(d.string_path(r#"["people"][0]["n"]"#), "a");
    assert_eq!(d.string("nums"), "[1,2]");
    assert!(d
        .sort_path(r#"["people"][0]"#, SortOrder::Ascending, None)
        .is_err());
}

#[test]
fn walk_path_runs_custom_sites() {
    let d = doc(r#"{"a":[1,2,3]}"#);
    let len = d
        .walk_path(r#"["a"]"#, (), |_, _, ()| 0, |map, key, ()| {
            map.get_array(key).map_or(0, |seq| seq.len())
        })
        .unwrap();
    assert_eq!(len, 3);
}

#[test]
fn path_writes_refuse_non_finite_floats() {
    let d = doc(r#"{"a":1,"arr":[1,2]}"#);
    let refused = |result: Result<(), DocError>| {
        assert!(
            matches!(result, Err(DocError::Unstorable { kind: Kind::Float })),
            "{result:?}"
        );
    };

    refused(d.update_path(r#"["a"]"#, f64::NAN));
    refused(d.update_path(r#"["arr"][0]"#, f64::INFINITY));
    refused(d.update_path(r#"["arr"][2]"#, f64::NAN));
    refused(d.push_back_to_path(r#"["arr"]"#, f64::NAN));
    refused(d.put_object_to_path(r#"["b"]"#, "k", f64::NAN));
    refused(d.put_array_to_path(r#"["c"]"#, vec![1.0, f64::NAN]));

    assert_eq!(d.to_string(), r#"{"a":1,"arr":[1,2]}"#);
}

#[test]
fn path_writes_refuse_a_document_inside_itself() {
    let d = doc(r#"{"a":1,"arr":[1,2]}"#);

    assert!(matches!(
        d.update_path(r#"["self"]"#, d.share()),
        Err(DocError::Unstorable { kind: Kind::Object })
    ));
    let arr = d.array_path(r#"["arr"]"#).unwrap();
    assert!(matches!(
        d.push_back_to_path(r#"["arr"]"#, arr.share()),
        Err(DocError::Unstorable { kind: Kind::Array })
    ));
    assert_eq!(d.to_string(), r#"{"a":1,"arr":[1,2]}"#);

    // A detached copy is fine.
    d.update_path(r#"["copy"]"#, d.clone()).unwrap();
    assert_eq!(d.int_path(r#"["copy"]["arr"][1]"#), 2);
}

#[test]
fn reading_past_the_end_grows_the_array() {
    let d = doc("[1,2]");
    assert_eq!(d.int_path("[5]"), 0);
    assert_eq!(d.to_string(), "[1,2,0,0,0]");

    assert!(d.get_path("[5]").is_none());
    assert_eq!(d.len(), 5);
}

// ============================================================================
// 9. Rendering and serde
// ============================================================================

#[test]
fn display_and_pretty_rendering() {
    assert_eq!(Document::from_value("hi").to_string(), "hi");
    assert_eq!(Document::from_value("hi").to_string_pretty(), r#""hi""#);
    assert_eq!(doc(r#"{"a":1}"#).to_string_pretty(), "{\n  \"a\": 1\n}");
    assert_eq!(Document::new().to_string(), "null");
}

#[test]
fn to_json_sorts_keys() {
    let json = doc(r#"{"z":1,"a":2}"#).to_json();
    let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
    assert_eq!(keys, ["a", "z"]);
}

#[test]
fn serde_roundtrip() {
    let d: Document = serde_json::from_str(r#"{"b":[1,2.5],"a":null}"#).unwrap();
    assert_eq!(serde_json::to_string(&d).unwrap(), r#"{"a":null,"b":[1,2.5]}"#);
}

#[test]
fn conversions_between_document_and_value() {
    let d = Document::from(Value::from(vec![1]));
    let back: Value = d.clone().into();
    assert_eq!(back, d.into_value());

    let from_json = Document::from(serde_json::json!({"k": [1]}));
    assert_eq!(from_json.value().kind(), Kind::Object);

    let array = Document::array_from(["a", "b"]);
    assert_eq!(array.to_string(), r#"["a","b"]"#);
}
