use formnest::{FormValue, Parser};
use serde_json::{Value, json};

fn to_json(form_data: &str) -> Value {
    let text = Parser::new().form_to_json(form_data).unwrap();
    serde_json::from_str(&text).unwrap()
}

#[test]
fn test_flat_keys_are_coerced() {
    assert_eq!(
        to_json("name=acme&id=42&ratio=0.25&active=true&note=hello+world"),
        json!({
            "name": "acme",
            "id": 42,
            "ratio": 0.25,
            "active": true,
            "note": "hello world"
        })
    );
}

#[test]
fn test_coercion_priority() {
    assert_eq!(
        to_json("a=123&b=1.5&c=true&d=0&e=1&f=F"),
        json!({"a": 123, "b": 1.5, "c": true, "d": 0, "e": 1, "f": false})
    );
}

#[test]
fn test_out_of_range_float_is_text() {
    assert_eq!(
        to_json("x=1e400&y=-1e400"),
        json!({"x": "1e400", "y": "-1e400"})
    );
}

#[test]
fn test_sequence_of_objects() {
    assert_eq!(
        to_json("leads[0][id]=1&leads[0][name]=A&leads[1][id]=2"),
        json!({"leads": [{"id": 1, "name": "A"}, {"id": 2}]})
    );
}

#[test]
fn test_sparse_index_is_padded() {
    assert_eq!(to_json("a[3]=x"), json!({"a": [null, null, null, "x"]}));
}

#[test]
fn test_scalar_dropped_for_children() {
    assert_eq!(to_json("a=5&a[b]=6"), json!({"a": {"b": 6}}));
    assert_eq!(to_json("a[b]=6&a=5"), json!({"a": {"b": 6}}));
}

#[test]
fn test_account_and_leads() {
    assert_eq!(
        to_json("account[subdomain]=example&account[id]=123&leads[0][id]=1&leads[0][tags][0]=urgent"),
        json!({
            "account": {"subdomain": "example", "id": 123},
            "leads": [{"id": 1, "tags": ["urgent"]}]
        })
    );
}

#[test]
fn test_percent_encoded_brackets() {
    assert_eq!(
        to_json("leads%5Bstatus%5D%5B0%5D%5Bid%5D=25399013&leads%5Bstatus%5D%5B0%5D%5Bname%5D=Lead+title"),
        json!({"leads": {"status": [{"id": 25399013, "name": "Lead title"}]}})
    );
}

#[test]
fn test_first_value_wins() {
    assert_eq!(to_json("a=1&a=2"), json!({"a": 1}));
}

#[test]
fn test_malformed_keys_degrade_to_base() {
    assert_eq!(to_json("a[b=1"), json!({"a": 1}));
    assert_eq!(to_json("tags[]=x"), json!({"tags": "x"}));
}

#[test]
fn test_deep_custom_fields() {
    let form = "leads[status][0][custom_fields][0][id]=427183\
        &leads[status][0][custom_fields][0][name]=Checkbox\
        &leads[status][0][custom_fields][0][values][0][value]=1\
        &leads[status][0][custom_fields][1][values][0][value]=Option+2\
        &leads[status][0][custom_fields][1][values][0][enum]=1240666";
    assert_eq!(
        to_json(form),
        json!({
            "leads": {"status": [{"custom_fields": [
                {"id": 427183, "name": "Checkbox", "values": [{"value": 1}]},
                {"values": [{"value": "Option 2", "enum": 1240666}]}
            ]}]}
        })
    );
}

#[test]
fn test_very_deep_key_is_cut() {
    let form = format!("a{}=1", "[x]".repeat(100_000));
    let map = Parser::new().form_to_map(&form).unwrap();
    let mut value = map.get("a").cloned().unwrap();
    let mut depth = 0;
    while let Some(inner) = value.get("x").cloned() {
        value = inner;
        depth += 1;
    }
    assert_eq!(depth, formnest::Config::DEFAULT_MAX_DEPTH);
    assert_eq!(value, FormValue::Integer(1));
}

#[test]
fn test_form_to_map() {
    let map = Parser::new().form_to_map("a[0]=x&b=2").unwrap();
    assert_eq!(
        map.get("a"),
        Some(&FormValue::Array(vec![FormValue::String("x".to_string())]))
    );
    assert_eq!(map.get("b"), Some(&FormValue::Integer(2)));
}

#[test]
fn test_decode_failures() {
    let parser = Parser::new();
    assert!(matches!(parser.form_to_json("a=%zz"), Err(formnest::Error::Decode(_))));
    assert!(matches!(parser.form_to_json("a=1;b=2"), Err(formnest::Error::Decode(_))));
}

#[test]
fn test_empty_input() {
    assert_eq!(to_json(""), json!({}));
}
