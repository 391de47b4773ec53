use crate::fixtures::{two_node_declaration, TEST_DEFAULT_LIB};
use serde_json::{json, Value};
use weft_core::domain::TopologyDeclaration;

#[test]
fn test_declaration_when_serialized_then_roundtrips() {
    let declaration = two_node_declaration();
    let encoded = serde_json::to_string(&declaration).expect("serialize");
    let decoded: TopologyDeclaration<Value, Value> = serde_json::from_str(&encoded).expect("deserialize");
    assert_eq!(decoded, declaration);
    assert_eq!(decoded.links[0].config["defaultLib"], json!(TEST_DEFAULT_LIB));
}

#[test]
fn test_declaration_when_fields_missing_then_defaults_apply() {
    let decoded: TopologyDeclaration<Value, Value> = serde_json::from_str("{}").expect("deserialize empty");
    assert_eq!(decoded.node_count(), 0);
    assert_eq!(decoded.link_count(), 0);

    let decoded: TopologyDeclaration<Value, Value> =
        serde_json::from_str(r#"{"nodes": [{"point": {"network": "1", "role": "endpoint"}}]}"#).expect("deserialize node");
    assert_eq!(decoded.node_count(), 1);
    assert!(decoded.nodes[0].config.is_none());
}

#[test]
fn test_declaration_when_point_serialized_then_uses_named_fields() {
    let declaration = two_node_declaration();
    let value = serde_json::to_value(&declaration).expect("to_value");
    assert_eq!(value["nodes"][0]["point"]["network"], json!("1"));
    assert_eq!(value["nodes"][0]["point"]["role"], json!("endpoint"));
    assert_eq!(value["links"][0]["from"]["network"], json!("1"));
    assert_eq!(value["links"][0]["to"]["network"], json!("2"));
}
