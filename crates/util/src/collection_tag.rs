use serde_json::{Map, Value};

/// Key under which every collection item carries its base-kind marker.
pub const BASE_KIND_KEY: &str = "baseKind";

/// Base kind assigned to syntax-collection items.
pub const SYNTAX_COLLECTION: &str = "SyntaxCollection";

/// Tag every item of a node sequence as belonging to a syntax collection.
///
/// Takes ownership of the sequence and returns it with
/// `"baseKind": "SyntaxCollection"` inserted (or overwritten) in each item.
/// Tagging is idempotent: applying it twice yields the same result.
///
/// # Examples
///
/// ```
/// use serde_json::{json, Map, Value};
/// use gyb_util::collection_tag::tag_as_collection;
///
/// let item: Map<String, Value> = json!({"kind": "TokenList"})
///     .as_object()
///     .cloned()
///     .unwrap();
///
/// let tagged = tag_as_collection(vec![item]);
/// assert_eq!(tagged[0]["baseKind"], json!("SyntaxCollection"));
/// assert_eq!(tagged[0]["kind"], json!("TokenList"));
/// ```
pub fn tag_as_collection(mut items: Vec<Map<String, Value>>) -> Vec<Map<String, Value>> {
    for item in &mut items {
        item.insert(
            BASE_KIND_KEY.to_string(),
            Value::String(SYNTAX_COLLECTION.to_string()),
        );
    }
    items
}
