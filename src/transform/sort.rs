use indexmap::IndexMap;
use itertools::Itertools;
use once_cell::sync::Lazy;
use serde_yaml::{Mapping, Value};

use crate::options::Options;

/// Key-order priorities per OpenAPI keyword, as loaded from the sort file.
pub type SortSet = IndexMap<String, Vec<String>>;

/// Bundled priorities, used whenever no sort file could be read.
static DEFAULT_SORT: Lazy<SortSet> = Lazy::new(|| {
    serde_json::from_str(include_str!("../../defaultSort.json"))
        .expect("bundled defaultSort.json parses")
});

/// Keywords whose values are keyed collections; their priorities apply to
/// each child object instead of the keyed object itself.
const PER_CHILD: &[&str] = &["responses", "schemas", "properties"];

/// Reorder the document per the sort rule set: the root by the `root`
/// priorities, and every mapping reached under a rule keyword by that
/// keyword's priorities.
pub fn sort(mut doc: Value, options: &Options) -> Value {
    let set = options.sort_set.as_ref().unwrap_or(&DEFAULT_SORT);
    if let Some(root) = doc.as_mapping_mut() {
        if let Some(priority) = set.get("root") {
            reorder(root, priority);
        }
    }
    walk(&mut doc, set);
    doc
}

fn walk(value: &mut Value, set: &SortSet) {
    match value {
        Value::Mapping(map) => {
            for (key, child) in map.iter_mut() {
                if let Some(priority) = key.as_str().and_then(|name| set.get(name)) {
                    let per_child = key.as_str().is_some_and(|name| PER_CHILD.contains(&name));
                    match child {
                        Value::Mapping(obj) if per_child => {
                            for (_, grandchild) in obj.iter_mut() {
                                if let Some(obj) = grandchild.as_mapping_mut() {
                                    reorder(obj, priority);
                                }
                            }
                        }
                        Value::Mapping(obj) => reorder(obj, priority),
                        Value::Sequence(items) => {
                            for item in items.iter_mut() {
                                if let Some(obj) = item.as_mapping_mut() {
                                    reorder(obj, priority);
                                }
                            }
                        }
                        _ => {}
                    }
                }
                walk(child, set);
            }
        }
        Value::Sequence(items) => {
            for item in items {
                walk(item, set);
            }
        }
        _ => {}
    }
}

/// Keys named in `priority` come first, in priority order; the rest keep
/// their original relative order.
fn reorder(map: &mut Mapping, priority: &[String]) {
    let (listed, rest): (Vec<(Value, Value)>, Vec<(Value, Value)>) = std::mem::take(map)
        .into_iter()
        .partition(|(key, _)| {
            key.as_str()
                .is_some_and(|name| priority.iter().any(|p| p.as_str() == name))
        });
    let listed = listed.into_iter().sorted_by_key(|(key, _)| {
        key.as_str()
            .and_then(|name| priority.iter().position(|p| p.as_str() == name))
    });
    for (key, value) in listed.chain(rest) {
        map.insert(key, value);
    }
}
