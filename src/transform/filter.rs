use serde::Deserialize;
use serde_yaml::Value;
use tracing::debug;

use crate::options::Options;

/// Exclusion rules loaded from the filter file. Every list is optional and
/// defaults to empty, which excludes nothing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FilterSet {
    pub methods: Vec<String>,
    pub tags: Vec<String>,
    #[serde(rename = "operationIds")]
    pub operation_ids: Vec<String>,
    pub flags: Vec<String>,
}

/// Remove operations matching the filter set, path items left empty by that
/// removal, and root-level tag entries for filtered tags.
pub fn filter(mut doc: Value, options: &Options) -> Value {
    let Some(set) = &options.filter_set else {
        return doc;
    };

    if let Some(paths) = doc.get_mut("paths").and_then(Value::as_mapping_mut) {
        let mut removed = 0usize;
        for (_, item) in paths.iter_mut() {
            let Some(item) = item.as_mapping_mut() else {
                continue;
            };
            let drop: Vec<Value> = item
                .iter()
                .filter(|(method, operation)| excluded(method, operation, set))
                .map(|(method, _)| method.clone())
                .collect();
            removed += drop.len();
            for method in &drop {
                item.remove(method);
            }
        }
        paths.retain(|_, item| item.as_mapping().map_or(true, |m| !m.is_empty()));
        debug!(removed, "filtered operations");
    }

    if !set.tags.is_empty() {
        if let Some(tags) = doc.get_mut("tags").and_then(Value::as_sequence_mut) {
            tags.retain(|tag| {
                tag.get("name")
                    .and_then(Value::as_str)
                    .map_or(true, |name| !set.tags.iter().any(|t| t == name))
            });
        }
    }

    doc
}

fn excluded(method: &Value, operation: &Value, set: &FilterSet) -> bool {
    let Some(method) = method.as_str() else {
        return false;
    };
    if set.methods.iter().any(|m| m.eq_ignore_ascii_case(method)) {
        return true;
    }
    let Some(operation) = operation.as_mapping() else {
        return false;
    };
    if set.flags.iter().any(|flag| operation.contains_key(Value::from(flag.as_str()))) {
        return true;
    }
    if let Some(tags) = operation.get("tags").and_then(Value::as_sequence) {
        let listed = tags
            .iter()
            .filter_map(Value::as_str)
            .any(|tag| set.tags.iter().any(|t| t == tag));
        if listed {
            return true;
        }
    }
    if let Some(id) = operation.get("operationId").and_then(Value::as_str) {
        if set.operation_ids.iter().any(|x| x == id) {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod test {
    use super::*;

    fn petstore() -> Value {
        serde_yaml::from_str(concat!(
            "openapi: 3.0.3\n",
            "paths:\n",
            "  /pets:\n",
            "    get:\n",
            "      operationId: listPets\n",
            "      tags: [pets]\n",
            "    post:\n",
            "      operationId: createPet\n",
            "      tags: [pets, admin]\n",
            "  /internal/jobs:\n",
            "    get:\n",
            "      operationId: listJobs\n",
            "      x-internal: true\n",
            "tags:\n",
            "  - name: pets\n",
            "  - name: admin\n",
        ))
        .unwrap()
    }

    fn with_set(set: FilterSet) -> Options {
        Options {
            filter_set: Some(set),
            ..Options::default()
        }
    }

    #[test]
    fn empty_set_is_a_no_op() {
        let doc = petstore();
        let filtered = filter(doc.clone(), &with_set(FilterSet::default()));
        assert_eq!(filtered, doc);
    }

    #[test]
    fn methods_match_case_insensitively() {
        let options = with_set(FilterSet {
            methods: vec!["POST".to_string()],
            ..FilterSet::default()
        });
        let filtered = filter(petstore(), &options);
        assert!(filtered["paths"]["/pets"].get("post").is_none());
        assert!(filtered["paths"]["/pets"].get("get").is_some());
    }

    #[test]
    fn flags_drop_operations_and_empty_path_items() {
        let options = with_set(FilterSet {
            flags: vec!["x-internal".to_string()],
            ..FilterSet::default()
        });
        let filtered = filter(petstore(), &options);
        assert!(filtered["paths"].get("/internal/jobs").is_none());
        assert!(filtered["paths"].get("/pets").is_some());
    }

    #[test]
    fn tags_drop_operations_and_root_tag_entries() {
        let options = with_set(FilterSet {
            tags: vec!["admin".to_string()],
            ..FilterSet::default()
        });
        let filtered = filter(petstore(), &options);
        assert!(filtered["paths"]["/pets"].get("post").is_none());
        let names: Vec<&str> = filtered["tags"]
            .as_sequence()
            .unwrap()
            .iter()
            .filter_map(|t| t.get("name").and_then(Value::as_str))
            .collect();
        assert_eq!(names, ["pets"]);
    }

    #[test]
    fn operation_ids_drop_single_operations() {
        let options = with_set(FilterSet {
            operation_ids: vec!["listPets".to_string()],
            ..FilterSet::default()
        });
        let filtered = filter(petstore(), &options);
        assert!(filtered["paths"]["/pets"].get("get").is_none());
        assert!(filtered["paths"]["/pets"].get("post").is_some());
    }
}
