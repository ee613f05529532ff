pub mod filter;
pub mod rename;
pub mod sort;

use serde_yaml::Value;

use crate::options::Options;

/// Run the enabled transform stages over the document in fixed order:
/// filter, then sort, then rename. An absent stage is a no-op.
pub fn apply(mut doc: Value, options: &Options) -> Value {
    if options.filter_set.is_some() {
        doc = filter::filter(doc, options);
    }
    if options.sort {
        doc = sort::sort(doc, options);
    }
    if let Some(title) = &options.rename {
        doc = rename::rename(doc, options);
        options.info(format!("OpenAPI title renamed to: \"{title}\""));
    }
    doc
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::transform::filter::FilterSet;

    fn doc(text: &str) -> Value {
        serde_yaml::from_str(text).unwrap()
    }

    #[test]
    fn no_enabled_stage_leaves_document_untouched() {
        let options = Options {
            sort: false,
            ..Options::default()
        };
        let original = doc("info:\n  title: Petstore\nzebra: last\nalpha: first\n");
        let transformed = apply(original.clone(), &options);
        assert_eq!(transformed, original);
    }

    #[test]
    fn filter_applies_independently_of_sort_and_rename() {
        let options = Options {
            sort: true,
            rename: Some("Renamed".to_string()),
            filter_set: Some(FilterSet {
                methods: vec!["delete".to_string()],
                ..FilterSet::default()
            }),
            ..Options::default()
        };
        let original = doc(concat!(
            "info:\n",
            "  title: Petstore\n",
            "paths:\n",
            "  /pets:\n",
            "    delete: {}\n",
            "    get: {}\n",
        ));
        let transformed = apply(original, &options);
        assert!(transformed["paths"]["/pets"].get("delete").is_none());
        assert!(transformed["paths"]["/pets"].get("get").is_some());
        assert_eq!(
            transformed["info"]["title"],
            Value::from("Renamed"),
        );
    }
}
