use serde_yaml::Value;

use crate::options::Options;

/// Overwrite `info.title` with the configured title. Documents without an
/// `info` object pass through unchanged.
pub fn rename(mut doc: Value, options: &Options) -> Value {
    let Some(title) = &options.rename else {
        return doc;
    };
    if let Some(info) = doc.get_mut("info").and_then(Value::as_mapping_mut) {
        info.insert(Value::from("title"), Value::from(title.as_str()));
    }
    doc
}

#[cfg(test)]
mod test {
    use super::*;

    fn with_title(title: &str) -> Options {
        Options {
            rename: Some(title.to_string()),
            ..Options::default()
        }
    }

    #[test]
    fn overwrites_the_document_title() {
        let doc = serde_yaml::from_str("info:\n  title: Old\n  version: 1.0.0\n").unwrap();
        let renamed = rename(doc, &with_title("NewTitle"));
        assert_eq!(renamed["info"]["title"], Value::from("NewTitle"));
        assert_eq!(renamed["info"]["version"], Value::from("1.0.0"));
    }

    #[test]
    fn document_without_info_is_untouched() {
        let doc: Value = serde_yaml::from_str("paths: {}\n").unwrap();
        let renamed = rename(doc.clone(), &with_title("NewTitle"));
        assert_eq!(renamed, doc);
    }
}
