use std::collections::BTreeMap;

use liquid::model::Value;
use liquid::Object;
use serde_yaml::Value as YamlValue;

use crate::content::Document;
use crate::front_matter::format_timestamp;
use crate::theme::resolver::Naming;

/// Convert YAML value to Liquid value
pub fn yaml_to_liquid(yaml: &YamlValue) -> Value {
    match yaml {
        YamlValue::Null => Value::Nil,
        YamlValue::Bool(b) => Value::scalar(*b),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::scalar(i)
            } else if let Some(f) = n.as_f64() {
                Value::scalar(f)
            } else {
                Value::scalar(n.to_string())
            }
        }
        YamlValue::String(s) => Value::scalar(s.clone()),
        YamlValue::Sequence(seq) => Value::Array(seq.iter().map(yaml_to_liquid).collect()),
        YamlValue::Mapping(map) => {
            let mut obj = Object::new();
            for (k, v) in map {
                let key = match k {
                    YamlValue::String(key) => key.clone(),
                    other => yaml_scalar_key(other),
                };
                obj.insert(key.into(), yaml_to_liquid(v));
            }
            Value::Object(obj)
        }
        YamlValue::Tagged(tagged) => yaml_to_liquid(&tagged.value),
    }
}

fn yaml_scalar_key(key: &YamlValue) -> String {
    match key {
        YamlValue::Bool(b) => b.to_string(),
        YamlValue::Number(n) => n.to_string(),
        other => format!("{:?}", other),
    }
}

/// Top-level render context built from the site-wide variables
pub fn site_globals(site: &BTreeMap<String, YamlValue>) -> Object {
    let mut globals = Object::new();
    for (key, value) in site {
        globals.insert(key.clone().into(), yaml_to_liquid(value));
    }
    globals
}

/// The template view of a document.
///
/// Header fields come first, with `title` falling back to the slug when the
/// header has none. The reserved names (`content`, `draft`,
/// `created`, `source_path`, `slug`, `output_name`, `path`) are inserted
/// afterwards and win over header fields of the same name.
pub fn document_to_liquid(document: &Document, naming: &Naming, output_name: &str) -> Value {
    let mut obj = Object::new();

    for (key, value) in &document.header.fields {
        obj.insert(key.clone().into(), Value::scalar(value.clone()));
    }
    if document.title().is_none() {
        obj.insert("title".into(), Value::scalar(naming.slug(document).to_string()));
    }

    obj.insert("content".into(), Value::scalar(document.content.clone()));
    obj.insert("draft".into(), Value::scalar(document.header.draft));
    obj.insert("created".into(), Value::scalar(format_timestamp(&document.header.created)));
    obj.insert(
        "source_path".into(),
        Value::scalar(document.source_path.display().to_string()),
    );
    obj.insert("slug".into(), Value::scalar(naming.slug(document).to_string()));
    obj.insert("output_name".into(), Value::scalar(output_name.to_string()));
    obj.insert("path".into(), Value::scalar(output_name.to_string()));

    Value::Object(obj)
}
