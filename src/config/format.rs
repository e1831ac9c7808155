//! Configuration document parsing (YAML and TOML)

use serde::de::DeserializeOwned;
use serde_json::{Map, Number, Value};
use yaml_rust2::{Yaml, YamlLoader};

/// Supported configuration file syntaxes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    /// `.toml` files are TOML; everything else is read as YAML
    pub fn from_path(path: &std::path::Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Yaml,
        }
    }
}

/// Parse `content` into `T`. `None` means the document was empty.
pub fn parse_document<T: DeserializeOwned>(
    content: &str,
    format: ConfigFormat,
) -> Result<Option<T>, String> {
    match format {
        ConfigFormat::Toml => {
            if content.trim().is_empty() {
                return Ok(None);
            }
            toml::from_str(content).map(Some).map_err(|e| e.to_string())
        }
        ConfigFormat::Yaml => {
            let docs = YamlLoader::load_from_str(content).map_err(|e| e.to_string())?;
            let Some(doc) = docs.into_iter().next() else {
                return Ok(None);
            };
            if doc.is_null() {
                return Ok(None);
            }
            let value = yaml_to_json(doc)?;
            serde_json::from_value(value).map(Some).map_err(|e| e.to_string())
        }
    }
}

/// Convert a loaded YAML node into a JSON value so it can go through serde
fn yaml_to_json(node: Yaml) -> Result<Value, String> {
    Ok(match node {
        Yaml::Null => Value::Null,
        Yaml::Boolean(b) => Value::Bool(b),
        Yaml::Integer(i) => Value::Number(i.into()),
        // Non-finite or odd spellings (`.inf`, `1e`) have no JSON number; keep the text.
        Yaml::Real(raw) => match raw.parse::<f64>().ok().and_then(Number::from_f64) {
            Some(number) => Value::Number(number),
            None => Value::String(raw),
        },
        Yaml::String(s) => Value::String(s),
        Yaml::Array(items) => Value::Array(
            items
                .into_iter()
                .map(yaml_to_json)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Yaml::Hash(hash) => {
            let mut map = Map::with_capacity(hash.len());
            for (key, value) in hash {
                map.insert(yaml_key(key)?, yaml_to_json(value)?);
            }
            Value::Object(map)
        }
        Yaml::Alias(_) => return Err("unresolved YAML alias".to_string()),
        Yaml::BadValue => return Err("invalid YAML value".to_string()),
    })
}

fn yaml_key(key: Yaml) -> Result<String, String> {
    match key {
        Yaml::String(s) => Ok(s),
        Yaml::Integer(i) => Ok(i.to_string()),
        Yaml::Boolean(b) => Ok(b.to_string()),
        Yaml::Real(raw) => Ok(raw),
        other => Err(format!("unsupported mapping key: {other:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::path::Path;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Doc {
        name: String,
        items: Vec<String>,
        #[serde(default)]
        extra: Option<String>,
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ConfigFormat::from_path(Path::new("a.toml")), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("a.TOML")), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("a.yaml")), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("a.yml")), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("config")), ConfigFormat::Yaml);
    }

    #[test]
    fn test_parse_yaml() {
        let doc: Doc = parse_document("name: x\nitems:\n  - a\n  - b\n", ConfigFormat::Yaml)
            .expect("parse yaml")
            .expect("non-empty doc");
        assert_eq!(
            doc,
            Doc {
                name: "x".to_string(),
                items: vec!["a".to_string(), "b".to_string()],
                extra: None,
            }
        );
    }

    #[test]
    fn test_parse_yaml_null_field_is_none() {
        let doc: Doc = parse_document("name: x\nitems: []\nextra:\n", ConfigFormat::Yaml)
            .expect("parse yaml")
            .expect("non-empty doc");
        assert_eq!(doc.extra, None);
    }

    #[test]
    fn test_parse_yaml_resolves_anchors() {
        let content = "name: &n shared\nitems:\n  - *n\n";
        let doc: Doc = parse_document(content, ConfigFormat::Yaml)
            .expect("parse yaml")
            .expect("non-empty doc");
        assert_eq!(doc.items, vec!["shared".to_string()]);
    }

    #[test]
    fn test_parse_empty_documents() {
        let yaml: Option<Doc> = parse_document("", ConfigFormat::Yaml).expect("empty yaml");
        let comment_only: Option<Doc> =
            parse_document("# nothing here\n", ConfigFormat::Yaml).expect("comment-only yaml");
        let toml_doc: Option<Doc> = parse_document("  \n", ConfigFormat::Toml).expect("empty toml");
        assert!(yaml.is_none());
        assert!(comment_only.is_none());
        assert!(toml_doc.is_none());
    }

    #[test]
    fn test_parse_yaml_syntax_error() {
        let result: Result<Option<Doc>, String> =
            parse_document("name: [unclosed\n", ConfigFormat::Yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_yaml_type_mismatch() {
        let result: Result<Option<Doc>, String> =
            parse_document("name: x\nitems: nope\n", ConfigFormat::Yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_toml() {
        let doc: Doc = parse_document("name = \"x\"\nitems = [\"a\"]\n", ConfigFormat::Toml)
            .expect("parse toml")
            .expect("non-empty doc");
        assert_eq!(doc.items, vec!["a".to_string()]);
    }
}
