use std::collections::BTreeMap;

use serde::Serialize;

use crate::nomic_embed_text;

pub const TEXT2VEC_OLLAMA: &str = "text2vec-ollama";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Text,
    Number,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub name: String,
    pub data_type: Vec<DataType>,
}

impl Property {
    pub fn new(name: &str, data_type: DataType) -> Self {
        Property {
            name: name.to_string(),
            data_type: vec![data_type],
        }
    }
}

/// Settings for a vectorizer module, sent under `moduleConfig.<module>`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorizerConfig {
    #[serde(skip)]
    pub module: String,
    pub model: String,
    pub api_endpoint: String,
    #[serde(rename = "vectorizeClassName")]
    pub vectorize_collection_name: bool,
}

impl VectorizerConfig {
    pub fn text2vec_ollama(model: &str, api_endpoint: &str) -> Self {
        VectorizerConfig {
            module: TEXT2VEC_OLLAMA.to_string(),
            model: model.to_string(),
            api_endpoint: api_endpoint.to_string(),
            vectorize_collection_name: true,
        }
    }
}

/// Body of `POST /v1/schema`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionConfig {
    #[serde(rename = "class")]
    pub name: String,
    pub properties: Vec<Property>,
    pub vectorizer: String,
    pub module_config: BTreeMap<String, VectorizerConfig>,
}

impl CollectionConfig {
    pub fn new(name: &str, properties: Vec<Property>, vectorizer: VectorizerConfig) -> Self {
        let mut module_config = BTreeMap::new();
        let module = vectorizer.module.clone();
        module_config.insert(module.clone(), vectorizer);
        CollectionConfig {
            name: class_name(name),
            properties,
            vectorizer: module,
            module_config,
        }
    }

    /// The `string`/`number` schema vectorized by nomic-embed-text through Ollama.
    pub fn text_and_number(name: &str) -> Self {
        CollectionConfig::new(
            name,
            vec![
                Property::new("string", DataType::Text),
                Property::new("number", DataType::Number),
            ],
            VectorizerConfig::text2vec_ollama(
                nomic_embed_text::MODEL_NAME,
                nomic_embed_text::API_ENDPOINT,
            ),
        )
    }
}

/// Weaviate stores class names with an upper-case first letter.
pub fn class_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
