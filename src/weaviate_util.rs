use anyhow::{bail, Result};
use tracing::{debug, info};

use crate::collection_schema::{class_name, CollectionConfig};
use crate::weaviate_client::Weaviate;

pub async fn collection_exists(weaviate: &Weaviate, collection_name: &str) -> Result<bool> {
    Ok(weaviate.get_class(&class_name(collection_name)).await?.is_some())
}

pub async fn delete_collection_if_exists(weaviate: &Weaviate, collection_name: &str) -> Result<bool> {
    if !collection_exists(weaviate, collection_name).await? {
        debug!("'{}' collection does not exist in Weaviate; nothing to delete", collection_name);
        return Ok(false);
    }
    weaviate.delete_class(&class_name(collection_name)).await?;
    info!("deleted collection '{}' in Weaviate", collection_name);
    Ok(true)
}

pub async fn create_collection(weaviate: &Weaviate, config: &CollectionConfig) -> Result<()> {
    weaviate.create_class(config).await?;
    info!("created collection '{}' in Weaviate", config.name);
    Ok(())
}

/// Drops any collection named `collection_name` and creates it again with
/// the text/number schema.
pub async fn recreate_collection(weaviate: &Weaviate, collection_name: &str) -> Result<()> {
    if collection_name.is_empty() {
        bail!("collection name must not be empty");
    }
    delete_collection_if_exists(weaviate, collection_name).await?;
    create_collection(weaviate, &CollectionConfig::text_and_number(collection_name)).await
}
