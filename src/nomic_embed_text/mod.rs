pub const MODEL_NAME: &str = "nomic-embed-text";
pub const API_ENDPOINT: &str = "http://host.docker.internal:11434"; // Ollama as seen from the Weaviate container
