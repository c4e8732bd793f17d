use serde::{Deserialize, Serialize};

// Entrada del menú lateral
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuEntry {
    pub label: String,
    pub slug: String,
    pub path: String,
}

// Payload de una vista: nombre de la vista + contenido ya renderizable
#[derive(Debug, Serialize)]
pub struct ViewResponse {
    pub view: String,
    pub title: String,
    pub content: serde_json::Value,
}
