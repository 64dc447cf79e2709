use serde::Deserialize;

// Parámetros de búsqueda de GET /jeeps, sin validar
#[derive(Debug, Default, Deserialize)]
pub struct FetchJeepsQuery {
    pub model: Option<String>,
    pub trim: Option<String>,
}
