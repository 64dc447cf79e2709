//! Sistema de manejo de errores
//!
//! Este módulo define la taxonomía de fallos del servicio, su clasificación
//! a códigos HTTP y el payload de error que ve el cliente.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info, warn};

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid model: {0}")]
    InvalidModel(String),

    #[error("Invalid trim: {0}")]
    InvalidTrim(String),

    #[error("Invalid order request: {0}")]
    InvalidOrderRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Order persistence failure: {0}")]
    OrderPersistence(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Clase de fallo, que es lo único que decide el código HTTP
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Validation,
    NotFound,
    Persistence,
    Unexpected,
}

impl FailureKind {
    pub fn status_code(&self) -> StatusCode {
        match self {
            FailureKind::Validation => StatusCode::BAD_REQUEST,
            FailureKind::NotFound => StatusCode::NOT_FOUND,
            FailureKind::Persistence | FailureKind::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl AppError {
    pub fn kind(&self) -> FailureKind {
        match self {
            AppError::InvalidModel(_)
            | AppError::InvalidTrim(_)
            | AppError::InvalidOrderRequest(_) => FailureKind::Validation,
            AppError::NotFound(_) => FailureKind::NotFound,
            AppError::OrderPersistence(_) | AppError::Database(_) => FailureKind::Persistence,
            AppError::Unexpected(_) => FailureKind::Unexpected,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        self.kind().status_code()
    }

    /// Mensaje apto para el cliente. Los 500 no exponen detalles internos.
    pub fn public_message(&self) -> String {
        match self {
            AppError::OrderPersistence(_) => "The order could not be saved".to_string(),
            AppError::Database(_) | AppError::Unexpected(_) => {
                "An unplanned error occurred".to_string()
            }
            other => other.to_string(),
        }
    }
}

/// Fallo ya clasificado, viaja en las extensiones de la respuesta hasta el
/// middleware `error_mapper`, que conoce la URI de la petición.
#[derive(Debug, Clone)]
pub struct ApiFailure {
    pub kind: FailureKind,
    pub message: String,
}

/// Respuesta de error para la API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(rename = "status code")]
    pub status_code: u16,
    pub uri: String,
    pub timestamp: String,
    pub reason: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: String, uri: String, now: DateTime<Utc>) -> Self {
        Self {
            message,
            status_code: status.as_u16(),
            uri,
            timestamp: format_timestamp(now),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        }
    }
}

/// Formato RFC 1123, p.ej. `Tue, 3 Jun 2008 11:05:30 GMT`
pub fn format_timestamp(now: DateTime<Utc>) -> String {
    now.format("%a, %-d %b %Y %H:%M:%S GMT").to_string()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        match kind {
            FailureKind::Validation => warn!("⚠️ Petición inválida: {}", self),
            FailureKind::NotFound => info!("🔍 Sin resultados: {}", self),
            FailureKind::Persistence | FailureKind::Unexpected => error!("❌ {}", self),
        }

        let status = kind.status_code();
        let failure = ApiFailure {
            kind,
            message: self.public_message(),
        };

        // Sin el middleware la URI queda vacía; error_mapper la completa
        let body = ErrorResponse::new(status, failure.message.clone(), String::new(), Utc::now());
        let mut response = (status, Json(body)).into_response();
        response.extensions_mut().insert(failure);
        response
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;
