//! Traducción de fallos a la respuesta de error uniforme
//!
//! Los handlers devuelven `AppError`; su `IntoResponse` deja un `ApiFailure`
//! en las extensiones. Este middleware es el único punto que conoce la URI de
//! la petición y construye el payload final de cinco campos.

use axum::{
    body::{to_bytes, Body},
    extract::Request,
    http::{StatusCode, Uri},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use std::any::Any;

use crate::utils::errors::{ApiFailure, AppError, ErrorResponse};

/// Límite al leer cuerpos de error generados por el framework
const MAX_ERROR_BODY_BYTES: usize = 16 * 1024;

pub async fn error_mapper(request: Request, next: Next) -> Response {
    let uri = request.uri().path().to_string();
    let response = next.run(request).await;

    if let Some(failure) = response.extensions().get::<ApiFailure>().cloned() {
        return error_response(failure.kind.status_code(), failure.message, uri);
    }

    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        // Rechazos de axum (405, query mal formada, ...) llegan como texto plano
        let message = body_text(response.into_body())
            .await
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("Error").to_string());
        return error_response(status, message, uri);
    }

    response
}

fn error_response(status: StatusCode, message: String, uri: String) -> Response {
    (status, Json(ErrorResponse::new(status, message, uri, Utc::now()))).into_response()
}

async fn body_text(body: Body) -> Option<String> {
    let bytes = to_bytes(body, MAX_ERROR_BODY_BYTES).await.ok()?;
    let text = String::from_utf8_lossy(&bytes).trim().to_string();
    (!text.is_empty()).then_some(text)
}

/// Respuesta para un panic capturado por `CatchPanicLayer`
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    AppError::Unexpected(format!("handler panicked: {}", detail)).into_response()
}

/// Rutas inexistentes
pub async fn route_not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
