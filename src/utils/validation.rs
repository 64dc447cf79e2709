//! Utilidades de validación
//!
//! Validadores puros que convierten los parámetros crudos de la petición en
//! valores tipados antes de tocar la base de datos.

use lazy_static::lazy_static;
use num_traits::Zero;
use regex::Regex;
use serde::Serialize;
use std::borrow::Cow;
use validator::ValidationError;

use crate::dto::order_dto::OrderRequest;
use crate::models::{JeepModel, NewOrder};
use crate::utils::errors::{AppError, AppResult};

/// Longitud máxima de un trim
pub const TRIM_MAX_LENGTH: usize = 40;

/// Longitud máxima de los identificadores de catálogo (cliente, color, ...)
pub const ID_MAX_LENGTH: usize = 30;

lazy_static! {
    static ref TRIM_PATTERN: Regex = Regex::new(r"^[A-Za-z0-9 ]+$").expect("valid trim pattern");
    static ref ID_PATTERN: Regex = Regex::new(r"^[A-Za-z0-9_ ]+$").expect("valid identifier pattern");
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.message = Some(Cow::from("must not be blank"));
        return Err(error);
    }
    Ok(())
}

/// Validar longitud mínima y máxima
pub fn validate_length(value: &str, min: usize, max: usize) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len < min || len > max {
        let mut error = ValidationError::new("length");
        error.add_param("min".into(), &min);
        error.add_param("max".into(), &max);
        error.add_param("actual".into(), &len);
        error.message = Some(Cow::from(format!(
            "must be between {} and {} characters (got {})",
            min, max, len
        )));
        return Err(error);
    }
    Ok(())
}

/// Validar que el valor completo case con el patrón
pub fn validate_pattern(
    value: &str,
    pattern: &Regex,
    description: &'static str,
) -> Result<(), ValidationError> {
    if !pattern.is_match(value) {
        let mut error = ValidationError::new("pattern");
        error.add_param("value".into(), &value.to_string());
        error.message = Some(Cow::from(format!("must contain only {}", description)));
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea positivo
pub fn validate_positive<T: PartialOrd + std::fmt::Display + Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value <= T::zero() {
        let mut error = ValidationError::new("positive");
        error.add_param("value".into(), &value);
        error.message = Some(Cow::from(format!("must be a positive number (got {})", value)));
        return Err(error);
    }
    Ok(())
}

/// Mensaje legible para un ValidationError sobre `field`
fn describe(field: &str, error: &ValidationError) -> String {
    match &error.message {
        Some(message) => format!("'{}' {}", field, message),
        None => format!("'{}' failed the {} check", field, error.code),
    }
}

/// Validar el parámetro `model` de una búsqueda
pub fn validate_model(raw: Option<&str>) -> AppResult<JeepModel> {
    let value = raw.ok_or_else(|| AppError::InvalidModel("missing required parameter 'model'".into()))?;
    validate_not_empty(value).map_err(|e| AppError::InvalidModel(describe("model", &e)))?;
    value.parse()
}

/// Validar el parámetro `trim`: no vacío, acotado y alfanumérico
pub fn validate_trim(raw: Option<&str>) -> AppResult<String> {
    let value = raw.ok_or_else(|| AppError::InvalidTrim("missing required parameter 'trim'".into()))?;

    validate_not_empty(value)
        .and_then(|_| validate_length(value, 1, TRIM_MAX_LENGTH))
        .and_then(|_| validate_pattern(value, &TRIM_PATTERN, "letters, digits and spaces"))
        .map_err(|e| AppError::InvalidTrim(describe("trim", &e)))?;

    Ok(value.to_string())
}

fn required(field: &str, value: Option<String>) -> AppResult<String> {
    let value = value.ok_or_else(|| {
        AppError::InvalidOrderRequest(format!("missing required field '{}'", field))
    })?;
    validate_not_empty(&value).map_err(|e| AppError::InvalidOrderRequest(describe(field, &e)))?;
    Ok(value)
}

fn identifier(field: &str, value: Option<String>) -> AppResult<String> {
    let value = required(field, value)?;
    validate_length(&value, 1, ID_MAX_LENGTH)
        .and_then(|_| validate_pattern(&value, &ID_PATTERN, "letters, digits, underscores and spaces"))
        .map_err(|e| AppError::InvalidOrderRequest(describe(field, &e)))?;
    Ok(value)
}

/// Validar el body de POST /orders y convertirlo en un `NewOrder`
pub fn validate_order_request(request: OrderRequest) -> AppResult<NewOrder> {
    let customer = identifier("customer", request.customer)?;

    let model = required("model", request.model)?;
    let model = validate_model(Some(&model))?;

    let trim = required("trim", request.trim)?;
    let trim = validate_trim(Some(&trim))?;

    let doors = request.doors.ok_or_else(|| {
        AppError::InvalidOrderRequest("missing required field 'doors'".into())
    })?;
    validate_positive(doors).map_err(|e| AppError::InvalidOrderRequest(describe("doors", &e)))?;

    let color = identifier("color", request.color)?;
    let engine = identifier("engine", request.engine)?;
    let tire = identifier("tire", request.tire)?;

    let options = request
        .options
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(index, option)| identifier(&format!("options[{}]", index), Some(option)))
        .collect::<AppResult<Vec<_>>>()?;

    Ok(NewOrder {
        customer,
        model,
        trim,
        doors,
        color,
        engine,
        tire,
        options,
    })
}
