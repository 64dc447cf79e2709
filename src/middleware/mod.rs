//! Middleware del sistema
//!
//! CORS y la traducción de errores a la respuesta uniforme.

pub mod cors;
pub mod error_mapper;

pub use cors::*;
pub use error_mapper::*;
