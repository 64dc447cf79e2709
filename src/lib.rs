//! Jeep Sales
//!
//! Servicio REST de catálogo y pedidos de Jeeps: búsqueda de variantes por
//! modelo/trim y creación atómica de pedidos con sus opciones.

pub mod config;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
