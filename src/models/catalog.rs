//! Entidades de catálogo referenciadas por un pedido
//!
//! Cada una mapea a su tabla (`customers`, `colors`, `engines`, `tires`,
//! `options`) y se identifica por un id textual.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub customer_id: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Color {
    pub color_id: String,
    pub color: String,
    pub price: Decimal,
    pub is_exterior: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Engine {
    pub engine_id: String,
    pub name: String,
    pub size_in_liters: Decimal,
    pub fuel_type: String,
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Tire {
    pub tire_id: String,
    pub tire_size: String,
    pub manufacturer: String,
    pub warranty_miles: i32,
    pub price: Decimal,
}

/// Opción seleccionada (accesorio)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct OrderOption {
    pub option_id: String,
    pub category: String,
    pub manufacturer: String,
    pub name: String,
    pub price: Decimal,
}
