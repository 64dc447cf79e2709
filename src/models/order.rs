//! Modelo de Order
//!
//! Un pedido referencia una variante de Jeep, un cliente y el color, motor,
//! neumático y opciones elegidos. Mapea a `orders` + `order_options`.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::catalog::{Color, Customer, Engine, OrderOption, Tire};
use super::jeep::{Jeep, JeepModel};

/// Pedido ya validado, listo para persistir
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub customer: String,
    pub model: JeepModel,
    pub trim: String,
    pub doors: i32,
    pub color: String,
    pub engine: String,
    pub tire: String,
    pub options: Vec<String>,
}

/// Pedido persistido, con todas sus relaciones resueltas
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: Uuid,
    pub customer: Customer,
    pub model: Jeep,
    pub color: Color,
    pub engine: Engine,
    pub tire: Tire,
    pub options: Vec<OrderOption>,
    /// Precio base + color + motor + neumático + opciones
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Cabecera de pedido leída de `orders`
#[derive(Debug, FromRow)]
pub struct OrderRow {
    pub order_id: Uuid,
    pub customer_id: String,
    pub model_fk: i64,
    pub color_id: String,
    pub engine_id: String,
    pub tire_id: String,
    pub created_at: DateTime<Utc>,
}

/// Relaciones de un pedido, cargadas por separado de la cabecera
#[derive(Debug, Clone)]
pub struct OrderParts {
    pub customer: Customer,
    pub model: Jeep,
    pub color: Color,
    pub engine: Engine,
    pub tire: Tire,
    pub options: Vec<OrderOption>,
}

impl OrderParts {
    pub fn total_price(&self) -> Decimal {
        let options: Decimal = self.options.iter().map(|option| option.price).sum();
        self.model.base_price + self.color.price + self.engine.price + self.tire.price + options
    }
}

impl Order {
    pub fn from_parts(order_id: Uuid, created_at: DateTime<Utc>, parts: OrderParts) -> Self {
        let price = parts.total_price();
        Self {
            order_id,
            customer: parts.customer,
            model: parts.model,
            color: parts.color,
            engine: parts.engine,
            tire: parts.tire,
            options: parts.options,
            price,
            created_at,
        }
    }
}
