//! Acceso a datos del catálogo y de los pedidos
//!
//! Todas las consultas usan parámetros enlazados; nunca se concatena input
//! del cliente en el SQL.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::models::{
    Color, Customer, Engine, Jeep, JeepModel, JeepRow, NewOrder, Order, OrderOption, OrderParts,
    OrderRow, Tire,
};
use crate::utils::errors::{AppError, AppResult};

/// Gateway de persistencia que usan los servicios
#[async_trait]
pub trait JeepSalesRepository: Send + Sync {
    /// Variantes con `model_id` y `trim_level` exactos, sin orden garantizado
    async fn fetch_jeeps(&self, model: JeepModel, trim: &str) -> AppResult<Vec<Jeep>>;

    /// Inserta cabecera + opciones en una sola transacción y devuelve el
    /// pedido tal como quedó guardado
    async fn save_order(&self, order: &NewOrder) -> AppResult<Order>;
}

pub struct PgJeepSalesRepository {
    pool: PgPool,
}

impl PgJeepSalesRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert_order(
        tx: &mut Transaction<'_, Postgres>,
        order: &NewOrder,
    ) -> AppResult<Order> {
        let order_id = Uuid::new_v4();

        // La variante se resuelve dentro del mismo INSERT
        let header = sqlx::query_as::<_, OrderRow>(
            r#"
            INSERT INTO orders (order_id, customer_id, model_fk, color_id, engine_id, tire_id)
            SELECT $1, $2, m.model_pk, $6, $7, $8
            FROM models m
            WHERE m.model_id = $3 AND m.trim_level = $4 AND m.num_doors = $5
            ORDER BY m.model_pk
            LIMIT 1
            RETURNING order_id, customer_id, model_fk, color_id, engine_id, tire_id, created_at
            "#,
        )
        .bind(order_id)
        .bind(&order.customer)
        .bind(order.model.as_str())
        .bind(&order.trim)
        .bind(order.doors)
        .bind(&order.color)
        .bind(&order.engine)
        .bind(&order.tire)
        .fetch_optional(&mut **tx)
        .await
        .map_err(persistence_error)?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "No jeep found with model={}, trim={} and doors={}",
                order.model, order.trim, order.doors
            ))
        })?;

        for option in &order.options {
            sqlx::query("INSERT INTO order_options (order_id, option_id) VALUES ($1, $2)")
                .bind(order_id)
                .bind(option)
                .execute(&mut **tx)
                .await
                .map_err(persistence_error)?;
        }

        let variant = sqlx::query_as::<_, JeepRow>(
            "SELECT model_pk, model_id, trim_level, num_doors, wheel_size, base_price FROM models WHERE model_pk = $1",
        )
        .bind(header.model_fk)
        .fetch_one(&mut **tx)
        .await
        .map_err(persistence_error)?;

        let customer = sqlx::query_as::<_, Customer>(
            "SELECT customer_id, first_name, last_name, phone FROM customers WHERE customer_id = $1",
        )
        .bind(&header.customer_id)
        .fetch_one(&mut **tx)
        .await
        .map_err(persistence_error)?;

        let color = sqlx::query_as::<_, Color>(
            "SELECT color_id, color, price, is_exterior FROM colors WHERE color_id = $1",
        )
        .bind(&header.color_id)
        .fetch_one(&mut **tx)
        .await
        .map_err(persistence_error)?;

        let engine = sqlx::query_as::<_, Engine>(
            "SELECT engine_id, name, size_in_liters, fuel_type, price FROM engines WHERE engine_id = $1",
        )
        .bind(&header.engine_id)
        .fetch_one(&mut **tx)
        .await
        .map_err(persistence_error)?;

        let tire = sqlx::query_as::<_, Tire>(
            "SELECT tire_id, tire_size, manufacturer, warranty_miles, price FROM tires WHERE tire_id = $1",
        )
        .bind(&header.tire_id)
        .fetch_one(&mut **tx)
        .await
        .map_err(persistence_error)?;

        // Una fila por opción insertada, duplicados incluidos, en orden de inserción
        let options = sqlx::query_as::<_, OrderOption>(
            r#"
            SELECT o.option_id, o.category, o.manufacturer, o.name, o.price
            FROM order_options oo
            JOIN options o ON o.option_id = oo.option_id
            WHERE oo.order_id = $1
            ORDER BY oo.order_option_pk
            "#,
        )
        .bind(order_id)
        .fetch_all(&mut **tx)
        .await
        .map_err(persistence_error)?;

        let parts = OrderParts {
            customer,
            model: Jeep::try_from(variant)?,
            color,
            engine,
            tire,
            options,
        };

        Ok(Order::from_parts(header.order_id, header.created_at, parts))
    }
}

#[async_trait]
impl JeepSalesRepository for PgJeepSalesRepository {
    async fn fetch_jeeps(&self, model: JeepModel, trim: &str) -> AppResult<Vec<Jeep>> {
        debug!("🔍 DAO: model={}, trim={}", model, trim);

        let rows = sqlx::query_as::<_, JeepRow>(
            r#"
            SELECT model_pk, model_id, trim_level, num_doors, wheel_size, base_price
            FROM models
            WHERE model_id = $1 AND trim_level = $2
            "#,
        )
        .bind(model.as_str())
        .bind(trim)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Jeep::try_from).collect()
    }

    async fn save_order(&self, order: &NewOrder) -> AppResult<Order> {
        let mut tx = self.pool.begin().await.map_err(persistence_error)?;

        match Self::insert_order(&mut tx, order).await {
            Ok(saved) => {
                tx.commit().await.map_err(persistence_error)?;
                info!(
                    "💾 Pedido {} guardado con {} opciones",
                    saved.order_id,
                    saved.options.len()
                );
                Ok(saved)
            }
            Err(e) => {
                if let Err(rollback_error) = tx.rollback().await {
                    warn!("⚠️ Error en rollback del pedido: {}", rollback_error);
                }
                Err(e)
            }
        }
    }
}

fn persistence_error(e: sqlx::Error) -> AppError {
    AppError::OrderPersistence(e.to_string())
}
