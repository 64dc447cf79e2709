//! Servicio de creación de pedidos

use std::sync::Arc;
use tracing::info;

use crate::models::{NewOrder, Order};
use crate::repositories::JeepSalesRepository;
use crate::utils::errors::AppResult;

pub struct JeepOrderService {
    repository: Arc<dyn JeepSalesRepository>,
}

impl JeepOrderService {
    pub fn new(repository: Arc<dyn JeepSalesRepository>) -> Self {
        Self { repository }
    }

    /// Crear un pedido. La existencia de cliente, color, motor, neumático y
    /// opciones la garantizan las foreign keys, no se comprueba aquí.
    pub async fn create_order(&self, order: NewOrder) -> AppResult<Order> {
        info!(
            "🧾 create_order: customer={}, model={}, trim={}, doors={}, {} opciones",
            order.customer,
            order.model,
            order.trim,
            order.doors,
            order.options.len()
        );

        self.repository.save_order(&order).await
    }
}
