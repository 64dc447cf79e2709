//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use crate::repositories::JeepSalesRepository;
use crate::services::{JeepOrderService, JeepSalesService};

#[derive(Clone)]
pub struct AppState {
    pub jeep_sales: Arc<JeepSalesService>,
    pub orders: Arc<JeepOrderService>,
}

impl AppState {
    pub fn new(repository: Arc<dyn JeepSalesRepository>) -> Self {
        Self {
            jeep_sales: Arc::new(JeepSalesService::new(repository.clone())),
            orders: Arc::new(JeepOrderService::new(repository)),
        }
    }
}
