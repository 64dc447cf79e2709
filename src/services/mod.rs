//! Services module
//!
//! Este módulo contiene la lógica de negocio. Cada servicio recibe el
//! repositorio por constructor.

pub mod jeep_order_service;
pub mod jeep_sales_service;

pub use jeep_order_service::*;
pub use jeep_sales_service::*;
