//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean al schema PostgreSQL
//! del catálogo de Jeeps y los pedidos.

pub mod catalog;
pub mod jeep;
pub mod order;

pub use catalog::*;
pub use jeep::*;
pub use order::*;
