pub mod jeep_sales_repository;

pub use jeep_sales_repository::*;
