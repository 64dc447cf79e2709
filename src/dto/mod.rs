pub mod jeep_dto;
pub mod order_dto;
