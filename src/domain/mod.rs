pub mod errors;
pub mod ids;
pub mod menu;
pub mod order;
pub mod ports;
pub mod price;
