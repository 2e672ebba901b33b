pub mod error;
pub mod interval;
pub mod price;
pub mod provider;
pub mod series;
pub mod summary;
pub mod window;
pub mod zone;
