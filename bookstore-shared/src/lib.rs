pub mod app_config;
pub mod pii;
pub mod shutdown;
pub mod telemetry;

pub use app_config::Config;
pub use pii::Masked;
