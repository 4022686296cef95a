//! Izon Config provides a registry of configs that can be injected into the
//! rest of the application.
//!
//! Izon Config is split into two major parts:
//! 1. ConfigProvider: Used to create the registry of all configs and hand them to a container
//! 2. Config<T>: A wrapper type to declare and retrieve configs in constructors
//!
//! # Examples
//!
//! ```rust
//! use izon_config::provider::{config_id, ConfigProvider};
//! use izon_di::Container;
//!
//! #[derive(Clone)]
//! struct AppConfig {
//!     host: String,
//!     port: u16,
//! }
//!
//! let mut config_provider = ConfigProvider::new();
//! config_provider
//!     .add_config(AppConfig { host: "localhost".to_string(), port: 8080 })
//!     .unwrap();
//!
//! let mut container = Container::default();
//! config_provider.register(&mut container);
//!
//! let config = container.require::<AppConfig>(&config_id::<AppConfig>()).unwrap();
//! assert_eq!(config.host, "localhost");
//! assert_eq!(config.port, 8080);
//! ```

pub mod config;
pub mod errors;
pub mod provider;
