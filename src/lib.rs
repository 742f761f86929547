// src/lib.rs

pub mod app;
pub mod armazenamento;
pub mod categorias;
pub mod cliente;
pub mod config;
pub mod erros;
pub mod produtos;
pub mod shared;
pub mod vendedores;

pub use app::AppState;
pub use config::AppConfig;
pub use erros::{ErroApi, Result};
