// src/erros/mod.rs

mod erro_api;
mod erro_banco;
mod erro_inicializacao;

pub use erro_api::{ErroApi, MENSAGEM_NAO_IDENTIFICADO};
pub use erro_banco::ErroBanco;
pub use erro_inicializacao::ErroInicializacao;

pub type Result<T, E = ErroApi> = std::result::Result<T, E>;
