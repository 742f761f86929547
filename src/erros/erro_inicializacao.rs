// src/erros/erro_inicializacao.rs

use thiserror::Error;

/// Falhas que impedem o servidor de subir.
#[derive(Debug, Error)]
pub enum ErroInicializacao {
    #[error("variável de ambiente {nome} inválida: '{valor}'")]
    VariavelInvalida { nome: &'static str, valor: String },

    #[error("não foi possível preparar o pool do banco: {0}")]
    Banco(#[from] sqlx::Error),

    #[error("falha ao executar as migrações: {0}")]
    Migracao(#[from] sqlx::migrate::MigrateError),
}
