// src/cliente/mod.rs

//! Estado das telas do front-end e o cliente HTTP que elas usam.
//!
//! Cada tela busca seus dados ao montar e a cada ação do usuário, e guarda
//! o resultado e a última mensagem no próprio estado. Layout e navegação
//! ficam fora daqui.

pub mod api;
pub mod cadastro_vendedor;
pub mod gestao_produtos;
pub mod perfil_vendedor;

pub use api::{ApiCliente, ErroCliente};
pub use cadastro_vendedor::CadastroVendedor;
pub use gestao_produtos::GestaoProdutos;
pub use perfil_vendedor::PerfilVendedor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipoMensagem {
    Sucesso,
    Erro,
}

/// Aviso exibido no topo da tela.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mensagem {
    pub tipo: TipoMensagem,
    pub texto: String,
}

impl Mensagem {
    pub fn sucesso(texto: impl Into<String>) -> Self {
        Self { tipo: TipoMensagem::Sucesso, texto: texto.into() }
    }

    pub fn erro(texto: impl Into<String>) -> Self {
        Self { tipo: TipoMensagem::Erro, texto: texto.into() }
    }
}
