// src/shared/shared_structs.rs

use serde::{Deserialize, Serialize};

/// Corpo padrão das respostas que não carregam entidade: confirmações
/// ("Produto deletado com sucesso") e mensagens de erro.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MensagemResposta {
    pub mensagem: String,
}

impl MensagemResposta {
    pub fn new(mensagem: impl Into<String>) -> Self {
        Self { mensagem: mensagem.into() }
    }
}
