// src/cliente/api.rs

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::categorias::categoria_structs::Categoria;
use crate::produtos::produtos_structs::{NovoProduto, Produto};
use crate::shared::shared_structs::MensagemResposta;
use crate::vendedores::vendedor_structs::{NovoVendedor, Vendedor};

/// Endereço do backend quando nenhum outro é informado.
pub const URL_PADRAO: &str = "http://localhost:8000";

#[derive(Debug, Error)]
pub enum ErroCliente {
    /// Sem resposta utilizável: servidor fora do ar, conexão caiu ou JSON ilegível.
    #[error("falha de comunicação com a API: {0}")]
    Rede(#[from] reqwest::Error),

    /// O servidor respondeu com status de erro; `mensagem` vem do corpo, se houver.
    #[error("API respondeu {status}: {}", .mensagem.as_deref().unwrap_or("sem mensagem"))]
    Api {
        status: StatusCode,
        mensagem: Option<String>,
    },
}

impl ErroCliente {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ErroCliente::Api { status, .. } => Some(*status),
            ErroCliente::Rede(_) => None,
        }
    }

    pub fn mensagem_do_servidor(&self) -> Option<&str> {
        match self {
            ErroCliente::Api { mensagem, .. } => mensagem.as_deref(),
            ErroCliente::Rede(_) => None,
        }
    }
}

/// Cliente HTTP das rotas do backend. Uma tentativa por chamada, sem cache.
#[derive(Debug, Clone)]
pub struct ApiCliente {
    http: reqwest::Client,
    base: String,
}

impl Default for ApiCliente {
    fn default() -> Self {
        Self::new(URL_PADRAO)
    }
}

impl ApiCliente {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: base.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, caminho: &str) -> String {
        format!("{}{}", self.base, caminho)
    }

    async fn ler<T: DeserializeOwned>(resposta: Response) -> Result<T, ErroCliente> {
        let status = resposta.status();
        if status.is_success() {
            return Ok(resposta.json().await?);
        }
        let mensagem = resposta
            .json::<MensagemResposta>()
            .await
            .ok()
            .map(|m| m.mensagem);
        Err(ErroCliente::Api { status, mensagem })
    }

    pub async fn listar_categorias(&self) -> Result<Vec<Categoria>, ErroCliente> {
        let resposta = self.http.get(self.url("/categorias")).send().await?;
        Self::ler(resposta).await
    }

    /// `nome` vazio lista todos os produtos.
    pub async fn listar_produtos(&self, nome: &str) -> Result<Vec<Produto>, ErroCliente> {
        let mut requisicao = self.http.get(self.url("/produtos"));
        if !nome.is_empty() {
            requisicao = requisicao.query(&[("nome", nome)]);
        }
        Self::ler(requisicao.send().await?).await
    }

    pub async fn cadastrar_produto(&self, dados: &NovoProduto) -> Result<Produto, ErroCliente> {
        let resposta = self.http.post(self.url("/produtos")).json(dados).send().await?;
        Self::ler(resposta).await
    }

    pub async fn atualizar_produto(&self, id: i32, dados: &NovoProduto) -> Result<MensagemResposta, ErroCliente> {
        let resposta = self
            .http
            .put(self.url(&format!("/produtos/{}", id)))
            .json(dados)
            .send()
            .await?;
        Self::ler(resposta).await
    }

    pub async fn deletar_produto(&self, id: i32) -> Result<MensagemResposta, ErroCliente> {
        let resposta = self.http.delete(self.url(&format!("/produtos/{}", id))).send().await?;
        Self::ler(resposta).await
    }

    pub async fn listar_vendedores(&self) -> Result<Vec<Vendedor>, ErroCliente> {
        let resposta = self.http.get(self.url("/vendedor")).send().await?;
        Self::ler(resposta).await
    }

    pub async fn cadastrar_vendedor(&self, dados: &NovoVendedor) -> Result<Vendedor, ErroCliente> {
        let resposta = self.http.post(self.url("/vendedor")).json(dados).send().await?;
        Self::ler(resposta).await
    }

    pub async fn buscar_vendedor(&self, id: i32) -> Result<Vendedor, ErroCliente> {
        let resposta = self.http.get(self.url(&format!("/vendedor/{}", id))).send().await?;
        Self::ler(resposta).await
    }

    pub async fn deletar_vendedor(&self, id: i32) -> Result<MensagemResposta, ErroCliente> {
        let resposta = self.http.delete(self.url(&format!("/vendedor/{}", id))).send().await?;
        Self::ler(resposta).await
    }
}
