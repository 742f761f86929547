// src/cliente/cadastro_vendedor.rs

use reqwest::StatusCode;

use super::api::{ApiCliente, ErroCliente};
use crate::vendedores::vendedor_structs::{NovoVendedor, Vendedor};

/// Tela de cadastro de vendedores: lista os já cadastrados e envia o formulário.
#[derive(Debug)]
pub struct CadastroVendedor {
    api: ApiCliente,
    pub formulario: NovoVendedor,
    pub vendedores: Vec<Vendedor>,
    pub mensagem: Option<String>,
}

impl CadastroVendedor {
    pub fn new(api: ApiCliente) -> Self {
        Self {
            api,
            formulario: NovoVendedor::default(),
            vendedores: Vec::new(),
            mensagem: None,
        }
    }

    /// Busca a lista de vendedores ao abrir a tela.
    pub async fn montar(&mut self) {
        match self.api.listar_vendedores().await {
            Ok(vendedores) => self.vendedores = vendedores,
            Err(erro) => self.mensagem = Some(texto_do_erro(&erro, "Erro ao buscar vendedores.")),
        }
    }

    /// Envia o formulário. O vendedor devolvido pelo servidor entra no fim da lista.
    pub async fn cadastrar(&mut self) {
        match self.api.cadastrar_vendedor(&self.formulario).await {
            Ok(vendedor) => {
                self.vendedores.push(vendedor);
                self.mensagem = Some("Vendedor cadastrado com sucesso!".to_string());
            }
            Err(erro) => self.mensagem = Some(texto_do_erro(&erro, "Erro ao cadastrar vendedor.")),
        }
    }
}

// 400 traz a mensagem da tabela de erros do servidor; o resto usa o texto fixo.
fn texto_do_erro(erro: &ErroCliente, padrao: &str) -> String {
    match (erro.status(), erro.mensagem_do_servidor()) {
        (Some(StatusCode::BAD_REQUEST), Some(mensagem)) => mensagem.to_string(),
        _ => padrao.to_string(),
    }
}
