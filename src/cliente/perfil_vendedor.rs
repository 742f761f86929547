// src/cliente/perfil_vendedor.rs

use reqwest::StatusCode;

use super::api::{ApiCliente, ErroCliente};
use crate::vendedores::vendedor_structs::Vendedor;

/// Tela de perfil de um vendedor, com a opção de excluir a conta.
#[derive(Debug)]
pub struct PerfilVendedor {
    api: ApiCliente,
    /// 0 enquanto nenhum vendedor foi escolhido.
    pub id: i32,
    pub vendedor: Option<Vendedor>,
    pub mensagem: Option<String>,
}

impl PerfilVendedor {
    pub fn new(api: ApiCliente) -> Self {
        Self::com_id(api, 0)
    }

    pub fn com_id(api: ApiCliente, id: i32) -> Self {
        Self {
            api,
            id,
            vendedor: None,
            mensagem: None,
        }
    }

    pub async fn montar(&mut self) {
        match self.api.buscar_vendedor(self.id).await {
            Ok(vendedor) => self.vendedor = Some(vendedor),
            Err(ErroCliente::Rede(_)) => {
                self.mensagem = Some("Erro de conexão com o servidor.".to_string())
            }
            Err(erro) => {
                let texto = match erro.status() {
                    Some(StatusCode::NOT_FOUND) => "Vendedor não encontrado.",
                    Some(StatusCode::INTERNAL_SERVER_ERROR) => "Erro interno do servidor.",
                    _ => erro.mensagem_do_servidor().unwrap_or("Erro ao buscar vendedor."),
                };
                self.mensagem = Some(texto.to_string());
            }
        }
    }

    /// Exclui o vendedor exibido e limpa a tela.
    pub async fn deletar_conta(&mut self) {
        match self.api.deletar_vendedor(self.id).await {
            Ok(_) => {
                self.mensagem = Some("Conta deletada com sucesso.".to_string());
                self.id = 0;
                self.vendedor = None;
            }
            Err(ErroCliente::Rede(_)) => {
                self.mensagem = Some("Erro ao conectar com o servidor.".to_string())
            }
            Err(erro) => {
                let texto = erro.mensagem_do_servidor().unwrap_or("Erro ao deletar conta.");
                self.mensagem = Some(texto.to_string());
            }
        }
    }
}
