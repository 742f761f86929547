// src/erros/erro_api.rs

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use super::erro_banco::ErroBanco;
use crate::shared::shared_structs::MensagemResposta;

/// Mensagem genérica para qualquer falha que não esteja na tabela de `ErroBanco`.
pub const MENSAGEM_NAO_IDENTIFICADO: &str = "ERRO: Não identificado";

/// Erros que uma rota pode devolver. Todos viram `{"mensagem": ...}`.
#[derive(Debug, Error)]
pub enum ErroApi {
    #[error("erro do banco de dados: {0}")]
    Banco(#[from] sqlx::Error),

    /// Falha já classificada pela própria loja (ex.: CPF repetido na loja em memória).
    #[error("{}", .0.mensagem())]
    Armazenamento(ErroBanco),

    #[error("{0}")]
    NaoEncontrado(&'static str),

    #[error("{0}")]
    RequisicaoInvalida(String),

    #[error("erro interno: {0}")]
    Interno(String),
}

impl ErroApi {
    fn resolver(&self) -> (StatusCode, &str) {
        match self {
            ErroApi::Banco(e) => match ErroBanco::classificar(e) {
                Some(conhecido) => (conhecido.status(), conhecido.mensagem()),
                None => (StatusCode::INTERNAL_SERVER_ERROR, MENSAGEM_NAO_IDENTIFICADO),
            },
            ErroApi::Armazenamento(conhecido) => (conhecido.status(), conhecido.mensagem()),
            ErroApi::NaoEncontrado(m) => (StatusCode::NOT_FOUND, *m),
            ErroApi::RequisicaoInvalida(m) => (StatusCode::BAD_REQUEST, m.as_str()),
            ErroApi::Interno(_) => (StatusCode::INTERNAL_SERVER_ERROR, MENSAGEM_NAO_IDENTIFICADO),
        }
    }
}

impl ResponseError for ErroApi {
    fn status_code(&self) -> StatusCode {
        self.resolver().0
    }

    fn error_response(&self) -> HttpResponse {
        let (status, mensagem) = self.resolver();
        if status.is_server_error() {
            tracing::error!(erro = ?self, "Falha não identificada ao atender a requisição");
        } else {
            tracing::warn!(status = status.as_u16(), erro = %self, "Requisição terminou em erro");
        }
        HttpResponse::build(status).json(MensagemResposta::new(mensagem))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use std::io;

    async fn responder(erro: ErroApi) -> (StatusCode, MensagemResposta) {
        let resposta = erro.error_response();
        let status = resposta.status();
        let bytes = to_bytes(resposta.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_web::test]
    async fn banco_desligado_vira_400_com_mensagem_fixa() {
        let erro = ErroApi::from(sqlx::Error::Io(io::Error::from(io::ErrorKind::ConnectionRefused)));
        let (status, corpo) = responder(erro).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(corpo.mensagem, "ERRO: LIGUE O SERVIDOR DO BANCO (ex: Laragon ou XAMPP)");
    }

    #[actix_web::test]
    async fn cada_falha_classificada_vira_400_com_sua_mensagem() {
        for conhecido in ErroBanco::TODOS {
            let (status, corpo) = responder(ErroApi::Armazenamento(conhecido)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(corpo.mensagem, conhecido.mensagem());
        }
    }

    #[actix_web::test]
    async fn falha_desconhecida_vira_500_generico() {
        let (status, corpo) = responder(ErroApi::from(sqlx::Error::RowNotFound)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(corpo.mensagem, MENSAGEM_NAO_IDENTIFICADO);

        let (status, corpo) = responder(ErroApi::Interno("id fora do intervalo".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(corpo.mensagem, MENSAGEM_NAO_IDENTIFICADO);
    }

    #[actix_web::test]
    async fn nao_encontrado_vira_404() {
        let (status, corpo) = responder(ErroApi::NaoEncontrado("Vendedor não encontrado")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(corpo.mensagem, "Vendedor não encontrado");
    }
}
