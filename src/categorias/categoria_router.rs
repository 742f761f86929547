// src/categorias/categoria_router.rs

use actix_web::{get, web, HttpResponse};
use tracing::instrument;

use crate::erros::Result;
use crate::AppState;

/// Rota para buscar todas as categorias, sem filtro e sem paginação.
#[get("/categorias")]
#[instrument(name = "rota::listar_categorias", skip(data))]
pub async fn buscar_categorias(data: web::Data<AppState>) -> Result<HttpResponse> {
    // Busca todas as categorias; qualquer falha do banco vira a resposta de erro via `?`
    let categorias = data.loja.listar_categorias().await?;
    tracing::info!(quantidade = categorias.len(), "Categorias listadas");
    // Retorna a lista como JSON com status OK
    Ok(HttpResponse::Ok().json(categorias))
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test};

    use crate::app::testes::{app_com_loja, LojaComFalha};
    use crate::armazenamento::LojaMemoria;
    use crate::categorias::categoria_structs::Categoria;
    use crate::shared::shared_structs::MensagemResposta;

    #[actix_web::test]
    async fn lista_todas_as_categorias() {
        let app = test::init_service(app_com_loja(LojaMemoria::com_categorias(["Bebidas", "Limpeza"]))).await;
        let req = test::TestRequest::get().uri("/categorias").to_request();
        let categorias: Vec<Categoria> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            categorias,
            vec![
                Categoria { id: 1, nome: "Bebidas".into() },
                Categoria { id: 2, nome: "Limpeza".into() },
            ]
        );
    }

    #[actix_web::test]
    async fn banco_desligado_responde_400() {
        let app = test::init_service(app_com_loja(LojaComFalha::conexao_recusada())).await;
        let req = test::TestRequest::get().uri("/categorias").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let corpo: MensagemResposta = test::read_body_json(resp).await;
        assert_eq!(corpo.mensagem, "ERRO: LIGUE O SERVIDOR DO BANCO (ex: Laragon ou XAMPP)");
    }

    #[actix_web::test]
    async fn tabela_ausente_responde_400_com_a_mensagem_da_tabela() {
        let app = test::init_service(app_com_loja(LojaComFalha::tabela_nao_encontrada())).await;
        let req = test::TestRequest::get().uri("/categorias").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let corpo: MensagemResposta = test::read_body_json(resp).await;
        assert_eq!(corpo.mensagem, "ERRO: Tabela não encontrada");
    }
}
