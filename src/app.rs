// src/app.rs

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    get, web, App, Error, HttpResponse,
};

use crate::armazenamento::Loja;
use crate::config::CorsConfig;
use crate::erros::ErroApi;
use crate::{categorias, produtos, vendedores};

// Estado compartilhado entre as rotas: só a loja, nenhum dado entre requisições.
pub struct AppState {
    pub loja: Arc<dyn Loja>,
}

impl AppState {
    pub fn new(loja: Arc<dyn Loja>) -> Self {
        Self { loja }
    }
}

#[get("/")]
pub async fn raiz() -> HttpResponse {
    HttpResponse::Ok().body("Backend unificado de Produtos, Categorias e Vendedores ativo")
}

/// Registra as rotas e os tratadores de corpo/caminho inválidos.
pub fn configurar(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|erro, _req| {
        ErroApi::RequisicaoInvalida(format!("ERRO: Dados inválidos na requisição: {}", erro)).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|erro, _req| {
        ErroApi::RequisicaoInvalida(format!("ERRO: Dados inválidos na rota: {}", erro)).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|erro, _req| {
        ErroApi::RequisicaoInvalida(format!("ERRO: Dados inválidos na consulta: {}", erro)).into()
    }))
    .service(raiz)
    // Módulo de Categorias
    .service(categorias::categoria_router::buscar_categorias)
    // Módulo de Produtos
    .service(produtos::produtos_router::buscar_produtos)
    .service(produtos::produtos_router::cadastrar_produto)
    .service(produtos::produtos_router::atualizar_produto)
    .service(produtos::produtos_router::deletar_produto)
    // Módulo de Vendedores
    .service(vendedores::vendedor_router::buscar_vendedores)
    .service(vendedores::vendedor_router::cadastrar_vendedor)
    .service(vendedores::vendedor_router::buscar_vendedor_por_id)
    .service(vendedores::vendedor_router::deletar_vendedor);
}

/// Monta a aplicação com o estado e todas as rotas. O `main` acrescenta
/// CORS e o log de requisições por cima.
pub fn criar_app(
    estado: web::Data<AppState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new().app_data(estado).configure(configurar)
}

/// CORS do front-end. `*` em `CORS_ORIGENS` libera qualquer origem.
pub fn cors(config: &CorsConfig) -> Cors {
    let base = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600);

    if config.qualquer_origem() {
        base.allow_any_origin()
    } else {
        config
            .origens
            .iter()
            .fold(base, |cors, origem| cors.allowed_origin(origem))
    }
}


#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test};

    use super::testes::{app_com_loja, LojaComFalha};
    use crate::armazenamento::LojaMemoria;
    use crate::config::CorsConfig;

    #[actix_web::test]
    async fn raiz_responde_texto() {
        let app = test::init_service(app_com_loja(LojaMemoria::default())).await;
        let req = test::TestRequest::get().uri("/").to_request();
        let corpo = test::call_and_read_body(&app, req).await;
        assert_eq!(corpo, "Backend unificado de Produtos, Categorias e Vendedores ativo");
    }

    #[actix_web::test]
    async fn toda_rota_converte_falha_do_banco_em_resposta() {
        let app = test::init_service(app_com_loja(LojaComFalha::conexao_recusada())).await;
        let requisicoes = vec![
            test::TestRequest::get().uri("/produtos"),
            test::TestRequest::delete().uri("/produtos/1"),
            test::TestRequest::get().uri("/vendedor"),
            test::TestRequest::get().uri("/vendedor/1"),
            test::TestRequest::delete().uri("/vendedor/1"),
        ];
        for req in requisicoes {
            let resp = test::call_service(&app, req.to_request()).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[actix_web::test]
    async fn cors_libera_a_origem_configurada() {
        let config = CorsConfig { origens: vec!["http://localhost:5173".into()] };
        let app = test::init_service(
            app_com_loja(LojaMemoria::default()).wrap(super::cors(&config)),
        )
        .await;
        let req = test::TestRequest::get()
            .uri("/categorias")
            .insert_header(("Origin", "http://localhost:5173"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(
            resp.headers().get("access-control-allow-origin").unwrap(),
            "http://localhost:5173"
        );
    }
}
