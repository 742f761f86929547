// src/main.rs

use actix_web::{web, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

use inventario::{app, armazenamento, AppConfig, AppState};

// Função principal da aplicação Actix Web.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    // RUST_LOG controla o nível; sem ele, "info".
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let config = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(erro = %e, "Falha ao carregar a configuração");
            std::process::exit(1);
        }
    };

    let loja = match armazenamento::criar_loja(&config.banco).await {
        Ok(loja) => loja,
        Err(e) => {
            tracing::error!(erro = %e, "Falha ao preparar o armazenamento");
            std::process::exit(1);
        }
    };

    // web::Data é compartilhado entre os workers; cada um recebe um clone.
    let estado = web::Data::new(AppState::new(loja));
    let cors = config.cors.clone();
    let endereco = config.endereco_servidor();

    tracing::info!("Servidor rodando em: http://{}", endereco);

    HttpServer::new(move || {
        app::criar_app(estado.clone())
            .wrap(app::cors(&cors))
            .wrap(TracingLogger::default())
    })
    .bind(&endereco)?
    .run()
    .await
}
