use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use golf_pool::args::{self, DataLocation};
use golf_pool::controller::http_handlers::routes;
use golf_pool::startup::{build_app_state, build_http_client};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = args::args_checks()?;
    let client = build_http_client()?;
    let state = build_app_state(&settings, &client);

    let static_dir = settings.static_dir.clone();
    let data_dir = match &settings.data {
        DataLocation::Directory(dir) => Some(dir.clone()),
        DataLocation::Remote(_) => None,
    };

    info!(bind = %settings.bind, port = settings.port, "starting server");
    HttpServer::new(move || {
        let mut app = App::new()
            .app_data(Data::new(state.clone()))
            .configure(routes)
            .service(Files::new("/static", static_dir.clone()));
        if let Some(dir) = &data_dir {
            // the raw documents stay public, as on the static site
            app = app.service(Files::new("/data", dir.clone()));
        }
        app
    })
    .bind((settings.bind.as_str(), settings.port))?
    .run()
    .await?;
    Ok(())
}
