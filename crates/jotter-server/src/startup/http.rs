//! HTTP server startup
//!
//! Creates and binds the REST API server.

use std::sync::Arc;

use actix_web::{App, HttpServer, dev::Server, middleware::Logger, web};

use crate::{api, model::AppState};

/// Creates and binds the REST API server.
///
/// All routes live under the configured context path: the member directory,
/// the note ledger, and the health probes.
pub fn api_server(
    app_state: Arc<AppState>,
    context_path: String,
    address: String,
    port: u16,
) -> Result<Server, std::io::Error> {
    Ok(HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::from(app_state.clone()))
            .service(
                web::scope(&context_path)
                    .service(api::member::routes())
                    .service(api::note::routes())
                    .service(api::health::routes()),
            )
    })
    .bind((address, port))?
    .run())
}
