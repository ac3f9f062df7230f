use std::net::TcpListener;

use actix_web::{dev::Server, web::Data, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection, DbErr};

use crate::{
    settings::{DatabaseSettings, Settings},
    web_adapters::{app_routes, json_config, middlewares::RequireApiKey, query_config},
};

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    /// Connects to the database, applies pending migrations and binds the listener.
    pub async fn build(settings: Settings) -> Result<Self, std::io::Error> {
        let db = get_database_connection(&settings.database)
            .await
            .map_err(std::io::Error::other)?;
        Migrator::up(&db, None)
            .await
            .map_err(std::io::Error::other)?;

        let address = format!(
            "{}:{}",
            settings.application.host, settings.application.port
        );
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();
        let server = run(listener, db, settings)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub async fn get_database_connection(
    settings: &DatabaseSettings,
) -> Result<DatabaseConnection, DbErr> {
    Database::connect(&settings.url).await
}

fn run(
    listener: TcpListener,
    db: DatabaseConnection,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let db = Data::new(db);
    let api_key = settings.api_key;

    let server = HttpServer::new(move || {
        App::new()
            .wrap(RequireApiKey::new(api_key.clone()))
            .app_data(db.clone())
            .app_data(json_config())
            .app_data(query_config())
            .configure(app_routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
