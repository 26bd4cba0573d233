//! src/startup.rs
use crate::configuration::{AssetSettings, Settings};
use crate::email::SmtpMailer;
use crate::routes::{contact, health_check, resume};
use actix_cors::Cors;
use actix_files::Files;
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run(self) -> std::io::Result<()> {
        self.server.await
    }
}

pub fn build(config: Settings) -> Result<Application, anyhow::Error> {
    let address = format!("{}:{}", config.application.host, config.application.port);
    let tcp_listener =
        TcpListener::bind(&address).with_context(|| format!("Failed to bind {}", address))?;
    let port = tcp_listener.local_addr()?.port();

    let mailer = SmtpMailer::try_from(config.email).context("Invalid email settings")?;

    let server = run(
        tcp_listener,
        mailer,
        config.assets,
        config.application.allowed_origin,
    )?;

    Ok(Application { port, server })
}

pub fn run(
    listener: TcpListener,
    mailer: SmtpMailer,
    assets: AssetSettings,
    allowed_origin: String,
) -> Result<Server, std::io::Error> {
    let mailer = web::Data::new(mailer);
    let public_dir = assets.public_dir.clone();
    let assets = web::Data::new(assets);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(cors(&allowed_origin))
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            .route("/api/resume", web::get().to(resume))
            .route("/api/contact", web::post().to(contact))
            .service(Files::new("/static", public_dir.clone()))
            .app_data(mailer.clone())
            .app_data(assets.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}

fn cors(allowed_origin: &str) -> Cors {
    let cors = Cors::default().allow_any_method().allow_any_header();

    if allowed_origin == "*" {
        cors.allow_any_origin().send_wildcard()
    } else {
        cors.allowed_origin(allowed_origin)
    }
}
