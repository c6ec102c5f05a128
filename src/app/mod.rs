use std::{
    io,
    net::{IpAddr, SocketAddr},
    sync::Arc,
};

use axum::{http::Request, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::{config::Settings, domain::validation::RequestValidator};

mod error;
mod extractor;
mod form;
mod health;
mod login;

#[derive(Clone)]
pub struct AppState {
    validator: Arc<RequestValidator>,
}

fn app_router() -> Router<AppState> {
    health::router()
        .merge(form::router())
        .merge(login::router())
}

pub struct App {
    listener: TcpListener,
    addr: SocketAddr,
}

impl App {
    pub async fn with(config: &Settings) -> Result<Self, io::Error> {
        let listener = TcpListener::bind(format!(
            "{}:{}",
            config.application.host, config.application.port
        ))
        .await?;
        let addr = listener.local_addr()?;

        Ok(Self { listener, addr })
    }

    pub fn host(&self) -> IpAddr {
        self.addr.ip()
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    pub async fn serve(self) -> Result<(), io::Error> {
        let app = app_router()
            .with_state(AppState {
                validator: Arc::new(RequestValidator::login()),
            })
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                    let id = uuid::Uuid::new_v4();
                    tracing::info_span!(
                        "request",
                        method = ?request.method(),
                        uri = ?request.uri(),
                        %id,
                    )
                }),
            );

        axum::serve(self.listener, app.into_make_service()).await
    }
}
