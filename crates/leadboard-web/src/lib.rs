//! leadboard-web - Web frontend for leadboard using Leptos + Axum

#![recursion_limit = "1024"]

pub mod app;
pub mod components;
pub mod pages;
#[cfg(feature = "ssr")]
pub mod router;

pub use app::App;
#[cfg(feature = "ssr")]
pub use router::create_router;

/// Run the web server
#[cfg(feature = "ssr")]
pub async fn run(port: u16) -> anyhow::Result<()> {
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tracing::info;

    let router = create_router();

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = TcpListener::bind(addr).await?;

    info!("Web server listening on http://{}", addr);
    println!("Web server listening on http://{}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
