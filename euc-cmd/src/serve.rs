//! Static server for the pre-built globe bundle.
//!
//! Every request is answered from the dist directory; paths that are not a
//! file get `index.html` so the client-side router can take over.

use axum::Router;
use log::info;
use std::net::SocketAddr;
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

/// Router with a single catch-all fallback service.
pub fn router(dist: &Path) -> Router {
    let index = ServeFile::new(dist.join("index.html"));
    Router::new().fallback_service(ServeDir::new(dist).fallback(index))
}

pub async fn run_serve(port: u16, dist: &Path) -> anyhow::Result<()> {
    if !dist.join("index.html").is_file() {
        log::warn!("{} has no index.html; unknown paths will 404", dist.display());
    }
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Serving {} on http://{}", dist.display(), listener.local_addr()?);
    axum::serve(listener, router(dist)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    async fn spawn(dist: &Path) -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = router(dist);
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    #[tokio::test]
    async fn serves_assets_and_falls_back_to_index() {
        let dist = tempfile::tempdir().unwrap();
        fs::write(dist.path().join("index.html"), "<html>globe</html>").unwrap();
        fs::create_dir(dist.path().join("assets")).unwrap();
        fs::write(dist.path().join("assets/app.js"), "console.log(1)").unwrap();
        let addr = spawn(dist.path()).await;

        let asset = reqwest::get(format!("http://{}/assets/app.js", addr))
            .await
            .unwrap();
        assert_eq!(asset.status(), 200);
        assert_eq!(asset.text().await.unwrap(), "console.log(1)");

        let page = reqwest::get(format!("http://{}/scenario/suez", addr))
            .await
            .unwrap();
        assert_eq!(page.status(), 200);
        assert_eq!(page.text().await.unwrap(), "<html>globe</html>");
    }

    #[tokio::test]
    async fn root_serves_index() {
        let dist = tempfile::tempdir().unwrap();
        fs::write(dist.path().join("index.html"), "root").unwrap();
        let addr = spawn(dist.path()).await;
        let body = reqwest::get(format!("http://{}/", addr))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert_eq!(body, "root");
    }
}
