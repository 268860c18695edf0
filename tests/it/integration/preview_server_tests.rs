//! Loopback preview server tests

use crate::helpers::{debug_app_config, host, sales_model};
use cyoc_playground::app::App;
use cyoc_playground::preview::PreviewServer;
use cyoc_playground::settings::PlaygroundSettings;
use tempfile::TempDir;

#[tokio::test]
async fn test_document_is_served_sandboxed() {
    let server = PreviewServer::start(None).unwrap();
    server.set_document("<html><body>chart</body></html>");

    let response = reqwest::get(server.url()).await.unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers()["content-security-policy"],
        "sandbox allow-scripts allow-same-origin"
    );
    assert_eq!(response.text().await.unwrap(), "<html><body>chart</body></html>");
}

#[tokio::test]
async fn test_assets_are_served_from_the_asset_dir() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("dyocsdk.mjs"), "export default () => ({});").unwrap();
    let server = PreviewServer::start(Some(dir.path().to_path_buf())).unwrap();

    let response = reqwest::get(format!("{}dyocsdk.mjs", server.assets_url()))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(response.headers()["content-type"], "text/javascript");
    assert_eq!(response.text().await.unwrap(), "export default () => ({});");

    let missing = reqwest::get(format!("{}missing.js", server.assets_url()))
        .await
        .unwrap();
    assert_eq!(missing.status(), 404);

    let escape = reqwest::get(format!("{}..%2Fsecret", server.assets_url()))
        .await
        .unwrap();
    assert_eq!(escape.status(), 403);
}

#[tokio::test]
async fn test_app_publishes_rendered_preview() {
    let ctx = host(sales_model(), debug_app_config());
    let server = PreviewServer::start(None).unwrap();
    let url = server.url();
    let mut app = App::new(ctx, PlaygroundSettings::default()).with_preview_server(server);

    app.init().await.unwrap();

    let served = reqwest::get(url).await.unwrap().text().await.unwrap();
    assert_eq!(served, app.preview().unwrap().document().unwrap());
}
