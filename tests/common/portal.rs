//! wiremock-backed stand-in for the gazette portal

use gazette_dl::Config;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Config whose endpoints all point at `server`
pub fn config_for(server: &MockServer) -> Config {
    let mut config = Config::default();
    config.endpoints.editions_url = format!("{}/edicoes/{{date}}", server.uri());
    config.endpoints.summary_url = format!("{}/sumario/{{id}}", server.uri());
    config.endpoints.publication_url = format!("{}/publicacao/{{identificador}}", server.uri());
    config.http.timeout = Duration::from_secs(5);
    config
}

/// Serve `body` with status 200 at `route`
pub async fn serve(server: &MockServer, route: &str, body: impl Into<String>) {
    Mock::given(method("GET"))
        .and(path(route.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_string(body.into()))
        .mount(server)
        .await;
}

/// Serve `body` at `route` after `delay`
pub async fn serve_delayed(server: &MockServer, route: &str, body: impl Into<String>, delay: Duration) {
    Mock::given(method("GET"))
        .and(path(route.to_string()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body.into())
                .set_delay(delay),
        )
        .mount(server)
        .await;
}

/// Respond with `status` and no body at `route`
pub async fn serve_status(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(route.to_string()))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}
