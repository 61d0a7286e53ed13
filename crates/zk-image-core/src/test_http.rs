// crates/zk-image-core/src/test_http.rs - Mock image host for URL tests

use tokio::runtime::Runtime;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Serves one image at `/cat.jpg`, expecting exactly one GET
///
/// The server lives on its own runtime so the blocking reqwest client can be
/// driven from a plain `#[test]`.
pub struct ImageServer {
    // Dropped before the runtime so its request check can still run
    server: MockServer,
    _runtime: Runtime,
}

impl ImageServer {
    pub fn start(status: u16, body: &[u8]) -> Self {
        let runtime = Runtime::new().unwrap();
        let body = body.to_vec();
        let server = runtime.block_on(async {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .and(path("/cat.jpg"))
                .respond_with(
                    ResponseTemplate::new(status)
                        .insert_header("Content-Type", "image/jpeg")
                        .set_body_bytes(body),
                )
                .expect(1)
                .mount(&server)
                .await;
            server
        });

        Self {
            server,
            _runtime: runtime,
        }
    }

    pub fn url(&self) -> String {
        format!("{}/cat.jpg", self.server.uri())
    }
}
