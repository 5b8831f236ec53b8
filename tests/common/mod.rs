use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;

/// A `catalog-api` child process serving the JSON fixture; killed on drop
pub struct TestServer {
    pub base_url: String,
    child: Child,
    client: reqwest::Client,
}

impl TestServer {
    fn spawn() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        // Serve the JSON fixture from memory so the tests need no database
        let fixture = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/catalog.json");
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_catalog-api"));
        cmd.env("CATALOG_API_PORT", port.to_string())
            .env("CATALOG_STORE", "memory")
            .env("CATALOG_FIXTURE", fixture)
            .env("SEARCH_STRATEGY", "binary")
            .env("SEARCH_DEFAULT_PER_PAGE", "20")
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self {
            base_url,
            child,
            client: reqwest::Client::new(),
        })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/health", self.base_url);
            if let Ok(resp) = self.client.get(&url).send().await {
                if resp.status() == StatusCode::OK || resp.status() == StatusCode::SERVICE_UNAVAILABLE {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }

    /// GET a path on this server and decode the JSON body
    pub async fn get_json(&self, path: &str) -> Result<(StatusCode, serde_json::Value)> {
        let res = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        let status = res.status();
        let body = res.json::<serde_json::Value>().await?;
        Ok((status, body))
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

/// Start a server for one test and wait until `/health` answers
pub async fn spawn_server() -> Result<TestServer> {
    let server = TestServer::spawn()?;
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(server)
}
