pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 6379;

// Options a client is constructed with; absent fields fall back to the
// defaults above when the host and port are resolved
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClientOptions {
    pub host: Option<String>,
    pub port: Option<u16>,
}

impl ClientOptions {
    pub fn new() -> Self {
        ClientOptions::default()
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }
}
