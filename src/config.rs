//! Server configuration.

/// Configuration for the provider's HTTP server.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host to bind (default `"127.0.0.1"`).
    pub host: String,
    /// Port to bind (default `5000`).
    pub port: u16,
    /// Externally visible base URL, e.g. `https://provider.example.org`.
    /// When unset, locators are built from the request's `Host` header.
    pub public_url: Option<String>,
    /// Capacity of the registry actor's request channel.
    pub channel_capacity: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 5000,
            public_url: None,
            channel_capacity: 32,
        }
    }
}

impl ServerConfig {
    /// `host:port` string to bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Base URL used when the request does not say where it was sent.
    pub fn fallback_base_url(&self) -> String {
        match &self.public_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("http://{}", self.bind_addr()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_binds_local_port_5000() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.bind_addr(), "127.0.0.1:5000");
        assert_eq!(cfg.channel_capacity, 32);
        assert!(cfg.public_url.is_none());
    }

    #[test]
    fn fallback_prefers_public_url() {
        let cfg = ServerConfig {
            public_url: Some("https://ap.example.org/".into()),
            ..ServerConfig::default()
        };
        assert_eq!(cfg.fallback_base_url(), "https://ap.example.org");
        assert_eq!(ServerConfig::default().fallback_base_url(), "http://127.0.0.1:5000");
    }
}
