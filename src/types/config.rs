use serde::Deserialize;

pub const DEFAULT_MIN_LENGTH: usize = 20;
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScamlensConfig {
    pub input: Option<InputConfig>,
    pub server: Option<ServerConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InputConfig {
    pub min_length: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerConfig {
    pub bind: Option<String>,
}

impl ScamlensConfig {
    /// Boundary minimum: postings shorter than this draw a warning on the
    /// CLI and a 400 from the HTTP layer. The engine itself never checks it.
    pub fn min_length(&self) -> usize {
        self.input
            .as_ref()
            .and_then(|input| input.min_length)
            .unwrap_or(DEFAULT_MIN_LENGTH)
    }

    pub fn bind(&self) -> String {
        self.server
            .as_ref()
            .and_then(|server| server.bind.clone())
            .unwrap_or_else(|| DEFAULT_BIND.to_string())
    }
}
