use std::path::{Path, PathBuf};

use crate::errors::{DemoError, DemoResult};

pub const JSON_FILE_NAME: &str = "openapi_demo.json";
pub const HTML_FILE_NAME: &str = "api_documentation_demo.html";
pub const DEFAULT_PORT: u16 = 8090;

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub output_dir: PathBuf,
    /// Replace existing artifacts. When false, generation fails before writing anything.
    pub overwrite: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            overwrite: true,
        }
    }
}

impl GeneratorConfig {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    pub fn from_env() -> DemoResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads `DEMO_OUTPUT_DIR` and `DEMO_NO_CLOBBER` through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DemoResult<Self> {
        let mut config = Self::default();

        if let Some(dir) = lookup("DEMO_OUTPUT_DIR").filter(|dir| !dir.trim().is_empty()) {
            config.output_dir = PathBuf::from(dir);
        }

        if let Some(raw) = lookup("DEMO_NO_CLOBBER") {
            config.overwrite = !parse_flag("DEMO_NO_CLOBBER", &raw)?;
        }

        Ok(config)
    }

    /// Applies command-line flags on top of the environment. `no_clobber` only
    /// ever turns overwriting off.
    pub fn with_overrides(mut self, out_dir: Option<PathBuf>, no_clobber: bool) -> Self {
        if let Some(dir) = out_dir {
            self.output_dir = dir;
        }
        if no_clobber {
            self.overwrite = false;
        }
        self
    }

    pub fn json_path(&self) -> PathBuf {
        self.output_dir.join(JSON_FILE_NAME)
    }

    pub fn html_path(&self) -> PathBuf {
        self.output_dir.join(HTML_FILE_NAME)
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

impl ServerConfig {
    pub fn from_env() -> DemoResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DemoResult<Self> {
        let port = match lookup("DEMO_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|err| {
                DemoError::configuration(format!("DEMO_PORT must be a valid port: {err}"))
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self { port })
    }

    pub fn with_port(mut self, port: Option<u16>) -> Self {
        if let Some(port) = port {
            self.port = port;
        }
        self
    }
}

/// Loads `.env` from the working directory, falling back to the crate directory.
pub fn load_env() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    let crate_env = Path::new(env!("CARGO_MANIFEST_DIR")).join(".env");
    let _ = dotenvy::from_path(crate_env);
}

fn parse_flag(name: &str, raw: &str) -> DemoResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(DemoError::configuration(format!(
            "{name} must be a boolean flag, got {other:?}"
        ))),
    }
}
