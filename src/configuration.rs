//! src/configuration.rs
use config::{Config, ConfigError, File};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub assets: AssetSettings,
    pub email: EmailSettings,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    pub port: u16,
    pub host: String,
    /// Origin allowed by the CORS layer, `*` for any.
    pub allowed_origin: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct AssetSettings {
    pub public_dir: PathBuf,
    pub resume_file: String,
    pub resume_download_name: String,
}

impl AssetSettings {
    pub fn resume_path(&self) -> PathBuf {
        self.public_dir.join(&self.resume_file)
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct EmailSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: Secret<String>,
    pub receiver: String,
    pub sender_name: String,
    pub tls: TlsMode,
    pub timeout_seconds: u64,
}

impl EmailSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TlsMode {
    /// Plain connection, upgraded with STARTTLS when the server offers it.
    Opportunistic,
    /// STARTTLS must succeed.
    Required,
    /// Implicit TLS from the first byte (usually port 465).
    Wrapper,
    /// Never encrypt. Local mail catchers and tests only.
    None,
}

#[derive(Debug, PartialEq)]
pub enum Environment {
    Local,
    Production,
}
impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.as_ref() {
            "local" => Ok(Environment::Local),
            "production" => Ok(Environment::Production),
            _ => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                s
            )),
        }
    }
}

/// Variables the deployment sets directly on the process.
///
/// They keep their conventional names and win over anything in the
/// configuration files.
#[derive(Deserialize, Debug, Default)]
pub struct ProcessEnv {
    pub port: Option<u16>,
    pub frontend_url: Option<String>,
    pub smtp_host: Option<String>,
    pub smtp_port: Option<u16>,
    pub smtp_user: Option<String>,
    pub smtp_pass: Option<Secret<String>>,
    pub receiver_email: Option<String>,
}

impl ProcessEnv {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env::<ProcessEnv>()
    }
}

pub fn get_configuration() -> Result<Settings, ConfigError> {
    let base_path =
        std::env::current_dir().map_err(|e| ConfigError::Foreign(Box::new(e)))?;
    let configuration_directory = base_path.join("configuration");

    // Detect the running environment.
    // Default to `local` if not specified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(ConfigError::Message)?;

    // A missing .env file is fine, the variables may come from the platform.
    dotenvy::dotenv().ok();
    let process_env = ProcessEnv::from_env().map_err(|e| ConfigError::Foreign(Box::new(e)))?;

    build_settings(
        Config::builder()
            .add_source(File::from(configuration_directory.join("base")).required(true))
            .add_source(
                File::from(configuration_directory.join(environment.as_str())).required(true),
            ),
        process_env,
    )
}

fn build_settings(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env: ProcessEnv,
) -> Result<Settings, ConfigError> {
    builder
        .set_override_option("application.port", env.port.map(i64::from))?
        .set_override_option("application.allowed_origin", env.frontend_url)?
        .set_override_option("email.host", env.smtp_host)?
        .set_override_option("email.port", env.smtp_port.map(i64::from))?
        .set_override_option("email.username", env.smtp_user)?
        .set_override_option(
            "email.password",
            env.smtp_pass.map(|p| p.expose_secret().to_owned()),
        )?
        .set_override_option("email.receiver", env.receiver_email)?
        .build()?
        .try_deserialize()
}
