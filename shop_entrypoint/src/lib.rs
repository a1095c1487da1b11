#![deny(missing_docs)]
//! This crate provides a standardized initialization process that should be used across entrypoint crates.
//! This is used to provide consistent behaviour with e.g. tracing configurations

use std::str::FromStr;

use tracing_subscriber::EnvFilter;

/// The current environment the application is running in
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Production environment
    Production,
    /// Dev and or staging environment
    Develop,
    /// The handler is running on localhost
    Local,
}

impl Environment {
    /// Attempt to construct a new [Environment] from the `ENVIRONMENT` variable
    pub fn new_from_env() -> Option<Self> {
        std::env::var("ENVIRONMENT")
            .ok()
            .and_then(|v| Self::from_str(&v).ok())
    }

    /// Attempt to create a new [Environment] falling back to production
    pub fn new_or_prod() -> Self {
        Self::new_from_env().unwrap_or(Environment::Production)
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(environment: &str) -> Result<Self, ()> {
        match environment {
            "prod" => Ok(Environment::Production),
            "dev" => Ok(Environment::Develop),
            "local" => Ok(Environment::Local),
            _ => Err(()),
        }
    }
}

/// unit struct which defines the behaviour for instantiation
#[derive(Debug)]
pub struct ShopEntrypoint {
    env: Environment,
}

impl Default for ShopEntrypoint {
    fn default() -> Self {
        ShopEntrypoint {
            env: Environment::new_or_prod(),
        }
    }
}

/// sentinel struct which guarantees that we called [ShopEntrypoint::init]
#[derive(Debug)]
pub struct InitializedEntrypoint(());

impl ShopEntrypoint {
    /// create a new instance of [Self] from an input [Environment]
    pub fn new(env: Environment) -> Self {
        Self { env }
    }

    /// consume self, initialize this binary, and return a proof that it was initialized [InitializedEntrypoint]
    pub fn init(self) -> InitializedEntrypoint {
        dotenv::dotenv().ok();
        std::panic::set_hook(Box::new(tracing_panic::panic_hook));

        match self.env {
            Environment::Local => {
                tracing_subscriber::fmt()
                    .with_ansi(true)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .pretty()
                    .init();
            }
            Environment::Production | Environment::Develop => {
                tracing_subscriber::fmt()
                    .with_ansi(false)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .flatten_event(true)
                    .init();
            }
        }

        InitializedEntrypoint(())
    }
}
