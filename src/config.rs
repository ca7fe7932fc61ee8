use std::path::PathBuf;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub uploads_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Config {
        dotenv::dotenv().ok();

        Config {
            database_url: env_or("DATABASE_URL", "sqlite:wanderlust.db?mode=rwc"),
            bind_addr: env_or("BIND_ADDR", "0.0.0.0:8080"),
            uploads_dir: PathBuf::from(env_or("UPLOADS_DIR", "uploads")),
        }
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}
