use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "editnova-mock")]
#[command(about = "Mock API server for the EditNova mobile app")]
pub struct Config {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 5001)]
    pub port: u16,

    /// Seed the simulated timings and picks for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// HMAC key for signing session tokens
    #[arg(long, default_value = "editnova-mock-secret")]
    pub token_secret: String,

    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

impl Config {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_listen_on_5001() {
        let config = Config::parse_from(["editnova-mock"]);
        assert_eq!(config.bind_addr(), "0.0.0.0:5001");
        assert_eq!(config.seed, None);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = Config::parse_from([
            "editnova-mock",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--seed",
            "7",
            "--log-format",
            "json",
        ]);
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.log_format, LogFormat::Json);
    }
}
