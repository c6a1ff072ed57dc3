use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    #[error("Scraping error: {0}")]
    Scraper(#[from] ScraperError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Config(_) => "config",
            AppError::Client(_) => "client",
            AppError::Scraper(_) => "scraper",
            AppError::Store(_) => "store",
            AppError::Io(_) => "io",
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Missing required configuration: {0}")]
    MissingField(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Failed to build client: {0}")]
    BuildError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Response error {status_code} for {url}")]
    ResponseError { status_code: u16, url: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

#[derive(Error, Debug)]
pub enum ScraperError {
    #[error("Table '{table}' not found")]
    MissingTable { table: &'static str },

    #[error("Row {row} of table '{table}' has {cells} cells, expected at most {columns}")]
    MalformedRow {
        table: &'static str,
        row: usize,
        cells: usize,
        columns: usize,
    },

    #[error("Selector error: {0}")]
    SelectorError(String),
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to connect to database: {0}")]
    Connect(String),

    #[error("Failed to write {collection} document for '{portfolio}': {message}")]
    Write {
        collection: &'static str,
        portfolio: String,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert_and_are_tagged() {
        let err: AppError = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "logs").into();
        assert_eq!(err.kind(), "io");
        assert_eq!(err.to_string(), "IO error: logs");
    }

    #[test]
    fn kinds_follow_the_variant() {
        let err: AppError = ScraperError::MissingTable { table: "portfolioAllocation" }.into();
        assert_eq!(err.kind(), "scraper");
        let err: AppError = ConfigError::MissingField("HOST".to_string()).into();
        assert_eq!(err.kind(), "config");
    }
}
