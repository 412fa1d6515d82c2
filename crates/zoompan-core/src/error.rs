use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZoompanError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid range: value={value} extent={extent} min={min} max={max}")]
    InvalidRange {
        value: i32,
        extent: i32,
        min: i32,
        max: i32,
    },

    #[error("Invalid color code: {0}")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, ZoompanError>;
