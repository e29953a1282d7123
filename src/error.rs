use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML Serialization Error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Keycode Error: {0}")]
    Keycode(String),
}

pub type LayoutResult<T> = Result<T, LayoutError>;
