use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiagramError {
    #[error("diagram file is not valid JSON: {0}")]
    Parse(String),
    #[error("missing required field: {0}")]
    MissingField(String),
    #[error("invalid node at index {0}")]
    InvalidNode(usize),
    #[error("invalid edge at index {0}")]
    InvalidEdge(usize),
    #[error("failed to encode diagram: {0}")]
    Encode(String),
    #[error("failed to read file: {0}")]
    FileRead(String),
    #[error("failed to write file: {0}")]
    FileWrite(String),
}

impl DiagramError {
    pub fn parse<T: Into<String>>(msg: T) -> Self {
        DiagramError::Parse(msg.into())
    }

    pub fn missing_field<T: Into<String>>(field: T) -> Self {
        DiagramError::MissingField(field.into())
    }

    pub fn encode<T: Into<String>>(msg: T) -> Self {
        DiagramError::Encode(msg.into())
    }

    pub fn file_read<T: Into<String>>(msg: T) -> Self {
        DiagramError::FileRead(msg.into())
    }

    pub fn file_write<T: Into<String>>(msg: T) -> Self {
        DiagramError::FileWrite(msg.into())
    }
}
