use thiserror::Error;

#[derive(Error, Debug)]
pub enum WsmanError {
    #[error("Payload serialization error: {0}")]
    Serialization(#[from] quick_xml::SeError),

    #[error("XML fragment error: {0}")]
    Fragment(#[from] xmltree::Error),

    #[error("XML fragment is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl WsmanError {
    pub fn invalid_argument(message: &str) -> Self {
        WsmanError::InvalidArgument(message.to_string())
    }
}
