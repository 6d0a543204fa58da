use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn no_more_elements() -> Error {
        Error(ErrorKind::NoMoreElements.into())
    }

    pub fn unsupported_operation(name: impl Into<String>) -> Error {
        Error(ErrorKind::UnsupportedOperation { name: name.into() }.into())
    }

    pub fn illegal_state(message: impl Into<String>) -> Error {
        Error(
            ErrorKind::IllegalState {
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn is_invalid_arg(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidArgument { .. })
    }

    pub fn is_no_more_elements(&self) -> bool {
        matches!(self.kind(), ErrorKind::NoMoreElements)
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("no more elements in the sequence")]
    NoMoreElements,

    #[error("unsupported operation {name}")]
    UnsupportedOperation { name: String },

    #[error("illegal state: {message}")]
    IllegalState { message: String },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
