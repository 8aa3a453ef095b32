use failure::{Context, Fail};

// crate general Result type
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub struct Error {
    inner: Context<ErrorKind>,
}

impl Fail for Error {
    fn cause(&self) -> Option<&dyn Fail> {
        self.inner.cause()
    }

    fn backtrace(&self) -> Option<&failure::Backtrace> {
        self.inner.backtrace()
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.inner, f)
    }
}

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.inner.get_context()
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error {
            inner: Context::new(kind),
        }
    }
}

impl From<Context<ErrorKind>> for Error {
    fn from(c: Context<ErrorKind>) -> Self {
        Error { inner: c }
    }
}

#[derive(Fail, Debug)]
pub enum ErrorKind {
    // reply error raised by the store, server message kept verbatim
    #[fail(display = "{}", _0)]
    Reply(String),

    // a moved-error resolve was attempted on a non-moved error
    #[fail(display = "Unexpected \"moved\" reply error - {}", _0)]
    UnexpectedMovedError(String),

    // dispatch on a slot with no function
    #[fail(display = "unknown command {}", _0)]
    UnknownCommand(String),

    // error with string message
    #[fail(display = "{}", _0)]
    StringError(String),
}
