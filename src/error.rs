#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    Input,
    Http,
    Rate,
    Referential,
    Chart,
    Io,
}

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
}

impl Error {
    pub fn new<T: Into<String>>(kind: ErrorKind, message: T) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn new_input<T: Into<String>>(message: T) -> Self {
        Self::new(ErrorKind::Input, message)
    }

    pub fn new_http<T: Into<String>>(message: T) -> Self {
        Self::new(ErrorKind::Http, message)
    }

    pub fn new_rate<T: Into<String>>(message: T) -> Self {
        Self::new(ErrorKind::Rate, message)
    }

    pub fn new_chart<T: Into<String>>(message: T) -> Self {
        Self::new(ErrorKind::Chart, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.message.fmt(f)
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::new(ErrorKind::Io, format!("io error : {error}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_kind() {
        let error: Error =
            std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed").into();
        assert_eq!(error.kind, ErrorKind::Io);
        assert_eq!(error.message, "io error : stdout closed");
    }

    #[test]
    fn display_is_message() {
        let error = Error::new_rate("Rate not available.");
        assert_eq!(error.to_string(), "Rate not available.");
    }
}
