use std::borrow::Cow;

#[derive(Debug)]
pub enum AppError {
    External(u16, Cow<'static, str>),
    Internal(Cow<'static, str>),
}

impl AppError {
    pub fn not_found() -> Self {
        Self::External(404, Cow::from("Not Found"))
    }

    pub fn status_code(&self) -> u16 {
        match self {
            Self::External(code, _) => *code,
            Self::Internal(_) => 500,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::External(_, message) | Self::Internal(message) => &**message,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::External(code, message) => write!(f, "{}: {}", code, message),
            Self::Internal(message) => f.write_str(message),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Internal(err.to_string().into())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("invalid catalog: {}", err).into())
    }
}

impl From<pico_args::Error> for AppError {
    fn from(err: pico_args::Error) -> Self {
        Self::Internal(err.to_string().into())
    }
}
