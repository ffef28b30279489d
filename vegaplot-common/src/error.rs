use std::num::ParseFloatError;
use std::result;
use thiserror::Error;

pub type Result<T> = result::Result<T, VegaPlotError>;

#[derive(Clone, Debug, Default)]
pub struct ErrorContext {
    pub contexts: Vec<String>,
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, context) in self.contexts.iter().enumerate() {
            writeln!(f, "    Context[{i}]: {context}")?;
        }
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum VegaPlotError {
    #[error("Invalid argument: {0}\n{1}")]
    InvalidArgument(String, ErrorContext),

    #[error("Unsupported operation: {0}\n{1}")]
    UnsupportedOperation(String, ErrorContext),

    #[error("Vega Specification error: {0}\n{1}")]
    SpecificationError(String, ErrorContext),

    #[error("Internal error: {0}\n{1}")]
    InternalError(String, ErrorContext),

    #[error("Serde JSON Error: {0}\n{1}")]
    SerdeJsonError(serde_json::Error, ErrorContext),
}

impl VegaPlotError {
    /// Append a new context level to the error
    pub fn with_context<S, F>(self, context_fn: F) -> Self
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        use VegaPlotError::*;
        match self {
            InvalidArgument(msg, mut context) => {
                context.contexts.push(context_fn().into());
                VegaPlotError::InvalidArgument(msg, context)
            }
            UnsupportedOperation(msg, mut context) => {
                context.contexts.push(context_fn().into());
                VegaPlotError::UnsupportedOperation(msg, context)
            }
            SpecificationError(msg, mut context) => {
                context.contexts.push(context_fn().into());
                VegaPlotError::SpecificationError(msg, context)
            }
            InternalError(msg, mut context) => {
                context.contexts.push(context_fn().into());
                VegaPlotError::InternalError(msg, context)
            }
            SerdeJsonError(err, mut context) => {
                context.contexts.push(context_fn().into());
                VegaPlotError::SerdeJsonError(err, context)
            }
        }
    }

    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument(message.into(), Default::default())
    }

    pub fn unsupported<S: Into<String>>(message: S) -> Self {
        Self::UnsupportedOperation(message.into(), Default::default())
    }

    pub fn specification<S: Into<String>>(message: S) -> Self {
        Self::SpecificationError(message.into(), Default::default())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::InternalError(message.into(), Default::default())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, VegaPlotError::InvalidArgument(..))
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, VegaPlotError::UnsupportedOperation(..))
    }

    pub fn is_specification(&self) -> bool {
        matches!(self, VegaPlotError::SpecificationError(..))
    }
}

pub trait ResultWithContext<R> {
    fn with_context<S, F>(self, context_fn: F) -> Result<R>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<R, E> ResultWithContext<R> for result::Result<R, E>
where
    E: Into<VegaPlotError>,
{
    fn with_context<S, F>(self, context_fn: F) -> Result<R>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        match self {
            Ok(val) => Ok(val),
            Err(err) => {
                let vega_plot_error: VegaPlotError = err.into();
                Err(vega_plot_error.with_context(context_fn))
            }
        }
    }
}

impl<R> ResultWithContext<R> for Option<R> {
    fn with_context<S, F>(self, context_fn: F) -> Result<R>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        match self {
            Some(val) => Ok(val),
            None => Err(VegaPlotError::internal(context_fn().into())),
        }
    }
}

impl From<ParseFloatError> for VegaPlotError {
    fn from(err: ParseFloatError) -> Self {
        Self::invalid_argument(err.to_string())
    }
}

impl From<url::ParseError> for VegaPlotError {
    fn from(err: url::ParseError) -> Self {
        Self::invalid_argument(format!("Invalid URL: {err}"))
    }
}

impl From<serde_json::Error> for VegaPlotError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerdeJsonError(err, Default::default())
    }
}
