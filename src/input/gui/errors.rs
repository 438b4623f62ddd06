use crate::presenters::pixels::PresenterError;
use std::error::Error;
use std::fmt;
use winit::error::{EventLoopError, OsError};

#[derive(Debug)]
pub enum GuiError {
    EventLoop(EventLoopError),
    Window(OsError),
    Presenter(PresenterError),
}

impl fmt::Display for GuiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EventLoop(err) => write!(f, "event loop error: {}", err),
            Self::Window(err) => write!(f, "failed to create window: {}", err),
            Self::Presenter(err) => write!(f, "{}", err),
        }
    }
}

impl Error for GuiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EventLoop(err) => Some(err),
            Self::Window(err) => Some(err),
            Self::Presenter(err) => Some(err),
        }
    }
}

impl From<EventLoopError> for GuiError {
    fn from(err: EventLoopError) -> Self {
        Self::EventLoop(err)
    }
}

impl From<OsError> for GuiError {
    fn from(err: OsError) -> Self {
        Self::Window(err)
    }
}

impl From<PresenterError> for GuiError {
    fn from(err: PresenterError) -> Self {
        Self::Presenter(err)
    }
}
