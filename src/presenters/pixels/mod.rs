pub mod presenter;

pub use presenter::{PixelsPresenter, PresenterError};
