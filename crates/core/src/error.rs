//! Mapping of module errors onto the application error type.

use trendline_shared::AppError;

use crate::addressing::AddressError;
use crate::dataset::DatasetError;
use crate::forecast::ForecastError;
use crate::range::RangeError;
use crate::report::RenderError;

impl From<AddressError> for AppError {
    fn from(err: AddressError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<RangeError> for AppError {
    fn from(err: RangeError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<ForecastError> for AppError {
    fn from(err: ForecastError) -> Self {
        match &err {
            ForecastError::InvalidGrowthBounds(_) => Self::Configuration(err.to_string()),
            _ => Self::Validation(err.to_string()),
        }
    }
}

impl From<DatasetError> for AppError {
    fn from(err: DatasetError) -> Self {
        Self::Input(err.to_string())
    }
}

impl From<RenderError> for AppError {
    fn from(err: RenderError) -> Self {
        Self::Render(err.to_string())
    }
}
