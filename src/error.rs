use std::error::Error;

use rusoto_core::region::ParseRegionError;
use rusoto_core::RusotoError;
use rusoto_ec2::DescribeInstancesError;
use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug, PartialEq)]
pub enum DashboardError {
    ConfigMissing(&'static str),
    InvalidRegion(String),
    StoreUnavailable(String),
    InvalidRow(String),
    NoneValue,
    ProviderUnavailable(RusotoError<DescribeInstancesError>),
    Serialization(String),
}

impl Display for DashboardError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            DashboardError::ConfigMissing(key) => {
                write!(f, "Missing environment variable {}", key)
            }
            DashboardError::InvalidRegion(ref message) => write!(f, "Invalid region: {}", message),
            DashboardError::StoreUnavailable(ref message) => {
                write!(f, "MySQL request failed: {}", message)
            }
            DashboardError::InvalidRow(ref message) => {
                write!(f, "Invalid team_member row: {}", message)
            }
            DashboardError::NoneValue => write!(f, "Value is None"),
            DashboardError::ProviderUnavailable(ref error) => std::fmt::Display::fmt(error, f),
            DashboardError::Serialization(ref message) => {
                write!(f, "Failed to serialize response: {}", message)
            }
        }
    }
}

impl Error for DashboardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            DashboardError::ProviderUnavailable(ref error) => Some(error),
            _ => None,
        }
    }
}

impl From<ParseRegionError> for DashboardError {
    fn from(e: ParseRegionError) -> DashboardError {
        DashboardError::InvalidRegion(e.to_string())
    }
}

impl From<RusotoError<DescribeInstancesError>> for DashboardError {
    fn from(e: RusotoError<DescribeInstancesError>) -> DashboardError {
        DashboardError::ProviderUnavailable(e)
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(e: serde_json::Error) -> DashboardError {
        DashboardError::Serialization(e.to_string())
    }
}

#[cfg(feature = "mysql")]
impl From<mysql_async::Error> for DashboardError {
    fn from(e: mysql_async::Error) -> DashboardError {
        DashboardError::StoreUnavailable(e.to_string())
    }
}
