use crate::error::DashboardError;
use rusoto_core::Region;
use std::fmt;
use std::str::FromStr;
use tracing::{info, warn};

pub const MYSQL_HOST_KEY: &str = "MYSQL_HOST";
pub const MYSQL_PASSWORD_KEY: &str = "MYSQL_PASSWORD";
pub const REGION_KEY: &str = "REGION";
pub const DEFAULT_REGION: &str = "us-east-1";

pub const MYSQL_PORT: u16 = 3306;
pub const MYSQL_USER: &str = "root";
pub const MYSQL_DATABASE: &str = "team_practice_db";
pub const TEAM_MEMBER_QUERY: &str = "SELECT * FROM team_member ORDER BY id";

pub const INSTANCE_TYPE: &str = "t4g.nano";
pub const INSTANCE_STATES: [&str; 4] = ["running", "stopped", "pending", "stopping"];
pub const PRIVATE_IP_FALLBACK: &str = "N/A";

pub const FALLBACK_TEAM_MEMBERS: [(i64, &str, &str); 8] = [
    (1, "Jaehong Yang", "Service Platform Lead"),
    (2, "Dongbeom Kim", "Backend"),
    (3, "Hyeyoung Lee", "QA / Infra"),
    (4, "Seunggil Yang", "Infra / DevOps"),
    (5, "Yoonki Cho", "Frontend"),
    (6, "Gookseong Kim", "Frontend / Backend"),
    (7, "Jerry", "Data Engineering"),
    (8, "Aiden", "Backend"),
];

/// Whether the MySQL driver was compiled into this build.
///
/// Probed once at cold start and handed to the handler; it never changes for
/// the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StoreCapability {
    Real,
    Mock,
}

impl StoreCapability {
    pub fn probe() -> Self {
        let capability = if cfg!(feature = "mysql") {
            StoreCapability::Real
        } else {
            StoreCapability::Mock
        };
        match capability {
            StoreCapability::Real => info!("MySQL driver available"),
            StoreCapability::Mock => warn!("MySQL driver not available, using mock data"),
        }
        capability
    }

    pub fn is_available(self) -> bool {
        self == StoreCapability::Real
    }

    pub fn connection_label(self) -> &'static str {
        match self {
            StoreCapability::Real => "real",
            StoreCapability::Mock => "mock",
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Config {
    pub mysql_host: String,
    pub mysql_password: String,
    pub region: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Config")
            .field("mysql_host", &self.mysql_host)
            .field("mysql_password", &"<redacted>")
            .field("region", &self.region)
            .finish()
    }
}

impl Config {
    pub fn from_lookup<L>(lookup: L) -> Result<Self, DashboardError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let mysql_host =
            lookup(MYSQL_HOST_KEY).ok_or(DashboardError::ConfigMissing(MYSQL_HOST_KEY))?;
        let mysql_password =
            lookup(MYSQL_PASSWORD_KEY).ok_or(DashboardError::ConfigMissing(MYSQL_PASSWORD_KEY))?;
        let region = lookup(REGION_KEY).unwrap_or_else(|| DEFAULT_REGION.to_string());

        Ok(Config {
            mysql_host,
            mysql_password,
            region,
        })
    }

    /// Regions newer than the SDK's built-in table get an explicit EC2
    /// endpoint instead of being rejected.
    pub fn region(&self) -> Result<Region, DashboardError> {
        match Region::from_str(&self.region) {
            Ok(region) => Ok(region),
            Err(_) if looks_like_region(&self.region) => Ok(Region::Custom {
                name: self.region.clone(),
                endpoint: format!("https://ec2.{}.amazonaws.com", self.region),
            }),
            Err(error) => Err(error.into()),
        }
    }
}

// `<partition>[-gov]-<area>-<number>`, e.g. `il-central-1`, `us-gov-west-1`.
fn looks_like_region(name: &str) -> bool {
    let parts: Vec<&str> = name.split('-').collect();
    let (prefix, area, number) = match parts.as_slice() {
        [prefix, area, number] => (*prefix, *area, *number),
        [prefix, "gov", area, number] => (*prefix, *area, *number),
        _ => return false,
    };
    prefix.len() == 2
        && prefix.chars().all(|c| c.is_ascii_lowercase())
        && !area.is_empty()
        && area.chars().all(|c| c.is_ascii_lowercase())
        && !number.is_empty()
        && number.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
pub(crate) fn lookup_from<'a>(
    pairs: &'a [(&'a str, &'a str)],
) -> impl Fn(&str) -> Option<String> + 'a {
    move |key: &str| {
        pairs
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value.to_string())
    }
}
