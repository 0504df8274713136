use crate::config::{Config, StoreCapability};
use crate::error::DashboardError;
use crate::team_member::TeamMember;
use async_trait::async_trait;

#[async_trait]
pub trait Roster: Send + Sync {
    async fn list_team_members(&self, config: &Config) -> Result<Vec<TeamMember>, DashboardError>;
}

/// Serves the built-in roster when no MySQL driver is compiled in.
pub struct FallbackRoster;

#[async_trait]
impl Roster for FallbackRoster {
    async fn list_team_members(&self, _: &Config) -> Result<Vec<TeamMember>, DashboardError> {
        Ok(TeamMember::fallback())
    }
}

pub fn roster_for(capability: StoreCapability) -> Box<dyn Roster> {
    match capability {
        #[cfg(feature = "mysql")]
        StoreCapability::Real => Box::new(mysql::MySqlRoster),
        _ => Box::new(FallbackRoster),
    }
}

#[cfg(feature = "mysql")]
mod mysql {
    use crate::config::{Config, MYSQL_DATABASE, MYSQL_PORT, MYSQL_USER, TEAM_MEMBER_QUERY};
    use crate::error::DashboardError;
    use crate::team_member::TeamMember;
    use crate::team_member_client::Roster;
    use async_trait::async_trait;
    use mysql_async::prelude::Queryable;
    use mysql_async::{Conn, OptsBuilder, Row};
    use std::convert::TryFrom;
    use tracing::{info, warn};

    /// Reads `team_member` over a fresh connection per call.
    pub struct MySqlRoster;

    impl MySqlRoster {
        fn opts(config: &Config) -> OptsBuilder {
            OptsBuilder::default()
                .ip_or_hostname(config.mysql_host.clone())
                .tcp_port(MYSQL_PORT)
                .user(Some(MYSQL_USER))
                .pass(Some(config.mysql_password.clone()))
                .db_name(Some(MYSQL_DATABASE))
        }

        /// Combines the query outcome with the disconnect outcome. A query
        /// failure wins over a disconnect failure, which is only logged then.
        fn collect_members(
            rows: Result<Vec<Row>, mysql_async::Error>,
            disconnected: Result<(), mysql_async::Error>,
        ) -> Result<Vec<TeamMember>, DashboardError> {
            let rows = match rows {
                Ok(rows) => {
                    disconnected?;
                    rows
                }
                Err(error) => {
                    if let Err(disconnect_error) = disconnected {
                        warn!("MySQL disconnect failed: {}", disconnect_error);
                    }
                    return Err(error.into());
                }
            };
            rows.into_iter().map(TeamMember::try_from).collect()
        }
    }

    #[async_trait]
    impl Roster for MySqlRoster {
        async fn list_team_members(
            &self,
            config: &Config,
        ) -> Result<Vec<TeamMember>, DashboardError> {
            info!("Connecting to MySQL at {}:{}", config.mysql_host, MYSQL_PORT);
            let mut connection = Conn::new(Self::opts(config)).await?;

            // Released whether or not the query succeeded.
            let rows = connection.query::<Row, _>(TEAM_MEMBER_QUERY).await;
            let disconnected = connection.disconnect().await;

            let members = Self::collect_members(rows, disconnected)?;
            info!("Fetched {} team members", members.len());
            Ok(members)
        }
    }

}
