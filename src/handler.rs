use crate::config::{Config, StoreCapability};
use crate::ec2_instance_client::{ConnectInventory, Describe};
use crate::envelope::{DashboardData, HandlerResponse, ResponseEnvelope};
use crate::error::DashboardError;
use crate::team_member_client::Roster;
use tracing::{error, info};

pub struct DashboardHandler<C> {
    capability: StoreCapability,
    roster: Box<dyn Roster>,
    connector: C,
}

impl<C: ConnectInventory> DashboardHandler<C> {
    pub fn new(capability: StoreCapability, roster: Box<dyn Roster>, connector: C) -> Self {
        DashboardHandler {
            capability,
            roster,
            connector,
        }
    }

    /// Runs one invocation. Every failure ends up in the error envelope, so
    /// this always produces a response.
    pub async fn handle<L>(&self, lookup: L) -> HandlerResponse
    where
        L: Fn(&str) -> Option<String>,
    {
        let config = Config::from_lookup(lookup);
        let body = match config {
            Ok(config) => self.collect(&config).await,
            Err(error) => Err(error),
        }
        .and_then(|data| ResponseEnvelope::success(data).to_body());

        match body {
            Ok(body) => HandlerResponse::new(200, body),
            Err(error) => {
                error!("Dashboard request failed: {}", error);
                let envelope = ResponseEnvelope::failure(&error, self.capability.is_available());
                // Only strings and a bool remain, which always serialize.
                HandlerResponse::new(500, envelope.to_body().unwrap_or_default())
            }
        }
    }

    async fn collect(&self, config: &Config) -> Result<DashboardData, DashboardError> {
        let team_members = self.roster.list_team_members(config).await?;

        let region = config.region()?;
        let aws_instances = self
            .connector
            .connect(region)
            .describe_dashboard_instances()
            .await?;
        info!(
            "Collected {} team members and {} instances in {}",
            team_members.len(),
            aws_instances.len(),
            config.region
        );

        Ok(DashboardData {
            aws_instances,
            region: config.region.clone(),
            team_members,
            mysql_connection: self.capability.connection_label(),
        })
    }
}
