use async_trait::async_trait;
use rusoto_core::Region;
use rusoto_ec2::{Ec2, Ec2Client, Filter};
use serde::Serialize;

use crate::config::{INSTANCE_STATES, INSTANCE_TYPE, PRIVATE_IP_FALLBACK};
use crate::error::DashboardError;
use rusoto_ec2::DescribeInstancesRequest;

pub struct Ec2InstanceClient {
    client: Ec2Client,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComputeInstance {
    pub instance_id: String,
    pub instance_type: String,
    pub state: String,
    pub private_ip: String,
}

#[async_trait]
pub trait Describe: Send + Sync {
    async fn describe_dashboard_instances(&self) -> Result<Vec<ComputeInstance>, DashboardError>;
}

/// Builds a region-scoped inventory client for one invocation.
pub trait ConnectInventory: Send + Sync {
    type Client: Describe;

    fn connect(&self, region: Region) -> Self::Client;
}

pub struct Ec2Connector;

impl ConnectInventory for Ec2Connector {
    type Client = Ec2InstanceClient;

    fn connect(&self, region: Region) -> Ec2InstanceClient {
        Ec2InstanceClient::new_with_client(Ec2Client::new(region))
    }
}

#[async_trait]
impl Describe for Ec2InstanceClient {
    async fn describe_dashboard_instances(&self) -> Result<Vec<ComputeInstance>, DashboardError> {
        let result = self
            .client
            .describe_instances(Self::dashboard_request())
            .await?;

        let mut compute_instances = Vec::<ComputeInstance>::new();
        for reservation in result.reservations.unwrap_or_default() {
            for instance in reservation.instances.unwrap_or_default() {
                compute_instances.push(ComputeInstance {
                    instance_id: instance.instance_id.ok_or(DashboardError::NoneValue)?,
                    instance_type: instance.instance_type.ok_or(DashboardError::NoneValue)?,
                    state: instance
                        .state
                        .and_then(|state| state.name)
                        .ok_or(DashboardError::NoneValue)?,
                    private_ip: instance
                        .private_ip_address
                        .unwrap_or_else(|| PRIVATE_IP_FALLBACK.to_string()),
                })
            }
        }
        Ok(compute_instances)
    }
}

impl Ec2InstanceClient {
    pub fn new_with_client(client: Ec2Client) -> Self {
        Ec2InstanceClient { client }
    }

    fn dashboard_request() -> DescribeInstancesRequest {
        DescribeInstancesRequest {
            filters: Some(vec![
                Filter {
                    name: Some("instance-type".to_string()),
                    values: Some(vec![INSTANCE_TYPE.to_string()]),
                },
                Filter {
                    name: Some("instance-state-name".to_string()),
                    values: Some(
                        INSTANCE_STATES
                            .iter()
                            .map(|state| state.to_string())
                            .collect(),
                    ),
                },
            ]),
            ..DescribeInstancesRequest::default()
        }
    }
}
