use crate::ec2_instance_client::ComputeInstance;
use crate::error::DashboardError;
use crate::team_member::TeamMember;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, PartialEq, Serialize)]
pub struct DashboardData {
    pub aws_instances: Vec<ComputeInstance>,
    pub region: String,
    pub team_members: Vec<TeamMember>,
    pub mysql_connection: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct FailureData {
    pub error: String,
    pub mysql_available: bool,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EnvelopeData {
    Success(DashboardData),
    Failure(FailureData),
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ResponseEnvelope {
    pub data: EnvelopeData,
    pub status: &'static str,
}

impl ResponseEnvelope {
    pub fn success(data: DashboardData) -> Self {
        ResponseEnvelope {
            data: EnvelopeData::Success(data),
            status: "success",
        }
    }

    pub fn failure(error: &DashboardError, mysql_available: bool) -> Self {
        ResponseEnvelope {
            data: EnvelopeData::Failure(FailureData {
                error: error.to_string(),
                mysql_available,
            }),
            status: "error",
        }
    }

    pub fn to_body(&self) -> Result<String, DashboardError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// The proxy-style result object returned to the Lambda runtime.
#[derive(Debug, PartialEq, Serialize)]
pub struct HandlerResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: BTreeMap<&'static str, &'static str>,
    pub body: String,
}

impl HandlerResponse {
    pub fn new(status_code: u16, body: String) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type", "application/json");
        headers.insert("Access-Control-Allow-Origin", "*");
        HandlerResponse {
            status_code,
            headers,
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::envelope::{DashboardData, HandlerResponse, ResponseEnvelope};
    use crate::error::DashboardError;
    use crate::team_member::TeamMember;
    use serde_json::{json, Value};

    #[test]
    fn test_success_body_shape() {
        let body = ResponseEnvelope::success(DashboardData {
            aws_instances: vec![],
            region: "us-east-1".to_string(),
            team_members: TeamMember::fallback()[..1].to_vec(),
            mysql_connection: "mock",
        })
        .to_body()
        .unwrap();

        assert_eq!(
            serde_json::from_str::<Value>(&body).unwrap(),
            json!({
                "data": {
                    "aws_instances": [],
                    "region": "us-east-1",
                    "team_members": [
                        {"id": 1, "name": "Jaehong Yang", "role": "Service Platform Lead"}
                    ],
                    "mysql_connection": "mock"
                },
                "status": "success"
            })
        );
        assert!(body.starts_with("{\n  \"data\": {\n    \"aws_instances\": []"));
    }

    #[test]
    fn test_failure_body_shape() {
        let body = ResponseEnvelope::failure(&DashboardError::ConfigMissing("MYSQL_HOST"), true)
            .to_body()
            .unwrap();

        assert_eq!(
            serde_json::from_str::<Value>(&body).unwrap(),
            json!({
                "data": {
                    "error": "Missing environment variable MYSQL_HOST",
                    "mysql_available": true
                },
                "status": "error"
            })
        );
    }

    #[test]
    fn test_handler_response_headers() {
        let value = serde_json::to_value(HandlerResponse::new(500, "{}".to_string())).unwrap();
        assert_eq!(
            value,
            json!({
                "statusCode": 500,
                "headers": {
                    "Access-Control-Allow-Origin": "*",
                    "Content-Type": "application/json"
                },
                "body": "{}"
            })
        );
    }
}
