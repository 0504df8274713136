use crate::config::FALLBACK_TEAM_MEMBERS;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamMember {
    pub id: i64,
    pub name: String,
    pub role: String,
}

impl TeamMember {
    pub fn fallback() -> Vec<TeamMember> {
        FALLBACK_TEAM_MEMBERS
            .iter()
            .map(|(id, name, role)| TeamMember {
                id: *id,
                name: name.to_string(),
                role: role.to_string(),
            })
            .collect()
    }
}

#[cfg(feature = "mysql")]
mod row {
    use crate::error::DashboardError;
    use crate::team_member::TeamMember;
    use mysql_async::prelude::FromValue;
    use mysql_async::Row;
    use std::convert::TryFrom;

    fn column<T: FromValue>(row: &Row, name: &str) -> Result<T, DashboardError> {
        row.get_opt::<T, _>(name)
            .ok_or_else(|| DashboardError::InvalidRow(format!("missing column {}", name)))?
            .map_err(|error| DashboardError::InvalidRow(format!("column {}: {}", name, error)))
    }

    impl TryFrom<Row> for TeamMember {
        type Error = DashboardError;

        fn try_from(row: Row) -> Result<Self, Self::Error> {
            Ok(TeamMember {
                id: column(&row, "id")?,
                name: column(&row, "name")?,
                role: column(&row, "role")?,
            })
        }
    }
}
