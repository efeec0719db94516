pub mod api;
pub mod logging;
pub mod matching;

use serde::{Deserialize, Serialize};

/// Accept explicit JSON `null` for text fields the mobile clients
/// sometimes send as null instead of omitting.
fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let value = Option::<T>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// Worker profile as synced from the mobile backend.
///
/// Plays both sides of the marketplace: it is the seeker profile when
/// ranking job posts for an employee, and the listing record when an
/// employer is ranking workers. Absent or null text fields deserialize
/// to empty strings and simply score zero instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    #[serde(default)]
    pub id: Option<String>,
    /// Comma separated skill list, e.g. "Java, SQL, Firebase".
    #[serde(default, deserialize_with = "null_to_default")]
    pub skills: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub location: String,
    /// Occupational field tag, e.g. "IT" or "Construction".
    #[serde(default, deserialize_with = "null_to_default")]
    pub work_field: String,
    /// Monthly asking salary. Carried for display, never scored.
    #[serde(default)]
    pub expected_salary: Option<f64>,
}

/// Employer profile used as the seeker side when ranking workers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployerProfile {
    #[serde(default)]
    pub id: Option<String>,
    /// Comma separated skills the employer is hiring for.
    #[serde(default, deserialize_with = "null_to_default")]
    pub requirements: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub location: String,
    /// Company industry tag. Present on the record; worker ranking does
    /// not weight it.
    #[serde(default, deserialize_with = "null_to_default")]
    pub work_field: String,
}

/// Job post published by an employer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(default)]
    pub id: Option<String>,
    /// Comma separated skill requirements for the post.
    #[serde(default, deserialize_with = "null_to_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub location: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub work_field: String,
    /// Offered monthly salary. Carried for display, never scored.
    #[serde(default)]
    pub salary: Option<f64>,
}
