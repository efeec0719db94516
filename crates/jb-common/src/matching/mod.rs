pub mod cluster;
pub mod pipeline;
pub mod scoring;
pub mod similarity;
pub mod weights;

use crate::{EmployeeProfile, EmployerProfile, JobPosting};

/// Field access used by the scoring and clustering primitives.
///
/// Both ranking directions (jobs for an employee, workers for an
/// employer) run through the same generic pipeline; this trait is the
/// only thing a record must provide to participate on either side.
pub trait MatchFields {
    /// Comma separated free-text skill or requirement list.
    fn skill_text(&self) -> &str;
    /// Location tag, compared case-insensitively.
    fn location(&self) -> &str;
    /// Occupational field tag; doubles as the clustering key.
    fn work_field(&self) -> &str;
}

impl MatchFields for EmployeeProfile {
    fn skill_text(&self) -> &str {
        &self.skills
    }

    fn location(&self) -> &str {
        &self.location
    }

    fn work_field(&self) -> &str {
        &self.work_field
    }
}

impl MatchFields for EmployerProfile {
    fn skill_text(&self) -> &str {
        &self.requirements
    }

    fn location(&self) -> &str {
        &self.location
    }

    fn work_field(&self) -> &str {
        &self.work_field
    }
}

impl MatchFields for JobPosting {
    fn skill_text(&self) -> &str {
        &self.description
    }

    fn location(&self) -> &str {
        &self.location
    }

    fn work_field(&self) -> &str {
        &self.work_field
    }
}
