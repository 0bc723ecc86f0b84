use serde::{Deserialize, Serialize};

/// Program-level metadata parsed from a direction description.
///
/// Every field is optional: the description may simply lack a clause.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyDirection {
    /// Program classification code, shaped `DD.DD.DD`.
    pub code: Option<String>,
    /// Program title.
    pub name: Option<String>,
    /// Specialization title.
    pub profile: Option<String>,
    /// Owning department name.
    pub edu_department: Option<String>,
}

impl StudyDirection {
    /// Returns true when no field was found.
    pub fn is_empty(&self) -> bool {
        self.code.is_none()
            && self.name.is_none()
            && self.profile.is_none()
            && self.edu_department.is_none()
    }
}
