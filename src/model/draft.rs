use std::fmt;

/// A not-yet-persisted entity. `validate` applies the required-field rules
/// without touching disk; the store runs it again before assigning an id.
pub trait Draft {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// One or more required fields were empty at creation time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationError {
    missing: Vec<&'static str>,
}

impl ValidationError {
    /// Serialized names of the fields that were missing, in record order.
    pub fn missing(&self) -> &[&'static str] {
        &self.missing
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "missing required field(s): {}", self.missing.join(", "))
    }
}

impl std::error::Error for ValidationError {}

#[derive(Clone, Debug, Default)]
pub struct GroupDraft {
    pub external_group_id: String,
    pub name: String,
    pub category: String,
    pub member_count: u64,
}

impl Draft for GroupDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut missing = Vec::new();
        if self.external_group_id.trim().is_empty() {
            missing.push("externalGroupId");
        }
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.category.trim().is_empty() {
            missing.push("category");
        }
        check(missing)
    }
}

#[derive(Clone, Debug, Default)]
pub struct PostDraft {
    pub category: String,
    pub text: String,
    pub media: Option<String>,
}

impl Draft for PostDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut missing = Vec::new();
        if self.category.trim().is_empty() {
            missing.push("category");
        }
        if self.text.trim().is_empty() {
            missing.push("text");
        }
        check(missing)
    }
}

#[derive(Clone, Debug, Default)]
pub struct CategoryDraft {
    pub name: String,
}

impl Draft for CategoryDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        check(missing)
    }
}

fn check(missing: Vec<&'static str>) -> Result<(), ValidationError> {
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { missing })
    }
}
