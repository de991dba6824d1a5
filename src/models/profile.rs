//! Family profile and members
//!
//! One profile per ledger. Members are the people records can be attributed
//! to; their access level is kept for display and export.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::MemberId;

/// What a family member may do with the shared ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    Admin,
    #[default]
    Member,
    Viewer,
}

impl AccessLevel {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "admin" | "administrator" | "administrador" => Some(Self::Admin),
            "member" | "membro" => Some(Self::Member),
            "viewer" | "visualizador" => Some(Self::Viewer),
            _ => None,
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => write!(f, "Admin"),
            Self::Member => write!(f, "Member"),
            Self::Viewer => write!(f, "Viewer"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyMember {
    #[serde(default)]
    pub id: MemberId,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub access_level: AccessLevel,
}

impl FamilyMember {
    pub fn new(name: impl Into<String>, access_level: AccessLevel) -> Self {
        Self {
            id: MemberId::new(),
            name: name.into().trim().to_string(),
            email: String::new(),
            access_level,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into().trim().to_string();
        self
    }

    /// Matches the member's id forms or, ignoring case, their name
    pub fn matches(&self, query: &str) -> bool {
        self.id.matches(query) || self.name.eq_ignore_ascii_case(query.trim())
    }

    pub fn validate(&self) -> Result<(), ProfileValidationError> {
        if self.name.is_empty() {
            return Err(ProfileValidationError::EmptyMemberName);
        }
        validate_email(&self.email)
    }
}

/// The household owning the ledger
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub family_name: String,
    #[serde(default)]
    pub members: Vec<FamilyMember>,
}

impl Profile {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.family_name.is_empty() && self.members.is_empty()
    }

    pub fn validate(&self) -> Result<(), ProfileValidationError> {
        validate_email(&self.email)?;
        for member in &self.members {
            member.validate()?;
        }
        Ok(())
    }

    /// Add a member; names are unique ignoring case
    pub fn add_member(&mut self, member: FamilyMember) -> Result<(), ProfileValidationError> {
        member.validate()?;
        if self
            .members
            .iter()
            .any(|m| m.name.eq_ignore_ascii_case(&member.name))
        {
            return Err(ProfileValidationError::DuplicateMember(member.name));
        }
        self.members.push(member);
        Ok(())
    }

    pub fn member_named(&self, name: &str) -> Option<&FamilyMember> {
        self.members
            .iter()
            .find(|m| m.name.eq_ignore_ascii_case(name.trim()))
    }
}

/// Empty, or `local@domain` with both parts present
fn validate_email(email: &str) -> Result<(), ProfileValidationError> {
    if email.is_empty() {
        return Ok(());
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(ProfileValidationError::InvalidEmail(email.to_string())),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileValidationError {
    EmptyMemberName,
    DuplicateMember(String),
    InvalidEmail(String),
}

impl fmt::Display for ProfileValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMemberName => write!(f, "Member name cannot be empty"),
            Self::DuplicateMember(name) => write!(f, "Member '{}' already exists", name),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
        }
    }
}

impl std::error::Error for ProfileValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_level_parse() {
        assert_eq!(AccessLevel::parse("Admin"), Some(AccessLevel::Admin));
        assert_eq!(AccessLevel::parse("visualizador"), Some(AccessLevel::Viewer));
        assert_eq!(AccessLevel::parse("owner"), None);
        assert_eq!(AccessLevel::default(), AccessLevel::Member);
    }

    #[test]
    fn test_add_member_rejects_duplicates() {
        let mut profile = Profile::default();
        profile
            .add_member(FamilyMember::new("Ana", AccessLevel::Admin))
            .unwrap();
        assert_eq!(
            profile.add_member(FamilyMember::new(" ana ", AccessLevel::Viewer)),
            Err(ProfileValidationError::DuplicateMember("ana".into()))
        );
        assert_eq!(
            profile.add_member(FamilyMember::new("  ", AccessLevel::Viewer)),
            Err(ProfileValidationError::EmptyMemberName)
        );
        assert_eq!(profile.members.len(), 1);
        assert!(profile.member_named("ANA").is_some());
    }

    #[test]
    fn test_member_matches_name_or_id() {
        let member = FamilyMember::new("Bruno", AccessLevel::Member);
        assert!(member.matches("bruno"));
        assert!(member.matches(&member.id.to_string()));
        assert!(!member.matches("Ana"));
    }

    #[test]
    fn test_email_validation() {
        let member = FamilyMember::new("Ana", AccessLevel::Member);
        assert!(member.clone().with_email("ana@example.com").validate().is_ok());
        assert!(member.clone().validate().is_ok());
        assert_eq!(
            member.with_email("ana").validate(),
            Err(ProfileValidationError::InvalidEmail("ana".into()))
        );

        let profile = Profile {
            email: "@example.com".into(),
            ..Profile::default()
        };
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_deserialize_defaults() {
        let profile: Profile = serde_json::from_str(r#"{"family_name":"Silva"}"#).unwrap();
        assert_eq!(profile.family_name, "Silva");
        assert!(profile.members.is_empty());
        assert!(!profile.is_empty());
        assert!(Profile::default().is_empty());
    }
}
