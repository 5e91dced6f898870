//! Form validation.
//!
//! Each form validates into a per-field error struct; an empty struct means
//! the form may be submitted.

use crate::api::{ArticleDraft, RegisterRequest};
use crate::domain::Role;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginErrors {
    pub username: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl LoginErrors {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none()
    }
}

pub fn validate_login(username: &str, password: &str) -> LoginErrors {
    LoginErrors {
        username: username
            .trim()
            .is_empty()
            .then_some("Please enter your username"),
        password: password.is_empty().then_some("Please enter your password"),
    }
}

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterErrors {
    pub username: Option<&'static str>,
    pub password: Option<&'static str>,
    pub role: Option<&'static str>,
}

impl RegisterErrors {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none() && self.role.is_none()
    }
}

/// Validate the register form; `role` is the raw select value.
pub fn validate_register(username: &str, password: &str, role: &str) -> Result<RegisterRequest, RegisterErrors> {
    let parsed_role = Role::from_name(role);
    let errors = RegisterErrors {
        username: username
            .trim()
            .is_empty()
            .then_some("Username field cannot be empty"),
        password: (password.chars().count() < MIN_PASSWORD_LEN)
            .then_some("Password must be at least 8 characters long"),
        role: parsed_role.is_none().then_some("Please select a role"),
    };

    match parsed_role {
        Some(role) if errors.is_empty() => Ok(RegisterRequest {
            username: username.trim().to_string(),
            password: password.to_string(),
            role,
        }),
        _ => Err(errors),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleErrors {
    pub title: Option<&'static str>,
    pub category: Option<&'static str>,
    pub content: Option<&'static str>,
}

impl ArticleErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.category.is_none() && self.content.is_none()
    }
}

/// Content counts as empty when it has no text and no image.
pub fn validate_article(draft: &ArticleDraft) -> ArticleErrors {
    let content_empty =
        crate::text::strip_tags(&draft.content).is_empty() && !draft.content.contains("<img");
    ArticleErrors {
        title: draft.title.trim().is_empty().then_some("Please enter title"),
        category: draft
            .category_id
            .trim()
            .is_empty()
            .then_some("Please select category"),
        content: content_empty.then_some("Please enter content"),
    }
}

/// Trimmed category name, or the field error.
pub fn validate_category_name(name: &str) -> Result<String, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        Err("Field cannot be empty")
    } else {
        Ok(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login() {
        let errors = validate_login(" ", "");
        assert_eq!(errors.username, Some("Please enter your username"));
        assert_eq!(errors.password, Some("Please enter your password"));
        assert!(validate_login("james", "secret").is_empty());
    }

    #[test]
    fn test_register() {
        let errors = validate_register("", "short", "").unwrap_err();
        assert_eq!(errors.username, Some("Username field cannot be empty"));
        assert_eq!(errors.password, Some("Password must be at least 8 characters long"));
        assert_eq!(errors.role, Some("Please select a role"));

        let request = validate_register(" james ", "longenough", "Admin").unwrap();
        assert_eq!(request.username, "james");
        assert_eq!(request.role, Role::Admin);
    }

    #[test]
    fn test_register_eight_chars_is_enough() {
        let errors = validate_register("james", "1234567", "User").unwrap_err();
        assert_eq!(errors.username, None);
        assert!(errors.password.is_some());
        assert!(validate_register("james", "12345678", "User").is_ok());
    }

    #[test]
    fn test_article() {
        let mut draft = ArticleDraft::default();
        draft.content = "<p><br></p>".into();
        let errors = validate_article(&draft);
        assert_eq!(errors.title, Some("Please enter title"));
        assert_eq!(errors.category, Some("Please select category"));
        assert_eq!(errors.content, Some("Please enter content"));

        draft.title = "Title".into();
        draft.category_id = "c1".into();
        draft.content = r#"<p><img src="x.png"></p>"#.into();
        assert!(validate_article(&draft).is_empty());
    }

    #[test]
    fn test_category_name() {
        assert_eq!(validate_category_name("  "), Err("Field cannot be empty"));
        assert_eq!(validate_category_name(" Tech "), Ok("Tech".to_string()));
    }
}
