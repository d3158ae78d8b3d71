//! Login and registration forms with their client-side validation rules.
//!
//! Validation runs before anything touches the network. A form that fails
//! validation produces a [`FieldErrors`] map keyed by the same field names the
//! backend uses, so client and server errors render the same way.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::FieldErrors;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Courses offered in the registration selector.
pub const COURSES: &[&str] = &[
    "B.Tech", "BBA", "BCA", "MBA", "M.Tech", "B.Sc", "M.Sc", "BA", "MA",
];

pub const PASSWORD_MIN_LEN: usize = 6;
pub const PASSWORD_MAX_LEN: usize = 8;
pub const PHONE_MIN_DIGITS: usize = 10;
pub const PHONE_MAX_DIGITS: usize = 12;
pub const NAME_MIN_LEN: usize = 2;

/// Body of `POST /login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /register`. Never carries the password confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub enrollment_number: String,
    pub clg_name: String,
    pub course: String,
    pub password: String,
}

/// Raw login form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Both fields are required; the server decides whether they match.
    pub fn validate(&self) -> Result<LoginRequest, FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.email.trim().is_empty() {
            errors.insert("email", "Email is required");
        }
        if self.password.is_empty() {
            errors.insert("password", "Password is required");
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

/// Raw registration form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub enrollment_number: String,
    pub clg_name: String,
    pub course: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    /// Field names in display order.
    pub const FIELDS: &'static [&'static str] = &[
        "name",
        "email",
        "phone_number",
        "enrollment_number",
        "clg_name",
        "course",
        "password",
        "confirmPassword",
    ];

    /// Checks a single field, as done on blur.
    ///
    /// Returns the message to show, or `None` when the field is valid or the
    /// name is unknown.
    pub fn validate_field(&self, field: &str) -> Option<&'static str> {
        match field {
            "name" => {
                let name = self.name.trim();
                if name.is_empty() {
                    Some("Full name is required")
                } else if name.chars().count() < NAME_MIN_LEN {
                    Some("Name must be at least 2 characters")
                } else {
                    None
                }
            }
            "email" => {
                if self.email.is_empty() {
                    Some("Email is required")
                } else if !EMAIL_PATTERN.is_match(&self.email) {
                    Some("Invalid email format")
                } else {
                    None
                }
            }
            "phone_number" => {
                let phone = &self.phone_number;
                if phone.is_empty() {
                    Some("Phone number is required")
                } else if !phone.chars().all(|c| c.is_ascii_digit()) {
                    Some("Phone number must contain only digits")
                } else if phone.len() < PHONE_MIN_DIGITS || phone.len() > PHONE_MAX_DIGITS {
                    Some("Phone number must be 10-12 digits")
                } else {
                    None
                }
            }
            "enrollment_number" => self
                .enrollment_number
                .trim()
                .is_empty()
                .then_some("Enrollment number is required"),
            "clg_name" => self
                .clg_name
                .trim()
                .is_empty()
                .then_some("College name is required"),
            "course" => {
                if self.course.is_empty() {
                    Some("Please select a course")
                } else if !COURSES.contains(&self.course.as_str()) {
                    Some("Please select a valid course")
                } else {
                    None
                }
            }
            "password" => {
                let len = self.password.chars().count();
                if len == 0 {
                    Some("Password is required")
                } else if len < PASSWORD_MIN_LEN {
                    Some("Password must be at least 6 characters")
                } else if len > PASSWORD_MAX_LEN {
                    Some("Password must not exceed 8 characters")
                } else {
                    None
                }
            }
            "confirmPassword" => {
                if self.confirm_password.is_empty() {
                    Some("Please confirm your password")
                } else if self.confirm_password != self.password {
                    Some("Passwords do not match")
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Validates every field and builds the request body.
    pub fn validate(&self) -> Result<RegisterRequest, FieldErrors> {
        let mut errors = FieldErrors::new();
        for field in Self::FIELDS {
            if let Some(message) = self.validate_field(field) {
                errors.insert(*field, message);
            }
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(RegisterRequest {
            name: self.name.trim().to_string(),
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
            enrollment_number: self.enrollment_number.trim().to_string(),
            clg_name: self.clg_name.trim().to_string(),
            course: self.course.clone(),
            password: self.password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> RegistrationForm {
        RegistrationForm {
            name: "Asha Patel".to_string(),
            email: "asha@campus.edu".to_string(),
            phone_number: "9876543210".to_string(),
            enrollment_number: "EN2025001".to_string(),
            clg_name: "City College".to_string(),
            course: "BCA".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
        }
    }

    #[test]
    fn valid_form_builds_request_without_confirmation() {
        let request = valid_form().validate().unwrap();
        assert_eq!(request.email, "asha@campus.edu");

        let body = serde_json::to_value(&request).unwrap();
        assert!(body.get("confirmPassword").is_none());
        assert!(body.get("confirm_password").is_none());
        assert_eq!(body["clg_name"], "City College");
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = RegistrationForm::default().validate().unwrap_err();
        assert_eq!(errors.len(), RegistrationForm::FIELDS.len());
        assert_eq!(errors.first("name"), Some("Full name is required"));
        assert_eq!(errors.first("course"), Some("Please select a course"));
        assert_eq!(errors.first("confirmPassword"), Some("Please confirm your password"));
    }

    #[test]
    fn short_name_is_rejected() {
        let form = RegistrationForm {
            name: " A ".to_string(),
            ..valid_form()
        };
        assert_eq!(form.validate_field("name"), Some("Name must be at least 2 characters"));
    }

    #[test]
    fn email_must_look_like_an_address() {
        for bad in ["asha", "asha@campus", "a b@campus.edu", "@campus.edu"] {
            let form = RegistrationForm {
                email: bad.to_string(),
                ..valid_form()
            };
            assert_eq!(form.validate_field("email"), Some("Invalid email format"), "{bad}");
        }
    }

    #[test]
    fn phone_must_be_ten_to_twelve_digits() {
        let with = |phone: &str| RegistrationForm {
            phone_number: phone.to_string(),
            ..valid_form()
        };

        assert_eq!(
            with("98765-43210").validate_field("phone_number"),
            Some("Phone number must contain only digits")
        );
        assert_eq!(
            with("987654321").validate_field("phone_number"),
            Some("Phone number must be 10-12 digits")
        );
        assert_eq!(
            with("9876543210123").validate_field("phone_number"),
            Some("Phone number must be 10-12 digits")
        );
        assert_eq!(with("987654321012").validate_field("phone_number"), None);
    }

    #[test]
    fn password_length_is_between_six_and_eight() {
        let with = |password: &str| RegistrationForm {
            password: password.to_string(),
            confirm_password: password.to_string(),
            ..valid_form()
        };

        assert_eq!(
            with("abc").validate_field("password"),
            Some("Password must be at least 6 characters")
        );
        assert_eq!(
            with("abcdefghi").validate_field("password"),
            Some("Password must not exceed 8 characters")
        );
        assert_eq!(with("abcdefgh").validate_field("password"), None);
    }

    #[test]
    fn confirmation_must_match() {
        let form = RegistrationForm {
            confirm_password: "secret2".to_string(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.first("confirmPassword"), Some("Passwords do not match"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn unknown_course_is_rejected() {
        let form = RegistrationForm {
            course: "PhD".to_string(),
            ..valid_form()
        };
        assert_eq!(form.validate_field("course"), Some("Please select a valid course"));
    }

    #[test]
    fn login_requires_both_fields() {
        let errors = LoginForm::new("", "").validate().unwrap_err();
        assert_eq!(errors.first("email"), Some("Email is required"));
        assert_eq!(errors.first("password"), Some("Password is required"));

        let request = LoginForm::new(" a@x.com ", "secret1").validate().unwrap();
        assert_eq!(request.email, "a@x.com");
    }
}
