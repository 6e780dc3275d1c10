// 会员请求体

use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

use super::{MISSING, ValidationErrors, parse};

// 新增会员请求，字段都用 Option 以便一次报告所有缺失字段
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMemberRequest {
    #[validate(
        required(message = "Missing data for required field."),
        length(min = 1, max = 100, message = "Length must be between 1 and 100.")
    )]
    pub name: Option<String>,
    #[validate(length(max = 100, message = "Longer than maximum length 100."))]
    pub age: Option<String>,
}

// 校验通过的新会员
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    pub name: String,
    pub age: Option<String>,
}

// 会员部分更新，`age: Some(None)` 表示清空年龄
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
pub struct MemberChanges {
    #[validate(length(min = 1, max = 100, message = "Length must be between 1 and 100."))]
    pub name: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 100, message = "Longer than maximum length 100."))]
    pub age: Option<Option<String>>,
}

impl NewMember {
    pub fn from_body(body: Value) -> Result<Self, ValidationErrors> {
        let request: CreateMemberRequest = parse(body)?;
        let name = request
            .name
            .ok_or_else(|| ValidationErrors::single("name", MISSING))?;
        Ok(NewMember {
            name,
            age: request.age,
        })
    }
}

impl MemberChanges {
    pub fn from_body(body: Value) -> Result<Self, ValidationErrors> {
        parse(body)
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{NOT_STRING, NUL_CHARACTER};
    use serde_json::json;

    const NAME_LENGTH: &str = "Length must be between 1 and 100.";

    #[test]
    fn name_alone_is_enough() {
        let member = NewMember::from_body(json!({ "name": "Alice" })).unwrap();
        assert_eq!(member.name, "Alice");
        assert_eq!(member.age, None);
    }

    #[test]
    fn id_and_unknown_fields_are_ignored() {
        let member =
            NewMember::from_body(json!({ "id": 99, "name": "Bob", "age": "31", "email": "x" }))
                .unwrap();
        assert_eq!(
            member,
            NewMember {
                name: "Bob".into(),
                age: Some("31".into())
            }
        );
    }

    #[test]
    fn missing_or_empty_name_is_rejected() {
        let errors = NewMember::from_body(json!({ "age": "40" })).unwrap_err();
        assert_eq!(errors.get("name"), Some(&[MISSING.to_string()][..]));

        let errors = NewMember::from_body(json!({ "name": "" })).unwrap_err();
        assert_eq!(errors.get("name"), Some(&[NAME_LENGTH.to_string()][..]));
    }

    #[test]
    fn wrong_type_is_reported_against_the_field() {
        let errors = NewMember::from_body(json!({ "name": 5 })).unwrap_err();
        assert_eq!(errors.get("name"), Some(&[NOT_STRING.to_string()][..]));
    }

    #[test]
    fn overlong_fields_are_all_reported() {
        let errors =
            NewMember::from_body(json!({ "name": "a".repeat(101), "age": "9".repeat(101) }))
                .unwrap_err();
        assert_eq!(errors.get("name"), Some(&[NAME_LENGTH.to_string()][..]));
        assert_eq!(
            errors.get("age"),
            Some(&["Longer than maximum length 100.".to_string()][..])
        );
    }

    #[test]
    fn null_characters_are_rejected() {
        let errors = NewMember::from_body(json!({ "name": "Al\u{0}ice" })).unwrap_err();
        assert_eq!(errors.get("name"), Some(&[NUL_CHARACTER.to_string()][..]));

        let errors = MemberChanges::from_body(json!({ "age": "3\u{0}" })).unwrap_err();
        assert_eq!(errors.get("age"), Some(&[NUL_CHARACTER.to_string()][..]));
    }

    #[test]
    fn partial_update_distinguishes_absent_and_null_age() {
        let changes = MemberChanges::from_body(json!({ "name": "Carol" })).unwrap();
        assert_eq!(changes.name.as_deref(), Some("Carol"));
        assert_eq!(changes.age, None);

        let changes = MemberChanges::from_body(json!({ "age": null })).unwrap();
        assert_eq!(changes.age, Some(None));

        let changes = MemberChanges::from_body(json!({ "age": "52" })).unwrap();
        assert_eq!(changes.age, Some(Some("52".to_string())));

        assert!(MemberChanges::from_body(json!({})).unwrap().is_empty());
    }

    #[test]
    fn partial_update_still_checks_lengths() {
        let errors = MemberChanges::from_body(json!({ "name": "" })).unwrap_err();
        assert_eq!(errors.get("name"), Some(&[NAME_LENGTH.to_string()][..]));
    }
}
