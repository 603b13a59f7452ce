//! Request body validation
//!
//! Rules are declared per field as a chain of checks. Every check in a chain
//! runs, so a missing field that also has a type check reports two failures.

use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::domain::release_date;

/// A single check applied to one body field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// The field is present in the body (a `null` value counts as present)
    Exists,
    /// The field is a string holding a recognizable calendar date
    IsDate,
    /// The field is a JSON array
    IsArray,
}

/// A check together with the message reported when it fails
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub check: Check,
    pub message: &'static str,
}

/// All rules declared for one body field, evaluated in order
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub rules: &'static [Rule],
}

pub const MOVIE_RULES: &[FieldRule] = &[
    FieldRule {
        field: "title",
        rules: &[Rule { check: Check::Exists, message: "Title is required" }],
    },
    FieldRule {
        field: "description",
        rules: &[Rule { check: Check::Exists, message: "Description is required" }],
    },
    FieldRule {
        field: "releaseDate",
        rules: &[
            Rule { check: Check::Exists, message: "Release date is required" },
            Rule { check: Check::IsDate, message: "Should be valid date" },
        ],
    },
    FieldRule {
        field: "genre",
        rules: &[
            Rule { check: Check::Exists, message: "Genre name is required" },
            Rule { check: Check::IsArray, message: "Should be array" },
        ],
    },
];

pub const GENRE_RULES: &[FieldRule] = &[FieldRule {
    field: "name",
    rules: &[Rule { check: Check::Exists, message: "Name is required" }],
}];

/// One failed check, in the shape clients receive under `errors`
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FieldError {
    #[serde(rename = "type")]
    #[schema(example = "field")]
    pub kind: &'static str,
    /// Submitted value, omitted when the field was absent
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub value: Option<Value>,
    #[schema(example = "Title is required")]
    pub msg: &'static str,
    #[schema(example = "title")]
    pub path: &'static str,
    #[schema(example = "body")]
    pub location: &'static str,
}

impl Check {
    fn passes(self, value: Option<&Value>) -> bool {
        match self {
            Check::Exists => value.is_some(),
            Check::IsDate => matches!(value, Some(Value::String(s)) if release_date::parse(s).is_some()),
            Check::IsArray => matches!(value, Some(Value::Array(_))),
        }
    }
}

/// Evaluate `rules` against a request body, returning failures in
/// declaration order. An empty result means the body is acceptable.
pub fn validate(body: &Map<String, Value>, rules: &[FieldRule]) -> Vec<FieldError> {
    let mut failures = Vec::new();

    for field_rule in rules {
        let value = body.get(field_rule.field);

        for rule in field_rule.rules {
            if !rule.check.passes(value) {
                failures.push(FieldError {
                    kind: "field",
                    value: value.cloned(),
                    msg: rule.message,
                    path: field_rule.field,
                    location: "body",
                });
            }
        }
    }

    failures
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    #[test]
    fn test_empty_movie_reports_six_failures() {
        let failures = validate(&Map::new(), MOVIE_RULES);

        assert_eq!(failures.len(), 6);
        let messages: Vec<_> = failures.iter().map(|f| f.msg).collect();
        assert_eq!(
            messages,
            vec![
                "Title is required",
                "Description is required",
                "Release date is required",
                "Should be valid date",
                "Genre name is required",
                "Should be array",
            ]
        );
        assert!(failures.iter().all(|f| f.value.is_none()));
    }

    #[test]
    fn test_empty_genre_reports_one_failure() {
        let failures = validate(&Map::new(), GENRE_RULES);

        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].path, "name");
        assert_eq!(failures[0].msg, "Name is required");
    }

    #[test]
    fn test_valid_movie_passes() {
        let movie = body(json!({
            "title": "movie1",
            "description": "funny",
            "releaseDate": "10-10-2023",
            "genre": ["comedy"]
        }));

        assert!(validate(&movie, MOVIE_RULES).is_empty());
    }

    #[test]
    fn test_type_checks_report_submitted_value() {
        let movie = body(json!({
            "title": "movie1",
            "description": "funny",
            "releaseDate": "someday",
            "genre": "comedy"
        }));

        let failures = validate(&movie, MOVIE_RULES);
        assert_eq!(failures.len(), 2);
        assert_eq!(failures[0].path, "releaseDate");
        assert_eq!(failures[0].msg, "Should be valid date");
        assert_eq!(failures[0].value, Some(json!("someday")));
        assert_eq!(failures[1].path, "genre");
        assert_eq!(failures[1].msg, "Should be array");
    }

    #[test]
    fn test_null_counts_as_present() {
        let genre = body(json!({ "name": null }));
        assert!(validate(&genre, GENRE_RULES).is_empty());
    }

    #[test]
    fn test_failure_serialization() {
        let failures = validate(&Map::new(), GENRE_RULES);
        let value = serde_json::to_value(&failures[0]).unwrap();

        assert_eq!(
            value,
            json!({ "type": "field", "msg": "Name is required", "path": "name", "location": "body" })
        );
    }
}
