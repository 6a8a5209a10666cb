//! Options controlling how tolerant decoding and feature assembly are.

use serde::{Deserialize, Serialize};

/// What to do with a MultiPolygon member whose type is not Polygon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberPolicy {
    /// Warn and move on to the next member without advancing past the unknown body.
    ///
    /// The member's length cannot be known without assuming it is a Polygon, so every member
    /// after a skipped one is read from the skipped member's body and is likely garbage.
    #[default]
    Skip,

    /// Fail the whole MultiPolygon with [`WKBError::UnexpectedMemberType`].
    ///
    /// [`WKBError::UnexpectedMemberType`]: crate::error::WKBError::UnexpectedMemberType
    Reject,
}

/// What to do with a top-level geometry that is neither a Polygon nor a MultiPolygon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnsupportedTypePolicy {
    /// Warn and return [`Geometry::Absent`](crate::Geometry::Absent).
    #[default]
    Absent,

    /// Return [`WKBError::UnsupportedGeometryType`](crate::error::WKBError::UnsupportedGeometryType).
    Error,
}

/// Options for decoding WKB geometries and assembling them into features.
///
/// ```
/// use wkb_features::{DecodeOptions, MemberPolicy};
///
/// let options: DecodeOptions =
///     serde_json::from_str(r#"{"geometry_column": "geom", "member_policy": "reject"}"#).unwrap();
/// assert_eq!(options.geometry_column, "geom");
/// assert_eq!(options.member_policy, MemberPolicy::Reject);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    /// Name of the WKB column in a record batch.
    pub geometry_column: String,

    /// Handling of non-Polygon MultiPolygon members.
    pub member_policy: MemberPolicy,

    /// Handling of unsupported top-level geometry types.
    pub unsupported_type_policy: UnsupportedTypePolicy,
}

impl DecodeOptions {
    pub fn with_geometry_column(mut self, name: impl Into<String>) -> Self {
        self.geometry_column = name.into();
        self
    }

    pub fn with_member_policy(mut self, policy: MemberPolicy) -> Self {
        self.member_policy = policy;
        self
    }

    pub fn with_unsupported_type_policy(mut self, policy: UnsupportedTypePolicy) -> Self {
        self.unsupported_type_policy = policy;
        self
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            geometry_column: "geometry".to_string(),
            member_policy: MemberPolicy::default(),
            unsupported_type_policy: UnsupportedTypePolicy::default(),
        }
    }
}
