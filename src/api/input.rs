use axum::body::Bytes;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};

/// Shape shared by create and update bodies. Unknown keys (the `id` on update) are
/// ignored; `title` and `content` must both be strings.
///
/// Fields borrow from the parsed request body, so handlers keep working with the
/// caller's own values rather than a re-serialized copy.
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct BlogInput<'a> {
    pub title: &'a str,
    pub content: &'a str,
}

/// Check `body` against the blog input shape.
pub fn validate_blog_input(body: &Value) -> ApiResult<BlogInput<'_>> {
    // Structs also deserialize from sequences; only objects are acceptable here
    if !body.is_object() {
        tracing::debug!("Rejected blog input: body is not an object");
        return Err(ApiError::InvalidInput);
    }

    BlogInput::deserialize(body).map_err(|e| {
        tracing::debug!("Rejected blog input: {}", e);
        ApiError::InvalidInput
    })
}

/// Parse a raw request body as JSON. A body that is not JSON at all never reaches
/// validation and is reported as an unhandled error.
pub fn parse_json_body(body: &Bytes) -> ApiResult<Value> {
    serde_json::from_slice(body).map_err(|e| ApiError::internal(format!("malformed JSON body: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_title_and_content() {
        let body = json!({ "title": "A", "content": "B" });
        let input = validate_blog_input(&body).unwrap();
        assert_eq!(input, BlogInput { title: "A", content: "B" });
    }

    #[test]
    fn ignores_extra_fields() {
        let body = json!({ "id": "p1", "title": "A", "content": "B", "published": true });
        assert!(validate_blog_input(&body).is_ok());
    }

    #[test]
    fn empty_strings_are_still_strings() {
        let body = json!({ "title": "", "content": "" });
        assert!(validate_blog_input(&body).is_ok());
    }

    #[test]
    fn rejects_missing_or_mistyped_fields() {
        for body in [
            json!({ "title": "A" }),
            json!({ "content": "B" }),
            json!({ "title": 1, "content": "B" }),
            json!({ "title": "A", "content": null }),
            json!(["A", "B"]),
            json!("A"),
            json!(null),
        ] {
            assert!(
                matches!(validate_blog_input(&body), Err(ApiError::InvalidInput)),
                "accepted {}",
                body
            );
        }
    }

    #[test]
    fn malformed_json_is_unhandled() {
        let err = parse_json_body(&Bytes::from_static(b"{not json")).unwrap_err();
        assert!(matches!(err, ApiError::Internal(_)));
    }
}
