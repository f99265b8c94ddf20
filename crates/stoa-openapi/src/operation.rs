//! Assembling one OpenAPI operation from a route schema.

use http::StatusCode;
use indexmap::IndexMap;
use serde_json::Value;
use stoa_core::RouteSchema;

use crate::document::{MediaType, Operation, ParameterIn, RequestBody, Response};
use crate::parameters::map_parameters;
use crate::references::update_references;
use crate::slug::Slugger;

/// MIME type used when a schema declares no `consumes`/`produces`.
const DEFAULT_MEDIA_TYPE: &str = "application/json";

/// Response description used when neither the schema nor the status code
/// provides one.
const DEFAULT_RESPONSE_DESCRIPTION: &str = "Default Response";

/// Builds the operation object for one route.
///
/// A route without a schema yields an empty operation; it still appears
/// in the document. Otherwise the route's stored schema is cloned first
/// and every rewriting step below works on that copy, so the registry's
/// schema values stay pristine across repeated builds.
///
/// The slugger supplies a document-wide unique `operationId` whenever
/// the schema does not declare one.
pub fn build_operation(route_schema: Option<&RouteSchema>, slugger: &mut Slugger) -> Operation {
    let mut operation = Operation::default();
    let Some(route_schema) = route_schema else {
        return operation;
    };
    let schema = route_schema.clone();

    operation.operation_id = Some(
        schema
            .operation_id
            .unwrap_or_else(|| slugger.slug(schema.summary.as_deref().unwrap_or("operation"))),
    );
    operation.summary = schema.summary;
    operation.tags = schema.tags;
    operation.description = schema.description;
    operation.external_docs = schema.external_docs;
    operation.deprecated = schema.deprecated;
    operation.security = schema.security;

    map_parameters(&mut operation.parameters, schema.querystring.as_ref(), ParameterIn::Query);
    map_parameters(&mut operation.parameters, schema.params.as_ref(), ParameterIn::Path);
    map_parameters(&mut operation.parameters, schema.headers.as_ref(), ParameterIn::Header);
    map_parameters(&mut operation.parameters, schema.cookies.as_ref(), ParameterIn::Cookie);

    let consumes = schema
        .consumes
        .unwrap_or_else(|| vec![DEFAULT_MEDIA_TYPE.to_string()]);
    let produces = schema
        .produces
        .unwrap_or_else(|| vec![DEFAULT_MEDIA_TYPE.to_string()]);

    if let Some(mut body) = schema.body {
        update_references(&mut body);
        let request_body = operation.request_body.get_or_insert_with(RequestBody::default);
        for consume in &consumes {
            request_body
                .content
                .insert(consume.clone(), MediaType { schema: body.clone() });
        }
    }

    if let Some(response) = schema.response {
        for (status, mut response_schema) in response {
            update_references(&mut response_schema);
            let description = response_schema
                .get("description")
                .and_then(Value::as_str)
                .map(String::from)
                .or_else(|| status_phrase(&status))
                .unwrap_or_else(|| DEFAULT_RESPONSE_DESCRIPTION.to_string());
            let mut content = IndexMap::new();
            for produce in &produces {
                content.insert(produce.clone(), MediaType { schema: response_schema.clone() });
            }
            operation.responses.insert(status, Response { description, content });
        }
    }

    operation
}

/// Standard reason phrase for a status-code string, if it names one.
fn status_phrase(status: &str) -> Option<String> {
    status
        .parse::<u16>()
        .ok()
        .and_then(|code| StatusCode::from_u16(code).ok())
        .and_then(|code| code.canonical_reason())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn build(route_schema: &RouteSchema) -> Operation {
        build_operation(Some(route_schema), &mut Slugger::new())
    }

    #[test]
    fn test_no_schema_yields_empty_operation() {
        let operation = build_operation(None, &mut Slugger::new());
        assert_eq!(serde_json::to_value(&operation).unwrap(), json!({}));
    }

    #[test]
    fn test_explicit_operation_id_is_kept() {
        let schema = RouteSchema {
            operation_id: Some("getWidget".to_string()),
            ..RouteSchema::default()
        };
        assert_eq!(build(&schema).operation_id.as_deref(), Some("getWidget"));
    }

    #[test]
    fn test_operation_id_from_summary() {
        let schema = RouteSchema {
            summary: Some("List widgets".to_string()),
            ..RouteSchema::default()
        };
        assert_eq!(build(&schema).operation_id.as_deref(), Some("list-widgets"));
    }

    #[test]
    fn test_operation_id_fallback_is_uniqued() {
        let mut slugger = Slugger::new();
        let schema = RouteSchema::default();
        let first = build_operation(Some(&schema), &mut slugger);
        let second = build_operation(Some(&schema), &mut slugger);
        assert_eq!(first.operation_id.as_deref(), Some("operation"));
        assert_eq!(second.operation_id.as_deref(), Some("operation-1"));
    }

    #[test]
    fn test_metadata_is_copied() {
        let schema = RouteSchema {
            summary: Some("List widgets".to_string()),
            description: Some("Lists all widgets".to_string()),
            tags: vec!["widgets".to_string()],
            deprecated: Some(true),
            external_docs: Some(json!({"url": "https://example.com"})),
            security: Some(json!([{"bearerAuth": []}])),
            ..RouteSchema::default()
        };
        let operation = build(&schema);
        assert_eq!(operation.summary.as_deref(), Some("List widgets"));
        assert_eq!(operation.tags, vec!["widgets"]);
        assert_eq!(operation.deprecated, Some(true));
        assert!(operation.external_docs.is_some());
        assert!(operation.security.is_some());
    }

    #[test]
    fn test_parameters_come_in_location_order() {
        let schema = RouteSchema {
            querystring: Some(json!({"properties": {"q": {"type": "string"}}})),
            params: Some(json!({"properties": {"id": {"type": "string"}}})),
            headers: Some(json!({"properties": {"x-token": {"type": "string"}}})),
            cookies: Some(json!({"properties": {"session": {"type": "string"}}})),
            ..RouteSchema::default()
        };
        let operation = build(&schema);
        let locations: Vec<ParameterIn> = operation.parameters.iter().map(|p| p.location).collect();
        assert_eq!(
            locations,
            vec![ParameterIn::Query, ParameterIn::Path, ParameterIn::Header, ParameterIn::Cookie]
        );
    }

    #[test]
    fn test_body_defaults_to_json_media_type() {
        let schema = RouteSchema {
            body: Some(json!({"$ref": "widget"})),
            ..RouteSchema::default()
        };
        let operation = build(&schema);
        let request_body = operation.request_body.unwrap();
        assert_eq!(request_body.content.len(), 1);
        assert_eq!(
            request_body.content["application/json"].schema,
            json!({"$ref": "#/components/schemas/widget"})
        );
    }

    #[test]
    fn test_body_honors_consumes() {
        let schema = RouteSchema {
            consumes: Some(vec![
                "application/json".to_string(),
                "application/x-www-form-urlencoded".to_string(),
            ]),
            body: Some(json!({"type": "object"})),
            ..RouteSchema::default()
        };
        let operation = build(&schema);
        let request_body = operation.request_body.unwrap();
        assert_eq!(request_body.content.len(), 2);
        assert!(request_body.content.contains_key("application/x-www-form-urlencoded"));
    }

    #[test]
    fn test_response_description_precedence() {
        let schema = RouteSchema {
            response: Some(
                [
                    ("200".to_string(), json!({"type": "object", "description": "A widget"})),
                    ("404".to_string(), json!({"type": "object"})),
                    ("599".to_string(), json!({"type": "object"})),
                ]
                .into_iter()
                .collect(),
            ),
            ..RouteSchema::default()
        };
        let operation = build(&schema);
        assert_eq!(operation.responses["200"].description, "A widget");
        assert_eq!(operation.responses["404"].description, "Not Found");
        assert_eq!(operation.responses["599"].description, "Default Response");
    }

    #[test]
    fn test_response_references_are_rewritten() {
        let schema = RouteSchema {
            produces: Some(vec!["application/xml".to_string()]),
            response: Some(
                [("200".to_string(), json!({"type": "array", "items": {"$ref": "widget"}}))]
                    .into_iter()
                    .collect(),
            ),
            ..RouteSchema::default()
        };
        let operation = build(&schema);
        let media = &operation.responses["200"].content["application/xml"];
        assert_eq!(media.schema["items"]["$ref"], json!("#/components/schemas/widget"));
    }

    #[test]
    fn test_build_never_mutates_the_stored_schema() {
        let schema = RouteSchema {
            body: Some(json!({"$ref": "widget"})),
            response: Some(
                [("200".to_string(), json!({"$ref": "widget"}))].into_iter().collect(),
            ),
            ..RouteSchema::default()
        };
        let _ = build(&schema);
        assert_eq!(schema.body.unwrap(), json!({"$ref": "widget"}));
        assert_eq!(schema.response.unwrap()["200"], json!({"$ref": "widget"}));
    }
}
