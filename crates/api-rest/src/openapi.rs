//! OpenAPI document.
//!
//! Shared components and the health route come from the derive. Resource routes are generic,
//! so their operations are generated from each resource's schema descriptor instead.

use api_shared::{ErrorRes, HealthRes, MessageRes};
use rbfs_core::{Clinic, Resource, Supply, Vaccine, Volunteer};
use utoipa::openapi::path::{
    OperationBuilder, Parameter, ParameterBuilder, ParameterIn, PathItem, PathItemType,
};
use utoipa::openapi::request_body::{RequestBody, RequestBodyBuilder};
use utoipa::openapi::schema::{ArrayBuilder, ObjectBuilder, Ref, Schema, SchemaType};
use utoipa::openapi::{ContentBuilder, RefOr, Required, Response, ResponseBuilder};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "RBFS API",
        description = "Clinics, supplies, vaccines and volunteers for relief operations"
    ),
    paths(crate::handlers::health),
    components(schemas(
        HealthRes,
        MessageRes,
        ErrorRes,
        Clinic,
        Supply,
        Vaccine,
        Volunteer
    ))
)]
pub struct ApiDoc;

/// The complete document: derived parts plus one collection and one item path per resource.
pub fn document() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    let generated = resource_paths::<Clinic>()
        .into_iter()
        .chain(resource_paths::<Supply>())
        .chain(resource_paths::<Vaccine>())
        .chain(resource_paths::<Volunteer>());
    for (path, item) in generated {
        doc.paths.paths.insert(path, item);
    }
    doc
}

fn resource_paths<R: Resource>() -> Vec<(String, PathItem)> {
    let schema = R::SCHEMA;
    let body = || Ref::from_schema_name(schema.component);
    let tags = || Some(vec![schema.path.to_string()]);

    let list = OperationBuilder::new()
        .tags(tags())
        .operation_id(Some(format!("list_{}", schema.path)))
        .summary(Some(format!("List every {} record", schema.component)))
        .response(
            "200",
            json_response(
                "All records with their ids",
                Schema::Array(ArrayBuilder::new().items(body()).build()),
            ),
        )
        .response("500", error_response("Storage failure"))
        .build();

    let create = OperationBuilder::new()
        .tags(tags())
        .operation_id(Some(format!("create_{}", schema.path)))
        .summary(Some(format!("Create a {} record", schema.component)))
        .request_body(Some(json_body(body(), Required::True)))
        .response("201", json_response("Created record with its new id", body()))
        .response("400", error_response("Missing required field or invalid value"))
        .response("500", error_response("Storage failure"))
        .build();

    let update = OperationBuilder::new()
        .tags(tags())
        .operation_id(Some(format!("update_{}", schema.path)))
        .summary(Some(format!(
            "Overwrite every field of a {} record",
            schema.component
        )))
        .description(Some(
            "Fields missing from the body are cleared; an empty body clears every field.",
        ))
        .parameter(id_parameter())
        .request_body(Some(json_body(body(), Required::False)))
        .response("200", message_response("Record updated"))
        .response("404", error_response("No record has this id"))
        .response("500", error_response("Storage failure"))
        .build();

    let delete = OperationBuilder::new()
        .tags(tags())
        .operation_id(Some(format!("delete_{}", schema.path)))
        .summary(Some(format!("Delete a {} record", schema.component)))
        .parameter(id_parameter())
        .response("200", message_response("Record deleted"))
        .response("404", error_response("No record has this id"))
        .response("500", error_response("Storage failure"))
        .build();

    let mut collection = PathItem::new(PathItemType::Get, list);
    collection.operations.insert(PathItemType::Post, create);

    let mut item = PathItem::new(PathItemType::Patch, update);
    item.operations.insert(PathItemType::Delete, delete);

    vec![
        (format!("/{}", schema.path), collection),
        (format!("/{}/{{id}}", schema.path), item),
    ]
}

fn id_parameter() -> Parameter {
    ParameterBuilder::new()
        .name("id")
        .parameter_in(ParameterIn::Path)
        .required(Required::True)
        .description(Some("Storage-assigned record id"))
        .schema(Some(Schema::Object(
            ObjectBuilder::new()
                .schema_type(SchemaType::Integer)
                .build(),
        )))
        .build()
}

fn json_body(schema: impl Into<RefOr<Schema>>, required: Required) -> RequestBody {
    RequestBodyBuilder::new()
        .content(
            "application/json",
            ContentBuilder::new().schema(schema).build(),
        )
        .required(Some(required))
        .build()
}

fn json_response(description: &str, schema: impl Into<RefOr<Schema>>) -> Response {
    ResponseBuilder::new()
        .description(description)
        .content(
            "application/json",
            ContentBuilder::new().schema(schema).build(),
        )
        .build()
}

fn message_response(description: &str) -> Response {
    json_response(description, Ref::from_schema_name("MessageRes"))
}

fn error_response(description: &str) -> Response {
    json_response(description, Ref::from_schema_name("ErrorRes"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_resource_route() {
        let doc = document();

        for resource in ["clinicas", "mantimentos", "vacinas", "voluntarios"] {
            let collection = doc
                .paths
                .paths
                .get(&format!("/{resource}"))
                .unwrap_or_else(|| panic!("missing /{resource}"));
            assert!(collection.operations.contains_key(&PathItemType::Get));
            assert!(collection.operations.contains_key(&PathItemType::Post));
            assert_eq!(
                collection.operations[&PathItemType::Get].tags,
                Some(vec![resource.to_string()])
            );

            let item = doc
                .paths
                .paths
                .get(&format!("/{resource}/{{id}}"))
                .unwrap_or_else(|| panic!("missing /{resource}/{{id}}"));
            assert!(item.operations.contains_key(&PathItemType::Patch));
            assert!(item.operations.contains_key(&PathItemType::Delete));
        }

        assert!(doc.paths.paths.contains_key("/health"));
    }

    #[test]
    fn test_resource_components_are_registered() {
        let doc = document();
        let components = doc.components.expect("components should be present");

        for name in ["Clinic", "Supply", "Vaccine", "Volunteer", "ErrorRes", "MessageRes"] {
            assert!(
                components.schemas.contains_key(name),
                "missing component {name}"
            );
        }
    }
}
