use serde_json::Value;

use trading_api_demo::build_document;
use trading_api_demo::models::HttpMethod;

fn document_json() -> anyhow::Result<Value> {
    Ok(serde_json::from_str(&build_document().to_pretty_json()?)?)
}

#[test]
fn top_level_keys_follow_openapi_layout() -> anyhow::Result<()> {
    let v = document_json()?;
    let keys: Vec<&str> = v
        .as_object()
        .expect("document root must be an object")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, ["openapi", "info", "servers", "paths", "components", "tags"]);
    assert_eq!(v["openapi"], "3.0.3");
    assert_eq!(v["info"]["title"], "Trading API - Демо версия");
    assert_eq!(v["info"]["version"], "1.0.0");
    Ok(())
}

#[test]
fn paths_are_exactly_the_demo_endpoints() -> anyhow::Result<()> {
    let v = document_json()?;
    let paths = v["paths"].as_object().expect("paths must be an object");

    let keys: Vec<&str> = paths.keys().map(String::as_str).collect();
    assert_eq!(keys, ["/products", "/offers/public", "/warehouses"]);

    let methods = |path: &str| -> Vec<String> {
        paths[path]
            .as_object()
            .map(|ops| ops.keys().cloned().collect())
            .unwrap_or_default()
    };
    assert_eq!(methods("/products"), ["post", "get"]);
    assert_eq!(methods("/offers/public"), ["get"]);
    assert_eq!(methods("/warehouses"), ["post"]);
    Ok(())
}

#[test]
fn required_fields_exist_as_properties() -> anyhow::Result<()> {
    let v = document_json()?;
    let schemas = v["components"]["schemas"]
        .as_object()
        .expect("components.schemas must exist");
    assert_eq!(schemas.len(), 4);

    for (name, schema) in schemas {
        let props = schema["properties"]
            .as_object()
            .unwrap_or_else(|| panic!("schema {name} has no properties"));
        if let Some(required) = schema.get("required").and_then(Value::as_array) {
            for field in required {
                let field = field.as_str().expect("required entries are strings");
                assert!(props.contains_key(field), "{name}.required lists unknown field '{field}'");
            }
        }
    }

    // Same check through the typed model.
    let doc = build_document();
    for (name, schema) in &doc.components.schemas {
        assert!(schema.missing_required().is_empty(), "{name} has dangling required names");
    }
    Ok(())
}

#[test]
fn operations_carry_ids_and_examples() {
    let doc = build_document();
    assert_eq!(doc.operation_count(), 4);

    let products = &doc.paths["/products"];
    let create = products.operation(HttpMethod::Post).expect("POST /products");
    assert_eq!(create.operation_id, "CreateProduct");
    assert_eq!(create.tags, ["Products"]);
    let example = create.request_example().expect("CreateProduct has a request example");
    assert_eq!(example["name"], "iPhone 15 Pro");
    assert_eq!(example["recommend_price"], 99999.99);

    let list = products.operation(HttpMethod::Get).expect("GET /products");
    assert_eq!(list.operation_id, "ListProducts");
    assert!(list.request_example().is_none());
    assert!(list.responses.contains_key("200"));

    let warehouse = doc.paths["/warehouses"]
        .operation(HttpMethod::Post)
        .expect("POST /warehouses");
    assert_eq!(
        warehouse.request_example().map(|e| e["latitude"].clone()),
        Some(serde_json::json!(55.7558))
    );
}

#[test]
fn numeric_bounds_and_enums_are_preserved() -> anyhow::Result<()> {
    let v = document_json()?;
    let warehouse = &v["components"]["schemas"]["CreateWarehouseRequest"]["properties"];
    assert_eq!(warehouse["latitude"]["minimum"], -90);
    assert_eq!(warehouse["latitude"]["maximum"], 90);
    assert_eq!(warehouse["longitude"]["minimum"], -180);

    let typed = build_document();
    let latitude = &typed
        .schema("CreateWarehouseRequest")
        .expect("CreateWarehouseRequest schema")
        .properties["latitude"];
    assert_eq!(latitude.type_label(), "number");
    assert_eq!(latitude.format.as_deref(), Some("double"));

    let offer = &v["components"]["schemas"]["Offer"]["properties"];
    assert_eq!(offer["type"]["enum"], serde_json::json!(["sale", "buy"]));
    assert_eq!(offer["delivery_days"]["maximum"], 365);

    let price = &v["components"]["schemas"]["CreateProductRequest"]["properties"]["recommend_price"];
    assert_eq!(price["format"], "double");
    assert_eq!(price["minimum"], 0);
    Ok(())
}

#[test]
fn security_scheme_and_tags() -> anyhow::Result<()> {
    let v = document_json()?;
    let scheme = &v["components"]["securitySchemes"]["ApiKeyAuth"];
    let keys: Vec<&str> = scheme
        .as_object()
        .expect("ApiKeyAuth must be an object")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, ["type", "description", "name", "in"]);
    assert_eq!(scheme["description"], "API ключ для аутентификации");
    assert_eq!(scheme["type"], "apiKey");
    assert_eq!(scheme["name"], "X-API-KEY");
    assert_eq!(scheme["in"], "header");

    let tags: Vec<&str> = v["tags"]
        .as_array()
        .expect("tags must be an array")
        .iter()
        .filter_map(|t| t["name"].as_str())
        .collect();
    assert_eq!(tags, ["Products", "Offers", "Warehouses", "Orders"]);
    Ok(())
}

#[test]
fn json_keeps_cyrillic_unescaped() -> anyhow::Result<()> {
    let json = build_document().to_pretty_json()?;
    assert!(json.contains("Демо версия"));
    assert!(!json.contains("\\u04"));
    assert!(json.starts_with("{\n  \"openapi\": \"3.0.3\""));
    Ok(())
}
