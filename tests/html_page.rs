use trading_api_demo::build_document;
use trading_api_demo::html::render_documentation;

fn page() -> String {
    render_documentation(&build_document()).expect("rendering the demo page")
}

#[test]
fn page_carries_title_and_one_card_per_path() {
    let html = page();
    let doc = build_document();

    assert!(html.contains("Trading API - Демо версия"));
    assert!(html.contains("<title>Trading API - Демо версия - API Документация</title>"));
    assert_eq!(html.matches("<div class=\"endpoint\">").count(), doc.paths.len());
    assert_eq!(html.matches("<div class=\"endpoint\">").count(), 3);
}

#[test]
fn method_badges_follow_operations() {
    let html = page();
    assert_eq!(html.matches("<div class=\"method post\">POST</div>").count(), 2);
    assert_eq!(html.matches("<div class=\"method get\">GET</div>").count(), 2);
    assert!(!html.contains("<div class=\"method delete\">"));

    // POST is rendered before GET inside the /products card.
    let products = html.find("<div class=\"path\">/products</div>").expect("products card");
    let post = html.find("Создание продукта").expect("create summary");
    let get = html.find("Получение списка продуктов").expect("list summary");
    assert!(products < post && post < get);
}

#[test]
fn request_examples_are_pretty_printed() {
    let html = page();
    assert_eq!(html.matches("<strong>Пример запроса:</strong>").count(), 2);
    assert!(html.contains("<div class=\"code\">{\n  \"name\": \"iPhone 15 Pro\","));
    assert!(html.contains("\"address\": \"ул. Тверская, 1, Москва\""));
}

#[test]
fn servers_are_listed() {
    let html = page();
    assert!(html.contains(
        "<li><strong>https://api.portaldata.ru/v1/trading</strong> - Production server</li>"
    ));
    assert!(html.contains("<li><strong>http://localhost:8095</strong> - Local development server</li>"));
}

#[test]
fn schema_section_marks_required_fields_and_examples() {
    let html = page();
    let doc = build_document();

    assert_eq!(
        html.matches("<div class=\"schema\">").count(),
        doc.components.schemas.len()
    );

    let required_total: usize = doc
        .components
        .schemas
        .values()
        .map(|schema| schema.required.len())
        .sum();
    assert_eq!(
        html.matches("<span class=\"required\">(обязательное)</span>").count(),
        required_total
    );

    assert!(html.contains(
        "<strong>name</strong> <span class=\"type\">(string)</span> <span class=\"required\">(обязательное)</span> <span class=\"example\">пример: iPhone 15 Pro</span>"
    ));
    assert!(html.contains(
        "<strong>vat</strong> <span class=\"type\">(boolean)</span> <span class=\"example\">пример: true</span>"
    ));
}
