use std::fmt::Write as _;

use serde_json::Value;

use crate::errors::DemoResult;
use crate::models::{ApiDocument, Operation, Schema};

const STYLE: &str = r#"        body { font-family: Arial, sans-serif; margin: 0; padding: 20px; }
        .container { max-width: 1200px; margin: 0 auto; }
        .header { background: #f5f5f5; padding: 20px; border-radius: 5px; margin-bottom: 20px; }
        .endpoint { border: 1px solid #ddd; margin: 10px 0; border-radius: 5px; }
        .method { padding: 10px; font-weight: bold; color: white; }
        .get { background: #61affe; }
        .post { background: #49cc90; }
        .put { background: #fca130; }
        .patch { background: #50e3c2; }
        .delete { background: #f93e3e; }
        .path { padding: 10px; background: #f8f9fa; font-family: monospace; }
        .description { padding: 10px; }
        .examples { padding: 10px; background: #f8f9fa; }
        .example { margin: 10px 0; }
        .code { background: #2d3748; color: #e2e8f0; padding: 10px; border-radius: 3px; font-family: monospace; }
        .schemas { margin-top: 30px; }
        .schema { border: 1px solid #ddd; margin: 10px 0; border-radius: 5px; }
        .schema-header { padding: 10px; background: #f8f9fa; font-weight: bold; }
        .schema-body { padding: 10px; }
        .field { margin: 5px 0; padding: 5px; background: #f8f9fa; border-radius: 3px; }
        .type { color: #0066cc; font-weight: bold; }
        .required { color: #cc0000; font-weight: bold; }
        .example { color: #666; font-style: italic; }
"#;

/// Renders the human-readable documentation page for `doc`.
///
/// Layout: header, server list, one `<div class="endpoint">` per path, then the
/// schema reference. Output depends only on `doc`, so repeated renders are
/// byte-identical.
pub fn render_documentation(doc: &ApiDocument) -> DemoResult<String> {
    let title = escape(&doc.info.title);
    let description = escape(doc.info.description.as_deref().unwrap_or_default());
    let version = escape(&doc.info.version);

    let mut html = String::new();
    html.push_str("\n<!DOCTYPE html>\n<html lang=\"ru\">\n<head>\n");
    html.push_str("    <meta charset=\"UTF-8\">\n");
    html.push_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    writeln!(html, "    <title>{title} - API Документация</title>")?;
    html.push_str("    <style>\n");
    html.push_str(STYLE);
    html.push_str("    </style>\n</head>\n<body>\n    <div class=\"container\">\n");
    html.push_str("        <div class=\"header\">\n");
    writeln!(html, "            <h1>{title}</h1>")?;
    writeln!(html, "            <p>{description}</p>")?;
    writeln!(html, "            <p><strong>Версия:</strong> {version}</p>")?;
    html.push_str("        </div>\n\n");

    html.push_str("        <div class=\"info\">\n            <h2>📡 Серверы</h2>\n            <ul>\n");
    for server in &doc.servers {
        writeln!(
            html,
            "                <li><strong>{}</strong> - {}</li>",
            escape(&server.url),
            escape(server.description.as_deref().unwrap_or_default()),
        )?;
    }
    html.push_str("            </ul>\n        </div>\n\n        <h2>🚀 API Endpoints</h2>\n");

    for (path, item) in &doc.paths {
        html.push_str("        <div class=\"endpoint\">\n");
        for (method, operation) in item.operations() {
            writeln!(
                html,
                "            <div class=\"method {}\">{}</div>",
                method.as_str(),
                method.label()
            )?;
            writeln!(html, "            <div class=\"path\">{}</div>", escape(path))?;
            render_operation(&mut html, operation)?;
        }
        html.push_str("        </div>\n");
    }

    html.push_str("\n        <div class=\"schemas\">\n            <h2>📋 Схемы данных</h2>\n");
    for (name, schema) in &doc.components.schemas {
        render_schema(&mut html, name, schema)?;
    }
    html.push_str("\n        </div>\n    </div>\n</body>\n</html>\n");

    Ok(html)
}

fn render_operation(html: &mut String, operation: &Operation) -> DemoResult<()> {
    html.push_str("            <div class=\"description\">\n");
    writeln!(html, "                <strong>{}</strong><br>", escape(&operation.summary))?;
    writeln!(html, "                {}", escape(&operation.description))?;
    html.push_str("            </div>\n");

    if let Some(example) = operation.request_example() {
        let pretty = serde_json::to_string_pretty(example)?;
        html.push_str("            <div class=\"examples\">\n");
        html.push_str("                <strong>Пример запроса:</strong>\n");
        html.push_str("                <div class=\"example\">\n");
        writeln!(html, "                    <div class=\"code\">{}</div>", escape(&pretty))?;
        html.push_str("                </div>\n            </div>\n");
    }

    Ok(())
}

fn render_schema(html: &mut String, name: &str, schema: &Schema) -> DemoResult<()> {
    html.push_str("            <div class=\"schema\">\n");
    writeln!(html, "                <div class=\"schema-header\">{}</div>", escape(name))?;
    html.push_str("                <div class=\"schema-body\">\n");
    writeln!(html, "                    <strong>Тип:</strong> {}<br>", schema.type_label())?;

    if !schema.properties.is_empty() {
        html.push_str("                    <strong>Поля:</strong>\n");
        for (field_name, field) in &schema.properties {
            let required = if schema.is_required(field_name) {
                " <span class=\"required\">(обязательное)</span>"
            } else {
                ""
            };
            let example = field
                .example
                .as_ref()
                .map(|value| {
                    format!(
                        " <span class=\"example\">пример: {}</span>",
                        escape(&example_text(value))
                    )
                })
                .unwrap_or_default();

            html.push_str("                    <div class=\"field\">\n");
            writeln!(
                html,
                "                        <strong>{}</strong> <span class=\"type\">({})</span>{required}{example}",
                escape(field_name),
                escape(field.type_label()),
            )?;
            html.push_str("                    </div>\n");
        }
    }

    html.push_str("                </div>\n            </div>\n");
    Ok(())
}

/// Landing page of the docs server, linking the generated artifacts.
pub fn render_index(title: &str, links: &[(&str, &str)]) -> DemoResult<String> {
    let title = escape(title);
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    writeln!(html, "    <title>{title}</title>")?;
    html.push_str("    <meta charset=\"UTF-8\">\n    <style>\n");
    html.push_str("        body { font-family: Arial, sans-serif; margin: 40px; }\n");
    html.push_str("        h1 { color: #333; }\n");
    html.push_str("        .file-item { margin: 10px 0; }\n");
    html.push_str("        a { color: #0066cc; text-decoration: none; }\n");
    html.push_str("        a:hover { text-decoration: underline; }\n");
    html.push_str("    </style>\n</head>\n<body>\n");
    writeln!(html, "    <h1>📚 {title}</h1>")?;
    html.push_str("    <div class=\"file-list\">\n");
    for (href, label) in links {
        writeln!(
            html,
            "        <div class=\"file-item\"><a href=\"{}\">{}</a></div>",
            escape(href),
            escape(label)
        )?;
    }
    html.push_str("    </div>\n</body>\n</html>\n");
    Ok(html)
}

/// Strings print bare, everything else as compact JSON.
fn example_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}
