use indexmap::IndexMap;
use serde_json::json;
use utoipa::openapi::info::{Info, InfoBuilder};
use utoipa::openapi::server::{Server, ServerBuilder};
use utoipa::openapi::tag::{Tag, TagBuilder};

use crate::models::{
	ApiDocument, Components, HttpMethod, MediaType, Operation, PathItem, RequestBody, Response,
	Schema, SecurityScheme,
};

pub const OPENAPI_VERSION: &str = "3.0.3";
pub const API_TITLE: &str = "Trading API - Демо версия";

/// The demo trading API document. Pure data: every call returns the same value.
pub fn build_document() -> ApiDocument {
	ApiDocument {
		openapi: OPENAPI_VERSION.to_string(),
		info: info(),
		servers: servers(),
		paths: paths(),
		components: components(),
		tags: tags(),
	}
}

fn info() -> Info {
	InfoBuilder::new()
		.title(API_TITLE)
		.description(Some(
			"API для торговой платформы с автоматически сгенерированными примерами",
		))
		.version("1.0.0")
		.build()
}

fn servers() -> Vec<Server> {
	vec![
		ServerBuilder::new()
			.url("https://api.portaldata.ru/v1/trading")
			.description(Some("Production server"))
			.build(),
		ServerBuilder::new()
			.url("http://localhost:8095")
			.description(Some("Local development server"))
			.build(),
	]
}

fn paths() -> IndexMap<String, PathItem> {
	let mut paths = IndexMap::new();
	paths.insert("/products".to_string(), products_path());
	paths.insert("/offers/public".to_string(), public_offers_path());
	paths.insert("/warehouses".to_string(), warehouses_path());
	paths
}

/// `{"success": true, "data": ...}` wrapper used by every 2xx response.
fn success_envelope(data: Schema) -> Schema {
	Schema::object()
		.property("success", Schema::boolean().example(true))
		.property("data", data)
}

fn products_path() -> PathItem {
	let create = Operation::new(
		"Products",
		"CreateProduct",
		"Создание продукта",
		"Создает новый продукт в системе. Требует аутентификации и валидации данных.",
	)
	.request_body(RequestBody::json(
		"Данные для создания продукта",
		MediaType::new(Schema::component("CreateProductRequest")).example(json!({
			"name": "iPhone 15 Pro",
			"brand": "Apple",
			"category": "Электроника",
			"description": "Смартфон премиум класса",
			"recommend_price": 99999.99,
			"vendor_article": "IP15PRO-256",
			"barcode": "1234567890123",
			"image_urls": ["https://example.com/iphone1.jpg"],
			"video_urls": ["https://example.com/iphone1.mp4"],
			"model_3d_urls": ["https://example.com/iphone1.obj"]
		})),
	))
	.response(
		"201",
		Response::json(
			"Продукт успешно создан",
			MediaType::new(success_envelope(Schema::component("Product"))).example(json!({
				"success": true,
				"data": {
					"id": 1,
					"name": "iPhone 15 Pro",
					"brand": "Apple",
					"category": "Электроника",
					"description": "Смартфон премиум класса",
					"recommend_price": 99999.99,
					"vendor_article": "IP15PRO-256",
					"barcode": "1234567890123",
					"image_urls": ["https://example.com/iphone1.jpg"],
					"video_urls": ["https://example.com/iphone1.mp4"],
					"model_3d_urls": ["https://example.com/iphone1.obj"],
					"user_id": 1,
					"created_at": "2025-01-01T00:00:00Z",
					"updated_at": "2025-01-01T00:00:00Z"
				}
			})),
		),
	)
	.response(
		"400",
		Response::json(
			"Некорректный запрос",
			MediaType::new(Schema::object().property(
				"error",
				Schema::string().example("Некорректный запрос"),
			)),
		),
	);

	let list = Operation::new(
		"Products",
		"ListProducts",
		"Получение списка продуктов",
		"Получает список всех продуктов с возможностью фильтрации. Поддерживает пагинацию и сортировку.",
	)
	.response(
		"200",
		Response::json(
			"Список продуктов",
			MediaType::new(success_envelope(Schema::array(Schema::component("Product")))).example(
				json!({
					"success": true,
					"data": [
						{
							"id": 1,
							"name": "iPhone 15 Pro",
							"brand": "Apple",
							"category": "Электроника",
							"recommend_price": 99999.99
						},
						{
							"id": 2,
							"name": "MacBook Pro 16",
							"brand": "Apple",
							"category": "Электроника",
							"recommend_price": 299999.99
						}
					]
				}),
			),
		),
	);

	PathItem::new()
		.with(HttpMethod::Post, create)
		.with(HttpMethod::Get, list)
}

fn public_offers_path() -> PathItem {
	let list = Operation::new(
		"Offers",
		"ListPublicOffers",
		"Публичные предложения",
		"Получает список публичных предложений. Доступно без аутентификации.",
	)
	.response(
		"200",
		Response::json(
			"Список публичных предложений",
			MediaType::new(success_envelope(Schema::array(Schema::component("Offer")))).example(
				json!({
					"success": true,
					"data": [
						{
							"id": 1,
							"product_id": 1,
							"type": "sale",
							"price": 99999.99,
							"lot_count": 5,
							"vat": true,
							"delivery_days": 3,
							"warehouse_id": 1
						}
					]
				}),
			),
		),
	);

	PathItem::new().with(HttpMethod::Get, list)
}

fn warehouses_path() -> PathItem {
	let create = Operation::new(
		"Warehouses",
		"CreateWarehouse",
		"Создание склада",
		"Создает новый склад. Требует валидации географических координат.",
	)
	.request_body(RequestBody::json(
		"Данные для создания склада",
		MediaType::new(Schema::component("CreateWarehouseRequest")).example(json!({
			"name": "Главный склад Москва",
			"address": "ул. Тверская, 1, Москва",
			"latitude": 55.7558,
			"longitude": 37.6176
		})),
	))
	.response(
		"201",
		Response::json(
			"Склад успешно создан",
			MediaType::new(success_envelope(Schema::component("Warehouse"))),
		),
	);

	PathItem::new().with(HttpMethod::Post, create)
}

fn components() -> Components {
	let mut schemas = IndexMap::new();
	schemas.insert("CreateProductRequest".to_string(), create_product_request());
	schemas.insert("Product".to_string(), product());
	schemas.insert("CreateWarehouseRequest".to_string(), create_warehouse_request());
	schemas.insert("Offer".to_string(), offer());

	let mut security_schemes = IndexMap::new();
	security_schemes.insert(
		"ApiKeyAuth".to_string(),
		SecurityScheme::api_key_header("X-API-KEY", "API ключ для аутентификации"),
	);

	Components {
		schemas,
		security_schemes,
	}
}

fn url_list(description: &str, example: &str) -> Schema {
	Schema::array(Schema::string())
		.description(description)
		.example(json!([example]))
}

fn create_product_request() -> Schema {
	Schema::object()
		.property(
			"name",
			Schema::string().description("Название продукта").example("iPhone 15 Pro"),
		)
		.property(
			"brand",
			Schema::string().description("Бренд продукта").example("Apple"),
		)
		.property(
			"category",
			Schema::string().description("Категория продукта").example("Электроника"),
		)
		.property(
			"description",
			Schema::string()
				.description("Описание продукта")
				.example("Смартфон премиум класса"),
		)
		.property(
			"recommend_price",
			Schema::number()
				.format("double")
				.description("Рекомендуемая цена")
				.minimum(0)
				.example(99999.99),
		)
		.property(
			"vendor_article",
			Schema::string().description("Артикул поставщика").example("IP15PRO-256"),
		)
		.property(
			"barcode",
			Schema::string().description("Штрих-код продукта").example("1234567890123"),
		)
		.property(
			"image_urls",
			url_list("URL изображений продукта", "https://example.com/iphone1.jpg"),
		)
		.property(
			"video_urls",
			url_list("URL видео продукта", "https://example.com/iphone1.mp4"),
		)
		.property(
			"model_3d_urls",
			url_list("URL 3D моделей продукта", "https://example.com/iphone1.obj"),
		)
		.required(["name", "brand", "category", "recommend_price"])
}

fn product() -> Schema {
	Schema::object()
		.property("id", Schema::integer().format("int64").example(1))
		.property(
			"name",
			Schema::string().description("Название продукта").example("iPhone 15 Pro"),
		)
		.property(
			"brand",
			Schema::string().description("Бренд продукта").example("Apple"),
		)
		.property(
			"category",
			Schema::string().description("Категория продукта").example("Электроника"),
		)
		.property(
			"description",
			Schema::string()
				.description("Описание продукта")
				.example("Смартфон премиум класса"),
		)
		.property(
			"recommend_price",
			Schema::number()
				.format("double")
				.description("Рекомендуемая цена")
				.example(99999.99),
		)
		.property("user_id", Schema::integer().format("int64").example(1))
		.property(
			"created_at",
			Schema::string()
				.format("date-time")
				.description("Дата создания")
				.example("2025-01-01T00:00:00Z"),
		)
		.property(
			"updated_at",
			Schema::string()
				.format("date-time")
				.description("Дата обновления")
				.example("2025-01-01T00:00:00Z"),
		)
}

fn create_warehouse_request() -> Schema {
	Schema::object()
		.property(
			"name",
			Schema::string()
				.description("Название склада")
				.example("Главный склад Москва"),
		)
		.property(
			"address",
			Schema::string()
				.description("Адрес склада")
				.example("ул. Тверская, 1, Москва"),
		)
		.property(
			"latitude",
			Schema::number()
				.format("double")
				.description("Широта")
				.minimum(-90)
				.maximum(90)
				.example(55.7558),
		)
		.property(
			"longitude",
			Schema::number()
				.format("double")
				.description("Долгота")
				.minimum(-180)
				.maximum(180)
				.example(37.6176),
		)
		.required(["name", "address", "latitude", "longitude"])
}

fn offer() -> Schema {
	Schema::object()
		.property("id", Schema::integer().format("int64").example(1))
		.property(
			"product_id",
			Schema::integer().format("int64").description("ID продукта").example(1),
		)
		.property(
			"type",
			Schema::string()
				.description("Тип предложения")
				.enum_values(["sale", "buy"])
				.example("sale"),
		)
		.property(
			"price",
			Schema::number()
				.format("double")
				.description("Цена предложения")
				.example(99999.99),
		)
		.property(
			"lot_count",
			Schema::integer()
				.description("Количество лотов")
				.minimum(1)
				.example(5),
		)
		.property(
			"vat",
			Schema::boolean().description("Включен ли НДС").example(true),
		)
		.property(
			"delivery_days",
			Schema::integer()
				.description("Дни доставки")
				.minimum(1)
				.maximum(365)
				.example(3),
		)
		.property(
			"warehouse_id",
			Schema::integer().format("int64").description("ID склада").example(1),
		)
}

fn tags() -> Vec<Tag> {
	[
		("Products", "Управление продуктами"),
		("Offers", "Управление предложениями"),
		("Warehouses", "Управление складами"),
		("Orders", "Управление заказами"),
	]
	.into_iter()
	.map(|(name, description)| TagBuilder::new().name(name).description(Some(description)).build())
	.collect()
}
