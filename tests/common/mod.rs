#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use chrono::Utc;
use rust_decimal::Decimal;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;
use uuid::Uuid;

use jeep_sales::models::{
    Color, Customer, Engine, Jeep, JeepModel, NewOrder, Order, OrderOption, OrderParts, Tire,
};
use jeep_sales::repositories::JeepSalesRepository;
use jeep_sales::routes::create_router;
use jeep_sales::state::AppState;
use jeep_sales::utils::errors::{AppError, AppResult};

/// Qué hace `fetch_jeeps` en el repositorio de pruebas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchBehavior {
    Normal,
    DatabaseError,
    Panic,
}

struct Tables {
    models: Vec<Jeep>,
    customers: HashMap<String, Customer>,
    colors: HashMap<String, Color>,
    engines: HashMap<String, Engine>,
    tires: HashMap<String, Tire>,
    options: HashMap<String, OrderOption>,
    orders: Vec<Order>,
    order_options: Vec<(Uuid, String)>,
}

/// Repositorio en memoria con las mismas reglas que el esquema PostgreSQL:
/// foreign keys sobre el catálogo y escritura todo-o-nada de los pedidos.
pub struct InMemoryJeepSalesRepository {
    tables: Mutex<Tables>,
    fetch_calls: AtomicUsize,
    save_calls: AtomicUsize,
    fetch_behavior: Mutex<FetchBehavior>,
}

impl InMemoryJeepSalesRepository {
    pub fn seeded() -> Self {
        let models = [
            (1, JeepModel::Wrangler, "Sport", 2, 17, 2847500),
            (2, JeepModel::Wrangler, "Sport", 4, 17, 3197500),
            (3, JeepModel::Wrangler, "Sport S", 2, 17, 3147500),
            (4, JeepModel::Wrangler, "Sport S", 4, 17, 3497500),
            (5, JeepModel::Wrangler, "Rubicon", 2, 17, 4039500),
            (6, JeepModel::Wrangler, "Rubicon", 4, 17, 4389500),
            (7, JeepModel::Gladiator, "Sport", 4, 17, 3394500),
            (8, JeepModel::Gladiator, "Sport S", 4, 17, 3754500),
            (9, JeepModel::Gladiator, "Rubicon", 4, 17, 4614500),
        ]
        .into_iter()
        .map(|(pk, model_id, trim, doors, wheels, cents)| Jeep {
            model_pk: pk,
            model_id,
            trim_level: trim.to_string(),
            num_doors: doors,
            wheel_size: wheels,
            base_price: Decimal::new(cents, 2),
        })
        .collect();

        let price = |cents: i64| Decimal::new(cents, 2);

        let customers = [
            ("ROTH_GARTH", "Garth", "Roth", "555-555-1212"),
            ("STERN_TORO", "Toro", "Stern", "555-555-2323"),
            ("MORISON_LINA", "Lina", "Morison", "555-555-3434"),
        ]
        .into_iter()
        .map(|(id, first, last, phone)| {
            (
                id.to_string(),
                Customer {
                    customer_id: id.to_string(),
                    first_name: first.to_string(),
                    last_name: last.to_string(),
                    phone: phone.to_string(),
                },
            )
        })
        .collect();

        let colors = [
            ("EXT_SLATE_BLUE", "Slate Blue Pearl", 49500),
            ("EXT_FIRECRACKER_RED", "Firecracker Red", 0),
            ("EXT_BRIGHT_WHITE", "Bright White", 0),
        ]
        .into_iter()
        .map(|(id, name, cents)| {
            (
                id.to_string(),
                Color {
                    color_id: id.to_string(),
                    color: name.to_string(),
                    price: price(cents),
                    is_exterior: true,
                },
            )
        })
        .collect();

        let engines = [
            ("6_4_GAS", "6.4L V8", 640, 650000),
            ("3_6_GAS", "3.6L V6", 360, 0),
            ("2_0_TURBO", "2.0L I4 Turbo", 200, 149500),
        ]
        .into_iter()
        .map(|(id, name, liters, cents)| {
            (
                id.to_string(),
                Engine {
                    engine_id: id.to_string(),
                    name: name.to_string(),
                    size_in_liters: Decimal::new(liters, 2),
                    fuel_type: "GASOLINE".to_string(),
                    price: price(cents),
                },
            )
        })
        .collect();

        let tires = [
            ("295_YOKOHAMA", "295/70R17", "Yokohama", 50000, 120000),
            ("255_GOODYEAR", "255/75R17", "Goodyear", 60000, 0),
        ]
        .into_iter()
        .map(|(id, size, manufacturer, warranty, cents)| {
            (
                id.to_string(),
                Tire {
                    tire_id: id.to_string(),
                    tire_size: size.to_string(),
                    manufacturer: manufacturer.to_string(),
                    warranty_miles: warranty,
                    price: price(cents),
                },
            )
        })
        .collect();

        let options = [
            ("DOOR_QUAD_4", "DOOR", "Mopar", "Four door conversion", 149500),
            ("EXT_AEV_LIFT", "EXTERIOR", "AEV", "Lift kit", 189500),
            ("EXT_WARN_WINCH", "EXTERIOR", "Warn", "Winch", 125000),
            ("EXT_WARN_BUMPER_FRONT", "EXTERIOR", "Warn", "Front bumper", 99500),
            ("EXT_WARN_BUMPER_REAR", "EXTERIOR", "Warn", "Rear bumper", 89500),
            ("EXT_ARB_COMPRESSOR", "EXTERIOR", "ARB", "Air compressor", 69500),
            ("STOR_ROLL_CARGO", "STORAGE", "Roll-N-Lock", "Rolling cargo cover", 129500),
        ]
        .into_iter()
        .map(|(id, category, manufacturer, name, cents)| {
            (
                id.to_string(),
                OrderOption {
                    option_id: id.to_string(),
                    category: category.to_string(),
                    manufacturer: manufacturer.to_string(),
                    name: name.to_string(),
                    price: price(cents),
                },
            )
        })
        .collect();

        Self {
            tables: Mutex::new(Tables {
                models,
                customers,
                colors,
                engines,
                tires,
                options,
                orders: Vec::new(),
                order_options: Vec::new(),
            }),
            fetch_calls: AtomicUsize::new(0),
            save_calls: AtomicUsize::new(0),
            fetch_behavior: Mutex::new(FetchBehavior::Normal),
        }
    }

    pub fn set_fetch_behavior(&self, behavior: FetchBehavior) {
        *self.fetch_behavior.lock().unwrap() = behavior;
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn save_calls(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }

    pub fn orders_count(&self) -> usize {
        self.tables.lock().unwrap().orders.len()
    }

    pub fn order_options_count(&self) -> usize {
        self.tables.lock().unwrap().order_options.len()
    }
}

fn fk_violation(table: &str, value: &str) -> AppError {
    AppError::OrderPersistence(format!(
        "insert violates foreign key constraint on {} ({})",
        table, value
    ))
}

#[async_trait]
impl JeepSalesRepository for InMemoryJeepSalesRepository {
    async fn fetch_jeeps(&self, model: JeepModel, trim: &str) -> AppResult<Vec<Jeep>> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);

        let behavior = *self.fetch_behavior.lock().unwrap();
        match behavior {
            FetchBehavior::DatabaseError => return Err(AppError::Database(sqlx::Error::PoolTimedOut)),
            FetchBehavior::Panic => panic!("D'oh!"),
            FetchBehavior::Normal => {}
        }

        // Orden inverso de inserción: el servicio es quien ordena
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .models
            .iter()
            .rev()
            .filter(|j| j.model_id == model && j.trim_level == trim)
            .cloned()
            .collect())
    }

    async fn save_order(&self, order: &NewOrder) -> AppResult<Order> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        let mut tables = self.tables.lock().unwrap();

        let variant = tables
            .models
            .iter()
            .filter(|j| {
                j.model_id == order.model && j.trim_level == order.trim && j.num_doors == order.doors
            })
            .min_by_key(|j| j.model_pk)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("No jeep found with model={}", order.model)))?;

        let customer = tables
            .customers
            .get(&order.customer)
            .cloned()
            .ok_or_else(|| fk_violation("customers", &order.customer))?;
        let color = tables
            .colors
            .get(&order.color)
            .cloned()
            .ok_or_else(|| fk_violation("colors", &order.color))?;
        let engine = tables
            .engines
            .get(&order.engine)
            .cloned()
            .ok_or_else(|| fk_violation("engines", &order.engine))?;
        let tire = tables
            .tires
            .get(&order.tire)
            .cloned()
            .ok_or_else(|| fk_violation("tires", &order.tire))?;

        // Las filas se preparan aparte y solo se publican si todo fue bien
        let order_id = Uuid::new_v4();
        let mut staged = Vec::with_capacity(order.options.len());
        let mut options = Vec::with_capacity(order.options.len());
        for option in &order.options {
            let row = tables
                .options
                .get(option)
                .cloned()
                .ok_or_else(|| fk_violation("options", option))?;
            staged.push((order_id, option.clone()));
            options.push(row);
        }

        let parts = OrderParts {
            customer,
            model: variant,
            color,
            engine,
            tire,
            options,
        };
        let saved = Order::from_parts(order_id, Utc::now(), parts);

        tables.orders.push(saved.clone());
        tables.order_options.extend(staged);
        Ok(saved)
    }
}

pub fn test_app(repository: Arc<InMemoryJeepSalesRepository>) -> Router {
    create_router(AppState::new(repository))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

/// El payload de error tiene exactamente los cinco campos del contrato
pub fn assert_error_payload(body: &Value, status: StatusCode, uri: &str) {
    let object = body.as_object().expect("error payload must be a JSON object");
    assert_eq!(object.len(), 5, "unexpected payload fields: {}", body);
    assert!(body["message"].is_string());
    assert_eq!(body["status code"], status.as_u16());
    assert_eq!(body["uri"], uri);
    assert!(body["timestamp"].as_str().map(|t| t.ends_with(" GMT")).unwrap_or(false));
    assert_eq!(body["reason"], status.canonical_reason().unwrap());
}
