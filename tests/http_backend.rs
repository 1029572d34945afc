//! HTTP client tests against an in-process stub of the plant backend

use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use ecobloom::api::{ApiError, ClientConfig, HttpPlantApi, PlantApi};
use ecobloom::model::{NewPlant, Plant, PlantId, WateringTime};
use ecobloom::notice::Notice;
use ecobloom::session::Session;
use ecobloom::view::{render_garden, GardenView};

#[derive(Default)]
struct Backend {
    plants: Mutex<Vec<Plant>>,
}

type Shared = State<Arc<Backend>>;

async fn get_plants(State(backend): Shared) -> Json<Vec<Plant>> {
    Json(backend.plants.lock().unwrap().clone())
}

fn set_saved(backend: &Backend, id: u64, saved: bool) -> Json<Value> {
    let mut plants = backend.plants.lock().unwrap();
    match plants.iter_mut().find(|p| p.id == PlantId(id)) {
        Some(plant) => {
            plant.saved = saved;
            if !saved {
                plant.watering_status.reset();
            }
            let message = if saved { "Plant saved to garden" } else { "Plant removed from garden" };
            Json(json!({ "success": true, "message": message }))
        }
        None => Json(json!({ "success": false, "message": "Plant not found" })),
    }
}

async fn save_to_garden(State(backend): Shared, Path(id): Path<u64>) -> Json<Value> {
    set_saved(&backend, id, true)
}

async fn remove_from_garden(State(backend): Shared, Path(id): Path<u64>) -> Json<Value> {
    set_saved(&backend, id, false)
}

async fn update_watering(
    State(backend): Shared,
    Path(id): Path<u64>,
    Json(body): Json<Value>,
) -> Json<Value> {
    let time: WateringTime = match body["time_of_day"].as_str().map(str::parse) {
        Some(Ok(time)) => time,
        _ => return Json(json!({ "success": false, "message": "Invalid time_of_day" })),
    };

    let mut plants = backend.plants.lock().unwrap();
    match plants.iter_mut().find(|p| p.id == PlantId(id)) {
        Some(plant) => {
            plant.watering_status.mark(time);
            Json(json!({ "success": true, "message": "Watering status updated" }))
        }
        None => Json(json!({ "success": false })),
    }
}

async fn add_plant(State(backend): Shared, Json(new): Json<NewPlant>) -> Json<Value> {
    let mut plants = backend.plants.lock().unwrap();
    let id = plants.iter().map(|p| p.id.0).max().unwrap_or(0) + 1;
    let mut plant = Plant::new(id, new.name)
        .scientific_name(new.scientific_name)
        .watering_times(&new.watering_times);
    plant.watering_frequency = new.watering_frequency;
    plant.image = Some(new.image);
    plants.push(plant.clone());
    Json(json!({ "success": true, "plant": plant }))
}

async fn reset_watering(State(backend): Shared) -> Json<Value> {
    for plant in backend.plants.lock().unwrap().iter_mut() {
        plant.watering_status.reset();
    }
    Json(json!({ "success": true, "message": "Watering status reset" }))
}

fn catalog() -> Vec<Plant> {
    vec![
        Plant::new(1, "Aloe Vera")
            .scientific_name("Aloe barbadensis miller")
            .watering_times(&[WateringTime::Morning]),
        Plant::new(5, "Fern")
            .scientific_name("Nephrolepis exaltata")
            .watering_times(&[WateringTime::Morning, WateringTime::Evening])
            .saved(true),
    ]
}

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn start_backend(plants: Vec<Plant>) -> (String, Arc<Backend>) {
    let backend = Arc::new(Backend {
        plants: Mutex::new(plants),
    });

    let router = Router::new()
        .route("/get_plants", get(get_plants))
        .route("/save_to_garden/:id", post(save_to_garden))
        .route("/remove_from_garden/:id", post(remove_from_garden))
        .route("/update_watering/:id", post(update_watering))
        .route("/add_plant", post(add_plant))
        .route("/reset_watering_status", post(reset_watering))
        .with_state(backend.clone());

    (serve(router).await, backend)
}

fn client(base_url: String) -> HttpPlantApi {
    HttpPlantApi::new(ClientConfig {
        base_url,
        request_timeout_ms: 2_000,
    })
    .unwrap()
}

#[tokio::test]
async fn test_get_plants() {
    let (url, _) = start_backend(catalog()).await;
    let plants = client(url).get_plants().await.unwrap();
    assert_eq!(plants, catalog());
}

#[tokio::test]
async fn test_watering_sends_lowercase_slot() {
    let (url, backend) = start_backend(catalog()).await;
    let response = client(url)
        .update_watering(PlantId(5), WateringTime::Evening)
        .await
        .unwrap();
    assert!(response.success);

    let plants = backend.plants.lock().unwrap();
    assert!(plants[1].watering_status.evening);
    assert!(!plants[1].watering_status.morning);
}

#[tokio::test]
async fn test_session_against_backend() {
    let (url, backend) = start_backend(catalog()).await;
    let session = Session::new(client(url));

    session.load_catalog().await.unwrap();
    assert_eq!(session.store().len(), 2);

    let notice = session.toggle_save(PlantId(1)).await.unwrap();
    assert_eq!(notice, Some(Notice::success("Plant saved to garden")));

    let notice = session.mark_watering(PlantId(5), WateringTime::Evening).await.unwrap();
    assert_eq!(notice, Some(Notice::success("✅ Evening watering completed for Fern!")));

    match render_garden(&session.store()) {
        GardenView::Grid { cards } => assert_eq!(cards.len(), 2),
        other => panic!("expected garden grid, got {:?}", other),
    }

    // Removing resets the watering status on both sides
    session.toggle_save(PlantId(5)).await.unwrap();
    assert!(!session.snapshot(PlantId(5)).unwrap().watering_status.evening);
    assert!(!backend.plants.lock().unwrap()[1].watering_status.evening);
}

#[tokio::test]
async fn test_add_plant_uses_server_id() {
    let (url, _) = start_backend(catalog()).await;
    let session = Session::new(client(url));
    session.load_catalog().await.unwrap();

    let new = NewPlant {
        name: "Tulsi".to_string(),
        scientific_name: "Ocimum tenuiflorum".to_string(),
        image: String::new(),
        watering_frequency: "Daily".to_string(),
        watering_times: vec![WateringTime::Morning],
        sunlight: "Full".to_string(),
        soil: String::new(),
        fertilizer: String::new(),
        growth_type: String::new(),
        care_tips: String::new(),
    };
    let notice = session.add_plant(&new).await.unwrap();
    assert_eq!(notice, Some(Notice::success("✅ Plant added successfully!")));

    let tulsi = session.store().find_by_name("tulsi").cloned().unwrap();
    assert_eq!(tulsi.id, PlantId(6));
    assert!(tulsi.image_url().is_none());
}

#[tokio::test]
async fn test_reset_watering() {
    let mut plants = catalog();
    plants[1].watering_status.mark(WateringTime::Morning);
    let (url, _) = start_backend(plants).await;
    let session = Session::new(client(url));
    session.load_catalog().await.unwrap();
    assert!(session.snapshot(PlantId(5)).unwrap().watering_status.morning);

    session.reset_watering().await.unwrap();
    assert!(!session.snapshot(PlantId(5)).unwrap().watering_status.morning);
}

#[tokio::test]
async fn test_malformed_record_does_not_empty_catalog() {
    let router = Router::new().route(
        "/get_plants",
        get(|| async {
            Json(json!([
                { "id": 1, "name": "Aloe Vera", "watering_times": ["Morning"] },
                { "id": 2, "name": null, "watering_times": ["Evening"] },
                { "id": 3, "name": "Orchid", "watering_times": ["Midnight"] }
            ]))
        }),
    );
    let url = serve(router).await;

    let session = Session::new(client(url));
    session.load_catalog().await.unwrap();

    let store = session.store();
    let ids: Vec<PlantId> = store.plants().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![PlantId(1), PlantId(2)]);
    assert_eq!(store.get(PlantId(2)).unwrap().name, "");
}

#[tokio::test]
async fn test_server_error_maps_to_status() {
    let router = Router::new().route(
        "/get_plants",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "database offline") }),
    );
    let url = serve(router).await;

    let err = client(url.clone()).get_plants().await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Status {
            status: 500,
            message: "database offline".to_string()
        }
    );

    let session = Session::new(client(url));
    let err = session.load_catalog().await.unwrap_err();
    assert_eq!(
        err.notice(),
        Notice::error("Error loading plants. Please refresh the page.")
    );
    assert!(session.store().is_empty());
}

#[tokio::test]
async fn test_unreachable_backend() {
    // Port 9 (discard) is not expected to have an HTTP server
    let err = client("http://127.0.0.1:9".to_string()).get_plants().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}
