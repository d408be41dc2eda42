use std::cell::RefCell;
use std::rc::Rc;

use insta::assert_json_snapshot;
use serde_json::{Value, json};
use shared_lists_roulette::application::{ListService, mutation_message};
use shared_lists_roulette::domain::errors::{AppError, ItemError};
use shared_lists_roulette::domain::events::ItemsEvent;
use shared_lists_roulette::domain::items::{
    ClassTier, InMemoryItemRepository, Item, ItemId, ItemStatus, ListFilter, ListKind, Rating,
};
use shared_lists_roulette::infrastructure::api::{
    ApiAction, ApiRequest, HostMessage, ItemDto, decode_item, decode_items_response,
    decode_mutation_response,
};

const RESTAURANTS: &str = r#"{
    "success": true,
    "items": [
        {"id": 1, "nombre": "La Cabrera", "ubicacion": "Palermo", "estado": "visitado",
         "descripcion": "Bife enorme", "calificacion": 4, "clase": "a"},
        {"id": "2", "nombre": "  Don Julio ", "ubicacion": "", "estado": "pendiente",
         "calificacion": "", "clase": ""},
        {"id": 3, "nombre": "El Preferido", "estado": ""}
    ]
}"#;

#[test]
fn decodes_loose_spreadsheet_rows() {
    let items = decode_items_response(RESTAURANTS).unwrap();
    assert_eq!(items.len(), 3);

    let cabrera = &items[0];
    assert_eq!(cabrera.id, ItemId::from("1"));
    assert_eq!(cabrera.status, ItemStatus::Visited);
    assert_eq!(cabrera.rating, Rating::new(4));
    assert_eq!(cabrera.class_tier, Some(ClassTier::A));
    assert_eq!(cabrera.location.as_deref(), Some("Palermo"));

    let julio = &items[1];
    assert_eq!(julio.name, "Don Julio");
    assert_eq!(julio.location, None);
    assert_eq!(julio.rating.value(), 0);
    assert_eq!(julio.class_tier, None);

    assert_eq!(items[2].status, ItemStatus::Pending);
}

#[test]
fn unknown_status_is_reported() {
    let json = r#"{"success": true, "items": [{"id": 9, "nombre": "X", "estado": "quizas"}]}"#;
    assert_eq!(
        decode_items_response(json),
        Err(ItemError::UnknownStatus("quizas".to_string()))
    );
}

#[test]
fn nameless_rows_are_rejected() {
    let json = r#"{"success": true, "items": [{"id": 4, "nombre": "   "}]}"#;
    assert_eq!(decode_items_response(json), Err(ItemError::MissingName("4".to_string())));
}

#[test]
fn api_failures_surface_their_message() {
    let json = r#"{"success": false, "error": "Hoja no encontrada"}"#;
    assert_eq!(
        decode_items_response(json),
        Err(ItemError::Rejected("Hoja no encontrada".to_string()))
    );
    assert!(matches!(decode_items_response("not json"), Err(ItemError::Malformed(_))));
}

#[test]
fn fetch_request_shape() {
    let request: Value =
        serde_json::from_str(&ApiRequest::fetch(ListKind::Activities).to_json().unwrap()).unwrap();
    assert_json_snapshot!(request, @r###"
    {
      "action": "obtener",
      "tipo": "actividades"
    }
    "###);
}

#[test]
fn save_picks_add_or_update_by_id() {
    let fresh = Item::new("", "Museo", ItemStatus::Pending);
    let add: Value =
        serde_json::from_str(&ApiRequest::save(ListKind::Activities, &fresh).to_json().unwrap())
            .unwrap();
    assert_eq!(add["action"], json!("agregar"));
    assert_eq!(add["item"]["nombre"], json!("Museo"));
    assert_eq!(add["item"]["estado"], json!("pendiente"));
    assert!(add["item"].get("id").is_none());

    let known = Item::new("12", "Museo", ItemStatus::Visited).with_class_tier(ClassTier::S);
    let update: Value =
        serde_json::from_str(&ApiRequest::save(ListKind::Activities, &known).to_json().unwrap())
            .unwrap();
    assert_eq!(update["action"], json!("actualizar"));
    assert_eq!(update["item"]["id"], json!("12"));
    assert_eq!(update["item"]["clase"], json!("S"));

    let delete: Value = serde_json::from_str(
        &ApiRequest::delete(ListKind::Restaurants, &ItemId::from("12")).to_json().unwrap(),
    )
    .unwrap();
    assert_eq!(delete, json!({"action": "eliminar", "tipo": "restaurantes", "id": "12"}));
}

#[test]
fn service_builds_views_and_pool() {
    let mut service = ListService::new(InMemoryItemRepository::new());
    assert_eq!(service.load_response(ListKind::Restaurants, RESTAURANTS), Ok(3));

    let names: Vec<String> = service
        .visible_items(ListKind::Restaurants, ListFilter::All)
        .into_iter()
        .map(|i| i.name)
        .collect();
    assert_eq!(names, ["Don Julio", "El Preferido", "La Cabrera"]);

    let visited = service.visible_items(ListKind::Restaurants, ListFilter::Visited);
    assert_eq!(visited.len(), 1);

    let pool = service.roulette_pool(ListKind::Restaurants);
    assert_eq!(pool.len(), 2);
    assert!(pool.iter().all(|c| c.status == ItemStatus::Pending));
    assert!(service.roulette_pool(ListKind::Activities).is_empty());
}

#[test]
fn failed_load_keeps_previous_contents() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut service = ListService::new(InMemoryItemRepository::new());
    let sink = seen.clone();
    service.events_mut().subscribe_to_items_events(move |e| sink.borrow_mut().push(e.clone()));

    service.load_response(ListKind::Restaurants, RESTAURANTS).unwrap();
    let err = service
        .load_response(ListKind::Restaurants, r#"{"success": false, "error": "cuota"}"#)
        .unwrap_err();

    assert_eq!(err, AppError::Items(ItemError::Rejected("cuota".to_string())));
    assert_eq!(service.visible_items(ListKind::Restaurants, ListFilter::All).len(), 3);
    let seen = seen.borrow();
    assert_eq!(seen[0], ItemsEvent::ItemsLoaded { kind: ListKind::Restaurants, count: 3 });
    assert!(matches!(seen[1], ItemsEvent::ItemsRejected { kind: ListKind::Restaurants, .. }));
}

#[test]
fn form_items_become_save_payloads() {
    let mut service = ListService::new(InMemoryItemRepository::new());
    service.load_response(ListKind::Restaurants, RESTAURANTS).unwrap();

    let fresh = r#"{"nombre": " Café Tortoni ", "ubicacion": "Centro", "estado": "pendiente",
                    "descripcion": "", "calificacion": 0}"#;
    let add = service.save_request(ListKind::Restaurants, fresh).unwrap();
    assert_eq!(add.action, ApiAction::Add);
    let payload: Value = serde_json::from_str(&add.to_json().unwrap()).unwrap();
    assert_eq!(payload["tipo"], json!("restaurantes"));
    assert_eq!(payload["item"]["nombre"], json!("Café Tortoni"));
    assert!(payload["item"].get("descripcion").is_none());

    let edited = r#"{"id": "2", "nombre": "Don Julio", "estado": "visitado", "calificacion": 5}"#;
    let update = service.save_request(ListKind::Restaurants, edited).unwrap();
    assert_eq!(update.action, ApiAction::Update);
    let item = update.item.unwrap();
    assert_eq!(item.status.as_deref(), Some("visitado"));

    let nameless = service.save_request(ListKind::Restaurants, r#"{"nombre": ""}"#);
    assert_eq!(nameless, Err(AppError::Items(ItemError::MissingName(String::new()))));
}

#[test]
fn single_item_decoding_is_strict() {
    let item = decode_item(r#"{"id": 7, "nombre": "Cine", "tipo": "🎬 Cine", "clase": "b"}"#)
        .unwrap();
    assert_eq!(item.activity_type.as_deref(), Some("🎬 Cine"));
    assert_eq!(item.class_tier, Some(ClassTier::B));
    assert_eq!(
        decode_item(r#"{"nombre": "X", "clase": "Z"}"#),
        Err(ItemError::UnknownClassTier("Z".to_string()))
    );
}

#[test]
fn edit_and_delete_reach_the_host() {
    let mut service = ListService::new(InMemoryItemRepository::new());
    service.load_response(ListKind::Restaurants, RESTAURANTS).unwrap();

    let cabrera = service.find(ListKind::Restaurants, &ItemId::from("1")).unwrap();
    assert!(service.find(ListKind::Activities, &ItemId::from("1")).is_none());

    let edit = HostMessage::Edit {
        tipo: ListKind::Restaurants,
        item: ItemDto::from_domain_item(&cabrera),
    };
    let edit: Value = serde_json::from_str(&edit.to_json().unwrap()).unwrap();
    assert_eq!(edit["event"], json!("edit"));
    assert_eq!(edit["item"]["id"], json!("1"));
    assert_eq!(edit["item"]["calificacion"], json!(4.0));

    let request = service.delete_request(ListKind::Restaurants, &cabrera.id);
    let delete: Value =
        serde_json::from_str(&HostMessage::Request { request }.to_json().unwrap()).unwrap();
    assert_eq!(
        delete,
        json!({
            "event": "request",
            "request": {"action": "eliminar", "tipo": "restaurantes", "id": "1"}
        })
    );
}

#[test]
fn mutation_answers_pick_their_toast() {
    let ok = decode_mutation_response(r#"{"success": true}"#);
    assert_eq!(mutation_message(ApiAction::Add, ListKind::Activities, &ok), "Actividad agregada 🎉");
    assert_eq!(
        mutation_message(ApiAction::Update, ListKind::Restaurants, &ok),
        "Restaurante actualizado ✅"
    );
    assert_eq!(mutation_message(ApiAction::Delete, ListKind::Restaurants, &ok), "Eliminado 🗑️");

    let rejected = decode_mutation_response(r#"{"success": false, "error": "Fila ocupada"}"#);
    assert_eq!(
        mutation_message(ApiAction::Delete, ListKind::Activities, &rejected),
        "Error: Fila ocupada"
    );
    let broken = decode_mutation_response("<html>");
    assert_eq!(
        mutation_message(ApiAction::Add, ListKind::Activities, &broken),
        "Error de conexión 😵"
    );

    assert_eq!(ApiAction::parse("actualizar"), Ok(ApiAction::Update));
    assert!(ApiAction::parse("borrar").is_err());
}
