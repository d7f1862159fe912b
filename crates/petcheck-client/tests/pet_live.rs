//! Live `/v2/pet` suite — runs against a real Pet Store deployment.
//!
//! Ignored by default; run with `cargo test -- --ignored` once `base_url`
//! in the config points at a reachable server.

use rand::SeedableRng;
use rand::rngs::SmallRng;

use petcheck_client::api::pet::{
    add_pet, delete_pet, find_pets_by_status, get_pet, update_pet, update_pet_with_form,
};
use petcheck_client::{ApiClient, Pet, RequestLogger, clear_log_files};
use petcheck_core::checks::{ResponseExpectations, check_response};
use petcheck_core::{Config, NO_MISMATCH, Validator};

fn harness() -> (ApiClient, Validator, Config) {
    let config = Config::load_default().expect("config should load");
    clear_log_files(&config.log_dir).expect("log dir should be writable");
    let logger = RequestLogger::new(&config.log_dir, "api_pet").expect("logger");
    let client = ApiClient::new(&config).expect("client").with_logger(logger);
    let validator = Validator::new(&config.schema_db);
    (client, validator, config)
}

fn rng() -> SmallRng {
    SmallRng::from_entropy()
}

#[test]
#[ignore = "requires a live Pet Store deployment"]
fn add_pet_returns_created_pet() {
    let (client, _, _) = harness();
    let pet = Pet::random(&mut rng());

    let response = add_pet(&client, &pet.to_value()).expect("request");

    let id_fragment = format!("\"id\":{}", pet.id);
    let name_fragment = format!("\"name\":\"{}\"", pet.name);
    let status_fragment = format!("\"status\":\"{}\"", pet.status);
    let result = check_response(
        &response,
        &ResponseExpectations {
            status: Some(200),
            body_contains: &[&id_fragment, &name_fragment, &status_fragment, "\"photoUrls\"", "\"tags\""],
            ..Default::default()
        },
    );
    assert_eq!(result, NO_MISMATCH);

    delete_pet(&client, pet.id).expect("cleanup");
}

#[test]
#[ignore = "requires a live Pet Store deployment"]
fn add_pet_matches_schema_db() {
    let (client, validator, _) = harness();
    let pet = Pet::random(&mut rng());

    let response = add_pet(&client, &pet.to_value()).expect("request");
    let result = validator
        .validate("pet", "/v2/pet", "POST", Some(&response), false, true)
        .expect("schema lookup");
    assert_eq!(result, NO_MISMATCH);

    delete_pet(&client, pet.id).expect("cleanup");
}

#[test]
#[ignore = "requires a live Pet Store deployment"]
fn add_pet_without_id_is_assigned_one() {
    let (client, _, _) = harness();
    let mut payload = Pet::random(&mut rng()).to_value();
    payload.as_object_mut().expect("object payload").remove("id");

    let response = add_pet(&client, &payload).expect("request");
    assert_eq!(response.status, 200);

    let body = response.json().expect("json body");
    let assigned = body.get("id").and_then(|id| id.as_u64()).expect("assigned id");
    delete_pet(&client, assigned).expect("cleanup");
}

#[test]
#[ignore = "requires a live Pet Store deployment"]
fn add_pet_with_string_id_is_rejected() {
    let (client, _, _) = harness();
    let mut payload = Pet::random(&mut rng()).to_value();
    payload["id"] = serde_json::json!("bad");

    let response = add_pet(&client, &payload).expect("request");
    let result = check_response(
        &response,
        &ResponseExpectations {
            status: Some(500),
            body_contains: &["\"message\":\"something bad happened\""],
            ..Default::default()
        },
    );
    assert_eq!(result, NO_MISMATCH);
}

#[test]
#[ignore = "requires a live Pet Store deployment"]
fn put_update_changes_status() {
    let (client, _, _) = harness();
    let pet = Pet::random(&mut rng()).with_status("available");
    add_pet(&client, &pet.to_value()).expect("request");

    let updated = pet.clone().with_status("sold");
    let response = update_pet(&client, &updated.to_value()).expect("request");
    let result = check_response(
        &response,
        &ResponseExpectations {
            status: Some(200),
            body_contains: &["\"status\":\"sold\""],
            ..Default::default()
        },
    );
    assert_eq!(result, NO_MISMATCH);

    delete_pet(&client, pet.id).expect("cleanup");
}

#[test]
#[ignore = "requires a live Pet Store deployment"]
fn form_update_changes_name_and_status() {
    let (client, _, _) = harness();
    let pet = Pet::random(&mut rng()).with_status("available");
    add_pet(&client, &pet.to_value()).expect("request");

    let response = update_pet_with_form(&client, pet.id, "Renamed", "sold").expect("request");
    assert_eq!(response.status, 200);

    let response = get_pet(&client, pet.id).expect("request");
    let result = check_response(
        &response,
        &ResponseExpectations {
            status: Some(200),
            body_contains: &["\"name\":\"Renamed\"", "\"status\":\"sold\""],
            ..Default::default()
        },
    );
    assert_eq!(result, NO_MISMATCH);

    delete_pet(&client, pet.id).expect("cleanup");
}

#[test]
#[ignore = "requires a live Pet Store deployment"]
fn find_by_status_returns_matching_pets() {
    let (client, validator, _) = harness();
    let pet = Pet::random(&mut rng()).with_status("pending");
    add_pet(&client, &pet.to_value()).expect("request");

    let response = find_pets_by_status(&client, "pending").expect("request");
    assert_eq!(response.status, 200);
    let result = validator
        .validate("pet", "/v2/pet/findByStatus", "GET", Some(&response), false, false)
        .expect("schema lookup");
    assert_eq!(result, NO_MISMATCH);

    delete_pet(&client, pet.id).expect("cleanup");
}

#[test]
#[ignore = "requires a live Pet Store deployment"]
fn deleted_pet_is_gone() {
    let (client, _, _) = harness();
    let pet = Pet::random(&mut rng());

    add_pet(&client, &pet.to_value()).expect("request");
    let response = delete_pet(&client, pet.id).expect("request");
    assert_eq!(response.status, 200);

    let response = get_pet(&client, pet.id).expect("request");
    let result = check_response(
        &response,
        &ResponseExpectations {
            status: Some(404),
            body_contains: &["Pet not found"],
            ..Default::default()
        },
    );
    assert_eq!(result, NO_MISMATCH);
}
