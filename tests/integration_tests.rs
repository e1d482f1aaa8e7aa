// Integration tests for Property Fit

use actix_web::test as actix_test;
use actix_web::{web, App};
use property_fit::config::RankingSettings;
use property_fit::core::Comparator;
use property_fit::models::{
    Category, Importance, ParkingKind, PreferenceProfile, PropertyCandidate, RankResponse,
    ScoreResult, WishLabel,
};
use property_fit::routes::{configure_routes, scoring::AppState};
use property_fit::services::ProfileSnapshot;
use serde_json::json;

fn create_candidate(id: &str, price: f64, station_minutes: f64, area_sqm: f64) -> PropertyCandidate {
    PropertyCandidate {
        id: id.to_string(),
        name: format!("Mansion {}", id),
        price,
        station_minutes,
        commute_minutes: vec![35.0, 50.0],
        area_sqm,
        floor: 7,
        corner_unit: false,
        features: [
            ("auto_lock".to_string(), true),
            ("delivery_box".to_string(), true),
            ("resident_manager".to_string(), false),
        ]
        .into_iter()
        .collect(),
        parking: ParkingKind::Mechanical,
        layout_note: "3LDK south-facing".to_string(),
        redevelopment: false,
    }
}

fn create_profile() -> PreferenceProfile {
    PreferenceProfile::new("C-1001")
        .with_importance(
            Importance::new()
                .with(Category::Price, 1)
                .with(Category::Location, 2)
                .with(Category::SizeLayout, 3)
                .with(Category::Spec, 4)
                .with(Category::Management, 5),
        )
        .with_budget(8000.0)
        .with_spec_label("auto_lock", WishLabel::Must)
        .with_spec_label("corner_unit", WishLabel::Want)
        .with_management_label("delivery_box", WishLabel::Want)
        .with_management_label("resident_manager", WishLabel::Neutral)
        .with_layout_wish("3LDK")
        .with_parking_required(ParkingKind::Offsite)
}

#[test]
fn test_integration_end_to_end_ranking() {
    let comparator = Comparator::new(create_profile());

    let mut corner = create_candidate("corner", 7000.0, 6.0, 72.0);
    corner.corner_unit = true;

    let mut no_lock = create_candidate("no-lock", 6500.0, 6.0, 72.0);
    no_lock.features.insert("auto_lock".to_string(), false);

    let candidates = vec![
        create_candidate("plain", 7000.0, 6.0, 72.0),
        corner,
        no_lock,
        create_candidate("far", 7000.0, 18.0, 72.0),
        create_candidate("over-budget", 11000.0, 6.0, 72.0),
    ];

    let result = comparator.rank(&candidates, 3);

    assert_eq!(result.total_candidates, 5);
    assert_eq!(result.results.len(), 3);
    assert_eq!(result.results[0].candidate_id, "corner");
    assert_eq!(result.results[1].candidate_id, "plain");

    for pair in result.results.windows(2) {
        assert!(pair[0].index >= pair[1].index);
    }

    for r in &result.results {
        assert!(r.index >= 50.0 && r.index <= 100.0);
        assert!(r.relative_index.is_none());
    }
}

#[test]
fn test_integration_scenario_values() {
    let comparator = Comparator::new(create_profile());
    let result = comparator.score(&create_candidate("plain", 7000.0, 6.0, 72.0));

    assert!((result.categories.price - 0.375).abs() < 1e-9);
    // station 6 -> 0.7, longest commute 50 -> 4/9
    let location = 0.6 * 0.7 + 0.4 * (1.0 - 50.0 / 90.0);
    assert!((result.categories.location - location).abs() < 1e-9);
    // area 72 -> 0.64, "3LDK" hits the note
    assert!((result.categories.size_layout - 0.69).abs() < 1e-9);
    // auto_lock must present 1.0, corner_unit want absent 0.0
    assert!((result.categories.spec - 0.5).abs() < 1e-9);
    // delivery_box 1.0, resident_manager 0.6; parking met
    assert!((result.categories.management - 0.8).abs() < 1e-9);

    let expected_fit = (5.0 * 0.375 + 4.0 * location + 3.0 * 0.69 + 2.0 * 0.5 + 1.0 * 0.8) / 15.0;
    assert!((result.fit - expected_fit).abs() < 1e-9);
    assert!((result.index - (50.0 + 50.0 * expected_fit)).abs() < 1e-9);
}

#[test]
fn test_integration_baseline_comparison() {
    let home = create_candidate("home", 6000.0, 12.0, 55.0);
    let comparator = Comparator::new(create_profile()).with_baseline(&home);

    let candidates = vec![
        home.clone(),
        create_candidate("upgrade", 6000.0, 4.0, 80.0),
        create_candidate("downgrade", 10500.0, 20.0, 45.0),
    ];

    let result = comparator.rank(&candidates, 10);

    assert!(result.baseline_fit.is_some());
    assert_eq!(result.results[0].candidate_id, "upgrade");
    assert_eq!(result.results[1].candidate_id, "home");
    assert_eq!(result.results[1].relative_index, Some(50.0));
    assert!(result.results[2].relative_index.unwrap() < 50.0);
}

#[test]
fn test_integration_snapshot_feeds_comparator() {
    let profile = create_profile();
    let json = ProfileSnapshot::save(&profile).unwrap();
    let restored = ProfileSnapshot::load(&json).unwrap();

    let candidate = create_candidate("plain", 7000.0, 6.0, 72.0);
    let before = Comparator::new(profile).score(&candidate);
    let after = Comparator::new(restored).score(&candidate);

    assert_eq!(before, after);
}

#[actix_web::test]
async fn test_integration_score_endpoint() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(AppState::default()))
            .configure(configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/score")
        .set_json(json!({
            "profile": {
                "clientId": "C-2002",
                "importance": { "price": 1 },
                "budgetLimit": 8000,
                "featureLabels": { "spec": { "auto_lock": "◎" } }
            },
            "candidate": {
                "id": "P-1",
                "price": 7000,
                "stationMinutes": 6,
                "areaSqm": 72
            }
        }))
        .to_request();

    let result: ScoreResult = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(result.candidate_id, "P-1");
    assert!((result.categories.price - 0.375).abs() < 1e-9);
    assert_eq!(result.unmet_musts, vec!["auto_lock".to_string()]);
    assert!(result.relative_index.is_none());
}

#[actix_web::test]
async fn test_integration_rank_endpoint_caps_limit() {
    let state = AppState {
        ranking: RankingSettings {
            default_limit: 2,
            max_limit: 3,
        },
    };
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_routes),
    )
    .await;

    let candidates: Vec<_> = (0..6)
        .map(|i| create_candidate(&format!("P-{}", i), 5000.0 + i as f64 * 500.0, 5.0, 70.0))
        .collect();

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/rank")
        .set_json(json!({
            "profile": create_profile(),
            "candidates": candidates,
            "baseline": create_candidate("home", 6000.0, 12.0, 55.0),
            "limit": 50
        }))
        .to_request();

    let response: RankResponse = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(response.total_candidates, 6);
    assert_eq!(response.results.len(), 3);
    assert!(response.baseline_fit.is_some());
    assert_eq!(response.results[0].candidate_id, "P-0");
}
