//! Integration tests of the listing loading and creation against a mocked
//! backend.
//!
//! Uses `wiremock` in place of the listing backend and the geocoder, so no
//! real network traffic is made.

use std::time::Duration;

use serde_json::json;
use service::{
    command::{
        submit_manual_listing, ApplyFilter, StageListing, SubmitManualListing,
        SubmitPendingListing,
    },
    domain::{
        form::{self, ValidationError},
        listing, Coordinates,
    },
    infra::{geocoder::nominatim, Http, Nominatim},
    query,
    read::{self, listing::TypeFilter, map, Criterion},
    store::Notice,
    task::Background,
    Command as _, Config, Query as _, Service,
};
use wiremock::{
    matchers::{body_json, method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Builds a [`Service`] talking to the provided mocked backend.
fn service(backend: &MockServer) -> (Service<Http, Nominatim>, Background) {
    let config = Config {
        map: map::Settings {
            center: Coordinates::new(28.6139, 77.209).unwrap(),
            zoom: 11,
            fly_to_zoom: 14,
            fly_to_duration: Duration::from_millis(1200),
        },
    };
    let geocoder = Nominatim::new(nominatim::Config {
        url: "http://127.0.0.1:9/search".into(),
        country_codes: "in".into(),
        language: "en-IN".into(),
        user_agent: "GeoEstate-Test".into(),
    })
    .unwrap();

    Service::new(config, Http::new(&backend.uri()).unwrap(), geocoder)
}

/// Three seeded backend listings: two for rent, one for sale.
fn seeded() -> serde_json::Value {
    json!([
        {
            "id": 1, "lat": 28.6139, "lng": 77.209,
            "title": "Room near college", "price": "₹6,000/mo",
            "area": "1 Room", "type": "rent",
        },
        {
            "id": 2, "lat": 28.7041, "lng": 77.1025,
            "title": "3 BHK Family Flat", "price": "₹20,000/mo",
            "area": "1350 sqft", "type": "rent",
        },
        {
            "id": 3, "lat": 28.5355, "lng": 77.391,
            "title": "Residential Plot", "price": "₹45 Lakh",
            "area": "200 sqyd", "type": "sale",
        },
    ])
}

async fn mount_listings(server: &MockServer, listings: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/api/properties"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listings))
        .expect(1)
        .mount(server)
        .await;
}

fn manual(title: &str, lat: &str, lng: &str) -> form::Manual {
    form::Manual {
        title: title.into(),
        price: "₹45 Lakh".into(),
        area: "200 sqyd".into(),
        kind: form::Kind(listing::Kind::Sale),
        lat: lat.into(),
        lng: lng.into(),
    }
}

async fn ids(svc: &Service<Http, Nominatim>) -> Vec<i64> {
    svc.store()
        .read()
        .await
        .listings()
        .iter()
        .map(|l| l.id.into())
        .collect()
}

#[tokio::test]
async fn loads_listings_once_on_start() {
    let server = MockServer::start().await;
    mount_listings(&server, seeded()).await;

    let (svc, bg) = service(&server);
    bg.await.unwrap();

    assert_eq!(ids(&svc).await, [1, 2, 3]);
}

#[tokio::test]
async fn failed_load_leaves_store_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/properties"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let (svc, bg) = service(&server);
    bg.await.unwrap();

    assert!(ids(&svc).await.is_empty());
    assert!(svc.store().read().await.notice().is_none());
}

#[tokio::test]
async fn rent_filter_renders_only_rent_markers() {
    let server = MockServer::start().await;
    mount_listings(&server, seeded()).await;
    let (svc, bg) = service(&server);
    bg.await.unwrap();

    svc.execute(ApplyFilter(Criterion {
        kind: TypeFilter::Rent,
        text: String::new(),
    }))
    .await
    .unwrap();

    let view: map::View = svc.execute(query::map::View::new()).await.unwrap();
    let markers: Vec<i64> = view.markers.iter().map(|m| m.id.into()).collect();
    assert_eq!(markers, [1, 2]);
    assert!(view.markers.iter().all(|m| m.badge == "RENT"));

    let read::listing::Visible(visible) =
        svc.execute(query::listings::Visible::new()).await.unwrap();
    assert_eq!(visible.len(), 2);
}

#[tokio::test]
async fn stored_listing_replaces_temporary_one() {
    let server = MockServer::start().await;
    mount_listings(&server, seeded()).await;
    Mock::given(method("POST"))
        .and(path("/api/properties"))
        .and(body_json(json!({
            "title": "Corner Plot",
            "price": "₹45 Lakh",
            "area": "200 sqyd",
            "type": "sale",
            "lat": 28.1,
            "lng": 77.1,
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 42, "lat": 28.1, "lng": 77.1,
            "title": "Corner Plot", "price": "₹45 Lakh",
            "area": "200 sqyd", "type": "sale",
        })))
        .expect(1)
        .mount(&server)
        .await;
    let (svc, bg) = service(&server);
    bg.await.unwrap();

    let listing = svc
        .execute(SubmitManualListing(manual(" Corner Plot ", "28.1", "77.1")))
        .await
        .unwrap();

    assert_eq!(i64::from(listing.id), 42);
    assert_eq!(ids(&svc).await, [1, 2, 3, 42]);
    assert!(svc.store().read().await.notice().is_none());
}

#[tokio::test]
async fn failed_save_rolls_back_and_notices() {
    let server = MockServer::start().await;
    mount_listings(&server, seeded()).await;
    Mock::given(method("POST"))
        .and(path("/api/properties"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    let (svc, bg) = service(&server);
    bg.await.unwrap();

    let err = svc
        .execute(SubmitManualListing(manual("Corner Plot", "28.1", "77.1")))
        .await
        .unwrap_err();

    assert!(matches!(
        err.as_ref(),
        submit_manual_listing::ExecutionError::Backend(_),
    ));
    assert_eq!(ids(&svc).await, [1, 2, 3]);
    assert_eq!(
        svc.store().read().await.notice().copied(),
        Some(Notice::SaveFailed),
    );
}

#[tokio::test]
async fn invalid_form_creates_nothing() {
    let server = MockServer::start().await;
    mount_listings(&server, json!([])).await;
    Mock::given(method("POST"))
        .and(path("/api/properties"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;
    let (svc, bg) = service(&server);
    bg.await.unwrap();

    let err = svc
        .execute(SubmitManualListing(manual("", "28.1", "77.1")))
        .await
        .unwrap_err();

    assert!(matches!(
        err.as_ref(),
        submit_manual_listing::ExecutionError::Invalid(
            ValidationError::EmptyTitle
        ),
    ));
    assert!(ids(&svc).await.is_empty());
    assert_eq!(
        svc.store().read().await.notice().copied(),
        Some(Notice::Rejected(ValidationError::EmptyTitle)),
    );
}

#[tokio::test]
async fn pending_listing_is_kept_until_saved() {
    let server = MockServer::start().await;
    mount_listings(&server, json!([])).await;
    let (svc, bg) = service(&server);
    bg.await.unwrap();
    let at = Coordinates::new(28.45, 77.02).unwrap();
    let fields = || form::Fields {
        title: "Studio".into(),
        ..form::Fields::default()
    };

    let err = svc
        .execute(SubmitPendingListing(fields()))
        .await
        .unwrap_err();
    assert!(matches!(
        err.as_ref(),
        submit_manual_listing::ExecutionError::Invalid(
            ValidationError::NoLocation
        ),
    ));

    svc.execute(StageListing { location: at }).await.unwrap();
    let failing = Mock::given(method("POST"))
        .and(path("/api/properties"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount_as_scoped(&server)
        .await;
    _ = svc
        .execute(SubmitPendingListing(fields()))
        .await
        .unwrap_err();
    drop(failing);
    assert_eq!(svc.store().read().await.pending().unwrap().location, at);

    Mock::given(method("POST"))
        .and(path("/api/properties"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 5, "lat": 28.45, "lng": 77.02,
            "title": "Studio", "price": "", "area": "", "type": "rent",
        })))
        .expect(1)
        .mount(&server)
        .await;
    let listing = svc.execute(SubmitPendingListing(fields())).await.unwrap();

    assert_eq!(listing.location, at);
    assert_eq!(ids(&svc).await, [5]);
    assert!(svc.store().read().await.pending().is_none());
}
