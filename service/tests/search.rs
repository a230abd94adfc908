//! Integration tests of the place search against a mocked Nominatim.

use std::time::Duration;

use serde_json::json;
use service::{
    command::{search_place, SearchPlace},
    domain::{Coordinates, SearchResult},
    infra::{geocoder::nominatim, Http, Nominatim},
    read::map,
    store::Notice,
    Command as _, Config, Service,
};
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

/// Builds a [`Service`] geocoding with the provided mocked Nominatim.
///
/// The listing backend is never started, so loading listings is skipped.
fn service(geocoder: &MockServer) -> Service<Http, Nominatim> {
    let config = Config {
        map: map::Settings {
            center: Coordinates::new(28.6139, 77.209).unwrap(),
            zoom: 11,
            fly_to_zoom: 14,
            fly_to_duration: Duration::from_millis(1200),
        },
    };
    let geocoder = Nominatim::new(nominatim::Config {
        url: format!("{}/search", geocoder.uri()),
        country_codes: "in".into(),
        language: "en-IN".into(),
        user_agent: "GeoEstate-Demo".into(),
    })
    .unwrap();

    let (svc, _) =
        Service::new(config, Http::new("http://127.0.0.1:9").unwrap(), geocoder);
    svc
}

fn search(query: &str) -> SearchPlace {
    SearchPlace {
        query: query.into(),
    }
}

#[tokio::test]
async fn normalizes_polygon_outline() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Connaught Place"))
        .and(query_param("format", "jsonv2"))
        .and(query_param("addressdetails", "1"))
        .and(query_param("polygon_geojson", "1"))
        .and(query_param("limit", "1"))
        .and(query_param("countrycodes", "in"))
        .and(header("accept-language", "en-IN"))
        .and(header("user-agent", "GeoEstate-Demo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "lat": "28.6315",
            "lon": "77.2167",
            "display_name": "Connaught Place, New Delhi, Delhi, India",
            "geojson": {
                "type": "Polygon",
                "coordinates": [[[77.1, 28.6], [77.2, 28.6], [77.2, 28.7]]],
            },
        }])))
        .expect(1)
        .mount(&server)
        .await;
    let svc = service(&server);

    let result = svc.execute(search("Connaught Place")).await.unwrap();

    let SearchResult::Polygon { ring, .. } = &result else {
        panic!("expected polygon, got: {result:?}");
    };
    assert_eq!(
        serde_json::to_value(ring).unwrap(),
        json!([[28.6, 77.1], [28.6, 77.2], [28.7, 77.2]]),
    );

    let state = svc.store().read().await;
    assert_eq!(state.center(), Coordinates::new(28.6315, 77.2167).unwrap());
    assert_eq!(state.center_revision(), 1);
    assert_eq!(state.search_result(), Some(&result));
}

#[tokio::test]
async fn point_geometry_yields_point() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "lat": "26.7606",
            "lon": "83.3732",
            "display_name": "Gorakhpur, Uttar Pradesh, India",
            "geojson": {"type": "Point", "coordinates": [83.3732, 26.7606]},
        }])))
        .mount(&server)
        .await;
    let svc = service(&server);

    let result = svc.execute(search("Gorakhpur")).await.unwrap();

    assert!(matches!(result, SearchResult::Point { .. }));
    assert_eq!(result.label().to_string(), "Gorakhpur, Uttar Pradesh, India");
}

#[tokio::test]
async fn polygon_with_altitude_keeps_outline() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "lat": "28.6315",
            "lon": "77.2167",
            "display_name": "Connaught Place, New Delhi, Delhi, India",
            "geojson": {
                "type": "Polygon",
                "coordinates": [
                    [[77.1, 28.6, 216.0], [77.2, 28.6, 216.0], [77.2, 28.7, 216.0]],
                ],
            },
        }])))
        .mount(&server)
        .await;
    let svc = service(&server);

    let result = svc.execute(search("Connaught Place")).await.unwrap();

    assert_eq!(
        serde_json::to_value(result.ring().unwrap()).unwrap(),
        json!([[28.6, 77.1], [28.6, 77.2], [28.7, 77.2]]),
    );
}

#[tokio::test]
async fn malformed_geometry_yields_point() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "lat": "26.7606",
            "lon": "83.3732",
            "display_name": "Gorakhpur, Uttar Pradesh, India",
            "geojson": {"type": "Polygon", "coordinates": [[["x", "y"]]]},
        }])))
        .mount(&server)
        .await;
    let svc = service(&server);

    let result = svc.execute(search("Gorakhpur")).await.unwrap();

    assert!(matches!(result, SearchResult::Point { .. }));
    assert_eq!(result.location(), Coordinates::new(26.7606, 83.3732).unwrap());
    assert!(svc.store().read().await.notice().is_none());
}

#[tokio::test]
async fn empty_response_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "lat": "26.7606",
            "lon": "83.3732",
            "display_name": "Gorakhpur, Uttar Pradesh, India",
        }])))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    let svc = service(&server);
    _ = svc.execute(search("Gorakhpur")).await.unwrap();

    let err = svc.execute(search("Atlantis")).await.unwrap_err();

    assert!(matches!(err.as_ref(), search_place::ExecutionError::NotFound));
    let state = svc.store().read().await;
    assert!(state.search_result().is_none());
    assert_eq!(state.notice().copied(), Some(Notice::NoResults));
}

#[tokio::test]
async fn failure_keeps_previous_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "lat": "26.7606",
            "lon": "83.3732",
            "display_name": "Gorakhpur, Uttar Pradesh, India",
        }])))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let svc = service(&server);
    let found = svc.execute(search("Gorakhpur")).await.unwrap();

    let err = svc.execute(search("Gorakhpur")).await.unwrap_err();

    assert!(matches!(
        err.as_ref(),
        search_place::ExecutionError::Geocoder(_),
    ));
    let state = svc.store().read().await;
    assert_eq!(state.search_result(), Some(&found));
    assert_eq!(state.notice().copied(), Some(Notice::SearchUnavailable));
}

#[tokio::test]
async fn malformed_coordinates_are_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "lat": "north",
            "lon": "77.2",
            "display_name": "Nowhere",
        }])))
        .mount(&server)
        .await;
    let svc = service(&server);

    let err = svc.execute(search("Nowhere")).await.unwrap_err();

    assert!(matches!(
        err.as_ref(),
        search_place::ExecutionError::Geocoder(_),
    ));
    assert_eq!(
        svc.store().read().await.notice().copied(),
        Some(Notice::SearchUnavailable),
    );
}

#[tokio::test]
async fn blank_query_is_ignored() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;
    let svc = service(&server);

    let err = svc.execute(search("   ")).await.unwrap_err();

    assert!(matches!(err.as_ref(), search_place::ExecutionError::EmptyQuery));
    assert!(svc.store().read().await.notice().is_none());
}
