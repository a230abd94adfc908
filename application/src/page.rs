//! HTML page rendering.

use maud::{html, Markup, PreEscaped, DOCTYPE};
use service::{
    domain::listing,
    read::{
        listing::TypeFilter,
        map::{format_position, TileSource, View},
        Criterion, Screen,
    },
    store::Notice,
};

/// Name shown in the header and the title.
const BRAND: &str = "GeoEstate";

/// Version of [Leaflet] loaded from the CDN.
///
/// [Leaflet]: https://leafletjs.com
const LEAFLET: &str = "https://unpkg.com/leaflet@1.9.4/dist";

/// Renders the whole page of the provided [`Screen`].
#[must_use]
pub fn render(screen: &Screen) -> Markup {
    let Screen {
        map,
        criterion,
        notice,
    } = screen;

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (BRAND) " | Property map" }
                link rel="stylesheet" href={ (LEAFLET) "/leaflet.css" };
                link rel="stylesheet" href="/assets/style.css";
                script src={ (LEAFLET) "/leaflet.js" } {}
                script src="/assets/map.js" defer {}
            }
            body {
                (header(map.tile_source))
                @if let Some(notice) = notice {
                    (notice_banner(*notice))
                }
                (dashboard(criterion))
                main id="map" {}
                @if let Some(at) = map.pending {
                    (pending_form(&format_position(at)))
                }
                form id="stage" method="post" action="/pending" hidden {
                    input type="hidden" name="lat";
                    input type="hidden" name="lng";
                }
                script id="view" type="application/json" {
                    (PreEscaped(view_json(map)))
                }
                (about())
            }
        }
    }
}

/// Serializes the provided [`View`] to be embedded into a `<script>` tag.
fn view_json(view: &View) -> String {
    // `</` can't appear inside a `<script>`, while `\/` is a valid JSON escape.
    serde_json::to_string(view)
        .unwrap_or_else(|_| "null".to_owned())
        .replace("</", "<\\/")
}

fn header(tiles: TileSource) -> Markup {
    html! {
        header class="topbar" {
            span class="brand" { (BRAND) }
            form class="search" method="post" action="/search" {
                input type="search" name="q" required
                    placeholder="Search area or landmark (e.g. Indira Nagar Gorakhpur)...";
                button type="submit" { "Search" }
            }
            div class="actions" {
                form method="post" action="/tiles" {
                    button type="submit" class="pill" {
                        @match tiles {
                            TileSource::Street => { "Satellite" }
                            TileSource::Satellite => { "Street View" }
                        }
                    }
                }
                a class="pill" href="#about" { "About & Contact" }
            }
        }
    }
}

fn notice_banner(notice: Notice) -> Markup {
    html! {
        div class="notice" role="alert" {
            span { (notice) }
            form method="post" action="/notice/dismiss" {
                button type="submit" aria-label="Dismiss" { "×" }
            }
        }
    }
}

fn dashboard(criterion: &Criterion) -> Markup {
    html! {
        aside class="dashboard" {
            p class="caption" { "Dashboard" }
            section class="card" {
                h4 { "Add property (manual)" }
                form method="post" action="/listings" {
                    (listing_fields())
                    div class="row" {
                        input name="lat" placeholder="Lat" inputmode="decimal";
                        input name="lng" placeholder="Lng" inputmode="decimal";
                    }
                    button type="submit" class="primary" { "Add listing" }
                }
            }
            section class="card" {
                h4 { "Search properties" }
                form method="post" action="/filter" {
                    label for="filter-type" { "Type" }
                    select id="filter-type" name="type" {
                        @for kind in TypeFilter::ALL {
                            option value=(kind) selected[*kind == criterion.kind] {
                                (title_case(kind.as_ref()))
                            }
                        }
                    }
                    label for="filter-text" { "Search text" }
                    input id="filter-text" name="text" value=(criterion.text)
                        placeholder="Area / title...";
                    button type="submit" { "Apply" }
                }
            }
        }
    }
}

/// Title, price, area and deal kind inputs shared by both listing forms.
fn listing_fields() -> Markup {
    html! {
        input name="title" placeholder="Title" required;
        input name="price" placeholder="Price";
        input name="area" placeholder="Area";
        select name="type" {
            @for kind in listing::Kind::ALL {
                option value=(kind) { (title_case(kind.as_ref())) }
            }
        }
    }
}

fn pending_form(position: &str) -> Markup {
    html! {
        section class="card pending" {
            h4 { "New listing here?" }
            p class="position" { (position) }
            form method="post" action="/pending/listing" {
                (listing_fields())
                button type="submit" class="primary" { "Add marker here" }
            }
            form method="post" action="/pending/close" {
                button type="submit" { "Close" }
            }
        }
    }
}

fn about() -> Markup {
    html! {
        div id="about" class="overlay" {
            div class="dialog" {
                div class="dialog-head" {
                    h2 { "About " (BRAND) }
                    a href="#" aria-label="Close" { "×" }
                }
                p {
                    (BRAND) " helps people find land, houses and rooms to buy, \
                    sell or rent using an interactive map."
                }
                p {
                    "Zoom the map, click anywhere to add a new listing, or \
                    search for a specific area using the top search bar."
                }
                h3 { "Contact" }
                p {
                    "Listings are published by their owners. Use the details \
                    in a listing to get in touch."
                }
            }
        }
    }
}

/// Upper-cases the first letter of the provided `word`.
fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod spec {
    use std::time;

    use service::{
        domain::{Coordinates, Place, SearchResult},
        read::map::{Settings, View},
        store::Action,
        State,
    };

    use super::{title_case, view_json};

    #[test]
    fn capitalizes_kinds() {
        assert_eq!(title_case("rent"), "Rent");
        assert_eq!(title_case("all"), "All");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn embedded_view_cannot_close_script() {
        let at = Coordinates::new(28.6139, 77.209).unwrap();
        let settings = Settings {
            center: at,
            zoom: 11,
            fly_to_zoom: 14,
            fly_to_duration: time::Duration::from_millis(1200),
        };
        let mut state = State::new(at);
        state.apply(Action::Found(SearchResult::from(Place {
            location: at,
            label: String::from("</script><b>Delhi</b>").into(),
            geometry: None,
        })));

        let json = view_json(&View::new(&state, &settings));

        assert!(!json.contains("</"));
        assert!(json.contains(r"<\/script>"));
    }
}
