//! Map view model.

use std::time;

use serde::Serialize;

use crate::{
    domain::{listing, Coordinates, Listing, Ring, SearchResult},
    store::State,
};

use super::listing::filter;

/// OpenStreetMap raster tiles.
///
/// URL template and attribution are required by the tile usage policy and
/// must not be altered.
pub const STREET: TileLayer = TileLayer {
    url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
    attribution: "© OpenStreetMap contributors",
    opacity: 1.0,
};

/// Esri World Imagery raster tiles.
///
/// URL template and attribution are required by the tile usage policy and
/// must not be altered.
pub const SATELLITE: TileLayer = TileLayer {
    url: "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}",
    attribution: "Tiles © Esri",
    opacity: 1.0,
};

/// Translucent [`STREET`] tiles composited over [`SATELLITE`] ones as labels.
pub const LABELS: TileLayer = TileLayer {
    opacity: 0.4,
    ..STREET
};

/// Style of a highlighted search area.
pub const AREA_STYLE: AreaStyle = AreaStyle {
    color: "#1e293b",
    weight: 3,
    fill_color: "#1e293b",
    fill_opacity: 0.15,
};

/// Map settings.
#[derive(Clone, Copy, Debug)]
pub struct Settings {
    /// Center of the map before anything is searched.
    pub center: Coordinates,

    /// Zoom of the map on the first render.
    pub zoom: u8,

    /// Zoom the map flies to whenever its center changes.
    pub fly_to_zoom: u8,

    /// Duration of the fly-to animation.
    pub fly_to_duration: time::Duration,
}

/// Source of the base map tiles.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TileSource {
    /// Street map.
    #[default]
    Street,

    /// Satellite imagery with street labels on top.
    Satellite,
}

impl TileSource {
    /// Returns the other [`TileSource`].
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Street => Self::Satellite,
            Self::Satellite => Self::Street,
        }
    }

    /// Returns the [`TileLayer`]s of this [`TileSource`], bottom to top.
    #[must_use]
    pub fn layers(self) -> &'static [TileLayer] {
        match self {
            Self::Street => &[STREET],
            Self::Satellite => &[SATELLITE, LABELS],
        }
    }
}

/// Raster tile layer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TileLayer {
    /// URL template parameterized by `{s}`, `{z}`, `{x}` and `{y}`.
    pub url: &'static str,

    /// Attribution to display.
    pub attribution: &'static str,

    /// Opacity of this layer.
    pub opacity: f64,
}

/// Style of a highlighted area.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AreaStyle {
    /// Stroke color.
    pub color: &'static str,

    /// Stroke weight.
    pub weight: u8,

    /// Fill color.
    pub fill_color: &'static str,

    /// Fill opacity.
    pub fill_opacity: f64,
}

/// Everything the map needs to be drawn.
#[derive(Clone, Debug, Serialize)]
pub struct View {
    /// Current center.
    pub center: Coordinates,

    /// Zoom to render with on the first draw.
    pub zoom: u8,

    /// Number of times the center has changed.
    ///
    /// A client animates a [`FlyTo`] whenever this differs from the one it
    /// drew last.
    pub center_revision: u64,

    /// Animation to play when the center changes.
    pub fly_to: FlyTo,

    /// Selected [`TileSource`].
    pub tile_source: TileSource,

    /// Tile layers to draw, bottom to top.
    pub tiles: &'static [TileLayer],

    /// Markers of the visible listings.
    pub markers: Vec<Marker>,

    /// Highlighted search result.
    pub overlay: Option<Overlay>,

    /// Location of the listing being added by a map click.
    pub pending: Option<Coordinates>,
}

impl View {
    /// Builds a [`View`] of the provided [`State`].
    #[must_use]
    pub fn new(state: &State, settings: &Settings) -> Self {
        let tile_source = state.tile_source();
        Self {
            center: state.center(),
            zoom: settings.zoom,
            center_revision: state.center_revision(),
            fly_to: FlyTo {
                zoom: settings.fly_to_zoom,
                duration_ms: u64::try_from(
                    settings.fly_to_duration.as_millis(),
                )
                .unwrap_or(u64::MAX),
            },
            tile_source,
            tiles: tile_source.layers(),
            markers: filter(state.listings(), state.criterion())
                .map(Marker::from)
                .collect(),
            overlay: state.search_result().map(Overlay::from),
            pending: state.pending().map(|p| p.location),
        }
    }
}

/// Fly-to animation.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct FlyTo {
    /// Zoom to fly to.
    pub zoom: u8,

    /// Duration of the animation in milliseconds.
    pub duration_ms: u64,
}

/// Marker of a [`Listing`] with its popup contents.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Marker {
    /// ID of the [`Listing`].
    pub id: listing::Id,

    /// Position of this [`Marker`].
    pub location: Coordinates,

    /// Title of the [`Listing`].
    pub title: String,

    /// Area of the [`Listing`].
    pub area: String,

    /// Price of the [`Listing`].
    pub price: String,

    /// Deal kind of the [`Listing`].
    pub kind: listing::Kind,

    /// Upper-cased deal kind badge.
    pub badge: String,

    /// Position formatted to 5 decimals.
    pub position: String,
}

impl From<&Listing> for Marker {
    fn from(l: &Listing) -> Self {
        Self {
            id: l.id,
            location: l.location,
            title: l.title.to_string(),
            area: l.area.to_string(),
            price: l.price.to_string(),
            kind: l.kind,
            badge: l.kind.as_ref().to_uppercase(),
            position: format_position(l.location),
        }
    }
}

/// Highlighted search result.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Overlay {
    /// Location of the marker.
    pub location: Coordinates,

    /// Popup text of the marker.
    pub label: String,

    /// Outline of the found area, if any.
    pub ring: Option<Ring>,

    /// Style of the outline.
    pub style: AreaStyle,
}

impl From<&SearchResult> for Overlay {
    fn from(result: &SearchResult) -> Self {
        Self {
            location: result.location(),
            label: result.label().to_string(),
            ring: result.ring().cloned(),
            style: AREA_STYLE,
        }
    }
}

/// Formats the provided [`Coordinates`] for a popup.
#[must_use]
pub fn format_position(at: Coordinates) -> String {
    format!("Lat: {:.5}, Lng: {:.5}", at.lat(), at.lng())
}
