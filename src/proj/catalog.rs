//! Projection catalog: the fixed set of eight projections, keyed by a closed enum.

use serde::{Deserialize, Serialize};

use crate::proj::azimuthal_equidistant::AzimuthalEquidistant;
use crate::proj::equal_earth::EqualEarth;
use crate::proj::gnomonic::Gnomonic;
use crate::proj::mercator::Mercator;
use crate::proj::mollweide::Mollweide;
use crate::proj::natural_earth::NaturalEarth;
use crate::proj::orthographic::Orthographic;
use crate::proj::stereographic::Stereographic;
use crate::proj::{GeoCoord, PlaneCoord, Projection};

/// Identifies one of the supported projections.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProjectionId {
    #[default]
    Mercator,
    Stereographic,
    EqualEarth,
    Mollweide,
    AzimuthalEquidistant,
    Orthographic,
    Gnomonic,
    NaturalEarth,
}

impl ProjectionId {
    /// All projections, in catalog order.
    pub const ALL: [ProjectionId; 8] = [
        Self::Mercator,
        Self::Stereographic,
        Self::EqualEarth,
        Self::Mollweide,
        Self::AzimuthalEquidistant,
        Self::Orthographic,
        Self::Gnomonic,
        Self::NaturalEarth,
    ];

    /// Parse from a catalog key (case-insensitive).
    pub fn from_key(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "mercator" => Some(Self::Mercator),
            "stereographic" => Some(Self::Stereographic),
            "equalearth" => Some(Self::EqualEarth),
            "mollweide" => Some(Self::Mollweide),
            "azimuthalequidistant" => Some(Self::AzimuthalEquidistant),
            "orthographic" => Some(Self::Orthographic),
            "gnomonic" => Some(Self::Gnomonic),
            "naturalearth" => Some(Self::NaturalEarth),
            _ => None,
        }
    }

    /// Catalog key, as used by UI state.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Mercator => "mercator",
            Self::Stereographic => "stereographic",
            Self::EqualEarth => "equalEarth",
            Self::Mollweide => "mollweide",
            Self::AzimuthalEquidistant => "azimuthalEquidistant",
            Self::Orthographic => "orthographic",
            Self::Gnomonic => "gnomonic",
            Self::NaturalEarth => "naturalEarth",
        }
    }

    /// Position in catalog order.
    pub fn index(&self) -> usize {
        match self {
            Self::Mercator => 0,
            Self::Stereographic => 1,
            Self::EqualEarth => 2,
            Self::Mollweide => 3,
            Self::AzimuthalEquidistant => 4,
            Self::Orthographic => 5,
            Self::Gnomonic => 6,
            Self::NaturalEarth => 7,
        }
    }

    /// The projection kernel for this id.
    pub fn kernel(&self) -> &'static dyn Projection {
        match self {
            Self::Mercator => &Mercator,
            Self::Stereographic => &Stereographic,
            Self::EqualEarth => &EqualEarth,
            Self::Mollweide => &Mollweide,
            Self::AzimuthalEquidistant => &AzimuthalEquidistant,
            Self::Orthographic => &Orthographic,
            Self::Gnomonic => &Gnomonic,
            Self::NaturalEarth => &NaturalEarth,
        }
    }
}

/// Immutable description of a catalog entry, with degree-based mappings.
#[derive(Clone, Copy, Debug)]
pub struct ProjectionDescriptor {
    pub id: ProjectionId,
    pub display_name: &'static str,
    pub description: &'static str,
    /// Whether the projection is advertised as invertible to the UI.
    /// Every kernel still provides an inverse for pixel sampling.
    pub supports_inverse: bool,
}

impl ProjectionDescriptor {
    const fn new(
        id: ProjectionId,
        display_name: &'static str,
        description: &'static str,
        supports_inverse: bool,
    ) -> Self {
        Self {
            id,
            display_name,
            description,
            supports_inverse,
        }
    }

    pub fn key(&self) -> &'static str {
        self.id.key()
    }

    pub fn kernel(&self) -> &'static dyn Projection {
        self.id.kernel()
    }

    /// Geographic (degrees) → plane, or `None` outside the visible domain.
    pub fn forward(&self, geo: GeoCoord) -> Option<PlaneCoord> {
        self.kernel()
            .forward(geo.lon.to_radians(), geo.lat.to_radians())
            .map(|(x, y)| PlaneCoord::new(x, y))
    }

    /// Plane → geographic (degrees), or `None` outside the projected outline.
    pub fn inverse(&self, plane: PlaneCoord) -> Option<GeoCoord> {
        self.kernel()
            .inverse(plane.x, plane.y)
            .map(|(lon, lat)| GeoCoord::new(lon.to_degrees(), lat.to_degrees()))
    }
}

const DESCRIPTORS: [ProjectionDescriptor; 8] = [
    ProjectionDescriptor::new(ProjectionId::Mercator, "Mercator", "Conformal projection", true),
    ProjectionDescriptor::new(
        ProjectionId::Stereographic,
        "Stereographic",
        "Conformal projection",
        true,
    ),
    ProjectionDescriptor::new(
        ProjectionId::EqualEarth,
        "Equal Earth",
        "Equal-area projection",
        true,
    ),
    ProjectionDescriptor::new(ProjectionId::Mollweide, "Mollweide", "Equal-area projection", true),
    ProjectionDescriptor::new(
        ProjectionId::AzimuthalEquidistant,
        "Azimuthal Equidistant",
        "Equidistant from center",
        true,
    ),
    ProjectionDescriptor::new(
        ProjectionId::Orthographic,
        "Orthographic",
        "Perspective projection",
        false,
    ),
    ProjectionDescriptor::new(ProjectionId::Gnomonic, "Gnomonic", "Perspective projection", false),
    ProjectionDescriptor::new(
        ProjectionId::NaturalEarth,
        "Natural Earth",
        "Compromise projection",
        true,
    ),
];

/// Registry of the supported projections.
#[derive(Clone, Debug)]
pub struct ProjectionCatalog {
    entries: [ProjectionDescriptor; 8],
}

impl ProjectionCatalog {
    pub fn new() -> Self {
        Self {
            entries: DESCRIPTORS,
        }
    }

    pub fn list(&self) -> &[ProjectionDescriptor] {
        &self.entries
    }

    pub fn descriptor(&self, id: ProjectionId) -> &ProjectionDescriptor {
        &self.entries[id.index()]
    }

    /// Look up by key. Unknown keys fall back to the default (Mercator).
    pub fn get(&self, key: &str) -> &ProjectionDescriptor {
        match ProjectionId::from_key(key) {
            Some(id) => self.descriptor(id),
            None => {
                log::warn!("Unknown projection '{key}', falling back to mercator");
                self.descriptor(ProjectionId::default())
            }
        }
    }
}

impl Default for ProjectionCatalog {
    fn default() -> Self {
        Self::new()
    }
}
