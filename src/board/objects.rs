//! Per-cell prop placements
//!
//! Each cell holds at most one built-in prop. The light payload lives inside
//! the `Light` variant so a non-light placement cannot carry light settings.
//! The wire format stays flat (`{type, rotation, light?}`) via a raw bridge
//! struct used only by serde.

use serde::{Serialize, Deserialize};

/// Prop type tag - used by brushes and by the JSON `type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    None,
    Lever,
    Trapdoor,
    Torch,
    Bridge,
    Light,
}

impl ObjectType {
    /// Display name for status messages and panels
    pub fn display_name(&self) -> &'static str {
        match self {
            ObjectType::None => "Eraser",
            ObjectType::Lever => "Lever",
            ObjectType::Trapdoor => "Trapdoor",
            ObjectType::Torch => "Torch",
            ObjectType::Bridge => "Bridge",
            ObjectType::Light => "Light",
        }
    }

    /// Bridges may only sit on water or pit terrain
    pub fn requires_hollow_terrain(&self) -> bool {
        matches!(self, ObjectType::Bridge)
    }
}

/// Prop orientation, cycled a quarter turn per repeated placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Next quarter turn (270 wraps back to 0)
    pub fn next(self) -> Self {
        match self {
            Rotation::Deg0 => Rotation::Deg90,
            Rotation::Deg90 => Rotation::Deg180,
            Rotation::Deg180 => Rotation::Deg270,
            Rotation::Deg270 => Rotation::Deg0,
        }
    }

    pub fn degrees(self) -> u16 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }
}

impl From<Rotation> for u16 {
    fn from(r: Rotation) -> u16 {
        r.degrees()
    }
}

impl TryFrom<u16> for Rotation {
    type Error = String;

    fn try_from(deg: u16) -> Result<Self, Self::Error> {
        match deg {
            0 => Ok(Rotation::Deg0),
            90 => Ok(Rotation::Deg90),
            180 => Ok(Rotation::Deg180),
            270 => Ok(Rotation::Deg270),
            other => Err(format!("invalid rotation {} (expected 0/90/180/270)", other)),
        }
    }
}

/// RGB color for point lights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Point light parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightSettings {
    /// Light color (RGB)
    pub color: Rgb,
    /// Light intensity (>= 0)
    pub intensity: f32,
    /// Falloff distance in world units (>= 0)
    pub distance: f32,
    /// Falloff exponent (>= 0)
    pub decay: f32,
}

impl Default for LightSettings {
    fn default() -> Self {
        // Warm torchlight, reaches across the whole 4x4 board
        Self {
            color: Rgb::new(255, 214, 170),
            intensity: 1.0,
            distance: 4.0,
            decay: 2.0,
        }
    }
}

/// A placed prop and its payload
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObjectKind {
    None,
    Lever,
    Trapdoor,
    Torch,
    Bridge,
    Light(LightSettings),
}

impl ObjectKind {
    /// Tag of this placement, for comparison against the object brush
    pub fn object_type(&self) -> ObjectType {
        match self {
            ObjectKind::None => ObjectType::None,
            ObjectKind::Lever => ObjectType::Lever,
            ObjectKind::Trapdoor => ObjectType::Trapdoor,
            ObjectKind::Torch => ObjectType::Torch,
            ObjectKind::Bridge => ObjectType::Bridge,
            ObjectKind::Light(_) => ObjectType::Light,
        }
    }

    /// Light payload, present only on light placements
    pub fn light(&self) -> Option<&LightSettings> {
        match self {
            ObjectKind::Light(settings) => Some(settings),
            _ => None,
        }
    }
}

/// One cell's prop slot: what is placed there and which way it faces
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawObjectPlacement", into = "RawObjectPlacement")]
pub struct ObjectPlacement {
    pub kind: ObjectKind,
    pub rotation: Rotation,
}

impl Default for ObjectPlacement {
    fn default() -> Self {
        Self::empty()
    }
}

impl ObjectPlacement {
    /// The empty slot: no prop, rotation reset
    pub fn empty() -> Self {
        Self { kind: ObjectKind::None, rotation: Rotation::Deg0 }
    }

    /// Place a prop with rotation 0
    pub fn new(kind: ObjectKind) -> Self {
        Self { kind, rotation: Rotation::Deg0 }
    }

    pub fn object_type(&self) -> ObjectType {
        self.kind.object_type()
    }

    pub fn is_empty(&self) -> bool {
        self.kind == ObjectKind::None
    }
}

/// Wire form of a placement: flat `{type, rotation, light?}`
#[derive(Serialize, Deserialize)]
struct RawObjectPlacement {
    #[serde(rename = "type")]
    object_type: ObjectType,
    #[serde(default)]
    rotation: Rotation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    light: Option<LightSettings>,
}

impl From<RawObjectPlacement> for ObjectPlacement {
    fn from(raw: RawObjectPlacement) -> Self {
        let kind = match raw.object_type {
            ObjectType::None => ObjectKind::None,
            ObjectType::Lever => ObjectKind::Lever,
            ObjectType::Trapdoor => ObjectKind::Trapdoor,
            ObjectType::Torch => ObjectKind::Torch,
            ObjectType::Bridge => ObjectKind::Bridge,
            // A light entry without settings still loads, with defaults
            ObjectType::Light => ObjectKind::Light(raw.light.unwrap_or_default()),
        };
        Self { kind, rotation: raw.rotation }
    }
}

impl From<ObjectPlacement> for RawObjectPlacement {
    fn from(placement: ObjectPlacement) -> Self {
        Self {
            object_type: placement.object_type(),
            rotation: placement.rotation,
            light: placement.kind.light().copied(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_cycles_back_to_start() {
        let mut r = Rotation::Deg0;
        for _ in 0..4 {
            r = r.next();
        }
        assert_eq!(r, Rotation::Deg0);
        assert_eq!(Rotation::Deg180.next(), Rotation::Deg270);
    }

    #[test]
    fn test_rotation_rejects_off_grid_angles() {
        assert!(Rotation::try_from(90).is_ok());
        assert!(Rotation::try_from(45).is_err());
        assert!(Rotation::try_from(360).is_err());
    }

    #[test]
    fn test_light_payload_only_on_lights() {
        let torch = ObjectPlacement::new(ObjectKind::Torch);
        assert!(torch.kind.light().is_none());

        let light = ObjectPlacement::new(ObjectKind::Light(LightSettings::default()));
        assert_eq!(light.object_type(), ObjectType::Light);
        assert!(light.kind.light().is_some());
    }

    #[test]
    fn test_placement_wire_format() {
        let light = ObjectPlacement::new(ObjectKind::Light(LightSettings::default()));
        let json = serde_json::to_value(light).unwrap();
        assert_eq!(json["type"], "light");
        assert_eq!(json["rotation"], 0);
        assert_eq!(json["light"]["intensity"], 1.0);

        let lever = ObjectPlacement { kind: ObjectKind::Lever, rotation: Rotation::Deg90 };
        let json = serde_json::to_value(lever).unwrap();
        assert_eq!(json["type"], "lever");
        assert_eq!(json["rotation"], 90);
        assert!(json.get("light").is_none());
    }

    #[test]
    fn test_light_entry_without_settings_gets_defaults() {
        let placement: ObjectPlacement =
            serde_json::from_value(serde_json::json!({"type": "light", "rotation": 270})).unwrap();
        assert_eq!(placement.rotation, Rotation::Deg270);
        assert_eq!(placement.kind.light(), Some(&LightSettings::default()));
    }
}
