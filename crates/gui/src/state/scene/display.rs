//! Display helpers for the scene tree and properties panels

use shared::{ObjectKind, SceneObject};

/// Name shown for an object: its own name, or kind + id.
pub fn object_display_name(obj: &SceneObject) -> String {
    if let Some(name) = &obj.name {
        if !name.is_empty() {
            return name.clone();
        }
    }
    let kind = match obj.kind {
        ObjectKind::Cube => "Cube",
        ObjectKind::Sphere => "Sphere",
        ObjectKind::Cylinder => "Cylinder",
        ObjectKind::Cone => "Cone",
        ObjectKind::Furniture => "Furniture",
        ObjectKind::Model => "Model",
    };
    format!("{kind} {}", obj.id)
}

/// Icon for an object kind
pub fn kind_icon(kind: ObjectKind) -> &'static str {
    match kind {
        ObjectKind::Cube => "🧊",
        ObjectKind::Sphere => "⚪",
        ObjectKind::Cylinder => "🛢",
        ObjectKind::Cone => "🔺",
        ObjectKind::Furniture => "🪑",
        ObjectKind::Model => "📦",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::cube_at;

    #[test]
    fn test_display_name_falls_back_to_kind_and_id() {
        let obj = cube_at(3, [0.0, 0.5, 0.0], [1.0; 3]);
        assert_eq!(object_display_name(&obj), "Cube 3");
    }

    #[test]
    fn test_display_name_prefers_own_name() {
        let mut obj = cube_at(3, [0.0, 0.5, 0.0], [1.0; 3]);
        obj.name = Some("Sofá".to_string());
        assert_eq!(object_display_name(&obj), "Sofá");
    }
}
