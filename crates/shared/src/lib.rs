use serde::{Deserialize, Serialize};

/// Уникальный идентификатор объекта в сцене
pub type ObjectId = u64;

/// Тип размещаемого объекта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    Cube,
    Sphere,
    Cylinder,
    Cone,
    /// Предмет мебели из каталога
    Furniture,
    /// Импортированная модель (редактор работает только с её bounding box)
    Model,
}

/// Активный режим гизмо выбранного объекта.
/// Ограничения перетаскивания действуют в режиме Translate;
/// Rotate и Scale влияют только на отображение.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformMode {
    #[default]
    Translate,
    Rotate,
    Scale,
}

/// Объект сцены — один размещённый предмет
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    /// Уникальный идентификатор; не меняется после создания
    pub id: ObjectId,
    #[serde(rename = "type")]
    pub kind: ObjectKind,
    /// Имя для дерева сцены (для мебели — название из каталога)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Центр объекта в мировых координатах (метры)
    pub position: [f64; 3],
    /// Углы Эйлера в радианах
    pub rotation: [f64; 3],
    /// Масштаб; одновременно габариты осевого bounding box.
    /// Инвариант: все компоненты строго положительны.
    pub scale: [f64; 3],
    /// Цвет отображения в формате "#rrggbb"; ядром не используется
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform_mode: Option<TransformMode>,
    /// Идентификатор элемента каталога мебели
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub furniture_id: Option<String>,
}

impl SceneObject {
    /// Половинные габариты bounding box по осям
    pub fn half_extents(&self) -> [f64; 3] {
        [self.scale[0] / 2.0, self.scale[1] / 2.0, self.scale[2] / 2.0]
    }

    /// Минимальный угол bounding box (поворот не учитывается)
    pub fn aabb_min(&self) -> [f64; 3] {
        let h = self.half_extents();
        [
            self.position[0] - h[0],
            self.position[1] - h[1],
            self.position[2] - h[2],
        ]
    }

    /// Максимальный угол bounding box (поворот не учитывается)
    pub fn aabb_max(&self) -> [f64; 3] {
        let h = self.half_extents();
        [
            self.position[0] + h[0],
            self.position[1] + h[1],
            self.position[2] + h[2],
        ]
    }
}

fn default_true() -> bool {
    true
}

fn default_wall_height() -> f64 {
    3.0
}

/// Видимость стен по сторонам комнаты.
/// Скрытая стена — только визуальный эффект: границы комнаты
/// всегда определяются прямоугольником пола.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallsConfig {
    #[serde(default = "default_true")]
    pub north: bool,
    #[serde(default = "default_true")]
    pub south: bool,
    #[serde(default = "default_true")]
    pub east: bool,
    #[serde(default = "default_true")]
    pub west: bool,
}

impl Default for WallsConfig {
    fn default() -> Self {
        Self {
            north: true,
            south: true,
            east: true,
            west: true,
        }
    }
}

/// Размеры пола в метрах
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloorDims {
    pub width: f64,
    pub depth: f64,
}

impl Default for FloorDims {
    fn default() -> Self {
        Self {
            width: 8.0,
            depth: 8.0,
        }
    }
}

/// Конфигурация комнаты
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomConfig {
    #[serde(default)]
    pub floor: FloorDims,
    #[serde(default = "default_wall_height")]
    pub wall_height: f64,
    #[serde(default)]
    pub walls: WallsConfig,
    pub wall_color: String,
    pub floor_color: String,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            floor: FloorDims::default(),
            wall_height: default_wall_height(),
            walls: WallsConfig::default(),
            wall_color: "#ffffff".to_string(),
            floor_color: "#cccccc".to_string(),
        }
    }
}

impl RoomConfig {
    /// Границы комнаты, выводимые из конфигурации.
    /// Пересчитываются при каждом изменении комнаты.
    pub fn bounds(&self) -> RoomBounds {
        let half_w = self.floor.width / 2.0;
        let half_d = self.floor.depth / 2.0;
        RoomBounds {
            min_x: -half_w,
            max_x: half_w,
            min_z: -half_d,
            max_z: half_d,
            ceiling_y: self.wall_height,
        }
    }
}

/// Границы комнаты: стены по X/Z, пол на y = 0, потолок на ceiling_y.
/// Только для чтения со стороны ядра манипуляций.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_z: f64,
    pub max_z: f64,
    pub ceiling_y: f64,
}

impl RoomBounds {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn depth(&self) -> f64 {
        self.max_z - self.min_z
    }
}

/// Описание сцены — комната и список объектов.
/// Формат файла сцены и автосохранения.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub room: RoomConfig,
    #[serde(default)]
    pub objects: Vec<SceneObject>,
}

/// Элемент каталога мебели
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurnitureItem {
    pub id: String,
    pub name: String,
    /// Габариты (ширина, высота, глубина) в метрах
    pub dimensions: [f64; 3],
    pub color: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube(id: ObjectId, pos: [f64; 3], scale: [f64; 3]) -> SceneObject {
        SceneObject {
            id,
            kind: ObjectKind::Cube,
            name: None,
            position: pos,
            rotation: [0.0; 3],
            scale,
            color: "#3b82f6".to_string(),
            transform_mode: None,
            furniture_id: None,
        }
    }

    #[test]
    fn test_aabb_from_position_and_scale() {
        let obj = cube(1, [1.0, 0.5, -2.0], [2.0, 1.0, 4.0]);
        assert_eq!(obj.half_extents(), [1.0, 0.5, 2.0]);
        assert_eq!(obj.aabb_min(), [0.0, 0.0, -4.0]);
        assert_eq!(obj.aabb_max(), [2.0, 1.0, 0.0]);
    }

    #[test]
    fn test_room_bounds_derivation() {
        let room = RoomConfig {
            floor: FloorDims {
                width: 10.0,
                depth: 6.0,
            },
            wall_height: 3.0,
            ..RoomConfig::default()
        };
        let b = room.bounds();
        assert_eq!(b.min_x, -5.0);
        assert_eq!(b.max_x, 5.0);
        assert_eq!(b.min_z, -3.0);
        assert_eq!(b.max_z, 3.0);
        assert_eq!(b.ceiling_y, 3.0);
        assert_eq!(b.width(), 10.0);
        assert_eq!(b.depth(), 6.0);
    }

    #[test]
    fn test_object_kind_serde_tag() {
        let obj = cube(7, [0.0, 0.5, 0.0], [1.0; 3]);
        let json = serde_json::to_string(&obj).unwrap();
        assert!(json.contains("\"type\":\"cube\""));
        let back: SceneObject = serde_json::from_str(&json).unwrap();
        assert_eq!(back, obj);
    }

    #[test]
    fn test_scene_description_roundtrip() {
        let scene = SceneDescription {
            room: RoomConfig::default(),
            objects: vec![cube(1, [0.0, 0.5, 0.0], [1.0; 3])],
        };
        let json = serde_json::to_string_pretty(&scene).unwrap();
        let back: SceneDescription = serde_json::from_str(&json).unwrap();
        assert_eq!(back, scene);
    }

    #[test]
    fn test_scene_description_defaults_from_empty_json() {
        let scene: SceneDescription = serde_json::from_str("{}").unwrap();
        assert!(scene.objects.is_empty());
        assert_eq!(scene.room.floor.width, 8.0);
        assert_eq!(scene.room.wall_height, 3.0);
        assert!(scene.room.walls.north);
    }
}
