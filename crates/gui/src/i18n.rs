use std::sync::atomic::{AtomicU8, Ordering};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    Es,
    En,
}

static CURRENT_LANG: AtomicU8 = AtomicU8::new(0); // 0=Es (default)

pub fn lang() -> Lang {
    match CURRENT_LANG.load(Ordering::Relaxed) {
        1 => Lang::En,
        _ => Lang::Es,
    }
}

pub fn set_lang(l: Lang) {
    CURRENT_LANG.store(
        match l {
            Lang::Es => 0,
            Lang::En => 1,
        },
        Ordering::Relaxed,
    );
}

/// Translate a key to the current language.
pub fn t(key: &str) -> &'static str {
    let es = lang() == Lang::Es;
    match key {
        // ── Main menus ──────────────────────────────────────
        "menu.file" => if es { "Archivo" } else { "File" },
        "menu.new" => if es { "Nueva escena" } else { "New scene" },
        "menu.open" => if es { "Abrir escena..." } else { "Open Scene..." },
        "menu.open_title" => if es { "Abrir JSON de escena" } else { "Open Scene JSON" },
        "menu.save" => if es { "Guardar escena..." } else { "Save Scene..." },
        "menu.save_title" => if es { "Guardar JSON de escena" } else { "Save Scene JSON" },
        "menu.quit" => if es { "Salir" } else { "Quit" },

        "menu.edit" => if es { "Edición" } else { "Edit" },
        "menu.duplicate" => if es { "Duplicar  Ctrl+D" } else { "Duplicate  Ctrl+D" },
        "menu.delete" => if es { "Eliminar  Supr" } else { "Delete  Del" },
        "menu.deselect" => if es { "Quitar selección  Esc" } else { "Deselect  Esc" },

        "menu.view" => if es { "Ver" } else { "View" },
        "menu.scene_tree" => if es { "Lista de objetos" } else { "Object list" },
        "menu.properties" => if es { "Propiedades" } else { "Properties" },
        "menu.reset_camera" => if es { "Restablecer cámara" } else { "Reset camera" },
        "menu.language" => if es { "Idioma" } else { "Language" },

        "menu.add" => if es { "Añadir" } else { "Add" },
        "menu.primitives" => if es { "Primitivas" } else { "Primitives" },
        "menu.furniture" => if es { "Muebles" } else { "Furniture" },
        "menu.import_model" => if es { "Importar modelo..." } else { "Import model..." },

        "menu.room" => if es { "Habitación" } else { "Room" },
        "menu.room_setup" => if es { "Configurar habitación..." } else { "Room setup..." },

        // ── Primitives ──────────────────────────────────────
        "prim.cube" => if es { "Cubo" } else { "Cube" },
        "prim.sphere" => if es { "Esfera" } else { "Sphere" },
        "prim.cylinder" => if es { "Cilindro" } else { "Cylinder" },
        "prim.cone" => if es { "Cono" } else { "Cone" },

        // ── Toolbar ─────────────────────────────────────────
        "tb.primitives" => if es { "Primitivas" } else { "Primitives" },
        "tb.furniture" => if es { "Muebles" } else { "Furniture" },
        "tb.duplicate" => if es { "Duplicar" } else { "Duplicate" },
        "tb.delete" => if es { "Eliminar" } else { "Delete" },
        "tb.clear_all" => if es { "Vaciar" } else { "Clear all" },

        "tip.cube" => if es { "Crear un cubo (1×1×1 m)" } else { "Create a cube (1×1×1 m)" },
        "tip.sphere" => if es { "Crear una esfera (1 m)" } else { "Create a sphere (1 m)" },
        "tip.cylinder" => if es { "Crear un cilindro (1 m)" } else { "Create a cylinder (1 m)" },
        "tip.cone" => if es { "Crear un cono (1 m)" } else { "Create a cone (1 m)" },
        "tip.duplicate" => if es { "Duplicar el objeto seleccionado (Ctrl+D)" } else { "Duplicate the selected object (Ctrl+D)" },
        "tip.delete" => if es { "Eliminar el objeto seleccionado (Supr)" } else { "Delete the selected object (Del)" },
        "tip.clear_all" => if es { "Eliminar todos los objetos" } else { "Remove all objects" },

        // ── Catalog ─────────────────────────────────────────
        "catalog.search" => if es { "Buscar muebles…" } else { "Search furniture…" },
        "catalog.none" => if es { "No se encontraron muebles." } else { "No furniture found." },

        "furn.bed" => if es { "Cama" } else { "Bed" },
        "furn.sofa" => if es { "Sofá" } else { "Sofa" },
        "furn.table" => if es { "Mesa" } else { "Table" },
        "furn.chair" => if es { "Silla" } else { "Chair" },
        "furn.wardrobe" => if es { "Armario" } else { "Wardrobe" },
        "furn.shelf" => if es { "Estantería" } else { "Shelf" },

        // ── Object list ─────────────────────────────────────
        "tree.scene" => if es { "Escena" } else { "Scene" },
        "tree.no_objects" => if es { "No hay objetos todavía." } else { "No objects yet." },
        "tree.use_toolbar" => if es { "Usa la barra o el menú Añadir" } else { "Use the toolbar or Add menu" },
        "tree.to_add" => if es { "para colocar primitivas y muebles." } else { "to place primitives and furniture." },

        // ── Properties ──────────────────────────────────────
        "prop.title" => if es { "Propiedades" } else { "Properties" },
        "prop.select_object" => if es { "Selecciona un objeto" } else { "Select an object" },
        "prop.to_view" => if es { "para ver sus propiedades." } else { "to view its properties." },
        "prop.not_found" => if es { "Objeto no encontrado" } else { "Object not found" },
        "prop.name" => if es { "Nombre" } else { "Name" },
        "prop.position" => if es { "Posición" } else { "Position" },
        "prop.rotation" => if es { "Rotación (°)" } else { "Rotation (°)" },
        "prop.scale" => if es { "Escala" } else { "Scale" },
        "prop.color" => if es { "Color" } else { "Color" },
        "prop.mode" => if es { "Modo" } else { "Mode" },
        "mode.translate" => if es { "Mover" } else { "Move" },
        "mode.rotate" => if es { "Rotar" } else { "Rotate" },
        "mode.scale" => if es { "Escalar" } else { "Scale" },

        // ── Room dialog ─────────────────────────────────────
        "room.title" => if es { "Configuración de habitación" } else { "Room setup" },
        "room.walls" => if es { "Paredes" } else { "Walls" },
        "room.north" => if es { "Norte" } else { "North" },
        "room.south" => if es { "Sur" } else { "South" },
        "room.east" => if es { "Este" } else { "East" },
        "room.west" => if es { "Oeste" } else { "West" },
        "room.floor_dims" => if es { "Dimensiones del piso (m)" } else { "Floor dimensions (m)" },
        "room.width" => if es { "Ancho" } else { "Width" },
        "room.depth" => if es { "Profundidad" } else { "Depth" },
        "room.wall_height" => if es { "Altura de paredes" } else { "Wall height" },
        "room.wall_color" => if es { "Color de paredes" } else { "Wall color" },
        "room.floor_color" => if es { "Color del piso" } else { "Floor color" },
        "room.done" => if es { "Listo" } else { "Done" },

        // ── Status bar ──────────────────────────────────────
        "status.objects" => if es { "Objetos" } else { "Objects" },
        "status.selected" => if es { "Seleccionado" } else { "Selected" },
        "status.ready" => if es { "Listo" } else { "Ready" },
        "status.ceiling" => if es { "¡Altura máxima alcanzada!" } else { "Ceiling reached!" },

        _ => key_missing(key),
    }
}

fn key_missing(key: &str) -> &'static str {
    tracing::debug!("missing i18n key: {key}");
    "?"
}
