use std::sync::atomic::{AtomicU8, Ordering};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    En,
    Ru,
}

static CURRENT_LANG: AtomicU8 = AtomicU8::new(0); // 0=En (default)

pub fn lang() -> Lang {
    match CURRENT_LANG.load(Ordering::Relaxed) {
        1 => Lang::Ru,
        _ => Lang::En,
    }
}

pub fn set_lang(l: Lang) {
    CURRENT_LANG.store(
        match l {
            Lang::En => 0,
            Lang::Ru => 1,
        },
        Ordering::Relaxed,
    );
}

/// Translate a key to the current language.
pub fn t(key: &str) -> &'static str {
    let ru = lang() == Lang::Ru;
    match key {
        // ── Main menus ──────────────────────────────────────
        "menu.file" => if ru { "Файл" } else { "File" },
        "menu.open" => if ru { "Открыть модель..." } else { "Open Model..." },
        "menu.open_title" => if ru { "Открыть JSON модели" } else { "Open Model JSON" },
        "menu.close_model" => if ru { "Закрыть модель" } else { "Close model" },
        "menu.quit" => if ru { "Выход" } else { "Quit" },

        "menu.view" => if ru { "Вид" } else { "View" },
        "menu.controls" => if ru { "Панель управления" } else { "Controls panel" },
        "menu.reset_camera" => if ru { "Сбросить камеру" } else { "Reset camera" },
        "menu.fit_view" => if ru { "Показать модель" } else { "Fit model" },
        "menu.language" => if ru { "Язык" } else { "Language" },

        "menu.settings" => if ru { "Настройки" } else { "Settings" },
        "menu.preferences" => if ru { "Параметры..." } else { "Preferences..." },

        // ── Controls panel ──────────────────────────────────
        "ctrl.model" => if ru { "Модель" } else { "Model" },
        "ctrl.no_model" => if ru { "Модель не загружена." } else { "No model loaded." },
        "ctrl.use_open" => if ru { "Файл → Открыть модель..." } else { "File → Open Model..." },
        "ctrl.elements" => if ru { "Элементов" } else { "Elements" },
        "ctrl.skipped" => if ru { "Пропущено" } else { "Skipped" },

        "ctrl.environment" => if ru { "Окружение" } else { "Environment" },
        "ctrl.sea" => if ru { "Поверхность моря" } else { "Sea surface" },
        "ctrl.mudline" => if ru { "Линия грунта" } else { "Mudline" },
        "ctrl.mudline_elev" => if ru { "Отметка грунта" } else { "Mudline elevation" },

        "ctrl.contour" => if ru { "Контурная раскраска" } else { "Contour coloring" },
        "ctrl.contour_enable" => if ru { "Раскрасить по атрибуту" } else { "Color by attribute" },
        "ctrl.attribute" => if ru { "Атрибут" } else { "Attribute" },
        "ctrl.ramp" => if ru { "Палитра" } else { "Color ramp" },

        "ctrl.hovered" => if ru { "Элемент под курсором" } else { "Hovered element" },
        "ctrl.hover_none" => if ru { "Наведите курсор на элемент." } else { "Hover an element." },

        // ── Section attributes ──────────────────────────────
        "attr.od" => if ru { "Внешний диаметр" } else { "Outer diameter" },
        "attr.id" => if ru { "Внутренний диаметр" } else { "Inner diameter" },
        "attr.thk" => if ru { "Толщина стенки" } else { "Wall thickness" },
        "attr.od_short" => if ru { "Днар" } else { "OD" },
        "attr.id_short" => if ru { "Двн" } else { "ID" },
        "attr.thk_short" => if ru { "Толщ" } else { "Thk" },

        // ── Color ramps ─────────────────────────────────────
        "ramp.rainbow" => if ru { "Радуга" } else { "Rainbow" },
        "ramp.viridis" => "Viridis",

        // ── Status bar ──────────────────────────────────────
        "status.ready" => if ru { "Готово" } else { "Ready" },
        "status.loading" => if ru { "Загрузка..." } else { "Loading..." },
        "status.elements" => if ru { "Элементов" } else { "Elements" },
        "status.skipped" => if ru { "пропущено" } else { "skipped" },
        "status.nav_hint" => if ru { "СКМ: Вращение | ПКМ: Панорама | Скролл: Масштаб" } else { "MMB: Rotate | RMB: Pan | Scroll: Zoom" },

        // ── Settings window ────────────────────────────────
        "settings.title" => if ru { "Настройки" } else { "Settings" },

        "settings.grid" => if ru { "Сетка" } else { "Grid" },
        "settings.grid_visible" => if ru { "Показывать сетку" } else { "Show grid" },
        "settings.grid_size" => if ru { "Размер ячейки" } else { "Cell size" },
        "settings.grid_range" => if ru { "Количество линий" } else { "Grid lines" },
        "settings.grid_opacity" => if ru { "Прозрачность" } else { "Opacity" },

        "settings.axes" => if ru { "Оси координат" } else { "Axes" },
        "settings.axes_visible" => if ru { "Показывать оси" } else { "Show axes" },
        "settings.axes_length" => if ru { "Длина стрелок" } else { "Arrow length" },
        "settings.axes_labels" => if ru { "Показывать метки" } else { "Show labels" },

        "settings.viewport" => if ru { "Вьюпорт" } else { "Viewport" },
        "settings.bg_color" => if ru { "Цвет фона" } else { "Background color" },

        "settings.environment" => if ru { "Окружение" } else { "Environment" },
        "settings.sea_color" => if ru { "Цвет моря" } else { "Sea color" },
        "settings.mudline_color" => if ru { "Цвет грунта" } else { "Mudline color" },
        "settings.plane_size" => if ru { "Полуразмер плоскостей" } else { "Plane half-size" },

        "settings.ui" => if ru { "Интерфейс" } else { "Interface" },
        "settings.font_size" => if ru { "Размер шрифта" } else { "Font size" },

        "settings.apply" => if ru { "Применить" } else { "Apply" },
        "settings.reset" => if ru { "Сбросить" } else { "Reset" },
        "settings.close" => if ru { "Закрыть" } else { "Close" },

        // ── Fallback ────────────────────────────────────────
        _ => "???",
    }
}
