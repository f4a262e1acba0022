//! Built-in UI labels for the generated documents.
//!
//! The game's own locale tables have no strings for table headers or item
//! sources, so these are shipped with the tool. Keys are wrapped in
//! underscores to keep them apart from game keys.

/// Languages the tool can produce documents in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Russian,
}

impl Language {
    /// File name of the game's locale table for this language.
    pub fn locale_file_name(self) -> &'static str {
        match self {
            Language::Russian => "locale_ru.xml",
        }
    }

    /// Built-in labels for this language.
    pub fn labels(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Language::Russian => RUSSIAN,
        }
    }
}

const RUSSIAN: &[(&str, &str)] = &[
    ("", ""),
    ("_name_", "Название"),
    ("_func_", "Эффект"),
    ("_qty_", "Редкость"),
    ("_src_", "Источник"),
    ("_hero_", "Герой"),
    ("_cost_", "Стоимость"),
    ("_type_", "Тип"),
    ("_nrg_", "энергии"),
    ("_event_", "Событие"),
    ("_reward_", "Награда"),
    ("_shop_", "Магазин"),
    ("_boss_", "Босс"),
    ("_relics_", "Реликвии"),
    ("_consumables_", "Расходники"),
];
