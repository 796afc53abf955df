//! The fixed set of proverb templates.

/// Placeholder replaced by the user's word.
pub const MARKER: &str = "{word}";

/// Proverb templates, each carrying [`MARKER`] exactly once.
pub const TEMPLATES: [&str; 20] = [
    "Не говори гоп, пока не {word}",
    "Семь раз отмерь, один раз {word}",
    "Волков бояться — в {word} не ходить",
    "Что посеешь, то и {word}",
    "Тише едешь — дальше {word}",
    "Без труда не вытащишь и {word} из пруда",
    "Утро вечера {word}",
    "Куй железо, пока {word}",
    "Не всё то золото, что {word}",
    "Один в поле не {word}",
    "Под лежачий камень {word} не течёт",
    "Готовь сани летом, а {word} зимой",
    "Яблоко от яблони недалеко {word}",
    "За двумя зайцами погонишься — ни одного {word} не поймаешь",
    "Дареному коню в {word} не смотрят",
    "Слово — не воробей, вылетит — не {word}",
    "В гостях хорошо, а {word} лучше",
    "Делу время — {word} час",
    "Любишь кататься — люби и {word} возить",
    "На вкус и {word} товарища нет",
];
