use crate::domain::Language;

/// Localized UI labels
pub struct Strings {
    pub title: &'static str,
    pub controls: &'static str,
    pub presets: &'static str,
    pub start: &'static str,
    pub pause: &'static str,
    pub step: &'static str,
    pub clear: &'static str,
    pub random: &'static str,
    pub generation: &'static str,
    pub running: &'static str,
    pub paused: &'static str,
    pub rules: &'static str,
    pub wrap: &'static str,
    pub keys: &'static str,
    pub mouse: &'static str,
    pub mouse_force: &'static str,
}

static ENGLISH: Strings = Strings {
    title: "Game of Life",
    controls: "Controls",
    presets: "Presets",
    start: "Start",
    pause: "Pause",
    step: "Step",
    clear: "Clear",
    random: "Random",
    generation: "Gen",
    running: "Running",
    paused: "Paused",
    rules: "3 neighbors = birth, 2-3 = survive.",
    wrap: "Grid wraps: exit = enter opposite.",
    keys: "R run | Space step | C clear | N random | 1-7 | L lang",
    mouse: "Left: click = 1 cell, drag = draw.",
    mouse_force: "Hold right + left = set alive only.",
};

static GERMAN: Strings = Strings {
    title: "Spiel des Lebens",
    controls: "Steuerung",
    presets: "Presets",
    start: "Start",
    pause: "Pause",
    step: "Schritt",
    clear: "Loeschen",
    random: "Zufall",
    generation: "Gen",
    running: "Laeuft",
    paused: "Pausiert",
    rules: "3 Nachbarn = Geburt, 2-3 = Ueberleben.",
    wrap: "Feld ringfoermig: raus = gegenueber rein.",
    keys: "R Lauf | Leer Schritt | C Loeschen | N Zufall | 1-7 | L Sprache",
    mouse: "Links: Klick = 1 Zelle, Ziehen = malen.",
    mouse_force: "Rechts halten + Links = nur setzen.",
};

pub fn strings(language: Language) -> &'static Strings {
    match language {
        Language::English => &ENGLISH,
        Language::German => &GERMAN,
    }
}
