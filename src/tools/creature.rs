//! Pokémon lookup.

use super::{Notices, NoticeVariant, Screen, ScreenResult, ScreenState};
use crate::router::Tool;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Creature {
    pub name: String,
    /// Official artwork, or the default sprite when there is none.
    pub sprite_url: String,
    pub base_experience: Option<u32>,
    pub abilities: Vec<String>,
    /// Elemental type names, e.g. `electric`.
    pub types: Vec<String>,
    pub cry_url: Option<String>,
}

/// Badge background class for an elemental type.
#[must_use]
pub fn type_color(kind: &str) -> &'static str {
    match kind {
        "fire" => "bg-orange-500",
        "water" => "bg-blue-500",
        "electric" => "bg-yellow-400",
        "grass" => "bg-green-500",
        "ice" => "bg-cyan-400",
        "fighting" => "bg-red-600",
        "poison" => "bg-purple-500",
        "ground" => "bg-yellow-600",
        "flying" => "bg-indigo-400",
        "psychic" => "bg-pink-500",
        "bug" => "bg-lime-500",
        "rock" => "bg-yellow-700",
        "ghost" => "bg-purple-700",
        "dragon" => "bg-indigo-600",
        "dark" => "bg-gray-700",
        "steel" => "bg-gray-500",
        "fairy" => "bg-pink-400",
        // "normal" and anything the table does not know
        _ => "bg-gray-400",
    }
}

/// Ability name for display; only the first hyphen becomes a space.
#[must_use]
pub fn ability_label(name: &str) -> String {
    name.replacen('-', " ", 1)
}

impl Creature {
    #[must_use]
    pub fn base_experience_label(&self) -> String {
        self.base_experience
            .map_or_else(|| "—".to_string(), |xp| xp.to_string())
    }
}

pub const NOTICES: Notices = Notices {
    empty_input: "Por favor ingresa el nombre de un Pokémon",
    miss_title: "No se encontró información",
    miss_description: "Pokémon no encontrado. Intenta con otro nombre",
    miss_variant: NoticeVariant::Destructive,
    failure: "Pokémon no encontrado. Intenta con otro nombre",
};

impl ScreenResult for Creature {
    const NOTICES: Notices = NOTICES;
    const TOOL: Tool = Tool::Creature;

    fn slot(state: &mut ScreenState) -> Option<&mut Screen<Self>> {
        match state {
            ScreenState::Creature(screen) => Some(screen),
            _ => None,
        }
    }
}
