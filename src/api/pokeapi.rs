//! PokeAPI: `GET /api/v2/pokemon/{name or number}`.

use serde::Deserialize;
use url::Url;

use crate::error::{Result, ToolError};
use crate::tools::creature::Creature;

#[derive(Debug, Deserialize)]
pub(super) struct PokemonResponse {
    name: Option<String>,
    sprites: Option<Sprites>,
    base_experience: Option<u32>,
    #[serde(default)]
    abilities: Vec<AbilitySlot>,
    cries: Option<Cries>,
    #[serde(default)]
    types: Vec<TypeSlot>,
}

#[derive(Debug, Deserialize)]
struct Sprites {
    front_default: Option<String>,
    other: Option<OtherSprites>,
}

#[derive(Debug, Deserialize)]
struct OtherSprites {
    #[serde(rename = "official-artwork")]
    official_artwork: Option<Artwork>,
}

#[derive(Debug, Deserialize)]
struct Artwork {
    front_default: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NamedResource {
    name: String,
}

#[derive(Debug, Deserialize)]
struct AbilitySlot {
    ability: NamedResource,
}

#[derive(Debug, Deserialize)]
struct TypeSlot {
    #[serde(rename = "type")]
    kind: NamedResource,
}

#[derive(Debug, Deserialize)]
struct Cries {
    latest: Option<String>,
}

/// The lookup key becomes the last path segment, lowercased.
pub(super) fn url(base: &str, name: &str) -> Result<Url> {
    let mut url = Url::parse(base)?;
    url.path_segments_mut()
        .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
        .pop_if_empty()
        .push(&name.to_lowercase());
    Ok(url)
}

impl PokemonResponse {
    pub(super) fn into_creature(self) -> Result<Creature> {
        let name = self.name.ok_or(ToolError::Missing("name"))?;
        let sprite_url = self
            .sprites
            .and_then(|sprites| {
                sprites
                    .other
                    .and_then(|other| other.official_artwork)
                    .and_then(|artwork| artwork.front_default)
                    .or(sprites.front_default)
            })
            .ok_or(ToolError::Missing("sprites"))?;
        if self.types.is_empty() {
            return Err(ToolError::Missing("types"));
        }

        Ok(Creature {
            name,
            sprite_url,
            base_experience: self.base_experience,
            abilities: self
                .abilities
                .into_iter()
                .map(|slot| slot.ability.name)
                .collect(),
            types: self.types.into_iter().map(|slot| slot.kind.name).collect(),
            cry_url: self.cries.and_then(|cries| cries.latest),
        })
    }
}
