use crate::Error;
use crate::core::effectiveness::Relations;
use crate::core::pokemon::{self, Pokemon, Stat, Type};
use crate::core::species::Species;
use crate::source::{Network, Source};

use bytes::Bytes;
use serde::Deserialize;

use std::fmt;
use std::sync::LazyLock;
use std::time::Duration;

pub const BASE_URL: &str = "https://pokeapi.co/api/v2";

/// A live PokeAPI session.
///
/// PokeAPI needs no authentication; the session only carries the shared
/// HTTP client.
#[derive(Debug, Clone)]
pub struct Session {
    client: reqwest::Client,
}

impl Session {
    pub fn new() -> Self {
        log::info!("PokeAPI session started");

        Self {
            client: CLIENT.clone(),
        }
    }

    pub async fn download_artwork(&self, url: &str) -> Result<Bytes, Error> {
        log::info!("Downloading artwork: {url}");
        let response = retry(2, || self.client.get(url).send()).await?;

        Ok(response.error_for_status()?.bytes().await?)
    }
}

impl Source for Session {
    async fn species_names(&self, offset: u32, limit: u32) -> Result<Vec<String>, Error> {
        #[derive(Deserialize)]
        struct Response {
            results: Vec<Resource>,
        }

        #[derive(Deserialize)]
        struct Resource {
            name: String,
        }

        let url = format!("{BASE_URL}/pokemon-species?offset={offset}&limit={limit}");

        log::info!("Fetching species list: {url}");

        let response =
            retry(2, async || self.client.get(&url).send().await?.error_for_status()).await?;
        let response: Response = response.json().await?;

        Ok(response
            .results
            .into_iter()
            .map(|resource| resource.name)
            .collect())
    }

    async fn pokemon(&self, id: pokemon::Id) -> Result<Pokemon, Error> {
        #[derive(Deserialize)]
        struct Response {
            id: u32,
            name: String,
            height: u32,
            weight: u32,
            types: Vec<TypeSlot>,
            stats: Vec<StatSlot>,
            sprites: Sprites,
        }

        #[derive(Deserialize)]
        struct TypeSlot {
            #[serde(rename = "type")]
            type_: Resource,
        }

        #[derive(Deserialize)]
        struct StatSlot {
            base_stat: u32,
            stat: Resource,
        }

        #[derive(Deserialize)]
        struct Resource {
            name: String,
        }

        #[derive(Deserialize)]
        struct Sprites {
            other: Other,
        }

        #[derive(Deserialize)]
        struct Other {
            #[serde(rename = "official-artwork")]
            official_artwork: OfficialArtwork,
        }

        #[derive(Deserialize)]
        struct OfficialArtwork {
            front_default: Option<String>,
        }

        let url = format!("{BASE_URL}/pokemon/{id}", id = id.0);

        log::info!("Fetching pokemon: {url}");

        let response =
            retry(2, async || self.client.get(&url).send().await?.error_for_status()).await?;
        let response: Response = response.json().await?;

        Ok(Pokemon {
            id: pokemon::Id(response.id),
            name: pokemon::capitalize(&response.name),
            types: response
                .types
                .into_iter()
                .map(|slot| Type::parse(&slot.type_.name))
                .collect(),
            artwork: response
                .sprites
                .other
                .official_artwork
                .front_default
                .unwrap_or_default(),
            height: response.height,
            weight: response.weight,
            stats: response
                .stats
                .into_iter()
                .map(|slot| Stat {
                    name: slot.stat.name,
                    base: slot.base_stat,
                })
                .collect(),
        })
    }

    async fn species(&self, id: pokemon::Id) -> Result<Species, Error> {
        #[derive(Deserialize)]
        struct Response {
            flavor_text_entries: Vec<FlavorText>,
            genera: Vec<Genus>,
        }

        #[derive(Deserialize)]
        struct FlavorText {
            flavor_text: String,
        }

        #[derive(Deserialize)]
        struct Genus {
            genus: String,
            language: Resource,
        }

        #[derive(Deserialize)]
        struct Resource {
            name: String,
        }

        let url = format!("{BASE_URL}/pokemon-species/{id}", id = id.0);

        log::info!("Fetching species: {url}");

        let response =
            retry(2, async || self.client.get(&url).send().await?.error_for_status()).await?;
        let response: Response = response.json().await?;

        Ok(Species {
            // Flavor text comes with hard line and page breaks baked in
            flavor_text: response
                .flavor_text_entries
                .first()
                .map(|entry| entry.flavor_text.replace(['\n', '\u{c}'], " "))
                .unwrap_or_default(),
            genus: response
                .genera
                .into_iter()
                .find(|genus| genus.language.name == "en")
                .map(|genus| genus.genus)
                .unwrap_or_default(),
        })
    }

    async fn relations(&self, type_: Type) -> Result<Relations, Error> {
        #[derive(Deserialize)]
        struct Response {
            damage_relations: DamageRelations,
        }

        #[derive(Deserialize)]
        struct DamageRelations {
            double_damage_from: Vec<Resource>,
            double_damage_to: Vec<Resource>,
        }

        #[derive(Deserialize)]
        struct Resource {
            name: String,
        }

        let url = format!("{BASE_URL}/type/{type_}", type_ = type_.as_str());

        log::info!("Fetching damage relations: {url}");

        let response =
            retry(2, async || self.client.get(&url).send().await?.error_for_status()).await?;
        let response: Response = response.json().await?;

        Ok(Relations {
            double_damage_from: response
                .damage_relations
                .double_damage_from
                .iter()
                .map(|resource| Type::parse(&resource.name))
                .collect(),
            double_damage_to: response
                .damage_relations
                .double_damage_to
                .iter()
                .map(|resource| Type::parse(&resource.name))
                .collect(),
        })
    }
}

impl Network for Session {
    async fn is_reachable(&self) -> bool {
        match self.client.head(BASE_URL).send().await {
            Ok(_) => true,
            Err(error) => {
                log::warn!("PokeAPI is unreachable: {error}");

                false
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

static CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::ClientBuilder::new()
        .timeout(Duration::from_secs(3))
        .build()
        .expect("Build reqwest client")
});

async fn retry<T, E, F>(mut retries: usize, f: impl Fn() -> F) -> Result<T, E>
where
    E: fmt::Display,
    F: Future<Output = Result<T, E>>,
{
    loop {
        let result = f().await;

        match result {
            Ok(response) => {
                break Ok(response);
            }
            Err(error) => {
                if retries > 0 {
                    log::warn!(
                        "{error} ({retries} {} left)",
                        if retries == 1 { "retry" } else { "retries" }
                    );
                    retries -= 1;
                } else {
                    break Err(error);
                }
            }
        }
    }
}
