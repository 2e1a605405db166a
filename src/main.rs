use pokeapi;

use crate::pokeapi::effectiveness;
use crate::pokeapi::pokemon::{Artwork, Id, Stat, Type};
use crate::pokeapi::store;
use crate::pokeapi::{Catalog, Session, Source};

use std::env;

#[tokio::main]
async fn main() -> Result<(), anywho::Error> {
    tracing_subscriber::fmt::init();

    let session = Session::new();
    let args: Vec<String> = env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        None | Some("list") => list(&session, false).await,
        Some("refresh") => list(&session, true).await,
        Some("artwork") => match args.get(1).and_then(|arg| arg.parse().ok()) {
            Some(id) => artwork(&session, Id(id)).await,
            None => usage(),
        },
        Some(command) => match command.parse() {
            Ok(id) => show(&session, Id(id)).await,
            Err(_) => usage(),
        },
    }
}

async fn list(session: &Session, refresh: bool) -> Result<(), anywho::Error> {
    let mut catalog = Catalog::new(session.clone(), session.clone(), store::File::new());

    let entries = if refresh {
        catalog.refresh().await?
    } else {
        catalog.load().await?
    };

    if entries.is_empty() {
        println!("No Pokémon available. Are you offline?");

        return Ok(());
    }

    for entry in &entries {
        println!("#{id}  {name}", id = entry.id, name = entry.name);
    }

    Ok(())
}

async fn show(session: &Session, id: Id) -> Result<(), anywho::Error> {
    use futures_util::future;

    let (pokemon, species) = future::try_join(session.pokemon(id), session.species(id)).await?;

    println!("{name} #{id}", name = pokemon.name, id = pokemon.id);
    println!();

    if !species.flavor_text.is_empty() {
        println!("{}", species.flavor_text);
        println!();
    }

    println!("Height    {:.1} m", pokemon.height_meters());
    println!("Weight    {:.1} kg", pokemon.weight_kilograms());

    if !species.genus.is_empty() {
        println!("Category  {}", species.genus);
    }

    println!("Type      {}", join(&pokemon.types));

    println!();
    println!("Stats");

    for stat in &pokemon.stats {
        println!(
            "  {label:<4} {base:>3} {bar}",
            label = stat.label(),
            base = stat.base,
            bar = bar(stat)
        );
    }

    println!();

    match effectiveness::resolve(session, &pokemon.types).await {
        Ok(effectiveness) => {
            println!("Weak against    {}", join(&effectiveness.weaknesses));
            println!("Strong against  {}", join(&effectiveness.strengths));
        }
        Err(error) => {
            log::warn!("{error}");
            println!("Weak against    (unavailable)");
            println!("Strong against  (unavailable)");
        }
    }

    Ok(())
}

async fn artwork(session: &Session, id: Id) -> Result<(), anywho::Error> {
    let pokemon = session.pokemon(id).await?;
    let artwork = Artwork::download(&pokemon, session).await?;

    let path = format!("{name}.png", name = pokemon.name.to_lowercase());
    tokio::fs::write(&path, &artwork.bytes).await?;

    println!("Saved {path} ({} bytes)", artwork.bytes.len());

    Ok(())
}

fn bar(stat: &Stat) -> String {
    let filled = (stat.base.min(Stat::MAX_BASE) * 20 / Stat::MAX_BASE) as usize;

    format!("{}{}", "#".repeat(filled), ".".repeat(20 - filled))
}

fn join<'a>(types: impl IntoIterator<Item = &'a Type>) -> String {
    let names: Vec<_> = types.into_iter().map(|type_| type_.name()).collect();

    if names.is_empty() {
        "none".to_owned()
    } else {
        names.join(", ")
    }
}

fn usage() -> Result<(), anywho::Error> {
    eprintln!("Usage: pokedex [list | refresh | <id> | artwork <id>]");

    Ok(())
}
