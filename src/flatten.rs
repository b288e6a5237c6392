use std::slice;

use crate::domain::{FlattenedPerson, Person};
use crate::error::ArchiveError;
use crate::resolve::resolve_names;
use crate::swapi::SwapiClient;

/// Flattens one fetched person: the five reference fields resolve
/// concurrently with each other, scalars are copied verbatim. The singular
/// homeworld takes the same list path as the plural fields, wrapped as a
/// one-element slice. Callers filter absent people before this point.
pub async fn flatten_person<C>(client: &C, person: Person) -> Result<FlattenedPerson, ArchiveError>
where
    C: SwapiClient + ?Sized,
{
    let (films, homeworld, species, starships, vehicles) = futures::try_join!(
        resolve_names(client, &person.films, "title"),
        resolve_names(client, slice::from_ref(&person.homeworld), "name"),
        resolve_names(client, &person.species, "name"),
        resolve_names(client, &person.starships, "name"),
        resolve_names(client, &person.vehicles, "name"),
    )?;

    Ok(FlattenedPerson {
        birth_year: person.birth_year,
        eye_color: person.eye_color,
        films,
        gender: person.gender,
        hair_color: person.hair_color,
        height: person.height,
        homeworld,
        mass: person.mass,
        name: person.name,
        skin_color: person.skin_color,
        species,
        starships,
        vehicles,
    })
}
