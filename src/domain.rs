use serde::Deserialize;

// Scalars stay verbatim strings, which is how the API serves them
// ("unknown", "172", "19BBY"). Reference fields hold secondary-resource URLs.
#[derive(Debug, Clone, Deserialize)]
pub struct Person {
    pub birth_year: String,
    pub eye_color: String,
    pub gender: String,
    pub hair_color: String,
    pub height: String,
    pub mass: String,
    pub name: String,
    pub skin_color: String,
    pub films: Vec<String>,
    pub homeworld: String,
    pub species: Vec<String>,
    pub starships: Vec<String>,
    pub vehicles: Vec<String>,
}

// A reference list that resolved to nothing is the empty string, never an
// absent column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenedPerson {
    pub birth_year: String,
    pub eye_color: String,
    pub films: String,
    pub gender: String,
    pub hair_color: String,
    pub height: String,
    pub homeworld: String,
    pub mass: String,
    pub name: String,
    pub skin_color: String,
    pub species: String,
    pub starships: String,
    pub vehicles: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn luke_json() -> serde_json::Value {
        serde_json::json!({
            "name": "Luke Skywalker",
            "height": "172",
            "mass": "77",
            "hair_color": "blond",
            "skin_color": "fair",
            "eye_color": "blue",
            "birth_year": "19BBY",
            "gender": "male",
            "homeworld": "https://swapi.py4e.com/api/planets/1/",
            "films": [
                "https://swapi.py4e.com/api/films/1/",
                "https://swapi.py4e.com/api/films/2/"
            ],
            "species": ["https://swapi.py4e.com/api/species/1/"],
            "vehicles": [],
            "starships": ["https://swapi.py4e.com/api/starships/12/"],
            "created": "2014-12-09T13:50:51.644000Z",
            "edited": "2014-12-20T21:17:56.891000Z",
            "url": "https://swapi.py4e.com/api/people/1/"
        })
    }

    #[test]
    fn deserialize_ignores_extra_keys() {
        let person: Person = serde_json::from_value(luke_json()).unwrap();
        assert_eq!(person.name, "Luke Skywalker");
        assert_eq!(person.films.len(), 2);
        assert!(person.vehicles.is_empty());
    }

    #[test]
    fn deserialize_rejects_missing_key() {
        let mut payload = luke_json();
        payload.as_object_mut().unwrap().remove("mass");
        let result = serde_json::from_value::<Person>(payload);
        assert!(result.is_err());
    }
}
