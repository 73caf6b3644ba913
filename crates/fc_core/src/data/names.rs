//! Fictional name pools by region.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Northland,
    Southland,
}

impl Region {
    pub const ALL: [Region; 2] = [Region::Northland, Region::Southland];

    pub fn label(&self) -> &'static str {
        match self {
            Region::Northland => "Northland",
            Region::Southland => "Southland",
        }
    }

    pub fn first_names(&self) -> &'static [&'static str] {
        match self {
            Region::Northland => NORTHLAND_FIRST,
            Region::Southland => SOUTHLAND_FIRST,
        }
    }

    pub fn last_names(&self) -> &'static [&'static str] {
        match self {
            Region::Northland => NORTHLAND_LAST,
            Region::Southland => SOUTHLAND_LAST,
        }
    }

    pub fn cities(&self) -> &'static [&'static str] {
        match self {
            Region::Northland => NORTHLAND_CITIES,
            Region::Southland => SOUTHLAND_CITIES,
        }
    }

    pub fn random_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let first = self.first_names().choose(rng).copied().unwrap_or("Alex");
        let last = self.last_names().choose(rng).copied().unwrap_or("Smith");
        format!("{} {}", first, last)
    }
}

pub const CLUB_SUFFIXES: &[&str] =
    &["FC", "United", "City", "Athletic", "Rovers", "Wanderers", "Town", "Albion"];

const NORTHLAND_FIRST: &[&str] = &[
    "Aldric", "Bram", "Callum", "Dorian", "Edwin", "Finn", "Gareth", "Harlan", "Ivo", "Jasper",
    "Kelvin", "Lachlan", "Magnus", "Niall", "Oswin", "Perrin", "Quinn", "Rowan", "Soren", "Tobias",
    "Ulric", "Viggo", "Wendel", "Yorick",
];

const NORTHLAND_LAST: &[&str] = &[
    "Ashdown", "Blackwell", "Carver", "Dunmore", "Elsworth", "Fairbrook", "Greaves", "Holloway",
    "Ingram", "Kettering", "Lowther", "Marsden", "Northcott", "Oakley", "Pembury", "Radley",
    "Stanforth", "Thorne", "Underhill", "Westbury", "Whitlock", "Yardley",
];

const SOUTHLAND_FIRST: &[&str] = &[
    "Adrian", "Bastian", "Cristo", "Dario", "Elio", "Fabio", "Gael", "Hugo", "Iker", "Joaquin",
    "Lucio", "Mateo", "Nico", "Oriol", "Pablo", "Rafael", "Santi", "Tiago", "Unai", "Valerio",
];

const SOUTHLAND_LAST: &[&str] = &[
    "Alvarado", "Bellamar", "Cordova", "Duarte", "Esparza", "Ferreira", "Galvez", "Herrera",
    "Ibarra", "Lozano", "Madera", "Navarro", "Olivera", "Prado", "Quintero", "Robles", "Salcedo",
    "Toledo", "Valverde", "Zamora",
];

const NORTHLAND_CITIES: &[&str] = &[
    "Ashford", "Brackenridge", "Coldharbour", "Dunwick", "Eastmere", "Fallowfield", "Grimsby Vale",
    "Hartlepool Cross", "Ironbridge", "Kingsholm", "Langdale", "Millbrook", "Newhaven", "Oldcastle",
    "Penrith Moor", "Redcliffe", "Stonebury", "Thornaby", "Upton Marsh", "Wexley", "Whitford",
    "Yarrow", "Aldermoor", "Barrowgate", "Cresthill", "Dovercourt", "Elmstead", "Fenwick",
    "Glenholme", "Highcombe", "Ivybridge", "Kirkwall Bay", "Lowestead", "Marlow Heath",
    "Northwold", "Oakhampton", "Pilton", "Ravensworth", "Sandmere", "Tidewell", "Underby",
    "Westerham", "Windmoor", "Ashcombe", "Beckford", "Carnforth", "Darnley", "Egremont",
    "Fulbourne", "Gosforth", "Hawkshead", "Irthing", "Keswick Down", "Ludford", "Mossley",
    "Netherby", "Ormskirk Green", "Prestwold", "Rookhope", "Selworth", "Tarnbrook", "Ulverby",
    "Wraybury", "Yelland",
];

const SOUTHLAND_CITIES: &[&str] = &[
    "Almaraz", "Benaroca", "Calvera", "Doroteo", "Esteral", "Fuentecilla", "Granadera", "Huelvar",
    "Isolana", "Jarandilla", "Lumbrera", "Marbosa", "Navalta", "Olmedilla", "Palmares",
    "Quintanar", "Riosol", "Santa Brisa", "Toroval", "Urdaneta", "Valdemar", "Zarzosa",
    "Alcaraz del Mar", "Bellaterra", "Costaluz", "Durango Viejo", "Escalante", "Finisterra",
    "Guadalora", "Herradura", "Illescas Nuevo", "Jumilla Alta", "Lorcana", "Montefrio",
    "Nerval", "Orcera", "Puebla Roja", "Ronda Sur", "Solana", "Tarifa Vieja", "Ubrique",
    "Villaverde", "Zafra Norte", "Albarracin", "Baena", "Cazorla", "Daimiel", "Ecija Baja",
    "Fraga", "Gandia Sol", "Hellin", "Iznajar", "Jaraiz", "Lucena", "Mojacar", "Nerja Alta",
    "Osuna", "Priego", "Requena", "Siguenza", "Teba", "Utrera", "Velez", "Zuheros",
];

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_random_name_uses_region_pool() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let name = Region::Southland.random_name(&mut rng);
        let first = name.split(' ').next().unwrap_or_default();
        assert!(SOUTHLAND_FIRST.contains(&first), "{} not a Southland name", name);
    }

    #[test]
    fn test_enough_cities_for_four_full_divisions() {
        for region in Region::ALL {
            assert!(region.cities().len() >= 64);
        }
    }
}
