use std::collections::BTreeMap;

use indoc::indoc;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::algorithms::Algorithm;
use crate::cost::Distance;
use crate::graph::Graph;
use crate::search::PathResult;
use crate::search::SearchError;
use crate::spatial::Coordinates;
use crate::spatial::Point;

const MAX_CITIES_DISPLAYED: usize = 32;

/// Five cities and the roads between them.
const SAMPLE: &str = indoc! {r#"
    {
      "cities": {
        "A": [0, 0],
        "B": [2, 1],
        "C": [4, 2],
        "D": [5, 5],
        "E": [1, 4]
      },
      "roads": {
        "A": ["B", "E"],
        "B": ["A", "C"],
        "C": ["B", "D"],
        "D": ["C"],
        "E": ["A", "D"]
      }
    }
"#};

/// Cities on a plane joined by roads.
///
/// Roads are one-way. Every city mentioned by a road has a position.
#[derive(Clone, Debug, PartialEq)]
pub struct RoadMap {
    pub graph: Graph<String>,
    pub coordinates: Coordinates<String>,
}

/// The on-disk layout of a [`RoadMap`].
#[derive(Debug, Serialize, Deserialize)]
struct RoadMapFile {
    cities: BTreeMap<String, Point>,
    #[serde(default)]
    roads: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Error)]
pub enum RoadMapError {
    #[error("Invalid road map: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error when loading '{p}': {e}")]
    IOError {
        p: std::path::PathBuf,
        e: std::io::Error,
    },
    #[error("Road {from} -> {to} mentions unknown city {city}")]
    UnknownCity {
        city: String,
        from: String,
        to: String,
    },
}

impl RoadMap {
    /// The five-city map used by the demo.
    pub fn sample() -> Self {
        match Self::try_from(SAMPLE) {
            Ok(map) => map,
            Err(e) => unreachable!("The sample map is broken: {e}"),
        }
    }

    /// The name [`RoadMap::random`] gives to its `i`-th city.
    pub fn city_name(i: usize) -> String {
        format!("N{i:03}")
    }

    /// A random map with `num_cities` cities on integer positions within
    /// `[0, extent]²`.
    ///
    /// Each city gets up to `max_roads` roads to other cities, most of them
    /// two-way. The same `rng` state always yields the same map.
    pub fn random<R: rand::Rng>(
        rng: &mut R,
        num_cities: usize,
        max_roads: usize,
        extent: u32,
    ) -> Self {
        let mut graph = Graph::new();
        let mut coordinates = Coordinates::new();

        for i in 0..num_cities {
            let x = rng.random_range(0..=extent);
            let y = rng.random_range(0..=extent);
            coordinates.insert(Self::city_name(i), Point::new(x as f64, y as f64));
        }
        if num_cities < 2 {
            return Self { graph, coordinates };
        }

        for i in 0..num_cities {
            let from = Self::city_name(i);
            for _ in 0..rng.random_range(0..=max_roads) {
                let j = rng.random_range(0..num_cities);
                let two_way = rng.random_bool(0.8);
                let to = Self::city_name(j);
                if i == j || graph.neighbours(&from).contains(&to) {
                    continue;
                }

                if two_way && !graph.neighbours(&to).contains(&from) {
                    graph.add_road(from.clone(), to);
                } else {
                    graph.add_edge(from.clone(), to);
                }
            }
        }

        Self { graph, coordinates }
    }

    pub fn num_cities(&self) -> usize {
        self.coordinates.len()
    }
    pub fn num_roads(&self) -> usize {
        self.graph.num_edges()
    }

    pub fn contains(&self, city: &str) -> bool {
        self.coordinates.contains(&city.to_string())
    }

    /// Looks for a path between two cities of this map.
    pub fn search(
        &self,
        algorithm: Algorithm,
        start: &str,
        goal: &str,
    ) -> Result<PathResult<String, Distance>, SearchError<String>> {
        algorithm.search(
            &self.graph,
            &self.coordinates,
            &start.to_string(),
            &goal.to_string(),
        )
    }

    fn from_file(file: RoadMapFile) -> Result<Self, RoadMapError> {
        let roads = file
            .roads
            .iter()
            .flat_map(|(from, tos)| tos.iter().map(move |to| (from, to)));
        for (from, to) in roads {
            for city in [from, to] {
                if !file.cities.contains_key(city) {
                    return Err(RoadMapError::UnknownCity {
                        city: city.clone(),
                        from: from.clone(),
                        to: to.clone(),
                    });
                }
            }
        }

        Ok(Self {
            graph: file.roads.into_iter().collect(),
            coordinates: file.cities.into_iter().collect(),
        })
    }
}

impl TryFrom<&str> for RoadMap {
    type Error = RoadMapError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let file: RoadMapFile = serde_json::from_str(s)?;
        Self::from_file(file)
    }
}

impl TryFrom<&std::path::Path> for RoadMap {
    type Error = RoadMapError;

    fn try_from(p: &std::path::Path) -> Result<Self, Self::Error> {
        let s = std::fs::read_to_string(p).map_err(|e| RoadMapError::IOError {
            p: p.to_path_buf(),
            e,
        })?;
        Self::try_from(s.as_str())
    }
}

impl std::fmt::Display for RoadMap {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(
            f,
            "RoadMap({} cities, {} roads):",
            self.num_cities(),
            self.num_roads()
        )?;

        let mut cities: Vec<_> = self.coordinates.iter().collect();
        cities.sort_by(|a, b| a.0.cmp(b.0));
        for (city, p) in cities.into_iter().take(MAX_CITIES_DISPLAYED) {
            writeln!(
                f,
                "  {city} {p} -> [{}]",
                self.graph.neighbours(city).join(", ")
            )?;
        }
        if self.num_cities() > MAX_CITIES_DISPLAYED {
            writeln!(f, "  ...")?;
        }

        Ok(())
    }
}
