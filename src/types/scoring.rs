use crate::types::evaluation::Category;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

pub type Score = f64;

/// Per-category averages for one evaluation. Every category always has a slot.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CategoryAverages {
    scores: [Option<Score>; 6],
}

impl CategoryAverages {
    pub fn from_fn(mut score: impl FnMut(Category) -> Option<Score>) -> Self {
        let mut scores = [None; 6];
        for category in Category::ALL {
            scores[category.index()] = score(category);
        }
        Self { scores }
    }

    pub fn get(&self, category: Category) -> Option<Score> {
        self.scores[category.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, Option<Score>)> + '_ {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }

    pub fn scored_count(&self) -> usize {
        self.scores.iter().filter(|score| score.is_some()).count()
    }
}

impl Serialize for CategoryAverages {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Category::ALL.len()))?;
        for (category, score) in self.iter() {
            map.serialize_entry(category.tag(), &score)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarPoint {
    pub label: String,
    pub value: Score,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarSeries {
    pub primary: Vec<RadarPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<Vec<RadarPoint>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedCategory {
    pub category: Category,
    pub average: Score,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Rankings {
    pub strengths: Vec<RankedCategory>,
    pub weaknesses: Vec<RankedCategory>,
}
