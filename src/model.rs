use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where an ingredient sits on the shopping list.
///
/// The variant order is the display order of the grouped ingredient index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Meat,
    Veggie,
    Seasoning,
    Dairy,
    Pantry,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Meat => "meat",
            Category::Veggie => "veggie",
            Category::Seasoning => "seasoning",
            Category::Dairy => "dairy",
            Category::Pantry => "pantry",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse recipe classification, independent of ingredients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Dish,
    Bakery,
    Dessert,
}

impl Tag {
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Dish => "dish",
            Tag::Bakery => "bakery",
            Tag::Dessert => "dessert",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown tag: {0}")]
pub struct UnknownTag(String);

impl FromStr for Tag {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dish" => Ok(Tag::Dish),
            "bakery" => Ok(Tag::Bakery),
            "dessert" => Ok(Tag::Dessert),
            other => Err(UnknownTag(other.to_string())),
        }
    }
}

/// The active tag filter: everything, or recipes carrying one specific tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TagFilter {
    #[default]
    All,
    Only(Tag),
}

impl TagFilter {
    pub fn matches(self, tags: &BTreeSet<Tag>) -> bool {
        match self {
            TagFilter::All => true,
            TagFilter::Only(tag) => tags.contains(&tag),
        }
    }
}

impl FromStr for TagFilter {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(TagFilter::All)
        } else {
            s.parse().map(TagFilter::Only)
        }
    }
}

/// One ingredient line of a recipe.
///
/// `key` is the stable machine identifier; `name` is the localized display
/// text and differs between language documents for the same key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub key: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    pub category: Category,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<String>>,
    #[serde(default, rename = "videoLink", skip_serializing_if = "Option::is_none")]
    pub video_link: Option<String>,
    #[serde(default)]
    pub tags: BTreeSet<Tag>,
}
