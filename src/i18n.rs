use std::fmt;
use std::str::FromStr;

use icu::locale::{locale, Locale};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Category, Tag, TagFilter};

/// Languages the catalog ships recipe data and UI strings for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Cn,
    Fr,
}

impl Language {
    /// Code used in data file names (`{code}.json`) and config values.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Cn => "cn",
            Language::Fr => "fr",
        }
    }

    /// Collation locale used to sort ingredient names for display.
    /// Chinese collates in pinyin order, not codepoint order.
    pub fn collation_locale(self) -> Locale {
        match self {
            Language::En => locale!("en"),
            Language::Cn => locale!("zh-CN"),
            Language::Fr => locale!("fr"),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown language: {0}")]
pub struct UnknownLanguage(String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "cn" => Ok(Language::Cn),
            "fr" => Ok(Language::Fr),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}

/// The fixed set of UI strings for one language.
#[derive(Debug, Clone, Copy)]
pub struct UiText {
    pub title: &'static str,
    pub filter_title: &'static str,
    pub back_button: &'static str,
    pub video_link: &'static str,
    pub ingredients: &'static str,
    pub steps: &'static str,
    pub notes: &'static str,
    pub loading: &'static str,
    pub error: &'static str,
    pub no_results: &'static str,
    pub all: &'static str,
    pub dish: &'static str,
    pub bakery: &'static str,
    pub dessert: &'static str,
    pub meat: &'static str,
    pub veggie: &'static str,
    pub seasoning: &'static str,
    pub dairy: &'static str,
    pub pantry: &'static str,
}

impl UiText {
    pub fn category(&self, category: Category) -> &'static str {
        match category {
            Category::Meat => self.meat,
            Category::Veggie => self.veggie,
            Category::Seasoning => self.seasoning,
            Category::Dairy => self.dairy,
            Category::Pantry => self.pantry,
        }
    }

    pub fn tag(&self, tag: Tag) -> &'static str {
        match tag {
            Tag::Dish => self.dish,
            Tag::Bakery => self.bakery,
            Tag::Dessert => self.dessert,
        }
    }

    pub fn tag_filter(&self, filter: TagFilter) -> &'static str {
        match filter {
            TagFilter::All => self.all,
            TagFilter::Only(tag) => self.tag(tag),
        }
    }
}

static EN: UiText = UiText {
    title: "My Recipe Book",
    filter_title: "Filter by Ingredients",
    back_button: "Back to Recipes",
    video_link: "Watch Video",
    ingredients: "Ingredients",
    steps: "Steps",
    notes: "Notes",
    loading: "Loading recipes...",
    error: "Error",
    no_results: "No recipes match your filter.",
    all: "All",
    dish: "Dishes",
    bakery: "Bakery",
    dessert: "Desserts",
    meat: "Meat",
    veggie: "Veggie",
    seasoning: "Seasoning",
    dairy: "Dairy",
    pantry: "Pantry",
};

static CN: UiText = UiText {
    title: "我的食谱",
    filter_title: "按配料筛选",
    back_button: "返回食谱列表",
    video_link: "观看视频",
    ingredients: "配料",
    steps: "步骤",
    notes: "笔记",
    loading: "正在加载食谱...",
    error: "错误",
    no_results: "没有找到匹配的食谱。",
    all: "全部",
    dish: "菜肴",
    bakery: "烘焙",
    dessert: "甜点",
    meat: "肉类",
    veggie: "蔬菜",
    seasoning: "调味",
    dairy: "乳制品",
    pantry: "干货",
};

static FR: UiText = UiText {
    title: "Mon livre de recettes",
    filter_title: "Filtrer par ingrédients",
    back_button: "Retour aux recettes",
    video_link: "Voir la vidéo",
    ingredients: "Ingrédients",
    steps: "Étapes",
    notes: "Notes",
    loading: "Chargement des recettes...",
    error: "Erreur",
    no_results: "Aucune recette ne correspond à votre filtre.",
    all: "Toutes",
    dish: "Plats",
    bakery: "Boulangerie",
    dessert: "Desserts",
    meat: "Viandes",
    veggie: "Légumes",
    seasoning: "Assaisonnements",
    dairy: "Produits laitiers",
    pantry: "Épicerie",
};

pub fn ui_text(language: Language) -> &'static UiText {
    match language {
        Language::En => &EN,
        Language::Cn => &CN,
        Language::Fr => &FR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes_round_trip() {
        for lang in [Language::En, Language::Cn, Language::Fr] {
            assert_eq!(lang.code().parse::<Language>().unwrap(), lang);
        }
        assert!("de".parse::<Language>().is_err());
    }

    #[test]
    fn test_ui_text_per_language() {
        assert_eq!(ui_text(Language::En).title, "My Recipe Book");
        assert_eq!(ui_text(Language::Cn).title, "我的食谱");
        assert_eq!(ui_text(Language::Fr).title, "Mon livre de recettes");
    }

    #[test]
    fn test_category_and_tag_labels() {
        let text = ui_text(Language::Cn);
        assert_eq!(text.category(Category::Meat), "肉类");
        assert_eq!(text.tag(Tag::Dessert), "甜点");
        assert_eq!(text.tag_filter(TagFilter::All), "全部");
        assert_eq!(text.tag_filter(TagFilter::Only(Tag::Dish)), "菜肴");
    }
}
