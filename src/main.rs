use std::env;
use std::process;
use std::time::Duration;

use recipe_catalog::config::CatalogConfig;
use recipe_catalog::{ui_text, CatalogStore, HttpSource, Language, TagFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = CatalogConfig::load().unwrap_or_default();

    let args: Vec<String> = env::args().collect();
    let language: Language = match args.get(1) {
        Some(arg) => arg.parse()?,
        None => config.default_language,
    };

    let mut tag = TagFilter::All;
    let mut selected: Vec<String> = Vec::new();
    let mut rest = args.iter().skip(2);
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--tag" => {
                tag = rest.next().ok_or("--tag needs a value")?.parse()?;
            }
            "--with" => {
                let keys = rest.next().ok_or("--with needs a value")?;
                selected.extend(keys.split(',').map(str::to_string));
            }
            other => return Err(format!("unknown argument: {other}").into()),
        }
    }

    let source = HttpSource::new(
        &config.base_url,
        Some(Duration::from_secs(config.timeout)),
    );
    let mut store = CatalogStore::builder()
        .source(source)
        .language(language)
        .theme_path(&config.theme_file)
        .build()?;

    store.set_tag(tag);
    for key in &selected {
        store.toggle_ingredient(key);
    }
    store.select_language(language).await;

    let text = ui_text(store.language());
    if let Some(err) = store.error() {
        eprintln!("{}: {err}", text.error);
        process::exit(1);
    }

    println!("{}", text.title);
    println!();

    println!("{}", text.ingredients);
    for (category, ingredients) in store.ingredient_index() {
        let names: Vec<&str> = ingredients.iter().map(|i| i.name.as_str()).collect();
        println!("  [{}] {}", text.category(*category), names.join(", "));
    }
    println!();

    println!("{} ({})", text.filter_title, text.tag_filter(tag));
    let filtered = store.filtered_recipes();
    if filtered.is_empty() {
        println!("  {}", text.no_results);
        return Ok(());
    }
    for recipe in filtered {
        println!("  - {} ({})", recipe.title, recipe.id);
    }

    Ok(())
}
