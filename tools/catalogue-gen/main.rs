use clap::Parser;
use indexmap::IndexMap;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::fs;
use tapioca::catalogue::{BrandRecord, Catalogue, CalorieEntry, ProductEntry, Sweetness};

/// A CLI tool to generate a random, structurally valid drink catalogue
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_drinks.json")]
    output: String,

    /// Number of brands to generate
    #[arg(long, default_value_t = 5)]
    brands: usize,

    /// The minimum number of products per brand
    #[arg(long, default_value_t = 3)]
    min: usize,

    /// The maximum number of products per brand
    #[arg(long, default_value_t = 12)]
    max: usize,

    /// Seed for a reproducible catalogue
    #[arg(long)]
    seed: Option<u64>,
}

const BRAND_STEMS: [&str; 8] = ["清心", "春水", "五桐", "迷客", "可可", "大茗", "茶湯", "珍煮"];
const BASES: [&str; 8] = ["紅茶", "綠茶", "青茶", "烏龍", "奶茶", "拿鐵", "檸檬", "柳橙"];
const TOPPINGS: [&str; 6] = ["", "珍珠", "波霸", "椰果", "仙草", "布丁"];

/// Sugar share of each level relative to full sugar.
const SUGAR_SHARE: [(Sweetness, f64); 5] = [
    (Sweetness::NoSugar, 0.0),
    (Sweetness::LowSugar, 0.4),
    (Sweetness::HalfSugar, 0.6),
    (Sweetness::LessSugar, 0.8),
    (Sweetness::FullSugar, 1.0),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.min > cli.max {
        eprintln!(
            "Error: --min ({}) cannot be greater than --max ({})",
            cli.min, cli.max
        );
        std::process::exit(1);
    }

    let distinct_names = BASES.len() * TOPPINGS.len();
    let max = if cli.max > distinct_names {
        eprintln!(
            "Warning: --max ({}) exceeds the {distinct_names} distinct drink names available; clamping",
            cli.max
        );
        distinct_names
    } else {
        cli.max
    };
    let min = cli.min.min(max);

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    println!(
        "Generating catalogue with {} brand(s), {} to {} products each...",
        cli.brands, min, max
    );

    let mut brands = IndexMap::new();
    for index in 0..cli.brands {
        let name = brand_name(index);
        let count = rng.random_range(min..=max);
        let record = generate_brand(&mut rng, &name, count);
        println!("-> Generated {} product(s) for '{}'.", record.products.len(), name);
        brands.insert(name, record);
    }

    let catalogue = Catalogue { brands };
    catalogue.validate()?;

    let json_output = serde_json::to_string_pretty(&catalogue)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved {} drinks to '{}'",
        catalogue.product_count(),
        cli.output
    );

    Ok(())
}

fn brand_name(index: usize) -> String {
    let stem = BRAND_STEMS[index % BRAND_STEMS.len()];
    match index / BRAND_STEMS.len() {
        0 => stem.to_string(),
        round => format!("{stem}{}", round + 1),
    }
}

fn generate_brand(rng: &mut StdRng, brand: &str, count: usize) -> BrandRecord {
    let menu: Vec<(&str, &str)> = BASES
        .iter()
        .flat_map(|base| TOPPINGS.iter().map(move |topping| (*base, *topping)))
        .collect();
    let products = menu
        .choose_multiple(rng, count)
        .map(|(base, topping)| generate_product(rng, base, topping))
        .collect();

    BrandRecord {
        data_source: format!("{brand} 官方營養標示"),
        products,
    }
}

fn generate_product(rng: &mut StdRng, base: &str, topping: &str) -> ProductEntry {
    let name = format!("{topping}{base}");

    let milky = base == "奶茶" || base == "拿鐵";
    let caffeine = !matches!(base, "檸檬" | "柳橙");
    let base_kcal: f64 = if milky {
        rng.random_range(180.0..320.0)
    } else {
        rng.random_range(0.0..60.0)
    };
    let topping_kcal: f64 = if topping.is_empty() {
        0.0
    } else {
        rng.random_range(80.0..220.0)
    };
    let full_sugar_grams: f64 = rng.random_range(30.0..70.0);

    // Some drinks come pre-sweetened and cannot be made without sugar.
    let levels = if rng.random_bool(0.2) {
        &SUGAR_SHARE[2..]
    } else {
        &SUGAR_SHARE[..]
    };

    let calories = levels
        .iter()
        .map(|(level, share)| {
            let sugar = (full_sugar_grams * share).round();
            let kcal = (base_kcal + topping_kcal + sugar * 4.0).round();
            (*level, CalorieEntry::with_sugar(kcal, sugar))
        })
        .collect();

    ProductEntry {
        name,
        caffeine,
        calories,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn test_full_menu_yields_every_distinct_drink() {
        let mut rng = StdRng::seed_from_u64(1);
        let limit = BASES.len() * TOPPINGS.len();
        let record = generate_brand(&mut rng, "清心", limit);
        assert_eq!(record.products.len(), limit);
        assert_eq!(record.products.iter().map(|p| &p.name).unique().count(), limit);
    }

    #[test]
    fn test_generated_brand_is_valid() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut catalogue = Catalogue::default();
        catalogue
            .brands
            .insert("春水".to_string(), generate_brand(&mut rng, "春水", 10));
        assert!(catalogue.validate().is_ok());
        assert_eq!(catalogue.product_count(), 10);
    }
}
