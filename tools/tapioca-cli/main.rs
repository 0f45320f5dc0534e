use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::fs;
use std::time::Instant;
use tapioca::prelude::*;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// CLI-side mirror of the sweetness levels, so clap can list them.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum SweetnessCli {
    No,
    Low,
    Half,
    Less,
    Full,
}

impl From<SweetnessCli> for Sweetness {
    fn from(value: SweetnessCli) -> Self {
        match value {
            SweetnessCli::No => Sweetness::NoSugar,
            SweetnessCli::Low => Sweetness::LowSugar,
            SweetnessCli::Half => Sweetness::HalfSugar,
            SweetnessCli::Less => Sweetness::LessSugar,
            SweetnessCli::Full => Sweetness::FullSugar,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TierCli {
    Low,
    Medium,
    High,
}

impl From<TierCli> for CalorieTier {
    fn from(value: TierCli) -> Self {
        match value {
            TierCli::Low => CalorieTier::Low,
            TierCli::Medium => CalorieTier::Medium,
            TierCli::High => CalorieTier::High,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortKeyCli {
    Name,
    Brand,
    Calories,
    Caffeine,
}

impl From<SortKeyCli> for SortKey {
    fn from(value: SortKeyCli) -> Self {
        match value {
            SortKeyCli::Name => SortKey::Name,
            SortKeyCli::Brand => SortKey::Brand,
            SortKeyCli::Calories => SortKey::Calories,
            SortKeyCli::Caffeine => SortKey::Caffeine,
        }
    }
}

/// Browse, filter and get recommendations from a bubble-tea catalogue
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the catalogue JSON file
    #[arg(short, long, default_value = "data/drinks.json")]
    catalogue: String,

    /// Seed for reproducible recommendations
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Log engine decisions (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List drinks matching the filters, sorted
    List {
        #[command(flatten)]
        filters: FilterArgs,
        /// Field to sort by
        #[arg(long, value_enum, default_value = "name")]
        sort_by: SortKeyCli,
        /// Sort in descending order
        #[arg(long)]
        desc: bool,
    },
    /// Recommend one drink matching the filters
    Recommend {
        #[command(flatten)]
        filters: FilterArgs,
        #[command(flatten)]
        preferences: PreferenceArgs,
    },
    /// Several distinct recommendations for today
    Daily {
        #[command(flatten)]
        filters: FilterArgs,
        /// How many drinks to pick
        #[arg(long, default_value_t = 3)]
        count: usize,
    },
    /// Show the values every filter accepts
    Options,
    /// Print the store search query for a brand
    Stores {
        /// Brand to search for
        brand: String,
    },
}

#[derive(Args, Debug)]
struct FilterArgs {
    /// Only drinks of this brand
    #[arg(long)]
    brand: Option<String>,
    /// Only drinks with exactly this name
    #[arg(long)]
    drink: Option<String>,
    /// Only drinks offered at this sweetness
    #[arg(long, value_enum)]
    sweetness: Option<SweetnessCli>,
    /// Only drinks in this calorie tier
    #[arg(long, value_enum)]
    tier: Option<TierCli>,
    /// Only drinks with (true) or without (false) caffeine
    #[arg(long)]
    caffeine: Option<bool>,
}

impl FilterArgs {
    fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            brand: self.brand.clone(),
            drink_type: self.drink.clone(),
            sweetness: self.sweetness.map(Sweetness::from),
            calorie_tier: self.tier.map(CalorieTier::from),
            caffeine: self.caffeine,
        }
    }
}

#[derive(Args, Debug)]
struct PreferenceArgs {
    /// Load preferences from a JSON file; other preference flags are then ignored
    #[arg(long)]
    prefs: Option<String>,
    /// Lean towards lower-calorie drinks and sweetness
    #[arg(long)]
    healthy: bool,
    /// Lean towards drinks with (true) or without (false) caffeine
    #[arg(long)]
    prefer_caffeine: Option<bool>,
    /// Favourite brand (repeatable)
    #[arg(long = "favorite")]
    favorites: Vec<String>,
    /// Preferred sweetness when the drink offers it
    #[arg(long, value_enum)]
    prefer_sweetness: Option<SweetnessCli>,
}

impl PreferenceArgs {
    fn is_set(&self) -> bool {
        self.prefs.is_some()
            || self.healthy
            || self.prefer_caffeine.is_some()
            || !self.favorites.is_empty()
            || self.prefer_sweetness.is_some()
    }

    fn load(&self) -> Preferences {
        if let Some(path) = &self.prefs {
            let json = fs::read_to_string(path).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to read preferences file '{path}': {e}"))
            });
            return serde_json::from_str(&json).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to parse preferences file '{path}': {e}"))
            });
        }

        Preferences {
            health_conscious: self.healthy,
            prefer_caffeine: self.prefer_caffeine,
            favorite_brands: self.favorites.iter().cloned().collect(),
            preferred_sweetness: self.prefer_sweetness.map(Sweetness::from),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let load_start = Instant::now();
    let catalogue = load_catalogue(&cli.catalogue);
    debug!(elapsed = ?load_start.elapsed(), path = %cli.catalogue, "catalogue loaded");

    let mut engine = match cli.seed {
        Some(seed) => RecommendationEngine::seeded(seed),
        None => RecommendationEngine::from_entropy(),
    };

    match cli.command {
        Command::List {
            filters,
            sort_by,
            desc,
        } => {
            let order = if desc {
                SortOrder::Descending
            } else {
                SortOrder::Ascending
            };
            let drinks = sorted(
                apply_filters(&catalogue, &filters.criteria()),
                sort_by.into(),
                order,
            );
            if cli.json {
                print_json(&drinks);
            } else {
                print_listing(&drinks);
            }
        }
        Command::Recommend {
            filters,
            preferences,
        } => {
            let drinks = apply_filters(&catalogue, &filters.criteria());
            let pick = if preferences.is_set() {
                engine.weighted_pick(&drinks, &preferences.load())
            } else {
                engine.uniform_pick(&drinks)
            };
            match pick {
                Some(pick) if cli.json => print_json(&pick),
                Some(pick) => print_recommendation(&pick),
                None => println!("沒有符合條件的飲品，請調整篩選條件後再試一次"),
            }
        }
        Command::Daily { filters, count } => {
            let drinks = apply_filters(&catalogue, &filters.criteria());
            let picks = engine.daily_picks(&drinks, count);
            if cli.json {
                print_json(&picks);
            } else if picks.is_empty() {
                println!("沒有符合條件的飲品，請調整篩選條件後再試一次");
            } else {
                for (index, pick) in picks.iter().enumerate() {
                    println!("#{}", index + 1);
                    print_recommendation(pick);
                }
            }
        }
        Command::Options => {
            let options = filter_options(&catalogue);
            if cli.json {
                print_json(&options);
            } else {
                println!("Brands:      {}", options.brands.join(", "));
                println!("Drink types: {}", options.drink_types.join(", "));
                for level in &options.sweetness_levels {
                    println!("Sweetness:   {} ({})", level.key, level.label);
                }
                for tier in &options.calorie_ranges {
                    println!("Calories:    {} ({})", tier.key, tier.label);
                }
            }
        }
        Command::Stores { brand } => println!("{}", store_search_query(&brand)),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("tapioca=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_catalogue(path: &str) -> Catalogue {
    let json = fs::read_to_string(path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to read catalogue '{path}': {e}")));
    Catalogue::from_json_str(&json)
        .unwrap_or_else(|e| exit_with_error(&format!("Invalid catalogue '{path}': {e}")))
}

fn print_listing(drinks: &[DrinkRecord]) {
    if drinks.is_empty() {
        println!("沒有符合條件的飲品，請調整篩選條件後再試一次");
        return;
    }
    println!("共找到 {} 款飲品", drinks.len());
    for drink in drinks {
        let card = DrinkCard::full_sugar(drink);
        println!(
            "  {:<12} {:<16} {:>6} kcal  [{}]  {}",
            card.brand, card.name, card.calories, card.tier, card.caffeine_label
        );
    }
}

fn print_recommendation(pick: &Recommendation) {
    let card = DrinkCard::new(&pick.drink, pick.sweetness);
    println!("  -> {} / {}", card.brand, card.name);
    println!(
        "  -> {} · {} kcal · {}g sugar · {}",
        card.sweetness_label, card.calories, card.sugar_grams, card.caffeine_label
    );
    if let Some(reason) = &pick.reason {
        println!("  -> {reason}");
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => exit_with_error(&format!("Failed to serialize output: {e}")),
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {message}");
    std::process::exit(1);
}
