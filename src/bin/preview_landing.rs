//! Preview binary - prints resolved landing text without starting the server
//!
//! Usage:
//!   cargo run --bin preview            # English (base record)
//!   cargo run --bin preview -- ml      # One language
//!   cargo run --bin preview -- --all   # Every supported language

use anyhow::Result;
use online_travel_landing::i18n::{fallback_fields, resolve, Language};

fn main() -> Result<()> {
    let arg = std::env::args().nth(1);

    let languages = match arg.as_deref() {
        Some("--all") => Language::ALL.to_vec(),
        Some(code) => vec![Language::from_code(code)?],
        None => vec![Language::canonical()],
    };

    for language in languages {
        print_language(language);
    }

    Ok(())
}

fn print_language(language: Language) {
    let record = resolve(language);
    let fallbacks = fallback_fields(language);

    println!("{}", "=".repeat(60));
    println!("{} [{}]", language.label(), language.code());
    println!("{}", "=".repeat(60));
    println!("title:         {}", record.title);
    println!("subtitle:      {}", record.subtitle);
    println!("ctaPrimary:    {}", record.cta_primary);
    println!("ctaSecondary:  {}", record.cta_secondary);
    println!("sectionTitle:  {}", record.section_title);
    println!("features:");
    for feature in record.features {
        println!("  • {}", feature);
    }
    println!("footer:        {}", record.footer);

    if !language.is_canonical() && !fallbacks.is_empty() {
        println!();
        println!("Falls back to English for: {}", fallbacks.join(", "));
    }
    println!();
}
