//! Option listing.

use selah::{HistoricalEra, Language, VisualStyle};
use strum::IntoEnumIterator;

/// Print every accepted value for the enumerated options.
pub fn list_options() {
    println!("Languages (--language):");
    for language in Language::iter() {
        println!("  {:<20}{}", language.cli_name(), language.label());
    }

    println!("\nVisual styles (--style):");
    for style in VisualStyle::iter() {
        println!("  {:<20}{}", style.cli_name(), style.label());
    }

    println!("\nHistorical eras (--era):");
    for era in HistoricalEra::iter() {
        println!("  {:<20}{}", era.cli_name(), era.label());
    }
}
