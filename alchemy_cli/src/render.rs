//! Text rendering for the interactive session and the one-shot commands.

use alchemy_core::{Recipe, StockRow, WorkshopError};
use std::io::{self, Write};

pub fn menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "╭─────────────────────────────────────────╮")?;
    writeln!(out, "│  ⚗  ALCHEMY WORKSHOP")?;
    writeln!(out, "╰─────────────────────────────────────────╯")?;
    writeln!(out, "1. Add recipe")?;
    writeln!(out, "2. List all recipes")?;
    writeln!(out, "3. Search by potion name")?;
    writeln!(out, "4. Search by ingredient")?;
    writeln!(out, "5. Dispense potion")?;
    writeln!(out, "6. Return potion")?;
    writeln!(out, "7. Show stock")?;
    writeln!(out, "8. Quit")?;
    write!(out, "Choice: ")?;
    out.flush()
}

pub fn recipe(out: &mut impl Write, recipe: &Recipe) -> io::Result<()> {
    writeln!(out, "- Potion: {}", recipe.name())?;
    writeln!(out, "  > Ingredients: {}", recipe.ingredients().join(", "))
}

pub fn recipe_list(out: &mut impl Write, recipes: &[Recipe]) -> io::Result<()> {
    if recipes.is_empty() {
        return writeln!(out, "No recipes registered yet.");
    }

    writeln!(out)?;
    writeln!(out, "--- [ All recipes ] ---")?;
    for r in recipes {
        recipe(out, r)?;
    }
    writeln!(out, "-----------------------")
}

pub fn ingredient_matches(
    out: &mut impl Write,
    ingredient: &str,
    matches: &[&Recipe],
) -> io::Result<()> {
    if matches.is_empty() {
        return writeln!(out, "No recipe uses '{}'.", ingredient);
    }

    writeln!(out)?;
    writeln!(out, "--- Recipes using '{}' ---", ingredient)?;
    for r in matches {
        recipe(out, r)?;
    }
    writeln!(out, "-----------------------")
}

pub fn stock_table<'a>(
    out: &mut impl Write,
    rows: impl IntoIterator<Item = StockRow<'a>>,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- [ Potion stock ] ---")?;
    for row in rows {
        writeln!(out, "{}: {}", row.name, row.count)?;
    }
    writeln!(out, "------------------------")
}

pub fn failure(out: &mut impl Write, err: &WorkshopError) -> io::Result<()> {
    writeln!(out, "✗ {}", err)
}
