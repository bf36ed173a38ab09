//! Interactive menu session.
//!
//! Reads one line per prompt and drives a `Workshop`. End of input at any
//! prompt closes the session the same way as choosing "Quit".

use crate::render;
use alchemy_core::{Result, Workshop};
use std::io::{BufRead, Write};

/// A menu entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    AddRecipe,
    ListRecipes,
    SearchByName,
    SearchByIngredient,
    Dispense,
    Return,
    ShowStock,
    Quit,
}

/// Why a menu input was not accepted
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChoiceError {
    NotANumber,
    OutOfRange,
}

impl MenuChoice {
    pub fn parse(input: &str) -> std::result::Result<Self, ChoiceError> {
        let number: i64 = input.trim().parse().map_err(|_| ChoiceError::NotANumber)?;
        let choice = match number {
            1 => MenuChoice::AddRecipe,
            2 => MenuChoice::ListRecipes,
            3 => MenuChoice::SearchByName,
            4 => MenuChoice::SearchByIngredient,
            5 => MenuChoice::Dispense,
            6 => MenuChoice::Return,
            7 => MenuChoice::ShowStock,
            8 => MenuChoice::Quit,
            _ => return Err(ChoiceError::OutOfRange),
        };
        Ok(choice)
    }
}

/// Whether the session keeps going after a handler
enum Flow {
    Continue,
    Exit,
}

pub struct Session<R, W> {
    workshop: Workshop,
    input: R,
    output: W,
    terminators: Vec<String>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(workshop: Workshop, input: R, output: W, terminators: Vec<String>) -> Self {
        Self {
            workshop,
            input,
            output,
            terminators,
        }
    }

    #[cfg(test)]
    pub fn into_workshop(self) -> Workshop {
        self.workshop
    }

    /// Run the menu loop until "Quit" or end of input
    pub fn run(&mut self) -> Result<()> {
        loop {
            render::menu(&mut self.output)?;
            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                break;
            };

            let flow = match MenuChoice::parse(&line) {
                Ok(MenuChoice::Quit) => Flow::Exit,
                Ok(choice) => self.handle(choice)?,
                Err(ChoiceError::NotANumber) => {
                    tracing::debug!("Rejected non-numeric menu input {:?}", line);
                    writeln!(self.output, "Invalid input. Please enter a number.")?;
                    Flow::Continue
                }
                Err(ChoiceError::OutOfRange) => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    Flow::Continue
                }
            };

            if let Flow::Exit = flow {
                break;
            }
        }

        writeln!(self.output, "Closing the workshop...")?;
        self.output.flush()?;
        Ok(())
    }

    fn handle(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::AddRecipe => self.add_recipe(),
            MenuChoice::ListRecipes => {
                render::recipe_list(&mut self.output, self.workshop.list_recipes())?;
                Ok(Flow::Continue)
            }
            MenuChoice::SearchByName => self.search_by_name(),
            MenuChoice::SearchByIngredient => self.search_by_ingredient(),
            MenuChoice::Dispense => self.dispense(),
            MenuChoice::Return => self.return_one(),
            MenuChoice::ShowStock => {
                render::stock_table(&mut self.output, self.workshop.stock_snapshot())?;
                Ok(Flow::Continue)
            }
            MenuChoice::Quit => Ok(Flow::Exit),
        }
    }

    fn add_recipe(&mut self) -> Result<Flow> {
        let Some(name) = self.prompt("Potion name: ")? else {
            return Ok(Flow::Exit);
        };
        if name.is_empty() {
            writeln!(self.output, "Potion name cannot be empty.")?;
            return Ok(Flow::Continue);
        }

        writeln!(
            self.output,
            "Enter ingredients one per line ('{}' to finish).",
            self.terminators.join("' or '")
        )?;

        let mut ingredients = Vec::new();
        loop {
            let Some(ingredient) = self.prompt("Ingredient: ")? else {
                return Ok(Flow::Exit);
            };
            if self.terminators.contains(&ingredient) {
                break;
            }
            ingredients.push(ingredient);
        }

        if ingredients.is_empty() {
            writeln!(self.output, "No ingredients entered, recipe not added.")?;
            return Ok(Flow::Continue);
        }

        match self.workshop.try_register_recipe(&name, &ingredients) {
            Ok(()) => writeln!(self.output, "✓ Added recipe '{}'", name)?,
            Err(e) => render::failure(&mut self.output, &e)?,
        }
        Ok(Flow::Continue)
    }

    fn search_by_name(&mut self) -> Result<Flow> {
        let Some(name) = self.prompt("Potion name to search: ")? else {
            return Ok(Flow::Exit);
        };

        match self.workshop.search_by_name(&name) {
            Some(recipe) => render::recipe(&mut self.output, recipe)?,
            None => writeln!(self.output, "No recipe named '{}'.", name)?,
        }
        Ok(Flow::Continue)
    }

    fn search_by_ingredient(&mut self) -> Result<Flow> {
        let Some(ingredient) = self.prompt("Ingredient to search: ")? else {
            return Ok(Flow::Exit);
        };

        let matches = self.workshop.search_by_ingredient(&ingredient);
        render::ingredient_matches(&mut self.output, &ingredient, &matches)?;
        Ok(Flow::Continue)
    }

    fn dispense(&mut self) -> Result<Flow> {
        let Some(name) = self.prompt("Potion to dispense: ")? else {
            return Ok(Flow::Exit);
        };

        match self.workshop.try_dispense(&name) {
            Ok(left) => writeln!(
                self.output,
                "✓ Dispensed '{}'. Remaining stock: {}",
                name, left
            )?,
            Err(e) => render::failure(&mut self.output, &e)?,
        }
        Ok(Flow::Continue)
    }

    fn return_one(&mut self) -> Result<Flow> {
        let Some(name) = self.prompt("Potion to return: ")? else {
            return Ok(Flow::Exit);
        };

        match self.workshop.try_return_one(&name) {
            Ok(count) => writeln!(
                self.output,
                "✓ Returned '{}'. Stock is now {}",
                name, count
            )?,
            Err(e) => render::failure(&mut self.output, &e)?,
        }
        Ok(Flow::Continue)
    }

    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Next input line without its line ending, `None` at end of input
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}
