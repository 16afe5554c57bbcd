//! Line commands accepted by the terminal screen.

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Name(String),
    Description(String),
    Instructions(String),
    RemoveIngredient(usize),
    Next,
    Back,
    Done,
    Cancel,
    Ingredient(IngredientCommand),
    Help,
    Quit,
}

/// `ing ...` sub-commands driving the ingredient entry form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngredientCommand {
    Open,
    Name(String),
    Pick(String),
    Quantity(String),
    Unit(String),
    Confirm,
    Discard,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("empty input")]
    Empty,
    #[error("unknown command `{0}`, type `help`")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("`{0}` is not an ingredient number")]
    InvalidIndex(String),
}

pub const HELP: &str = "\
commands:
  name <text>        set the recipe name
  desc <text>        set the description
  steps <text>       set the instructions
  next | back        move between steps
  done               save the recipe (last step)
  cancel             discard the recipe
  rm <n>             remove ingredient number n
  ing                open the ingredient form
  ing name <text>    type the ingredient name (shows suggestions)
  ing pick <name>    take a suggestion
  ing qty <text>     set the quantity
  ing unit <text>    set the unit
  ing ok             add the ingredient
  ing drop           discard the ingredient form
  quit               leave without saving";

/// Parse one input line. Arguments keep their inner spacing.
pub fn parse(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (head, rest) = split_word(line);
    match head {
        "" => Err(CommandError::Empty),
        "name" => required(rest, "name").map(Command::Name),
        "desc" => Ok(Command::Description(rest.to_string())),
        "steps" => required(rest, "steps").map(Command::Instructions),
        "rm" => {
            let arg = required(rest, "rm")?;
            let number: usize = arg
                .parse()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| CommandError::InvalidIndex(arg.clone()))?;
            Ok(Command::RemoveIngredient(number - 1))
        }
        "next" => Ok(Command::Next),
        "back" => Ok(Command::Back),
        "done" => Ok(Command::Done),
        "cancel" => Ok(Command::Cancel),
        "ing" => parse_ingredient(rest).map(Command::Ingredient),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn parse_ingredient(rest: &str) -> Result<IngredientCommand, CommandError> {
    let (head, arg) = split_word(rest);
    match head {
        "" => Ok(IngredientCommand::Open),
        // The name may be typed empty to clear suggestions.
        "name" => Ok(IngredientCommand::Name(arg.to_string())),
        "pick" => required(arg, "ing pick").map(IngredientCommand::Pick),
        "qty" => Ok(IngredientCommand::Quantity(arg.to_string())),
        "unit" => Ok(IngredientCommand::Unit(arg.to_string())),
        "ok" => Ok(IngredientCommand::Confirm),
        "drop" => Ok(IngredientCommand::Discard),
        other => Err(CommandError::Unknown(format!("ing {other}"))),
    }
}

fn split_word(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (input, ""),
    }
}

fn required(arg: &str, command: &'static str) -> Result<String, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingArgument(command));
    }
    Ok(arg.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wizard_commands() {
        assert_eq!(parse("name  Tarta de manzana "), Ok(Command::Name("Tarta de manzana".to_string())));
        assert_eq!(parse("desc"), Ok(Command::Description(String::new())));
        assert_eq!(parse("steps Mezclar y hornear"), Ok(Command::Instructions("Mezclar y hornear".to_string())));
        assert_eq!(parse("next"), Ok(Command::Next));
        assert_eq!(parse("back"), Ok(Command::Back));
        assert_eq!(parse("done"), Ok(Command::Done));
        assert_eq!(parse("cancel"), Ok(Command::Cancel));
        assert_eq!(parse("rm 2"), Ok(Command::RemoveIngredient(1)));
    }

    #[test]
    fn parses_ingredient_commands() {
        assert_eq!(parse("ing"), Ok(Command::Ingredient(IngredientCommand::Open)));
        assert_eq!(
            parse("ing name har"),
            Ok(Command::Ingredient(IngredientCommand::Name("har".to_string())))
        );
        assert_eq!(
            parse("ing name"),
            Ok(Command::Ingredient(IngredientCommand::Name(String::new())))
        );
        assert_eq!(
            parse("ing pick Harina integral"),
            Ok(Command::Ingredient(IngredientCommand::Pick("Harina integral".to_string())))
        );
        assert_eq!(
            parse("ing qty 1,5"),
            Ok(Command::Ingredient(IngredientCommand::Quantity("1,5".to_string())))
        );
        assert_eq!(
            parse("ing unit Kg"),
            Ok(Command::Ingredient(IngredientCommand::Unit("Kg".to_string())))
        );
        assert_eq!(parse("ing ok"), Ok(Command::Ingredient(IngredientCommand::Confirm)));
        assert_eq!(parse("ing drop"), Ok(Command::Ingredient(IngredientCommand::Discard)));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(parse("   "), Err(CommandError::Empty));
        assert_eq!(parse("save"), Err(CommandError::Unknown("save".to_string())));
        assert_eq!(parse("name"), Err(CommandError::MissingArgument("name")));
        assert_eq!(parse("rm 0"), Err(CommandError::InvalidIndex("0".to_string())));
        assert_eq!(parse("rm x"), Err(CommandError::InvalidIndex("x".to_string())));
        assert_eq!(parse("ing eat"), Err(CommandError::Unknown("ing eat".to_string())));
    }
}
