/// One line of input at the client prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Name(String),
    Quantity(String),
    Submit,
    /// 1-based position in the rendered list.
    Edit(usize),
    Cancel,
    Delete(usize),
    Refresh,
    Help,
    Quit,
    Unknown(String),
}

pub const HELP: &str = "\
commands:
  name <text>    set the item name
  qty <number>   set the quantity
  submit         add the item, or save the edit
  edit <n>       load item n into the form
  cancel         leave edit mode
  delete <n>     delete item n (asks first)
  refresh        fetch the list again
  help           show this text
  quit           exit";

impl Command {
    pub fn parse(line: &str) -> Command {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let position = |rest: &str| rest.parse::<usize>().ok().filter(|n| *n > 0);

        match word.to_ascii_lowercase().as_str() {
            "name" => Command::Name(rest.to_string()),
            "qty" | "quantity" => Command::Quantity(rest.to_string()),
            "submit" | "save" => Command::Submit,
            "edit" => position(rest).map_or_else(|| Command::Unknown(line.to_string()), Command::Edit),
            "cancel" => Command::Cancel,
            "delete" | "rm" => position(rest).map_or_else(|| Command::Unknown(line.to_string()), Command::Delete),
            "refresh" | "r" => Command::Refresh,
            "help" | "?" | "" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => Command::Unknown(line.to_string()),
        }
    }
}

/// `y` or `yes`, any case; everything else declines.
pub fn is_confirmation(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
