use crate::widget::Event;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Dispatch(Event),
    ListPins,
    Show,
    Quit,
}

/// Parses one input line; `None` for blank lines, `Err` carries the usage hint.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };
    let command = match verb.to_ascii_lowercase().as_str() {
        "pin" if !rest.is_empty() => Command::Dispatch(Event::PinClicked(rest.to_string())),
        "amount" => Command::Dispatch(Event::AmountChanged(rest.to_string())),
        "convert" => Command::Dispatch(Event::ConvertRequested),
        "swap" => Command::Dispatch(Event::SwapRequested),
        "pins" => Command::ListPins,
        "show" => Command::Show,
        "quit" | "exit" => Command::Quit,
        _ => {
            return Err(format!(
                "unknown command '{}' (pin <country>, amount <value>, convert, swap, pins, show, quit)",
                line
            ));
        }
    };
    Ok(Some(command))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pin() {
        let result = parse_command("pin United States").unwrap();
        assert_eq!(
            result,
            Some(Command::Dispatch(Event::PinClicked("United States".to_string())))
        );
        assert!(parse_command("pin").is_err());
    }

    #[test]
    fn parse_amount() {
        let result = parse_command("  amount  12.5 ").unwrap();
        assert_eq!(
            result,
            Some(Command::Dispatch(Event::AmountChanged("12.5".to_string())))
        );
        let result = parse_command("amount").unwrap();
        assert_eq!(
            result,
            Some(Command::Dispatch(Event::AmountChanged(String::new())))
        );
    }

    #[test]
    fn parse_others() {
        assert_eq!(
            parse_command("CONVERT").unwrap(),
            Some(Command::Dispatch(Event::ConvertRequested))
        );
        assert_eq!(
            parse_command("swap").unwrap(),
            Some(Command::Dispatch(Event::SwapRequested))
        );
        assert_eq!(parse_command("pins").unwrap(), Some(Command::ListPins));
        assert_eq!(parse_command("show").unwrap(), Some(Command::Show));
        assert_eq!(parse_command("exit").unwrap(), Some(Command::Quit));
        assert_eq!(parse_command("   ").unwrap(), None);
        assert!(parse_command("history").is_err());
    }
}
