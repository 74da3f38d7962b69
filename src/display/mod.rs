use crate::conversion::{ConversionRequest, ConversionResult};
use crate::marketdata::CountrySelection;
use crate::selection::SelectionPair;

pub const PLACEHOLDER: &str = "—";
pub const CONVERTING: &str = "Converting...";

// enough fractional digits for the exact expansion of any f64
const EXACT_DIGITS: usize = 1100;

/// Fixed-point text with exact halfway values rounded away from zero.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return format!("{:.*}", digits, value);
    }
    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let fraction = exact.split_once('.').map(|(_, fraction)| fraction).unwrap_or("");
    let is_tie = fraction.as_bytes().get(digits) == Some(&b'5')
        && fraction.bytes().skip(digits + 1).all(|digit| digit == b'0');
    if is_tie {
        // next representable value away from zero, strictly past the tie
        let bumped = f64::from_bits(value.to_bits() + 1);
        format!("{:.*}", digits, bumped)
    } else {
        format!("{:.*}", digits, value)
    }
}

/// Text sinks of the widget. Every update overwrites a field, nothing is appended.
#[derive(Debug, Clone, PartialEq)]
pub struct TextDisplay {
    pub from_country: String,
    pub from_currency: String,
    pub amount_currency: String,
    pub to_country: String,
    pub to_currency: String,
    pub status: String,
    pub result: String,
    pub rate: String,
}

impl Default for TextDisplay {
    fn default() -> Self {
        Self {
            from_country: PLACEHOLDER.to_string(),
            from_currency: PLACEHOLDER.to_string(),
            amount_currency: PLACEHOLDER.to_string(),
            to_country: PLACEHOLDER.to_string(),
            to_currency: PLACEHOLDER.to_string(),
            status: String::new(),
            result: String::new(),
            rate: String::new(),
        }
    }
}

impl TextDisplay {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn update_selection(&mut self, pair: &SelectionPair) {
        match pair.from() {
            Some(from) => {
                self.from_country = from.country.clone();
                self.from_currency = from.currency.clone();
                self.amount_currency = from.currency.clone();
            }
            None => {
                self.from_country = PLACEHOLDER.to_string();
                self.from_currency = PLACEHOLDER.to_string();
                self.amount_currency = PLACEHOLDER.to_string();
            }
        }
        match pair.to() {
            Some(to) => {
                self.to_country = to.country.clone();
                self.to_currency = to.currency.clone();
            }
            None => {
                self.to_country = PLACEHOLDER.to_string();
                self.to_currency = PLACEHOLDER.to_string();
            }
        }
    }

    pub fn set_status<T: Into<String>>(&mut self, status: T) {
        self.status = status.into();
    }

    pub fn begin_conversion(&mut self) {
        self.status = CONVERTING.to_string();
        self.result.clear();
        self.rate.clear();
    }

    pub fn show_conversion(&mut self, request: &ConversionRequest, conversion: &ConversionResult) {
        self.result = format!(
            "{} {} = {} {}",
            to_fixed(request.amount, 2),
            request.from,
            to_fixed(conversion.result, 2),
            request.to
        );
        self.rate = format!(
            "1 {} = {} {}",
            request.from,
            to_fixed(conversion.rate, 4),
            request.to
        );
        self.status.clear();
    }
}

impl std::fmt::Display for TextDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "FROM   {} [{}]", self.from_country, self.from_currency)?;
        writeln!(f, "TO     {} [{}]", self.to_country, self.to_currency)?;
        writeln!(f, "AMOUNT in {}", self.amount_currency)?;
        if !self.result.is_empty() {
            writeln!(f, "RESULT {}", self.result)?;
        }
        if !self.rate.is_empty() {
            writeln!(f, "RATE   {}", self.rate)?;
        }
        if !self.status.is_empty() {
            writeln!(f, "STATUS {}", self.status)?;
        }
        Ok(())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Highlight {
    None,
    From,
    To,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PinView {
    pub pin: CountrySelection,
    pub highlight: Highlight,
}

/// Every pin of the map with its current highlight.
#[derive(Debug, Clone, Default)]
pub struct PinBoard {
    pins: Vec<PinView>,
}

impl PinBoard {
    pub fn new(pins: &[CountrySelection]) -> Self {
        Self {
            pins: pins
                .iter()
                .map(|pin| PinView {
                    pin: pin.clone(),
                    highlight: Highlight::None,
                })
                .collect(),
        }
    }

    pub fn pins(&self) -> &[PinView] {
        &self.pins
    }

    pub fn highlight_of(&self, country: &str) -> Option<Highlight> {
        self.pins
            .iter()
            .find(|view| view.pin.country == country)
            .map(|view| view.highlight)
    }

    pub fn refresh(&mut self, pair: &SelectionPair) {
        for view in self.pins.iter_mut() {
            view.highlight = Highlight::None;
            if pair.from().is_some_and(|from| from.country == view.pin.country) {
                view.highlight = Highlight::From;
            }
            if pair.to().is_some_and(|to| to.country == view.pin.country) {
                view.highlight = Highlight::To;
            }
        }
    }
}

impl std::fmt::Display for PinBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for view in self.pins.iter() {
            let marker = match view.highlight {
                Highlight::None => " ",
                Highlight::From => ">",
                Highlight::To => "<",
            };
            writeln!(f, "{} {}", marker, view.pin)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_when_empty() {
        let mut display = TextDisplay::new();
        display.update_selection(&SelectionPair::new());
        assert_eq!(display.from_country, PLACEHOLDER);
        assert_eq!(display.from_currency, PLACEHOLDER);
        assert_eq!(display.amount_currency, PLACEHOLDER);
        assert_eq!(display.to_country, PLACEHOLDER);
        assert_eq!(display.to_currency, PLACEHOLDER);
    }

    #[test]
    fn selection_projected() {
        let mut pair = SelectionPair::new();
        pair.click(CountrySelection::new("United States", "USD"));

        let mut display = TextDisplay::new();
        display.update_selection(&pair);
        assert_eq!(display.from_country, "United States");
        assert_eq!(display.from_currency, "USD");
        assert_eq!(display.amount_currency, "USD");
        assert_eq!(display.to_country, PLACEHOLDER);

        pair.click(CountrySelection::new("Japan", "JPY"));
        display.update_selection(&pair);
        assert_eq!(display.to_country, "Japan");
        assert_eq!(display.to_currency, "JPY");
    }

    #[test]
    fn conversion_text() {
        let mut display = TextDisplay::new();
        display.result = "old".to_string();
        display.rate = "old".to_string();

        display.begin_conversion();
        assert_eq!(display.status, CONVERTING);
        assert!(display.result.is_empty());
        assert!(display.rate.is_empty());

        let request = ConversionRequest {
            from: "USD".to_string(),
            to: "EUR".to_string(),
            amount: 10.0,
        };
        display.show_conversion(
            &request,
            &ConversionResult {
                rate: 0.9,
                result: 10.0 * 0.9,
            },
        );
        assert_eq!(display.result, "10.00 USD = 9.00 EUR");
        assert_eq!(display.rate, "1 USD = 0.9000 EUR");
        assert!(display.status.is_empty());
    }

    #[test]
    fn fixed_ties_round_up() {
        assert_eq!(to_fixed(10.125, 2), "10.13");
        assert_eq!(to_fixed(0.90625, 4), "0.9063");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(-0.125, 2), "-0.13");
        // 1.005 is stored slightly below the tie
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(0.9, 4), "0.9000");
        assert_eq!(to_fixed(9.17578125, 2), "9.18");
    }

    #[test]
    fn conversion_text_on_ties() {
        let mut display = TextDisplay::new();
        let request = ConversionRequest {
            from: "USD".to_string(),
            to: "EUR".to_string(),
            amount: 10.125,
        };
        display.show_conversion(
            &request,
            &ConversionResult {
                rate: 0.90625,
                result: 10.125 * 0.90625,
            },
        );
        assert_eq!(display.result, "10.13 USD = 9.18 EUR");
        assert_eq!(display.rate, "1 USD = 0.9063 EUR");
    }

    #[test]
    fn pin_highlight() {
        let pins = vec![
            CountrySelection::new("United States", "USD"),
            CountrySelection::new("Japan", "JPY"),
            CountrySelection::new("France", "EUR"),
        ];
        let mut board = PinBoard::new(&pins);
        let mut pair = SelectionPair::new();
        pair.click(pins[0].clone());
        pair.click(pins[1].clone());
        board.refresh(&pair);
        assert_eq!(board.highlight_of("United States"), Some(Highlight::From));
        assert_eq!(board.highlight_of("Japan"), Some(Highlight::To));
        assert_eq!(board.highlight_of("France"), Some(Highlight::None));
        assert_eq!(board.highlight_of("Peru"), None);

        pair.swap();
        board.refresh(&pair);
        assert_eq!(board.highlight_of("United States"), Some(Highlight::To));
        assert_eq!(board.highlight_of("Japan"), Some(Highlight::From));
    }
}
