//! Static display metadata for the supported currencies.
//!
//! Codes absent from this list are dropped when building a rate table,
//! even if the remote document quotes them.

pub const KNOWN_CURRENCIES: &[(&str, &str, &str)] = &[
    ("USD", "US Dollar", "$"),
    ("EUR", "Euro", "€"),
    ("GBP", "British Pound", "£"),
    ("JPY", "Japanese Yen", "¥"),
    ("ARS", "Argentine Peso", "$"),
    ("BRL", "Brazilian Real", "R$"),
    ("CAD", "Canadian Dollar", "C$"),
    ("CHF", "Swiss Franc", "Fr"),
    ("CNY", "Chinese Yuan", "¥"),
    ("MXN", "Mexican Peso", "$"),
    ("AUD", "Australian Dollar", "A$"),
    ("INR", "Indian Rupee", "₹"),
    ("RUB", "Russian Ruble", "₽"),
    ("KRW", "South Korean Won", "₩"),
    ("CLP", "Chilean Peso", "$"),
    ("COP", "Colombian Peso", "$"),
    ("PEN", "Peruvian Sol", "S/"),
    ("UYU", "Uruguayan Peso", "$U"),
    ("NZD", "New Zealand Dollar", "NZ$"),
    ("SGD", "Singapore Dollar", "S$"),
    ("HKD", "Hong Kong Dollar", "HK$"),
    ("SEK", "Swedish Krona", "kr"),
    ("NOK", "Norwegian Krone", "kr"),
    ("DKK", "Danish Krone", "kr"),
    ("ZAR", "South African Rand", "R"),
    ("PLN", "Polish Zloty", "zł"),
    ("THB", "Thai Baht", "฿"),
    ("MYR", "Malaysian Ringgit", "RM"),
];

/// Returns `(name, symbol)` for a known currency code.
pub fn lookup(code: &str) -> Option<(&'static str, &'static str)> {
    KNOWN_CURRENCIES
        .iter()
        .find(|(c, _, _)| *c == code)
        .map(|(_, name, symbol)| (*name, *symbol))
}
