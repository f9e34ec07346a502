pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "1234567890";
pub const SYMBOLS: &str = "!@#$%^&*()-_=+\\/~?";

/// Which character classes go into the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterClasses {
    pub upper: bool,
    pub lower: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl CharacterClasses {
    pub const ALL: Self = Self {
        upper: true,
        lower: true,
        digits: true,
        symbols: true,
    };

    pub const NONE: Self = Self {
        upper: false,
        lower: false,
        digits: false,
        symbols: false,
    };

    pub fn any(&self) -> bool {
        self.upper || self.lower || self.digits || self.symbols
    }

    pub fn alphabet(&self) -> String {
        build_alphabet(self.upper, self.lower, self.digits, self.symbols)
    }
}

impl Default for CharacterClasses {
    fn default() -> Self {
        Self::ALL
    }
}

/// Concatenates the selected class strings in upper, lower, digit, symbol order.
pub fn build_alphabet(upper: bool, lower: bool, digits: bool, symbols: bool) -> String {
    [
        (upper, UPPERCASE),
        (lower, LOWERCASE),
        (digits, DIGITS),
        (symbols, SYMBOLS),
    ]
    .into_iter()
    .filter(|(included, _)| *included)
    .map(|(_, class)| class)
    .collect()
}
