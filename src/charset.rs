//! The character categories a password can be drawn from, and building an alphabet out of them.

pub static LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub static UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub static NUMBERS: &str = "0123456789";
pub static SYMBOLS: &str = "!@#$%^&*()-_=+[]{}|;:,.<>?/";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Category {
    Lowercase,
    Uppercase,
    Numbers,
    Symbols,
}

impl Category {
    /// Every category, in the order their characters appear in an alphabet.
    pub const ALL: [Category; 4] = [
        Category::Lowercase,
        Category::Uppercase,
        Category::Numbers,
        Category::Symbols,
    ];

    pub fn characters(self) -> &'static str {
        match self {
            Category::Lowercase => LOWERCASE,
            Category::Uppercase => UPPERCASE,
            Category::Numbers => NUMBERS,
            Category::Symbols => SYMBOLS,
        }
    }
}

/// Which categories the user asked for.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CategorySelection {
    pub lowercase: bool,
    pub uppercase: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl CategorySelection {
    pub fn all() -> CategorySelection {
        CategorySelection {
            lowercase: true,
            uppercase: true,
            numbers: true,
            symbols: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.lowercase || self.uppercase || self.numbers || self.symbols)
    }

    /// Selecting nothing means selecting everything.
    pub fn or_all(self) -> CategorySelection {
        if self.is_empty() {
            CategorySelection::all()
        } else {
            self
        }
    }

    pub fn includes(&self, category: Category) -> bool {
        match category {
            Category::Lowercase => self.lowercase,
            Category::Uppercase => self.uppercase,
            Category::Numbers => self.numbers,
            Category::Symbols => self.symbols,
        }
    }

    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL
            .into_iter()
            .filter(move |category| self.includes(*category))
    }

    /// Concatenate the characters of every selected category.
    ///
    /// The result follows the fixed category order (lowercase, uppercase, numbers, symbols) no
    /// matter how the selection was built. Characters shared between categories are not
    /// deduplicated.
    pub fn alphabet(&self) -> Vec<char> {
        let mut abc = Vec::new();
        for category in self.categories() {
            abc.extend(category.characters().chars());
        }
        abc
    }
}
