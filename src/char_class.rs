use once_cell::sync::Lazy;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// A named character category backed by the standard library's
/// classification predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Alphabetic,
    Numeric,
    Alphanumeric,
    Whitespace,
    Control,
    Uppercase,
    Lowercase,
}

impl Category {
    fn contains(self, ch: char) -> bool {
        match self {
            Category::Alphabetic => ch.is_alphabetic(),
            Category::Numeric => ch.is_numeric(),
            Category::Alphanumeric => ch.is_alphanumeric(),
            Category::Whitespace => ch.is_whitespace(),
            Category::Control => ch.is_control(),
            Category::Uppercase => ch.is_uppercase(),
            Category::Lowercase => ch.is_lowercase(),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Category::Alphabetic => "alphabetic",
            Category::Numeric => "numeric",
            Category::Alphanumeric => "alphanumeric",
            Category::Whitespace => "whitespace",
            Category::Control => "control",
            Category::Uppercase => "uppercase",
            Category::Lowercase => "lowercase",
        }
    }
}

/// An immutable, composable predicate over a single character, paired with
/// a human-readable description for error messages.
///
/// Classes never change after construction; `union`, `complement` and
/// `plus` build new values. Cloning is cheap (the predicate is shared), so
/// the predefined classes below hand out clones of lazily built singletons.
#[derive(Clone)]
pub struct CharClass {
    test: Arc<dyn Fn(char) -> bool + Send + Sync>,
    description: Cow<'static, str>,
}

impl CharClass {
    /// A class from an explicit predicate.
    pub fn new(
        description: impl Into<Cow<'static, str>>,
        test: impl Fn(char) -> bool + Send + Sync + 'static,
    ) -> Self {
        CharClass {
            test: Arc::new(test),
            description: description.into(),
        }
    }

    /// Characters in the inclusive range `lo..=hi`.
    ///
    /// # Panics
    ///
    /// Panics if `lo > hi`.
    pub fn range(lo: char, hi: char) -> Self {
        assert!(lo <= hi, "invalid character range '{}'..='{}'", lo, hi);
        CharClass::new(format!("'{}'..='{}'", lo, hi), move |ch| {
            ch >= lo && ch <= hi
        })
    }

    /// Exactly the characters of `set`.
    pub fn any_of(set: &str) -> Self {
        let set: Vec<char> = set.chars().collect();
        let description = format!(
            "one of \"{}\"",
            set.iter().collect::<String>().escape_default()
        );
        CharClass::new(description, move |ch| set.contains(&ch))
    }

    /// The single character `ch`.
    pub fn single(ch: char) -> Self {
        CharClass::new(format!("'{}'", ch.escape_default()), move |c| c == ch)
    }

    /// All characters of a named [`Category`].
    pub fn category(category: Category) -> Self {
        CharClass::new(category.name(), move |ch| category.contains(ch))
    }

    /// Whether `ch` belongs to this class.
    pub fn contains(&self, ch: char) -> bool {
        (self.test)(ch)
    }

    /// Characters in either class.
    pub fn union(&self, other: &CharClass) -> Self {
        let left = Arc::clone(&self.test);
        let right = Arc::clone(&other.test);
        CharClass::new(
            format!("{} or {}", self.description, other.description),
            move |ch| left(ch) || right(ch),
        )
    }

    /// Every character outside this class.
    pub fn complement(&self) -> Self {
        let test = Arc::clone(&self.test);
        CharClass::new(format!("not ({})", self.description), move |ch| !test(ch))
    }

    /// This class extended with one extra character.
    pub fn plus(&self, extra: char) -> Self {
        let test = Arc::clone(&self.test);
        CharClass::new(
            format!("{} or '{}'", self.description, extra.escape_default()),
            move |ch| ch == extra || test(ch),
        )
    }

    /// The description used in error messages.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Alphabetic characters.
    pub fn alphabetic() -> Self {
        static ALPHABETIC: Lazy<CharClass> =
            Lazy::new(|| CharClass::category(Category::Alphabetic));
        ALPHABETIC.clone()
    }

    /// Numeric characters.
    pub fn numeric() -> Self {
        static NUMERIC: Lazy<CharClass> = Lazy::new(|| CharClass::category(Category::Numeric));
        NUMERIC.clone()
    }

    /// ASCII hexadecimal digits, either case.
    pub fn hex_digit() -> Self {
        static HEX_DIGIT: Lazy<CharClass> = Lazy::new(|| {
            CharClass::range('0', '9')
                .union(&CharClass::range('a', 'f'))
                .union(&CharClass::range('A', 'F'))
        });
        HEX_DIGIT.clone()
    }

    /// Whitespace plus control characters: the usual class fed to
    /// [`crate::skip::Skip`] for token separation.
    pub fn whitespace() -> Self {
        static WHITESPACE: Lazy<CharClass> = Lazy::new(|| {
            CharClass::category(Category::Whitespace).union(&CharClass::category(Category::Control))
        });
        WHITESPACE.clone()
    }

    /// Line break characters.
    pub fn newline() -> Self {
        static NEWLINE: Lazy<CharClass> = Lazy::new(|| CharClass::any_of("\n\r"));
        NEWLINE.clone()
    }
}

impl fmt::Debug for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CharClass")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description)
    }
}
