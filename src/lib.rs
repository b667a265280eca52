use rand::rngs::OsRng;

pub mod charset;
pub mod password_generation;

pub use charset::{Category, CategorySelection};

/// A generated password.
///
/// `Debug` is opaque so that the contents can't end up in a log line by accident.
#[derive(Clone, Eq, PartialEq)]
pub struct Secret(String);

opaque_debug::implement!(Secret);

impl Secret {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The number of characters (not bytes) in the secret.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for Secret {
    fn from(s: String) -> Secret {
        Secret(s)
    }
}

/// A password length that has been checked to be between one and [`PasswordLength::MAX`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PasswordLength(usize);

impl PasswordLength {
    pub const MAX: usize = 1 << 20;

    pub fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<i64> for PasswordLength {
    type Error = InvalidLength;

    fn try_from(len: i64) -> Result<PasswordLength, InvalidLength> {
        if len <= 0 {
            return Err(InvalidLength::NotPositive(len));
        }
        match usize::try_from(len) {
            Ok(n) if n <= PasswordLength::MAX => Ok(PasswordLength(n)),
            _ => Err(InvalidLength::TooLong(len)),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InvalidLength {
    #[error("password length must be greater than zero, but {0} was requested")]
    NotPositive(i64),
    #[error("password length must be at most {max}, but {0} was requested", max = PasswordLength::MAX)]
    TooLong(i64),
}

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct GenerationError(GenerationErrorRepr);

impl GenerationError {
    /// Whether the secure random source failed, as opposed to the inputs being unusable.
    pub fn is_entropy_source(&self) -> bool {
        matches!(self.0, GenerationErrorRepr::EntropySource(_))
    }
}

impl From<GenerationErrorRepr> for GenerationError {
    fn from(err: GenerationErrorRepr) -> GenerationError {
        GenerationError(err)
    }
}

#[derive(Debug, thiserror::Error)]
enum GenerationErrorRepr {
    #[error("no characters to generate a password from")]
    EmptyAlphabet,
    #[error("the secure random source failed: {0}")]
    EntropySource(#[source] rand::Error),
}

/// Generate a password of `length` characters from the selected categories, using the operating
/// system's entropy source.
///
/// `selection` is used as given; apply [`CategorySelection::or_all`] first if an empty selection
/// should mean "everything".
pub fn generate_password(
    length: PasswordLength,
    selection: &CategorySelection,
) -> Result<Secret, GenerationError> {
    let alphabet = selection.alphabet();
    password_generation::generate_random_password(&mut OsRng, &alphabet, length.get())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_must_be_positive() {
        assert!(PasswordLength::try_from(0i64).is_err());
        assert!(PasswordLength::try_from(-5i64).is_err());
        assert_eq!(PasswordLength::try_from(12i64).unwrap().get(), 12);
    }

    #[test]
    fn huge_length_is_rejected_before_allocating() {
        let max = PasswordLength::MAX as i64;
        assert_eq!(PasswordLength::try_from(max).unwrap().get(), PasswordLength::MAX);
        assert!(matches!(
            PasswordLength::try_from(max + 1),
            Err(InvalidLength::TooLong(_))
        ));
        assert!(matches!(
            PasswordLength::try_from(i64::MAX),
            Err(InvalidLength::TooLong(_))
        ));
        assert!(matches!(
            PasswordLength::try_from(i64::MIN),
            Err(InvalidLength::NotPositive(_))
        ));
    }

    #[test]
    fn invalid_length_message_names_the_value() {
        let err = PasswordLength::try_from(-3i64).unwrap_err();
        assert_eq!(
            err.to_string(),
            "password length must be greater than zero, but -3 was requested"
        );
    }

    #[test]
    fn secret_debug_is_opaque() {
        let secret = Secret::from("hunter2".to_owned());
        assert!(!format!("{:?}", secret).contains("hunter2"));
    }

    #[test]
    fn generates_from_os_entropy() {
        let length = PasswordLength::try_from(12i64).unwrap();
        let selection = CategorySelection {
            uppercase: true,
            numbers: true,
            ..Default::default()
        };
        let alphabet = selection.alphabet();
        let pw = generate_password(length, &selection).unwrap();
        assert_eq!(pw.len(), 12);
        assert!(pw.as_str().chars().all(|c| alphabet.contains(&c)));
    }

    #[test]
    fn empty_selection_is_rejected() {
        let length = PasswordLength::try_from(4i64).unwrap();
        let err = generate_password(length, &CategorySelection::default()).unwrap_err();
        assert!(!err.is_entropy_source());
        assert_eq!(err.to_string(), "no characters to generate a password from");
    }
}
