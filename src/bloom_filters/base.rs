use crate::error::BloomError;

/// Dictionary membership checks for words.
///
/// A word passed as `None` is rejected with [`BloomError::InvalidInput`] and
/// leaves the dictionary untouched.
pub trait SpellChecker {
    fn add_to_dictionary<'a>(
        &mut self,
        word: impl Into<Option<&'a str>>,
    ) -> Result<(), BloomError>;

    /// `false` means the word was never added; `true` means it possibly was.
    fn might_contain<'a>(&self, word: impl Into<Option<&'a str>>) -> Result<bool, BloomError>;
}
