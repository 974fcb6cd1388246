use crate::core::errors::Result;

/// Port for asking the user to pick one entry from a list.
pub trait Prompter {
    /// Show `message` with `choices` and return the chosen label,
    /// or `None` when the answer matches none of them.
    fn select(&mut self, message: &str, choices: &[String]) -> Result<Option<String>>;
}
