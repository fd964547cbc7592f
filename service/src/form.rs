//! Interactive collection of [`Listing`] fields.
//!
//! [`Listing`]: crate::domain::Listing

use std::{collections::VecDeque, io};

use common::Kind;
use derive_more::{Display, From};
use itertools::Itertools as _;

/// Source of answers to prompted questions.
pub trait Input {
    /// Asks the provided `prompt` and blocks until an answer is given.
    ///
    /// # Errors
    ///
    /// - [`Error::Closed`] if no more answers can be given;
    /// - [`Error::Io`] if the underlying transport fails.
    fn ask(&mut self, prompt: &str) -> Result<String, Error>;
}

/// Error of an [`Input`].
#[derive(Debug, Display, derive_more::Error, From)]
pub enum Error {
    /// [`Input`] has no more answers.
    #[display("input is closed")]
    Closed,

    /// [`Input`] transport failed.
    #[display("failed to read input: {_0}")]
    #[from]
    Io(io::Error),
}

/// Asks the provided free-text `prompt`.
///
/// # Errors
///
/// If the provided [`Input`] fails.
pub fn text(input: &mut dyn Input, prompt: &str) -> Result<String, Error> {
    input.ask(prompt)
}

/// Asks the provided `question` until the answer spells one of `K` tokens.
///
/// The valid tokens are appended to the `question` as `(opt1, opt2)`.
/// Answers are matched case-insensitively.
///
/// # Errors
///
/// If the provided [`Input`] fails before a valid answer is given.
pub fn choose<K: Kind>(
    input: &mut dyn Input,
    question: &str,
) -> Result<K, Error> {
    let prompt = format!("{question} ({}) ", K::TOKENS.iter().format(", "));
    loop {
        let answer = input.ask(&prompt)?;
        match K::from_token(&answer) {
            Ok(kind) => return Ok(kind),
            Err(e) => tracing::debug!("rejected answer: {e}"),
        }
    }
}

/// [`Input`] answering from a predefined list.
///
/// Once all the answers are given, every next question fails with
/// [`Error::Closed`].
#[derive(Clone, Debug, Default)]
pub struct Script {
    /// Answers left to give.
    answers: VecDeque<String>,

    /// Prompts asked so far.
    prompts: Vec<String>,
}

impl Script {
    /// Creates a new [`Script`] giving the provided `answers` in order.
    #[must_use]
    pub fn new<I>(answers: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Returns prompts asked so far.
    #[must_use]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Returns number of answers left to give.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Input for Script {
    fn ask(&mut self, prompt: &str) -> Result<String, Error> {
        self.prompts.push(prompt.to_owned());
        self.answers.pop_front().ok_or(Error::Closed)
    }
}

#[cfg(test)]
mod spec {
    use std::{error::Error as _, io};

    use common::define_kind;

    use super::{choose, text, Error, Input as _, Script};

    define_kind! {
        #[doc = "Test kind."]
        enum Fenced {
            #[doc = "Yes."]
            Yes = "yes",

            #[doc = "No."]
            No = "no",
        }
    }

    #[test]
    fn asks_free_text_as_is() {
        let mut input = Script::new(["  12 00 "]);

        assert_eq!(
            text(&mut input, "Enter the square feet: ").unwrap(),
            "  12 00 ",
        );
        assert_eq!(input.prompts(), ["Enter the square feet: "]);
    }

    #[test]
    fn appends_options_to_question() {
        let mut input = Script::new(["yes"]);

        assert_eq!(
            choose::<Fenced>(&mut input, "Is the yard fenced?").unwrap(),
            Fenced::Yes,
        );
        assert_eq!(input.prompts(), ["Is the yard fenced? (yes, no) "]);
    }

    #[test]
    fn reprompts_until_valid() {
        let mut input = Script::new(["maybe", "", "y", "NO", "yes"]);

        assert_eq!(
            choose::<Fenced>(&mut input, "Is the yard fenced?").unwrap(),
            Fenced::No,
        );
        assert_eq!(input.prompts().len(), 4);
        assert_eq!(input.remaining(), 1);
    }

    #[test]
    fn fails_when_exhausted() {
        let mut input = Script::new(["maybe", "perhaps"]);

        assert!(matches!(
            choose::<Fenced>(&mut input, "Is the yard fenced?"),
            Err(Error::Closed),
        ));
        assert_eq!(input.prompts().len(), 3);
    }

    #[test]
    fn closed_script_keeps_failing() {
        let mut input = Script::default();

        assert!(matches!(input.ask("?"), Err(Error::Closed)));
        assert!(matches!(input.ask("?"), Err(Error::Closed)));
    }

    #[test]
    fn wraps_transport_errors() {
        let err = Error::from(io::Error::other("broken pipe"));

        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.to_string(), "failed to read input: broken pipe");
        assert!(err.source().is_some());
        assert!(Error::Closed.source().is_none());
    }
}
