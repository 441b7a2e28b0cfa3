//! Shell command lines built from [`ShellArg`] words.
//!
//! A finished [`CommandString`] is either one imagemagick invocation or a
//! two-stage pipeline where the first stage streams an intermediate image
//! into the second. Neither can be edited once built.

use std::fmt::Display;

use crate::{error::MarkError, shell::ShellArg};

/// The imagemagick programs we generate invocations for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Tool {
    Composite,
    Convert,
}

/// One word of an invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Word {
    Arg(ShellArg),
    /// The intermediate image passed over the pipe between two stages.
    Stream,
}

impl Word {
    /// MIFF keeps the alpha channel intact and needs no size hints when read back.
    pub const STREAM_TOKEN: &'static str = "miff:-";
}

impl Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Word::Arg(arg) => arg.fmt(f),
            Word::Stream => f.write_str(Word::STREAM_TOKEN),
        }
    }
}

impl From<ShellArg> for Word {
    fn from(arg: ShellArg) -> Self {
        Word::Arg(arg)
    }
}

/// A single run of an imagemagick program: `tool words... output`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    tool: Tool,
    words: Vec<Word>,
    output: Word,
}

impl Invocation {
    pub(crate) fn new(tool: Tool, output: impl Into<Word>) -> Self {
        Self {
            tool,
            words: Vec::new(),
            output: output.into(),
        }
    }

    pub(crate) fn arg(mut self, word: impl Into<Word>) -> Self {
        self.words.push(word.into());
        self
    }

    pub(crate) fn args<I>(mut self, words: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Word>,
    {
        self.words.extend(words.into_iter().map(Into::into));
        self
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Everything between the program name and the output operand.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn output(&self) -> &Word {
        &self.output
    }

    pub fn reads_stream(&self) -> bool {
        self.words.contains(&Word::Stream)
    }

    pub fn writes_stream(&self) -> bool {
        self.output == Word::Stream
    }
}

impl Display for Invocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tool)?;
        for word in &self.words {
            write!(f, " {word}")?;
        }
        write!(f, " {}", self.output)
    }
}

/// `producer | consumer`, with the intermediate image travelling over the pipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    producer: Invocation,
    consumer: Invocation,
}

impl Pipeline {
    /// Fails unless `producer` writes the stream and nothing else touches it:
    /// the consumer must read it and write a real file.
    pub(crate) fn new(producer: Invocation, consumer: Invocation) -> Result<Self, MarkError> {
        if !producer.writes_stream() {
            return Err(MarkError::MalformedPipeline(
                "first stage does not write the intermediate image",
            ));
        }
        if producer.reads_stream() {
            return Err(MarkError::MalformedPipeline(
                "first stage reads its own intermediate image",
            ));
        }
        if !consumer.reads_stream() {
            return Err(MarkError::MalformedPipeline(
                "second stage does not read the intermediate image",
            ));
        }
        if consumer.writes_stream() {
            return Err(MarkError::MalformedPipeline(
                "intermediate image used as the final destination",
            ));
        }
        Ok(Self { producer, consumer })
    }

    pub fn producer(&self) -> &Invocation {
        &self.producer
    }

    pub fn consumer(&self) -> &Invocation {
        &self.consumer
    }
}

impl Display for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} | {}", self.producer, self.consumer)
    }
}

/// A complete, fully escaped command ready to be handed to `sh -c`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandString {
    Single(Invocation),
    Piped(Pipeline),
}

impl CommandString {
    pub(crate) fn single(invocation: Invocation) -> Result<Self, MarkError> {
        if invocation.reads_stream() || invocation.writes_stream() {
            return Err(MarkError::MalformedPipeline(
                "a standalone command has no intermediate image to exchange",
            ));
        }
        Ok(CommandString::Single(invocation))
    }

    /// The invocation that writes the final destination.
    pub fn final_stage(&self) -> &Invocation {
        match self {
            CommandString::Single(invocation) => invocation,
            CommandString::Piped(pipeline) => pipeline.consumer(),
        }
    }

    pub fn is_piped(&self) -> bool {
        matches!(self, CommandString::Piped(_))
    }
}

impl Display for CommandString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandString::Single(invocation) => invocation.fmt(f),
            CommandString::Piped(pipeline) => pipeline.fmt(f),
        }
    }
}

impl From<CommandString> for String {
    fn from(command: CommandString) -> Self {
        command.to_string()
    }
}
