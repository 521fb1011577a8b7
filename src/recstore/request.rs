//! Turning raw invocation parameters into a typed [`Request`].
//!
//! The CLI hands the core a flat string map ([`Arguments`]). Validation
//! happens here, before anything touches the backing file, and runs the
//! checks in a fixed order so the same bad input always produces the same
//! message:
//!
//! 1. operation present
//! 2. file name present
//! 3. operation known
//! 4. item present (add)
//! 5. id present (findById, remove)
//!
//! Empty values count as missing.

use crate::error::ValidationError;
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub const OPERATION_KEY: &str = "operation";
pub const FILE_NAME_KEY: &str = "fileName";
pub const ID_KEY: &str = "id";
pub const ITEM_KEY: &str = "item";

/// Flat parameter map as produced by the command-line adapter.
pub type Arguments = HashMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    List,
    FindById,
    Remove,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::List,
        Operation::FindById,
        Operation::Remove,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::List => "list",
            Operation::FindById => "findById",
            Operation::Remove => "remove",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownOperation(s.to_string()))
    }
}

/// A validated operation together with the parameter it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add { item: String },
    List,
    FindById { id: String },
    Remove { id: String },
}

impl Action {
    pub fn operation(&self) -> Operation {
        match self {
            Action::Add { .. } => Operation::Add,
            Action::List => Operation::List,
            Action::FindById { .. } => Operation::FindById,
            Action::Remove { .. } => Operation::Remove,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub file_name: PathBuf,
    pub action: Action,
}

impl Request {
    pub fn new(file_name: impl Into<PathBuf>, action: Action) -> Self {
        Self {
            file_name: file_name.into(),
            action,
        }
    }

    pub fn from_arguments(args: &Arguments) -> Result<Self, ValidationError> {
        let operation = non_empty(args, OPERATION_KEY).ok_or(ValidationError::MissingOperation)?;
        let file_name = non_empty(args, FILE_NAME_KEY).ok_or(ValidationError::MissingFileName)?;
        let operation: Operation = operation.parse()?;

        let action = match operation {
            Operation::Add => Action::Add {
                item: non_empty(args, ITEM_KEY)
                    .ok_or(ValidationError::MissingItem)?
                    .to_string(),
            },
            Operation::List => Action::List,
            Operation::FindById => Action::FindById {
                id: required_id(args)?,
            },
            Operation::Remove => Action::Remove {
                id: required_id(args)?,
            },
        };

        Ok(Self::new(file_name, action))
    }
}

fn non_empty<'a>(args: &'a Arguments, key: &str) -> Option<&'a str> {
    args.get(key).map(String::as_str).filter(|v| !v.is_empty())
}

fn required_id(args: &Arguments) -> Result<String, ValidationError> {
    non_empty(args, ID_KEY)
        .map(str::to_string)
        .ok_or(ValidationError::MissingId)
}
