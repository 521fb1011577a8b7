//! # API Facade
//!
//! The single entry point for running an operation, whatever the caller is.
//!
//! [`RecstoreApi::perform`] takes the flat [`Arguments`] map and an output
//! sink, and:
//!
//! 1. validates the arguments into a [`Request`] (no file access yet),
//! 2. opens a [`RecordStore`] over the requested backing file,
//! 3. routes to the matching command through [`dispatch`].
//!
//! The command's result or error is returned unchanged. Nothing here writes
//! to stdout or exits the process; that belongs to the binary.

use crate::commands::{self, Outcome};
use crate::config::RecstoreConfig;
use crate::error::Result;
use crate::request::{Action, Arguments, Request};
use crate::store::backend::StorageBackend;
use crate::store::fs_backend::FileBackend;
use crate::store::RecordStore;
use std::io::Write;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct RecstoreApi {
    config: RecstoreConfig,
}

impl RecstoreApi {
    pub fn new(config: RecstoreConfig) -> Self {
        Self { config }
    }

    /// Validate `args` and run the requested operation against its file.
    pub fn perform<W: Write>(&self, args: &Arguments, out: &mut W) -> Result<Outcome> {
        let request = Request::from_arguments(args)?;
        self.execute(&request, out)
    }

    /// Run an already validated request against its file.
    pub fn execute<W: Write>(&self, request: &Request, out: &mut W) -> Result<Outcome> {
        debug!(
            operation = %request.action.operation(),
            file = %request.file_name.display(),
            "dispatching"
        );
        let backend =
            FileBackend::new(&request.file_name).with_atomic_writes(self.config.atomic_writes);
        let store = RecordStore::new(backend).with_policy(self.config.format_policy);
        dispatch(&store, &request.action, out)
    }
}

/// Route one action to its command.
pub fn dispatch<B: StorageBackend, W: Write>(
    store: &RecordStore<B>,
    action: &Action,
    out: &mut W,
) -> Result<Outcome> {
    match action {
        Action::Add { item } => commands::add::run(store, out, item),
        Action::List => commands::list::run(store, out),
        Action::FindById { id } => commands::find::run(store, out, id),
        Action::Remove { id } => commands::remove::run(store, out, id),
    }
}

/// Run one invocation with the default configuration.
pub fn perform<W: Write>(args: &Arguments, out: &mut W) -> Result<Outcome> {
    RecstoreApi::default().perform(args, out)
}
