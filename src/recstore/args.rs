use clap::Parser;
use recstore::request::{Arguments, FILE_NAME_KEY, ID_KEY, ITEM_KEY, OPERATION_KEY};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "recstore")]
#[command(version = env!("RECSTORE_VERSION"))]
#[command(about = "Store, list, find and remove JSON records in a single file", long_about = None)]
pub struct Cli {
    /// Operation to perform: add, list, findById or remove
    #[arg(long)]
    pub operation: Option<String>,

    /// File to read records from and write them to
    #[arg(long = "fileName")]
    pub file_name: Option<String>,

    /// Record id (findById, remove)
    #[arg(long)]
    pub id: Option<String>,

    /// Record to store, as a JSON object with an "id" field (add)
    #[arg(long)]
    pub item: Option<String>,

    /// Path to a config.json (overrides RECSTORE_CONFIG)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Flatten the record flags into the map the core validates.
    /// Absent flags map to empty strings.
    pub fn to_arguments(&self) -> Arguments {
        [
            (OPERATION_KEY, &self.operation),
            (FILE_NAME_KEY, &self.file_name),
            (ID_KEY, &self.id),
            (ITEM_KEY, &self.item),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_string(), value.clone().unwrap_or_default()))
        .collect()
    }
}
