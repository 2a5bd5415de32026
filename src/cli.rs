//! CLI argument parsing.
use clap::{Args, Parser, Subcommand};
use millstore_core::{CustomerQuery, IntakeForm};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "millstore",
    version,
    about = "Warehouse bin map, intake ledger and lookups kept in one xlsx workbook",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    /// Config file (default: the per-user millstore/config.toml, if present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Workbook path, overriding the config file
    #[arg(long, global = true, value_name = "FILE")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the workbook with its six empty sheets if it does not exist
    Init,
    /// Print dropdown options and the full bin map
    BinMap,
    /// Print the generic dropdown options
    Options,
    /// Record an intake and update its bin
    Submit(SubmitArgs),
    /// Print the sales page dropdown vocabulary
    SalesLookups,
    /// Search customers by id, name, phone or address prefix
    Customers(CustomerArgs),
    /// Print every goods row
    Goods,
    /// Print the intake ledger rows
    Ledger,
}

#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// Bin position as "<col>-<row>"
    #[arg(long, value_name = "COL-ROW")]
    pub position: Option<String>,
    #[arg(long, default_value = "")]
    pub date: String,
    #[arg(long, default_value = "")]
    pub material: String,
    #[arg(long, default_value = "")]
    pub vendor: String,
    #[arg(long, default_value = "")]
    pub dryness: String,
    #[arg(long, default_value = "")]
    pub grade: String,
    /// Bin label shown on the map
    #[arg(long = "bin", default_value = "")]
    pub bin_label: String,
    #[arg(long, default_value = "")]
    pub total_weight: String,
    #[arg(long, default_value = "")]
    pub capacity: String,
    /// Estimated milling rate
    #[arg(long, default_value = "")]
    pub est_rate: String,
    #[arg(long, default_value = "")]
    pub note: String,
}

impl From<SubmitArgs> for IntakeForm {
    fn from(args: SubmitArgs) -> Self {
        IntakeForm {
            date: args.date,
            material: args.material,
            vendor: args.vendor,
            dryness: args.dryness,
            grade: args.grade,
            bin_label: args.bin_label,
            total_weight: args.total_weight,
            capacity: args.capacity,
            est_rate: args.est_rate,
            note: args.note,
            position_name: args.position,
        }
    }
}

#[derive(Args, Debug)]
pub struct CustomerArgs {
    #[arg(long, default_value = "")]
    pub id: String,
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "")]
    pub phone: String,
    #[arg(long, default_value = "")]
    pub address: String,
}

impl From<CustomerArgs> for CustomerQuery {
    fn from(args: CustomerArgs) -> Self {
        CustomerQuery {
            id: args.id,
            name: args.name,
            phone: args.phone,
            address: args.address,
        }
    }
}
