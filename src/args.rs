use clap::Parser;

/// Computes per-state and per-county statistics over voter purge data.
#[derive(Parser, Debug, Clone, Default)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path, optional) A JSON configuration file describing the report. The paths it contains
    /// are relative to the directory of this file.
    #[clap(short, long, value_parser)]
    pub config: Option<String>,

    /// (file path) A reference file containing the expected summary in JSON format. If provided, vpstats will
    /// check that the computed output matches the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    /// (file path, 'stdout' or empty) If specified, the summary will be written in JSON format to the given
    /// location. Setting this option overrides the path that may be specified with the --config option.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (file path) The dataset of states and counties, as returned by the public API. Setting this option
    /// overrides the dataset that may be specified with the --config option.
    #[clap(short, long, value_parser)]
    pub input: Option<String>,

    /// (file path, optional) The list of state scorecards, as returned by the public API.
    #[clap(long, value_parser)]
    pub scorecards: Option<String>,

    /// (postal code, optional) Only output the statistics of this state.
    #[clap(long, value_parser)]
    pub state: Option<String>,

    /// (county name, optional) Only output the statistics of this county. Requires --state.
    #[clap(long, value_parser)]
    pub county: Option<String>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
