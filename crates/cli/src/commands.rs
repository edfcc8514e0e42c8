use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile a filter into a SQL predicate and its bind arguments
    Compile {
        #[arg(help = "Filter expression, e.g. \"name:eq('abc'),age:range(16,32)\"")]
        filter: String,

        #[arg(long, help = "JSON config with limits and allowed fields")]
        config: Option<String>,

        #[arg(long, help = "Print single-line JSON")]
        compact: bool,
    },
    /// Print the clauses found in a filter, without compiling them
    Tokenize {
        filter: String,

        #[arg(long, help = "Print single-line JSON")]
        compact: bool,
    },
    /// List the supported operators
    Operators,
}
