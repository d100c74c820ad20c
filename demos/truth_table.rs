use clap::Parser;

use truth_table::config::TableConfig;
use truth_table::expr::ExpressionList;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Expressions to tabulate, e.g. "p & q" "p -> q".
    #[arg(value_name = "EXPR", required = true)]
    expressions: Vec<String>,

    /// Number of declared variables, taken from the front of the pool.
    #[clap(short = 'n', long, value_name = "INT", default_value = "2")]
    vars: usize,

    /// Variable pool.
    #[clap(long, value_name = "NAMES", default_value = "pqrst")]
    pool: String,

    /// Render values as 1/0 instead of T/F.
    #[clap(long)]
    binary: bool,

    /// Enable debug logging.
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        if args.verbose {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let mut config = TableConfig::with_pool(&args.pool)?;
    if args.binary {
        config.true_symbol = '1';
        config.false_symbol = '0';
    }

    let mut list = ExpressionList::with_config(config, args.vars)?;
    for expr in &args.expressions {
        list.push(expr.as_str())?;
    }

    let table = list.build_table()?;
    print!("{}", table);

    println!();
    for (i, expr) in list.iter().enumerate() {
        if let Some(class) = table.classify(i) {
            println!("{}: {:?}", expr, class);
        }
    }

    Ok(())
}
