use anyhow::{Context, Result};
use progargs::Registry;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    init_tracing();

    let mut args = declare().context("failed to declare arguments")?;
    args.parse(std::env::args().skip(1))
        .context("failed to parse arguments")?;

    if args.has("help") {
        print!("{args}");
        return Ok(());
    }

    args.validate_required()
        .context("invalid command line")?;
    run(&args)
}

fn declare() -> Result<Registry> {
    let mut args = Registry::new();
    args.new_group("Input")
        .add("i", "input", String::new(), "Input file or directory", true)?
        .add(
            "",
            "format",
            "nt".to_string(),
            "Serialization of the input. Only plain N-Triples is read, anything else is passed through untouched",
            false,
        )?;
    args.new_group("Compression")
        .add("t", "threads", 1usize, "Number of worker threads", false)?
        .add("s", "sample", 0.01f64, "Fraction of the input used to build the dictionary", false)?
        .add("", "compressGraph", false, "Also compress the graph structure", false)?;
    args.new_group("Output")
        .add("o", "output", "out".to_string(), "Output directory", false)?;
    Ok(args)
}

fn run(args: &Registry) -> Result<()> {
    let input: String = args.lookup("input")?.get()?;
    let threads: usize = args.lookup("threads")?.get()?;
    let sample: f64 = args.lookup("sample")?.get()?;
    let compress_graph: bool = args.lookup("compressGraph")?.get()?;
    let output: String = args.lookup("output")?.get()?;

    tracing::info!(input = %input, threads, "arguments accepted");
    if args.lookup("sample")?.is_empty() {
        tracing::debug!(sample, "using default sample rate");
    }

    println!("input={input}");
    println!("format={}", args.lookup("format")?.value());
    println!("threads={threads}");
    println!("sample={sample}");
    println!("compressGraph={compress_graph}");
    println!("output={output}");
    for token in args.positionals() {
        println!("positional={token}");
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
