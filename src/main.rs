use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use tfdf::{
    analyzer::Analyzer,
    corpus::Corpus,
    error::Result,
    filter::FilterMode,
    frequency::{FrequencyEngine, FrequencySource},
    inverted_index::InvertedIndex,
    report::{OutputFormat, Reporter},
    tokenizer::Tokenizer,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Text file to analyze, one document per line
    file: PathBuf,

    /// Removes English stopwords before counting
    #[arg(short, long, default_value = "false")]
    stopwords: bool,

    /// Removes punctuation marks before counting
    #[arg(short, long, default_value = "false")]
    punctuation: bool,

    /// Word to score; may be repeated
    #[arg(short, long = "word", value_name = "WORD")]
    words: Vec<String>,

    /// 1-based document to print; may be repeated
    #[arg(short, long = "doc", value_name = "N")]
    docs: Vec<usize>,

    /// Prints the N most common terms of every document
    #[arg(short, long, value_name = "N")]
    common: Option<usize>,

    /// Builds an in-memory index once instead of re-reading the file per query
    #[arg(long, default_value = "false")]
    index: bool,

    /// Prints results as JSON
    #[arg(long, default_value = "false")]
    json: bool,
}

impl Args {
    const fn mode(&self) -> FilterMode {
        FilterMode::from_flags(self.stopwords, self.punctuation)
    }

    const fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }

    fn is_interactive(&self) -> bool {
        self.words.is_empty() && self.docs.is_empty() && self.common.is_none()
    }
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let corpus = Corpus::open(&args.file)?;
    let tokenizer = Tokenizer::new()?;

    info!(
        documents = corpus.document_count(),
        mode = ?args.mode(),
        index = args.index,
        "loaded corpus"
    );

    if args.index {
        let index = InvertedIndex::build(&corpus, &tokenizer, args.mode())?;
        respond(&Analyzer::new(index), args)
    } else {
        respond(
            &Analyzer::new(FrequencyEngine::new(corpus, tokenizer, args.mode())),
            args,
        )
    }
}

fn respond<S: FrequencySource>(analyzer: &Analyzer<S>, args: &Args) -> Result<()> {
    let mut reporter = Reporter::new(io::stdout().lock(), args.format());

    if args.is_interactive() {
        return interactive(analyzer, &mut reporter);
    }

    for word in &args.words {
        reporter.word(&analyzer.lookup_word(word)?)?;
    }

    for doc_id in &args.docs {
        reporter.document(&analyzer.lookup_document(*doc_id)?)?;
    }

    if let Some(n) = args.common {
        reporter.common(&analyzer.most_common(n)?)?;
    }

    Ok(())
}

fn interactive<S: FrequencySource, W: Write>(
    analyzer: &Analyzer<S>,
    reporter: &mut Reporter<W>,
) -> Result<()> {
    let stdin = io::stdin();
    let mut buffer = String::new();

    eprintln!("Enter a word or a document number (\"exit\" to quit):");

    loop {
        buffer.clear();
        if stdin.lock().read_line(&mut buffer)? == 0 {
            break;
        }

        let query = buffer.trim();

        if query == "exit" {
            break;
        }

        if query.is_empty() {
            continue;
        }

        match query.parse::<usize>() {
            Ok(doc_id) => reporter.document(&analyzer.lookup_document(doc_id)?)?,
            Err(_) => reporter.word(&analyzer.lookup_word(query)?)?,
        }
    }

    Ok(())
}
