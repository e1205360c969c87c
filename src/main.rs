mod charmap;
mod clean;
mod error;
mod features;
mod lexicon;
mod nlp;
mod pages;
mod store;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::{Level, info};

use features::Features;
use lexicon::Lexicon;
use nlp::{Annotator, RuleModel};
use pages::PageRange;

const DEFAULT_SOURCE: &str = "informe.pdf";
const DEFAULT_CORPUS: &str = "transcript_clean.txt";
const DEFAULT_OUT_DIR: &str = "output";
const DEFAULT_POSITIVE: &str = "positive_words_es.txt";
const DEFAULT_NEGATIVE: &str = "negative_words_es.txt";

const TOKENS_FILE: &str = "tokens.csv";
const ENTITIES_FILE: &str = "entities.csv";
const SENTENCES_FILE: &str = "sentences.csv";
const STATS_FILE: &str = "run_stats.json";

#[derive(Parser)]
#[command(
    name = "informe_nlp",
    about = "Government report text pipeline: page text → corpus → token, entity and sentence datasets"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Log per-page and per-stage detail
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Rebuild the report text from its pages → cleaned corpus file
    Extract {
        #[command(flatten)]
        source: SourceArgs,
        /// Where to write the cleaned corpus
        #[arg(long, default_value = DEFAULT_CORPUS)]
        corpus: PathBuf,
    },
    /// Annotate the corpus file → tokens, entities and sentences CSV
    Annotate {
        /// Cleaned corpus produced by `extract`
        #[arg(long, default_value = DEFAULT_CORPUS)]
        corpus: PathBuf,
        #[command(flatten)]
        annotate: AnnotateArgs,
    },
    /// Extract, then annotate
    Run {
        #[command(flatten)]
        source: SourceArgs,
        #[arg(long, default_value = DEFAULT_CORPUS)]
        corpus: PathBuf,
        #[command(flatten)]
        annotate: AnnotateArgs,
    },
}

#[derive(Args, Debug, Clone)]
struct SourceArgs {
    /// PDF file, or a directory of per-page .txt files
    #[arg(long, default_value = DEFAULT_SOURCE)]
    source: PathBuf,
    /// First physical page (zero-based, inclusive)
    #[arg(long, default_value_t = PageRange::default().start)]
    first_page: usize,
    /// Last physical page (zero-based, exclusive)
    #[arg(long, default_value_t = PageRange::default().end)]
    end_page: usize,
    /// Page number printed on the first page
    #[arg(long, default_value_t = PageRange::default().first_reported)]
    first_reported: u32,
}

impl SourceArgs {
    fn range(&self) -> PageRange {
        PageRange {
            start: self.first_page,
            end: self.end_page,
            first_reported: self.first_reported,
        }
    }
}

impl Default for SourceArgs {
    fn default() -> Self {
        let range = PageRange::default();
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            first_page: range.start,
            end_page: range.end,
            first_reported: range.first_reported,
        }
    }
}

#[derive(Args, Debug, Clone)]
struct AnnotateArgs {
    /// Directory for the three datasets and run_stats.json
    #[arg(long, default_value = DEFAULT_OUT_DIR)]
    out_dir: PathBuf,
    /// Positive word list, one word per line
    #[arg(long, default_value = DEFAULT_POSITIVE)]
    positive: PathBuf,
    /// Negative word list, one word per line
    #[arg(long, default_value = DEFAULT_NEGATIVE)]
    negative: PathBuf,
    /// JSON file extending the built-in Spanish model
    #[arg(long)]
    model: Option<PathBuf>,
    /// Keep the annotator's default length limit instead of fitting it to the corpus
    #[arg(long)]
    strict_length: bool,
}

impl Default for AnnotateArgs {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            positive: PathBuf::from(DEFAULT_POSITIVE),
            negative: PathBuf::from(DEFAULT_NEGATIVE),
            model: None,
            strict_length: false,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Command::Extract { source, corpus }) => run_extract(&source, &corpus).map(|_| ()),
        Some(Command::Annotate { corpus, annotate }) => {
            run_annotate(&annotate, &corpus, None).map(|_| ())
        }
        Some(Command::Run {
            source,
            corpus,
            annotate,
        }) => run_all(&source, &corpus, &annotate).map(|_| ()),
        // Default: the whole pipeline with conventional paths
        None => run_all(
            &SourceArgs::default(),
            Path::new(DEFAULT_CORPUS),
            &AnnotateArgs::default(),
        )
        .map(|_| ()),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

// ═══════════════════════════════════════════════════════════════════════
//  RUN STATISTICS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
struct ExtractStats {
    pages: usize,
    next_reported: u32,
    corpus_chars: usize,
}

#[derive(Debug, Clone, Serialize)]
struct AnnotateStats {
    corpus_chars: usize,
    tokens: usize,
    sentences: usize,
    entities: usize,
    token_rows: usize,
    entity_rows: usize,
    sentence_rows: usize,
}

#[derive(Debug, Serialize)]
struct RunStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    extract: Option<ExtractStats>,
    annotate: AnnotateStats,
}

// ═══════════════════════════════════════════════════════════════════════
//  STAGE 1: pages → cleaned corpus
// ═══════════════════════════════════════════════════════════════════════

fn run_extract(args: &SourceArgs, corpus: &Path) -> anyhow::Result<ExtractStats> {
    let source = pages::open_source(&args.source)
        .with_context(|| format!("opening page source {}", args.source.display()))?;
    let range = args.range();
    info!(
        available = source.page_count(),
        start = range.start,
        end = range.end,
        "reconstructing pages from {}",
        args.source.display()
    );

    let rebuilt = pages::reconstruct(source.as_ref(), range).context("reconstructing pages")?;
    let cleaned = clean::clean(&rebuilt.text);
    store::write_corpus(corpus, &cleaned).context("writing corpus")?;

    let stats = ExtractStats {
        pages: rebuilt.pages,
        next_reported: rebuilt.next_reported,
        corpus_chars: cleaned.chars().count(),
    };
    info!(
        pages = stats.pages,
        next_reported = stats.next_reported,
        chars = stats.corpus_chars,
        "extract done"
    );
    Ok(stats)
}

// ═══════════════════════════════════════════════════════════════════════
//  STAGE 2: corpus → annotated document → datasets
// ═══════════════════════════════════════════════════════════════════════

/// Model and lexicon, loaded before any page or corpus is touched.
struct Resources {
    model: RuleModel,
    lexicon: Lexicon,
}

fn load_resources(args: &AnnotateArgs) -> anyhow::Result<Resources> {
    let model = RuleModel::load(args.model.as_deref()).context("loading rule model")?;
    let lexicon = Lexicon::load(&args.positive, &args.negative).context("loading lexicon")?;
    Ok(Resources { model, lexicon })
}

/// Raise the annotator's limit to `length` unless `strict`.
fn fit_length(model: &mut impl Annotator, length: usize, strict: bool) {
    if !strict && length > model.max_length() {
        info!(
            from = model.max_length(),
            to = length,
            "raising annotator length limit"
        );
        model.set_max_length(length);
    }
}

fn annotate_corpus(
    resources: &mut Resources,
    args: &AnnotateArgs,
    corpus: &Path,
    extract: Option<ExtractStats>,
) -> anyhow::Result<RunStats> {
    let text = store::read_corpus(corpus)
        .with_context(|| format!("reading corpus {}", corpus.display()))?;
    let length = text.chars().count();
    fit_length(&mut resources.model, length, args.strict_length);

    info!(chars = length, "annotating {}", corpus.display());
    let doc = resources.model.annotate(&text).context("annotating corpus")?;
    info!(
        tokens = doc.tokens().len(),
        sentences = doc.sentence_count(),
        entities = doc.entity_count(),
        "annotation done"
    );

    let features = Features::project(&doc, &resources.lexicon);
    store::write_table(&args.out_dir.join(TOKENS_FILE), &features.tokens)?;
    store::write_table(&args.out_dir.join(ENTITIES_FILE), &features.entities)?;
    store::write_table(&args.out_dir.join(SENTENCES_FILE), &features.sentences)?;

    let stats = RunStats {
        extract,
        annotate: AnnotateStats {
            corpus_chars: doc.text().chars().count(),
            tokens: doc.tokens().len(),
            sentences: doc.sentence_count(),
            entities: doc.entity_count(),
            token_rows: features.tokens.len(),
            entity_rows: features.entities.len(),
            sentence_rows: features.sentences.len(),
        },
    };
    store::write_json(&args.out_dir.join(STATS_FILE), &stats)?;
    Ok(stats)
}

fn run_annotate(
    args: &AnnotateArgs,
    corpus: &Path,
    extract: Option<ExtractStats>,
) -> anyhow::Result<RunStats> {
    let mut resources = load_resources(args)?;
    annotate_corpus(&mut resources, args, corpus, extract)
}

/// Both stages. The second re-reads the corpus from disk.
fn run_all(source: &SourceArgs, corpus: &Path, args: &AnnotateArgs) -> anyhow::Result<RunStats> {
    let mut resources = load_resources(args)?;
    let extract = run_extract(source, corpus)?;
    annotate_corpus(&mut resources, args, corpus, Some(extract))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    struct Fixture {
        dir: tempfile::TempDir,
    }

    impl Fixture {
        /// Three per-page files numbered 1..=3 and a small lexicon.
        fn new() -> Self {
            let dir = tempfile::tempdir().unwrap();
            let pages = dir.path().join("pages");
            fs::create_dir(&pages).unwrap();
            fs::write(pages.join("p0.txt"), "1Hola mundo feliz.\n").unwrap();
            fs::write(pages.join("p1.txt"), "2 En Oaxaca  todo\n   bien.").unwrap();
            fs::write(pages.join("p2.txt"), "3 El avance fue triste.").unwrap();
            fs::write(dir.path().join("pos.txt"), "feliz\nbien\n").unwrap();
            fs::write(dir.path().join("neg.txt"), "triste\n").unwrap();
            Self { dir }
        }

        fn path(&self, name: &str) -> PathBuf {
            self.dir.path().join(name)
        }

        fn source(&self) -> SourceArgs {
            SourceArgs {
                source: self.path("pages"),
                first_page: 0,
                end_page: 3,
                first_reported: 1,
            }
        }

        fn annotate(&self) -> AnnotateArgs {
            AnnotateArgs {
                out_dir: self.path("output"),
                positive: self.path("pos.txt"),
                negative: self.path("neg.txt"),
                model: None,
                strict_length: false,
            }
        }
    }

    // ── stages ───────────────────────────────────────────────────────

    #[test]
    fn test_extract_writes_clean_corpus() {
        let fx = Fixture::new();
        let corpus = fx.path("transcript_clean.txt");
        let stats = run_extract(&fx.source(), &corpus).unwrap();
        assert_eq!(
            fs::read_to_string(&corpus).unwrap(),
            "Hola mundo feliz. En Oaxaca todo bien. El avance fue triste."
        );
        assert_eq!(stats.pages, 3);
        assert_eq!(stats.next_reported, 4);
    }

    #[test]
    fn test_run_writes_all_datasets() {
        let fx = Fixture::new();
        let corpus = fx.path("transcript_clean.txt");
        let stats = run_all(&fx.source(), &corpus, &fx.annotate()).unwrap();

        let out = fx.path("output");
        assert_eq!(
            fs::read_to_string(out.join(SENTENCES_FILE)).unwrap(),
            "text,score\r\n\
             Hola mundo feliz.,1\r\n\
             En Oaxaca todo bien.,1\r\n\
             El avance fue triste.,-1\r\n"
        );
        assert_eq!(
            fs::read_to_string(out.join(ENTITIES_FILE)).unwrap(),
            "text,text_lower,label\r\nOaxaca,oaxaca,LOC\r\n"
        );

        let tokens = fs::read_to_string(out.join(TOKENS_FILE)).unwrap();
        let mut lines = tokens.lines();
        assert_eq!(
            lines.next(),
            Some("text,text_lower,lemma,lemma_lower,part_of_speech,is_alphabet,is_stopword")
        );
        assert_eq!(lines.count(), stats.annotate.tokens);
        assert_eq!(stats.annotate.token_rows, stats.annotate.tokens);

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(out.join(STATS_FILE)).unwrap()).unwrap();
        assert_eq!(json["extract"]["pages"], 3);
        assert_eq!(json["annotate"]["sentence_rows"], 3);
        assert_eq!(json["annotate"]["entities"], 1);
    }

    #[test]
    fn test_annotate_alone_omits_extract_stats() {
        let fx = Fixture::new();
        let corpus = fx.path("transcript_clean.txt");
        fs::write(&corpus, "Un día muy feliz para todos.").unwrap();
        let stats = run_annotate(&fx.annotate(), &corpus, None).unwrap();
        assert_eq!(stats.annotate.sentence_rows, 1);

        let json = fs::read_to_string(fx.path("output").join(STATS_FILE)).unwrap();
        assert!(!json.contains("extract"));
    }

    // ── failures ─────────────────────────────────────────────────────

    #[test]
    fn test_missing_lexicon_fails_before_extract() {
        let fx = Fixture::new();
        let corpus = fx.path("transcript_clean.txt");
        let mut args = fx.annotate();
        args.negative = fx.path("missing.txt");

        let err = run_all(&fx.source(), &corpus, &args).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<error::PipelineError>(),
            Some(error::PipelineError::ResourceNotFound(_))
        ));
        assert!(!corpus.exists());
    }

    #[test]
    fn test_page_beyond_source_fails() {
        let fx = Fixture::new();
        let mut source = fx.source();
        source.end_page = 4;
        let err = run_extract(&source, &fx.path("transcript_clean.txt")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<error::PipelineError>(),
            Some(error::PipelineError::PageOutOfRange { index: 3, count: 3 })
        ));
    }

    #[test]
    fn test_fit_length() {
        let mut model = RuleModel::spanish();
        fit_length(&mut model, 2_000_000, true);
        assert_eq!(model.max_length(), RuleModel::DEFAULT_MAX_LENGTH);
        fit_length(&mut model, 2_000_000, false);
        assert_eq!(model.max_length(), 2_000_000);
        fit_length(&mut model, 10, false);
        assert_eq!(model.max_length(), 2_000_000);
    }

    #[test]
    fn test_strict_length_rejects_oversized_corpus() {
        let mut model = RuleModel::spanish();
        model.set_max_length(8);
        let mut resources = Resources {
            model,
            lexicon: Lexicon::default(),
        };
        let fx = Fixture::new();
        let corpus = fx.path("transcript_clean.txt");
        fs::write(&corpus, "Un texto algo largo.").unwrap();
        let mut args = fx.annotate();
        args.strict_length = true;

        let err = annotate_corpus(&mut resources, &args, &corpus, None).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<error::PipelineError>(),
            Some(error::PipelineError::LengthExceeded { length: 20, max_length: 8 })
        ));
        assert!(!fx.path("output").join(TOKENS_FILE).exists());
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["informe_nlp", "run"]);
        let Some(Command::Run {
            source,
            corpus,
            annotate,
        }) = cli.command
        else {
            panic!("expected run");
        };
        assert_eq!(source.range(), PageRange::default());
        assert_eq!(source.source, PathBuf::from(DEFAULT_SOURCE));
        assert_eq!(corpus, PathBuf::from(DEFAULT_CORPUS));
        assert_eq!(annotate.out_dir, PathBuf::from(DEFAULT_OUT_DIR));
        assert!(!annotate.strict_length);

        let cli = Cli::parse_from(["informe_nlp"]);
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }
}
