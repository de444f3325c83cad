use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("lexmetric")
        .version(env!("CARGO_PKG_VERSION"))
        .author("lexmetric contributors")
        .about("Compute readability and sentiment metrics for web articles")
        .arg(
            clap::arg!(--lexicons <DIR> "Lexicon root containing StopWords/ and MasterDictionary/")
                .global(true)
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(--stopwords <DIR> "Stopword directory")
                .global(true)
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(--positive <FILE> "Positive word list")
                .global(true)
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(--negative <FILE> "Negative word list")
                .global(true)
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(--empty_policy <POLICY> "How to treat documents with no words or sentences")
                .global(true)
                .default_value("skip")
                .value_parser(["skip", "zero", "zero-record"]),
        )
        .arg(clap::arg!(--no_normalize "Tokenize text as-is, without inserting word boundaries").global(true))
        .arg(clap::arg!(-v --verbose "Enable debug logging").global(true))
        .subcommand(
            clap::Command::new("analyze")
                .about("Fetch and analyze every article listed in a URL_ID,URL csv file")
                .arg(clap::arg!(<INPUT> "Input list (csv with URL_ID and URL columns)"))
                .arg(
                    clap::arg!(-o --output <FILE> "Output file (default: stdout)")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(
                    clap::arg!(-f --format <FORMAT> "Report format")
                        .default_value("csv")
                        .value_parser(["csv", "json"]),
                )
                .arg(clap::arg!(--pretty "Pretty-print JSON output"))
                .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds").default_value("30"))
                .arg(clap::arg!(--user_agent <UA> "Custom User-Agent for HTTP requests"))
                .arg(
                    clap::arg!(--text_dir <DIR> "Read pre-extracted <URL_ID>.txt files instead of fetching")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(
                    clap::arg!(--archive_dir <DIR> "Save each extracted article as <URL_ID>.txt")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                ),
        )
        .subcommand(
            clap::Command::new("text")
                .about("Analyze a single text file, HTML file, or \"-\" for stdin")
                .arg(clap::arg!(<INPUT> "Text file, or '-' for stdin"))
                .arg(clap::arg!(--html "Treat the input as an HTML page and extract its article first"))
                .arg(
                    clap::arg!(-f --format <FORMAT> "Output format")
                        .default_value("table")
                        .value_parser(["table", "csv", "json"]),
                ),
        )
        .subcommand(
            clap::Command::new("completions")
                .about("Generate a shell completion script")
                .arg(clap::arg!(<SHELL> "Target shell").value_parser(["bash", "zsh", "fish", "powershell", "elvish"])),
        );

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "lexmetric", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "lexmetric", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "lexmetric", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "lexmetric", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Elvish, &mut cmd, "lexmetric", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
