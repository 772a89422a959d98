extern crate clap;

pub mod config;
pub mod domain;
pub mod emit;
pub mod error;
pub mod generator;

use anyhow::Result;
use clap::{Arg, ArgAction};
use std::path::PathBuf;

use config::settings::{DEFAULT_PARAM_VAR, DEFAULT_TRANSPORT_MODULE};
use config::{DescriptorSet, GeneratorConfig};

pub use generator::{generate, generate_file, GeneratedFile};

/// Parsed command line
#[derive(Debug, Clone)]
pub struct Options {
    pub inputs: Vec<PathBuf>,
    pub out_dir: PathBuf,
    pub stdout: bool,
    pub config: GeneratorConfig,
}

pub fn cli() -> clap::Command {
    clap::Command::new("gateway-jsgen")
        .about("Generate JavaScript client stubs from HTTP-annotated rpc descriptors")
        .arg(
            Arg::new("inputs")
                .value_name("DESCRIPTOR")
                .help("YAML or JSON descriptor files")
                .num_args(1..)
                .required(true),
        )
        .arg(
            Arg::new("out_dir")
                .short('o')
                .long("out-dir")
                .value_name("DIR")
                .help("Directory generated modules are written to")
                .default_value("."),
        )
        .arg(
            Arg::new("prefix")
                .short('p')
                .long("prefix")
                .value_name("PREFIX")
                .help("Path prefix stripped from every path template"),
        )
        .arg(
            Arg::new("transport")
                .short('t')
                .long("transport")
                .value_name("MODULE")
                .help("Module path the transport function is required from")
                .default_value(DEFAULT_TRANSPORT_MODULE),
        )
        .arg(
            Arg::new("param_var")
                .long("param-var")
                .value_name("IDENT")
                .help("Name of the request parameter in generated functions")
                .default_value(DEFAULT_PARAM_VAR),
        )
        .arg(
            Arg::new("stdout")
                .long("stdout")
                .help("Print generated modules instead of writing them")
                .action(ArgAction::SetTrue),
        )
}

impl Options {
    pub fn from_matches(matches: &clap::ArgMatches) -> Self {
        let inputs = matches
            .get_many::<String>("inputs")
            .map(|values| values.map(PathBuf::from).collect())
            .unwrap_or_default();
        let get = |id: &str| {
            matches
                .get_one::<String>(id)
                .map(|s| s.as_str())
                .unwrap_or_default()
        };

        let config = GeneratorConfig::default()
            .with_path_prefix(get("prefix"))
            .with_transport_module(get("transport"))
            .with_param_var(get("param_var"));

        Self {
            inputs,
            out_dir: PathBuf::from(get("out_dir")),
            stdout: matches.get_flag("stdout"),
            config,
        }
    }
}

/// Load every input, generate, and write (or print) the results.
pub fn run(options: &Options) -> Result<Vec<GeneratedFile>> {
    let sets = options
        .inputs
        .iter()
        .map(|path| DescriptorSet::load(path))
        .collect::<Result<Vec<_>>>()?;
    let set = DescriptorSet::merge(sets);

    let files = generate(&set, &options.config);
    if files.len() < set.files.len() {
        tracing::warn!(
            "Generated {} of {} file(s)",
            files.len(),
            set.files.len()
        );
    }

    if options.stdout {
        for file in &files {
            println!("// {}\n{}", file.name, file.content);
        }
    } else {
        generator::write_files(&files, &options.out_dir)?;
    }

    Ok(files)
}
