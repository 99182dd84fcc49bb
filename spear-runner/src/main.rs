use anyhow::{anyhow, Result};
use clap::{arg, ArgAction, Command};
use spear_wrapper::json::{dejsonify, jsonify};
use spear_wrapper::{build_command, ParamMap, RunArgs};
use std::{fs, io::Read, path::PathBuf};

fn cli() -> Command {
    Command::new("spear-runner")
        .about("Builds Spear target-algorithm command lines")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("build_command")
                .about("Builds the argv token list for a Spear run")
                .arg(
                    arg!(<RUN_ARGS> "Run arguments json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!([PARAMS] "Parameter json object string, path to json file, or '-' for stdin")
                        .default_value("{}")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the token list will be saved to this file path (default json)")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--shell "Print the tokens space-joined on one line instead of json")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn main() {
    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        Some(("build_command", sub_m)) => run_build_command(
            sub_m.get_one::<String>("RUN_ARGS").unwrap().clone(),
            sub_m.get_one::<String>("PARAMS").unwrap().clone(),
            sub_m.get_one::<PathBuf>("output").cloned(),
            *sub_m.get_one::<bool>("shell").unwrap(),
        ),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

pub fn run_build_command(
    run_args: String,
    params: String,
    output_file: Option<PathBuf>,
    shell: bool,
) -> Result<()> {
    let run_args = load_run_args(&run_args);
    let params = load_params(&params);

    let tokens = build_command(&run_args, &params)?;
    let rendered = if shell {
        tokens.join(" ")
    } else {
        jsonify(&tokens)
    };
    if let Some(path) = output_file {
        fs::write(&path, rendered)?;
        println!("command written to: {:?}", path);
    } else {
        println!("{}", rendered);
    }
    Ok(())
}

fn load_run_args(run_args: &str) -> RunArgs {
    let run_args = if run_args.ends_with(".json") {
        fs::read_to_string(run_args).unwrap_or_else(|_| {
            eprintln!("Failed to read run args file: {}", run_args);
            std::process::exit(1);
        })
    } else {
        run_args.to_string()
    };

    dejsonify::<RunArgs>(&run_args).unwrap_or_else(|_| {
        eprintln!("Failed to parse run args");
        std::process::exit(1);
    })
}

fn load_params(params: &str) -> ParamMap {
    let params = if params == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .unwrap_or_else(|_| {
                eprintln!("Failed to read params from stdin");
                std::process::exit(1);
            });
        buffer
    } else if params.ends_with(".json") {
        fs::read_to_string(params).unwrap_or_else(|_| {
            eprintln!("Failed to read params file: {}", params);
            std::process::exit(1);
        })
    } else {
        params.to_string()
    };

    dejsonify::<ParamMap>(&params).unwrap_or_else(|_| {
        eprintln!("Failed to parse params");
        std::process::exit(1);
    })
}
