use argflag::{ArgParser, Argument};

fn main() {
    let mut parser = ArgParser::new();

    if let Err(error) = register(&mut parser) {
        eprintln!("{error}");
        std::process::exit(2);
    }

    match parser.parse_env() {
        Ok(output) => {
            let mut pairs: Vec<_> = output.iter().collect();
            pairs.sort_by_key(|(name, _)| *name);

            for (name, value) in pairs {
                println!("{name}: {value}");
            }
        }
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    }
}

fn register(parser: &mut ArgParser) -> Result<(), argflag::RegistrationError> {
    parser
        .add_argument(Argument::new("--name", "-n", "name").help("Who to greet."))?
        .add_argument(
            Argument::new("--times", "-t", "times")
                .argument_type("int")
                .help("How many times to greet."),
        )?
        .add_argument(
            Argument::new("--scores", "-s", "scores")
                .argument_type("list")
                .secondary_argument_type("float")
                .help("Scores to report."),
        )?
        .add_argument(
            Argument::new("--verbose", "-v", "verbose")
                .has_arguments(false)
                .help("Print more."),
        )?;
    Ok(())
}
