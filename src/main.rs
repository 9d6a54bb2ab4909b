pub mod chronometer;
pub mod configuration;
pub mod logger;

use self::{configuration::Configuration, logger::Logger};
use couchdb_base64::{decode_to_string, decode_to_uint, encode_from_string, encode_from_uint, is_valid_encoded_string, Parameters};
use std::{env, error, fmt, process, str::FromStr};

const USAGE: &str = "Usage: couchdb-base64 <encode-string|decode-string|encode-uint|decode-uint|is-valid> <input>";

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Command {
    EncodeString,
    DecodeString,
    EncodeUInt,
    DecodeUInt,
    IsValid,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "encode-string" => Ok(Self::EncodeString),
            "decode-string" => Ok(Self::DecodeString),
            "encode-uint" => Ok(Self::EncodeUInt),
            "decode-uint" => Ok(Self::DecodeUInt),
            "is-valid" => Ok(Self::IsValid),
            _ => Err(format!("Unknown command {:?}\n{}", s, USAGE)),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::EncodeString => "encode-string",
            Self::DecodeString => "decode-string",
            Self::EncodeUInt => "encode-uint",
            Self::DecodeUInt => "decode-uint",
            Self::IsValid => "is-valid",
        };
        write!(f, "{}", name)
    }
}

/// Accepts `{"uint": .., "totalBits": ..}` or a bare integer encoded with the configured width.
fn parse_parameters(input: &str, configuration: &Configuration) -> Result<Parameters, Box<dyn error::Error>> {
    let input = input.trim();
    if input.starts_with('{') {
        return Ok(input.parse()?);
    }
    let uint = input.parse::<u64>().map_err(|_| format!("Invalid uint {:?}", input))?;
    Ok(Parameters::new(uint, configuration.total_bits()))
}

fn run(command: Command, input: &str, configuration: &Configuration, logger: &Logger) -> Result<String, Box<dyn error::Error>> {
    logger.log(format!("{} {:?}", command, input));
    let output = match command {
        Command::EncodeString => encode_from_string(input)?,
        Command::DecodeString => decode_to_string(input)?,
        Command::EncodeUInt => {
            let parameters = parse_parameters(input, configuration)?;
            logger.log(serde_json::to_string(&parameters)?);
            encode_from_uint(parameters.uint, parameters.total_bits)?
        }
        Command::DecodeUInt => decode_to_uint(input)?.to_string(),
        Command::IsValid => is_valid_encoded_string(input).to_string(),
    };
    logger.log(format!("{} done", command));
    Ok(output)
}

fn main() {
    let configuration = match Configuration::new() {
        Ok(configuration) => configuration,
        Err(error) => {
            eprintln!("{}", error);
            process::exit(1);
        }
    };
    let logger = Logger::new(configuration.verbose());

    let args: Vec<String> = env::args().skip(1).collect();
    let (command, input) = match args.as_slice() {
        [command, input] => (command, input),
        _ => {
            eprintln!("{}", USAGE);
            process::exit(2);
        }
    };

    let result = command
        .parse::<Command>()
        .map_err(Box::<dyn error::Error>::from)
        .and_then(|command| run(command, input, &configuration, &logger));
    match result {
        Ok(output) => println!("{}", output),
        Err(error) => {
            eprintln!("{}", error);
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{run, Command};
    use crate::{configuration::Configuration, logger::Logger};


    #[test]
    fn command() {
        assert_eq!("encode-uint".parse::<Command>(), Ok(Command::EncodeUInt));
        assert!("encode".parse::<Command>().is_err());
        assert_eq!(Command::DecodeString.to_string(), "decode-string");
    }

    #[test]
    fn run_commands() {
        let configuration = Configuration::with_total_bits(54);
        let logger = Logger::new(false);
        let run = |command, input| run(command, input, &configuration, &logger).map_err(|error| error.to_string());
        assert_eq!(run(Command::EncodeString, "hello world"), Ok("O4JgP4wURqxmP4E".to_string()));
        assert_eq!(run(Command::DecodeString, "O4JgP4wURqxmP4E"), Ok("hello world".to_string()));
        assert_eq!(run(Command::EncodeUInt, r#"{"uint": 64, "totalBits": 18}"#), Ok("-.-".to_string()));
        assert_eq!(run(Command::DecodeUInt, "-.-"), Ok("64".to_string()));
        assert_eq!(run(Command::IsValid, "a/b"), Ok("false".to_string()));
        assert_eq!(run(Command::DecodeUInt, ""), Err("string must be non-empty".to_string()));
        assert_eq!(run(Command::DecodeString, "zw"), Ok("ÿ".to_string()));
        assert!(run(Command::EncodeUInt, "-1").is_err());
    }

    #[test]
    fn bare_integer_uses_configured_width() {
        let logger = Logger::new(false);
        let output = run(Command::EncodeUInt, "64", &Configuration::with_total_bits(18), &logger).unwrap();
        assert_eq!(output, "-.-");
        let output = run(Command::EncodeUInt, "64", &Configuration::with_total_bits(54), &logger).unwrap();
        assert_eq!(output, "-------.-");
        let error = run(Command::EncodeUInt, "64", &Configuration::with_total_bits(6), &logger).unwrap_err();
        assert!(error.to_string().starts_with("The minimum number of bits to represent uint exceeds totalBits"));
    }
}
