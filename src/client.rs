#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandLineConfig {
    pub command: String,
    pub input: Option<String>,
    pub output: String,
}

impl CommandLineConfig {
    pub fn from_args(args: &[&str]) -> Result<Self, String> {
        let mut command = String::from("validate");
        let mut input = None;
        let mut output = String::from(".");
        let mut iter = args.iter().skip(1);
        while let Some(arg) = iter.next() {
            match *arg {
                "--input" | "-i" => {
                    input = Some(
                        iter.next()
                            .ok_or_else(|| "--input requires a value".to_string())?
                            .to_string(),
                    );
                }
                "--out" | "-o" => {
                    output = iter
                        .next()
                        .ok_or_else(|| "--out requires a value".to_string())?
                        .to_string();
                }
                other if other.starts_with('-') => {
                    return Err(format!("unknown flag {other}"));
                }
                _ => {
                    command = arg.to_string();
                }
            }
        }
        Ok(Self {
            command,
            input,
            output,
        })
    }

    pub fn help() -> &'static str {
        "Usage: chartgraph [validate|show|integrity|export] --input FILE [--out DIR]\n"
    }
}
