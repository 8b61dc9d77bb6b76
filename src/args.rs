use anyhow::{anyhow, bail, Result};
use std::path::PathBuf;

#[derive(Debug)]
pub struct Args {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Args {
    /// Parse and validate command line arguments
    pub fn parse() -> Result<Self> {
        Self::parse_from(std::env::args().skip(1))
    }

    /// Parse from an explicit argument list (program name already stripped)
    pub fn parse_from<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();

        if args.len() < 3 {
            bail!("Usage: convert_ringtones <input_dir> -o <output_dir>\n\nExample:\n  convert_ringtones ~/ringtones -o ~/Music/ogg");
        }

        let mut input_dir: Option<PathBuf> = None;
        let mut output_dir: Option<PathBuf> = None;
        let mut i = 0;

        // The output flag may come before or after the input directory
        while i < args.len() {
            let arg = &args[i];
            if arg == "-o" || arg == "--output-directory" || arg == "--output-dir" {
                if output_dir.is_some() {
                    bail!("Output directory specified more than once");
                }
                if i + 1 >= args.len() {
                    bail!("Output directory flag provided but no directory specified");
                }
                output_dir = Some(PathBuf::from(&args[i + 1]));
                i += 2;
            } else {
                if input_dir.is_some() {
                    bail!("Unexpected extra argument: {}", arg);
                }
                input_dir = Some(PathBuf::from(arg));
                i += 1;
            }
        }

        let input_dir = input_dir
            .ok_or_else(|| anyhow!("An input directory must be specified"))?;
        let output_dir = output_dir
            .ok_or_else(|| anyhow!("Output directory must be specified with -o, --output-directory, or --output-dir"))?;

        Ok(Args {
            input_dir,
            output_dir,
        })
    }
}
