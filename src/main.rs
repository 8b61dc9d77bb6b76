use convert_ringtones::args::Args;
use convert_ringtones::converter::BatchConverter;
use convert_ringtones::ffmpeg::FfmpegTranscoder;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Parse command line arguments
    let args = Args::parse()?;

    // Create converter backed by the real ffmpeg binary
    let converter = BatchConverter::new(args.output_dir, FfmpegTranscoder::new());

    // Convert every ringtone in the input directory
    converter.convert(&args.input_dir)?;

    Ok(())
}
