use clap::Parser;

/// Playq: queue up music for command-line playback
#[derive(Parser, Debug, PartialEq)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Chatty logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress status output
    #[arg(short, long)]
    pub quiet: bool,

    /// Recurse into directories named in the queue
    #[arg(short, long)]
    pub recursive: bool,

    /// Shuffle playback order
    #[arg(short, long)]
    pub shuffle: bool,

    /// Play a single track, then exit
    #[arg(short = '1', long = "once")]
    pub only_one: bool,

    /// Loop the queue
    #[arg(short = 'l', long = "loop")]
    pub looping: bool,

    /// Playback volume
    #[arg(long, value_name = "VOL", default_value_t = 0.0)]
    pub volume: f32,

    /// Status poll interval, in seconds
    #[arg(long = "dbltime", value_name = "SECS", default_value_t = 0.0)]
    pub dbl_time: f64,

    /// Files or URLs to play, in order
    /// Example: ~/music/song.mp3
    #[arg(value_name = "FILE|URL")]
    pub targets: Vec<String>,
}

pub fn parse_args() -> Args {
    Args::parse()
}
