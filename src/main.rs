use anyhow::Result;
use clap::Parser;
use midi_playlist::player::scan_midi_files;
use midi_playlist::synth::{StubSynth, SynthEventBus};
use midi_playlist::{PlaybackController, PlayerConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "midi-playlist")]
#[command(about = "Rotate through a playlist of MIDI files", long_about = None)]
struct Args {
    /// Sound font to play with (.sf2)
    #[arg(short = 's', long)]
    soundfont: Option<PathBuf>,

    /// MIDI file played when the playlist is empty
    #[arg(short = 'm', long)]
    midi: Option<PathBuf>,

    /// Add a MIDI file to the playlist (can be specified multiple times)
    #[arg(short = 't', long = "track")]
    tracks: Vec<PathBuf>,

    /// Add every MIDI file found under this directory to the playlist
    #[arg(short = 'd', long)]
    dir: Option<PathBuf>,

    /// Player configuration file
    #[arg(short = 'c', long, default_value = "~/.config/midi-playlist/config.json")]
    config: String,

    /// Number of songs to rotate through before stopping
    #[arg(short = 'n', long, default_value = "1")]
    plays: usize,

    /// Save the configuration when playback stops
    #[arg(long)]
    save: bool,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = PathBuf::from(shellexpand::tilde(&args.config).as_ref());
    let config = PlayerConfig::load(&config_path)?;

    // No real engine is linked in; the stub reports what would be played
    let bus = SynthEventBus::new();
    let events = bus.subscribe();
    let synth = StubSynth::new(bus);

    let mut controller = PlaybackController::new(synth, config);
    if args.save {
        controller = controller.with_config_path(config_path);
    }

    if let Some(soundfont) = &args.soundfont {
        controller.load_sound_font(soundfont)?;
    }
    if let Some(midi) = &args.midi {
        controller.load_midi_file(midi)?;
    }

    if let Some(dir) = &args.dir {
        for file in scan_midi_files(dir)? {
            controller.enqueue(&file)?;
        }
    }
    for track in &args.tracks {
        controller.enqueue(track)?;
    }

    log::info!(
        "Playlist: {} track(s), {} play(s) requested",
        controller.playlist().len(),
        args.plays
    );

    if args.plays == 0 {
        return Ok(());
    }

    let Some(first) = controller.start()? else {
        log::warn!("Nothing to play. Pass --midi, --track or --dir.");
        return Ok(());
    };
    log::info!("Now playing: {:?}", first);
    controller.drain(&events)?;

    for _ in 1..args.plays {
        controller.synth_mut().finish();
        controller.drain(&events)?;
        log::info!("{}", controller.title());
    }

    controller.stop()?;

    log::info!("Played {} song(s):", controller.synth().history().len());
    for (i, path) in controller.synth().history().iter().enumerate() {
        log::info!("  [{}] {:?}", i + 1, path);
    }

    Ok(())
}
