//! Playback orchestration
//!
//! Reacts to synthesizer events the way the player window does: rebuild the
//! track table when a song starts, refresh a row when a track changes, and
//! move on to the next playlist entry when a song ends.

use super::config::PlayerConfig;
use super::discovery::is_midi_file;
use crate::model::{file_name, Playlist, TrackInfo, TrackRow};
use crate::synth::{SynthEvent, Synthesizer};
use anyhow::{bail, Context, Result};
use crossbeam_channel::Receiver;
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "MidiPlayer";

/// Drives a synthesizer from a playlist and tracks what is on screen
pub struct PlaybackController<S: Synthesizer> {
    synth: S,
    playlist: Playlist,
    config: PlayerConfig,

    /// Where to persist `config` when playback stops (None = don't persist)
    config_path: Option<PathBuf>,

    /// One row per track, conductor excluded
    tracks: Vec<TrackRow>,
    title: String,
}

impl<S: Synthesizer> PlaybackController<S> {
    /// Create a controller, restoring the previous session from `config`
    pub fn new(mut synth: S, config: PlayerConfig) -> Self {
        // only restore when both files are still there
        if config.has_sound_font() && config.has_midi_file() {
            if let (Some(sf), Some(midi)) = (&config.sound_font_path, &config.midi_file_path) {
                log::info!("Restoring previous session: {:?} with {:?}", midi, sf);
                synth.set_sound_font(sf);
                synth.set_midi_file(midi);
            }
        }

        let playlist = config.build_playlist();
        if playlist.is_ready() {
            log::info!("Restored playlist with {} track(s)", playlist.len());
        }

        Self {
            synth,
            playlist,
            config,
            config_path: None,
            tracks: Vec::new(),
            title: APP_NAME.to_string(),
        }
    }

    /// Save the config to `path` every time playback is stopped
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Load a sound font, stopping playback first
    pub fn load_sound_font(&mut self, path: &Path) -> Result<PathBuf> {
        self.stop_if_playing()?;

        let path = fs::canonicalize(path)
            .with_context(|| format!("Sound font not found: {:?}", path))?;
        self.synth.set_sound_font(&path);
        self.config.sound_font_path = Some(path.clone());

        log::info!("Sound font loaded: {:?}", path);
        Ok(path)
    }

    /// Load the MIDI file played when the playlist is empty
    pub fn load_midi_file(&mut self, path: &Path) -> Result<PathBuf> {
        if !is_midi_file(path) {
            bail!("Not a MIDI file: {:?}", path);
        }
        self.stop_if_playing()?;

        let path = fs::canonicalize(path)
            .with_context(|| format!("MIDI file not found: {:?}", path))?;
        self.synth.set_midi_file(&path);
        self.config.midi_file_path = Some(path.clone());

        log::info!("MIDI file loaded: {:?}", path);
        Ok(path)
    }

    /// Append a MIDI file to the playlist
    pub fn enqueue(&mut self, path: &Path) -> Result<()> {
        if !is_midi_file(path) {
            bail!("Not a MIDI file: {:?}", path);
        }

        let entry = path
            .to_str()
            .with_context(|| format!("Path is not valid UTF-8: {:?}", path))?
            .to_owned();
        self.playlist.add(entry.clone());
        self.config.playlist.push(entry);
        Ok(())
    }

    /// Start playback: next playlist entry if any, else the loaded MIDI file
    ///
    /// Returns the file started, or None when there is nothing to play.
    pub fn start(&mut self) -> Result<Option<PathBuf>> {
        let target = if self.playlist.is_ready() {
            PathBuf::from(self.playlist.next_track()?)
        } else if let Some(midi) = self
            .config
            .midi_file_path
            .as_ref()
            .filter(|_| self.config.has_midi_file())
        {
            midi.clone()
        } else {
            log::warn!("Nothing to play: no MIDI file and an empty playlist");
            return Ok(None);
        };

        self.synth.set_midi_file(&target);
        self.synth
            .start()
            .with_context(|| format!("Failed to start playback: {:?}", target))?;
        Ok(Some(target))
    }

    /// Stop playback and persist the config
    pub fn stop(&mut self) -> Result<()> {
        self.synth.stop().context("Failed to stop playback")?;

        for row in &mut self.tracks {
            row.sounding = false;
        }

        if let Some(path) = &self.config_path {
            self.config.save(path)?;
        }
        Ok(())
    }

    fn stop_if_playing(&mut self) -> Result<()> {
        if self.synth.is_playing() {
            self.stop()?;
        }
        Ok(())
    }

    /// React to one synthesizer notification
    pub fn handle_event(&mut self, event: SynthEvent) -> Result<()> {
        match event {
            SynthEvent::Started => self.on_started(),
            SynthEvent::Ended => self.on_ended()?,
            SynthEvent::Updated(info) => self.on_updated(&info),
            SynthEvent::Playbacking { tick } => log::trace!("Playing tick {}", tick),
        }
        Ok(())
    }

    /// Handle every event already queued, without blocking
    ///
    /// Events published while handling (e.g. `Started` after a song ends)
    /// are handled in the same call. Returns how many were handled.
    pub fn drain(&mut self, events: &Receiver<SynthEvent>) -> Result<usize> {
        let mut handled = 0;
        for event in events.try_iter() {
            self.handle_event(event)?;
            handled += 1;
        }
        Ok(handled)
    }

    fn on_started(&mut self) {
        log::info!("Started called.");

        let midi = self.synth.midi_file().map(file_name).unwrap_or_default();
        let sound_font = self.synth.sound_font().map(file_name).unwrap_or_default();
        self.title = format!("{}: {} {}", APP_NAME, midi, sound_font);

        self.tracks = vec![TrackRow::placeholder(); self.synth.track_count()];
    }

    fn on_ended(&mut self) -> Result<()> {
        log::info!("Ended called.");
        self.synth.stop()?;

        if self.playlist.is_ready() {
            let next = PathBuf::from(self.playlist.next_track()?);
            log::info!("Next in playlist: {:?}", next);
            self.synth.set_midi_file(&next);
        }

        self.synth.start()
    }

    fn on_updated(&mut self, info: &TrackInfo) {
        // track 0 is the conductor track and has no row
        let Some(row) = info
            .index
            .checked_sub(1)
            .and_then(|i| self.tracks.get_mut(i))
        else {
            log::warn!("Update for unknown track {} ignored", info.index);
            return;
        };

        *row = TrackRow::from_info(info, self.synth.voice_name(info.index));
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn tracks(&self) -> &[TrackRow] {
        &self.tracks
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    pub fn synth(&self) -> &S {
        &self.synth
    }

    pub fn synth_mut(&mut self) -> &mut S {
        &mut self.synth
    }
}
