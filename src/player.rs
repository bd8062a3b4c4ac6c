use anyhow::{Context, Result, anyhow};
use std::path::PathBuf;
use std::process::Stdio;
use tokio::{
  io::{AsyncBufReadExt, AsyncWriteExt, BufReader as TokioBufReader},
  net::UnixStream,
  process::{Child as TokioChild, Command},
  sync::mpsc,
  task::JoinHandle,
};
use tracing::{debug, info, warn};

use crate::channel::Channel;
use crate::constants::constants;

// --- Engine capability surface ---

/// Error classes reported by a streaming engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineErrorKind {
  Network,
  Media,
  Other,
}

/// Lifecycle events surfaced by a streaming engine instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
  /// Stream manifest parsed and the source attached; playback can begin.
  FileLoaded,
  Error { fatal: bool, kind: EngineErrorKind, message: String },
  /// The stream ended on its own (live streams normally never do).
  Ended,
}

/// Capability set the player controller needs from a streaming engine.
///
/// One instance maps to one playback session; the controller guarantees the
/// previous instance is destroyed before a new one is attached.
pub trait StreamEngine: Send {
  /// Begin (or, after a network error, restart) loading the configured source.
  fn start_load(&mut self) -> Result<()>;
  /// Ask the engine to recover from a media/decoding error in place.
  fn recover_media_error(&mut self) -> Result<()>;
  /// Begin playback of the loaded source.
  fn play(&mut self) -> Result<()>;
  /// Toggle fullscreen on the video surface. Independent of playback state.
  fn toggle_fullscreen(&mut self) -> Result<()>;
  /// Drain pending engine events without blocking.
  fn poll_events(&mut self) -> Vec<EngineEvent>;
  /// Release the engine and everything it holds. Must be idempotent.
  fn destroy(&mut self);
}

/// Tuning applied when creating an engine instance.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
  pub worker_decoding: bool,
  pub low_latency: bool,
  pub back_buffer_secs: u32,
}

impl EngineConfig {
  pub fn from_constants() -> Self {
    let c = constants();
    Self { worker_decoding: c.worker_decoding, low_latency: c.low_latency, back_buffer_secs: c.back_buffer_secs }
  }
}

// --- mpv engine ---

/// Streaming engine backed by an mpv subprocess driven over its JSON IPC
/// socket. Events flow in through a monitor task; commands flow out through
/// the same connection via an unbounded queue, keeping the trait methods
/// synchronous.
pub struct MpvEngine {
  child: Option<TokioChild>,
  url: String,
  events_rx: mpsc::UnboundedReceiver<EngineEvent>,
  cmd_tx: mpsc::UnboundedSender<String>,
  io_handle: Option<JoinHandle<()>>,
  socket_path: PathBuf,
  destroyed: bool,
}

impl MpvEngine {
  /// The engine is usable when the mpv binary resolves on PATH.
  pub fn is_supported() -> bool {
    std::env::var_os("PATH")
      .map(|paths| std::env::split_paths(&paths).any(|dir| dir.join("mpv").is_file()))
      .unwrap_or(false)
  }

  /// Spawn mpv in idle mode and connect the IPC monitor. The source is not
  /// loaded until `start_load`.
  pub fn create(config: &EngineConfig, url: &str) -> Result<Self> {
    let socket_path = std::env::temp_dir().join(format!("telly-mpv-{}.sock", std::process::id()));
    // Remove stale socket if it exists from a previous crash.
    let _ = std::fs::remove_file(&socket_path);
    let socket_str = socket_path.to_str().context("temp dir path is not valid UTF-8")?.to_string();

    let mut cmd = Command::new("mpv");
    cmd.arg(format!("--input-ipc-server={}", socket_str));
    // Idle mode keeps the process alive across load errors so retries and
    // media recovery can reuse the same instance.
    cmd.arg("--idle=yes");
    cmd.arg("--really-quiet");
    cmd.arg(format!("--cache-secs={}", config.back_buffer_secs));
    if config.low_latency {
      cmd.arg("--profile=low-latency");
    }
    if config.worker_decoding {
      // 0 = auto thread count for the decoder pool.
      cmd.arg("--vd-lavc-threads=0");
    }
    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::null());
    cmd.stderr(Stdio::null());

    let child = cmd.spawn().map_err(|e| {
      if e.kind() == std::io::ErrorKind::NotFound {
        anyhow!("mpv not found on PATH")
      } else {
        anyhow!(e).context("failed to spawn mpv")
      }
    })?;

    let (event_tx, events_rx) = mpsc::unbounded_channel();
    let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
    let io_handle = tokio::spawn(ipc_pump(socket_path.clone(), cmd_rx, event_tx));

    Ok(Self {
      child: Some(child),
      url: url.to_string(),
      events_rx,
      cmd_tx,
      io_handle: Some(io_handle),
      socket_path,
      destroyed: false,
    })
  }

  fn send(&self, command: serde_json::Value) -> Result<()> {
    let mut line = command.to_string();
    line.push('\n');
    self.cmd_tx.send(line).map_err(|_| anyhow!("engine IPC channel closed"))
  }
}

impl StreamEngine for MpvEngine {
  fn start_load(&mut self) -> Result<()> {
    self.send(serde_json::json!({ "command": ["loadfile", self.url, "replace"] }))
  }

  fn recover_media_error(&mut self) -> Result<()> {
    // In-place recovery: reload the current source without tearing the
    // process down, keeping the window and cache.
    self.send(serde_json::json!({ "command": ["loadfile", self.url, "replace"] }))
  }

  fn play(&mut self) -> Result<()> {
    self.send(serde_json::json!({ "command": ["set_property", "pause", false] }))
  }

  fn toggle_fullscreen(&mut self) -> Result<()> {
    self.send(serde_json::json!({ "command": ["cycle", "fullscreen"] }))
  }

  fn poll_events(&mut self) -> Vec<EngineEvent> {
    let mut events = Vec::new();
    while let Ok(event) = self.events_rx.try_recv() {
      events.push(event);
    }
    events
  }

  fn destroy(&mut self) {
    if self.destroyed {
      return;
    }
    self.destroyed = true;
    if let Some(handle) = self.io_handle.take() {
      handle.abort();
    }
    if let Some(mut child) = self.child.take() {
      if let Err(e) = child.start_kill() {
        warn!(err = %e, "engine: failed to kill mpv");
      }
      // Reap in the background so teardown never blocks the UI loop.
      tokio::spawn(async move {
        let _ = child.wait().await;
      });
    }
    let _ = std::fs::remove_file(&self.socket_path);
  }
}

/// Monitor task: connects to the mpv IPC socket, pushes queued commands out
/// and translates incoming mpv events into `EngineEvent`s.
async fn ipc_pump(
  socket_path: PathBuf,
  mut cmd_rx: mpsc::UnboundedReceiver<String>,
  event_tx: mpsc::UnboundedSender<EngineEvent>,
) {
  let Some(stream) = connect_with_retry(&socket_path).await else {
    let _ = event_tx.send(EngineEvent::Error {
      fatal: true,
      kind: EngineErrorKind::Other,
      message: "engine IPC socket did not come up".to_string(),
    });
    return;
  };
  let (read_half, mut write_half) = stream.into_split();

  // Subscribe to error-level log lines; they arrive as non-fatal events.
  let subscribe = "{\"command\":[\"request_log_messages\",\"error\"]}\n";
  if write_half.write_all(subscribe.as_bytes()).await.is_err() {
    return;
  }

  let mut lines = TokioBufReader::new(read_half).lines();
  loop {
    tokio::select! {
      cmd = cmd_rx.recv() => match cmd {
        Some(cmd) => {
          if write_half.write_all(cmd.as_bytes()).await.is_err() {
            break;
          }
        }
        None => break,
      },
      line = lines.next_line() => match line {
        Ok(Some(line)) => {
          if let Some(event) = parse_ipc_event(&line)
            && event_tx.send(event).is_err()
          {
            break;
          }
        }
        // Socket closed: the process died out from under us.
        _ => {
          let _ = event_tx.send(EngineEvent::Error {
            fatal: true,
            kind: EngineErrorKind::Other,
            message: "engine process exited unexpectedly".to_string(),
          });
          break;
        }
      },
    }
  }
}

/// The IPC socket appears shortly after mpv starts; poll for it briefly.
async fn connect_with_retry(socket_path: &PathBuf) -> Option<UnixStream> {
  for _ in 0..50 {
    if let Ok(stream) = UnixStream::connect(socket_path).await {
      return Some(stream);
    }
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;
  }
  None
}

/// Map one line of mpv IPC output onto the engine event model.
fn parse_ipc_event(line: &str) -> Option<EngineEvent> {
  let value: serde_json::Value = serde_json::from_str(line).ok()?;
  match value.get("event")?.as_str()? {
    "file-loaded" => Some(EngineEvent::FileLoaded),
    "end-file" => match value.get("reason").and_then(|r| r.as_str()) {
      Some("error") => {
        let message =
          value.get("file_error").and_then(|e| e.as_str()).unwrap_or("unknown engine error").to_string();
        Some(EngineEvent::Error { fatal: true, kind: classify_error(&message), message })
      }
      Some("eof") => Some(EngineEvent::Ended),
      _ => None,
    },
    "log-message" => {
      let text = value.get("text")?.as_str()?.trim().to_string();
      if text.is_empty() {
        return None;
      }
      Some(EngineEvent::Error { fatal: false, kind: EngineErrorKind::Other, message: text })
    }
    _ => None,
  }
}

/// Bucket an mpv end-file error string into the retry taxonomy.
fn classify_error(message: &str) -> EngineErrorKind {
  let message = message.to_lowercase();
  if message.contains("loading failed") || message.contains("network") || message.contains("could not open") {
    EngineErrorKind::Network
  } else if message.contains("format") || message.contains("decod") || message.contains("nothing to play") {
    EngineErrorKind::Media
  } else {
    EngineErrorKind::Other
  }
}

// --- Player controller ---

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PlayerState {
  #[default]
  Idle,
  Loading,
  Playing,
  /// Unrecoverable; carries the user-visible message.
  Fatal(String),
}

/// Owns the single playback session: at most one engine instance, bound to
/// at most one channel, with teardown-before-create ordering guaranteed.
pub struct Player {
  pub state: PlayerState,
  pub current: Option<Channel>,
  engine: Option<Box<dyn StreamEngine>>,
  network_retries: u32,
  media_recoveries: u32,
}

impl Player {
  pub fn new() -> Self {
    Self { state: PlayerState::Idle, current: None, engine: None, network_retries: 0, media_recoveries: 0 }
  }

  /// Whether a session (including a failed one) is on screen.
  pub fn is_active(&self) -> bool {
    !matches!(self.state, PlayerState::Idle)
  }

  /// Open a channel with the production mpv engine.
  pub fn open(&mut self, channel: Channel) {
    self.close();
    if !MpvEngine::is_supported() {
      warn!(channel = %channel.name, "player: engine unavailable");
      self.current = Some(channel);
      self.state = PlayerState::Fatal(constants().msg_engine_unsupported.clone());
      return;
    }
    match MpvEngine::create(&EngineConfig::from_constants(), &channel.url) {
      Ok(engine) => self.attach(Box::new(engine), channel),
      Err(e) => {
        warn!(err = %e, channel = %channel.name, "player: engine creation failed");
        self.current = Some(channel);
        self.state = PlayerState::Fatal(constants().msg_playback_failed.clone());
      }
    }
  }

  /// Attach a freshly created engine and start loading. Any previous session
  /// is fully torn down first.
  pub fn attach(&mut self, mut engine: Box<dyn StreamEngine>, channel: Channel) {
    self.close();
    info!(channel = %channel.name, url = %channel.url, "player: opening");
    match engine.start_load() {
      Ok(()) => {
        self.engine = Some(engine);
        self.current = Some(channel);
        self.state = PlayerState::Loading;
      }
      Err(e) => {
        warn!(err = %e, "player: initial load failed");
        engine.destroy();
        self.current = Some(channel);
        self.state = PlayerState::Fatal(constants().msg_playback_failed.clone());
      }
    }
  }

  /// Drain engine events and run the state machine transitions. Called once
  /// per UI tick.
  pub fn pump(&mut self) {
    let events = match self.engine.as_mut() {
      Some(engine) => engine.poll_events(),
      None => return,
    };
    for event in events {
      self.handle_event(event);
    }
  }

  fn handle_event(&mut self, event: EngineEvent) {
    match event {
      EngineEvent::FileLoaded => {
        self.network_retries = 0;
        self.media_recoveries = 0;
        self.state = PlayerState::Playing;
        if let Some(engine) = self.engine.as_mut()
          && let Err(e) = engine.play()
        {
          // The autoplay analog: a refused play command is logged, not fatal.
          warn!(err = %e, "player: play command refused");
        }
      }
      EngineEvent::Error { fatal: false, message, .. } => {
        debug!(msg = %message, "player: non-fatal engine error");
      }
      EngineEvent::Error { fatal: true, kind, message } => {
        self.handle_fatal(kind, &message);
      }
      EngineEvent::Ended => {
        info!("player: stream ended");
        self.close();
      }
    }
  }

  fn handle_fatal(&mut self, kind: EngineErrorKind, message: &str) {
    warn!(kind = ?kind, msg = %message, "player: fatal engine error");
    match kind {
      EngineErrorKind::Network if self.network_retries < constants().max_network_retries => {
        self.network_retries += 1;
        self.state = PlayerState::Loading;
        if let Some(engine) = self.engine.as_mut()
          && engine.start_load().is_ok()
        {
          info!(attempt = self.network_retries, "player: retrying network load");
          return;
        }
      }
      EngineErrorKind::Media if self.media_recoveries < constants().max_media_recoveries => {
        self.media_recoveries += 1;
        if let Some(engine) = self.engine.as_mut()
          && engine.recover_media_error().is_ok()
        {
          info!(attempt = self.media_recoveries, "player: recovering from media error");
          return;
        }
      }
      _ => {}
    }
    // Out of recovery options: release the engine and surface the failure.
    if let Some(mut engine) = self.engine.take() {
      engine.destroy();
    }
    self.state = PlayerState::Fatal(constants().msg_playback_failed.clone());
  }

  /// Tear down the active session. Safe to call repeatedly; a no-op when
  /// already Idle.
  pub fn close(&mut self) {
    if let Some(mut engine) = self.engine.take() {
      engine.destroy();
    }
    self.current = None;
    self.network_retries = 0;
    self.media_recoveries = 0;
    self.state = PlayerState::Idle;
  }

  /// Fullscreen is a side channel: forwarded regardless of playback state,
  /// failures logged only.
  pub fn toggle_fullscreen(&mut self) {
    if let Some(engine) = self.engine.as_mut()
      && let Err(e) = engine.toggle_fullscreen()
    {
      warn!(err = %e, "player: fullscreen toggle failed");
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::channel::test_channel;
  use std::collections::VecDeque;
  use std::sync::atomic::{AtomicBool, Ordering};
  use std::sync::{Arc, Mutex};

  // --- mock engine ---

  #[derive(Default, Clone)]
  struct MockHandles {
    calls: Arc<Mutex<Vec<&'static str>>>,
    events: Arc<Mutex<VecDeque<EngineEvent>>>,
    destroyed: Arc<AtomicBool>,
  }

  impl MockHandles {
    fn push_event(&self, event: EngineEvent) {
      self.events.lock().unwrap().push_back(event);
    }

    fn calls(&self) -> Vec<&'static str> {
      self.calls.lock().unwrap().clone()
    }
  }

  struct MockEngine {
    handles: MockHandles,
    fail_start_load: bool,
  }

  impl MockEngine {
    fn new(handles: &MockHandles) -> Box<Self> {
      Box::new(Self { handles: handles.clone(), fail_start_load: false })
    }
  }

  impl StreamEngine for MockEngine {
    fn start_load(&mut self) -> Result<()> {
      self.handles.calls.lock().unwrap().push("start_load");
      if self.fail_start_load { Err(anyhow!("refused")) } else { Ok(()) }
    }

    fn recover_media_error(&mut self) -> Result<()> {
      self.handles.calls.lock().unwrap().push("recover_media_error");
      Ok(())
    }

    fn play(&mut self) -> Result<()> {
      self.handles.calls.lock().unwrap().push("play");
      Ok(())
    }

    fn toggle_fullscreen(&mut self) -> Result<()> {
      self.handles.calls.lock().unwrap().push("toggle_fullscreen");
      Ok(())
    }

    fn poll_events(&mut self) -> Vec<EngineEvent> {
      self.handles.events.lock().unwrap().drain(..).collect()
    }

    fn destroy(&mut self) {
      self.handles.calls.lock().unwrap().push("destroy");
      self.handles.destroyed.store(true, Ordering::SeqCst);
    }
  }

  fn fatal(kind: EngineErrorKind) -> EngineEvent {
    EngineEvent::Error { fatal: true, kind, message: "boom".to_string() }
  }

  // --- lifecycle ---

  #[test]
  fn attach_transitions_to_loading() {
    let handles = MockHandles::default();
    let mut player = Player::new();
    player.attach(MockEngine::new(&handles), test_channel("BBC One", "Entertainment"));
    assert_eq!(player.state, PlayerState::Loading);
    assert_eq!(handles.calls(), vec!["start_load"]);
  }

  #[test]
  fn file_loaded_starts_playback() {
    let handles = MockHandles::default();
    let mut player = Player::new();
    player.attach(MockEngine::new(&handles), test_channel("BBC One", "Entertainment"));
    handles.push_event(EngineEvent::FileLoaded);
    player.pump();
    assert_eq!(player.state, PlayerState::Playing);
    assert_eq!(handles.calls(), vec!["start_load", "play"]);
  }

  #[test]
  fn close_is_idempotent() {
    let handles = MockHandles::default();
    let mut player = Player::new();
    player.attach(MockEngine::new(&handles), test_channel("BBC One", "Entertainment"));
    player.close();
    player.close();
    assert_eq!(player.state, PlayerState::Idle);
    assert!(player.current.is_none());
    assert!(player.engine.is_none());
  }

  #[test]
  fn attach_tears_down_previous_session_first() {
    let first = MockHandles::default();
    let second = MockHandles::default();
    let mut player = Player::new();
    player.attach(MockEngine::new(&first), test_channel("BBC One", "Entertainment"));
    player.attach(MockEngine::new(&second), test_channel("World News", "General"));
    assert!(first.destroyed.load(Ordering::SeqCst));
    assert!(!second.destroyed.load(Ordering::SeqCst));
    assert_eq!(player.current.as_ref().map(|c| c.name.as_str()), Some("World News"));
  }

  #[test]
  fn failed_initial_load_destroys_engine() {
    let handles = MockHandles::default();
    let mut engine = MockEngine::new(&handles);
    engine.fail_start_load = true;
    let mut player = Player::new();
    player.attach(engine, test_channel("BBC One", "Entertainment"));
    assert_eq!(player.state, PlayerState::Fatal(constants().msg_playback_failed.clone()));
    assert!(handles.destroyed.load(Ordering::SeqCst));
  }

  // --- error recovery ---

  #[test]
  fn fatal_other_error_surfaces_message_and_releases_engine() {
    let handles = MockHandles::default();
    let mut player = Player::new();
    player.attach(MockEngine::new(&handles), test_channel("BBC One", "Entertainment"));
    handles.push_event(EngineEvent::FileLoaded);
    player.pump();
    handles.push_event(fatal(EngineErrorKind::Other));
    player.pump();
    assert_eq!(
      player.state,
      PlayerState::Fatal("Unable to play this stream. Please try another channel.".to_string())
    );
    assert!(player.engine.is_none(), "no dangling engine instance");
    assert!(handles.destroyed.load(Ordering::SeqCst));
  }

  #[test]
  fn network_errors_retry_within_bound() {
    let handles = MockHandles::default();
    let mut player = Player::new();
    player.attach(MockEngine::new(&handles), test_channel("BBC One", "Entertainment"));
    handles.push_event(fatal(EngineErrorKind::Network));
    player.pump();
    assert_eq!(player.state, PlayerState::Loading);
    // attach + one retry
    assert_eq!(handles.calls().iter().filter(|c| **c == "start_load").count(), 2);
  }

  #[test]
  fn network_retries_are_bounded() {
    let handles = MockHandles::default();
    let mut player = Player::new();
    player.attach(MockEngine::new(&handles), test_channel("BBC One", "Entertainment"));
    for _ in 0..=constants().max_network_retries {
      handles.push_event(fatal(EngineErrorKind::Network));
      player.pump();
    }
    assert!(matches!(player.state, PlayerState::Fatal(_)));
    assert!(handles.destroyed.load(Ordering::SeqCst));
  }

  #[test]
  fn media_errors_attempt_in_place_recovery() {
    let handles = MockHandles::default();
    let mut player = Player::new();
    player.attach(MockEngine::new(&handles), test_channel("BBC One", "Entertainment"));
    handles.push_event(EngineEvent::FileLoaded);
    player.pump();
    handles.push_event(fatal(EngineErrorKind::Media));
    player.pump();
    assert_eq!(player.state, PlayerState::Playing);
    assert!(handles.calls().contains(&"recover_media_error"));
  }

  #[test]
  fn successful_load_resets_retry_budget() {
    let handles = MockHandles::default();
    let mut player = Player::new();
    player.attach(MockEngine::new(&handles), test_channel("BBC One", "Entertainment"));
    for _ in 0..constants().max_network_retries {
      handles.push_event(fatal(EngineErrorKind::Network));
      player.pump();
    }
    handles.push_event(EngineEvent::FileLoaded);
    player.pump();
    assert_eq!(player.network_retries, 0);
    handles.push_event(fatal(EngineErrorKind::Network));
    player.pump();
    assert_eq!(player.state, PlayerState::Loading);
  }

  #[test]
  fn non_fatal_errors_leave_state_alone() {
    let handles = MockHandles::default();
    let mut player = Player::new();
    player.attach(MockEngine::new(&handles), test_channel("BBC One", "Entertainment"));
    handles.push_event(EngineEvent::FileLoaded);
    player.pump();
    handles.push_event(EngineEvent::Error {
      fatal: false,
      kind: EngineErrorKind::Network,
      message: "transient".to_string(),
    });
    player.pump();
    assert_eq!(player.state, PlayerState::Playing);
  }

  #[test]
  fn ended_stream_returns_to_idle() {
    let handles = MockHandles::default();
    let mut player = Player::new();
    player.attach(MockEngine::new(&handles), test_channel("BBC One", "Entertainment"));
    handles.push_event(EngineEvent::Ended);
    player.pump();
    assert_eq!(player.state, PlayerState::Idle);
    assert!(handles.destroyed.load(Ordering::SeqCst));
  }

  // --- fullscreen side channel ---

  #[test]
  fn fullscreen_forwards_regardless_of_state() {
    let handles = MockHandles::default();
    let mut player = Player::new();
    player.attach(MockEngine::new(&handles), test_channel("BBC One", "Entertainment"));
    player.toggle_fullscreen();
    assert!(handles.calls().contains(&"toggle_fullscreen"));
  }

  // --- mpv event mapping ---

  #[test]
  fn parse_file_loaded() {
    assert_eq!(parse_ipc_event(r#"{"event":"file-loaded"}"#), Some(EngineEvent::FileLoaded));
  }

  #[test]
  fn parse_end_file_error_classifies_network() {
    let event =
      parse_ipc_event(r#"{"event":"end-file","reason":"error","file_error":"loading failed or was aborted"}"#);
    assert_eq!(
      event,
      Some(EngineEvent::Error {
        fatal: true,
        kind: EngineErrorKind::Network,
        message: "loading failed or was aborted".to_string(),
      })
    );
  }

  #[test]
  fn parse_end_file_error_classifies_media() {
    let event = parse_ipc_event(r#"{"event":"end-file","reason":"error","file_error":"unrecognized file format"}"#);
    assert!(matches!(event, Some(EngineEvent::Error { kind: EngineErrorKind::Media, .. })));
  }

  #[test]
  fn parse_end_file_eof_is_ended() {
    assert_eq!(parse_ipc_event(r#"{"event":"end-file","reason":"eof"}"#), Some(EngineEvent::Ended));
  }

  #[test]
  fn parse_log_message_is_non_fatal() {
    let event = parse_ipc_event(r#"{"event":"log-message","level":"error","text":"stale segment\n"}"#);
    assert_eq!(
      event,
      Some(EngineEvent::Error { fatal: false, kind: EngineErrorKind::Other, message: "stale segment".to_string() })
    );
  }

  #[test]
  fn parse_ignores_unrelated_events() {
    assert_eq!(parse_ipc_event(r#"{"event":"playback-restart"}"#), None);
    assert_eq!(parse_ipc_event("not json"), None);
  }
}
