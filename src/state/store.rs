use crate::error::StorageError;
use crate::i18n::Translator;
use crate::model::AppState;
use crate::state::{apply, Action};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc;

/// Name of the durable slot holding the serialized tree.
pub const STATE_SLOT: &str = "strategy-toolkit-state";

pub trait StateStorage {
    /// `Ok(None)` when nothing usable is stored: no prior state or a payload
    /// that does not parse as an [`AppState`].
    fn load(&self) -> Result<Option<AppState>, StorageError>;

    fn save(&self, state: &AppState) -> Result<(), StorageError>;

    fn describe(&self) -> String;
}

#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    dir: PathBuf,
    slot: String,
}

impl JsonFileStorage {
    pub fn new(dir: impl Into<PathBuf>, slot: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            slot: slot.into(),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.slot))
    }

    fn tmp_path(&self) -> PathBuf {
        self.dir.join(format!("{}.json.tmp", self.slot))
    }
}

fn parse_state(path: &Path, data: &[u8]) -> Option<AppState> {
    match serde_json::from_slice::<AppState>(data) {
        Ok(state) => Some(state),
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "stored state is not a valid app state; starting fresh"
            );
            None
        }
    }
}

impl StateStorage for JsonFileStorage {
    fn load(&self) -> Result<Option<AppState>, StorageError> {
        let path = self.path();
        if !path.exists() {
            return Ok(None);
        }
        let data = fs::read(&path).map_err(|err| StorageError::io(&path, err))?;
        Ok(parse_state(&path, &data))
    }

    fn save(&self, state: &AppState) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(|err| StorageError::io(&self.dir, err))?;
        let final_path = self.path();
        let tmp_path = self.tmp_path();
        let bytes = serde_json::to_vec_pretty(state)?;

        fs::write(&tmp_path, bytes).map_err(|err| StorageError::io(&tmp_path, err))?;
        match fs::rename(&tmp_path, &final_path) {
            Ok(()) => Ok(()),
            Err(rename_err) => {
                if final_path.exists() {
                    fs::remove_file(&final_path)
                        .map_err(|err| StorageError::io(&final_path, err))?;
                    fs::rename(&tmp_path, &final_path)
                        .map_err(|err| StorageError::io(&final_path, err))
                } else {
                    Err(StorageError::io(&final_path, rename_err))
                }
            }
        }
    }

    fn describe(&self) -> String {
        self.path().display().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateChanged {
    pub revision: u64,
}

/// Owns the committed [`AppState`]. Every accepted action is reduced, written
/// to storage and announced to subscribers before `dispatch` returns.
pub struct Store {
    state: AppState,
    storage: Box<dyn StateStorage>,
    revision: u64,
    subscribers: Vec<mpsc::Sender<StateChanged>>,
}

impl Store {
    pub fn open(storage: Box<dyn StateStorage>) -> Self {
        let state = match storage.load() {
            Ok(Some(state)) => {
                tracing::info!(
                    storage = %storage.describe(),
                    projects = state.projects.len(),
                    canvases = state.canvas_count(),
                    "loaded saved state"
                );
                state.normalized()
            }
            Ok(None) => {
                tracing::info!(storage = %storage.describe(), "no saved state; starting empty");
                AppState::default()
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to read saved state; starting empty");
                AppState::default()
            }
        };

        Self {
            state,
            storage,
            revision: 0,
            subscribers: Vec::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn translator(&self) -> Translator {
        Translator::new(self.state.language)
    }

    /// Returns whether the action changed the committed state.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let kind = action.kind();
        match apply(&self.state, action, Utc::now()) {
            Some(next) => {
                tracing::trace!(action = kind, "action accepted");
                self.commit(next);
                true
            }
            None => {
                tracing::debug!(action = kind, "action rejected");
                false
            }
        }
    }

    /// Writes the committed state again, reporting failure to the caller.
    pub fn persist(&self) -> Result<(), StorageError> {
        self.storage.save(&self.state)
    }

    /// Re-reads the durable slot. A missing or unreadable payload keeps the
    /// in-memory state.
    pub fn reload(&mut self) -> bool {
        match self.storage.load() {
            Ok(Some(state)) => self.dispatch(Action::Hydrate(Box::new(state))),
            Ok(None) => false,
            Err(err) => {
                tracing::warn!(error = %err, "reload failed; keeping current state");
                false
            }
        }
    }

    pub fn subscribe(&mut self) -> mpsc::Receiver<StateChanged> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    fn commit(&mut self, next: AppState) {
        self.state = next;
        self.revision += 1;

        if let Err(err) = self.storage.save(&self.state) {
            tracing::warn!(error = %err, "failed to persist state; continuing in memory");
        }

        let event = StateChanged {
            revision: self.revision,
        };
        self.subscribers.retain(|tx| tx.send(event).is_ok());
    }
}

#[cfg(test)]
mod tests {
    use super::{JsonFileStorage, StateStorage, Store, STATE_SLOT};
    use crate::error::StorageError;
    use crate::model::{AppState, CanvasType, Language};
    use crate::state::{reduce, Action};
    use std::fs;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MemoryStorage {
        slot: Arc<Mutex<Option<String>>>,
        fail_writes: Arc<Mutex<bool>>,
        writes: Arc<Mutex<usize>>,
    }

    impl MemoryStorage {
        fn with_payload(payload: &str) -> Self {
            let storage = Self::default();
            *storage.slot.lock().unwrap() = Some(payload.to_string());
            storage
        }

        fn writes(&self) -> usize {
            *self.writes.lock().unwrap()
        }
    }

    impl StateStorage for MemoryStorage {
        fn load(&self) -> Result<Option<AppState>, StorageError> {
            let slot = self.slot.lock().unwrap();
            Ok(slot
                .as_deref()
                .and_then(|payload| serde_json::from_str(payload).ok()))
        }

        fn save(&self, state: &AppState) -> Result<(), StorageError> {
            if *self.fail_writes.lock().unwrap() {
                return Err(StorageError::io(
                    "memory",
                    io::Error::new(io::ErrorKind::PermissionDenied, "quota exceeded"),
                ));
            }
            *self.slot.lock().unwrap() = Some(serde_json::to_string(state)?);
            *self.writes.lock().unwrap() += 1;
            Ok(())
        }

        fn describe(&self) -> String {
            "memory".to_string()
        }
    }

    fn sample_state() -> AppState {
        let state = reduce(&AppState::default(), Action::AddProject { name: "Acme".into() });
        let state = reduce(
            &state,
            Action::AddCanvas {
                name: "Q1 Strategy".into(),
                canvas_type: CanvasType::Bmc,
            },
        );
        let item_id = state.current_canvas().expect("canvas").items[0].id.clone();
        let state = reduce(
            &state,
            Action::UpdateCanvasItem {
                item_id,
                content: "Line one\n<b>Line two</b>".into(),
            },
        );
        reduce(
            &state,
            Action::SetLanguage {
                language: Language::Zh,
            },
        )
    }

    #[test]
    fn file_storage_round_trips_state() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let storage = JsonFileStorage::new(dir.path(), STATE_SLOT);
        let state = sample_state();

        storage.save(&state).expect("state should save");
        assert!(storage.path().ends_with("strategy-toolkit-state.json"));
        assert!(!dir.path().join("strategy-toolkit-state.json.tmp").exists());

        let loaded = storage
            .load()
            .expect("state should load")
            .expect("slot should hold state");
        assert_eq!(loaded, state);
    }

    #[test]
    fn file_storage_overwrites_previous_payload() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let storage = JsonFileStorage::new(dir.path(), STATE_SLOT);

        storage.save(&AppState::default()).expect("first save");
        let state = sample_state();
        storage.save(&state).expect("second save");

        let loaded = storage.load().expect("load").expect("state");
        assert_eq!(loaded, state);
    }

    #[test]
    fn file_storage_missing_slot_loads_none() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let storage = JsonFileStorage::new(dir.path().join("nested"), STATE_SLOT);
        assert!(storage.load().expect("load should succeed").is_none());
    }

    #[test]
    fn file_storage_malformed_payload_loads_none() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let storage = JsonFileStorage::new(dir.path(), STATE_SLOT);
        fs::write(storage.path(), r#"{"projects": "not a list"}"#).expect("fixture should write");

        assert!(storage.load().expect("load should succeed").is_none());
    }

    #[test]
    fn open_falls_back_to_initial_state_on_malformed_payload() {
        let store = Store::open(Box::new(MemoryStorage::with_payload("{ definitely not json")));
        assert_eq!(store.state(), &AppState::default());
    }

    #[test]
    fn open_restores_saved_state() {
        let state = sample_state();
        let payload = serde_json::to_string(&state).expect("state should serialize");
        let store = Store::open(Box::new(MemoryStorage::with_payload(&payload)));
        assert_eq!(store.state(), &state);
        assert_eq!(store.translator().language(), Language::Zh);
    }

    #[test]
    fn open_reads_payload_written_by_earlier_sessions() {
        let payload = r#"{
  "projects": [
    {
      "id": "p-1",
      "name": "Acme",
      "createdAt": "2026-01-05T10:00:00.000Z",
      "canvases": [
        {
          "id": "c-1",
          "name": "Market",
          "type": "STP Analysis",
          "createdAt": "2026-01-05T10:01:00.000Z",
          "updatedAt": "2026-01-05T10:02:00.000Z",
          "items": [
            {
              "id": "i-1",
              "titleKey": "stp_segmentation",
              "placeholderKey": "stp_segmentation_placeholder",
              "guideKey": "stp_segmentation_guide",
              "content": "<p>Students</p>"
            }
          ]
        }
      ]
    }
  ],
  "currentProjectId": "p-1",
  "currentCanvasId": "c-1",
  "language": "en"
}"#;
        let store = Store::open(Box::new(MemoryStorage::with_payload(payload)));
        let canvas = store.state().current_canvas().expect("canvas should be selected");
        assert_eq!(canvas.canvas_type, CanvasType::Stp);
        assert_eq!(canvas.items[0].content, "<p>Students</p>");
    }

    #[test]
    fn dispatch_persists_every_accepted_action() {
        let storage = MemoryStorage::default();
        let mut store = Store::open(Box::new(storage.clone()));

        assert!(store.dispatch(Action::AddProject { name: "Acme".into() }));
        assert_eq!(storage.writes(), 1);
        assert!(!store.dispatch(Action::AddProject { name: " ".into() }));
        assert_eq!(storage.writes(), 1);

        let reopened = Store::open(Box::new(storage.clone()));
        assert_eq!(reopened.state(), store.state());
    }

    #[test]
    fn dispatch_survives_storage_failure() {
        let storage = MemoryStorage::default();
        *storage.fail_writes.lock().unwrap() = true;
        let mut store = Store::open(Box::new(storage.clone()));

        assert!(store.dispatch(Action::AddProject { name: "Acme".into() }));
        assert_eq!(store.state().projects.len(), 1);
        assert!(store.persist().is_err());
    }

    #[test]
    fn subscribers_receive_revision_per_accepted_action() {
        let mut store = Store::open(Box::new(MemoryStorage::default()));
        let rx = store.subscribe();

        store.dispatch(Action::AddProject { name: "Acme".into() });
        store.dispatch(Action::SelectCanvas {
            canvas_id: Some("missing".into()),
        });
        store.dispatch(Action::SetLanguage {
            language: Language::Zh,
        });

        let revisions: Vec<u64> = rx.try_iter().map(|event| event.revision).collect();
        assert_eq!(revisions, vec![1, 2]);
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn dropped_subscribers_are_pruned() {
        let mut store = Store::open(Box::new(MemoryStorage::default()));
        drop(store.subscribe());
        let rx = store.subscribe();

        store.dispatch(Action::AddProject { name: "Acme".into() });
        assert_eq!(store.subscribers.len(), 1);
        assert_eq!(rx.try_recv().map(|event| event.revision), Ok(1));
    }

    #[test]
    fn reload_hydrates_from_storage() {
        let storage = MemoryStorage::default();
        let mut store = Store::open(Box::new(storage.clone()));
        store.dispatch(Action::AddProject { name: "Acme".into() });

        let other = sample_state();
        *storage.slot.lock().unwrap() =
            Some(serde_json::to_string(&other).expect("state should serialize"));

        assert!(store.reload());
        assert_eq!(store.state(), &other);
    }

    #[test]
    fn reload_keeps_state_when_slot_is_malformed() {
        let storage = MemoryStorage::default();
        let mut store = Store::open(Box::new(storage.clone()));
        store.dispatch(Action::AddProject { name: "Acme".into() });
        let before = store.state().clone();

        *storage.slot.lock().unwrap() = Some("[]".to_string());
        assert!(!store.reload());
        assert_eq!(store.state(), &before);
    }
}
