//! Kiosk session driving the reducer through the event queue.

use std::sync::Arc;

use async_trait::async_trait;

use uketsuke::core::kiosk::{
    Action, Clip, KioskSession, MenuChoice, ReservationLookup, ResultContext, Screen,
};
use uketsuke::core::lookup::{LookupError, LookupResult};
use uketsuke::core::sheet::{
    FIELD_DEPARTMENT, FIELD_STAFF, FIELD_VISITOR_NAME, ReservationRecord,
};
use uketsuke::core::speech::{NullSink, SpeechClient};
use uketsuke::core::tts::{AudioData, SpeechResult, Synthesizer};

struct InstantSynth;

#[async_trait]
impl Synthesizer for InstantSynth {
    async fn synthesize(&self, text: &str) -> SpeechResult<AudioData> {
        Ok(AudioData {
            data: text.as_bytes().to_vec(),
            mime: "audio/wav".to_string(),
        })
    }
}

struct FixedLookup {
    records: Vec<ReservationRecord>,
}

#[async_trait]
impl ReservationLookup for FixedLookup {
    async fn lookup(&self, name: &str) -> Result<LookupResult, LookupError> {
        if name.trim().is_empty() {
            return Err(LookupError::InvalidArgument);
        }
        Ok(self
            .records
            .iter()
            .find(|r| r.visitor_name().contains(name))
            .cloned()
            .map(LookupResult::Found)
            .unwrap_or(LookupResult::NotFound))
    }
}

struct FailingLookup;

#[async_trait]
impl ReservationLookup for FailingLookup {
    async fn lookup(&self, _name: &str) -> Result<LookupResult, LookupError> {
        Err(LookupError::InvalidArgument)
    }
}

fn record(name: &str, department: &str, staff: &str) -> ReservationRecord {
    let mut r = ReservationRecord::new();
    r.insert(FIELD_VISITOR_NAME, name);
    r.insert(FIELD_DEPARTMENT, department);
    r.insert(FIELD_STAFF, staff);
    r
}

fn session_with(lookup: Arc<dyn ReservationLookup>) -> KioskSession {
    let speech = Arc::new(SpeechClient::new(
        Arc::new(InstantSynth),
        Arc::new(InstantSynth),
        Arc::new(NullSink),
    ));
    KioskSession::new(lookup, speech)
}

fn empty_session() -> KioskSession {
    session_with(Arc::new(FixedLookup {
        records: Vec::new(),
    }))
}

#[tokio::test]
async fn test_start_gesture_greets_then_unlocks_input() {
    let mut session = empty_session();

    session.dispatch(Action::Start);
    assert!(session.state().has_started);
    assert_eq!(session.state().screen, Screen::Menu);
    assert_eq!(session.state().clip, Clip::Greeting);
    assert!(session.state().is_speaking);

    // A menu choice while the greeting plays is a no-op.
    session.dispatch(Action::Choose(MenuChoice::Delivery));
    assert_eq!(session.state().screen, Screen::Menu);

    // Speech completion arrives through the queue.
    assert!(session.process_next().await);
    assert!(!session.state().is_speaking);

    session.dispatch(Action::Choose(MenuChoice::Delivery));
    assert_eq!(session.state().screen, Screen::Result);
    assert_eq!(session.state().clip, Clip::Delivery);
    assert_eq!(
        session.state().result,
        Some(ResultContext::StaffDispatch)
    );
}

async fn drive_to_name_input(session: &mut KioskSession) {
    session.dispatch(Action::Start);
    assert!(session.process_next().await); // greeting finished
    session.dispatch(Action::Choose(MenuChoice::Reservation));
    assert!(session.process_next().await); // ask-name finished
    assert_eq!(session.state().screen, Screen::NameInput);
}

#[tokio::test]
async fn test_name_search_without_match_warns() {
    let mut session = empty_session();
    drive_to_name_input(&mut session).await;

    session.dispatch(Action::InputChanged("鈴木".to_string()));
    session.dispatch(Action::SubmitName);
    assert!(session.state().is_loading);
    assert_eq!(session.state().clip, Clip::Thinking);

    assert!(session.process_next().await); // lookup settled
    assert_eq!(session.state().screen, Screen::Result);
    assert_eq!(session.state().clip, Clip::Warning);
    assert_eq!(session.state().result, Some(ResultContext::NotFound));
    assert!(!session.state().is_loading);

    assert!(session.process_next().await); // warning speech finished
    assert!(!session.state().is_speaking);
}

#[tokio::test]
async fn test_name_search_found_announces_staff() {
    let mut session = session_with(Arc::new(FixedLookup {
        records: vec![
            record("山田太郎", "営業部", "佐藤"),
            record("山田花子", "開発部", "鈴木"),
        ],
    }));
    drive_to_name_input(&mut session).await;

    session.dispatch(Action::InputChanged("山田".to_string()));
    session.dispatch(Action::SubmitName);
    assert!(session.process_next().await); // lookup settled

    assert_eq!(session.state().screen, Screen::Result);
    assert_eq!(session.state().clip, Clip::Agreeing);
    assert!(session.state().message.contains("山田太郎様ですね。"));
    match &session.state().result {
        Some(ResultContext::Found(found)) => {
            assert_eq!(found.visitor_name(), "山田太郎");
            assert_eq!(found.staff(), "佐藤");
        }
        other => panic!("expected Found context, got {other:?}"),
    }
}

#[tokio::test]
async fn test_lookup_failure_shows_generic_error() {
    let mut session = session_with(Arc::new(FailingLookup));
    drive_to_name_input(&mut session).await;

    session.dispatch(Action::InputChanged("山田".to_string()));
    session.dispatch(Action::SubmitName);
    assert!(session.process_next().await);

    assert_eq!(session.state().screen, Screen::Result);
    assert_eq!(session.state().clip, Clip::Warning);
    assert_eq!(session.state().result, Some(ResultContext::Error));
    assert!(session.state().message.contains("システムエラー"));
}

#[tokio::test]
async fn test_return_to_menu_resets_session() {
    let mut session = empty_session();
    drive_to_name_input(&mut session).await;

    session.dispatch(Action::InputChanged("鈴木".to_string()));
    session.dispatch(Action::SubmitName);
    assert!(session.process_next().await); // lookup settled
    assert!(session.process_next().await); // warning speech finished

    session.dispatch(Action::ReturnToMenu);
    assert_eq!(session.state().screen, Screen::Menu);
    assert_eq!(session.state().clip, Clip::Greeting);
    assert!(session.state().pending_input.is_empty());
    assert!(session.state().result.is_none());
    assert!(session.state().has_started);

    assert!(session.process_next().await); // greeting finished again
    assert!(!session.state().is_speaking);
}

#[tokio::test]
async fn test_double_submit_runs_one_lookup() {
    let mut session = empty_session();
    drive_to_name_input(&mut session).await;

    session.dispatch(Action::InputChanged("鈴木".to_string()));
    session.dispatch(Action::SubmitName);
    session.dispatch(Action::SubmitName); // guarded by is_loading

    // Exactly one settled lookup plus its speech completion in the queue.
    assert!(session.process_next().await);
    assert_eq!(session.state().screen, Screen::Result);
    assert!(session.process_next().await);
    assert!(!session.state().is_speaking);
}
