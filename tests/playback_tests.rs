// Playback state machine tests driven through a session

use algotty::algorithms::Algorithm;
use algotty::config::Settings;
use algotty::errors::VizError;
use algotty::playback::{PlaybackState, Speed};
use algotty::session::Session;
use algotty::structures::{Structure, StructureKind};
use std::time::{Duration, Instant};

fn loaded_session(speed: Speed) -> Session {
    let settings = Settings {
        speed,
        ..Settings::default()
    };
    let mut session = Session::new(Structure::sample(StructureKind::Array), settings);
    session
        .generate_run(Algorithm::BubbleSort)
        .expect("bubble sort failed");
    session
}

#[test]
fn test_reset_from_every_state() {
    let t0 = Instant::now();
    let setups: [fn(&mut Session, Instant); 4] = [
        |_, _| {},
        |s, now| s.play(now).expect("play failed"),
        |s, _| s.step_forward().expect("step failed"),
        |s, _| s.jump_to_end().expect("jump failed"),
    ];
    for setup in setups {
        let mut session = loaded_session(Speed::Normal);
        setup(&mut session, t0);
        session.reset();
        let once = (session.state(), session.cursor(), session.run().is_some());
        session.reset();
        let twice = (session.state(), session.cursor(), session.run().is_some());
        assert_eq!(once, (PlaybackState::Idle, 0, false));
        assert_eq!(once, twice);
    }
}

#[test]
fn test_cursor_bounds() {
    let mut session = loaded_session(Speed::Normal);
    let last = session.run().expect("run loaded").last_index();

    session.step_backward().expect("step failed");
    assert_eq!(session.cursor(), 0);

    session.jump_to(last + 100).expect("jump failed");
    assert_eq!(session.cursor(), last);
    session.step_forward().expect("step failed");
    assert_eq!(session.cursor(), last);
    assert_eq!(session.state(), PlaybackState::Complete);
}

#[test]
fn test_autoplay_reaches_complete_and_stops() {
    let mut session = loaded_session(Speed::Quadruple);
    let interval = Speed::Quadruple.interval();
    let last = session.run().expect("run loaded").last_index();
    let mut now = Instant::now();
    session.play(now).expect("play failed");

    let mut moves = 0;
    for _ in 0..(last + 10) {
        now += interval;
        if session.tick(now) {
            moves += 1;
        }
    }
    assert_eq!(moves, last);
    assert_eq!(session.cursor(), last);
    assert_eq!(session.state(), PlaybackState::Complete);
}

#[test]
fn test_no_stale_ticks_after_pause_or_reset() {
    let t0 = Instant::now();
    let mut session = loaded_session(Speed::Quadruple);
    session.play(t0).expect("play failed");
    assert!(session.tick(t0 + Duration::from_millis(100)));
    session.pause();
    let paused_at = session.cursor();
    for ms in (200..2000).step_by(100) {
        assert!(!session.tick(t0 + Duration::from_millis(ms)));
    }
    assert_eq!(session.cursor(), paused_at);

    session.play(t0 + Duration::from_secs(2)).expect("play failed");
    session.reset();
    assert!(!session.tick(t0 + Duration::from_secs(10)));
    assert_eq!(session.state(), PlaybackState::Idle);
}

#[test]
fn test_play_while_playing_keeps_one_timer() {
    let t0 = Instant::now();
    let mut session = loaded_session(Speed::Quadruple);
    session.play(t0).expect("play failed");
    let token = session.playback().timer_token();
    session
        .play(t0 + Duration::from_millis(50))
        .expect("play failed");
    assert_eq!(session.playback().timer_token(), token);
    // Still on the original schedule
    assert!(session.tick(t0 + Duration::from_millis(100)));
}

#[test]
fn test_controls_need_a_run() {
    let mut session = Session::new(Structure::sample(StructureKind::Stack), Settings::default());
    assert_eq!(session.play(Instant::now()), Err(VizError::NoRun));
    assert_eq!(session.step_forward(), Err(VizError::NoRun));
    assert_eq!(session.jump_to(3), Err(VizError::NoRun));
    assert!(session.current_step().is_none());
    assert_eq!(session.state(), PlaybackState::Idle);
}

#[test]
fn test_new_run_resets_cursor() {
    let mut session = loaded_session(Speed::Normal);
    session.jump_to(5).expect("jump failed");
    session
        .generate_run(Algorithm::MergeSort)
        .expect("merge sort failed");
    assert_eq!(session.cursor(), 0);
    assert_eq!(session.state(), PlaybackState::Ready);
}
