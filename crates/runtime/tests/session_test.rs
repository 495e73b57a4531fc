use std::sync::Arc;

use game_core::{
    Achievement, Color, Difficulty, GuessError, GuessSequence, Milestone, Outcome, Round,
    RoundError,
};
use runtime::{BlobRepository, GameSession, InMemoryBlobRepo, RuntimeError};

fn session() -> GameSession {
    GameSession::builder().seed(7).build()
}

#[test]
fn guess_requires_login() {
    let mut session = session();
    let round = session.start_round(Difficulty::Easy);
    let guess = GuessSequence::new(round.reveal()).unwrap();

    let err = session.submit_guess(round, &guess).unwrap_err();
    assert!(matches!(err, RuntimeError::NoActiveUser));
}

#[test]
fn easy_perfect_round_updates_profile() {
    let mut session = session();
    session.login("alice").unwrap();

    let round = Round::from_hidden(Difficulty::Easy, &[Color::Cyan, Color::Blue]).unwrap();
    let guess = GuessSequence::new(&[Color::Cyan, Color::Blue]).unwrap();
    let record = session.submit_guess(round, &guess).unwrap();

    assert_eq!(record.id, 1);
    assert_eq!(record.outcome_label, Outcome::Great);
    assert_eq!(record.score, 2);
    assert_eq!(record.round_win_rate, 1.0);
    assert_eq!(record.target_colors, vec![Color::Cyan, Color::Blue]);

    let profile = session.fetch_profile("alice").unwrap();
    assert_eq!(profile.total_score, 2);
    assert_eq!(profile.games_played, 1);
    assert_eq!(profile.win_rate, 1.0);
    assert!(profile.milestones.first_easy_played);
}

#[test]
fn medium_partial_round() {
    let mut session = session();
    session.login("bob").unwrap();

    let round = Round::from_hidden(
        Difficulty::Medium,
        &[Color::Red, Color::Orange, Color::Yellow],
    )
    .unwrap();
    let guess = GuessSequence::new(&[Color::Orange, Color::Red, Color::Yellow]).unwrap();
    let record = session.submit_guess(round, &guess).unwrap();

    assert_eq!(record.outcome_label, Outcome::AlmostThere);
    assert_eq!(record.score, 2);
    assert!((record.round_win_rate - 1.0 / 3.0).abs() < 1e-9);
    assert_eq!(session.active_profile().unwrap().win_rate, 0.0);
}

#[test]
fn first_hard_great_unlocks_progress() {
    let mut session = session();
    session.login("carol").unwrap();

    let hidden = [Color::Red, Color::Green, Color::Blue, Color::Purple];
    let round = Round::from_hidden(Difficulty::Hard, &hidden).unwrap();
    let guess = GuessSequence::new(&hidden).unwrap();
    let report = session.play_round(round, &guess).unwrap();

    assert_eq!(report.record.score, 12);
    assert_eq!(report.progress.milestones.len(), 2);
    assert!(report.progress.milestones.contains(&Milestone::Over10Score));
    assert!(report.progress.milestones.contains(&Milestone::FirstHardPlayed));
    assert!(report.progress.achievements.contains(&Achievement::StrategicThinker));

    let profile = session.fetch_profile("carol").unwrap();
    assert_eq!(profile.total_score, 12);
    assert!(profile.milestones.over10_score);
    assert!(!profile.milestones.over20_score);
}

#[test]
fn score_milestone_crosses_on_third_round() {
    let mut session = session();
    session.login("dave").unwrap();

    let round = || {
        Round::from_hidden(
            Difficulty::Medium,
            &[Color::Red, Color::Orange, Color::Yellow],
        )
        .unwrap()
    };
    // Two hits on medium: 4 points, "Almost There".
    let guess = GuessSequence::new(&[Color::Red, Color::Orange, Color::Red]).unwrap();

    session.submit_guess(round(), &guess).unwrap();
    session.submit_guess(round(), &guess).unwrap();
    let profile = session.active_profile().unwrap();
    assert_eq!(profile.total_score, 8);
    assert!(!profile.milestones.over10_score);

    let report = session.play_round(round(), &guess).unwrap();
    assert_eq!(report.progress.milestones, vec![Milestone::Over10Score]);

    let profile = session.active_profile().unwrap();
    assert_eq!(profile.total_score, 12);
    assert_eq!(profile.games_played, 3);
    assert!(profile.milestones.over10_score);
}

#[test]
fn length_mismatch_changes_nothing() {
    let repo: Arc<dyn BlobRepository> = Arc::new(InMemoryBlobRepo::new());
    let mut session = GameSession::builder().repository(repo.clone()).seed(1).build();
    session.login("erin").unwrap();
    let stored_before = repo.load("users").unwrap();

    let round = session.start_round(Difficulty::Hard);
    let guess = GuessSequence::new(&[Color::Red, Color::Green]).unwrap();
    let err = session.submit_guess(round, &guess).unwrap_err();

    let rejected = match err {
        RuntimeError::Rejected(rejected) => rejected,
        other => panic!("expected a rejected guess, got {other:?}"),
    };
    assert_eq!(
        rejected.error,
        GuessError::LengthMismatch {
            expected: 4,
            actual: 2
        }
    );
    let profile = session.fetch_profile("erin").unwrap();
    assert!(profile.history.is_empty());
    assert_eq!(profile.games_played, 0);
    assert_eq!(repo.load("users").unwrap(), stored_before);
}

#[test]
fn rejected_round_is_returned_for_retry() {
    let mut session = session();
    session.login("kim").unwrap();

    let round = session.start_round(Difficulty::Medium);
    let hidden = round.reveal().to_vec();
    let short = GuessSequence::new(&hidden[..1]).unwrap();

    let round = match session.submit_guess(round, &short) {
        Err(RuntimeError::Rejected(rejected)) => rejected.into_round(),
        other => panic!("expected a rejected guess, got {other:?}"),
    };
    assert_eq!(round.reveal(), hidden.as_slice());

    let guess = GuessSequence::new(&hidden).unwrap();
    let record = session.submit_guess(round, &guess).unwrap();

    assert_eq!(record.id, 1);
    assert_eq!(record.outcome_label, Outcome::Great);
    let profile = session.active_profile().unwrap();
    assert_eq!(profile.games_played, 1);
    assert_eq!(profile.total_score, 6);
}

#[test]
fn each_round_yields_one_record() {
    let mut session = session();
    session.login("lee").unwrap();

    for _ in 0..5 {
        let round = session.start_round(Difficulty::Easy);
        let guess = GuessSequence::new(round.reveal()).unwrap();
        session.submit_guess(round, &guess).unwrap();
    }

    let profile = session.active_profile().unwrap();
    assert_eq!(profile.games_played, 5);
    assert_eq!(profile.history.len(), 5);
    assert_eq!(profile.total_score, 10);
}

#[test]
fn unknown_difficulty_is_rejected() {
    let mut session = session();
    let err = session.start_round_named("extreme").unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Round(RoundError::UnknownDifficulty { .. })
    ));

    let round = session.start_round_named("HARD").unwrap();
    assert_eq!(round.difficulty(), Difficulty::Hard);
}

#[test]
fn generated_rounds_respect_palette() {
    let mut session = session();
    for difficulty in Difficulty::ALL {
        for _ in 0..50 {
            let round = session.start_round(difficulty);
            let hidden = round.reveal();
            assert_eq!(hidden.len(), difficulty.slot_count());
            assert!(hidden.iter().all(|c| difficulty.allows(*c)));
            for (i, c) in hidden.iter().enumerate() {
                assert!(!hidden[i + 1..].contains(c));
            }
        }
    }
}

#[test]
fn same_seed_replays_same_rounds() {
    let mut a = GameSession::builder().seed(99).build();
    let mut b = GameSession::builder().seed(99).build();

    for _ in 0..20 {
        let ra = a.start_round(Difficulty::Hard);
        let rb = b.start_round(Difficulty::Hard);
        assert_eq!(ra.reveal(), rb.reveal());
    }
}

#[test]
fn profiles_persist_across_sessions() {
    let repo: Arc<dyn BlobRepository> = Arc::new(InMemoryBlobRepo::new());

    {
        let mut session = GameSession::builder().repository(repo.clone()).build();
        session.login("Frank").unwrap();
        let round = session.start_round(Difficulty::Easy);
        let guess = GuessSequence::new(round.reveal()).unwrap();
        session.submit_guess(round, &guess).unwrap();
    }

    let session = GameSession::builder().repository(repo).build();
    let profile = session.fetch_profile("frank").unwrap();
    assert_eq!(profile.username, "Frank");
    assert_eq!(profile.games_played, 1);
    assert_eq!(profile.total_score, 2);
    assert_eq!(profile.history[0].outcome_label, Outcome::Great);
}

#[test]
fn history_ids_are_sequential() {
    let mut session = session();
    session.login("gina").unwrap();

    for expected in 1..=5 {
        let round = session.start_round(Difficulty::Medium);
        let mut guess = round.blank_guess();
        for color in round.reveal() {
            guess.push(*color).unwrap();
        }
        let record = session.submit_guess(round, &guess).unwrap();
        assert_eq!(record.id, expected);
    }
    assert_eq!(session.active_profile().unwrap().history.len(), 5);
}

#[test]
fn fetch_missing_profile_is_none() {
    let session = session();
    assert!(session.fetch_profile("nobody").is_none());
}

#[test]
fn ensure_profile_does_not_log_in() {
    let mut session = session();
    session.ensure_profile("hal").unwrap();
    assert!(session.active_profile().is_none());
    assert!(!session.is_active("hal"));

    session.login("HAL").unwrap();
    assert!(session.is_active("hal"));
    assert_eq!(session.store().len(), 1);
}

#[test]
fn clear_all_data_logs_out() {
    let mut session = session();
    session.login("ivy").unwrap();
    session.clear_all_data().unwrap();

    assert!(session.active_profile().is_none());
    assert!(session.store().is_empty());
}
